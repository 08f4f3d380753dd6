//! Pass observer trait for progress reporting.

use crate::{PopulationContext, PopulationSummary};

/// The assignment passes, in execution order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    Institutions,
    Households,
    Schools,
    Work,
    Occupations,
    Transit,
    Infection,
}

impl Pass {
    pub const ALL: [Pass; 7] = [
        Pass::Institutions,
        Pass::Households,
        Pass::Schools,
        Pass::Work,
        Pass::Occupations,
        Pass::Transit,
        Pass::Infection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Pass::Institutions => "institutions",
            Pass::Households   => "households",
            Pass::Schools      => "schools",
            Pass::Work         => "work",
            Pass::Occupations  => "occupations",
            Pass::Transit      => "transit",
            Pass::Infection    => "infection",
        }
    }
}

/// Callbacks invoked by
/// [`PopulationContext::generate`][crate::PopulationContext::generate]
/// around every pass.
///
/// All methods have default no-op implementations.
pub trait PassObserver {
    fn on_pass_start(&mut self, _pass: Pass) {}

    /// Called after `pass` completed; the context reflects its result.
    fn on_pass_end(&mut self, _pass: Pass, _ctx: &PopulationContext) {}

    /// Called once after the last pass.
    fn on_generation_end(&mut self, _summary: &PopulationSummary) {}
}

/// A [`PassObserver`] that does nothing.
pub struct NoopObserver;

impl PassObserver for NoopObserver {}
