//! The `PopulationContext` and the pass sequence.

use log::info;

use sp_agent::AgentRoster;
use sp_census::{AgeLedger, HouseholdSizeTable, OccupationMap, OccupationStats};
use sp_core::{AgentId, HouseholdId, PopulationConfig, SimRng};
use sp_places::{Hospital, Household, RetirementHome, School, Workplace};
use sp_transit::{CommuteSampler, TransitRegistry};

use crate::{
    GenResult, Pass, PassObserver, PopulationSummary, grouping, households, infection,
    institutions, occupation, schools, work,
};

/// All mutable state of one generation run.
///
/// Created by [`PopulationBuilder`][crate::PopulationBuilder]; every pass
/// takes it by `&mut` and leaves its results behind for the next one.
pub struct PopulationContext {
    pub config: PopulationConfig,

    // ── Census ────────────────────────────────────────────────────────────
    /// People still to be generated, per age bracket.  Reaches zero after
    /// the household pass.
    pub ages:            AgeLedger,
    /// Household heads still to be drawn, per age bracket.
    pub head_ages:       AgeLedger,
    pub household_sizes: HouseholdSizeTable,
    pub occupations:     OccupationStats,
    pub occupation_map:  OccupationMap,
    pub sampler:         CommuteSampler,

    // ── Inventories ───────────────────────────────────────────────────────
    pub households:       Vec<Household>,
    pub retirement_homes: Vec<RetirementHome>,
    pub hospitals:        Vec<Hospital>,
    pub schools:          Vec<School>,
    /// Employee counters are incremented by the work pass.
    pub workplaces:       Vec<Workplace>,
    pub transit:          TransitRegistry,

    // ── Population ────────────────────────────────────────────────────────
    pub roster:               AgentRoster,
    /// Residents created by the retirement-home pass; backfill places
    /// overflow elderly with one of them.
    pub retirement_residents: Vec<AgentId>,
    /// Households of size 4 or more, candidates for backfill.
    pub large_households:     Vec<HouseholdId>,
    /// Households left empty by the vacancy draw.
    pub vacant:               Vec<HouseholdId>,

    pub rng: SimRng,
}

impl PopulationContext {
    /// Run every pass in order and summarize the result.
    ///
    /// Stops at the first fatal error; the context is then partially
    /// populated and should be discarded.
    pub fn generate<O: PassObserver>(&mut self, observer: &mut O) -> GenResult<PopulationSummary> {
        for pass in Pass::ALL {
            observer.on_pass_start(pass);
            self.run_pass(pass)?;
            info!("{} pass done: {} agents", pass.as_str(), self.roster.len());
            observer.on_pass_end(pass, self);
        }

        let summary = PopulationSummary::collect(self);
        observer.on_generation_end(&summary);
        Ok(summary)
    }

    /// Run a single pass.  Passes assume their predecessors already ran.
    pub fn run_pass(&mut self, pass: Pass) -> GenResult<()> {
        match pass {
            Pass::Institutions => {
                institutions::assign_retirement_homes(self)?;
                institutions::assign_hospital_patients(self)?;
            }
            Pass::Households  => households::assign_households(self)?,
            Pass::Schools     => {
                schools::assign_schools(self);
            }
            Pass::Work        => {
                work::assign_work(self)?;
            }
            Pass::Occupations => {
                occupation::assign_occupations(self);
            }
            Pass::Transit     => {
                grouping::group_carpools(self);
                grouping::group_public_transit(self);
            }
            Pass::Infection   => {
                infection::seed_infections(self)?;
            }
        }
        Ok(())
    }
}
