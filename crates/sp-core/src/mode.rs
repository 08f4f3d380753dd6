//! Commute mode enum shared by the sampler, the work pass, and the writers.

use std::str::FromStr;

use crate::CoreError;

/// How an agent gets to work.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommuteMode {
    /// Drives alone.
    Car,
    /// Shares a private vehicle with other commuters.
    Carpool,
    /// Bus, rail, ferry…
    Public,
    /// On foot.
    Walk,
    /// Bicycle, motorcycle, taxi and anything else the census lumps together.
    Other,
    /// Works from home; never travels.
    WorkFromHome,
}

impl CommuteMode {
    /// Every mode, in census table order.
    pub const ALL: [CommuteMode; 6] = [
        CommuteMode::Car,
        CommuteMode::Carpool,
        CommuteMode::Public,
        CommuteMode::Walk,
        CommuteMode::Other,
        CommuteMode::WorkFromHome,
    ];

    /// Replacement pool for a `wfh` sample whose travel time is too long to
    /// be working from home.
    pub const TRAVELLING: [CommuteMode; 5] = [
        CommuteMode::Car,
        CommuteMode::Carpool,
        CommuteMode::Public,
        CommuteMode::Walk,
        CommuteMode::Other,
    ];

    /// Replacement pool for a `walk` sample whose travel time is too long to
    /// be walking.
    pub const RIDING: [CommuteMode; 4] = [
        CommuteMode::Car,
        CommuteMode::Carpool,
        CommuteMode::Public,
        CommuteMode::Other,
    ];

    /// Label used in census tables and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            CommuteMode::Car          => "car",
            CommuteMode::Carpool      => "carpool",
            CommuteMode::Public       => "public",
            CommuteMode::Walk         => "walk",
            CommuteMode::Other        => "other",
            CommuteMode::WorkFromHome => "wfh",
        }
    }
}

impl FromStr for CommuteMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "car"     => Ok(CommuteMode::Car),
            "carpool" => Ok(CommuteMode::Carpool),
            "public"  => Ok(CommuteMode::Public),
            "walk"    => Ok(CommuteMode::Walk),
            "other"   => Ok(CommuteMode::Other),
            "wfh"     => Ok(CommuteMode::WorkFromHome),
            other     => Err(CoreError::Parse(format!("unknown commute mode {other:?}"))),
        }
    }
}

impl std::fmt::Display for CommuteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
