//! Scalar inputs of a generation run.

use crate::{CommuteMode, CoreError, CoreResult};

/// Miles per hour → kilometres per minute.
const MPH_TO_KM_PER_MIN: f64 = 1.6 / 60.0;

// ── ModeSpeeds ────────────────────────────────────────────────────────────────

/// Average door-to-door speed of each commute mode, miles per hour.
///
/// Multiplied by a sampled travel time to get the commute distance a
/// workplace is expected to lie at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeSpeeds {
    pub car:     f64,
    pub carpool: f64,
    pub public:  f64,
    pub walk:    f64,
    pub other:   f64,
    pub wfh:     f64,
}

impl ModeSpeeds {
    /// Speed of `mode` in kilometres per minute.
    pub fn km_per_min(&self, mode: CommuteMode) -> f64 {
        let mph = match mode {
            CommuteMode::Car          => self.car,
            CommuteMode::Carpool      => self.carpool,
            CommuteMode::Public       => self.public,
            CommuteMode::Walk         => self.walk,
            CommuteMode::Other        => self.other,
            CommuteMode::WorkFromHome => self.wfh,
        };
        mph * MPH_TO_KM_PER_MIN
    }
}

impl Default for ModeSpeeds {
    fn default() -> Self {
        Self { car: 30.0, carpool: 30.0, public: 20.0, walk: 2.0, other: 3.0, wfh: 0.0 }
    }
}

// ── PopulationConfig ──────────────────────────────────────────────────────────

/// Top-level generation configuration.
///
/// Typically loaded from a JSON file by the application crate.  Defaults
/// describe a mid-sized suburban town.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationConfig {
    /// Number of agents to generate.  The age ledger sums to exactly this.
    pub total_agents: u32,

    /// Oldest possible age; open-ended census brackets stop here.
    pub max_age: u8,

    /// Residential units in the town, vacant ones included.
    pub total_units: u32,

    /// Fraction of residential units that stay empty.
    pub fr_vacancy: f64,

    /// Probability that a multi-person household is a family.
    pub fr_families: f64,

    /// Probability that a two-person family under 60 is a childless couple.
    pub fr_couple: f64,

    /// Probability that a 3+ person family is a single parent with children.
    pub fr_single_parent: f64,

    /// Fraction of households with a 60+ member; also the acceptance
    /// probability for 60+ ages drawn outside their target bracket.
    pub fr_60: f64,

    /// Number of agents seeded as infected.
    pub n_infected: u32,

    /// Number of commute (time, mode) slots to sample.
    pub n_employed: u32,

    /// Youngest working age.
    pub min_working_age: u8,

    /// Oldest working age.
    pub max_working_age: u8,

    /// Travel times at or below this (minutes) are work-from-home.
    pub t_wfh: f64,

    /// Travel times at or below this (minutes) are walking commutes.
    pub t_walk: f64,

    /// Largest accepted difference between implied and true commute
    /// distance, kilometres.
    pub workplace_tolerance_km: f64,

    /// Number of least-filled candidate workplaces to choose among.
    pub least_filled_pool: usize,

    /// Per-mode travel speeds.
    pub mode_speeds: ModeSpeeds,

    /// Master RNG seed.  The same seed always produces the same town.
    pub seed: u64,

    /// Iteration cap on every resample-until-accepted loop.
    pub max_resample_attempts: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            total_agents:           79_205,
            max_age:                100,
            total_units:            29_645,
            fr_vacancy:             0.053,
            fr_families:            0.6727,
            fr_couple:              0.49,
            fr_single_parent:       0.25,
            fr_60:                  0.423,
            n_infected:             1,
            n_employed:             39_758,
            min_working_age:        16,
            max_working_age:        70,
            t_wfh:                  5.0,
            t_walk:                 12.0,
            workplace_tolerance_km: 5.0,
            least_filled_pool:      20,
            mode_speeds:            ModeSpeeds::default(),
            seed:                   42,
            max_resample_attempts:  1_000_000,
        }
    }
}

impl PopulationConfig {
    /// Households that will be occupied: `floor(units × (1 − vacancy))`.
    pub fn occupied_households(&self) -> u32 {
        (self.total_units as f64 * (1.0 - self.fr_vacancy)).floor() as u32
    }

    /// `true` if `age` is inside the working-age window.
    #[inline]
    pub fn is_working_age(&self, age: u8) -> bool {
        age >= self.min_working_age && age <= self.max_working_age
    }

    /// Reject configurations no population can be generated from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.total_agents == 0 {
            return Err(CoreError::Config("total_agents must be positive".into()));
        }
        let fractions = [
            ("fr_vacancy",       self.fr_vacancy),
            ("fr_families",      self.fr_families),
            ("fr_couple",        self.fr_couple),
            ("fr_single_parent", self.fr_single_parent),
            ("fr_60",            self.fr_60),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::Config(format!("{name} = {value} is outside [0, 1]")));
            }
        }
        if self.min_working_age > self.max_working_age {
            return Err(CoreError::Config(format!(
                "min_working_age {} exceeds max_working_age {}",
                self.min_working_age, self.max_working_age
            )));
        }
        if self.n_infected > self.total_agents {
            return Err(CoreError::Config(format!(
                "n_infected {} exceeds total_agents {}",
                self.n_infected, self.total_agents
            )));
        }
        if self.least_filled_pool == 0 {
            return Err(CoreError::Config("least_filled_pool must be positive".into()));
        }
        Ok(())
    }
}
