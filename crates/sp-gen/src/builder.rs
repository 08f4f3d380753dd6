//! Fluent builder for constructing a [`PopulationContext`].

use sp_agent::AgentRoster;
use sp_census::{AgeLedger, CensusTables};
use sp_core::{PopulationConfig, SimRng};
use sp_places::Places;
use sp_transit::{CommuteSampler, TransitRegistry};

use crate::{GenError, GenResult, PopulationContext};

/// Fluent builder for [`PopulationContext`].
///
/// # Required inputs
///
/// - [`PopulationConfig`] — population size, household fractions, thresholds, seed
/// - [`CensusTables`] — age ledgers and distribution tables
/// - [`Places`] — households, institutions, workplaces, transit routes
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                     |
/// |-------------------|-----------------------------|
/// | `.seed(s)`        | `config.seed`               |
/// | `.head_ages(l)`   | `census.head_ages`          |
///
/// # Example
///
/// ```rust,ignore
/// let census = CensusTables::load_dir(&dir, &config)?;
/// let places = Places::load_dir(&dir)?;
/// let mut ctx = PopulationBuilder::new(config, census, places).build()?;
/// let summary = ctx.generate(&mut NoopObserver)?;
/// ```
pub struct PopulationBuilder {
    config:    PopulationConfig,
    census:    CensusTables,
    places:    Places,
    seed:      Option<u64>,
    head_ages: Option<AgeLedger>,
}

impl PopulationBuilder {
    pub fn new(config: PopulationConfig, census: CensusTables, places: Places) -> Self {
        Self { config, census, places, seed: None, head_ages: None }
    }

    /// Override the RNG seed without touching the config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the household-head ledger.
    pub fn head_ages(mut self, ledger: AgeLedger) -> Self {
        self.head_ages = Some(ledger);
        self
    }

    /// Validate inputs and return a context ready for
    /// [`generate`](PopulationContext::generate).
    pub fn build(self) -> GenResult<PopulationContext> {
        self.config.validate()?;
        let census = self.census;
        let places = self.places;

        // ── Validate ──────────────────────────────────────────────────────
        let total = census.ages.total_remaining();
        if total != self.config.total_agents as u64 {
            return Err(GenError::Config(format!(
                "age ledger holds {total} people, config asks for {}",
                self.config.total_agents
            )));
        }
        if let Some((_, oldest)) = census.ages.age_span() {
            if oldest > self.config.max_age {
                return Err(GenError::Config(format!(
                    "age bracket reaches {oldest}, beyond max_age {}",
                    self.config.max_age
                )));
            }
        }
        if self.config.n_employed > 0 && places.workplaces.is_empty() {
            return Err(GenError::Config("agents are employed but there are no workplaces".into()));
        }

        let sampler = CommuteSampler::new(
            &census.travel_times,
            &census.travel_modes,
            &census.carpool_sizes,
            &self.config,
        )?;
        let rng = SimRng::new(self.seed.unwrap_or(self.config.seed));

        Ok(PopulationContext {
            ages:                 census.ages,
            head_ages:            self.head_ages.unwrap_or(census.head_ages),
            household_sizes:      census.household_sizes,
            occupations:          census.occupations,
            occupation_map:       census.occupation_map,
            sampler,
            households:           places.households,
            retirement_homes:     places.retirement_homes,
            hospitals:            places.hospitals,
            schools:              places.schools,
            workplaces:           places.workplaces,
            transit:              TransitRegistry::new(places.routes),
            roster:               AgentRoster::new(),
            retirement_residents: Vec::new(),
            large_households:     Vec::new(),
            vacant:               Vec::new(),
            rng,
            config:               self.config,
        })
    }
}
