//! `sp-gen` — turns census tables and building inventories into a population.
//!
//! # Pipeline
//!
//! ```text
//! PopulationBuilder::new(config, census, places).build()?   → PopulationContext
//! ctx.generate(&mut observer)?                              → PopulationSummary
//!
//!   ① Institutions — retirement-home residents and hospital patients
//!   ② Households   — vacancies, heads, household sizes, members, backfill
//!   ③ Schools      — daycare through college by age
//!   ④ Work         — work from home, commute sampling, workplace selection
//!   ⑤ Occupations  — in-town labels, census back-assignment for outside jobs
//!   ⑥ Transit      — carpool units and public-transit groups
//!   ⑦ Infection    — initially infected agents
//! ```
//!
//! Every pass mutates the one [`PopulationContext`]; each must finish before
//! the next starts.  Ledger and capacity failures abort with a [`GenError`];
//! sampling degradation and soft shortfalls are only logged.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`builder`]      | `PopulationBuilder`                                       |
//! | [`context`]      | `PopulationContext`, `generate`                           |
//! | [`institutions`] | retirement-home and hospital passes                       |
//! | [`households`]   | `HouseholdHead`, household pass                           |
//! | [`schools`]      | school pass                                               |
//! | [`work`]         | work pass, `select_workplace`                             |
//! | [`occupation`]   | occupation back-assignment and report                     |
//! | [`grouping`]     | carpool and public-transit grouping                       |
//! | [`infection`]    | infection seeding                                         |
//! | [`summary`]      | `PopulationSummary`                                       |
//! | [`observer`]     | `Pass`, `PassObserver`, `NoopObserver`                    |
//! | [`error`]        | `GenError`, `GenResult<T>`                                |

pub mod builder;
pub mod context;
pub mod error;
pub mod grouping;
pub mod households;
pub mod infection;
pub mod institutions;
pub mod observer;
pub mod occupation;
pub mod schools;
pub mod summary;
pub mod work;


pub use builder::PopulationBuilder;
pub use context::PopulationContext;
pub use error::{GenError, GenResult};
pub use households::HouseholdHead;
pub use observer::{NoopObserver, Pass, PassObserver};
pub use summary::{AgeCount, InstitutionCount, PopulationSummary};
pub use work::select_workplace;
