//! `sp-core` — foundational types for the `synthpop` population generator.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `HouseholdId`, `WorkplaceId`, `SchoolId`, …      |
//! | [`geo`]      | `GeoPoint`, haversine distance in kilometres                |
//! | [`mode`]     | `CommuteMode` enum                                          |
//! | [`config`]   | `PopulationConfig`, `ModeSpeeds`                            |
//! | [`rng`]      | `SimRng` (the single generator every pass draws from)       |
//! | [`error`]    | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModeSpeeds, PopulationConfig};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{
    AgentId, CarpoolId, HospitalId, HouseholdId, RetirementHomeId, SchoolId, TransitId,
    WorkplaceId,
};
pub use mode::CommuteMode;
pub use rng::SimRng;
