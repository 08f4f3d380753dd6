//! `sp-places` — the building inventories a population is distributed over.
//!
//! Inventories come from GIS processing done elsewhere; this crate only holds
//! them as typed records with coordinates and capacities.  Everything is
//! immutable during generation except [`Workplace::employees`], which the
//! work pass increments as it hires.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`household`]  | `Household`                                               |
//! | [`institution`]| `RetirementHome`, `Hospital`, `School`, `SchoolTier`      |
//! | [`workplace`]  | `Workplace`, `WorkplaceKind`                              |
//! | [`route`]      | `TransitRoute`, `RouteTable`                              |
//! | [`loader`]     | CSV readers, `Places` bundle                              |
//! | [`error`]      | `PlacesError`, `PlacesResult<T>`                          |

pub mod error;
pub mod household;
pub mod institution;
pub mod loader;
pub mod route;
pub mod workplace;

#[cfg(test)]
mod tests;

pub use error::{PlacesError, PlacesResult};
pub use household::Household;
pub use institution::{Hospital, RetirementHome, School, SchoolTier};
pub use loader::{
    Places, load_households, load_hospitals, load_no_public_transit, load_retirement_homes,
    load_routes, load_schools, load_workplaces,
};
pub use route::{RouteTable, TransitRoute};
pub use workplace::{Workplace, WorkplaceKind};
