//! `sp-transit` — how agents get to work.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                           |
//! |--------------|--------------------------------------------------------------------|
//! | [`sampler`]  | `CommuteSampler` — census-weighted travel times, modes, carpool sizes |
//! | [`group`]    | `Destination`, `Carpool`, `PublicTransit`                          |
//! | [`registry`] | `TransitRegistry` — idempotent creation of carpool and transit ids |
//! | [`error`]    | `TransitError`, `TransitResult<T>`                                 |
//!
//! # Travel model
//!
//! A commute is a (travel time, mode) pair drawn independently from the
//! census tables.  Travel time buckets are represented by their midpoint
//! (open-ended buckets by their lower bound).  Multiplying the time by the
//! mode's speed gives the distance the agent's workplace is expected to lie
//! at; `sp-gen` uses that to pick the workplace.
//!
//! Agents sharing a mode and a destination are then packed into concrete
//! groups.  A destination is either "in town" or an out-of-town zipcode.

pub mod error;
pub mod group;
pub mod registry;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use error::{TransitError, TransitResult};
pub use group::{Carpool, Destination, PublicTransit};
pub use registry::TransitRegistry;
pub use sampler::CommuteSampler;
