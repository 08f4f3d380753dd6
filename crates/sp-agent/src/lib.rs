//! `sp-agent` — the agent record and the roster that owns every agent.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`agent`]   | `Agent`, `Home`, `WorkSite`, `SpecialWork`                |
//! | [`roster`]  | `AgentRoster` (sequential ids from 1, never deletes)      |
//!
//! # Lifecycle
//!
//! An agent is created exactly once, by an institutional, household, or
//! backfill pass, through [`AgentRoster::spawn`].  Its id never changes.
//! Later passes only mutate fields in place: the school pass sets school
//! fields, the work pass work and commute fields, the grouping pass carpool
//! and transit ids, and infection seeding `is_infected`.

pub mod agent;
pub mod roster;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Home, SpecialWork, WorkSite};
pub use roster::AgentRoster;
