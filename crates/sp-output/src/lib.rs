//! `sp-output` — flat-file output for generated populations.
//!
//! Three space-separated files without headers are written into the output
//! directory:
//!
//! | File                 | One line per    | Fields                                   |
//! |----------------------|-----------------|------------------------------------------|
//! | `agents.txt`         | agent, by id    | the 22 columns of [`AgentRow`]           |
//! | `carpools.txt`       | carpool unit    | id, kind, travel time, destination       |
//! | `public_transit.txt` | transit group   | id, kind, travel time, destination       |
//!
//! Booleans are `0`/`1`, absent ids `0`, a missing commute mode `None` and a
//! missing occupation `none`.  An in-town destination is written as `0`.
//! Labels containing spaces are double-quoted.
//!
//! [`OutputObserver`] plugs a [`PopulationWriter`] into generation so that
//! the files are written as soon as the last pass finishes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{OutputObserver, TextWriter};
//!
//! let writer = TextWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! ctx.generate(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod error;
pub mod observer;
pub mod reader;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use observer::{OutputObserver, write_population};
pub use reader::{read_agents, read_groups};
pub use row::{AgentRow, GroupRow, NO_ID, NO_MODE, NO_OCCUPATION};
pub use text::TextWriter;
pub use writer::PopulationWriter;
