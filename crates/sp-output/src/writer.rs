//! The `PopulationWriter` trait implemented by output backends.

use crate::{AgentRow, GroupRow, OutputResult};

/// Sink for a finished population.
pub trait PopulationWriter {
    /// Write agent rows, in id order.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    fn write_carpools(&mut self, rows: &[GroupRow]) -> OutputResult<()>;

    fn write_public_transit(&mut self, rows: &[GroupRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
