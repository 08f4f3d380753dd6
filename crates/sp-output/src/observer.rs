//! `OutputObserver<W>` — bridges `PassObserver` to a `PopulationWriter`.

use log::info;

use sp_gen::{Pass, PassObserver, PopulationContext};

use crate::writer::PopulationWriter;
use crate::{AgentRow, GroupRow, OutputError, OutputResult};

/// Write the roster and every commute group of `ctx` to `writer`, then
/// finish it.
pub fn write_population<W: PopulationWriter>(writer: &mut W, ctx: &PopulationContext) -> OutputResult<()> {
    let agents: Vec<AgentRow> = ctx.roster.iter().map(AgentRow::from).collect();
    let carpools: Vec<GroupRow> = ctx.transit.carpools().iter().map(GroupRow::from).collect();
    let public: Vec<GroupRow> = ctx.transit.public_transit().iter().map(GroupRow::from).collect();

    writer.write_agents(&agents)?;
    writer.write_carpools(&carpools)?;
    writer.write_public_transit(&public)?;
    writer.finish()?;
    info!(
        "wrote {} agents, {} carpools, {} public transit groups",
        agents.len(),
        carpools.len(),
        public.len()
    );
    Ok(())
}

/// A [`PassObserver`] that writes the population once the final pass is
/// done.
///
/// Errors from the writer are stored internally because `PassObserver`
/// methods have no return value.  After `generate()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct OutputObserver<W: PopulationWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: PopulationWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `generate()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: PopulationWriter> PassObserver for OutputObserver<W> {
    fn on_pass_end(&mut self, pass: Pass, ctx: &PopulationContext) {
        if pass != Pass::Infection {
            return;
        }
        if let Err(e) = write_population(&mut self.writer, ctx) {
            self.last_error.get_or_insert(e);
        }
    }
}
