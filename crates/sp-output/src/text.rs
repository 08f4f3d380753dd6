//! Space-separated text backend.
//!
//! Creates three files in the output directory:
//! - `agents.txt`
//! - `carpools.txt`
//! - `public_transit.txt`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::PopulationWriter;
use crate::{AgentRow, GroupRow, OutputResult};

pub const AGENTS_FILE: &str = "agents.txt";
pub const CARPOOLS_FILE: &str = "carpools.txt";
pub const PUBLIC_TRANSIT_FILE: &str = "public_transit.txt";

/// Writes a population as three headerless, space-separated files.
pub struct TextWriter {
    agents:   Writer<File>,
    carpools: Writer<File>,
    public:   Writer<File>,
    finished: bool,
}

impl TextWriter {
    /// Create (or truncate) the three files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            agents:   open(&dir.join(AGENTS_FILE))?,
            carpools: open(&dir.join(CARPOOLS_FILE))?,
            public:   open(&dir.join(PUBLIC_TRANSIT_FILE))?,
            finished: false,
        })
    }
}

fn open(path: &Path) -> OutputResult<Writer<File>> {
    Ok(WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)?)
}

impl PopulationWriter for TextWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(row.to_record())?;
        }
        Ok(())
    }

    fn write_carpools(&mut self, rows: &[GroupRow]) -> OutputResult<()> {
        for row in rows {
            self.carpools.write_record(row.to_record())?;
        }
        Ok(())
    }

    fn write_public_transit(&mut self, rows: &[GroupRow]) -> OutputResult<()> {
        for row in rows {
            self.public.write_record(row.to_record())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.carpools.flush()?;
        self.public.flush()?;
        Ok(())
    }
}
