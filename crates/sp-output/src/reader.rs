//! Readers for files written by [`TextWriter`](crate::TextWriter).

use std::io::Read;

use csv::ReaderBuilder;

use crate::{AgentRow, GroupRow, OutputError, OutputResult};

/// Read every line of an `agents.txt` stream.
pub fn read_agents<R: Read>(reader: R) -> OutputResult<Vec<AgentRow>> {
    read_with(reader, AgentRow::from_record)
}

/// Read every line of a `carpools.txt` or `public_transit.txt` stream.
pub fn read_groups<R: Read>(reader: R) -> OutputResult<Vec<GroupRow>> {
    read_with(reader, GroupRow::from_record)
}

fn read_with<T, R, F>(reader: R, parse: F) -> OutputResult<Vec<T>>
where
    R: Read,
    F: Fn(&csv::StringRecord, u64) -> OutputResult<T>,
{
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let line = i as u64 + 1;
        let record = record.map_err(|e| OutputError::Parse { line, reason: e.to_string() })?;
        rows.push(parse(&record, line)?);
    }
    Ok(rows)
}
