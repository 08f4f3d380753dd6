//! CSV census loaders.
//!
//! # File formats
//!
//! All files are comma-separated with a header row.
//!
//! | File                     | Columns                           | Notes                                  |
//! |--------------------------|-----------------------------------|----------------------------------------|
//! | `age_distribution.csv`   | `min_age,max_age,percent`         | empty `max_age` = up to `max_age`      |
//! | `household_head_age.csv` | `min_age,max_age,percent`         | same format                            |
//! | `household_size.csv`     | `size,percent`                    | sizes 1–4, 4 meaning "4 or more"       |
//! | `travel_time.csv`        | `bucket,fraction`                 | buckets `a-b` or `a+`                  |
//! | `travel_mode.csv`        | `mode,percent`                    | `car`, `carpool`, `public`, `walk`, `other`, `wfh` |
//! | `carpool_size.csv`       | `size,fraction`                   | sizes 2, 3, 4                          |
//! | `occupation_stats.csv`   | `occupation,count,percent`        |                                        |
//! | `occupation_map.csv`     | `category,occupation`             | occupation `None` = use the category   |
//!
//! ```csv
//! min_age,max_age,percent
//! 0,4,5.6
//! 5,9,6.1
//! 85,,2.4
//! ```

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use sp_core::{CommuteMode, PopulationConfig};

use crate::{
    AgeLedger, AgeShare, CensusError, CensusResult, HouseholdSizeTable, OccupationCensus,
    OccupationMap, OccupationStats, TimeBucket, WeightedTable,
};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AgeRecord {
    min_age: u8,
    max_age: Option<u8>,
    percent: f64,
}

#[derive(Deserialize)]
struct SizeRecord {
    size:    u8,
    percent: f64,
}

#[derive(Deserialize)]
struct TimeRecord {
    bucket:   String,
    fraction: f64,
}

#[derive(Deserialize)]
struct ModeRecord {
    mode:    String,
    percent: f64,
}

#[derive(Deserialize)]
struct CarpoolRecord {
    size:     u8,
    fraction: f64,
}

#[derive(Deserialize)]
struct OccupationRecord {
    occupation: String,
    count:      u32,
    percent:    f64,
}

#[derive(Deserialize)]
struct OccupationMapRecord {
    category:   String,
    occupation: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read an age table.  Open-ended rows stop at `max_age`.
pub fn load_age_shares<R: Read>(reader: R, max_age: u8) -> CensusResult<Vec<AgeShare>> {
    let rows: Vec<AgeRecord> = read_rows(reader)?;
    if rows.is_empty() {
        return Err(CensusError::Empty("age distribution"));
    }
    rows.into_iter()
        .map(|r| {
            let max = r.max_age.unwrap_or(max_age);
            if max < r.min_age {
                return Err(CensusError::Parse(format!(
                    "age bracket {}-{max} is empty",
                    r.min_age
                )));
            }
            Ok(AgeShare { min: r.min_age, max, percent: r.percent })
        })
        .collect()
}

/// Read the household-size table (percentages, sizes 1–4).
pub fn load_household_sizes<R: Read>(reader: R) -> CensusResult<HouseholdSizeTable> {
    let rows: Vec<SizeRecord> = read_rows(reader)?;
    if rows.is_empty() {
        return Err(CensusError::Empty("household size"));
    }
    let mut shares = [0.0; 4];
    for r in rows {
        if !(1..=4).contains(&r.size) {
            return Err(CensusError::Parse(format!(
                "household size {} outside 1..=4",
                r.size
            )));
        }
        shares[r.size as usize - 1] = r.percent / 100.0;
    }
    Ok(HouseholdSizeTable { shares })
}

/// Read the travel-time table.
pub fn load_travel_times<R: Read>(reader: R) -> CensusResult<WeightedTable<TimeBucket>> {
    let rows: Vec<TimeRecord> = read_rows(reader)?;
    if rows.is_empty() {
        return Err(CensusError::Empty("travel time"));
    }
    let rows = rows
        .into_iter()
        .map(|r| Ok((TimeBucket::parse(&r.bucket)?, r.fraction)))
        .collect::<CensusResult<Vec<_>>>()?;
    Ok(WeightedTable::new(rows))
}

/// Read the travel-mode table; percentages become fractions.
pub fn load_travel_modes<R: Read>(reader: R) -> CensusResult<WeightedTable<CommuteMode>> {
    let rows: Vec<ModeRecord> = read_rows(reader)?;
    if rows.is_empty() {
        return Err(CensusError::Empty("travel mode"));
    }
    let rows = rows
        .into_iter()
        .map(|r| {
            let mode = CommuteMode::from_str(&r.mode)
                .map_err(|e| CensusError::Parse(e.to_string()))?;
            Ok((mode, r.percent / 100.0))
        })
        .collect::<CensusResult<Vec<_>>>()?;
    Ok(WeightedTable::new(rows))
}

/// Read the carpool passenger-count table.
pub fn load_carpool_sizes<R: Read>(reader: R) -> CensusResult<WeightedTable<u8>> {
    let rows: Vec<CarpoolRecord> = read_rows(reader)?;
    if rows.is_empty() {
        return Err(CensusError::Empty("carpool size"));
    }
    let rows = rows
        .into_iter()
        .map(|r| {
            if !(2..=4).contains(&r.size) {
                return Err(CensusError::Parse(format!(
                    "carpool size {} outside 2..=4",
                    r.size
                )));
            }
            Ok((r.size, r.fraction))
        })
        .collect::<CensusResult<Vec<_>>>()?;
    Ok(WeightedTable::new(rows))
}

/// Read census occupation counts.
pub fn load_occupation_stats<R: Read>(reader: R) -> CensusResult<OccupationStats> {
    let rows: Vec<OccupationRecord> = read_rows(reader)?;
    Ok(OccupationStats {
        rows: rows
            .into_iter()
            .map(|r| OccupationCensus { occupation: r.occupation, count: r.count, percent: r.percent })
            .collect(),
    })
}

/// Read the category → occupation map.
pub fn load_occupation_map<R: Read>(reader: R) -> CensusResult<OccupationMap> {
    let rows: Vec<OccupationMapRecord> = read_rows(reader)?;
    Ok(OccupationMap::new(rows.into_iter().map(|r| (r.category, r.occupation))))
}

// ── CensusTables ──────────────────────────────────────────────────────────────

/// Every census input of one generation run.
#[derive(Clone, Debug)]
pub struct CensusTables {
    /// Whole-population age ledger, summing to `config.total_agents`.
    pub ages:            AgeLedger,
    /// Household-head age ledger, summing to the occupied household count.
    pub head_ages:       AgeLedger,
    pub household_sizes: HouseholdSizeTable,
    pub travel_times:    WeightedTable<TimeBucket>,
    pub travel_modes:    WeightedTable<CommuteMode>,
    pub carpool_sizes:   WeightedTable<u8>,
    pub occupations:     OccupationStats,
    pub occupation_map:  OccupationMap,
}

impl CensusTables {
    /// Load every table from the standard file names in `dir`.
    pub fn load_dir(dir: &Path, config: &PopulationConfig) -> CensusResult<Self> {
        let ages = load_age_shares(open(dir, "age_distribution.csv")?, config.max_age)?;
        let heads = load_age_shares(open(dir, "household_head_age.csv")?, config.max_age)?;

        Ok(Self {
            ages:            AgeLedger::from_shares(&ages, config.total_agents)?,
            head_ages:       AgeLedger::from_shares(&heads, config.occupied_households())?,
            household_sizes: load_household_sizes(open(dir, "household_size.csv")?)?,
            travel_times:    load_travel_times(open(dir, "travel_time.csv")?)?,
            travel_modes:    load_travel_modes(open(dir, "travel_mode.csv")?)?,
            carpool_sizes:   load_carpool_sizes(open(dir, "carpool_size.csv")?)?,
            occupations:     load_occupation_stats(open(dir, "occupation_stats.csv")?)?,
            occupation_map:  load_occupation_map(open(dir, "occupation_map.csv")?)?,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open(dir: &Path, name: &str) -> CensusResult<std::fs::File> {
    std::fs::File::open(dir.join(name)).map_err(CensusError::Io)
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> CensusResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| CensusError::Parse(e.to_string())))
        .collect()
}
