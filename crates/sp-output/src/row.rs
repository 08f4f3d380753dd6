//! Plain data rows of the population files.

use std::str::FromStr;

use csv::StringRecord;

use sp_agent::Agent;
use sp_core::CommuteMode;
use sp_transit::{Carpool, PublicTransit};

use crate::{OutputError, OutputResult};

/// Placeholder written for an agent without a commute mode.
pub const NO_MODE: &str = "None";
/// Placeholder written for an agent without an occupation.
pub const NO_OCCUPATION: &str = "none";
/// Placeholder written for an absent id reference.
pub const NO_ID: u32 = 0;

// ── AgentRow ──────────────────────────────────────────────────────────────────

/// One line of `agents.txt`.  Field order is the column order.
///
/// Ids are raw numbers with [`NO_ID`] meaning "none".  `household` holds
/// the retirement home id for residents and [`NO_ID`] for hospital patients.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRow {
    pub student:                  bool,
    pub works:                    bool,
    pub age:                      u8,
    pub lon:                      f64,
    pub lat:                      f64,
    pub household:                u32,
    pub patient:                  bool,
    pub school:                   u32,
    pub retirement_home:          bool,
    pub works_at_retirement_home: bool,
    pub works_at_school:          bool,
    pub work:                     u32,
    pub works_at_hospital:        bool,
    pub hospital:                 u32,
    pub infected:                 bool,
    pub works_from_home:          bool,
    pub commute_time:             f64,
    pub commute_mode:             Option<CommuteMode>,
    pub special_work:             u32,
    pub carpool:                  u32,
    pub public_transit:           u32,
    pub occupation:               Option<String>,
}

impl AgentRow {
    /// Number of columns per line.
    pub const FIELDS: usize = 22;

    pub fn to_record(&self) -> Vec<String> {
        vec![
            flag(self.student),
            flag(self.works),
            self.age.to_string(),
            self.lon.to_string(),
            self.lat.to_string(),
            self.household.to_string(),
            flag(self.patient),
            self.school.to_string(),
            flag(self.retirement_home),
            flag(self.works_at_retirement_home),
            flag(self.works_at_school),
            self.work.to_string(),
            flag(self.works_at_hospital),
            self.hospital.to_string(),
            flag(self.infected),
            flag(self.works_from_home),
            minutes(self.commute_time),
            self.commute_mode.map_or(NO_MODE, CommuteMode::as_str).to_owned(),
            self.special_work.to_string(),
            self.carpool.to_string(),
            self.public_transit.to_string(),
            self.occupation.clone().unwrap_or_else(|| NO_OCCUPATION.to_owned()),
        ]
    }

    /// Parse one record read back from `agents.txt`; `line` is for errors.
    pub fn from_record(record: &StringRecord, line: u64) -> OutputResult<Self> {
        if record.len() != Self::FIELDS {
            return Err(OutputError::Parse {
                line,
                reason: format!("expected {} fields, found {}", Self::FIELDS, record.len()),
            });
        }
        let f = Fields { record, line };
        Ok(Self {
            student:                  f.flag(0)?,
            works:                    f.flag(1)?,
            age:                      f.num(2)?,
            lon:                      f.num(3)?,
            lat:                      f.num(4)?,
            household:                f.num(5)?,
            patient:                  f.flag(6)?,
            school:                   f.num(7)?,
            retirement_home:          f.flag(8)?,
            works_at_retirement_home: f.flag(9)?,
            works_at_school:          f.flag(10)?,
            work:                     f.num(11)?,
            works_at_hospital:        f.flag(12)?,
            hospital:                 f.num(13)?,
            infected:                 f.flag(14)?,
            works_from_home:          f.flag(15)?,
            commute_time:             f.num(16)?,
            commute_mode:             match &record[17] {
                NO_MODE => None,
                mode => Some(CommuteMode::from_str(mode).map_err(|e| f.error(17, e))?),
            },
            special_work:             f.num(18)?,
            carpool:                  f.num(19)?,
            public_transit:           f.num(20)?,
            occupation:               match &record[21] {
                NO_OCCUPATION => None,
                occ => Some(occ.to_owned()),
            },
        })
    }
}

impl From<&Agent> for AgentRow {
    fn from(a: &Agent) -> Self {
        Self {
            student:                  a.is_student,
            works:                    a.works,
            age:                      a.age,
            lon:                      a.location.lon,
            lat:                      a.location.lat,
            household:                a.home.raw_id().unwrap_or(NO_ID),
            patient:                  a.is_patient,
            school:                   a.school.map_or(NO_ID, |id| id.get()),
            retirement_home:          a.is_retirement_home_resident,
            works_at_retirement_home: a.works_at_retirement_home,
            works_at_school:          a.works_at_school,
            work:                     a.work.map_or(NO_ID, |w| w.raw_id()),
            works_at_hospital:        a.works_at_hospital,
            hospital:                 a.hospital.map_or(NO_ID, |id| id.get()),
            infected:                 a.is_infected,
            works_from_home:          a.works_from_home,
            commute_time:             a.commute_time,
            commute_mode:             a.commute_mode,
            special_work:             a.special_work.map_or(NO_ID, |s| s.raw_id()),
            carpool:                  a.carpool.map_or(NO_ID, |id| id.get()),
            public_transit:           a.public_transit.map_or(NO_ID, |id| id.get()),
            occupation:               a.occupation.clone(),
        }
    }
}

// ── GroupRow ──────────────────────────────────────────────────────────────────

/// One line of `carpools.txt` or `public_transit.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub id:          u32,
    /// Workplace kind label, `outside` for out-of-town groups.
    pub kind:        String,
    pub travel_time: f64,
    /// Zipcode, or `0` in town.
    pub destination: String,
}

impl GroupRow {
    pub const FIELDS: usize = 4;

    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.clone(),
            minutes(self.travel_time),
            self.destination.clone(),
        ]
    }

    pub fn from_record(record: &StringRecord, line: u64) -> OutputResult<Self> {
        if record.len() != Self::FIELDS {
            return Err(OutputError::Parse {
                line,
                reason: format!("expected {} fields, found {}", Self::FIELDS, record.len()),
            });
        }
        let f = Fields { record, line };
        Ok(Self {
            id:          f.num(0)?,
            kind:        record[1].to_owned(),
            travel_time: f.num(2)?,
            destination: record[3].to_owned(),
        })
    }
}

impl From<&Carpool> for GroupRow {
    fn from(c: &Carpool) -> Self {
        Self {
            id:          c.id.get(),
            kind:        c.kind.clone(),
            travel_time: c.travel_time,
            destination: c.destination.to_string(),
        }
    }
}

impl From<&PublicTransit> for GroupRow {
    fn from(p: &PublicTransit) -> Self {
        Self {
            id:          p.id.get(),
            kind:        p.kind.clone(),
            travel_time: p.travel_time,
            destination: p.destination.to_string(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn flag(b: bool) -> String {
    (b as u8).to_string()
}

/// Minutes keep a decimal point, `22.0` rather than `22`.
fn minutes(t: f64) -> String {
    format!("{t:?}")
}

struct Fields<'a> {
    record: &'a StringRecord,
    line:   u64,
}

impl Fields<'_> {
    fn error(&self, i: usize, reason: impl std::fmt::Display) -> OutputError {
        OutputError::Parse { line: self.line, reason: format!("field {}: {reason}", i + 1) }
    }

    fn num<T>(&self, i: usize) -> OutputResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.record[i].parse().map_err(|e| self.error(i, e))
    }

    fn flag(&self, i: usize) -> OutputResult<bool> {
        match &self.record[i] {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(self.error(i, format!("expected 0 or 1, found {other:?}"))),
        }
    }
}
