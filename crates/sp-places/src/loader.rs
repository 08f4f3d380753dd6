//! CSV inventory loaders.
//!
//! # File formats
//!
//! | File                    | Columns                                                              |
//! |-------------------------|----------------------------------------------------------------------|
//! | `households.csv`        | `id,lat,lon`                                                         |
//! | `retirement_homes.csv`  | `id,lat,lon,residents`                                               |
//! | `hospitals.csv`         | `id,lat,lon,patients`                                                |
//! | `schools.csv`           | `id,lat,lon,tier,students`                                           |
//! | `workplaces.csv`        | `id,lat,lon,kind,category,min_capacity,max_capacity,special_id,zipcode` |
//! | `transit_routes.csv`    | `name,zipcodes` (zipcodes separated by `;`)                          |
//! | `no_public_transit.csv` | `zipcode` (optional file)                                            |
//!
//! Ids are 1-based and must equal the row number, so that every record can
//! be found at `id.index()` in its `Vec`.
//!
//! **`kind`** field of `workplaces.csv`:
//!
//! | Value             | Meaning                                           |
//! |-------------------|---------------------------------------------------|
//! | `school`          | staff of the school `special_id`                  |
//! | `retirement_home` | staff of the retirement home `special_id`         |
//! | `hospital`        | staff of the hospital `special_id`                |
//! | `outside`         | out-of-town destination `zipcode`                 |
//! | anything else     | in-town business of that type                     |

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use sp_core::{
    GeoPoint, HospitalId, HouseholdId, RetirementHomeId, SchoolId, WorkplaceId,
};

use crate::{
    Hospital, Household, PlacesError, PlacesResult, RetirementHome, RouteTable, School,
    SchoolTier, TransitRoute, Workplace, WorkplaceKind,
};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HouseholdRecord {
    id:  u32,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RetirementHomeRecord {
    id:        u32,
    lat:       f64,
    lon:       f64,
    residents: u32,
}

#[derive(Deserialize)]
struct HospitalRecord {
    id:       u32,
    lat:      f64,
    lon:      f64,
    patients: u32,
}

#[derive(Deserialize)]
struct SchoolRecord {
    id:       u32,
    lat:      f64,
    lon:      f64,
    tier:     String,
    students: u32,
}

#[derive(Deserialize)]
struct WorkplaceRecord {
    id:           u32,
    lat:          f64,
    lon:          f64,
    kind:         String,
    category:     String,
    min_capacity: u32,
    max_capacity: u32,
    special_id:   Option<u32>,
    zipcode:      Option<String>,
}

#[derive(Deserialize)]
struct RouteRecord {
    name:     String,
    zipcodes: String,
}

#[derive(Deserialize)]
struct ZipRecord {
    zipcode: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_households<R: Read>(reader: R) -> PlacesResult<Vec<Household>> {
    let rows: Vec<HouseholdRecord> = read_rows(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| {
            check_row_id("household", i, r.id)?;
            Ok(Household { id: HouseholdId(r.id), location: GeoPoint::new(r.lat, r.lon) })
        })
        .collect()
}

pub fn load_retirement_homes<R: Read>(reader: R) -> PlacesResult<Vec<RetirementHome>> {
    let rows: Vec<RetirementHomeRecord> = read_rows(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| {
            check_row_id("retirement home", i, r.id)?;
            Ok(RetirementHome {
                id:        RetirementHomeId(r.id),
                location:  GeoPoint::new(r.lat, r.lon),
                residents: r.residents,
            })
        })
        .collect()
}

pub fn load_hospitals<R: Read>(reader: R) -> PlacesResult<Vec<Hospital>> {
    let rows: Vec<HospitalRecord> = read_rows(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| {
            check_row_id("hospital", i, r.id)?;
            Ok(Hospital {
                id:       HospitalId(r.id),
                location: GeoPoint::new(r.lat, r.lon),
                patients: r.patients,
            })
        })
        .collect()
}

pub fn load_schools<R: Read>(reader: R) -> PlacesResult<Vec<School>> {
    let rows: Vec<SchoolRecord> = read_rows(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| {
            check_row_id("school", i, r.id)?;
            Ok(School {
                id:       SchoolId(r.id),
                location: GeoPoint::new(r.lat, r.lon),
                tier:     SchoolTier::from_str(&r.tier)?,
                capacity: r.students,
            })
        })
        .collect()
}

pub fn load_workplaces<R: Read>(reader: R) -> PlacesResult<Vec<Workplace>> {
    let rows: Vec<WorkplaceRecord> = read_rows(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| {
            check_row_id("workplace", i, r.id)?;
            let kind = parse_kind(&r)?;
            Ok(Workplace::new(
                WorkplaceId(r.id),
                GeoPoint::new(r.lat, r.lon),
                kind,
                r.category,
                r.min_capacity,
                r.max_capacity,
            ))
        })
        .collect()
}

pub fn load_routes<R: Read>(reader: R) -> PlacesResult<Vec<TransitRoute>> {
    let rows: Vec<RouteRecord> = read_rows(reader)?;
    Ok(rows
        .into_iter()
        .map(|r| TransitRoute {
            name:     r.name,
            zipcodes: r
                .zipcodes
                .split(';')
                .map(str::trim)
                .filter(|z| !z.is_empty())
                .map(str::to_owned)
                .collect(),
        })
        .collect())
}

pub fn load_no_public_transit<R: Read>(reader: R) -> PlacesResult<Vec<String>> {
    let rows: Vec<ZipRecord> = read_rows(reader)?;
    Ok(rows.into_iter().map(|r| r.zipcode).collect())
}

// ── Places ────────────────────────────────────────────────────────────────────

/// Every inventory of one town.
#[derive(Clone, Debug, Default)]
pub struct Places {
    pub households:       Vec<Household>,
    pub retirement_homes: Vec<RetirementHome>,
    pub hospitals:        Vec<Hospital>,
    pub schools:          Vec<School>,
    pub workplaces:       Vec<Workplace>,
    pub routes:           RouteTable,
}

impl Places {
    /// Load every inventory from the standard file names in `dir`.
    /// `no_public_transit.csv` may be absent.
    pub fn load_dir(dir: &Path) -> PlacesResult<Self> {
        let no_public = match std::fs::File::open(dir.join("no_public_transit.csv")) {
            Ok(file) => load_no_public_transit(file)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            households:       load_households(open(dir, "households.csv")?)?,
            retirement_homes: load_retirement_homes(open(dir, "retirement_homes.csv")?)?,
            hospitals:        load_hospitals(open(dir, "hospitals.csv")?)?,
            schools:          load_schools(open(dir, "schools.csv")?)?,
            workplaces:       load_workplaces(open(dir, "workplaces.csv")?)?,
            routes:           RouteTable::new(load_routes(open(dir, "transit_routes.csv")?)?, no_public)?,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(r: &WorkplaceRecord) -> PlacesResult<WorkplaceKind> {
    let special = || {
        r.special_id.filter(|&id| id > 0).ok_or_else(|| {
            PlacesError::Parse(format!("workplace {} of kind {:?} needs a special_id", r.id, r.kind))
        })
    };
    Ok(match r.kind.trim() {
        "school"          => WorkplaceKind::School(SchoolId(special()?)),
        "retirement_home" => WorkplaceKind::RetirementHome(RetirementHomeId(special()?)),
        "hospital"        => WorkplaceKind::Hospital(HospitalId(special()?)),
        "outside"         => {
            let zipcode = r.zipcode.clone().filter(|z| !z.is_empty()).ok_or_else(|| {
                PlacesError::Parse(format!("outside workplace {} needs a zipcode", r.id))
            })?;
            WorkplaceKind::Outside { zipcode }
        }
        business => WorkplaceKind::Business(business.to_owned()),
    })
}

fn check_row_id(what: &str, row: usize, id: u32) -> PlacesResult<()> {
    if id as usize != row + 1 {
        return Err(PlacesError::Parse(format!(
            "{what} on row {} has id {id}; ids must be 1-based row numbers",
            row + 1
        )));
    }
    Ok(())
}

fn open(dir: &Path, name: &str) -> PlacesResult<std::fs::File> {
    std::fs::File::open(dir.join(name)).map_err(PlacesError::Io)
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> PlacesResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| PlacesError::Parse(e.to_string())))
        .collect()
}
