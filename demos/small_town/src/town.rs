//! A synthetic suburban town.
//!
//! About 800 people in 260 housing units around a town centre, with census
//! tables shaped like those of a commuter suburb.  Used when no data
//! directory is given.

use sp_census::{
    AgeLedger, AgeShare, CensusResult, CensusTables, HouseholdSizeTable, OccupationCensus,
    OccupationMap, OccupationStats, TimeBucket, WeightedTable,
};
use sp_core::{
    CommuteMode, GeoPoint, HospitalId, HouseholdId, PopulationConfig, RetirementHomeId, SchoolId,
    SimRng, WorkplaceId,
};
use sp_places::{
    Hospital, Household, Places, PlacesResult, RetirementHome, RouteTable, School, SchoolTier,
    TransitRoute, Workplace, WorkplaceKind,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENTS:      u32 = 800;
const UNITS:       u32 = 260;
const EMPLOYED:    u32 = 360;
const LAYOUT_SEED: u64 = 7;

const CENTRE: GeoPoint = GeoPoint { lat: 40.911, lon: -73.782 };

/// `(min, max, percent)`; `None` for the open-ended top bracket.
const AGE_SHARES: [(u8, Option<u8>, f64); 13] = [
    (0,  Some(4),  6.0),
    (5,  Some(9),  6.0),
    (10, Some(14), 6.0),
    (15, Some(17), 4.0),
    (18, Some(24), 9.0),
    (25, Some(34), 12.0),
    (35, Some(44), 12.0),
    (45, Some(54), 12.0),
    (55, Some(59), 7.0),
    (60, Some(64), 6.0),
    (65, Some(74), 9.0),
    (75, Some(84), 6.0),
    (85, None,     5.0),
];

const HEAD_SHARES: [(u8, Option<u8>, f64); 9] = [
    (18, Some(24), 4.0),
    (25, Some(34), 15.0),
    (35, Some(44), 18.0),
    (45, Some(54), 20.0),
    (55, Some(59), 10.0),
    (60, Some(64), 9.0),
    (65, Some(74), 14.0),
    (75, Some(84), 7.0),
    (85, None,     3.0),
];

const TRAVEL_TIMES: [(&str, f64); 10] = [
    ("0-4",   0.04),
    ("5-9",   0.10),
    ("10-14", 0.14),
    ("15-19", 0.15),
    ("20-24", 0.14),
    ("25-29", 0.07),
    ("30-34", 0.12),
    ("35-44", 0.08),
    ("45-59", 0.08),
    ("60+",   0.08),
];

const OCCUPATIONS: [(&str, u32); 5] = [
    ("Management, business, science, and arts",          150),
    ("Service",                                           70),
    ("Sales and office",                                  80),
    ("Natural resources, construction, and maintenance",  30),
    ("Production, transportation, and material moving",   30),
];

/// `(business type, occupation category, count, max employees)`.
const BUSINESSES: [(&str, &str, u32, u32); 5] = [
    ("office",       "Management, business, science, and arts",          4, 40),
    ("restaurant",   "Service",                                          5, 12),
    ("retail",       "Sales and office",                                 6, 15),
    ("construction", "Natural resources, construction, and maintenance", 2, 15),
    ("warehouse",    "Production, transportation, and material moving",  2, 20),
];

/// `(zipcode, lat, lon)` of out-of-town destinations.
const OUTSIDE: [(&str, f64, f64); 6] = [
    ("10001", 40.750, -73.997),
    ("10022", 40.758, -73.968),
    ("10601", 41.033, -73.763),
    ("10701", 40.941, -73.890),
    ("06830", 41.027, -73.628),
    ("11201", 40.694, -73.990),
];

// ── Public API ────────────────────────────────────────────────────────────────

pub fn config() -> PopulationConfig {
    PopulationConfig {
        total_agents: AGENTS,
        total_units:  UNITS,
        fr_vacancy:   0.05,
        n_employed:   EMPLOYED,
        n_infected:   3,
        ..PopulationConfig::default()
    }
}

pub fn census(config: &PopulationConfig) -> CensusResult<CensusTables> {
    let ages = shares(&AGE_SHARES, config.max_age);
    let heads = shares(&HEAD_SHARES, config.max_age);

    let travel_times = TRAVEL_TIMES
        .iter()
        .map(|&(label, w)| Ok((TimeBucket::parse(label)?, w)))
        .collect::<CensusResult<Vec<_>>>()?;

    let total: u32 = OCCUPATIONS.iter().map(|(_, n)| n).sum();
    let occupations = OccupationStats {
        rows: OCCUPATIONS
            .iter()
            .map(|&(occupation, count)| OccupationCensus {
                occupation: occupation.to_owned(),
                count,
                percent: count as f64 * 100.0 / total as f64,
            })
            .collect(),
    };

    let mut map = OccupationMap::new(
        BUSINESSES
            .iter()
            .map(|&(_, category, _, _)| (category.to_owned(), OccupationMap::PASSTHROUGH.to_owned())),
    );
    map.insert("education", "Management, business, science, and arts");
    map.insert("health", "Service");
    map.insert("care", "Service");

    Ok(CensusTables {
        ages:            AgeLedger::from_shares(&ages, config.total_agents)?,
        head_ages:       AgeLedger::from_shares(&heads, config.occupied_households())?,
        household_sizes: HouseholdSizeTable { shares: [0.28, 0.33, 0.17, 0.22] },
        travel_times:    WeightedTable::new(travel_times),
        travel_modes:    WeightedTable::new(vec![
            (CommuteMode::Car,          0.62),
            (CommuteMode::Carpool,      0.08),
            (CommuteMode::Public,       0.15),
            (CommuteMode::Walk,         0.05),
            (CommuteMode::Other,        0.02),
            (CommuteMode::WorkFromHome, 0.08),
        ]),
        carpool_sizes:   WeightedTable::new(vec![(2, 0.75), (3, 0.15), (4, 0.10)]),
        occupations,
        occupation_map:  map,
    })
}

/// Lay the town out.  The layout has its own seed so the same town comes
/// back whatever seed the population is drawn with.
pub fn places() -> PlacesResult<Places> {
    let mut rng = SimRng::new(LAYOUT_SEED);

    let households = (0..UNITS as usize)
        .map(|i| Household { id: HouseholdId::from_index(i), location: scatter(&mut rng, 0.03) })
        .collect();

    let retirement_homes = vec![
        RetirementHome { id: RetirementHomeId(1), location: scatter(&mut rng, 0.02), residents: 8 },
        RetirementHome { id: RetirementHomeId(2), location: scatter(&mut rng, 0.02), residents: 4 },
    ];
    let hospitals = vec![Hospital { id: HospitalId(1), location: scatter(&mut rng, 0.01), patients: 4 }];

    let school_specs = [
        (SchoolTier::Daycare, 25),
        (SchoolTier::Daycare, 20),
        (SchoolTier::Primary, 45),
        (SchoolTier::Primary, 40),
        (SchoolTier::Middle,  45),
        (SchoolTier::High,    50),
        (SchoolTier::College, 30),
    ];
    let schools: Vec<School> = school_specs
        .iter()
        .enumerate()
        .map(|(i, &(tier, capacity))| School {
            id:       SchoolId::from_index(i),
            location: scatter(&mut rng, 0.025),
            tier,
            capacity,
        })
        .collect();

    let mut workplaces = Vec::new();
    let mut push = |location: GeoPoint, kind: WorkplaceKind, category: &str, min: u32, max: u32| {
        let id = WorkplaceId::from_index(workplaces.len());
        workplaces.push(Workplace::new(id, location, kind, category, min, max));
    };

    for &(kind, category, count, max) in &BUSINESSES {
        for _ in 0..count {
            push(scatter(&mut rng, 0.05), WorkplaceKind::Business(kind.to_owned()), category, 1, max);
        }
    }
    for school in &schools {
        push(school.location, WorkplaceKind::School(school.id), "education", 2, 12);
    }
    for home in &retirement_homes {
        push(home.location, WorkplaceKind::RetirementHome(home.id), "care", 2, 6);
    }
    for hospital in &hospitals {
        push(hospital.location, WorkplaceKind::Hospital(hospital.id), "health", 5, 40);
    }
    for &(zipcode, lat, lon) in &OUTSIDE {
        push(GeoPoint::new(lat, lon), WorkplaceKind::Outside { zipcode: zipcode.to_owned() }, "outside", 0, 0);
    }

    let routes = RouteTable::new(
        vec![
            route("Metro-North New Haven", &["10001", "10022", "06830"]),
            route("Bee-Line 60", &["10601", "10701"]),
        ],
        vec!["11201".to_owned()],
    )?;

    Ok(Places { households, retirement_homes, hospitals, schools, workplaces, routes })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn shares<const N: usize>(rows: &[(u8, Option<u8>, f64); N], max_age: u8) -> Vec<AgeShare> {
    rows.iter()
        .map(|&(min, max, percent)| AgeShare { min, max: max.unwrap_or(max_age), percent })
        .collect()
}

/// A point within `spread` degrees of the centre.
fn scatter(rng: &mut SimRng, spread: f64) -> GeoPoint {
    GeoPoint::new(
        CENTRE.lat + rng.gen_range(-spread..spread),
        CENTRE.lon + rng.gen_range(-spread..spread),
    )
}

fn route(name: &str, zipcodes: &[&str]) -> TransitRoute {
    TransitRoute { name: name.to_owned(), zipcodes: zipcodes.iter().map(|z| (*z).to_owned()).collect() }
}
