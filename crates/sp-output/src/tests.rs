//! Unit tests for sp-output.

use std::io::Cursor;

use sp_agent::{Agent, Home, SpecialWork, WorkSite};
use sp_core::{AgentId, CarpoolId, CommuteMode, GeoPoint, HospitalId, HouseholdId, SchoolId, TransitId, WorkplaceId};
use sp_transit::{Carpool, Destination, PublicTransit};

use crate::{AgentRow, GroupRow, NO_ID, OutputError, read_agents, read_groups};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn worker() -> Agent {
    let mut a = Agent::new(AgentId(1), 34, GeoPoint::new(40.91, -73.78), Home::Household(HouseholdId(7)));
    a.works = true;
    a.works_at_school = true;
    a.work = Some(WorkSite::Workplace(WorkplaceId(12)));
    a.special_work = Some(SpecialWork::School(SchoolId(3)));
    a.commute_time = 22.0;
    a.commute_mode = Some(CommuteMode::Carpool);
    a.carpool = Some(CarpoolId(4));
    a.occupation = Some("Education".into());
    a
}

fn line(fields: &[String]) -> String {
    fields.join(" ")
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn agent_columns_in_order() {
        let row = AgentRow::from(&worker());
        assert_eq!(
            line(&row.to_record()),
            "0 1 34 -73.78 40.91 7 0 0 0 0 1 12 0 0 0 0 22.0 carpool 3 4 0 Education"
        );
    }

    #[test]
    fn missing_values_use_placeholders() {
        let child = Agent::new(AgentId(2), 6, GeoPoint::new(40.9, -73.8), Home::Household(HouseholdId(1)));
        let fields = AgentRow::from(&child).to_record();
        assert_eq!(fields[16], "0.0");
        assert_eq!(fields[17], "None");
        assert_eq!(fields[21], "none");
    }

    #[test]
    fn patients_have_no_household() {
        let patient = Agent::new(AgentId(3), 80, GeoPoint::new(40.9, -73.8), Home::Hospital(HospitalId(2)));
        let row = AgentRow::from(&patient);
        assert_eq!(row.household, NO_ID);
        assert!(row.patient);
        assert_eq!(row.hospital, 2);
        assert_eq!(row.to_record()[5], "0");
    }

    #[test]
    fn work_from_home_reuses_household_id() {
        let mut a = Agent::new(AgentId(1), 40, GeoPoint::new(40.9, -73.8), Home::Household(HouseholdId(9)));
        a.works = true;
        a.works_from_home = true;
        a.work = Some(WorkSite::Home(HouseholdId(9)));
        a.commute_time = 2.0;
        a.commute_mode = Some(CommuteMode::WorkFromHome);
        let row = AgentRow::from(&a);
        assert_eq!(row.work, row.household);
        assert_eq!(row.to_record()[17], "wfh");
    }

    #[test]
    fn group_rows_encode_destination() {
        let carpool = Carpool {
            id:          CarpoolId(1),
            kind:        "retail".into(),
            travel_time: 22.0,
            destination: Destination::InTown,
        };
        assert_eq!(line(&GroupRow::from(&carpool).to_record()), "1 retail 22.0 0");

        let bus = PublicTransit {
            id:          TransitId(2),
            kind:        "outside".into(),
            travel_time: 47.5,
            destination: Destination::Zipcode("10001".into()),
            route:       "Metro-North".into(),
        };
        assert_eq!(line(&GroupRow::from(&bus).to_record()), "2 outside 47.5 10001");
    }
}

// ── Reader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reader {
    use super::*;

    #[test]
    fn agent_line_parses() {
        let text = "0 1 34 -73.78 40.91 7 0 0 0 0 1 12 0 0 0 0 22.0 carpool 3 4 0 Education\n";
        let rows = read_agents(Cursor::new(text)).unwrap();
        assert_eq!(rows, vec![AgentRow::from(&worker())]);
    }

    #[test]
    fn placeholders_parse_to_none() {
        let text = "1 0 6 -73.8 40.9 1 0 2 0 0 0 0 0 0 0 0 0.0 None 0 0 0 none\n";
        let rows = read_agents(Cursor::new(text)).unwrap();
        assert_eq!(rows[0].commute_mode, None);
        assert_eq!(rows[0].occupation, None);
        assert_eq!(rows[0].school, 2);
    }

    #[test]
    fn quoted_labels_keep_spaces() {
        let text = "0 1 34 -73.78 40.91 7 0 0 0 0 0 12 0 0 0 0 22.0 car 0 0 0 \"Sales and office\"\n";
        let rows = read_agents(Cursor::new(text)).unwrap();
        assert_eq!(rows[0].occupation.as_deref(), Some("Sales and office"));
    }

    #[test]
    fn short_line_reports_its_number() {
        let text = "1 retail 22.0 0\n2 retail 22.0\n";
        let err = read_groups(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, OutputError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn bad_flag_rejected() {
        let text = "2 1 34 -73.78 40.91 7 0 0 0 0 1 12 0 0 0 0 22.0 carpool 3 4 0 Education\n";
        assert!(matches!(read_agents(Cursor::new(text)), Err(OutputError::Parse { line: 1, .. })));
    }

    #[test]
    fn unknown_mode_rejected() {
        let text = "0 1 34 -73.78 40.91 7 0 0 0 0 1 12 0 0 0 0 22.0 bike 3 4 0 Education\n";
        assert!(read_agents(Cursor::new(text)).is_err());
    }
}

// ── Text files ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_files {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;
    use crate::text::{AGENTS_FILE, CARPOOLS_FILE, PUBLIC_TRANSIT_FILE};
    use crate::{PopulationWriter, TextWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn files_created() {
        let dir = tmp();
        let mut w = TextWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        for name in [AGENTS_FILE, CARPOOLS_FILE, PUBLIC_TRANSIT_FILE] {
            assert!(dir.path().join(name).exists(), "{name}");
        }
    }

    #[test]
    fn agents_read_back() {
        let dir = tmp();
        let mut spaced = worker();
        spaced.occupation = Some("Sales and office".into());
        let rows = vec![AgentRow::from(&worker()), AgentRow::from(&spaced)];

        let mut w = TextWriter::new(dir.path()).unwrap();
        w.write_agents(&rows).unwrap();
        w.finish().unwrap();

        let back = read_agents(File::open(dir.path().join(AGENTS_FILE)).unwrap()).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn groups_written_one_per_line() {
        let dir = tmp();
        let rows = vec![
            GroupRow { id: 1, kind: "retail".into(), travel_time: 12.0, destination: "0".into() },
            GroupRow { id: 2, kind: "outside".into(), travel_time: 45.0, destination: "10801".into() },
        ];
        let mut w = TextWriter::new(dir.path()).unwrap();
        w.write_public_transit(&rows).unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join(PUBLIC_TRANSIT_FILE)).unwrap();
        assert_eq!(text, "1 retail 12.0 0\n2 outside 45.0 10801\n");
        assert_eq!(std::fs::read_to_string(dir.path().join(CARPOOLS_FILE)).unwrap(), "");
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use std::fs::File;

    use sp_census::{
        AgeBracket, AgeLedger, CensusTables, HouseholdSizeTable, OccupationMap, OccupationStats,
        TimeBucket, WeightedTable,
    };
    use sp_core::{PopulationConfig, RetirementHomeId};
    use sp_gen::PopulationBuilder;
    use sp_places::{Places, RetirementHome};

    use super::*;
    use crate::text::AGENTS_FILE;
    use crate::{OutputObserver, TextWriter};

    /// Three retirement-home residents and nothing else.
    fn retirement_town() -> sp_gen::PopulationContext {
        let config = PopulationConfig {
            total_agents: 3,
            n_employed:   0,
            n_infected:   1,
            ..PopulationConfig::default()
        };
        let census = CensusTables {
            ages:            AgeLedger::new(vec![AgeBracket { min: 75, max: 100, remaining: 3 }]),
            head_ages:       AgeLedger::default(),
            household_sizes: HouseholdSizeTable { shares: [1.0, 0.0, 0.0, 0.0] },
            travel_times:    WeightedTable::new(vec![(TimeBucket::parse("20-24").unwrap(), 1.0)]),
            travel_modes:    WeightedTable::new(vec![(CommuteMode::Car, 1.0)]),
            carpool_sizes:   WeightedTable::new(vec![(2, 1.0)]),
            occupations:     OccupationStats::default(),
            occupation_map:  OccupationMap::default(),
        };
        let places = Places {
            retirement_homes: vec![RetirementHome {
                id:        RetirementHomeId(1),
                location:  GeoPoint::new(40.92, -73.77),
                residents: 3,
            }],
            ..Places::default()
        };
        PopulationBuilder::new(config, census, places).build().unwrap()
    }

    #[test]
    fn writes_after_the_last_pass() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut obs = OutputObserver::new(TextWriter::new(dir.path()).unwrap());
        retirement_town().generate(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let rows = read_agents(File::open(dir.path().join(AGENTS_FILE)).unwrap()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.retirement_home && r.household == 1));
        assert_eq!(rows.iter().filter(|r| r.infected).count(), 1);
    }
}
