//! Unit tests for sp-census.

use std::io::Cursor;

use crate::{AgeBracket, AgeLedger, AgeShare};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn share(min: u8, max: u8, percent: f64) -> AgeShare {
    AgeShare { min, max, percent }
}

fn bracket(min: u8, max: u8, remaining: u32) -> AgeBracket {
    AgeBracket { min, max, remaining }
}

// ── AgeLedger ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger {
    use super::*;
    use crate::CensusError;

    #[test]
    fn two_brackets_split_exactly() {
        let ledger = AgeLedger::from_shares(&[share(0, 50, 60.0), share(51, 100, 40.0)], 10).unwrap();
        let counts: Vec<u32> = ledger.brackets().iter().map(|b| b.remaining).collect();
        assert_eq!(counts, vec![6, 4]);
        assert_eq!(ledger.total_remaining(), 10);
    }

    #[test]
    fn rounding_shortfall_added_round_robin() {
        // Thirds of 10: floor gives 3+3+3 = 9, the first bracket gets the extra one.
        let third = 100.0 / 3.0;
        let ledger = AgeLedger::from_shares(
            &[share(0, 9, third), share(10, 19, third), share(20, 29, third)],
            10,
        )
        .unwrap();
        let counts: Vec<u32> = ledger.brackets().iter().map(|b| b.remaining).collect();
        assert_eq!(counts, vec![4, 3, 3]);
    }

    #[test]
    fn overshoot_removed_round_robin() {
        // Percentages summing to 120 overshoot; the excess comes off front to back.
        let ledger = AgeLedger::from_shares(&[share(0, 9, 60.0), share(10, 19, 60.0)], 10).unwrap();
        let counts: Vec<u32> = ledger.brackets().iter().map(|b| b.remaining).collect();
        assert_eq!(counts, vec![5, 5]);
    }

    #[test]
    fn empty_shares_rejected() {
        assert!(matches!(AgeLedger::from_shares(&[], 10), Err(CensusError::Empty(_))));
    }

    #[test]
    fn find_bracket_covers_bounds() {
        let ledger = AgeLedger::new(vec![bracket(0, 4, 1), bracket(5, 9, 1)]);
        assert_eq!(ledger.find_bracket(0).unwrap(), 0);
        assert_eq!(ledger.find_bracket(4).unwrap(), 0);
        assert_eq!(ledger.find_bracket(5).unwrap(), 1);
        assert_eq!(ledger.find_bracket(9).unwrap(), 1);
    }

    #[test]
    fn age_outside_every_bracket_is_an_error() {
        let ledger = AgeLedger::new(vec![bracket(0, 4, 1)]);
        assert!(matches!(ledger.find_bracket(7), Err(CensusError::AgeNotInLedger { age: 7 })));
    }

    #[test]
    fn deplete_decrements_and_underflow_errors() {
        let mut ledger = AgeLedger::new(vec![bracket(0, 4, 2), bracket(5, 9, 0)]);
        ledger.deplete(3).unwrap();
        ledger.deplete(0).unwrap();
        assert_eq!(ledger.brackets()[0].remaining, 0);
        assert!(ledger.is_exhausted());

        let err = ledger.deplete(1).unwrap_err();
        assert!(matches!(err, CensusError::LedgerUnderflow { min: 0, max: 4 }));
        // Unchanged after the failed call.
        assert_eq!(ledger.brackets()[0].remaining, 0);
    }

    #[test]
    fn has_supply_tracks_remaining() {
        let mut ledger = AgeLedger::new(vec![bracket(0, 4, 1), bracket(5, 9, 3)]);
        assert!(ledger.has_supply(2).unwrap());
        ledger.deplete(2).unwrap();
        assert!(!ledger.has_supply(2).unwrap());
        assert!(ledger.has_supply(6).unwrap());
    }

    #[test]
    fn age_span() {
        let ledger = AgeLedger::new(vec![bracket(18, 34, 1), bracket(35, 100, 1)]);
        assert_eq!(ledger.age_span(), Some((18, 100)));
        assert_eq!(AgeLedger::default().age_span(), None);
    }
}

// ── Tables ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tables {
    use sp_core::SimRng;

    use crate::{HouseholdSizeTable, OccupationMap, TimeBucket, WeightedTable};

    #[test]
    fn time_bucket_representatives() {
        let closed = TimeBucket::parse("10-14").unwrap();
        assert_eq!(closed.representative(), 12.0);
        assert!(closed.contains(10.0) && closed.contains(14.0) && !closed.contains(14.5));

        let open = TimeBucket::parse("90+").unwrap();
        assert_eq!(open.representative(), 90.0);
        assert!(open.contains(500.0));
    }

    #[test]
    fn time_bucket_rejects_garbage() {
        assert!(TimeBucket::parse("soon").is_err());
        assert!(TimeBucket::parse("14-10").is_err());
    }

    #[test]
    fn household_sizes_allocate_exactly() {
        let table = HouseholdSizeTable { shares: [0.25, 0.25, 0.25, 0.25] };
        assert_eq!(table.allocate(10), [3, 3, 2, 2]);
        assert_eq!(table.allocate(10).iter().sum::<u32>(), 10);
    }

    #[test]
    fn weighted_sampling_respects_zero_weights() {
        let table = WeightedTable::new(vec![("a", 0.0), ("b", 1.0)]);
        let mut rng = SimRng::new(3);
        let draws = table.sample_n(&mut rng, 50).unwrap();
        assert_eq!(draws.len(), 50);
        assert!(draws.iter().all(|&d| d == "b"));
    }

    #[test]
    fn weighted_sampling_all_zero_is_an_error() {
        let table = WeightedTable::new(vec![("a", 0.0)]);
        assert!(table.sample_n(&mut SimRng::new(3), 1).is_err());
    }

    #[test]
    fn occupation_map_passthrough() {
        let mut map = OccupationMap::default();
        map.insert("retail", "Sales");
        map.insert("A", "None");
        assert_eq!(map.resolve("retail"), "Sales");
        assert_eq!(map.resolve("A"), "A");
        assert_eq!(map.resolve("unmapped"), "unmapped");
    }

    #[test]
    fn occupation_map_from_pairs() {
        let map = OccupationMap::new([
            ("hospital".to_owned(), "Service".to_owned()),
            ("hospital".to_owned(), "Healthcare".to_owned()),
            ("retail".to_owned(), "None".to_owned()),
        ]);
        assert_eq!(map.resolve("hospital"), "Healthcare");
        assert_eq!(map.resolve("retail"), "retail");
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use sp_core::CommuteMode;

    use super::*;
    use crate::{
        load_age_shares, load_carpool_sizes, load_household_sizes, load_occupation_map,
        load_occupation_stats, load_travel_modes, load_travel_times,
    };

    #[test]
    fn open_ended_age_row_uses_max_age() {
        let csv = "min_age,max_age,percent\n0,4,50\n85,,50\n";
        let shares = load_age_shares(Cursor::new(csv), 100).unwrap();
        assert_eq!(shares, vec![share(0, 4, 50.0), share(85, 100, 50.0)]);
    }

    #[test]
    fn inverted_age_row_rejected() {
        let csv = "min_age,max_age,percent\n10,4,50\n";
        assert!(load_age_shares(Cursor::new(csv), 100).is_err());
    }

    #[test]
    fn household_sizes_become_fractions() {
        let csv = "size,percent\n1,30\n2,30\n3,20\n4,20\n";
        let table = load_household_sizes(Cursor::new(csv)).unwrap();
        assert_eq!(table.shares, [0.3, 0.3, 0.2, 0.2]);
    }

    #[test]
    fn household_size_out_of_range_rejected() {
        let csv = "size,percent\n5,100\n";
        assert!(load_household_sizes(Cursor::new(csv)).is_err());
    }

    #[test]
    fn travel_tables_parse() {
        let times = load_travel_times(Cursor::new("bucket,fraction\n0-4,0.1\n5-9,0.4\n60+,0.5\n")).unwrap();
        assert_eq!(times.values().len(), 3);
        assert_eq!(times.values()[2].representative(), 60.0);

        let modes = load_travel_modes(Cursor::new("mode,percent\ncar,50\nwfh,50\n")).unwrap();
        assert_eq!(modes.values(), &[CommuteMode::Car, CommuteMode::WorkFromHome]);
        assert_eq!(modes.weights(), &[0.5, 0.5]);
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(load_travel_modes(Cursor::new("mode,percent\nbike,100\n")).is_err());
    }

    #[test]
    fn carpool_sizes_bounded() {
        assert!(load_carpool_sizes(Cursor::new("size,fraction\n2,0.7\n3,0.3\n")).is_ok());
        assert!(load_carpool_sizes(Cursor::new("size,fraction\n1,1.0\n")).is_err());
    }

    #[test]
    fn occupation_stats_keep_order() {
        let csv = "occupation,count,percent\nSales,30,30.0\nHealth,70,70.0\n";
        let stats = load_occupation_stats(Cursor::new(csv)).unwrap();
        assert_eq!(stats.rows[0].occupation, "Sales");
        assert_eq!(stats.get("Health").unwrap().count, 70);
        assert_eq!(stats.total(), 100);
    }

    #[test]
    fn occupation_map_loads() {
        let csv = "category,occupation\nretail,Sales\nA,None\n";
        let map = load_occupation_map(Cursor::new(csv)).unwrap();
        assert_eq!(map.resolve("retail"), "Sales");
        assert_eq!(map.resolve("A"), "A");
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "min_age,max_age,percent\nabc,4,50\n";
        assert!(matches!(
            load_age_shares(Cursor::new(csv), 100),
            Err(crate::CensusError::Parse(_))
        ));
    }
}
