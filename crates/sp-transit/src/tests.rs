//! Unit tests for sp-transit.

use sp_census::{TimeBucket, WeightedTable};
use sp_core::{CommuteMode, PopulationConfig, SimRng};
use sp_places::{RouteTable, TransitRoute};

use crate::{CommuteSampler, Destination, TransitError, TransitRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn times(rows: &[(&str, f64)]) -> WeightedTable<TimeBucket> {
    WeightedTable::new(
        rows.iter()
            .map(|&(label, w)| (TimeBucket::parse(label).unwrap(), w))
            .collect(),
    )
}

fn sampler_with(
    time_rows: &[(&str, f64)],
    modes: &[(CommuteMode, f64)],
    sizes: &[(u8, f64)],
) -> Result<CommuteSampler, TransitError> {
    CommuteSampler::new(
        &times(time_rows),
        &WeightedTable::new(modes.to_vec()),
        &WeightedTable::new(sizes.to_vec()),
        &PopulationConfig::default(),
    )
}

fn default_sampler() -> CommuteSampler {
    sampler_with(
        &[("0-4", 0.2), ("10-14", 0.5), ("60+", 0.3)],
        &[(CommuteMode::Car, 0.6), (CommuteMode::Public, 0.4)],
        &[(2, 0.5), (3, 0.5)],
    )
    .unwrap()
}

fn routes() -> RouteTable {
    RouteTable::new(
        vec![
            TransitRoute { name: "Metro-North".into(), zipcodes: vec!["10001".into(), "10022".into()] },
            TransitRoute { name: "Bee-Line".into(),    zipcodes: vec!["10550".into()] },
        ],
        vec!["10022".into()],
    )
    .unwrap()
}

// ── CommuteSampler ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampler {
    use super::*;

    #[test]
    fn times_are_bucket_representatives() {
        let s = default_sampler();
        let drawn = s.sample_times(&mut SimRng::new(1), 200);
        assert_eq!(drawn.len(), 200);
        assert!(drawn.iter().all(|&t| t == 2.0 || t == 12.0 || t == 60.0));
    }

    #[test]
    fn degenerate_mode_table_always_draws_that_mode() {
        let s = sampler_with(
            &[("10-14", 1.0)],
            &[(CommuteMode::Car, 0.0), (CommuteMode::Walk, 1.0)],
            &[(2, 1.0)],
        )
        .unwrap();
        let commutes = s.sample_commutes(&mut SimRng::new(9), 20);
        assert!(commutes.iter().all(|&(t, m)| t == 12.0 && m == CommuteMode::Walk));
        assert!(s.sample_carpool_sizes(&mut SimRng::new(9), 5).iter().all(|&n| n == 2));
    }

    #[test]
    fn empty_or_zero_tables_rejected() {
        let empty = sampler_with(&[], &[(CommuteMode::Car, 1.0)], &[(2, 1.0)]);
        assert!(matches!(empty, Err(TransitError::EmptyTable("travel time"))));

        let zero = sampler_with(&[("0-4", 1.0)], &[(CommuteMode::Car, 0.0)], &[(2, 1.0)]);
        assert!(matches!(zero, Err(TransitError::InvalidWeights { table: "travel mode", .. })));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let s = default_sampler();
        assert!(s.is_wfh_time(5.0) && !s.is_wfh_time(5.5));
        assert!(s.is_walk_time(12.0) && !s.is_walk_time(12.5));
    }

    #[test]
    fn implied_distance_uses_mode_speed() {
        let s = default_sampler();
        // 30 mph = 0.8 km/min.
        assert!((s.implied_distance_km(CommuteMode::Car, 10.0) - 8.0).abs() < 1e-9);
        assert_eq!(s.implied_distance_km(CommuteMode::WorkFromHome, 10.0), 0.0);
    }

    #[test]
    fn bucket_lookup() {
        let s = default_sampler();
        assert_eq!(s.bucket_for(12.0), Some("10-14"));
        assert_eq!(s.bucket_for(75.0), Some("60+"));
        assert_eq!(s.bucket_for(7.0), None);
    }

    #[test]
    fn resample_stays_in_pool() {
        let s = default_sampler();
        let mut rng = SimRng::new(4);
        for _ in 0..50 {
            assert_ne!(s.resample_mode(&mut rng, &CommuteMode::RIDING), CommuteMode::Walk);
        }
    }
}

// ── TransitRegistry ───────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use sp_core::{CarpoolId, TransitId};

    use super::*;

    #[test]
    fn carpool_creation_is_idempotent() {
        let mut reg = TransitRegistry::new(routes());
        let id = reg.next_carpool_id();
        assert_eq!(id, CarpoolId(1));
        assert!(reg.create_carpool(id, "retail", 12.0, Destination::InTown));
        assert!(!reg.create_carpool(id, "retail", 40.0, Destination::InTown));
        assert_eq!(reg.carpools().len(), 1);
        assert_eq!(reg.carpools()[0].travel_time, 12.0);
        assert_eq!(reg.next_carpool_id(), CarpoolId(2));
    }

    #[test]
    fn outside_destination_reuses_route_group() {
        let mut reg = TransitRegistry::new(routes());
        let mut rng = SimRng::new(1);
        let dest = Destination::Zipcode("10550".into());
        let a = reg.create_public_transit("outside", 40.0, &dest, &mut rng);
        let b = reg.create_public_transit("outside", 55.0, &dest, &mut rng);
        assert_eq!(a, Some(TransitId(1)));
        assert_eq!(a, b);
        assert_eq!(reg.public_transit()[0].route, "Bee-Line");
    }

    #[test]
    fn blocked_or_unserved_zipcode_has_no_group() {
        let mut reg = TransitRegistry::new(routes());
        let mut rng = SimRng::new(1);
        assert_eq!(reg.create_public_transit("outside", 30.0, &Destination::Zipcode("10022".into()), &mut rng), None);
        assert_eq!(reg.create_public_transit("outside", 30.0, &Destination::Zipcode("99999".into()), &mut rng), None);
        assert!(reg.public_transit().is_empty());
    }

    #[test]
    fn in_town_picks_some_route() {
        let mut reg = TransitRegistry::new(routes());
        let mut rng = SimRng::new(5);
        for _ in 0..10 {
            assert!(reg.create_public_transit("retail", 20.0, &Destination::InTown, &mut rng).is_some());
        }
        // Two routes, so at most two groups.
        assert!(reg.public_transit().len() <= 2);
    }

    #[test]
    fn in_town_without_routes_is_none() {
        let mut reg = TransitRegistry::default();
        assert_eq!(reg.create_public_transit("retail", 20.0, &Destination::InTown, &mut SimRng::new(1)), None);
    }

    #[test]
    fn destination_encoding() {
        assert_eq!(Destination::InTown.to_string(), "0");
        assert_eq!(Destination::Zipcode("10801".into()).to_string(), "10801");
    }
}
