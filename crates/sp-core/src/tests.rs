//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, HouseholdId, WorkplaceId};

    #[test]
    fn ids_are_one_based() {
        assert_eq!(AgentId::FIRST.index(), 0);
        assert_eq!(HouseholdId::from_index(0), HouseholdId(1));
        assert_eq!(WorkplaceId(42).index(), 41);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(1) < AgentId(2));
        assert!(HouseholdId(100) > HouseholdId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(u32::from(WorkplaceId(9)), 9);
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.911, -73.782);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km
        let a = GeoPoint::new(40.0, -73.0);
        let b = GeoPoint::new(41.0, -73.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(40.911, -73.782);
        let b = GeoPoint::new(40.758, -73.985);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }
}

#[cfg(test)]
mod mode {
    use std::str::FromStr;

    use crate::CommuteMode;

    #[test]
    fn labels_parse_back() {
        for mode in CommuteMode::ALL {
            assert_eq!(CommuteMode::from_str(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!(CommuteMode::from_str("bike").is_err());
    }

    #[test]
    fn replacement_pools_exclude_the_replaced_mode() {
        assert!(!CommuteMode::TRAVELLING.contains(&CommuteMode::WorkFromHome));
        assert!(!CommuteMode::RIDING.contains(&CommuteMode::Walk));
    }
}

#[cfg(test)]
mod config {
    use crate::{CommuteMode, PopulationConfig};

    #[test]
    fn default_is_valid() {
        PopulationConfig::default().validate().unwrap();
    }

    #[test]
    fn occupied_households_floors() {
        let cfg = PopulationConfig { total_units: 100, fr_vacancy: 0.055, ..Default::default() };
        assert_eq!(cfg.occupied_households(), 94);
    }

    #[test]
    fn fraction_out_of_range_rejected() {
        let cfg = PopulationConfig { fr_families: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn too_many_infected_rejected() {
        let cfg = PopulationConfig { total_agents: 3, n_infected: 4, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn speeds_convert_to_km_per_min() {
        let cfg = PopulationConfig::default();
        let car = cfg.mode_speeds.km_per_min(CommuteMode::Car);
        assert!((car - 0.8).abs() < 1e-12, "30 mph = 0.8 km/min, got {car}");
        assert_eq!(cfg.mode_speeds.km_per_min(CommuteMode::WorkFromHome), 0.0);
    }

    #[test]
    fn working_age_window_is_inclusive() {
        let cfg = PopulationConfig::default();
        assert!(cfg.is_working_age(16));
        assert!(cfg.is_working_age(70));
        assert!(!cfg.is_working_age(15));
        assert!(!cfg.is_working_age(71));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(1);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
    }
}
