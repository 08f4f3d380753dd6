//! Unit tests for sp-places.

use std::io::Cursor;

use sp_core::{GeoPoint, SchoolId, WorkplaceId};

use crate::{Workplace, WorkplaceKind};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn business(id: u32, max: u32) -> Workplace {
    Workplace::new(
        WorkplaceId(id),
        GeoPoint::new(40.9, -73.8),
        WorkplaceKind::Business("retail".into()),
        "Sales",
        1,
        max,
    )
}

fn outside(id: u32, zip: &str) -> Workplace {
    Workplace::new(
        WorkplaceId(id),
        GeoPoint::new(40.7, -74.0),
        WorkplaceKind::Outside { zipcode: zip.into() },
        "outside",
        0,
        0,
    )
}

// ── Workplace ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod workplace {
    use super::*;

    #[test]
    fn hire_counts_in_town_only() {
        let mut w = business(1, 2);
        w.hire();
        assert_eq!(w.employees, 1);
        assert!(w.has_spare_capacity());
        w.hire();
        assert!(!w.has_spare_capacity());

        let mut o = outside(2, "10001");
        o.hire();
        assert_eq!(o.employees, 0);
        assert!(!o.has_spare_capacity());
    }

    #[test]
    fn fill_ratio() {
        let mut w = business(1, 4);
        w.hire();
        assert_eq!(w.fill_ratio(), 0.25);
        assert_eq!(business(2, 0).fill_ratio(), f64::INFINITY);
    }

    #[test]
    fn kind_labels_and_special_ids() {
        assert_eq!(business(1, 1).kind.label(), "retail");
        assert_eq!(outside(1, "10001").kind.label(), "outside");
        assert_eq!(outside(1, "10001").zipcode(), Some("10001"));
        assert_eq!(WorkplaceKind::School(SchoolId(3)).special_id(), Some(3));
        assert_eq!(business(1, 1).kind.special_id(), None);
    }
}

// ── SchoolTier ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod school_tier {
    use crate::SchoolTier;

    #[test]
    fn age_table_boundaries() {
        assert_eq!(SchoolTier::for_age(0), Some(SchoolTier::Daycare));
        assert_eq!(SchoolTier::for_age(4), Some(SchoolTier::Daycare));
        assert_eq!(SchoolTier::for_age(5), Some(SchoolTier::Primary));
        assert_eq!(SchoolTier::for_age(10), Some(SchoolTier::Primary));
        assert_eq!(SchoolTier::for_age(11), Some(SchoolTier::Middle));
        assert_eq!(SchoolTier::for_age(13), Some(SchoolTier::Middle));
        assert_eq!(SchoolTier::for_age(14), Some(SchoolTier::High));
        assert_eq!(SchoolTier::for_age(17), Some(SchoolTier::High));
        assert_eq!(SchoolTier::for_age(18), Some(SchoolTier::College));
        assert_eq!(SchoolTier::for_age(24), Some(SchoolTier::College));
        assert_eq!(SchoolTier::for_age(25), None);
    }

    #[test]
    fn compulsory_tiers() {
        assert!(!SchoolTier::Daycare.is_compulsory());
        assert!(SchoolTier::Middle.is_compulsory());
        assert!(!SchoolTier::College.is_compulsory());
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use crate::{PlacesError, RouteTable, TransitRoute};

    fn route(name: &str, zips: &[&str]) -> TransitRoute {
        TransitRoute { name: name.into(), zipcodes: zips.iter().map(|z| z.to_string()).collect() }
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = RouteTable::new(vec![route("A", &["1"]), route("A", &["2"])], vec![]).unwrap_err();
        assert!(matches!(err, PlacesError::DuplicateRoute(name) if name == "A"));
    }

    #[test]
    fn access_needs_a_route_and_no_block() {
        let table = RouteTable::new(
            vec![route("Metro-North", &["10001", "10022"]), route("Bee-Line", &["10550"])],
            vec!["10022".into()],
        )
        .unwrap();
        assert_eq!(table.route_for("10550"), Some(1));
        assert!(table.has_public("10001"));
        assert!(!table.has_public("10022"));
        assert!(!table.has_public("99999"));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::{SchoolTier, load_households, load_routes, load_schools, load_workplaces};

    #[test]
    fn households_load() {
        let csv = "id,lat,lon\n1,40.91,-73.78\n2,40.92,-73.79\n";
        let hs = load_households(Cursor::new(csv)).unwrap();
        assert_eq!(hs.len(), 2);
        assert_eq!(hs[1].location, GeoPoint::new(40.92, -73.79));
    }

    #[test]
    fn ids_must_follow_row_order() {
        let csv = "id,lat,lon\n2,40.91,-73.78\n";
        assert!(load_households(Cursor::new(csv)).is_err());
    }

    #[test]
    fn schools_parse_tier() {
        let csv = "id,lat,lon,tier,students\n1,40.9,-73.8,middle,300\n";
        let schools = load_schools(Cursor::new(csv)).unwrap();
        assert_eq!(schools[0].tier, SchoolTier::Middle);
        assert_eq!(schools[0].capacity, 300);
    }

    #[test]
    fn workplace_kinds() {
        let csv = "\
id,lat,lon,kind,category,min_capacity,max_capacity,special_id,zipcode
1,40.9,-73.8,retail,Sales,1,10,,
2,40.9,-73.8,school,A,5,50,3,
3,40.7,-74.0,outside,outside,0,0,,10001
";
        let ws = load_workplaces(Cursor::new(csv)).unwrap();
        assert_eq!(ws[0].kind, WorkplaceKind::Business("retail".into()));
        assert_eq!(ws[1].kind, WorkplaceKind::School(SchoolId(3)));
        assert_eq!(ws[2].zipcode(), Some("10001"));
        assert!(ws.iter().all(|w| w.employees == 0));
    }

    #[test]
    fn special_workplace_without_target_rejected() {
        let csv = "\
id,lat,lon,kind,category,min_capacity,max_capacity,special_id,zipcode
1,40.9,-73.8,hospital,A,5,50,,
";
        assert!(load_workplaces(Cursor::new(csv)).is_err());
    }

    #[test]
    fn route_zipcodes_split() {
        let csv = "name,zipcodes\nMetro-North,10001;10022\n";
        let routes = load_routes(Cursor::new(csv)).unwrap();
        assert_eq!(routes[0].zipcodes, vec!["10001", "10022"]);
    }
}
