//! Residential households.

use sp_core::{GeoPoint, HouseholdId};

/// One residential unit.  Never changes after load.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Household {
    pub id:       HouseholdId,
    pub location: GeoPoint,
}

impl Household {
    pub fn new(id: HouseholdId, lat: f64, lon: f64) -> Self {
        Self { id, location: GeoPoint::new(lat, lon) }
    }
}
