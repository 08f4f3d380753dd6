//! Concrete commute groups.

use std::fmt;

use sp_core::{CarpoolId, TransitId};

/// Where a group of commuters is headed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destination {
    InTown,
    Zipcode(String),
}

impl Destination {
    pub fn zipcode(&self) -> Option<&str> {
        match self {
            Destination::Zipcode(z) => Some(z),
            Destination::InTown => None,
        }
    }
}

/// `0` for in town, the zipcode otherwise; the flat-file encoding.
impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::InTown => f.write_str("0"),
            Destination::Zipcode(z) => f.write_str(z),
        }
    }
}

/// One shared private vehicle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carpool {
    pub id:          CarpoolId,
    /// Workplace kind label of the member that created the unit
    /// (`outside` for out-of-town groups).
    pub kind:        String,
    /// Travel time of the member that created the unit, minutes.
    pub travel_time: f64,
    pub destination: Destination,
}

/// One public-transit route in use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicTransit {
    pub id:          TransitId,
    pub kind:        String,
    pub travel_time: f64,
    pub destination: Destination,
    /// Name of the route this group rides.
    pub route:       String,
}
