//! Named public-transit routes and the zipcodes they serve.

use crate::{PlacesError, PlacesResult};

/// A public-transit route reaching a set of out-of-town zipcodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitRoute {
    pub name:     String,
    pub zipcodes: Vec<String>,
}

impl TransitRoute {
    pub fn serves(&self, zipcode: &str) -> bool {
        self.zipcodes.iter().any(|z| z == zipcode)
    }
}

/// All routes in input order plus the zipcodes known to lack public transit.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes:            Vec<TransitRoute>,
    no_public_transit: Vec<String>,
}

impl RouteTable {
    /// Build a table; route names must be unique.
    pub fn new(routes: Vec<TransitRoute>, no_public_transit: Vec<String>) -> PlacesResult<Self> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.name == route.name) {
                return Err(PlacesError::DuplicateRoute(route.name.clone()));
            }
        }
        Ok(Self { routes, no_public_transit })
    }

    pub fn routes(&self) -> &[TransitRoute] {
        &self.routes
    }

    /// Index of the first route serving `zipcode`.
    pub fn route_for(&self, zipcode: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.serves(zipcode))
    }

    /// `true` if public transit reaches `zipcode`: it is not listed as
    /// inaccessible and at least one route serves it.
    pub fn has_public(&self, zipcode: &str) -> bool {
        !self.no_public_transit.iter().any(|z| z == zipcode) && self.route_for(zipcode).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
