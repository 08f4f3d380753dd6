//! The `TransitRegistry` — every carpool unit and transit group created so
//! far.

use sp_core::{CarpoolId, SimRng, TransitId};
use sp_places::RouteTable;

use crate::{Carpool, Destination, PublicTransit};

/// Owns the created groups and the route table they are drawn from.
///
/// Ids are sequential from 1.  Creation is idempotent: asking for a carpool
/// id that already exists, or for a route that already has a group, returns
/// the existing record unchanged.
#[derive(Clone, Debug, Default)]
pub struct TransitRegistry {
    carpools: Vec<Carpool>,
    public:   Vec<PublicTransit>,
    routes:   RouteTable,
    /// Group id per route, parallel to `routes.routes()`.
    route_groups: Vec<Option<TransitId>>,
}

impl TransitRegistry {
    pub fn new(routes: RouteTable) -> Self {
        let route_groups = vec![None; routes.routes().len()];
        Self { carpools: Vec::new(), public: Vec::new(), routes, route_groups }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn carpools(&self) -> &[Carpool] {
        &self.carpools
    }

    pub fn public_transit(&self) -> &[PublicTransit] {
        &self.public
    }

    /// Id the next new carpool unit will get.
    pub fn next_carpool_id(&self) -> CarpoolId {
        CarpoolId::from_index(self.carpools.len())
    }

    /// Create carpool `id` unless it already exists.  Returns `true` if a
    /// record was added.
    ///
    /// Ids must be requested in order: `id` is either an existing one or
    /// [`next_carpool_id`](Self::next_carpool_id).
    pub fn create_carpool(
        &mut self,
        id:          CarpoolId,
        kind:        &str,
        travel_time: f64,
        destination: Destination,
    ) -> bool {
        if id.index() < self.carpools.len() {
            return false;
        }
        debug_assert_eq!(id, self.next_carpool_id(), "carpool ids must be created in order");
        self.carpools.push(Carpool { id, kind: kind.to_owned(), travel_time, destination });
        true
    }

    /// Public-transit group for commuters to `destination`.
    ///
    /// Out of town, the group rides the first route serving the zipcode.  In
    /// town, a route is picked uniformly at random.  Every route has at most
    /// one group; a route that already has one returns its id.
    ///
    /// Returns `None` when no route can take the commuters there; the caller
    /// falls back to driving.
    pub fn create_public_transit(
        &mut self,
        kind:        &str,
        travel_time: f64,
        destination: &Destination,
        rng:         &mut SimRng,
    ) -> Option<TransitId> {
        let route = match destination {
            Destination::Zipcode(zip) => {
                if !self.routes.has_public(zip) {
                    return None;
                }
                self.routes.route_for(zip)?
            }
            Destination::InTown => {
                if self.routes.is_empty() {
                    return None;
                }
                rng.gen_range(0..self.routes.routes().len())
            }
        };

        if let Some(id) = self.route_groups[route] {
            return Some(id);
        }
        let id = TransitId::from_index(self.public.len());
        self.public.push(PublicTransit {
            id,
            kind: kind.to_owned(),
            travel_time,
            destination: destination.clone(),
            route: self.routes.routes()[route].name.clone(),
        });
        self.route_groups[route] = Some(id);
        Some(id)
    }
}
