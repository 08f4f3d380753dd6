//! Carpool and public-transit grouping.
//!
//! Commuters sharing a mode are bucketed by destination: in-town commuters
//! by travel time, out-of-town commuters by zipcode.  Buckets keep the order
//! their first member was seen in.

use std::hash::Hash;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use sp_agent::{AgentRoster, WorkSite};
use sp_core::{AgentId, CarpoolId, CommuteMode, TransitId};
use sp_places::Workplace;
use sp_transit::{CommuteSampler, Destination, TransitRegistry};

use crate::PopulationContext;

/// Largest carpool size category ("4 or more").
const MAX_CARPOOL: u8 = 4;
const MIN_CARPOOL: u8 = 2;

// ── Buckets ───────────────────────────────────────────────────────────────────

/// Insertion-ordered multimap from a bucket key to agents.
struct Buckets<K> {
    index:   FxHashMap<K, usize>,
    buckets: Vec<(K, Vec<AgentId>)>,
}

impl<K: Hash + Eq + Clone> Buckets<K> {
    fn new() -> Self {
        Self { index: FxHashMap::default(), buckets: Vec::new() }
    }

    fn push(&mut self, key: K, agent: AgentId) {
        let next = self.buckets.len();
        let slot = *self.index.entry(key.clone()).or_insert(next);
        if slot == next {
            self.buckets.push((key, Vec::new()));
        }
        self.buckets[slot].1.push(agent);
    }

    fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn into_vec(self) -> Vec<(K, Vec<AgentId>)> {
        self.buckets
    }
}

/// Workplace of an agent employed away from home.
fn workplace_of<'w>(roster: &AgentRoster, workplaces: &'w [Workplace], agent: AgentId) -> Option<&'w Workplace> {
    match roster[agent].work {
        Some(WorkSite::Workplace(id)) => workplaces.get(id.index()),
        _ => None,
    }
}

/// Bucket key for in-town carpoolers: the census bucket of the travel time,
/// or the time itself if no bucket holds it.
fn time_key(sampler: &CommuteSampler, minutes: f64) -> String {
    sampler
        .bucket_for(minutes)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{minutes}"))
}

// ── Carpools ──────────────────────────────────────────────────────────────────

/// Pack every carpool commuter into a concrete carpool unit.  Returns the
/// number of units created.
///
/// Each commuter draws a target carpool size from the census; within a
/// bucket, commuters with the same target are cut into units of that size.
/// Larger leftovers form an undersized unit of their own; a single leftover
/// joins the most recently created unit, whichever bucket it serves.  No unit
/// ever has fewer than two members: lone leftovers seen before any unit
/// exists wait for the first one, and a town with a single carpool
/// commuter sends them by car.
pub fn group_carpools(ctx: &mut PopulationContext) -> usize {
    let PopulationContext { roster, workplaces, sampler, transit, rng, .. } = ctx;

    let mut in_town: Buckets<String> = Buckets::new();
    let mut outside: Buckets<String> = Buckets::new();
    let mut n = 0;
    for agent in roster.iter() {
        if agent.commute_mode != Some(CommuteMode::Carpool) {
            continue;
        }
        let Some(workplace) = workplace_of(roster, workplaces, agent.id) else { continue };
        match workplace.zipcode() {
            Some(zip) => outside.push(zip.to_owned(), agent.id),
            None => in_town.push(time_key(sampler, agent.commute_time), agent.id),
        }
        n += 1;
    }

    let mut sizes = sampler.sample_carpool_sizes(rng, n);
    let had_outside = !outside.is_empty();
    let before = transit.carpools().len();

    let mut latest: Option<CarpoolId> = None;
    let mut waiting: Vec<AgentId> = Vec::new();
    for (_, members) in in_town.into_vec().into_iter().chain(outside.into_vec()) {
        let mut by_size: [Vec<AgentId>; (MAX_CARPOOL - MIN_CARPOOL + 1) as usize] = Default::default();
        for agent in members {
            let size = sizes.pop().unwrap_or(MIN_CARPOOL).clamp(MIN_CARPOOL, MAX_CARPOOL);
            by_size[(size - MIN_CARPOOL) as usize].push(agent);
        }

        for (offset, mut group) in by_size.into_iter().enumerate() {
            let size = offset + MIN_CARPOOL as usize;
            while group.len() > size {
                let unit: Vec<AgentId> = group.drain(..size).collect();
                latest = Some(form_unit(roster, workplaces, transit, &unit));
            }
            match (group.len(), latest) {
                (0, _) => {}
                (1, Some(id)) => roster[group[0]].carpool = Some(id),
                (1, None) => waiting.push(group[0]),
                _ => latest = Some(form_unit(roster, workplaces, transit, &group)),
            }
        }
    }

    match (latest, waiting.len()) {
        (_, 0) => {}
        (Some(id), _) => {
            for &agent in &waiting {
                roster[agent].carpool = Some(id);
            }
        }
        (None, 1) => {
            warn!("a lone carpool commuter has nobody to share with; switching to car");
            roster[waiting[0]].commute_mode = Some(CommuteMode::Car);
        }
        (None, _) => {
            form_unit(roster, workplaces, transit, &waiting);
        }
    }

    let created = transit.carpools().len() - before;
    if !had_outside {
        warn!("no out-of-town workplaces have carpools");
    }
    debug!("{n} carpool commuters in {created} carpools");
    created
}

/// Create a new unit for `members`; the first member defines its record.
fn form_unit(
    roster:     &mut AgentRoster,
    workplaces: &[Workplace],
    transit:    &mut TransitRegistry,
    members:    &[AgentId],
) -> CarpoolId {
    let id = transit.next_carpool_id();
    for &agent in members {
        if let Some(workplace) = workplace_of(roster, workplaces, agent) {
            let destination = match workplace.zipcode() {
                Some(zip) => Destination::Zipcode(zip.to_owned()),
                None => Destination::InTown,
            };
            transit.create_carpool(id, workplace.kind.label(), roster[agent].commute_time, destination);
        }
        roster[agent].carpool = Some(id);
    }
    id
}

// ── Public transit ────────────────────────────────────────────────────────────

/// Put every public-transit commuter on a route group.  Commuters whose
/// destination public transit does not reach switch to driving.  Returns
/// the number of commuters placed.
pub fn group_public_transit(ctx: &mut PopulationContext) -> usize {
    let PopulationContext { roster, workplaces, transit, rng, .. } = ctx;

    let mut in_town: Buckets<i64> = Buckets::new();
    let mut outside: Buckets<String> = Buckets::new();
    let mut to_car = Vec::new();
    for agent in roster.iter() {
        if agent.commute_mode != Some(CommuteMode::Public) {
            continue;
        }
        let Some(workplace) = workplace_of(roster, workplaces, agent.id) else { continue };
        match workplace.zipcode() {
            Some(zip) if !transit.routes().has_public(zip) => to_car.push(agent.id),
            Some(zip) => outside.push(zip.to_owned(), agent.id),
            None => in_town.push(agent.commute_time.trunc() as i64, agent.id),
        }
    }

    let mut placed = 0;
    for (zip, members) in outside.into_vec() {
        let time = roster[members[0]].commute_time;
        let group = transit.create_public_transit("outside", time, &Destination::Zipcode(zip), rng);
        placed += board(roster, &members, group, &mut to_car);
    }
    for (minutes, members) in in_town.into_vec() {
        let kind = workplace_of(roster, workplaces, members[0])
            .map(|w| w.kind.label().to_owned())
            .unwrap_or_default();
        let group = transit.create_public_transit(&kind, minutes as f64, &Destination::InTown, rng);
        placed += board(roster, &members, group, &mut to_car);
    }

    for &agent in &to_car {
        roster[agent].commute_mode = Some(CommuteMode::Car);
    }
    debug!(
        "{placed} public transit commuters in {} groups, {} switched to car",
        transit.public_transit().len(),
        to_car.len()
    );
    placed
}

fn board(
    roster:  &mut AgentRoster,
    members: &[AgentId],
    group:   Option<TransitId>,
    to_car:  &mut Vec<AgentId>,
) -> usize {
    match group {
        Some(id) => {
            for &agent in members {
                roster[agent].public_transit = Some(id);
            }
            members.len()
        }
        None => {
            to_car.extend_from_slice(members);
            0
        }
    }
}
