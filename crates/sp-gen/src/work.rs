//! The work pass: commute sampling and workplace selection.
//!
//! `n_employed` (time, mode) pairs are sampled up front.  Pairs with a time
//! at or below `t_wfh` each turn a random eligible agent into a home worker;
//! the rest are handed out one per eligible agent in roster order, and each
//! agent then gets the workplace whose distance best matches the distance
//! implied by its commute.

use log::{info, warn};

use sp_agent::{Agent, SpecialWork, WorkSite};
use sp_core::{AgentId, CommuteMode, GeoPoint, PopulationConfig, SimRng};
use sp_places::{Workplace, WorkplaceKind};

use crate::{GenError, GenResult, PopulationContext};

/// Progress is logged every this many workers.
const PROGRESS_EVERY: usize = 5000;

/// Assign work to up to `n_employed` agents.  Returns the number employed.
pub fn assign_work(ctx: &mut PopulationContext) -> GenResult<usize> {
    let n_employed = ctx.config.n_employed as usize;
    let commutes = ctx.sampler.sample_commutes(&mut ctx.rng, n_employed);

    let (mut employed, mut travelling) = assign_work_from_home(ctx, commutes)?;
    let from_home = employed;

    // Popped from the back.
    travelling.reverse();

    let PopulationContext { config, sampler, roster, workplaces, rng, .. } = ctx;
    for agent in roster.iter_mut() {
        if travelling.is_empty() {
            break;
        }
        if agent.works || !is_eligible(config, agent) {
            continue;
        }
        let Some((time, mut mode)) = travelling.pop() else { break };

        if sampler.is_walk_time(time) {
            mode = CommuteMode::Walk;
        } else if mode == CommuteMode::Walk {
            mode = sampler.resample_mode(rng, &CommuteMode::RIDING);
        }
        agent.commute_time = time;
        agent.commute_mode = Some(mode);

        let implied = sampler.implied_distance_km(mode, time);
        let chosen = select_workplace(
            workplaces,
            agent.location,
            implied,
            config.workplace_tolerance_km,
            config.least_filled_pool,
            rng,
        )
        .ok_or_else(|| GenError::Config("no workplaces to assign".into()))?;
        employ(agent, &workplaces[chosen]);

        employed += 1;
        if employed % PROGRESS_EVERY == 0 {
            info!("assigned workplaces to {employed} agents");
        }
    }

    info!("{employed} agents employed, {from_home} of them working from home");
    if employed < n_employed {
        warn!("assigned employment to {employed} agents, requested {n_employed}");
    }
    Ok(employed)
}

/// Working age, living in a household, not in an institution.
fn is_eligible(config: &PopulationConfig, agent: &Agent) -> bool {
    config.is_working_age(agent.age)
        && !agent.is_institutionalized()
        && agent.household().is_some()
}

/// Consume every work-from-home pair on a random eligible agent.
///
/// Returns the number of home workers and the remaining (travelling) pairs,
/// with sampled `wfh` modes on longer trips replaced by a travelling mode.
fn assign_work_from_home(
    ctx: &mut PopulationContext,
    commutes: Vec<(f64, CommuteMode)>,
) -> GenResult<(usize, Vec<(f64, CommuteMode)>)> {
    let PopulationContext { config, sampler, roster, rng, .. } = ctx;

    let mut candidates = roster
        .iter()
        .filter(|a| !a.works && is_eligible(config, a))
        .count();
    let mut from_home = 0;
    let mut travelling = Vec::with_capacity(commutes.len());
    let mut dropped = 0;

    for (time, mode) in commutes {
        if !sampler.is_wfh_time(time) {
            let mode = if mode == CommuteMode::WorkFromHome {
                sampler.resample_mode(rng, &CommuteMode::TRAVELLING)
            } else {
                mode
            };
            travelling.push((time, mode));
            continue;
        }

        if candidates == 0 {
            dropped += 1;
            continue;
        }
        let mut found = false;
        for _ in 0..config.max_resample_attempts {
            let i = rng.gen_range(0..roster.len());
            let agent = &mut roster[AgentId::from_index(i)];
            if agent.works || !is_eligible(config, agent) {
                continue;
            }
            let Some(household) = agent.household() else { continue };
            agent.works = true;
            agent.works_from_home = true;
            agent.commute_time = time;
            agent.commute_mode = Some(CommuteMode::WorkFromHome);
            agent.work = Some(WorkSite::Home(household));
            found = true;
            break;
        }
        if !found {
            return Err(GenError::SamplingExhausted("work-from-home agent"));
        }
        candidates -= 1;
        from_home += 1;
    }

    if dropped > 0 {
        warn!("{dropped} work-from-home slots left unused: no eligible agents remain");
    }
    Ok((from_home, travelling))
}

/// Record employment at `workplace`, following surrogate workplaces back to
/// their institution.
fn employ(agent: &mut Agent, workplace: &Workplace) {
    agent.works = true;
    agent.work = Some(WorkSite::Workplace(workplace.id));
    match workplace.kind {
        WorkplaceKind::School(school) => {
            agent.works_at_school = true;
            agent.special_work = Some(SpecialWork::School(school));
        }
        WorkplaceKind::RetirementHome(home) => {
            agent.works_at_retirement_home = true;
            agent.special_work = Some(SpecialWork::RetirementHome(home));
        }
        WorkplaceKind::Hospital(hospital) => {
            agent.works = false;
            agent.works_at_hospital = true;
            agent.special_work = Some(SpecialWork::Hospital(hospital));
            agent.hospital = Some(hospital);
        }
        WorkplaceKind::Business(_) | WorkplaceKind::Outside { .. } => {}
    }
}

// ── Workplace selection ───────────────────────────────────────────────────────

/// Pick the workplace for a commute of `implied_km` from `origin`, hire there,
/// and return its index.  `None` only if `workplaces` is empty.
///
/// The residual of a workplace is `|implied_km − distance(origin, workplace)|`.
///
/// - No residual within `tolerance_km`: the closest-residual workplace.
/// - Best candidate out of town: that placeholder, no hiring counted.
/// - Otherwise in-town candidates with spare capacity, least filled first;
///   one of the first `pool` is chosen uniformly.
/// - Every in-town candidate full: the best out-of-town candidate, else the
///   closest-residual workplace that is out of town or has room, else the
///   best candidate over capacity.
pub fn select_workplace(
    workplaces:   &mut [Workplace],
    origin:       GeoPoint,
    implied_km:   f64,
    tolerance_km: f64,
    pool:         usize,
    rng:          &mut SimRng,
) -> Option<usize> {
    let residuals: Vec<f64> = workplaces
        .iter()
        .map(|w| (implied_km - origin.distance_km(w.location)).abs())
        .collect();
    let by_residual = |a: &usize, b: &usize| residuals[*a].total_cmp(&residuals[*b]);

    let mut candidates: Vec<usize> = (0..workplaces.len())
        .filter(|&i| residuals[i] <= tolerance_km)
        .collect();
    candidates.sort_by(by_residual);

    let Some(&best) = candidates.first() else {
        let closest = (0..workplaces.len()).min_by(by_residual)?;
        workplaces[closest].hire();
        return Some(closest);
    };
    if workplaces[best].is_outside() {
        return Some(best);
    }

    let mut open: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| workplaces[i].has_spare_capacity())
        .collect();

    if open.is_empty() {
        if let Some(&outside) = candidates.iter().find(|&&i| workplaces[i].is_outside()) {
            return Some(outside);
        }
        let fallback = (0..workplaces.len())
            .filter(|&i| workplaces[i].is_outside() || workplaces[i].has_spare_capacity())
            .min_by(by_residual);
        let chosen = fallback.unwrap_or_else(|| {
            warn!("every workplace is full; hiring over capacity");
            best
        });
        workplaces[chosen].hire();
        return Some(chosen);
    }

    open.sort_by(|&a, &b| workplaces[a].fill_ratio().total_cmp(&workplaces[b].fill_ratio()));
    let chosen = open[rng.gen_range(0..open.len().min(pool.max(1)))];
    workplaces[chosen].hire();
    Some(chosen)
}
