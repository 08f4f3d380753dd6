//! Occupation back-assignment.
//!
//! In-town workers take the occupation their workplace category maps to.
//! Out-of-town workers have no category, so they are dealt occupations from
//! a shuffled rotation list that favours whatever the in-town workforce
//! falls short of in the census.  Once that shortfall is handed out, the
//! plain census shares take over.

use log::info;
use rustc_hash::FxHashMap;

use sp_agent::WorkSite;
use sp_core::SimRng;

use crate::PopulationContext;

/// Slots in a rotation list.
pub const ROTATION_SLOTS: usize = 100;

/// Label every employed agent with an occupation.  Returns the number of
/// out-of-town workers that received one.
pub fn assign_occupations(ctx: &mut PopulationContext) -> usize {
    let PopulationContext { roster, workplaces, occupations, occupation_map, rng, .. } = ctx;

    // ── In-town workers ───────────────────────────────────────────────────
    let mut in_town: FxHashMap<String, u64> = FxHashMap::default();
    for agent in roster.iter_mut() {
        let Some(WorkSite::Workplace(id)) = agent.work else { continue };
        let workplace = &workplaces[id.index()];
        if workplace.is_outside() {
            continue;
        }
        let occupation = occupation_map.resolve(&workplace.occupation_category).to_owned();
        *in_town.entry(occupation.clone()).or_default() += 1;
        agent.occupation = Some(occupation);
    }

    // ── Shortfall against the census ──────────────────────────────────────
    let shortfall: Vec<(String, f64)> = occupations
        .rows
        .iter()
        .filter_map(|row| {
            let achieved = in_town.get(&row.occupation).copied().unwrap_or(0);
            let missing = (row.count as u64).saturating_sub(achieved);
            (missing > 0).then(|| (row.occupation.clone(), missing as f64))
        })
        .collect();
    let total_shortfall: u64 = shortfall.iter().map(|(_, n)| *n as u64).sum();

    let shortfall_list = rotation_list(&shortfall, rng);
    let census: Vec<(String, f64)> = occupations
        .rows
        .iter()
        .map(|row| (row.occupation.clone(), row.percent))
        .collect();
    let census_list = rotation_list(&census, rng);

    // ── Out-of-town workers ───────────────────────────────────────────────
    let mut handed = 0u64;
    let mut census_cursor = 0usize;
    for agent in roster.iter_mut() {
        let Some(WorkSite::Workplace(id)) = agent.work else { continue };
        if !workplaces[id.index()].is_outside() {
            continue;
        }
        let occupation = if handed < total_shortfall && !shortfall_list.is_empty() {
            let occ = &shortfall_list[handed as usize % shortfall_list.len()];
            handed += 1;
            Some(occ)
        } else if !census_list.is_empty() {
            let occ = &census_list[census_cursor % census_list.len()];
            census_cursor += 1;
            Some(occ)
        } else {
            None
        };
        agent.occupation = occupation.cloned();
    }

    report(ctx);
    (handed as usize) + census_cursor
}

/// Shuffled list of `ROTATION_SLOTS` labels, each occurring in proportion
/// to its weight (largest-remainder rounding).  Empty if all weights are 0.
pub fn rotation_list(weights: &[(String, f64)], rng: &mut SimRng) -> Vec<String> {
    let counts = apportion(
        &weights.iter().map(|(_, w)| *w).collect::<Vec<_>>(),
        ROTATION_SLOTS,
    );
    let mut list: Vec<String> = weights
        .iter()
        .zip(counts)
        .flat_map(|((label, _), n)| std::iter::repeat_n(label.clone(), n))
        .collect();
    rng.shuffle(&mut list);
    list
}

/// Split `slots` among `weights` proportionally, by largest remainder.
/// Ties go to the earlier entry.
pub fn apportion(weights: &[f64], slots: usize) -> Vec<usize> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return vec![0; weights.len()];
    }
    let quotas: Vec<f64> = weights
        .iter()
        .map(|&w| w.max(0.0) / total * slots as f64)
        .collect();
    let mut counts: Vec<usize> = quotas.iter().map(|q| q.floor() as usize).collect();

    let assigned: usize = counts.iter().sum();
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = quotas[a] - quotas[a].floor();
        let rb = quotas[b] - quotas[b].floor();
        rb.total_cmp(&ra)
    });
    for &i in order.iter().take(slots.saturating_sub(assigned)) {
        counts[i] += 1;
    }
    counts
}

/// Log census occupation shares next to the achieved ones.
fn report(ctx: &PopulationContext) {
    let mut achieved: FxHashMap<&str, u64> = FxHashMap::default();
    let mut labelled = 0u64;
    for agent in ctx.roster.iter() {
        if let Some(occ) = &agent.occupation {
            *achieved.entry(occ.as_str()).or_default() += 1;
            labelled += 1;
        }
    }
    if labelled == 0 {
        return;
    }
    info!("occupations (census % / assigned %):");
    for row in &ctx.occupations.rows {
        let n = achieved.get(row.occupation.as_str()).copied().unwrap_or(0);
        info!(
            "  {:<40} {:>6.2} {:>6.2}",
            row.occupation,
            row.percent,
            n as f64 * 100.0 / labelled as f64
        );
    }
}
