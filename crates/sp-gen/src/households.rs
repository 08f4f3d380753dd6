//! The household pass.
//!
//! 1. A random `floor(fr_vacancy × households)` of the inventory stays empty.
//! 2. One head per occupied household, ages drawn from the head ledger.
//! 3. Each head gets a size category (1, 2, 3, 4+) from the census table.
//! 4. Households are completed around their head with spouses, children, or
//!    roommates.
//! 5. Whatever the ledger still holds is backfilled into size-4+ households
//!    and retirement homes, leaving the ledger at exactly zero.
//!
//! Member ages are drawn from a target range; if the ledger bracket of the
//! drawn age is empty the draw degrades to any age with supply left,
//! rejecting 60+ ages with probability `1 − fr_60`.

use log::{debug, info};
use rand::seq::index;

use sp_agent::Home;
use sp_core::{AgentId, GeoPoint, HouseholdId};

use crate::{GenError, GenResult, PopulationContext};

/// Parent-child age gaps a child's age range is derived from.
const MAX_PARENT_GAP: i32 = 43;
const MIN_PARENT_GAP: i32 = 18;
/// Oldest age counted as a child.
const MAX_CHILD_AGE: i32 = 17;
/// Largest age difference between spouses.
const SPOUSE_GAP: i32 = 15;
const ADULT_AGE: u8 = 18;
/// Heads older than this never start a family with children.
const MAX_PARENT_AGE: u8 = 60;
/// Ages at or above this count toward the `fr_60` target.
const ELDERLY_AGE: u8 = 60;

// ── HouseholdHead ─────────────────────────────────────────────────────────────

/// The first agent of a household, around whom the rest is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HouseholdHead {
    pub agent:     AgentId,
    pub age:       u8,
    pub household: HouseholdId,
    pub location:  GeoPoint,
    /// Size category: 1, 2, 3, or 4 meaning "4 or more".
    pub size:      u8,
}

// ── Pass ──────────────────────────────────────────────────────────────────────

/// Populate every non-vacant household and drain the age ledger.
pub fn assign_households(ctx: &mut PopulationContext) -> GenResult<()> {
    let available = choose_vacancies(ctx);
    let mut heads = select_heads(ctx, available)?;
    assign_sizes(ctx, &mut heads)?;

    for head in &heads {
        complete_household(ctx, head)?;
    }
    info!(
        "{} households completed, {} people left for backfill",
        heads.len(),
        ctx.ages.total_remaining()
    );

    backfill(ctx)
}

/// Mark a random subset of households vacant; return the rest.
fn choose_vacancies(ctx: &mut PopulationContext) -> Vec<HouseholdId> {
    let total = ctx.households.len();
    let n_vacant = ((ctx.config.fr_vacancy * total as f64).floor() as usize).min(total);

    let mut is_vacant = vec![false; total];
    for i in index::sample(ctx.rng.inner(), total, n_vacant) {
        is_vacant[i] = true;
    }
    ctx.vacant = ctx
        .households
        .iter()
        .filter(|h| is_vacant[h.id.index()])
        .map(|h| h.id)
        .collect();
    ctx.households
        .iter()
        .filter(|h| !is_vacant[h.id.index()])
        .map(|h| h.id)
        .collect()
}

/// One head per occupied household, drawn bracket by bracket from the head
/// ledger into randomly picked households.
fn select_heads(
    ctx: &mut PopulationContext,
    mut available: Vec<HouseholdId>,
) -> GenResult<Vec<HouseholdHead>> {
    let n_heads = ctx.head_ages.total_remaining();
    if n_heads > available.len() as u64 {
        return Err(GenError::NoHouseholdsForHeads { heads: n_heads, available: available.len() });
    }

    let mut heads = Vec::with_capacity(n_heads as usize);
    for b in 0..ctx.head_ages.brackets().len() {
        let (min, max) = (ctx.head_ages.brackets()[b].min, ctx.head_ages.brackets()[b].max);
        while ctx.head_ages.brackets()[b].remaining > 0 {
            let pick = ctx.rng.gen_range(0..available.len());
            let household = available.swap_remove(pick);

            let age = draw_head_age(ctx, min, max)?;
            ctx.head_ages.deplete(age)?;
            ctx.ages.deplete(age)?;

            let location = ctx.households[household.index()].location;
            let agent = ctx.roster.spawn(age, location, Home::Household(household));
            heads.push(HouseholdHead { agent, age, household, location, size: 1 });
        }
    }
    Ok(heads)
}

/// Uniform age in `[min, max]`, redrawn while it is 60+ and fails the
/// `fr_60` acceptance test.
fn draw_head_age(ctx: &mut PopulationContext, min: u8, max: u8) -> GenResult<u8> {
    for _ in 0..ctx.config.max_resample_attempts {
        let age = ctx.rng.gen_range(min..=max);
        if age < ELDERLY_AGE || ctx.rng.uniform() <= ctx.config.fr_60 {
            return Ok(age);
        }
    }
    Err(GenError::SamplingExhausted("household head age"))
}

/// Give each head a size category, matching the census shares exactly.
fn assign_sizes(ctx: &mut PopulationContext, heads: &mut [HouseholdHead]) -> GenResult<()> {
    let mut left = ctx.household_sizes.allocate(heads.len() as u32);
    for head in heads.iter_mut() {
        let pick = ctx.rng.gen_range(0..left.len());
        let slot = if left[pick] > 0 {
            pick
        } else {
            left.iter().position(|&n| n > 0).ok_or(GenError::NoHouseholdSizeSlot)?
        };
        left[slot] -= 1;
        head.size = slot as u8 + 1;
    }
    Ok(())
}

// ── Household completion ──────────────────────────────────────────────────────

/// Add the members a head's size category calls for.
pub fn complete_household(ctx: &mut PopulationContext, head: &HouseholdHead) -> GenResult<()> {
    let fr_families = ctx.config.fr_families;
    match head.size {
        0 | 1 => {}
        2 => {
            if ctx.rng.uniform() <= fr_families {
                if head.age > MAX_PARENT_AGE || ctx.rng.uniform() <= ctx.config.fr_couple {
                    add_spouse(ctx, head)?;
                } else {
                    add_children(ctx, head, 1, head.age, head.age)?;
                }
            } else {
                add_roommates(ctx, head, 1)?;
            }
        }
        size => {
            let others = size - 1;
            if ctx.rng.uniform() <= fr_families && head.age <= MAX_PARENT_AGE {
                if ctx.rng.uniform() <= ctx.config.fr_single_parent {
                    add_children(ctx, head, others, head.age, head.age)?;
                } else {
                    let spouse_age = add_spouse(ctx, head)?;
                    add_children(ctx, head, others - 1, head.age, spouse_age)?;
                }
            } else {
                add_roommates(ctx, head, others)?;
            }
            if size >= 4 {
                ctx.large_households.push(head.household);
            }
        }
    }
    Ok(())
}

/// Spouse within 15 years of the head, adult.  Returns the spouse's age.
fn add_spouse(ctx: &mut PopulationContext, head: &HouseholdHead) -> GenResult<u8> {
    let age = head.age as i32;
    let min = (age - SPOUSE_GAP).max(ADULT_AGE as i32);
    let max = (age + SPOUSE_GAP).min(ctx.config.max_age as i32);
    let spouse = add_member(ctx, head, min, max, true)?;
    ctx.roster[head.agent].is_family_member = true;
    Ok(ctx.roster[spouse].age)
}

/// `n` children of parents aged `parent_a` and `parent_b`.
fn add_children(
    ctx: &mut PopulationContext,
    head: &HouseholdHead,
    n: u8,
    parent_a: u8,
    parent_b: u8,
) -> GenResult<()> {
    let (min, max) = child_age_range(parent_a, parent_b);
    for _ in 0..n {
        add_member(ctx, head, min, max, true)?;
    }
    ctx.roster[head.agent].is_family_member = true;
    Ok(())
}

fn add_roommates(ctx: &mut PopulationContext, head: &HouseholdHead, n: u8) -> GenResult<()> {
    let max_age = ctx.config.max_age as i32;
    for _ in 0..n {
        add_member(ctx, head, ADULT_AGE as i32, max_age, false)?;
    }
    Ok(())
}

/// Child age range `[max(0, min(17, older − 43)), max(0, min(17, younger − 18))]`.
pub fn child_age_range(parent_a: u8, parent_b: u8) -> (i32, i32) {
    let older = parent_a.max(parent_b) as i32;
    let younger = parent_a.min(parent_b) as i32;
    let min = (older - MAX_PARENT_GAP).min(MAX_CHILD_AGE).max(0);
    let max = (younger - MIN_PARENT_GAP).min(MAX_CHILD_AGE).max(0);
    (min, max)
}

/// Create one member of `head`'s household with an age from `[min, max]`.
///
/// Inverted ranges are repaired first: if `min > max + 1` the bounds become
/// `[max + 1, min]`; an empty range `min == max + 1` is widened upward by two
/// years.  If the drawn age's bracket is exhausted, any age with supply left
/// is taken instead.
fn add_member(
    ctx: &mut PopulationContext,
    head: &HouseholdHead,
    min: i32,
    max: i32,
    family: bool,
) -> GenResult<AgentId> {
    let max_age = ctx.config.max_age as i32;
    let (mut lo, mut hi) = (min, max);
    if lo > hi + 1 {
        (lo, hi) = (hi + 1, lo);
    }
    if lo == hi + 1 {
        hi = (hi + 2).min(max_age);
    }
    let lo = lo.clamp(0, max_age) as u8;
    let hi = hi.clamp(0, max_age).max(lo as i32) as u8;

    let mut age = ctx.rng.gen_range(lo..=hi);
    if !ctx.ages.has_supply(age)? {
        age = draw_any_age(ctx)?;
    }
    ctx.ages.deplete(age)?;

    let id = ctx.roster.spawn(age, head.location, Home::Household(head.household));
    ctx.roster[id].is_family_member = family;
    Ok(id)
}

/// Any age whose bracket still has supply, 60+ accepted with probability
/// `fr_60`.  Terminates because the ledger holds someone; capped anyway.
fn draw_any_age(ctx: &mut PopulationContext) -> GenResult<u8> {
    if ctx.ages.is_exhausted() {
        return Err(GenError::SamplingExhausted("household member age"));
    }
    let max_age = ctx.config.max_age;
    for _ in 0..ctx.config.max_resample_attempts {
        let age = ctx.rng.gen_range(0..=max_age);
        if age >= ELDERLY_AGE && ctx.rng.uniform() > ctx.config.fr_60 {
            continue;
        }
        if ctx.ages.has_supply(age)? {
            return Ok(age);
        }
    }
    Err(GenError::SamplingExhausted("household member age"))
}

// ── Backfill ──────────────────────────────────────────────────────────────────

/// Place everyone still in the ledger.
///
/// Ages 60+ go to a retirement home with probability `1 − fr_60` (the home
/// of a uniformly chosen existing resident, no capacity check); everyone else
/// joins a random size-4+ household.
fn backfill(ctx: &mut PopulationContext) -> GenResult<()> {
    let mut to_households = 0usize;
    let mut to_retirement = 0usize;

    for b in 0..ctx.ages.brackets().len() {
        let (min, max) = (ctx.ages.brackets()[b].min, ctx.ages.brackets()[b].max);
        while ctx.ages.brackets()[b].remaining > 0 {
            let age = ctx.rng.gen_range(min..=max);
            ctx.ages.deplete(age)?;

            let elderly_to_home = age >= ELDERLY_AGE && !ctx.rng.gen_bool(ctx.config.fr_60);
            let resident = if elderly_to_home {
                ctx.rng.choose(&ctx.retirement_residents).copied()
            } else {
                None
            };

            match resident {
                Some(resident) => {
                    let (home, location) = (ctx.roster[resident].home, ctx.roster[resident].location);
                    ctx.roster.spawn(age, location, home);
                    to_retirement += 1;
                }
                None => {
                    let household = *ctx
                        .rng
                        .choose(&ctx.large_households)
                        .ok_or(GenError::NoBackfillHousehold)?;
                    let location = ctx.households[household.index()].location;
                    ctx.roster.spawn(age, location, Home::Household(household));
                    to_households += 1;
                }
            }
        }
    }

    debug!("backfill: {to_households} into large households, {to_retirement} into retirement homes");
    Ok(())
}
