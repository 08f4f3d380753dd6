//! Initial infections.

use rand::seq::index;

use sp_core::AgentId;

use crate::{GenError, GenResult, PopulationContext};

/// Infect `n_infected` distinct agents chosen uniformly.
pub fn seed_infections(ctx: &mut PopulationContext) -> GenResult<Vec<AgentId>> {
    let n = ctx.config.n_infected as usize;
    let total = ctx.roster.len();
    if n > total {
        return Err(GenError::Config(format!(
            "cannot infect {n} agents in a population of {total}"
        )));
    }

    let infected: Vec<AgentId> = index::sample(ctx.rng.inner(), total, n)
        .into_iter()
        .map(AgentId::from_index)
        .collect();
    for &id in &infected {
        ctx.roster[id].is_infected = true;
    }
    Ok(infected)
}
