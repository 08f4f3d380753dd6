//! Retirement-home residents and hospital patients.
//!
//! Both passes run before the household pass so the ledger already accounts
//! for everyone living in an institution when households are filled.

use log::debug;

use sp_agent::Home;

use crate::{GenResult, PopulationContext};

/// Youngest age of a retirement-home resident.
pub const MIN_RESIDENT_AGE: u8 = 75;

/// Fill every retirement home with residents aged 75 to `max_age`.
/// Returns the number of residents created.
pub fn assign_retirement_homes(ctx: &mut PopulationContext) -> GenResult<usize> {
    let max_age = ctx.config.max_age;
    let min_age = MIN_RESIDENT_AGE.min(max_age);
    let mut created = 0;

    for home in &ctx.retirement_homes {
        for _ in 0..home.residents {
            let age = ctx.rng.gen_range(min_age..=max_age);
            ctx.ages.deplete(age)?;
            let id = ctx.roster.spawn(age, home.location, Home::RetirementHome(home.id));
            ctx.retirement_residents.push(id);
            created += 1;
        }
    }
    debug!("{created} retirement home residents");
    Ok(created)
}

/// Fill every hospital with long-term patients of any age.  Returns the
/// number of patients created.
pub fn assign_hospital_patients(ctx: &mut PopulationContext) -> GenResult<usize> {
    let max_age = ctx.config.max_age;
    let mut created = 0;

    for hospital in &ctx.hospitals {
        for _ in 0..hospital.patients {
            let age = ctx.rng.gen_range(0..=max_age);
            ctx.ages.deplete(age)?;
            ctx.roster.spawn(age, hospital.location, Home::Hospital(hospital.id));
            created += 1;
        }
    }
    debug!("{created} hospital patients");
    Ok(created)
}
