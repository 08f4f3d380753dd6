//! Post-generation population statistics.

use std::collections::BTreeMap;

use sp_agent::{Home, SpecialWork};

use crate::PopulationContext;

/// Agents in one age bracket.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgeCount {
    pub min:   u8,
    pub max:   u8,
    pub count: u32,
}

/// Members and staff of one institution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InstitutionCount {
    pub id:      u32,
    /// Residents, patients, or students.
    pub members: u32,
    pub staff:   u32,
}

/// Counts describing a generated population, for sanity checks and the
/// `summary.json` report.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PopulationSummary {
    pub agents:                  usize,
    /// Over the census age brackets.
    pub age_histogram:           Vec<AgeCount>,
    /// Occupied households by number of members.
    pub household_sizes:         BTreeMap<u32, u32>,
    pub vacant_households:       usize,
    pub retirement_homes:        Vec<InstitutionCount>,
    pub hospitals:               Vec<InstitutionCount>,
    pub schools:                 Vec<InstitutionCount>,
    /// In-town workplaces with at least one employee.
    pub workplaces_in_use:       usize,
    pub workplaces_over_capacity: usize,
    pub students:                usize,
    /// Employed anywhere, hospital staff and home workers included.
    pub workers:                 usize,
    pub work_from_home:          usize,
    pub infected:                usize,
    pub carpools:                usize,
    pub public_transit_groups:   usize,
    /// People the age ledger still holds; 0 after a complete run.
    pub ledger_remaining:        u64,
}

impl PopulationSummary {
    pub fn collect(ctx: &PopulationContext) -> Self {
        let mut age_histogram: Vec<AgeCount> = ctx
            .ages
            .brackets()
            .iter()
            .map(|b| AgeCount { min: b.min, max: b.max, count: 0 })
            .collect();

        let mut per_household = vec![0u32; ctx.households.len()];
        let mut retirement_homes = institution_table(ctx.retirement_homes.iter().map(|r| r.id.get()));
        let mut hospitals = institution_table(ctx.hospitals.iter().map(|h| h.id.get()));
        let mut schools = institution_table(ctx.schools.iter().map(|s| s.id.get()));

        let mut summary = Self {
            agents: ctx.roster.len(),
            ledger_remaining: ctx.ages.total_remaining(),
            carpools: ctx.transit.carpools().len(),
            public_transit_groups: ctx.transit.public_transit().len(),
            ..Self::default()
        };

        for agent in ctx.roster.iter() {
            if let Some(bucket) = age_histogram.iter_mut().find(|b| (b.min..=b.max).contains(&agent.age)) {
                bucket.count += 1;
            }
            match agent.home {
                Home::Household(h)      => bump(&mut per_household, h.index()),
                Home::RetirementHome(r) => bump_members(&mut retirement_homes, r.index()),
                Home::Hospital(h)       => bump_members(&mut hospitals, h.index()),
            }
            if let Some(school) = agent.school {
                bump_members(&mut schools, school.index());
            }
            match agent.special_work {
                Some(SpecialWork::School(s))         => bump_staff(&mut schools, s.index()),
                Some(SpecialWork::RetirementHome(r)) => bump_staff(&mut retirement_homes, r.index()),
                Some(SpecialWork::Hospital(h))       => bump_staff(&mut hospitals, h.index()),
                None => {}
            }

            summary.students += agent.is_student as usize;
            summary.workers += agent.is_employed() as usize;
            summary.work_from_home += agent.works_from_home as usize;
            summary.infected += agent.is_infected as usize;
        }

        for &n in &per_household {
            if n > 0 {
                *summary.household_sizes.entry(n).or_default() += 1;
            }
        }
        summary.vacant_households = per_household.iter().filter(|&&n| n == 0).count();

        for w in ctx.workplaces.iter().filter(|w| !w.is_outside()) {
            summary.workplaces_in_use += (w.employees > 0) as usize;
            summary.workplaces_over_capacity += (w.employees > w.max_capacity) as usize;
        }

        summary.age_histogram = age_histogram;
        summary.retirement_homes = retirement_homes;
        summary.hospitals = hospitals;
        summary.schools = schools;
        summary
    }
}

fn institution_table(ids: impl Iterator<Item = u32>) -> Vec<InstitutionCount> {
    ids.map(|id| InstitutionCount { id, members: 0, staff: 0 }).collect()
}

fn bump(counts: &mut [u32], i: usize) {
    if let Some(c) = counts.get_mut(i) {
        *c += 1;
    }
}

fn bump_members(table: &mut [InstitutionCount], i: usize) {
    if let Some(row) = table.get_mut(i) {
        row.members += 1;
    }
}

fn bump_staff(table: &mut [InstitutionCount], i: usize) {
    if let Some(row) = table.get_mut(i) {
        row.staff += 1;
    }
}
