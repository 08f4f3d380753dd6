//! The school pass.

use log::debug;

use sp_places::SchoolTier;

use crate::PopulationContext;

/// Agents older than this are assumed to be out of school.
pub const MAX_STUDENT_AGE: u8 = 21;

/// Enroll every agent of school age.  Returns the number of students.
///
/// Schools of the agent's tier are scanned in input order and the first one
/// with a free seat wins.  When a compulsory tier (primary, middle, high) is
/// full the agent goes to a random school of that tier regardless of
/// capacity; daycare and college agents stay home instead.  Patients are
/// never enrolled.
pub fn assign_schools(ctx: &mut PopulationContext) -> usize {
    let mut seats: Vec<u32> = ctx.schools.iter().map(|s| s.capacity).collect();
    let by_tier: Vec<Vec<usize>> = SchoolTier::ALL
        .iter()
        .map(|&tier| {
            ctx.schools
                .iter()
                .enumerate()
                .filter(|(_, s)| s.tier == tier)
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let mut students = 0;
    let mut over_capacity = 0;
    let mut unplaced = 0;

    for agent in ctx.roster.iter_mut() {
        if agent.is_patient || agent.age > MAX_STUDENT_AGE {
            continue;
        }
        let Some(tier) = SchoolTier::for_age(agent.age) else {
            continue;
        };
        let candidates = &by_tier[tier as usize];

        let school = match candidates.iter().copied().find(|&i| seats[i] > 0) {
            Some(i) => {
                seats[i] -= 1;
                Some(i)
            }
            None if tier.is_compulsory() && !candidates.is_empty() => {
                over_capacity += 1;
                ctx.rng.choose(candidates).copied()
            }
            None => None,
        };

        match school {
            Some(i) => {
                agent.is_student = true;
                agent.school = Some(ctx.schools[i].id);
                students += 1;
            }
            None => unplaced += 1,
        }
    }

    debug!("schools: {students} students, {over_capacity} over capacity, {unplaced} without a seat");
    students
}
