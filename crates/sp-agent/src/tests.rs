//! Unit tests for sp-agent.

use sp_core::{AgentId, GeoPoint, HospitalId, HouseholdId, RetirementHomeId, WorkplaceId};

use crate::{Agent, AgentRoster, Home, SpecialWork, WorkSite};

fn here() -> GeoPoint {
    GeoPoint::new(40.91, -73.78)
}

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn household_agent_defaults() {
        let a = Agent::new(AgentId(1), 30, here(), Home::Household(HouseholdId(4)));
        assert_eq!(a.household(), Some(HouseholdId(4)));
        assert!(!a.is_patient && !a.is_retirement_home_resident);
        assert!(!a.is_employed() && !a.is_institutionalized());
        assert_eq!(a.commute_mode, None);
        assert_eq!(a.occupation, None);
    }

    #[test]
    fn hospital_home_makes_a_patient() {
        let a = Agent::new(AgentId(1), 30, here(), Home::Hospital(HospitalId(2)));
        assert!(a.is_patient);
        assert_eq!(a.hospital, Some(HospitalId(2)));
        assert_eq!(a.home.raw_id(), None);
        assert!(a.is_institutionalized());
    }

    #[test]
    fn retirement_home_makes_a_resident() {
        let a = Agent::new(AgentId(1), 80, here(), Home::RetirementHome(RetirementHomeId(3)));
        assert!(a.is_retirement_home_resident);
        assert_eq!(a.household(), None);
        assert_eq!(a.home.raw_id(), Some(3));
    }

    #[test]
    fn raw_ids() {
        assert_eq!(WorkSite::Home(HouseholdId(9)).raw_id(), 9);
        assert_eq!(WorkSite::Workplace(WorkplaceId(5)).workplace(), Some(WorkplaceId(5)));
        assert_eq!(WorkSite::Home(HouseholdId(9)).workplace(), None);
        assert_eq!(SpecialWork::Hospital(HospitalId(7)).raw_id(), 7);
    }
}

#[cfg(test)]
mod roster {
    use super::*;

    #[test]
    fn spawn_issues_sequential_ids_from_one() {
        let mut roster = AgentRoster::new();
        let a = roster.spawn(10, here(), Home::Household(HouseholdId(1)));
        let b = roster.spawn(40, here(), Home::Household(HouseholdId(1)));
        assert_eq!(a, AgentId(1));
        assert_eq!(b, AgentId(2));
        assert_eq!(roster[b].age, 40);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let roster = AgentRoster::new();
        assert!(roster.get(AgentId(1)).is_none());
    }

    #[test]
    fn from_agents_checks_sequence() {
        let ok = vec![
            Agent::new(AgentId(1), 1, here(), Home::Household(HouseholdId(1))),
            Agent::new(AgentId(2), 2, here(), Home::Household(HouseholdId(1))),
        ];
        assert!(AgentRoster::from_agents(ok).is_some());

        let gap = vec![Agent::new(AgentId(2), 1, here(), Home::Household(HouseholdId(1)))];
        assert!(AgentRoster::from_agents(gap).is_none());
    }

    #[test]
    fn index_mut_updates_in_place() {
        let mut roster = AgentRoster::new();
        let id = roster.spawn(20, here(), Home::Household(HouseholdId(1)));
        roster[id].is_student = true;
        assert!(roster.iter().all(|a| a.is_student));
    }
}
