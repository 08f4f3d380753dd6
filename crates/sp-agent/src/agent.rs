//! The agent record.

use sp_core::{
    AgentId, CarpoolId, CommuteMode, GeoPoint, HospitalId, HouseholdId, RetirementHomeId,
    SchoolId, TransitId, WorkplaceId,
};

// ── Home ──────────────────────────────────────────────────────────────────────

/// Where an agent lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Home {
    Household(HouseholdId),
    RetirementHome(RetirementHomeId),
    /// Long-term patients live at their hospital.
    Hospital(HospitalId),
}

impl Home {
    pub fn household(self) -> Option<HouseholdId> {
        match self {
            Home::Household(id) => Some(id),
            _ => None,
        }
    }

    /// Id shown in the household column: the household or retirement home.
    /// Hospital patients have none.
    pub fn raw_id(self) -> Option<u32> {
        match self {
            Home::Household(id)      => Some(id.get()),
            Home::RetirementHome(id) => Some(id.get()),
            Home::Hospital(_)        => None,
        }
    }
}

// ── WorkSite ──────────────────────────────────────────────────────────────────

/// Where an employed agent works.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkSite {
    /// Works from home; the id is the agent's own household.
    Home(HouseholdId),
    Workplace(WorkplaceId),
}

impl WorkSite {
    pub fn workplace(self) -> Option<WorkplaceId> {
        match self {
            WorkSite::Workplace(id) => Some(id),
            WorkSite::Home(_) => None,
        }
    }

    pub fn raw_id(self) -> u32 {
        match self {
            WorkSite::Home(id)      => id.get(),
            WorkSite::Workplace(id) => id.get(),
        }
    }
}

// ── SpecialWork ───────────────────────────────────────────────────────────────

/// Back-reference from a staff member to the institution their surrogate
/// workplace stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialWork {
    School(SchoolId),
    RetirementHome(RetirementHomeId),
    Hospital(HospitalId),
}

impl SpecialWork {
    pub fn raw_id(self) -> u32 {
        match self {
            SpecialWork::School(id)         => id.get(),
            SpecialWork::RetirementHome(id) => id.get(),
            SpecialWork::Hospital(id)       => id.get(),
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One member of the synthetic population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:       AgentId,
    pub age:      u8,
    /// Inherited from the household or institution the agent lives in.
    pub location: GeoPoint,
    pub home:     Home,

    // ── Flags ─────────────────────────────────────────────────────────────
    pub is_patient:                  bool,
    pub is_retirement_home_resident: bool,
    pub is_family_member:            bool,
    pub is_student:                  bool,
    /// Employed anywhere except a hospital (hospital staff set
    /// `works_at_hospital` instead).
    pub works:                       bool,
    pub works_from_home:             bool,
    pub works_at_school:             bool,
    pub works_at_retirement_home:    bool,
    pub works_at_hospital:           bool,
    pub is_infected:                 bool,

    // ── References ────────────────────────────────────────────────────────
    pub school:         Option<SchoolId>,
    pub work:           Option<WorkSite>,
    pub special_work:   Option<SpecialWork>,
    /// Hospital the agent is a patient of or works at.
    pub hospital:       Option<HospitalId>,
    pub carpool:        Option<CarpoolId>,
    pub public_transit: Option<TransitId>,
    pub occupation:     Option<String>,

    // ── Commute ───────────────────────────────────────────────────────────
    /// One-way travel time to work, minutes.  0 for agents without work.
    pub commute_time: f64,
    pub commute_mode: Option<CommuteMode>,
}

impl Agent {
    /// A fresh agent living at `home`.
    ///
    /// Everything not given is unset: flags false, references `None`,
    /// commute time 0.  Living at a hospital makes the agent a patient of it;
    /// living at a retirement home makes it a resident.
    pub fn new(id: AgentId, age: u8, location: GeoPoint, home: Home) -> Self {
        let (is_patient, hospital) = match home {
            Home::Hospital(h) => (true, Some(h)),
            _ => (false, None),
        };
        Self {
            id,
            age,
            location,
            home,
            is_patient,
            is_retirement_home_resident: matches!(home, Home::RetirementHome(_)),
            is_family_member: false,
            is_student: false,
            works: false,
            works_from_home: false,
            works_at_school: false,
            works_at_retirement_home: false,
            works_at_hospital: false,
            is_infected: false,
            school: None,
            work: None,
            special_work: None,
            hospital,
            carpool: None,
            public_transit: None,
            occupation: None,
            commute_time: 0.0,
            commute_mode: None,
        }
    }

    /// Lives in a private household (not an institution).
    #[inline]
    pub fn household(&self) -> Option<HouseholdId> {
        self.home.household()
    }

    /// Has any job, hospital staff included.
    #[inline]
    pub fn is_employed(&self) -> bool {
        self.works || self.works_at_hospital
    }

    /// Lives in an institution and therefore never studies or works.
    #[inline]
    pub fn is_institutionalized(&self) -> bool {
        self.is_patient || self.is_retirement_home_resident
    }
}
