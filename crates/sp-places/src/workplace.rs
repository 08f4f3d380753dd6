//! Workplaces, the only inventory the generator mutates.

use sp_core::{GeoPoint, HospitalId, RetirementHomeId, SchoolId, WorkplaceId};

// ── WorkplaceKind ─────────────────────────────────────────────────────────────

/// What a workplace record stands for.
///
/// Schools, retirement homes, and hospitals are modelled as institutions of
/// their own; their staff are hired through a surrogate workplace that links
/// back to the institution.  Out-of-town destinations are placeholders with
/// no capacity accounting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkplaceKind {
    /// A regular in-town business, tagged with its business-type code.
    Business(String),
    School(SchoolId),
    RetirementHome(RetirementHomeId),
    Hospital(HospitalId),
    /// Out-of-town destination identified by zipcode.
    Outside { zipcode: String },
}

impl WorkplaceKind {
    /// Type label written to carpool / public-transit output.
    pub fn label(&self) -> &str {
        match self {
            WorkplaceKind::Business(code)    => code.as_str(),
            WorkplaceKind::School(_)         => "school",
            WorkplaceKind::RetirementHome(_) => "retirement_home",
            WorkplaceKind::Hospital(_)       => "hospital",
            WorkplaceKind::Outside { .. }    => "outside",
        }
    }

    /// Id of the institution a surrogate workplace stands for.
    pub fn special_id(&self) -> Option<u32> {
        match self {
            WorkplaceKind::School(id)         => Some(id.get()),
            WorkplaceKind::RetirementHome(id) => Some(id.get()),
            WorkplaceKind::Hospital(id)       => Some(id.get()),
            _                                 => None,
        }
    }
}

// ── Workplace ─────────────────────────────────────────────────────────────────

/// A place agents can be employed at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workplace {
    pub id:                  WorkplaceId,
    pub location:            GeoPoint,
    pub kind:                WorkplaceKind,
    /// Occupation category of the workforce; mapped to an occupation label
    /// through the census occupation map.
    pub occupation_category: String,
    /// Employees hired so far.  Starts at 0 and only the work pass changes it.
    pub employees:           u32,
    pub min_capacity:        u32,
    pub max_capacity:        u32,
}

impl Workplace {
    pub fn new(
        id:                  WorkplaceId,
        location:            GeoPoint,
        kind:                WorkplaceKind,
        occupation_category: impl Into<String>,
        min_capacity:        u32,
        max_capacity:        u32,
    ) -> Self {
        Self {
            id,
            location,
            kind,
            occupation_category: occupation_category.into(),
            employees: 0,
            min_capacity,
            max_capacity,
        }
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        matches!(self.kind, WorkplaceKind::Outside { .. })
    }

    /// Zipcode of an out-of-town placeholder.
    pub fn zipcode(&self) -> Option<&str> {
        match &self.kind {
            WorkplaceKind::Outside { zipcode } => Some(zipcode.as_str()),
            _ => None,
        }
    }

    /// In-town and below its maximum capacity.
    #[inline]
    pub fn has_spare_capacity(&self) -> bool {
        !self.is_outside() && self.employees < self.max_capacity
    }

    /// `employees / max_capacity`; a zero-capacity workplace counts as
    /// infinitely full.
    pub fn fill_ratio(&self) -> f64 {
        if self.max_capacity == 0 {
            f64::INFINITY
        } else {
            self.employees as f64 / self.max_capacity as f64
        }
    }

    /// Count one more employee.  Out-of-town placeholders are not tracked.
    #[inline]
    pub fn hire(&mut self) {
        if !self.is_outside() {
            self.employees += 1;
        }
    }
}
