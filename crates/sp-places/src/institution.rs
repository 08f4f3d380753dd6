//! Retirement homes, hospitals, and schools.

use std::str::FromStr;

use sp_core::{GeoPoint, HospitalId, RetirementHomeId, SchoolId};

use crate::PlacesError;

/// A retirement home and the number of residents it houses.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetirementHome {
    pub id:        RetirementHomeId,
    pub location:  GeoPoint,
    pub residents: u32,
}

/// A hospital and the number of (non-epidemic) patients it holds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hospital {
    pub id:       HospitalId,
    pub location: GeoPoint,
    pub patients: u32,
}

// ── SchoolTier ────────────────────────────────────────────────────────────────

/// Education level of a school.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchoolTier {
    Daycare,
    Primary,
    Middle,
    High,
    College,
}

impl SchoolTier {
    pub const ALL: [SchoolTier; 5] = [
        SchoolTier::Daycare,
        SchoolTier::Primary,
        SchoolTier::Middle,
        SchoolTier::High,
        SchoolTier::College,
    ];

    /// Tier an agent of `age` attends, if any.
    ///
    /// | Tier    | Ages   |
    /// |---------|--------|
    /// | daycare | 0–4    |
    /// | primary | 5–10   |
    /// | middle  | 11–13  |
    /// | high    | 14–17  |
    /// | college | 18–24  |
    pub fn for_age(age: u8) -> Option<SchoolTier> {
        match age {
            0..=4   => Some(SchoolTier::Daycare),
            5..=10  => Some(SchoolTier::Primary),
            11..=13 => Some(SchoolTier::Middle),
            14..=17 => Some(SchoolTier::High),
            18..=24 => Some(SchoolTier::College),
            _       => None,
        }
    }

    /// Compulsory tiers take every child even when all schools are full.
    #[inline]
    pub fn is_compulsory(self) -> bool {
        matches!(self, SchoolTier::Primary | SchoolTier::Middle | SchoolTier::High)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchoolTier::Daycare => "daycare",
            SchoolTier::Primary => "primary",
            SchoolTier::Middle  => "middle",
            SchoolTier::High    => "high",
            SchoolTier::College => "college",
        }
    }
}

impl FromStr for SchoolTier {
    type Err = PlacesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchoolTier::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| PlacesError::Parse(format!("unknown school tier {s:?}")))
    }
}

impl std::fmt::Display for SchoolTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── School ────────────────────────────────────────────────────────────────────

/// A school and its student capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct School {
    pub id:       SchoolId,
    pub location: GeoPoint,
    pub tier:     SchoolTier,
    pub capacity: u32,
}
