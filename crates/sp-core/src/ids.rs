//! Strongly typed identifier wrappers.
//!
//! Every record in a generated town is numbered from 1 in creation (or input
//! row) order; 0 is never issued, so the flat-file format can use it to mean
//! "none".  In memory an absent reference is an `Option<…Id>` instead.
//!
//! All IDs are `Copy + Ord + Hash`.  `index()` maps an id to its 0-based
//! position in the `Vec` that owns the records.

use std::fmt;

/// Generate a typed 1-based ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// The first id handed out.
            pub const FIRST: $name = $name(1);

            /// Position of this record in its owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                debug_assert!(self.0 > 0, concat!(stringify!($name), " 0 is reserved"));
                (self.0 - 1) as usize
            }

            /// Id of the record stored at `index` in its owning `Vec`.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as u32 + 1)
            }

            /// The raw number written to output files.
            #[inline(always)]
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for u32 {
            #[inline(always)]
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

typed_id! {
    /// An agent in the population roster.  Assigned sequentially, never reused.
    pub struct AgentId;
}

typed_id! {
    /// A residential household from the building inventory.
    pub struct HouseholdId;
}

typed_id! {
    /// A retirement home.
    pub struct RetirementHomeId;
}

typed_id! {
    /// A hospital.
    pub struct HospitalId;
}

typed_id! {
    /// A school of any tier (daycare through college).
    pub struct SchoolId;
}

typed_id! {
    /// A workplace, including special-institution and out-of-town records.
    pub struct WorkplaceId;
}

typed_id! {
    /// A concrete carpool unit.
    pub struct CarpoolId;
}

typed_id! {
    /// A public-transit route group.
    pub struct TransitId;
}
