//! Strongly typed, zero-cost identifier wrappers.
//!
//! Operators see ids as prefixed, zero-padded strings (`BUS-1001`,
//! `ALERT-001`).  Internally the prefix is implied by the type, so only the
//! number is stored and ids stay `Copy + Ord + Hash`.  `Display` and
//! `FromStr` convert between the two forms.

use std::fmt;
use std::str::FromStr;

use crate::FleetError;

/// Generate a typed ID wrapper around a primitive integer with a fixed
/// display prefix and minimum digit width.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $prefix:literal, $width:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Display prefix, without the separating dash.
            pub const PREFIX: &'static str = $prefix;

            /// The numeric part of the id.
            #[inline(always)]
            pub fn number(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{:0w$}", $prefix, self.0, w = $width)
            }
        }

        impl FromStr for $name {
            type Err = FleetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix($prefix)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|digits| digits.parse::<$inner>().ok())
                    .map($name)
                    .ok_or_else(|| FleetError::ParseId(s.to_owned()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = FleetError;
            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.to_string()
            }
        }
    };
}

typed_id! {
    /// Identifier of a bus in the fleet, e.g. `BUS-1001`.
    pub struct BusId(u32) = "BUS", 4;
}

typed_id! {
    /// Identifier of a cluster alert, e.g. `ALERT-001`.
    pub struct AlertId(u32) = "ALERT", 3;
}

impl AlertId {
    /// The id allocated after this one, or `None` past `ALERT-4294967295`.
    #[inline]
    pub fn next(self) -> Option<AlertId> {
        self.0.checked_add(1).map(AlertId)
    }
}
