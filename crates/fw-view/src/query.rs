//! Filtered, sorted bus lists.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fw_core::FleetError;
use fw_fleet::Bus;

/// Column a bus list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    #[default]
    Id,
    Route,
    /// `Alert` first, then `Alternate`, then `Normal`.
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortKey {
    /// Compare two buses on this key alone.
    pub fn compare(self, a: &Bus, b: &Bus) -> Ordering {
        match self {
            // Displayed form, so `BUS-10000` sorts before `BUS-9999`.
            SortKey::Id     => a.id.to_string().cmp(&b.id.to_string()),
            SortKey::Route  => a
                .route
                .to_lowercase()
                .cmp(&b.route.to_lowercase())
                .then_with(|| a.route.cmp(&b.route)),
            SortKey::Status => a.status.priority().cmp(&b.status.priority()),
        }
    }
}

impl SortOrder {
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc  => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Id     => "id",
            SortKey::Route  => "route",
            SortKey::Status => "status",
        })
    }
}

impl FromStr for SortKey {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id"     => Ok(SortKey::Id),
            "route"  => Ok(SortKey::Route),
            "status" => Ok(SortKey::Status),
            other    => Err(FleetError::Parse(format!("unknown sort key {other:?}"))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc  => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc"  => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other  => Err(FleetError::Parse(format!("unknown sort order {other:?}"))),
        }
    }
}

/// Does `bus` match a search `query`?
///
/// Case-insensitive substring match against the displayed id (`BUS-1001`) or
/// the route name.  The query is taken as typed, so surrounding whitespace
/// must match too.  An empty query matches every bus.
pub fn matches_query(bus: &Bus, query: &str) -> bool {
    let needle = query.to_lowercase();
    bus.id.to_string().to_lowercase().contains(&needle)
        || bus.route.to_lowercase().contains(&needle)
}

/// Buses matching `query`, ordered by `key` in `order`.
///
/// The sort is stable: buses that compare equal keep their input order in
/// both directions.
pub fn filter_and_sort<'a>(
    buses: &'a [Bus],
    query: &str,
    key:   SortKey,
    order: SortOrder,
) -> Vec<&'a Bus> {
    let mut out: Vec<&Bus> = buses.iter().filter(|b| matches_query(b, query)).collect();
    out.sort_by(|a, b| order.apply(key.compare(a, b)));
    out
}

/// Footer line for a filtered list, e.g. `"Showing 2 of 5 buses"`.
pub fn showing_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} buses")
}
