//! `fw-view`: read-only aggregates over fleet state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`query`]   | `filter_and_sort`, `SortKey`, `SortOrder`                        |
//! | [`summary`] | `summary_statistics`, `occupancy_ratio`, `LoadBand`, `SystemStatus` |
//!
//! Everything here is a pure function of its inputs.  Callers pass the
//! slices from [`fw_fleet::FleetStore`] or a [`fw_fleet::FleetSnapshot`].

pub mod query;
pub mod summary;

#[cfg(test)]
mod tests;

pub use query::{filter_and_sort, matches_query, showing_line, SortKey, SortOrder};
pub use summary::{
    occupancy_percent, occupancy_ratio, summary_statistics, LoadBand, SummaryStatistics,
    SystemStatus,
};
