//! Read-only projections over service snapshots. Nothing here touches
//! storage; time-dependent views take "today" as an argument.

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod schedule;
