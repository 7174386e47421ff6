//! Adapters between the domain and the outside world: CSV input and reports.

pub mod csv;
pub mod report;
