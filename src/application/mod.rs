//! Application layer: the aging engine and the day-by-day simulation around it.
//!
//! `engine` holds the one-day update rule applied to a whole stock list;
//! `simulation` repeats it over a number of days and hands every snapshot to
//! a caller-supplied sink.

pub mod engine;
pub mod simulation;
