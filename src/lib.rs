pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod telemetry;

pub use application::engine::{Inventory, advance_one_day};
pub use domain::item::Item;
