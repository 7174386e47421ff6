//! Domain layer: items, their categories and the starting catalog.
//!
//! Nothing in here performs IO; the rules are plain functions over `Item`.

pub mod catalog;
pub mod category;
pub mod item;
