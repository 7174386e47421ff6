use super::engine::advance_one_day;
use crate::domain::item::Item;
use crate::error::Result;
use tracing::info;

/// Drives the aging engine over a number of days, reporting each day's state.
pub struct Simulation {
    items: Vec<Item>,
}

impl Simulation {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Reports day 0 (the starting stock), then ages the stock once per day up
    /// to and including `days`, reporting after every step.
    ///
    /// The first error returned by `on_day` stops the run.
    pub fn run<F>(&mut self, days: u32, mut on_day: F) -> Result<()>
    where
        F: FnMut(u32, &[Item]) -> Result<()>,
    {
        info!(days, items = self.items.len(), "starting simulation");
        on_day(0, &self.items)?;
        for day in 1..=days {
            advance_one_day(&mut self.items);
            on_day(day, &self.items)?;
        }
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
