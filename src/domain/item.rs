use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest quality an ordinary item can reach.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality an ordinary item can reach.
pub const MAX_QUALITY: i32 = 50;
/// Fixed quality of a legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A single stock entry.
///
/// Items are built by the caller with whatever values they like; the aging
/// engine never validates them, it only mutates `sell_in` and `quality` in place.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Item {
    /// Determines the category. Never changed by the engine.
    pub name: String,
    /// Days left to sell the item. Goes negative once the date has passed.
    ///
    /// The decrement saturates, so an item already at `i32::MIN` stays there.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// True when the sell-by date has already passed at the start of a day.
    pub fn is_expired(&self) -> bool {
        self.sell_in <= 0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display_matches_report_line() {
        let item = Item::new("Aged Brie", -3, 12);
        assert_eq!(item.to_string(), "Aged Brie, -3, 12");
    }

    #[test]
    fn test_item_expiry_boundary() {
        assert!(!Item::new("TestItem", 1, 10).is_expired());
        assert!(Item::new("TestItem", 0, 10).is_expired());
        assert!(Item::new("TestItem", -7, 10).is_expired());
    }

    #[test]
    fn test_item_deserialization() {
        let csv = "name, sell_in, quality\nElixir of the Mongoose, 5, 7";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: Item = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize item");

        assert_eq!(result, Item::new("Elixir of the Mongoose", 5, 7));
    }
}
