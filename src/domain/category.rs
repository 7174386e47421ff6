use super::item::Item;
use std::fmt;

pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE_NAME: &str = "Aged Brie";
pub const BACKSTAGE_PREFIX: &str = "Backstage passes";
pub const CONJURED_PREFIX: &str = "Conjured";

/// The aging rule an item follows, derived from its name alone.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Category {
    /// Never sold, never decays.
    Legendary,
    /// Gains quality as it ages.
    AgedImproving,
    /// Gains quality as the event approaches, worthless after it.
    EventPass,
    /// Decays twice as fast as an ordinary item.
    Conjured,
    Ordinary,
}

/// How quality moves during one day, before clamping.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QualityChange {
    Shift(i32),
    Reset,
}

impl Category {
    /// Resolves the category of an item name. Unknown names are `Ordinary`.
    pub fn of(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Self::Legendary,
            AGED_BRIE_NAME => Self::AgedImproving,
            n if n.starts_with(BACKSTAGE_PREFIX) => Self::EventPass,
            n if n.starts_with(CONJURED_PREFIX) => Self::Conjured,
            _ => Self::Ordinary,
        }
    }

    /// Quality change for one day, judged on the item as it stands *before*
    /// its sell-in is decremented. `None` means the item does not age at all.
    pub fn quality_change(self, item: &Item) -> Option<QualityChange> {
        let expired = item.is_expired();
        let sell_in = item.sell_in;
        let change = match self {
            Self::Legendary => return None,
            Self::AgedImproving if expired => QualityChange::Shift(2),
            Self::AgedImproving => QualityChange::Shift(1),
            Self::EventPass if expired => QualityChange::Reset,
            Self::EventPass if sell_in <= 5 => QualityChange::Shift(3),
            Self::EventPass if sell_in <= 10 => QualityChange::Shift(2),
            Self::EventPass => QualityChange::Shift(1),
            Self::Conjured if expired => QualityChange::Shift(-4),
            Self::Conjured => QualityChange::Shift(-2),
            Self::Ordinary if expired => QualityChange::Shift(-2),
            Self::Ordinary => QualityChange::Shift(-1),
        };
        Some(change)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Legendary => "legendary",
            Self::AgedImproving => "aged-improving",
            Self::EventPass => "event-pass",
            Self::Conjured => "conjured",
            Self::Ordinary => "ordinary",
        };
        f.write_str(label)
    }
}
