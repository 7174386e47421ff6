use crate::domain::category::{Category, QualityChange};
use crate::domain::item::{Item, MAX_QUALITY, MIN_QUALITY};
use tracing::{debug, trace};

/// Applies one elapsed day to every item, in place.
///
/// Each item is aged independently according to the category resolved from its
/// name. The call is total: unknown names follow the ordinary rule and
/// out-of-range qualities are clamped back into `[0, 50]` rather than rejected.
/// Legendary items are left untouched.
pub fn advance_one_day(items: &mut [Item]) {
    debug!(items = items.len(), "advancing inventory by one day");
    for item in items.iter_mut() {
        age_item(item);
    }
}

fn age_item(item: &mut Item) {
    let category = Category::of(&item.name);

    // Expiry is judged on the sell-in value before today's decrement.
    let Some(change) = category.quality_change(item) else {
        return;
    };

    item.quality = match change {
        QualityChange::Shift(delta) => item.quality.saturating_add(delta),
        QualityChange::Reset => MIN_QUALITY,
    };
    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = item.quality.clamp(MIN_QUALITY, MAX_QUALITY);

    trace!(
        name = %item.name,
        %category,
        sell_in = item.sell_in,
        quality = item.quality,
        "item aged"
    );
}

/// Owns a stock list and ages it one day per `update_quality` call.
///
/// This is the object form of [`advance_one_day`] for callers that prefer to
/// hand over their items and read them back later.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Ages every item by one day.
    pub fn update_quality(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
