#![allow(dead_code)]

use gilded_rose::Item;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const NAMES: [&str; 7] = [
    "+5 Dexterity Vest",
    "Elixir of the Mongoose",
    "Aged Brie",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Backstage passes to Rick Astley",
    "Conjured Mana Cake",
];

/// Deterministic pseudo-random stock, including out-of-range starting values.
pub fn random_items(seed: u64, count: usize) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let name = NAMES[rng.gen_range(0..NAMES.len())];
            let sell_in = rng.gen_range(-20..=20);
            let quality = if name.starts_with("Sulfuras") {
                80
            } else {
                rng.gen_range(-5..=60)
            };
            Item::new(name, sell_in, quality)
        })
        .collect()
}

pub fn write_items_csv(path: &Path, rows: &[[&str; 3]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "sell_in", "quality"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
