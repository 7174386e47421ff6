use crate::domain::item::Item;
use crate::error::{InventoryError, Result};
use std::io::Read;

/// Reads stock items from a CSV source with a `name,sell_in,quality` header.
///
/// Fields are trimmed, so `Aged Brie, 2, 0` reads the same as `Aged Brie,2,0`.
pub struct ItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ItemReader<R> {
    /// Creates a new `ItemReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes items.
    ///
    /// A malformed row yields an error for that row only; later rows are still read.
    pub fn items(self) -> impl Iterator<Item = Result<Item>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(InventoryError::from))
    }
}
