pub mod item_reader;
