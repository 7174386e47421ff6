use clap::Parser;
use gilded_rose::application::simulation::Simulation;
use gilded_rose::domain::catalog::default_catalog;
use gilded_rose::domain::item::Item;
use gilded_rose::interfaces::csv::item_reader::ItemReader;
use gilded_rose::interfaces::report::{ReportFormat, ReportWriter};
use gilded_rose::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inventory CSV file (`name,sell_in,quality`). Uses the built-in catalog if omitted.
    input: Option<PathBuf>,

    /// Number of days to simulate after the starting day.
    #[arg(long, default_value_t = 2)]
    days: u32,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn load_items(path: PathBuf) -> Result<Vec<Item>> {
    let file = File::open(path).into_diagnostic()?;
    let reader = ItemReader::new(file);
    let mut items = Vec::new();
    for (row, item_result) in reader.items().enumerate() {
        match item_result {
            Ok(item) => items.push(item),
            Err(e) => warn!(row = row + 1, error = %e, "skipping malformed item row"),
        }
    }
    Ok(items)
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let items = match cli.input {
        Some(path) => load_items(path)?,
        None => default_catalog(),
    };

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format).into_diagnostic()?;
    let mut simulation = Simulation::new(items);
    simulation
        .run(cli.days, |day, items| writer.write_day(day, items))
        .into_diagnostic()?;
    writer.finish().into_diagnostic()?;

    Ok(())
}
