use crate::domain::item::Item;
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output format for day-by-day reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable blocks, one per day.
    #[default]
    Text,
    /// One `day,name,sell_in,quality` record per item per day.
    Csv,
    /// One JSON object per day per line.
    Json,
}

const CSV_HEADER: [&str; 4] = ["day", "name", "sell_in", "quality"];

#[derive(Serialize)]
struct ReportRow<'a> {
    day: u32,
    name: &'a str,
    sell_in: i32,
    quality: i32,
}

#[derive(Serialize)]
struct DayReport<'a> {
    day: u32,
    items: &'a [Item],
}

enum Sink<W: Write> {
    Text(W),
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes stock snapshots to any `Write` sink in the chosen format.
pub struct ReportWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a writer. For `csv` the header record is written immediately,
    /// so even a report with no items carries it.
    pub fn new(writer: W, format: ReportFormat) -> Result<Self> {
        let sink = match format {
            ReportFormat::Text => Sink::Text(writer),
            ReportFormat::Csv => {
                let mut wtr = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer);
                wtr.write_record(CSV_HEADER)?;
                Sink::Csv(wtr)
            }
            ReportFormat::Json => Sink::Json(writer),
        };
        Ok(Self { sink })
    }

    /// Writes the state of `items` at the end of `day`.
    pub fn write_day(&mut self, day: u32, items: &[Item]) -> Result<()> {
        match &mut self.sink {
            Sink::Text(out) => {
                writeln!(out, "-------- day {day} --------")?;
                writeln!(out, "name, sellIn, quality")?;
                for item in items {
                    writeln!(out, "{item}")?;
                }
                writeln!(out)?;
            }
            Sink::Csv(wtr) => {
                for item in items {
                    wtr.serialize(ReportRow {
                        day,
                        name: &item.name,
                        sell_in: item.sell_in,
                        quality: item.quality,
                    })?;
                }
            }
            Sink::Json(out) => {
                serde_json::to_writer(&mut *out, &DayReport { day, items })?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Flushes any buffered output.
    pub fn finish(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Text(out) | Sink::Json(out) => out.flush()?,
            Sink::Csv(wtr) => wtr.flush()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_empty(format: ReportFormat) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buf, format).unwrap();
            writer.write_day(0, &[]).unwrap();
            writer.write_day(1, &[]).unwrap();
            writer.finish().unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    fn render(format: ReportFormat) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = ReportWriter::new(&mut buf, format).unwrap();
            writer
                .write_day(0, &[Item::new("Aged Brie", 2, 0)])
                .unwrap();
            writer
                .write_day(1, &[Item::new("Aged Brie", 1, 1)])
                .unwrap();
            writer.finish().unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report() {
        let out = render(ReportFormat::Text);
        assert_eq!(
            out,
            "-------- day 0 --------\nname, sellIn, quality\nAged Brie, 2, 0\n\n\
             -------- day 1 --------\nname, sellIn, quality\nAged Brie, 1, 1\n\n"
        );
    }

    #[test]
    fn test_csv_report_writes_header_once() {
        let out = render(ReportFormat::Csv);
        assert_eq!(
            out,
            "day,name,sell_in,quality\n0,Aged Brie,2,0\n1,Aged Brie,1,1\n"
        );
    }

    #[test]
    fn test_json_report_one_line_per_day() {
        let out = render(ReportFormat::Json);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let day1: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(day1["day"], 1);
        assert_eq!(day1["items"][0]["name"], "Aged Brie");
        assert_eq!(day1["items"][0]["sell_in"], 1);
        assert_eq!(day1["items"][0]["quality"], 1);
    }

    #[test]
    fn test_csv_report_empty_stock_keeps_header() {
        assert_eq!(render_empty(ReportFormat::Csv), "day,name,sell_in,quality\n");
    }

    #[test]
    fn test_json_report_empty_stock() {
        let out = render_empty(ReportFormat::Json);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let day0: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(day0["day"], 0);
        assert_eq!(day0["items"], serde_json::json!([]));
    }
}
