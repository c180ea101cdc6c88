// src/sink.rs
use std::io::Write;

use crate::config::consts::UTF8_BOM;
use crate::data::OutputRow;
use crate::error::SinkError;

/// Destination for the finished dataset.
pub trait Sink {
    fn write(&mut self, header: &[String], rows: &[OutputRow]) -> Result<(), SinkError>;
}

/// Write header + rows as delimited text to any writer.
/// Every record has exactly `header.len()` fields.
pub fn write_dataset<W: Write>(
    mut w: W,
    header: &[String],
    rows: &[OutputRow],
    delim: u8,
    bom: bool,
) -> Result<(), SinkError> {
    if bom {
        w.write_all(UTF8_BOM).map_err(csv::Error::from)?;
    }
    let mut out = csv::WriterBuilder::new()
        .delimiter(delim)
        .from_writer(w);
    out.write_record(header)?;
    for row in rows {
        out.write_record(row.record(header))?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// In-memory sink; keeps the last dataset written.
#[derive(Default, Debug)]
pub struct MemorySink {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Sink for MemorySink {
    fn write(&mut self, header: &[String], rows: &[OutputRow]) -> Result<(), SinkError> {
        self.header = header.to_vec();
        self.records = rows.iter().map(|r| r.record(header)).collect();
        Ok(())
    }
}
