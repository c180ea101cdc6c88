// src/file.rs

use std::{
    fs::{ self, File },
    io::BufWriter,
    path::{ Path, PathBuf },
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::sink::{ write_dataset, Sink };
use crate::data::OutputRow;
use crate::error::SinkError;

/// Semicolon-separated, BOM-prefixed file on disk.
pub struct CsvFileSink {
    path: PathBuf,
    delim: u8,
    bom: bool,
}

impl CsvFileSink {
    pub fn new(export: &ExportOptions) -> Self {
        Self {
            path: export.out_path().to_path_buf(),
            delim: export.delimiter,
            bom: export.bom,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for CsvFileSink {
    fn write(&mut self, header: &[String], rows: &[OutputRow]) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io { path: self.path.display().to_string(), source };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent).map_err(io_err)?;
            }
        }
        let file = File::create(&self.path).map_err(io_err)?; // truncate/overwrite
        write_dataset(BufWriter::new(file), header, rows, self.delim, self.bom)?;
        info!(path = %self.path.display(), rows = rows.len(), "dataset written");
        Ok(())
    }
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
