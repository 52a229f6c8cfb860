use std::path::PathBuf;

use anyhow::Context;
use rstable_core::gateways::sheet::{SheetError, SheetGateway};

/// A spreadsheet exported as CSV file.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SheetGateway for CsvFile {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        log::info!("Reading spreadsheet from {}", self.path.display());
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Unable to open {}", self.path.display()))?;
        let mut rows: Vec<Vec<String>> = vec![];
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Invalid CSV file {}", self.path.display()))?;
            rows.push(record.iter().map(ToOwned::to_owned).collect());
        }
        Ok(rows)
    }
}
