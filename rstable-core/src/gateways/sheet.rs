use std::{collections::HashMap, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Missing spreadsheet configuration: {0}")]
    Config(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("The spreadsheet service responded with HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Source of the spreadsheet that contains the restaurants.
pub trait SheetGateway {
    /// All rows of the first sheet, starting with the header row.
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError>;
}

/// The known columns of the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Visited,
    Name,
    Address,
    GoogleMapsUrl,
    PlaceId,
    OpeningHours,
    Comments,
    Lat,
    Lng,
}

impl Column {
    /// Match a header cell.
    ///
    /// Only lowercase ASCII letters and digits are compared, so
    /// `Google Maps URL`, `google_maps_url` and `googleMapsUrl`
    /// all denote the same column.
    pub fn from_header(header: &str) -> Option<Self> {
        let key: String = header
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let column = match key.as_str() {
            "id" => Self::Id,
            "visited" => Self::Visited,
            "name" => Self::Name,
            "address" => Self::Address,
            "googlemapsurl" => Self::GoogleMapsUrl,
            "placeid" => Self::PlaceId,
            "openinghours" => Self::OpeningHours,
            "comments" => Self::Comments,
            "lat" => Self::Lat,
            "lng" => Self::Lng,
            _ => return None,
        };
        Some(column)
    }
}

/// A data row of the spreadsheet with its cells assigned to columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow(HashMap<Column, String>);

impl SheetRow {
    /// The trimmed cell, empty if missing.
    pub fn get(&self, column: Column) -> &str {
        self.0.get(&column).map(|s| s.trim()).unwrap_or_default()
    }

    /// The trimmed cell, `None` if missing or empty.
    pub fn non_empty(&self, column: Column) -> Option<&str> {
        Some(self.get(column)).filter(|s| !s.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.0.values().all(|cell| cell.trim().is_empty())
    }
}

impl FromIterator<(Column, String)> for SheetRow {
    fn from_iter<I: IntoIterator<Item = (Column, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Assign the cells of each data row to the columns named in the
/// header row.
///
/// Unknown columns are ignored, for duplicate columns the first one
/// wins. Blank rows are skipped.
pub fn rows_by_header(mut values: Vec<Vec<String>>) -> Vec<SheetRow> {
    if values.is_empty() {
        return vec![];
    }
    let header = values.remove(0);
    let mut columns: Vec<Option<Column>> = Vec::with_capacity(header.len());
    for cell in &header {
        let column = Column::from_header(cell).filter(|c| !columns.contains(&Some(*c)));
        if column.is_none() && !cell.trim().is_empty() {
            log::debug!("Ignoring spreadsheet column '{cell}'");
        }
        columns.push(column);
    }
    values
        .into_iter()
        .map(|cells| {
            columns
                .iter()
                .zip(cells)
                .filter_map(|(column, cell)| column.map(|c| (c, cell)))
                .collect::<SheetRow>()
        })
        .filter(|row| !row.is_blank())
        .collect()
}
