use anyhow::{anyhow, Result};
use rstable_core::gateways::sheet::{SheetError, SheetGateway};
use rstable_gateways::{
    csv_file::CsvFile,
    google_sheets::{GoogleSheets, GoogleSheetsConfig},
    nominatim::{Nominatim, NominatimConfig},
};

use crate::config;

/// The configured spreadsheet source.
pub enum SheetGw {
    GoogleSheets(GoogleSheets),
    CsvFile(CsvFile),
}

impl SheetGateway for SheetGw {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        match self {
            Self::GoogleSheets(gw) => gw.fetch_rows(),
            Self::CsvFile(gw) => gw.fetch_rows(),
        }
    }
}

pub fn sheet_gateway(cfg: &config::Sheet) -> Result<SheetGw> {
    match &cfg.gateway {
        Some(config::SheetGateway::GoogleSheets {
            sheet_id,
            service_account_email,
            private_key,
            api_url,
            token_url,
        }) => {
            let config = GoogleSheetsConfig {
                sheet_id: sheet_id.clone().unwrap_or_default(),
                service_account_email: service_account_email.clone().unwrap_or_default(),
                private_key: private_key.clone().unwrap_or_default(),
                api_url: api_url.clone(),
                token_url: token_url.clone(),
            };
            log::info!("Use Google Sheets gateway");
            Ok(SheetGw::GoogleSheets(GoogleSheets::new(config)?))
        }
        Some(config::SheetGateway::CsvFile { path }) => {
            log::info!("Use CSV file gateway ({})", path.display());
            Ok(SheetGw::CsvFile(CsvFile::new(path)))
        }
        None => Err(anyhow!("No spreadsheet gateway configured")),
    }
}

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Nominatim> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            referer,
            min_request_interval,
        }) => {
            log::info!("Use Nominatim gateway ({base_url})");
            Nominatim::new(NominatimConfig {
                base_url: base_url.clone(),
                user_agent: user_agent.clone(),
                referer: referer.clone(),
                min_request_interval: *min_request_interval,
            })
        }
        None => Err(anyhow!("No geocoding gateway configured")),
    }
}
