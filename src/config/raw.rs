use std::{net::IpAddr, path::PathBuf, time::Duration};

use duration_str::deserialize_option_duration;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = include_str!("rstable.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub data: Option<Data>,
    pub webserver: Option<WebServer>,
    pub viewer: Option<Viewer>,
    pub geocoding: Option<Geocoding>,
    pub sheet: Option<Sheet>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Data {
    pub file: PathBuf,
}

impl Default for Data {
    fn default() -> Self {
        Config::default().data.expect("Data configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Viewer {
    /// `"<lat>,<lng>"` in degrees.
    pub location: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sheet {
    pub gateway: Option<SheetGateway>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheetGateway {
    GoogleSheets,
    CsvFile,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub google_sheets: Option<GoogleSheets>,
    pub csv_file: Option<CsvFile>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub min_request_interval: Option<Duration>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleSheets {
    pub sheet_id: Option<String>,
    pub service_account_email: Option<String>,
    pub private_key: Option<String>,
    pub api_url: Option<String>,
    pub token_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CsvFile {
    pub path: PathBuf,
}
