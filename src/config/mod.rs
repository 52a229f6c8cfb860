use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Context as _, Result};
use rstable_core::entities::MapPoint;
use rstable_gateways::{google_sheets, nominatim};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "rstable.toml";

const DEFAULT_USER_AGENT: &str = "RsTableApp/1.0 (github.com/olivaalbert1/rsTable)";
const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);

const ENV_NAME_DATA_FILE: &str = "DATA_FILE";
const ENV_NAME_PORT: &str = "PORT";
const ENV_NAME_GOOGLE_SHEET_ID: &str = "GOOGLE_SHEET_ID";
const ENV_NAME_GOOGLE_SERVICE_ACCOUNT_EMAIL: &str = "GOOGLE_SERVICE_ACCOUNT_EMAIL";
const ENV_NAME_GOOGLE_PRIVATE_KEY: &str = "GOOGLE_PRIVATE_KEY";

#[derive(Debug)]
pub struct Config {
    pub data: Data,
    pub webserver: WebServer,
    pub viewer: Viewer,
    pub geocoding: Geocoding,
    pub sheet: Sheet,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = var(ENV_NAME_DATA_FILE) {
            self.data.file = file.into();
        }
        if let Some(port) = var(ENV_NAME_PORT) {
            self.webserver.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_PORT} '{port}'"))?;
        }
        if let Some(SheetGateway::GoogleSheets {
            sheet_id,
            service_account_email,
            private_key,
            ..
        }) = &mut self.sheet.gateway
        {
            if let Some(id) = var(ENV_NAME_GOOGLE_SHEET_ID) {
                *sheet_id = Some(id);
            }
            if let Some(email) = var(ENV_NAME_GOOGLE_SERVICE_ACCOUNT_EMAIL) {
                *service_account_email = Some(email);
            }
            if let Some(key) = var(ENV_NAME_GOOGLE_PRIVATE_KEY) {
                *private_key = Some(unescape_newlines(&key));
            }
        }
        Ok(())
    }
}

/// Keys passed through the environment often contain
/// literal `\n` sequences instead of line breaks.
fn unescape_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}

#[derive(Debug)]
pub struct Data {
    /// The JSON file with all restaurants.
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

#[derive(Debug)]
pub struct Viewer {
    pub location: Option<MapPoint>,
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
        referer: Option<String>,
        min_request_interval: Duration,
    },
}

#[derive(Debug)]
pub struct Sheet {
    pub gateway: Option<SheetGateway>,
}

#[derive(Clone)]
pub enum SheetGateway {
    GoogleSheets {
        sheet_id: Option<String>,
        service_account_email: Option<String>,
        private_key: Option<String>,
        api_url: String,
        token_url: String,
    },
    CsvFile {
        path: PathBuf,
    },
}

impl std::fmt::Debug for SheetGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::GoogleSheets {
                sheet_id,
                service_account_email,
                private_key,
                api_url,
                token_url,
            } => f
                .debug_struct("GoogleSheets")
                .field("sheet_id", sheet_id)
                .field("service_account_email", service_account_email)
                .field("private_key", &private_key.as_ref().map(|_| "***"))
                .field("api_url", api_url)
                .field("token_url", token_url)
                .finish(),
            Self::CsvFile { path } => f.debug_struct("CsvFile").field("path", path).finish(),
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            data,
            webserver,
            viewer,
            geocoding,
            sheet,
            gateway,
        } = from;

        let raw::Data { file } = data.unwrap_or_default();
        let data = Data { file };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Viewer { location } = viewer.unwrap_or_default();
        let location = location
            .map(|l| {
                l.parse::<MapPoint>()
                    .with_context(|| format!("Invalid viewer location '{l}'"))
            })
            .transpose()?;
        let viewer = Viewer { location };

        let gateway = gateway.unwrap_or_default();

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            base_url,
                            user_agent,
                            referer,
                            min_request_interval,
                        } = gateway.nominatim.clone().ok_or_else(|| {
                            anyhow!("Missing nominatim gateway configuration")
                        })?;
                        GeocodingGateway::Nominatim {
                            base_url: base_url
                                .unwrap_or_else(|| nominatim::DEFAULT_BASE_URL.to_owned()),
                            user_agent: user_agent
                                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
                            referer,
                            min_request_interval: min_request_interval
                                .unwrap_or(DEFAULT_MIN_REQUEST_INTERVAL),
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let sheet_gateway = match sheet.and_then(|s| s.gateway) {
            Some(gw_name) => {
                let gw = match gw_name {
                    raw::SheetGateway::GoogleSheets => {
                        // Credentials may also be passed through the environment.
                        let raw::GoogleSheets {
                            sheet_id,
                            service_account_email,
                            private_key,
                            api_url,
                            token_url,
                        } = gateway.google_sheets.clone().unwrap_or_default();
                        SheetGateway::GoogleSheets {
                            sheet_id,
                            service_account_email,
                            private_key,
                            api_url: api_url
                                .unwrap_or_else(|| google_sheets::DEFAULT_API_URL.to_owned()),
                            token_url: token_url
                                .unwrap_or_else(|| google_sheets::DEFAULT_TOKEN_URL.to_owned()),
                        }
                    }
                    raw::SheetGateway::CsvFile => {
                        let raw::CsvFile { path } = gateway.csv_file.clone().ok_or_else(|| {
                            anyhow!("Missing csv-file gateway configuration")
                        })?;
                        SheetGateway::CsvFile { path }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let sheet = Sheet {
            gateway: sheet_gateway,
        };

        Ok(Self {
            data,
            webserver,
            viewer,
            geocoding,
            sheet,
        })
    }
}
