//! Adapters to the services outside of rstable.

use std::time::Duration;

pub mod api;
pub mod csv_file;
pub mod google_sheets;
pub mod nominatim;

#[cfg(test)]
mod test_server;

pub const DEFAULT_USER_AGENT: &str = "rstable";

const TIMEOUT: Duration = Duration::from_secs(30);

fn http_client(user_agent: &str) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .timeout(TIMEOUT)
        .build()
}
