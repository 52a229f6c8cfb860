use reqwest::blocking::Client;
use rstable_boundary as json;
use rstable_core::{entities::Restaurant, fetch::FetchError};

/// Blocking client of the restaurant API.
#[derive(Debug, Clone)]
pub struct RestaurantsApi {
    url: String,
    client: Client,
}

impl RestaurantsApi {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let url = url.trim_end_matches('/').to_owned();
        let client = crate::http_client(crate::DEFAULT_USER_AGENT)?;
        Ok(Self { url, client })
    }

    /// Retrieve all restaurants with a single request.
    pub fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, FetchError> {
        let url = format!("{}/api/restaurants", self.url);
        log::debug!("Fetching restaurants from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let records: Vec<json::Restaurant> =
            serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(records.into_iter().map(Restaurant::from).collect())
    }
}
