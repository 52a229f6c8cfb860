use gloo_net::http::Request;

use rstable_boundary::{PlaceDetails, Restaurant};

use crate::{into_json, Result};

/// Public rstable API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        let url = format!("{}/api/restaurants", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let url = format!("{}/api/place-details/{place_id}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
