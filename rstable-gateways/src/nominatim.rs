use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::anyhow;
use parking_lot::Mutex;
use reqwest::{blocking::Client, header, StatusCode};
use rstable_core::{
    entities::MapPoint,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    pub referer: Option<String>,
    /// The minimum time between two requests.
    pub min_request_interval: Duration,
}

/// Forward geocoding with OpenStreetMap Nominatim.
///
/// Requests are throttled to respect the usage policy
/// of the public instance.
#[derive(Debug)]
pub struct Nominatim {
    base_url: String,
    referer: Option<String>,
    min_request_interval: Duration,
    client: Client,
    last_request: Mutex<Option<Instant>>,
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Nominatim {
    pub fn new(config: NominatimConfig) -> anyhow::Result<Self> {
        let NominatimConfig {
            base_url,
            user_agent,
            referer,
            min_request_interval,
        } = config;
        let client = crate::http_client(&user_agent)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            referer,
            min_request_interval,
            client,
            last_request: Mutex::new(None),
        })
    }

    fn wait_for_next_request(&self) {
        let mut last_request = self.last_request.lock();
        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_request_interval {
                thread::sleep(self.min_request_interval - elapsed);
            }
        }
        *last_request = Some(Instant::now());
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address(&self, address: &str) -> Result<Option<MapPoint>, GeocodingError> {
        self.wait_for_next_request();
        let url = format!("{}/search", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", address), ("limit", "1")]);
        if let Some(referer) = &self.referer {
            request = request.header(header::REFERER, referer);
        }
        let response = request.send().map_err(anyhow::Error::from)?;
        match response.status() {
            StatusCode::FORBIDDEN => return Err(GeocodingError::Blocked),
            status if !status.is_success() => {
                return Err(GeocodingError::Status(status.as_u16()));
            }
            _ => {}
        }
        let places: Vec<Place> = response.json().map_err(anyhow::Error::from)?;
        let Some(Place { lat, lon }) = places.into_iter().next() else {
            log::debug!("No result for address '{address}'");
            return Ok(None);
        };
        let lat = lat.parse::<f64>().map_err(|err| anyhow!("Invalid latitude '{lat}': {err}"))?;
        let lng = lon.parse::<f64>().map_err(|err| anyhow!("Invalid longitude '{lon}': {err}"))?;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| anyhow!("Invalid position {lat},{lng}"))?;
        Ok(Some(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::TestServer;

    fn nominatim(base_url: &str, min_request_interval: Duration) -> Nominatim {
        Nominatim::new(NominatimConfig {
            base_url: base_url.to_owned(),
            user_agent: "rstable-test/1.0".to_owned(),
            referer: Some("https://example.org/rstable".to_owned()),
            min_request_interval,
        })
        .unwrap()
    }

    #[test]
    fn resolve_address() {
        let server = TestServer::start(vec![(
            200,
            r#"[{"place_id":1,"lat":"41.3828939","lon":"2.1774322","display_name":"Barcelona"}]"#,
        )]);
        let geo = nominatim(&server.url, Duration::ZERO);
        let pos = geo.resolve_address("Plaça de Sant Jaume, Barcelona").unwrap();
        assert_eq!(Some(MapPoint::from_lat_lng_deg(41.3828939, 2.1774322)), pos);

        let request = &server.requests()[0];
        assert!(request.starts_with("GET /search?format=json&q=Pla%C3%A7a+de+Sant+Jaume%2C+Barcelona&limit=1 "));
        let request = request.to_lowercase();
        assert!(request.contains("user-agent: rstable-test/1.0"));
        assert!(request.contains("referer: https://example.org/rstable"));
    }

    #[test]
    fn unknown_address() {
        let server = TestServer::start(vec![(200, "[]")]);
        let geo = nominatim(&server.url, Duration::ZERO);
        assert_eq!(None, geo.resolve_address("Nowhere").unwrap());
    }

    #[test]
    fn blocked() {
        let server = TestServer::start(vec![(403, "")]);
        let geo = nominatim(&server.url, Duration::ZERO);
        assert!(matches!(
            geo.resolve_address("Anywhere"),
            Err(GeocodingError::Blocked)
        ));
    }

    #[test]
    fn other_failures() {
        let server = TestServer::start(vec![(503, ""), (200, "<html>")]);
        let geo = nominatim(&server.url, Duration::ZERO);
        assert!(matches!(
            geo.resolve_address("Anywhere"),
            Err(GeocodingError::Status(503))
        ));
        assert!(matches!(
            geo.resolve_address("Anywhere"),
            Err(GeocodingError::Other(_))
        ));
    }

    #[test]
    fn throttle_requests() {
        let server = TestServer::start(vec![(200, "[]"), (200, "[]")]);
        let interval = Duration::from_millis(300);
        let geo = nominatim(&server.url, interval);
        let start = Instant::now();
        geo.resolve_address("a").unwrap();
        geo.resolve_address("b").unwrap();
        assert!(start.elapsed() >= interval);
    }
}
