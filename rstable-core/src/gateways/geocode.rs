use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The service refuses to answer (HTTP 403).
    #[error("The geocoding service blocked the request")]
    Blocked,
    #[error("The geocoding service responded with HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub trait GeoCodingGateway {
    /// Resolve the position of an address.
    ///
    /// `Ok(None)` means the address is unknown to the service.
    fn resolve_address(&self, address: &str) -> Result<Option<MapPoint>, GeocodingError>;
}
