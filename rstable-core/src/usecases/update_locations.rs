use super::prelude::*;
use crate::gateways::geocode::{GeoCodingGateway, GeocodingError};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn google_maps_search_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(address, URI_COMPONENT)
    )
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocationUpdateReport {
    /// All restaurants that have been looked at.
    pub processed: usize,
    /// Restaurants that got a maps URL or a position.
    pub updated: usize,
    /// Addresses the geocoding service could not resolve.
    pub unresolved: usize,
    /// Requests refused by the geocoding service.
    pub blocked: usize,
    pub failed: usize,
}

/// Complete missing maps URLs and positions of the stored restaurants.
///
/// The restaurants are only stored again if at least one of them
/// has changed.
pub fn update_locations<R, G>(repo: &R, geocoding: &G) -> Result<LocationUpdateReport>
where
    R: RestaurantRepo,
    G: GeoCodingGateway,
{
    let mut restaurants = repo.all_restaurants()?;
    let total = restaurants.len();
    log::info!("Processing {total} restaurants");
    let mut report = LocationUpdateReport::default();
    for (i, r) in restaurants.iter_mut().enumerate() {
        report.processed += 1;
        let progress = format!("[{}/{total}]", i + 1);
        let address = r.address.trim().to_owned();
        if address.is_empty() {
            continue;
        }
        let mut modified = false;
        if r.google_maps_url.as_deref().map_or(true, str::is_empty) {
            r.google_maps_url = Some(google_maps_search_url(&address));
            log::info!("{progress} Added maps URL for {}", r.name);
            modified = true;
        }
        if r.known_pos().is_none() {
            log::info!("{progress} Resolving position of {} ({address})", r.name);
            match geocoding.resolve_address(&address) {
                Ok(Some(pos)) if !pos.is_unknown() => {
                    log::info!("{progress} Found {pos}");
                    r.pos = Some(pos);
                    modified = true;
                }
                Ok(_) => {
                    log::info!("{progress} Could not resolve '{address}'");
                    report.unresolved += 1;
                }
                Err(GeocodingError::Blocked) => {
                    log::warn!("{progress} Geocoding blocked (HTTP 403), skipping {}", r.name);
                    report.blocked += 1;
                }
                Err(err) => {
                    log::error!("{progress} Unable to geocode '{address}': {err}");
                    report.failed += 1;
                }
            }
        }
        if modified {
            report.updated += 1;
        }
    }
    if report.updated > 0 {
        repo.replace_all_restaurants(&restaurants)?;
        log::info!("Updated {} restaurants", report.updated);
    } else {
        log::info!("No updates were needed");
    }
    Ok(report)
}
