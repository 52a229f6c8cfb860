use super::*;
use rstable_entities as e;

impl From<e::restaurant::Restaurant> for Restaurant {
    fn from(from: e::restaurant::Restaurant) -> Self {
        let e::restaurant::Restaurant {
            id,
            name,
            address,
            visited,
            comments,
            pos,
            google_maps_url,
            place_id,
            opening_hours,
            last_updated,
        } = from;
        Self {
            id: id.into(),
            visited,
            name,
            address,
            google_maps_url,
            place_id,
            opening_hours,
            comments,
            coordinates: pos.map(Coordinates::from).unwrap_or_default(),
            last_updated: last_updated.map(|ts| ts.to_string()),
        }
    }
}

impl From<Restaurant> for e::restaurant::Restaurant {
    fn from(from: Restaurant) -> Self {
        let Restaurant {
            id,
            visited,
            name,
            address,
            google_maps_url,
            place_id,
            opening_hours,
            comments,
            coordinates,
            last_updated,
        } = from;
        let pos = Option::<e::geo::MapPoint>::from(coordinates);
        Self {
            id: id.into(),
            name,
            address,
            visited,
            comments,
            pos,
            google_maps_url,
            place_id,
            opening_hours,
            // An unparsable timestamp is treated as unknown.
            last_updated: last_updated.and_then(|ts| ts.parse().ok()),
        }
    }
}

impl From<e::geo::MapPoint> for Coordinates {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<Coordinates> for Option<e::geo::MapPoint> {
    fn from(from: Coordinates) -> Self {
        let Coordinates { lat, lng } = from;
        Some(e::geo::MapPoint::from_lat_lng_deg(lat, lng)).filter(|pos| !pos.is_unknown())
    }
}
