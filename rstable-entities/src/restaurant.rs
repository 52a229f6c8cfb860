use crate::{geo::*, id::*, time::*};

/// A restaurant listed in the table.
///
/// Records are produced by the sync jobs and never modified
/// by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub visited: bool,
    pub comments: Option<String>,
    pub pos: Option<MapPoint>,
    pub google_maps_url: Option<String>,
    pub place_id: Option<String>,
    pub opening_hours: Option<Vec<String>>,
    pub last_updated: Option<Timestamp>,
}

impl Restaurant {
    /// The position if the coordinates are usable.
    pub fn known_pos(&self) -> Option<MapPoint> {
        self.pos.filter(|pos| !pos.is_unknown())
    }

    /// Distance to the viewer, `None` if unknown.
    pub fn distance_to(&self, viewer: Option<MapPoint>) -> Option<Distance> {
        MapPoint::distance(self.known_pos()?, viewer?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn zero_coordinates_are_unknown() {
        let r = Restaurant::build().lat_lng(0.0, 0.0).finish();
        assert_eq!(None, r.known_pos());
        let viewer = Some(MapPoint::from_lat_lng_deg(41.0, 2.0));
        assert_eq!(None, r.distance_to(viewer));
    }

    #[test]
    fn distance_needs_both_positions() {
        let r = Restaurant::build().lat_lng(41.3874, 2.1686).finish();
        assert!(r.known_pos().is_some());
        assert_eq!(None, r.distance_to(None));
        let madrid = MapPoint::from_lat_lng_deg(40.4168, -3.7038);
        let d = r.distance_to(Some(madrid)).unwrap();
        assert!(d > Distance::from_meters(500_000.0));
        assert!(d < Distance::from_meters(510_000.0));
    }
}
