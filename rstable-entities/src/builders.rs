pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::restaurant_builder::*;

pub mod restaurant_builder {

    use super::*;
    use crate::{geo::*, id::*, restaurant::*, time::*};

    #[derive(Debug)]
    pub struct RestaurantBuild {
        restaurant: Restaurant,
    }

    impl RestaurantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.restaurant.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.restaurant.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.restaurant.address = address.into();
            self
        }
        pub fn visited(mut self, visited: bool) -> Self {
            self.restaurant.visited = visited;
            self
        }
        pub fn comments(mut self, comments: Option<&str>) -> Self {
            self.restaurant.comments = comments.map(Into::into);
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.restaurant.pos = Some(MapPoint::from_lat_lng_deg(lat, lng));
            self
        }
        pub fn google_maps_url(mut self, url: Option<&str>) -> Self {
            self.restaurant.google_maps_url = url.map(Into::into);
            self
        }
        pub fn opening_hours(mut self, hours: Vec<&str>) -> Self {
            self.restaurant.opening_hours = Some(hours.into_iter().map(Into::into).collect());
            self
        }
        pub fn last_updated(mut self, ts: &str) -> Self {
            self.restaurant.last_updated = Some(ts.parse().unwrap());
            self
        }
        pub fn finish(self) -> Restaurant {
            self.restaurant
        }
    }

    impl Builder for Restaurant {
        type Build = RestaurantBuild;
        fn build() -> RestaurantBuild {
            RestaurantBuild {
                restaurant: Restaurant {
                    id: Id::new(),
                    name: String::new(),
                    address: String::new(),
                    visited: false,
                    comments: None,
                    pos: None,
                    google_maps_url: None,
                    place_id: None,
                    opening_hours: None,
                    last_updated: Some(Timestamp::now()),
                },
            }
        }
    }
}
