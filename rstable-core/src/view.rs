use crate::{
    entities::*,
    fetch::FetchError,
    location::{LocationError, LocationState},
    util::{
        filter::filter_restaurants,
        sort::{sort_restaurants, SortKey, Sorting},
    },
};

/// A visible row of the restaurant table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub restaurant: Restaurant,
    pub distance: Option<Distance>,
}

/// Filter, then sort the restaurants and derive the distance of each row.
pub fn derive_rows(
    restaurants: &[Restaurant],
    search_term: &str,
    sorting: Option<Sorting>,
    viewer_pos: Option<MapPoint>,
) -> Vec<Row> {
    let filtered = filter_restaurants(restaurants, search_term);
    let sorted = match sorting {
        Some(sorting) => sort_restaurants(&filtered, sorting, viewer_pos),
        None => filtered,
    };
    sorted
        .into_iter()
        .map(|r| Row {
            distance: r.distance_to(viewer_pos),
            restaurant: r.clone(),
        })
        .collect()
}

pub const DISTANCE_PENDING: &str = "Calculating...";
pub const DISTANCE_UNKNOWN: &str = "-";

pub fn distance_label(distance: Option<Distance>, location: &LocationState) -> String {
    match distance {
        Some(d) => d.to_string(),
        None if location.is_pending() => DISTANCE_PENDING.to_string(),
        None => DISTANCE_UNKNOWN.to_string(),
    }
}

/// The state of a restaurant table view.
///
/// Only the inputs are stored, the visible rows are always derived.
#[derive(Debug, Default)]
pub struct ViewState {
    restaurants: Vec<Restaurant>,
    fetched: bool,
    search_term: String,
    sorting: Option<Sorting>,
    location: LocationState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the result of the one and only retrieval.
    ///
    /// A failure leaves the collection empty.
    pub fn restaurants_fetched(&mut self, result: Result<Vec<Restaurant>, FetchError>) {
        if self.fetched {
            log::warn!("Ignoring repeated retrieval of restaurants");
            return;
        }
        self.fetched = true;
        match result {
            Ok(restaurants) => {
                log::debug!("Fetched {} restaurants", restaurants.len());
                self.restaurants = restaurants;
            }
            Err(err) => {
                log::error!("Unable to fetch restaurants: {err}");
                self.restaurants.clear();
            }
        }
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
    }

    pub fn request_sort(&mut self, key: SortKey) -> Sorting {
        let sorting = Sorting::requested(self.sorting, key);
        self.sorting = Some(sorting);
        sorting
    }

    /// Returns `true` if the distances have to be recalculated.
    pub fn location_resolved(&mut self, result: Result<MapPoint, LocationError>) -> bool {
        self.location.resolve(result)
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sorting(&self) -> Option<Sorting> {
        self.sorting
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn rows(&self) -> Vec<Row> {
        derive_rows(
            &self.restaurants,
            &self.search_term,
            self.sorting,
            self.location.position(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstable_entities::builders::*;

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.restaurant.name.as_str()).collect()
    }

    fn alpha_beta() -> Vec<Restaurant> {
        vec![
            Restaurant::build().name("Alpha").last_updated("2024-01-01").finish(),
            Restaurant::build().name("Beta").last_updated("2024-06-01").finish(),
        ]
    }

    #[test]
    fn search_and_sort_by_name() {
        let mut view = ViewState::new();
        view.restaurants_fetched(Ok(alpha_beta()));
        view.set_search_term("");
        assert_eq!(vec!["Alpha", "Beta"], names(&view.rows()));
        view.request_sort(SortKey::Name);
        assert_eq!(vec!["Alpha", "Beta"], names(&view.rows()));
        view.request_sort(SortKey::Name);
        assert_eq!(vec!["Beta", "Alpha"], names(&view.rows()));
        view.set_search_term("alp");
        assert_eq!(vec!["Alpha"], names(&view.rows()));
        view.set_search_term("al");
        assert_eq!(vec!["Beta", "Alpha"], names(&view.rows()));
    }

    #[test]
    fn unsorted_rows_keep_input_order() {
        let mut restaurants = alpha_beta();
        restaurants.reverse();
        let rows = derive_rows(&restaurants, "", None, None);
        assert_eq!(vec!["Beta", "Alpha"], names(&rows));
    }

    #[test]
    fn distance_sort_without_location_and_coordinates_keeps_order() {
        let mut view = ViewState::new();
        view.restaurants_fetched(Ok(vec![
            Restaurant::build().name("First").finish(),
            Restaurant::build().name("Second").finish(),
        ]));
        view.location_resolved(Err(LocationError::Denied));
        view.request_sort(SortKey::Distance);
        let rows = view.rows();
        assert_eq!(vec!["First", "Second"], names(&rows));
        assert!(rows.iter().all(|r| r.distance.is_none()));
        assert_eq!("-", distance_label(rows[0].distance, view.location()));
    }

    #[test]
    fn failed_fetch_shows_nothing() {
        let mut view = ViewState::new();
        view.restaurants_fetched(Err(FetchError::Status(500)));
        assert!(view.rows().is_empty());
        view.request_sort(SortKey::Distance);
        view.set_search_term("something");
        assert!(view.rows().is_empty());
    }

    #[test]
    fn only_the_first_retrieval_counts() {
        let mut view = ViewState::new();
        view.restaurants_fetched(Ok(alpha_beta()));
        view.restaurants_fetched(Err(FetchError::Transport("offline".into())));
        assert_eq!(2, view.rows().len());
    }

    #[test]
    fn distances_appear_once_location_is_available() {
        let mut view = ViewState::new();
        view.restaurants_fetched(Ok(vec![
            Restaurant::build().name("Far").lat_lng(40.4168, -3.7038).finish(),
            Restaurant::build().name("Unknown").finish(),
            Restaurant::build().name("Near").lat_lng(41.3900, 2.1700).finish(),
        ]));
        view.request_sort(SortKey::Distance);

        let pending = view.rows();
        assert_eq!(vec!["Far", "Unknown", "Near"], names(&pending));
        assert_eq!(
            "Calculating...",
            distance_label(pending[0].distance, view.location())
        );

        assert!(view.location_resolved(Ok(MapPoint::from_lat_lng_deg(41.3874, 2.1686))));
        let rows = view.rows();
        assert_eq!(vec!["Near", "Far", "Unknown"], names(&rows));
        assert!(rows[0].distance.unwrap() < Distance::from_meters(500.0));
        assert!(distance_label(rows[1].distance, view.location()).ends_with(" m"));
        assert_eq!("-", distance_label(rows[2].distance, view.location()));

        view.request_sort(SortKey::Distance);
        assert_eq!(vec!["Unknown", "Far", "Near"], names(&view.rows()));
    }
}
