use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::{
    entities::*,
    gateways::{
        geocode::{GeoCodingGateway, GeocodingError},
        sheet::{SheetError, SheetGateway},
    },
    repositories::{self, RestaurantRepo},
};

type RepoResult<T> = std::result::Result<T, repositories::Error>;

#[derive(Default)]
pub struct MockDb {
    pub restaurants: RefCell<Vec<Restaurant>>,
    pub replace_count: Cell<usize>,
}

impl MockDb {
    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: RefCell::new(restaurants),
            ..Default::default()
        }
    }
}

impl RestaurantRepo for MockDb {
    fn all_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        Ok(self.restaurants.borrow().clone())
    }
    fn replace_all_restaurants(&self, restaurants: &[Restaurant]) -> RepoResult<()> {
        self.replace_count.set(self.replace_count.get() + 1);
        *self.restaurants.borrow_mut() = restaurants.to_vec();
        Ok(())
    }
}

pub struct MockSheet {
    rows: Option<Vec<Vec<String>>>,
}

impl MockSheet {
    pub fn new(header: &[&str], rows: &[&[&str]]) -> Self {
        fn to_strings(cells: &[&str]) -> Vec<String> {
            cells.iter().map(|c| c.to_string()).collect()
        }
        let mut all = vec![to_strings(header)];
        all.extend(rows.iter().map(|r| to_strings(r)));
        Self { rows: Some(all) }
    }

    pub fn failing() -> Self {
        Self { rows: None }
    }
}

impl SheetGateway for MockSheet {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        self.rows.clone().ok_or(SheetError::Status(404))
    }
}

type GeocodingResult = Result<Option<(f64, f64)>, GeocodingError>;

#[derive(Default)]
pub struct MockGeocoder {
    responses: RefCell<HashMap<String, GeocodingResult>>,
    pub requests: RefCell<Vec<String>>,
}

impl MockGeocoder {
    pub fn with(self, address: &str, response: GeocodingResult) -> Self {
        self.responses
            .borrow_mut()
            .insert(address.to_string(), response);
        self
    }
}

impl GeoCodingGateway for MockGeocoder {
    fn resolve_address(&self, address: &str) -> Result<Option<MapPoint>, GeocodingError> {
        self.requests.borrow_mut().push(address.to_string());
        let response = self
            .responses
            .borrow_mut()
            .remove(address)
            .unwrap_or(Ok(None));
        response.map(|pos| pos.map(|(lat, lng)| MapPoint::from_lat_lng_deg(lat, lng)))
    }
}
