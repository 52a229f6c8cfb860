use rocket::{get, serde::json::Json, State};
use rstable_boundary::{PlaceDetails, Restaurant};
use rstable_core::repositories::Error as RepoError;
use rstable_db_json::JsonFile;

pub const PLACE_DETAILS_MESSAGE: &str = "Place details proxy endpoint";

/// The stored restaurants, or an empty list if they cannot be read.
#[get("/restaurants")]
pub fn get_restaurants(store: &State<JsonFile>) -> Json<Vec<Restaurant>> {
    match store.load_records() {
        Ok(records) => Json(records),
        Err(RepoError::NotFound) => {
            warn!("Data file {} does not exist", store.path().display());
            Json(vec![])
        }
        Err(err) => {
            error!(
                "Unable to read data file {}: {err}",
                store.path().display()
            );
            Json(vec![])
        }
    }
}

// Placeholder for looking up places on the maps provider.
#[get("/place-details/<place_id>")]
pub fn get_place_details(place_id: &str) -> Json<PlaceDetails> {
    debug!("Requested details of place {place_id}");
    Json(PlaceDetails {
        message: PLACE_DETAILS_MESSAGE.to_owned(),
    })
}
