use rocket::{
    self, catch, catchers,
    http::Status,
    routes,
    serde::json::Json,
    Catcher, Request, Route,
};
use rstable_boundary::Error as JsonErrorResponse;

mod restaurants;


pub fn routes() -> Vec<Route> {
    routes![
        // ---   restaurants   --- //
        restaurants::get_restaurants,
        restaurants::get_place_details,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request<'_>) -> (Status, Json<JsonErrorResponse>) {
    let error = JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_string(),
    };
    (status, Json(error))
}
