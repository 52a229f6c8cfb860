//! Position of the viewer via the HTML5 Geolocation API.

use leptos::window;
use rstable_core::{entities::MapPoint, location::LocationError};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{GeolocationPosition, GeolocationPositionError};

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| "unknown JS error".to_string())
}

/// Request the current position once.
///
/// `on_resolved` is called exactly once, with an error
/// if the browser does not support geolocation.
pub fn request_current_position<F>(on_resolved: F)
where
    F: Fn(Result<MapPoint, LocationError>) + Clone + 'static,
{
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            log::warn!("Geolocation is not supported: {}", js_error_message(&err));
            on_resolved(Err(LocationError::Unavailable(js_error_message(&err))));
            return;
        }
    };
    let on_success = {
        let on_resolved = on_resolved.clone();
        Closure::once(move |position: GeolocationPosition| {
            let coords = position.coords();
            log::debug!("Got the current position");
            on_resolved(Ok(MapPoint::from_lat_lng_deg(
                coords.latitude(),
                coords.longitude(),
            )));
        })
    };
    let on_error = {
        let on_resolved = on_resolved.clone();
        Closure::once(move |err: GeolocationPositionError| {
            log::warn!("Error getting location: {}", err.message());
            let err = if err.code() == GeolocationPositionError::PERMISSION_DENIED {
                LocationError::Denied
            } else {
                LocationError::Unavailable(err.message())
            };
            on_resolved(Err(err));
        })
    };
    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    ) {
        on_resolved(Err(LocationError::Unavailable(js_error_message(&err))));
        return;
    }
    // The callbacks are owned by the browser from now on.
    on_success.forget();
    on_error.forget();
}
