use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};
use rstable_db_json::JsonFile;
use tempfile::TempDir;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("restaurants.json"));
    let options = super::InstanceOptions {
        mounts,
        catchers: super::api::catchers(),
        rocket_cfg: Some(rocket_cfg),
    };
    let rocket = super::rocket_instance(options, store);
    (rocket, dir)
}

/// A client for the mounted routes and the directory
/// that contains the (initially missing) data file.
pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, TempDir) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, dir) = rocket_test_instance_with_cfg(mounts, rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, dir)
}

#[test]
fn unknown_routes_respond_with_json_errors() {
    let (client, _dir) = rocket_test_setup(super::mounts());
    let res = client.get("/api/unknown").dispatch();
    assert_eq!(rocket::http::Status::NotFound, res.status());
    let body: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(404, body["http_status"]);
    assert_eq!("Not Found", body["message"]);
}

#[rocket::async_test]
async fn run_fails_if_the_port_is_already_in_use() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("restaurants.json"));
    let cfg = super::Cfg {
        address: "127.0.0.1".parse().unwrap(),
        port,
        enable_cors: true,
    };
    assert!(super::run(store, cfg).await.is_err());
    drop(listener);
}
