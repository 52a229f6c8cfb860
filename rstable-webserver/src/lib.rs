#[macro_use]
extern crate log;

use rstable_db_json::JsonFile;

mod web;

pub use web::Cfg;

pub async fn run(store: JsonFile, cfg: Cfg) -> anyhow::Result<()> {
    web::run(store, cfg).await
}
