use std::net::IpAddr;

use anyhow::{anyhow, Context as _};
use rocket::{config::Config as RocketCfg, Catcher, Rocket, Route};
use rstable_db_json::JsonFile;

pub mod api;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    catchers: Vec<Catcher>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, store: JsonFile) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        catchers,
        rocket_cfg,
    } = options;

    info!("Serving restaurants from {}", store.path().display());

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(store).register("/", catchers);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(store: JsonFile, cfg: Cfg) -> anyhow::Result<()> {
    let Cfg {
        address,
        port,
        enable_cors,
    } = cfg;
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        catchers: api::catchers(),
        rocket_cfg: Some(rocket_cfg),
    };
    let instance = rocket_instance(options, store);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .context("Invalid CORS configuration")?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    server_task
        .await
        .map_err(|err| anyhow!("Unable to run web server: {err}"))?;
    Ok(())
}
