use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rstable_core::{
    entities::{MapPoint, Timestamp},
    fetch::FetchError,
    repositories::RestaurantRepo as _,
    usecases,
    util::sort::SortKey,
};
use rstable_db_json::JsonFile;
use rstable_gateways::api::RestaurantsApi;

use crate::{config::Config, gateways, list};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file (default: rstable.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the restaurants via HTTP (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Replace the data file with the contents of the spreadsheet
    SyncSheet,
    /// Fill in missing map links and coordinates
    UpdateLocations,
    /// Print the restaurant table
    List(ListArgs),
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Fetch the restaurants from a running server instead of the data file
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Your position as "<lat>,<lng>"
    #[arg(short, long, value_name = "LAT,LNG")]
    pub location: Option<MapPoint>,

    /// Only show matching restaurants
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort by name, address, comments, distance, visited or last-updated
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config_file,
        command,
    } = args;
    let cfg = Config::try_load_from_file_or_default(config_file)?;
    match command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(cfg, port),
        Command::SyncSheet => sync_sheet(&cfg),
        Command::UpdateLocations => update_locations(&cfg),
        Command::List(list_args) => list_restaurants(&cfg, list_args),
    }
}

fn serve(cfg: Config, port: Option<u16>) -> Result<()> {
    let store = JsonFile::new(cfg.data.file);
    let web_cfg = rstable_webserver::Cfg {
        address: cfg.webserver.address,
        port: port.unwrap_or(cfg.webserver.port),
        enable_cors: cfg.webserver.enable_cors,
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(rstable_webserver::run(store, web_cfg))
}

fn sync_sheet(cfg: &Config) -> Result<()> {
    let sheet = gateways::sheet_gateway(&cfg.sheet)?;
    let store = JsonFile::new(&cfg.data.file);
    let count = usecases::sync_sheet(&store, &sheet, Timestamp::now())?;
    log::info!(
        "Successfully synced {count} restaurants to {}",
        store.path().display()
    );
    Ok(())
}

fn update_locations(cfg: &Config) -> Result<()> {
    let geocoding = gateways::geocoding_gateway(&cfg.geocoding)?;
    let store = JsonFile::new(&cfg.data.file);
    let report = usecases::update_locations(&store, &geocoding)?;
    log::info!(
        "Processed {} restaurants: {} updated, {} not found, {} blocked, {} failed",
        report.processed,
        report.updated,
        report.unresolved,
        report.blocked,
        report.failed
    );
    Ok(())
}

fn list_restaurants(cfg: &Config, args: ListArgs) -> Result<()> {
    let ListArgs {
        url,
        location,
        search,
        sort,
        desc,
    } = args;
    let restaurants = match url {
        Some(url) => RestaurantsApi::new(&url)?.fetch_restaurants(),
        None => JsonFile::new(&cfg.data.file)
            .all_restaurants()
            .map_err(|err| FetchError::Transport(err.to_string())),
    };
    let options = list::Options {
        location: location.or(cfg.viewer.location),
        search,
        sort,
        descending: desc,
    };
    let table = list::render(restaurants, options);
    print!("{table}");
    Ok(())
}
