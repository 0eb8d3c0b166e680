use std::env;
use std::io;

use dotenv::dotenv;
use env_logger::Env;

mod console;
mod db;
mod errors;
mod handlers;
mod inventory;
mod menu;
mod models;

const DEFAULT_DATABASE_URL: &str = "sqlite://serenity_suites.db?mode=rwc";

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    log::info!("Connecting to database...");
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let store = db::HotelStore::connect(&database_url).await;

    let mut inventory = inventory::Inventory::load(store).await;
    log::info!("Loaded {} rooms", inventory.all().len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Err(err) = menu::run(&mut inventory, &mut input, &mut out).await {
        log::error!("Session ended: {}", err);
    }
    Ok(())
}
