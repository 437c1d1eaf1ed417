// --- cliquestats - Archivo principal ---

use std::error::Error;
use cliquestats::server::AppState;
use cliquestats::{Settings, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env primero para que RUST_LOG también pueda venir de ahí
    let _ = dotenv::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== cliquestats (API) ===");
    let settings = Settings::from_env();

    cliquestats::render::init();
    let state = AppState::from_settings(settings)?;
    run_server(state).await?;
    Ok(())
}
