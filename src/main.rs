use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};
use std::io;

use teamflow_backend::config::Config;
use teamflow_backend::handlers;
use teamflow_backend::services::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    if !config.simulate_latency {
        warn!("simulated latency disabled");
    }

    // Seed data is parsed once; every worker shares the same collections.
    let state = AppState::seeded(config.latency()).map_err(|err| {
        error!("{}", err);
        io::Error::new(io::ErrorKind::InvalidData, err.to_string())
    })?;
    let state = web::Data::new(state);

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
