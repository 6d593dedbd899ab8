mod model;
mod web;

use actix_web::{App, HttpServer, web::Data};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use model::ReplyGenerator;
use web::routes;

// App state structure
pub struct AppState {
    pub replies: ReplyGenerator,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8000);

    info!("Starting Jan Nano mock API server");

    let app_state = Data::new(AppState {
        replies: ReplyGenerator::from_entropy(),
    });

    info!("Listening on {}:{}", host, port);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .default_service(actix_web::web::route().to(web::handlers::fallback))
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind to {}:{}", host, port))?
    .run()
    .await
    .context("server terminated unexpectedly")
}
