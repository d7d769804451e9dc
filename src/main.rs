use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_brief::config::Config;
use book_brief::handlers::not_found;
use book_brief::routes::api;
use book_brief::services::{GoogleBooksClient, ViewService};
use book_brief::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let books_client = match GoogleBooksClient::new(&config.books_api) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build books API client: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using books API at {}", books_client.base_url());

    let view_service = ViewService::new(
        Arc::new(books_client),
        &config.books_api,
        config.views.clone(),
    );

    let state = AppState {
        view_service,
        config: config.clone(),
        start_time: Instant::now(),
    };

    info!("Starting Book Brief on port {}", config.server.port);

    let server = HttpServer::new(move || {
        let origins = &state.config.security.allowed_origins;
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        if origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    server.workers(config.server.workers).run().await
}
