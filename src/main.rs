mod config;
mod db;
mod dtos;
mod error;
mod extractors;
mod handler;
mod models;
mod routes;
mod service;
mod storage;
mod utils;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE}, HeaderValue, Method},
    ServiceExt,
};
use config::Config;
use db::DBClient;
use dotenv::dotenv;
use routes::create_router;
use service::contract_service::ContractService;
use sqlx::postgres::PgPoolOptions;
use storage::{http::HttpDocumentStore, DocumentStore};
use tower::Layer;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    normalize_path::NormalizePathLayer,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    pub contract_service: Arc<ContractService>,
}

impl AppState {
    pub fn new(
        db_client: Arc<DBClient>,
        document_store: Arc<dyn DocumentStore>,
        config: Config,
    ) -> Self {
        let contract_service = ContractService::new(
            db_client.clone(),
            document_store,
            config.document_base_url.clone(),
        );

        AppState {
            env: config,
            db_client,
            contract_service: Arc::new(contract_service),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::init();

    let level = config.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::DEBUG);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .init();

    let pool = match PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            println!("✅Connection to the database is successful!");
            pool
        }
        Err(err) => {
            println!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
        println!("🔥 Failed to run database migrations: {:?}", err);
        std::process::exit(1);
    }

    let document_store = match HttpDocumentStore::from_config(&config) {
        Ok(store) => store,
        Err(err) => {
            println!("🔥 Failed to configure the document store: {}", err);
            std::process::exit(1);
        }
    };

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    let db_client = Arc::new(DBClient::new(pool));
    let app_state = AppState::new(db_client, Arc::new(document_store), config.clone());

    let router = create_router(Arc::new(app_state)).layer(cors);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    println!("🚀 Server is running on http://localhost:{}", config.port);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            println!("🔥 Failed to bind port {}: {:?}", config.port, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await {
        tracing::error!(error = %err, "server stopped");
    }
}
