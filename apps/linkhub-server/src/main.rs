use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use linkhub_api::state::{AppState, JwtVerifier};
use linkhub_core::services::{ProjectService, SlugPolicy};
use linkhub_infrastructure::database::connection;
use linkhub_infrastructure::database::postgres::PgProjectRepository;
use linkhub_infrastructure::edge_config::EdgeConfigClient;
use linkhub_infrastructure::vercel::VercelDomainClient;
use linkhub_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    linkhub_shared::telemetry::init_telemetry();

    info!("LinkHub server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    let pool =
        connection::create_pool(&config.database.url, config.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;
    info!("Database connection established.");

    // Wire collaborators and services
    let repo = Arc::new(PgProjectRepository::new(pool));
    let domain_client = Arc::new(VercelDomainClient::new(&config.vercel));
    let reserved_keys = Arc::new(EdgeConfigClient::new(&config.edge_config));
    let projects = Arc::new(ProjectService::new(
        repo,
        domain_client.clone(),
        domain_client,
        SlugPolicy::new(reserved_keys),
    ));

    let state = AppState {
        projects,
        jwt: JwtVerifier::new(&config.jwt.secret),
    };

    // Build router
    let app = linkhub_api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
