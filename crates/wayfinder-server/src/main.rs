//! Wayfinder server binary.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfinder_core::MapStore;
use wayfinder_server::{build_router, config::ServerConfig, AppState};

/// Wayfinder server - in-memory map routing over REST
#[derive(Parser, Debug)]
#[command(name = "wayfinder-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "wayfinder.toml", env = "WAYFINDER_CONFIG")]
    config: PathBuf,

    /// Host address to bind to (overrides the configuration file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long)]
    port: Option<u16>,
}

/// Build CORS layer from environment configuration.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("WAYFINDER_CORS_ORIGIN") {
        Ok(origins) => {
            use tower_http::cors::AllowOrigin;
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        Err(_) => {
            tracing::warn!(
                "CORS: permissive (dev mode). Set WAYFINDER_CORS_ORIGIN to restrict origins."
            );
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting wayfinder server...");

    let mut config = ServerConfig::load(&args.config)?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    if config.api_keys.is_empty() {
        tracing::warn!(
            "Authentication: DISABLED (dev mode). Configure [api_keys] in {} to enable.",
            args.config.display()
        );
    } else {
        tracing::info!(keys = config.api_keys.len(), "Authentication: enabled");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState {
        store: MapStore::new(),
        api_keys: config.api_keys,
    });

    let app = build_router(state)
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http());

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", wayfinder_server::ApiDoc::openapi()),
        )
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("wayfinder server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
