mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if config.dev_secret {
        tracing::warn!("SESSION_SECRET not set, using the development secret");
    }

    let handbook = match services::handbook::Handbook::load(config.handbook_path.as_deref()) {
        Ok(handbook) => handbook,
        Err(e) => {
            tracing::error!(error = %e, "handbook load failed");
            std::process::exit(1);
        }
    };
    tracing::info!(
        sections = handbook.sections().len(),
        predefined = handbook.predefined().len(),
        "handbook loaded"
    );

    let state = state::AppState::new(handbook, services::csrf::CsrfSigner::new(&config.session_secret));
    let app = routes::app(state, &config.site_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "vaultlogic listening");
    axum::serve(listener, app).await.expect("server failed");
}
