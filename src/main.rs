use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atlas_contact_api::config::Config;
use atlas_contact_api::handlers::AppState;
use atlas_contact_api::mailer::SendGridClient;
use atlas_contact_api::server::build_router;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, builds the SendGrid client and
/// serves the router until the process is stopped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_contact_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let mailer = SendGridClient::new(
        config.sendgrid_base_url.clone(),
        config.sendgrid_api_key.clone(),
    )?;
    tracing::info!("✓ SendGrid client initialized: {}", config.sendgrid_base_url);

    let app_state = Arc::new(AppState {
        config: config.clone(),
        mailer: Arc::new(mailer),
    });

    let app = build_router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
