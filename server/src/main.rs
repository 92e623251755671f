mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::contact::{ContactMailer, ResendMailer};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Contact relay is optional: without a key the site still serves.
    let mailer: Option<Arc<dyn ContactMailer>> = match &config.mail {
        Some(mail) => {
            tracing::info!(from = %mail.from, recipients = mail.to.len(), "contact relay configured");
            Some(Arc::new(ResendMailer::new(mail)))
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set, contact form submissions will be rejected");
            None
        }
    };

    let state = state::AppState::new(mailer, config.rate_limit);
    let app = routes::app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "studio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
