mod config;
mod db;
mod llm;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let pool = match db::init_pool(&config.database_url, config.db_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "database init failed");
            return ExitCode::FAILURE;
        }
    };

    match services::email_auth::provision_users(&pool, &config.auth.bootstrap_emails).await {
        Ok(created) => tracing::info!(created, listed = config.auth.bootstrap_emails.len(), "bootstrap users checked"),
        Err(e) => {
            tracing::error!(error = %e, "bootstrap user provisioning failed");
            return ExitCode::FAILURE;
        }
    }
    if config.auth.resend.is_none() && !config.auth.echo_codes {
        tracing::warn!("neither RESEND_API_KEY/RESEND_FROM nor AUTH_ECHO_CODES set; sign-in codes cannot be delivered");
    }

    // Non-fatal: ad generation answers 503 without an LLM.
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; ad generation disabled");
            None
        }
    };

    let bind_addr = config.bind_addr();
    let port = config.port;
    let state = state::AppState::new(pool, llm, config);

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %bind_addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "ad studio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
