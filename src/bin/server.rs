//! Excuse Generator HTTP Server Entry Point
//!
//! Serves the generation and history operations as a JSON API. An optional
//! first argument names a JSON config file; the `GEMINI_API_KEY`
//! environment variable overrides the configured key.

use excuse_gen::config::load_config;
use excuse_gen::emergency::EmergencySystem;
use excuse_gen::generators::{ApologyGenerator, ExcuseGenerator};
use excuse_gen::history::HistoryLog;
use excuse_gen::llm::GeminiClient;
use excuse_gen::proof::ProofGenerator;
use excuse_gen::server::{build_router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let history = match HistoryLog::load(&config.history_file, config.max_history_items) {
        Ok(history) => history,
        Err(e) => {
            eprintln!("Error: failed to open history file: {}", e);
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        Duration::from_millis(config.timeout),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        history: Arc::new(Mutex::new(history)),
        excuse: Arc::new(ExcuseGenerator::new(
            client.clone(),
            config.default_language.clone(),
        )),
        apology: Arc::new(ApologyGenerator::new(client)),
        proof: ProofGenerator::new(),
        emergency: EmergencySystem::without_delays(),
        screenshot_path: Arc::new(PathBuf::from(&config.screenshot_path)),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Excuse generator API listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Error: server failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server shut down gracefully");
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            }
        }
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C");
    }
}
