//! riskinvest - interactive price forecasting shell
//!
//! Loads the pre-fitted scaling transform and regression model once at
//! startup, then serves one interactive session on stdin/stdout: paste 60
//! closing prices to get a one-step-ahead forecast, or ask a free-text
//! question answered by the intent responder.
//!
//! # Usage
//! ```sh
//! MODEL_BACKEND=smartcore cargo run -- --scaler-path artifacts/scaler.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use riskinvest::config::Config;
use riskinvest::infrastructure::artifacts;
use riskinvest::interfaces::shell::Shell;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "riskinvest", about = "Prédiction boursière et gestion du risque")]
struct Cli {
    /// Inference backend: smartcore or onnx
    #[arg(long)]
    backend: Option<String>,

    /// Path to the pre-trained regression model artifact
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Path to the fitted scaler artifact
    #[arg(long)]
    scaler_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("riskinvest {} starting...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(backend) = cli.backend {
        config.model_backend = backend.parse()?;
    }
    if let Some(model_path) = cli.model_path {
        config.model_path = model_path.clone();
        config.onnx_model_path = model_path;
    }
    if let Some(scaler_path) = cli.scaler_path {
        config.scaler_path = scaler_path;
    }

    info!(
        "Configuration loaded: Backend={:?}, Scaler={:?}",
        config.model_backend, config.scaler_path
    );

    // Artifact load failure must prevent the shell from starting at all.
    let pipeline =
        artifacts::build_pipeline(&config).context("Failed to load forecast artifacts")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(&pipeline);
    shell.run(stdin.lock(), stdout.lock())?;

    info!("Session ended.");
    Ok(())
}
