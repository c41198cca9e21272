//! nutrilog binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Load the nutrition store (data file or embedded dataset)
//! 4. Serve the webhook until Ctrl-C

mod cli;

use std::sync::Arc;

use clap::Parser;

use nutrilog_api::routes;
use nutrilog_api::state::AppState;
use nutrilog_core::config::NutrilogConfig;
use nutrilog_core::SystemClock;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists; report the outcome afterwards.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match NutrilogConfig::load(&config_file) {
        Ok(c) => (c, None),
        Err(e) => (NutrilogConfig::default(), Some(e)),
    };
    args.apply(&mut config);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting nutrilog v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }

    // Store + assistant.
    let clock = Arc::new(SystemClock::from_offset_minutes(config.clock.utc_offset_minutes));
    let state = match AppState::from_config(config.clone(), clock) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load nutrition store");
            return Err(e.into());
        }
    };
    tracing::info!(
        records = state.assistant.store().len(),
        month = config.store.month,
        "Nutrition store ready"
    );

    // Webhook server.
    routes::start_server(&config, state).await?;

    Ok(())
}
