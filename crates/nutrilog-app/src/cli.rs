//! CLI argument definitions for the nutrilog server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use nutrilog_core::config::NutrilogConfig;

/// nutrilog - chat-platform webhook that reports a day's nutrition analysis.
#[derive(Parser, Debug)]
#[command(name = "nutrilog", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Address to bind the webhook server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Webhook server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// JSON nutrition data file (defaults to the embedded dataset).
    #[arg(short = 'd', long = "data-file")]
    pub data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > NUTRILOG_CONFIG env var > ~/.nutrilog/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("NUTRILOG_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the server port.
    ///
    /// Priority: --port flag > NUTRILOG_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("NUTRILOG_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Apply every CLI/env override to a loaded configuration.
    pub fn apply(&self, config: &mut NutrilogConfig) {
        config.server.port = self.resolve_port(config.server.port);
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(ref path) = self.data_file {
            config.store.data_file = Some(path.clone());
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".nutrilog").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".nutrilog").join("config.toml");
    }
    PathBuf::from("config.toml")
}
