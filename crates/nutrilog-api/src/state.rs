//! Application state shared across route handlers.
//!
//! Everything here is read-only after startup, so handlers share it through
//! `Arc` without locking.

use std::sync::Arc;

use nutrilog_chat::{DateExtractor, NutritionAssistant};
use nutrilog_core::config::NutrilogConfig;
use nutrilog_core::{Clock, NutritionStore, Result};

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<NutrilogConfig>,
    /// Date extraction and report rendering over the loaded store.
    pub assistant: Arc<NutritionAssistant>,
}

impl AppState {
    /// Create state from an already-built assistant.
    pub fn new(config: NutrilogConfig, assistant: NutritionAssistant) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
        }
    }

    /// Load the store named by `config` (or the embedded dataset) and wire
    /// up the assistant.
    pub fn from_config(config: NutrilogConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let store = NutritionStore::load_or_embedded(config.store.data_file.as_deref())?;
        let assistant = NutritionAssistant::new(
            Arc::new(store),
            DateExtractor::new(config.store.month),
            clock,
        );
        Ok(Self::new(config, assistant))
    }
}
