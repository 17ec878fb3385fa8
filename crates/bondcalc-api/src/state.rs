//! Application state.

use std::sync::Arc;

use bondcalc_core::BondCalculator;
use chrono::{DateTime, Utc};

use crate::config::ApiConfig;

/// Application state shared across handlers.
///
/// Holds nothing mutable: every calculation is independent.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The calculation engine.
    pub calculator: BondCalculator,

    /// Configuration the server was started with.
    pub config: Arc<ApiConfig>,

    /// When the state was created.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create state with the given configuration.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            calculator: BondCalculator::new(),
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
