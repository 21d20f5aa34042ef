//! Application State
//!
//! Carries the deployment's default thresholds into the handlers.

use chrono::{DateTime, Utc};

use hush_core::Thresholds;

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    thresholds: Thresholds,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with the given default thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            started_at: Utc::now(),
        }
    }

    /// Deployment-wide default thresholds, used when a request omits its
    /// own
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// When this instance came up
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
