//! Application State

use std::sync::Arc;

use price_tracker::Tracker;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Price-then-describe controller
    pub tracker: Arc<Tracker>,
}
