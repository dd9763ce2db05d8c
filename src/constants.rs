//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the training simulation pacing, only edit this file.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "NeuroRisk Core";

/// Default pause between training-progress steps (milliseconds)
///
/// The simulation emits 0..=100 in steps of 10, pausing this long
/// before each tick. Cosmetic pacing only; no data depends on it.
pub const DEFAULT_TRAINING_STEP_MS: u64 = 200;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get training step delay from environment or use default
pub fn get_training_step_ms() -> u64 {
    std::env::var("NEURORISK_TRAINING_STEP_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TRAINING_STEP_MS)
}
