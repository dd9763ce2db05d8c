//! Published Metrics Store
//!
//! Process-global holder for the metrics the dashboard displays, plus the
//! training progress gauge. Written by the trainer, polled by the API layer.

use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::RwLock;

use super::types::ModelMetrics;

/// Metrics last published by a completed training run
static MODEL_METRICS: RwLock<Option<ModelMetrics>> = RwLock::new(None);

/// Progress of the in-flight training simulation (0-100)
static TRAINING_PROGRESS: AtomicU8 = AtomicU8::new(0);

/// Publish a completed metrics payload
pub fn publish(metrics: ModelMetrics) {
    log::info!(
        "model metrics published (best model: {})",
        metrics.statistical_tests.best_model
    );
    *MODEL_METRICS.write() = Some(metrics);
}

/// Metrics of the last completed run, if any
pub fn get() -> Option<ModelMetrics> {
    MODEL_METRICS.read().clone()
}

pub fn set_progress(pct: u8) {
    TRAINING_PROGRESS.store(pct, Ordering::Relaxed);
}

pub fn progress() -> u8 {
    TRAINING_PROGRESS.load(Ordering::Relaxed)
}

/// Clear published metrics and reset the progress gauge
pub fn clear() {
    *MODEL_METRICS.write() = None;
    TRAINING_PROGRESS.store(0, Ordering::Relaxed);
}
