//! Metrics Engine - Synthetic Model Comparison
//!
//! `synthesizer` fabricates the dashboard payload (baseline table + ROC
//! curve), `trainer` gates it behind a cancellable progress simulation,
//! and `store` holds the published result for the dashboard lifetime.

pub mod baseline;
pub mod store;
pub mod synthesizer;
pub mod trainer;
pub mod types;

pub use synthesizer::{synthesize, synthesize_default};
pub use trainer::{CancelToken, Trainer, TrainingError, TrainingHandle};
pub use types::{
    MetricDistribution, ModelId, ModelMetrics, ModelScores, RocPoint, StatisticalTests,
};
