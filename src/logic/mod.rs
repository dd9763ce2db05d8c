//! Logic Module - Business Logic & Engines
//!
//! Two independent engines, no shared mutable state between them:
//! - `scoring/` - session validation + rule-based risk scorer
//! - `metrics/` - synthetic model metrics, ROC generator, training simulation

pub mod metrics;
pub mod scoring;
