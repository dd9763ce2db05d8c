//! Frontend Commands - API for the Presentation Layer
//!
//! Thin boundary over the two engines. Typed errors from the logic layer
//! are stringified here; the view only needs displayable messages.

use std::time::Duration;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::constants;
use crate::logic::metrics::trainer::{CancelToken, Trainer};
use crate::logic::metrics::{store, ModelMetrics};
use crate::logic::scoring::{self, RiskVerdict, RiskWeights, SessionForm};

/// Single trainer instance guarding re-entrancy across the process
static TRAINER: Lazy<Trainer> = Lazy::new(Trainer::new);

/// Cancel token of the run currently in flight, if any
static ACTIVE_RUN: RwLock<Option<CancelToken>> = RwLock::new(None);

// ============================================================================
// ASSESSMENT COMMANDS
// ============================================================================

/// Validate a raw session form and compute a risk verdict.
///
/// Fails with the offending field name on bad input; never produces a
/// verdict from unparseable values.
pub async fn assess_risk(form: SessionForm) -> Result<RiskVerdict, String> {
    let input = scoring::parse_form(&form).map_err(|e| e.to_string())?;
    let verdict = scoring::score(&input);

    log::info!(
        "assessment {}: {} (probability {:.1}%, confidence {:.1}%)",
        verdict.id,
        verdict.label,
        verdict.probability * 100.0,
        verdict.confidence
    );

    Ok(verdict)
}

/// Current scoring weight table (for the methodology view)
pub async fn get_scoring_weights() -> Result<RiskWeights, String> {
    Ok(RiskWeights::default())
}

// ============================================================================
// TRAINING COMMANDS
// ============================================================================

/// Kick off the training simulation. Rejected while one is in flight.
///
/// The progress gauge is back at 0 before this returns. Progress is
/// exposed via `get_training_progress`; the metrics payload lands in the
/// store when the run completes.
pub async fn start_training() -> Result<(), String> {
    let step_delay = Duration::from_millis(constants::get_training_step_ms());

    let handle = TRAINER
        .start(step_delay, store::set_progress)
        .map_err(|e| e.to_string())?;

    *ACTIVE_RUN.write() = Some(handle.cancel_token());
    log::info!("training simulation started (step delay {:?})", step_delay);

    tokio::spawn(async move {
        match handle.wait().await {
            Some(metrics) => store::publish(metrics),
            None => log::info!("training simulation ended without metrics (cancelled)"),
        }
    });

    Ok(())
}

/// Cancel the in-flight simulation. Returns whether a live run was
/// signalled.
///
/// A run finishing at this same instant may still publish its metrics; the
/// return value reflects the state observed when the signal was sent.
pub async fn cancel_training() -> Result<bool, String> {
    match ACTIVE_RUN.write().take() {
        // A token may linger after a completed run; only a live run counts
        Some(token) if TRAINER.is_running() => {
            token.cancel();
            Ok(true)
        }
        _ => Ok(false),
    }
}

pub async fn is_training() -> Result<bool, String> {
    Ok(TRAINER.is_running())
}

/// Progress of the in-flight simulation, 0-100
pub async fn get_training_progress() -> Result<u8, String> {
    Ok(store::progress())
}

/// Metrics of the last completed run; `None` until training has finished
pub async fn get_model_metrics() -> Result<Option<ModelMetrics>, String> {
    Ok(store::get())
}

// ============================================================================
// UNIT TESTS
// ============================================================================
