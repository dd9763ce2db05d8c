//! Training Simulator
//!
//! The dashboard's "training" step is a timed progress animation, not
//! computation: progress ticks 0..=100 in steps of 10 with a pause before
//! each tick, then the synthesizer produces the metrics payload.
//!
//! Constraints:
//! - not re-entrant: a second start while one run is in flight is rejected
//! - cancellable: after cancel (or handle drop) no further progress
//!   callbacks fire and no metrics are produced

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::synthesizer;
use super::types::ModelMetrics;

/// Progress percentage step per tick
const PROGRESS_STEP: u8 = 10;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingError {
    /// A simulation is already in flight
    AlreadyRunning,
}

impl std::fmt::Display for TrainingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingError::AlreadyRunning => {
                write!(f, "a training simulation is already in progress")
            }
        }
    }
}

impl std::error::Error for TrainingError {}

// ============================================================================
// CANCELLATION
// ============================================================================

/// Shared cancel flag for one training run
#[derive(Debug, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Resets the trainer's in-flight flag when the run ends, however it ends
struct FlightGuard(Arc<AtomicBool>);

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ============================================================================
// TRAINER
// ============================================================================

/// Owns the non-re-entrancy guard for training runs
#[derive(Debug)]
pub struct Trainer {
    in_flight: Arc<AtomicBool>,
}

impl Trainer {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Start the simulation. `on_progress` fires synchronously with 0 once
    /// the run is accepted, then with 0, 10, ..., 100, each tick preceded
    /// by `step_delay`.
    pub fn start<F>(
        &self,
        step_delay: Duration,
        on_progress: F,
    ) -> Result<TrainingHandle, TrainingError>
    where
        F: Fn(u8) + Send + 'static,
    {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(TrainingError::AlreadyRunning);
        }

        let cancel = CancelToken::new();
        let token = cancel.clone();
        let guard = FlightGuard(self.in_flight.clone());

        // Reset the gauge before the first delayed tick; a restarted run
        // must not keep showing the previous run's 100%
        on_progress(0);

        let task = tokio::spawn(async move {
            let _guard = guard;

            for step in 0..=(100 / PROGRESS_STEP) {
                tokio::time::sleep(step_delay).await;
                if token.is_cancelled() {
                    log::info!(
                        "training simulation cancelled at {}%",
                        step * PROGRESS_STEP
                    );
                    return None;
                }
                on_progress(step * PROGRESS_STEP);
            }

            log::info!("training simulation complete, synthesizing metrics");
            Some(synthesizer::synthesize_default())
        });

        Ok(TrainingHandle {
            cancel,
            task: Some(task),
        })
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TRAINING HANDLE
// ============================================================================

/// Handle to one in-flight run. Dropping it cancels the simulation.
#[derive(Debug)]
pub struct TrainingHandle {
    cancel: CancelToken,
    task: Option<JoinHandle<Option<ModelMetrics>>>,
}

impl TrainingHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that outlives the handle, for remote cancellation
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Wait for the run to finish. `None` means it was cancelled.
    pub async fn wait(mut self) -> Option<ModelMetrics> {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(None),
            None => None,
        }
    }
}

impl Drop for TrainingHandle {
    fn drop(&mut self) {
        // Consumer torn down mid-simulation: stop further callbacks
        if self.task.is_some() {
            self.cancel.cancel();
        }
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
