//! Risk Scoring Rules & Weights
//!
//! Thresholds and additive weights for the rule-based scorer.
//! No scoring logic here, only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// RULE THRESHOLDS
// ============================================================================

/// EEG mean above this adds EEG_MEAN_WEIGHT
pub const EEG_MEAN_THRESHOLD: f64 = 6.0;

/// EEG population std-dev above this adds EEG_STD_WEIGHT
pub const EEG_STD_THRESHOLD: f64 = 2.5;

/// GSR above this adds GSR_WEIGHT
pub const GSR_THRESHOLD: f64 = 1.2;

/// Age below this adds YOUNG_AGE_WEIGHT
pub const YOUNG_AGE_THRESHOLD: u32 = 21;

/// Session duration (minutes) above this adds LONG_SESSION_WEIGHT
pub const LONG_SESSION_THRESHOLD: u32 = 50;

// ============================================================================
// WEIGHTS (additive, non-exclusive; max raw score 1.10, not normalized)
// ============================================================================

pub const EEG_MEAN_WEIGHT: f64 = 0.25;
pub const EEG_STD_WEIGHT: f64 = 0.20;
pub const GSR_WEIGHT: f64 = 0.15;
pub const YOUNG_AGE_WEIGHT: f64 = 0.10;
pub const LONG_SESSION_WEIGHT: f64 = 0.10;
pub const COGNITIVE_OVERLOAD_WEIGHT: f64 = 0.15;
pub const DISTRESS_WEIGHT: f64 = 0.15;

// ============================================================================
// PROBABILITY BOUNDS
// ============================================================================

/// Probability is clamped to [PROBABILITY_FLOOR, PROBABILITY_CEILING]
pub const PROBABILITY_FLOOR: f64 = 0.05;
pub const PROBABILITY_CEILING: f64 = 0.95;

/// Above this probability = HighRisk
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

/// Jitter is drawn from [0, MAX_JITTER)
pub const MAX_JITTER: f64 = 0.1;

/// stress_level = gsr * STRESS_SCALE. Legacy display scale, unit unspecified.
pub const STRESS_SCALE: f64 = 50.0;

// ============================================================================
// CONFIGURABLE WEIGHT TABLE
// ============================================================================

/// Weight table for the scorer (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskWeights {
    pub eeg_mean_threshold: f64,
    pub eeg_mean_weight: f64,
    pub eeg_std_threshold: f64,
    pub eeg_std_weight: f64,
    pub gsr_threshold: f64,
    pub gsr_weight: f64,
    pub young_age_threshold: u32,
    pub young_age_weight: f64,
    pub long_session_threshold: u32,
    pub long_session_weight: f64,
    pub cognitive_overload_weight: f64,
    pub distress_weight: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            eeg_mean_threshold: EEG_MEAN_THRESHOLD,
            eeg_mean_weight: EEG_MEAN_WEIGHT,
            eeg_std_threshold: EEG_STD_THRESHOLD,
            eeg_std_weight: EEG_STD_WEIGHT,
            gsr_threshold: GSR_THRESHOLD,
            gsr_weight: GSR_WEIGHT,
            young_age_threshold: YOUNG_AGE_THRESHOLD,
            young_age_weight: YOUNG_AGE_WEIGHT,
            long_session_threshold: LONG_SESSION_THRESHOLD,
            long_session_weight: LONG_SESSION_WEIGHT,
            cognitive_overload_weight: COGNITIVE_OVERLOAD_WEIGHT,
            distress_weight: DISTRESS_WEIGHT,
        }
    }
}

impl RiskWeights {
    /// Maximum attainable raw score with every rule firing
    pub fn max_raw_score(&self) -> f64 {
        self.eeg_mean_weight
            + self.eeg_std_weight
            + self.gsr_weight
            + self.young_age_weight
            + self.long_session_weight
            + self.cognitive_overload_weight
            + self.distress_weight
    }
}
