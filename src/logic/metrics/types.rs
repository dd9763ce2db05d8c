//! Metrics Types
//!
//! Data structures for the model-comparison dashboard. All values are
//! synthetic display data; nothing here is fit to real predictions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// MODEL IDENTIFIERS
// ============================================================================

/// The three fixed classifiers in the comparison view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    LogisticRegression,
    RandomForest,
    Xgboost,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [
        ModelId::LogisticRegression,
        ModelId::RandomForest,
        ModelId::Xgboost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModelId::LogisticRegression => "Logistic Regression",
            ModelId::RandomForest => "Random Forest",
            ModelId::Xgboost => "XGBoost",
        }
    }

    /// Short code used in chart legends
    pub fn code(&self) -> &'static str {
        match self {
            ModelId::LogisticRegression => "LR",
            ModelId::RandomForest => "RF",
            ModelId::Xgboost => "XGB",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ModelId::LogisticRegression => "#6B7280", // Gray
            ModelId::RandomForest => "#F59E0B",       // Amber
            ModelId::Xgboost => "#6366F1",            // Indigo
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// METRIC DISTRIBUTIONS
// ============================================================================

/// A metric reported as mean ± standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDistribution {
    pub mean: f64,
    pub std: f64,
}

/// The five reported metric distributions for one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    pub accuracy: MetricDistribution,
    pub precision: MetricDistribution,
    pub recall: MetricDistribution,
    pub f1_score: MetricDistribution,
    pub roc_auc: MetricDistribution,
}

// ============================================================================
// ROC CURVE
// ============================================================================

/// One row of the synthetic ROC curve, all three models at the same FPR
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub lr_tpr: f64,
    pub rf_tpr: f64,
    pub xgb_tpr: f64,
}

// ============================================================================
// STATISTICAL TESTS
// ============================================================================

/// Pairwise significance values and the designated best model.
///
/// These are fixed constants, intentionally NOT computed from the generated
/// ROC curves - the displayed "proof" and the displayed numbers are
/// independent mock data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticalTests {
    pub p_value_lr_vs_rf: f64,
    pub p_value_lr_vs_xgb: f64,
    pub p_value_rf_vs_xgb: f64,
    pub best_model: ModelId,
}

// ============================================================================
// MODEL METRICS (the full dashboard payload)
// ============================================================================

/// Immutable once generated; independent of any session input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub logistic_regression: ModelScores,
    pub random_forest: ModelScores,
    pub xgboost: ModelScores,
    pub statistical_tests: StatisticalTests,
    pub roc_data: Vec<RocPoint>,
    pub generated_at: DateTime<Utc>,
}

impl ModelMetrics {
    pub fn scores(&self, model: ModelId) -> &ModelScores {
        match model {
            ModelId::LogisticRegression => &self.logistic_regression,
            ModelId::RandomForest => &self.random_forest,
            ModelId::Xgboost => &self.xgboost,
        }
    }
}
