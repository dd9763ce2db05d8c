//! Baseline Metrics Constants
//!
//! Hardcoded per-model performance numbers and ROC generator parameters.
//! No generation logic here, only the fixed tables the synthesizer reads.

use super::types::{MetricDistribution, ModelId, ModelScores, StatisticalTests};

// ============================================================================
// SIGNIFICANCE CONSTANTS (static, never derived from the curves)
// ============================================================================

pub const P_VALUE_LR_VS_RF: f64 = 0.0012;
pub const P_VALUE_LR_VS_XGB: f64 = 0.0008;
pub const P_VALUE_RF_VS_XGB: f64 = 0.0423;

/// Designated winner of the comparison view
pub const BEST_MODEL: ModelId = ModelId::Xgboost;

// ============================================================================
// ROC GENERATOR PARAMETERS
// ============================================================================

/// Points on the synthetic ROC curve: FPR 0.0 to 1.0 in 0.05 steps
pub const ROC_POINT_COUNT: usize = 21;

/// Per-model vertical offset: tpr = min(1, fpr + offset + random * spread)
pub fn roc_offset(model: ModelId) -> f64 {
    match model {
        ModelId::LogisticRegression => 0.25,
        ModelId::RandomForest => 0.40,
        ModelId::Xgboost => 0.45,
    }
}

/// Per-model random spread on top of the offset
pub fn roc_spread(model: ModelId) -> f64 {
    match model {
        ModelId::LogisticRegression => 0.10,
        ModelId::RandomForest => 0.05,
        ModelId::Xgboost => 0.05,
    }
}

// ============================================================================
// BASELINE SCORE TABLE
// ============================================================================

const fn dist(mean: f64, std: f64) -> MetricDistribution {
    MetricDistribution { mean, std }
}

/// Fixed mean ± std table for one model
pub fn baseline_scores(model: ModelId) -> ModelScores {
    match model {
        ModelId::LogisticRegression => ModelScores {
            accuracy: dist(0.7234, 0.0312),
            precision: dist(0.7089, 0.0289),
            recall: dist(0.6945, 0.0334),
            f1_score: dist(0.7016, 0.0298),
            roc_auc: dist(0.7812, 0.0267),
        },
        ModelId::RandomForest => ModelScores {
            accuracy: dist(0.8456, 0.0234),
            precision: dist(0.8312, 0.0256),
            recall: dist(0.8523, 0.0289),
            f1_score: dist(0.8416, 0.0245),
            roc_auc: dist(0.9123, 0.0198),
        },
        ModelId::Xgboost => ModelScores {
            accuracy: dist(0.8612, 0.0198),
            precision: dist(0.8489, 0.0223),
            recall: dist(0.8734, 0.0267),
            f1_score: dist(0.8610, 0.0212),
            roc_auc: dist(0.9287, 0.0176),
        },
    }
}

/// The fixed pairwise test results
pub fn statistical_tests() -> StatisticalTests {
    StatisticalTests {
        p_value_lr_vs_rf: P_VALUE_LR_VS_RF,
        p_value_lr_vs_xgb: P_VALUE_LR_VS_XGB,
        p_value_rf_vs_xgb: P_VALUE_RF_VS_XGB,
        best_model: BEST_MODEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_model_has_best_numbers() {
        // The designated winner also happens to carry the top means
        let xgb = baseline_scores(ModelId::Xgboost);
        for other in [ModelId::LogisticRegression, ModelId::RandomForest] {
            let scores = baseline_scores(other);
            assert!(xgb.accuracy.mean > scores.accuracy.mean);
            assert!(xgb.roc_auc.mean > scores.roc_auc.mean);
        }
    }

    #[test]
    fn test_significance_constants() {
        let tests = statistical_tests();
        assert_eq!(tests.p_value_lr_vs_rf, 0.0012);
        assert_eq!(tests.p_value_lr_vs_xgb, 0.0008);
        assert_eq!(tests.p_value_rf_vs_xgb, 0.0423);
        assert_eq!(tests.best_model, ModelId::Xgboost);
        // All below the 0.05 significance threshold the view advertises
        assert!(tests.p_value_rf_vs_xgb <= 0.05);
    }
}
