//! Metrics Synthesizer
//!
//! Assembles the full dashboard payload: the fixed baseline table plus a
//! procedurally generated ROC curve. The significance values stay constants
//! from `baseline` regardless of how the curves come out.
//!
//! Randomness is injectable for the same reason as the scorer's jitter:
//! seeded tests must be able to pin the curve.

use chrono::Utc;
use rand::Rng;

use super::baseline::{self, ROC_POINT_COUNT};
use super::types::{ModelId, ModelMetrics, RocPoint};

/// Generate the full metrics payload with an injectable random source
pub fn synthesize<R: Rng>(rng: &mut R) -> ModelMetrics {
    ModelMetrics {
        logistic_regression: baseline::baseline_scores(ModelId::LogisticRegression),
        random_forest: baseline::baseline_scores(ModelId::RandomForest),
        xgboost: baseline::baseline_scores(ModelId::Xgboost),
        statistical_tests: baseline::statistical_tests(),
        roc_data: generate_roc_curve(rng),
        generated_at: Utc::now(),
    }
}

/// Convenience wrapper over `thread_rng`
pub fn synthesize_default() -> ModelMetrics {
    synthesize(&mut rand::thread_rng())
}

/// Synthetic ROC points: FPR grid 0.0..=1.0 in 0.05 steps, per-model
/// TPR = min(1, fpr + offset + random * spread)
fn generate_roc_curve<R: Rng>(rng: &mut R) -> Vec<RocPoint> {
    (0..ROC_POINT_COUNT)
        .map(|i| {
            let fpr = i as f64 / (ROC_POINT_COUNT - 1) as f64;
            RocPoint {
                fpr,
                lr_tpr: synthetic_tpr(fpr, ModelId::LogisticRegression, rng),
                rf_tpr: synthetic_tpr(fpr, ModelId::RandomForest, rng),
                xgb_tpr: synthetic_tpr(fpr, ModelId::Xgboost, rng),
            }
        })
        .collect()
}

fn synthetic_tpr<R: Rng>(fpr: f64, model: ModelId, rng: &mut R) -> f64 {
    let tpr = fpr + baseline::roc_offset(model) + rng.gen::<f64>() * baseline::roc_spread(model);
    tpr.min(1.0)
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_roc_grid_shape() {
        let metrics = synthesize(&mut StdRng::seed_from_u64(1));
        assert_eq!(metrics.roc_data.len(), 21);

        for (i, point) in metrics.roc_data.iter().enumerate() {
            assert!((point.fpr - i as f64 * 0.05).abs() < EPS);
        }
        assert!((metrics.roc_data[0].fpr - 0.0).abs() < EPS);
        assert!((metrics.roc_data[20].fpr - 1.0).abs() < EPS);
    }

    #[test]
    fn test_tpr_bounds() {
        // Every offset is positive, so TPR sits between FPR and 1 regardless
        // of the random draw
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let metrics = synthesize(&mut rng);
            for point in &metrics.roc_data {
                for tpr in [point.lr_tpr, point.rf_tpr, point.xgb_tpr] {
                    assert!(tpr <= 1.0 + EPS);
                    assert!(tpr >= point.fpr - EPS);
                }
            }
        }
    }

    #[test]
    fn test_stronger_models_dominate_in_expectation() {
        // XGB offset > RF offset > LR offset; averaged over the curve the
        // ordering must show through the spread
        let metrics = synthesize(&mut StdRng::seed_from_u64(5));
        let n = metrics.roc_data.len() as f64;
        let lr: f64 = metrics.roc_data.iter().map(|p| p.lr_tpr).sum::<f64>() / n;
        let rf: f64 = metrics.roc_data.iter().map(|p| p.rf_tpr).sum::<f64>() / n;
        let xgb: f64 = metrics.roc_data.iter().map(|p| p.xgb_tpr).sum::<f64>() / n;

        assert!(rf > lr);
        assert!(xgb > rf);
    }

    #[test]
    fn test_seeded_curves_are_reproducible() {
        let a = synthesize(&mut StdRng::seed_from_u64(1234));
        let b = synthesize(&mut StdRng::seed_from_u64(1234));
        assert_eq!(a.roc_data, b.roc_data);
    }

    #[test]
    fn test_tests_are_decoupled_from_curves() {
        // Different curve draws, identical significance block
        let a = synthesize(&mut StdRng::seed_from_u64(1));
        let b = synthesize(&mut StdRng::seed_from_u64(2));
        assert_ne!(a.roc_data, b.roc_data);
        assert_eq!(a.statistical_tests, b.statistical_tests);
        assert_eq!(a.xgboost, b.xgboost);
    }

    #[test]
    fn test_metrics_wire_shape() {
        let metrics = synthesize(&mut StdRng::seed_from_u64(3));
        let value = serde_json::to_value(&metrics).unwrap();

        assert_eq!(value["statistical_tests"]["best_model"], "Xgboost");
        assert_eq!(value["statistical_tests"]["p_value_lr_vs_xgb"], 0.0008);
        assert_eq!(value["roc_data"].as_array().map(Vec::len), Some(21));
        assert!(value["xgboost"]["roc_auc"]["mean"].is_number());

        let back: ModelMetrics = serde_json::from_value(value).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn test_scores_accessor() {
        let metrics = synthesize(&mut StdRng::seed_from_u64(3));
        assert_eq!(
            metrics.scores(ModelId::Xgboost).accuracy.mean,
            metrics.xgboost.accuracy.mean
        );
    }
}
