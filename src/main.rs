//! NeuroRisk Core - Demo Entry Point
//!
//! Exercises the service the way the dashboard does: run the training
//! simulation at startup, then assess one sample session.

use std::time::Duration;

use neurorisk_core::api::commands;
use neurorisk_core::constants::{APP_NAME, APP_VERSION};
use neurorisk_core::logic::metrics::ModelId;
use neurorisk_core::logic::scoring::SessionForm;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    if let Err(e) = commands::start_training().await {
        log::error!("training simulation failed to start: {}", e);
        return;
    }

    // Poll like the dashboard does until metrics are published
    let mut last_pct = u8::MAX;
    let metrics = loop {
        if let Ok(Some(metrics)) = commands::get_model_metrics().await {
            break metrics;
        }
        let pct = commands::get_training_progress().await.unwrap_or(0);
        if pct != last_pct {
            log::info!("training models... {}%", pct);
            last_pct = pct;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    };

    log::info!(
        "best model: {} (p-values: LR/RF {}, LR/XGB {}, RF/XGB {})",
        metrics.statistical_tests.best_model,
        metrics.statistical_tests.p_value_lr_vs_rf,
        metrics.statistical_tests.p_value_lr_vs_xgb,
        metrics.statistical_tests.p_value_rf_vs_xgb
    );
    for model in ModelId::ALL {
        let scores = metrics.scores(model);
        log::info!(
            "  {:<19} accuracy {:.2}% ± {:.2}%, ROC-AUC {:.3} ± {:.3}",
            model.label(),
            scores.accuracy.mean * 100.0,
            scores.accuracy.std * 100.0,
            scores.roc_auc.mean,
            scores.roc_auc.std
        );
    }

    let sample = SessionForm {
        eeg1: "6.8".to_string(),
        eeg2: "7.2".to_string(),
        eeg3: "6.5".to_string(),
        eeg4: "7.4".to_string(),
        gsr: "1.4".to_string(),
        age: "20".to_string(),
        duration: "55".to_string(),
        cognitive_state: "Cognitive Overload".to_string(),
        emotional_state: "Anxious".to_string(),
        ..SessionForm::default()
    };

    match commands::assess_risk(sample).await {
        Ok(verdict) => {
            log::info!(
                "verdict: {} - probability {:.1}%, confidence {:.1}%",
                verdict.label,
                verdict.probability * 100.0,
                verdict.confidence
            );
            log::info!(
                "factors: EEG {} Hz, stress {}%, {} / {}",
                verdict.factors.eeg_activity,
                verdict.factors.stress_level,
                verdict.factors.cognitive_load.as_str(),
                verdict.factors.emotional_state.as_str()
            );
        }
        Err(e) => log::error!("assessment failed: {}", e),
    }
}
