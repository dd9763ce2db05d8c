//! Risk Scorer
//!
//! Deterministic rule aggregation over one session record, not a trained
//! model. Each rule adds its weight independently; the raw sum gets a small
//! random jitter and is clamped to [0.05, 0.95].
//!
//! The jitter source is injectable: `score` draws from `thread_rng`,
//! `score_with_rng` takes any `Rng`, and `score_with_jitter` takes the drawn
//! value directly so the function is a pure map from input to verdict.

use chrono::Utc;
use rand::Rng;

use super::rules::{
    RiskWeights, HIGH_RISK_THRESHOLD, MAX_JITTER, PROBABILITY_CEILING, PROBABILITY_FLOOR,
    STRESS_SCALE,
};
use super::types::{CognitiveState, FactorBreakdown, RiskLabel, RiskVerdict, SessionInput};

// ============================================================================
// EEG SUMMARY
// ============================================================================

/// Mean and population standard deviation of the four EEG bands.
///
/// Population std: sum of squared deviations divided by 4, not 3.
pub fn eeg_summary(eeg: &[f64; 4]) -> (f64, f64) {
    let mean = eeg.iter().sum::<f64>() / 4.0;
    let variance = eeg.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 4.0;
    (mean, variance.sqrt())
}

// ============================================================================
// SCORING
// ============================================================================

/// Score with an unseeded jitter draw. Repeated calls on identical input
/// yield different probabilities; use `score_with_jitter` for determinism.
pub fn score(input: &SessionInput) -> RiskVerdict {
    score_with_rng(input, &mut rand::thread_rng())
}

/// Score with an injectable jitter source
pub fn score_with_rng<R: Rng>(input: &SessionInput, rng: &mut R) -> RiskVerdict {
    score_with_jitter(input, rng.gen_range(0.0..MAX_JITTER))
}

/// Score with a pre-drawn jitter value in [0, 0.1)
pub fn score_with_jitter(input: &SessionInput, jitter: f64) -> RiskVerdict {
    score_with_weights(input, &RiskWeights::default(), jitter)
}

/// Scoring with a custom weight table
pub fn score_with_weights(
    input: &SessionInput,
    weights: &RiskWeights,
    jitter: f64,
) -> RiskVerdict {
    debug_assert!((0.0..MAX_JITTER).contains(&jitter));

    let (eeg_mean, eeg_std) = eeg_summary(&input.eeg);

    let mut raw_score = 0.0f64;

    if eeg_mean > weights.eeg_mean_threshold {
        raw_score += weights.eeg_mean_weight;
    }
    if eeg_std > weights.eeg_std_threshold {
        raw_score += weights.eeg_std_weight;
    }
    if input.gsr > weights.gsr_threshold {
        raw_score += weights.gsr_weight;
    }
    if input.age < weights.young_age_threshold {
        raw_score += weights.young_age_weight;
    }
    if input.duration_minutes > weights.long_session_threshold {
        raw_score += weights.long_session_weight;
    }
    if input.cognitive_state == CognitiveState::CognitiveOverload {
        raw_score += weights.cognitive_overload_weight;
    }
    if input.emotional_state.is_distressed() {
        raw_score += weights.distress_weight;
    }

    let probability = (raw_score + jitter).clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING);

    let label = if probability > HIGH_RISK_THRESHOLD {
        RiskLabel::HighRisk
    } else {
        RiskLabel::LowRisk
    };

    let confidence = (probability - HIGH_RISK_THRESHOLD).abs() * 2.0 * 100.0;

    log::debug!(
        "risk assessment: raw={:.2} jitter={:.3} probability={:.3} label={}",
        raw_score,
        jitter,
        probability,
        label
    );

    RiskVerdict {
        id: uuid::Uuid::new_v4().to_string(),
        probability,
        label,
        confidence,
        factors: FactorBreakdown {
            eeg_activity: round_to(eeg_mean, 2),
            stress_level: round_to(input.gsr * STRESS_SCALE, 1),
            cognitive_load: input.cognitive_state,
            emotional_state: input.emotional_state,
        },
        assessed_at: Utc::now(),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scoring::types::{EmotionalState, Environment, Gender, SessionType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    /// Baseline input where no rule fires
    fn quiet_input() -> SessionInput {
        SessionInput {
            eeg: [1.0, 1.0, 1.0, 1.0],
            gsr: 0.5,
            age: 40,
            gender: Gender::Female,
            session_type: SessionType::Study,
            duration_minutes: 20,
            environment: Environment::Library,
            cognitive_state: CognitiveState::Focused,
            emotional_state: EmotionalState::Calm,
        }
    }

    #[test]
    fn test_eeg_summary_uniform() {
        let (mean, std) = eeg_summary(&[4.0, 4.0, 4.0, 4.0]);
        assert!((mean - 4.0).abs() < EPS);
        assert!(std.abs() < EPS);
    }

    #[test]
    fn test_eeg_summary_population_std() {
        let (mean, std) = eeg_summary(&[0.0, 0.0, 10.0, 10.0]);
        assert!((mean - 5.0).abs() < EPS);
        // Population std (divide by 4) is exactly 5; sample std would be ~5.77
        assert!((std - 5.0).abs() < EPS);
    }

    #[test]
    fn test_quiet_input_clamps_to_floor() {
        let verdict = score_with_jitter(&quiet_input(), 0.0);
        assert!((verdict.probability - 0.05).abs() < EPS);
        assert_eq!(verdict.label, RiskLabel::LowRisk);
        assert!((verdict.confidence - 90.0).abs() < EPS);
    }

    #[test]
    fn test_each_rule_fires_independently() {
        let cases: Vec<(Box<dyn Fn(&mut SessionInput)>, f64)> = vec![
            (Box::new(|i| i.eeg = [7.0; 4]), 0.25),
            (Box::new(|i| i.eeg = [1.0, 1.0, 7.0, 7.0]), 0.20), // std 3.0, mean 4.0
            (Box::new(|i| i.gsr = 1.5), 0.15),
            (Box::new(|i| i.age = 19), 0.10),
            (Box::new(|i| i.duration_minutes = 60), 0.10),
            (
                Box::new(|i| i.cognitive_state = CognitiveState::CognitiveOverload),
                0.15,
            ),
            (
                Box::new(|i| i.emotional_state = EmotionalState::Stressed),
                0.15,
            ),
        ];

        for (mutate, weight) in cases {
            let mut input = quiet_input();
            mutate(&mut input);
            let verdict = score_with_jitter(&input, 0.0);
            assert!(
                (verdict.probability - weight).abs() < EPS,
                "expected lone weight {}, got {}",
                weight,
                verdict.probability
            );
        }
    }

    #[test]
    fn test_all_rules_clamp_to_ceiling() {
        // All seven rules fire: raw 1.10, clamped to 0.95
        let input = SessionInput {
            eeg: [9.0, 9.0, 1.0, 9.0], // mean 7.0 > 6, std ~3.46 > 2.5
            gsr: 1.5,
            age: 19,
            duration_minutes: 60,
            cognitive_state: CognitiveState::CognitiveOverload,
            emotional_state: EmotionalState::Anxious,
            ..quiet_input()
        };

        let verdict = score_with_jitter(&input, 0.0);
        assert!((verdict.probability - 0.95).abs() < EPS);
        assert_eq!(verdict.label, RiskLabel::HighRisk);
        assert!((verdict.confidence - 90.0).abs() < EPS);
    }

    #[test]
    fn test_high_risk_scenario() {
        // eeg mean 7 (+0.25), std 0 (no bonus), gsr (+0.15), age (+0.10),
        // duration (+0.10), overload (+0.15), anxious (+0.15) => 0.90
        let input = SessionInput {
            eeg: [7.0; 4],
            gsr: 1.5,
            age: 19,
            duration_minutes: 60,
            cognitive_state: CognitiveState::CognitiveOverload,
            emotional_state: EmotionalState::Anxious,
            ..quiet_input()
        };

        let verdict = score_with_jitter(&input, 0.0);
        assert!((verdict.probability - 0.90).abs() < EPS);
        assert_eq!(verdict.label, RiskLabel::HighRisk);
        assert!((verdict.confidence - 80.0).abs() < EPS);
        assert!((verdict.factors.eeg_activity - 7.0).abs() < EPS);
        assert!((verdict.factors.stress_level - 75.0).abs() < EPS);
        assert_eq!(verdict.factors.cognitive_load, CognitiveState::CognitiveOverload);
        assert_eq!(verdict.factors.emotional_state, EmotionalState::Anxious);
    }

    #[test]
    fn test_probability_always_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        let inputs = [
            quiet_input(),
            SessionInput {
                eeg: [9.0, 9.0, 1.0, 9.0],
                gsr: 1.5,
                age: 19,
                duration_minutes: 60,
                cognitive_state: CognitiveState::CognitiveOverload,
                emotional_state: EmotionalState::Stressed,
                ..quiet_input()
            },
        ];

        for input in &inputs {
            for _ in 0..200 {
                let verdict = score_with_rng(input, &mut rng);
                assert!(verdict.probability >= 0.05 && verdict.probability <= 0.95);
                assert_eq!(
                    verdict.label == RiskLabel::HighRisk,
                    verdict.probability > 0.5
                );
            }
        }
    }

    #[test]
    fn test_confidence_monotonic_away_from_half() {
        // Raw scores 0.55, 0.65, ..., via tailored weight tables
        let input = SessionInput {
            gsr: 1.5,
            ..quiet_input()
        };

        let mut last = -1.0;
        for gsr_weight in [0.55, 0.65, 0.75, 0.85, 0.95] {
            let weights = RiskWeights {
                gsr_weight,
                ..RiskWeights::default()
            };
            let verdict = score_with_weights(&input, &weights, 0.0);
            assert!(
                verdict.confidence > last,
                "confidence should grow away from 0.5"
            );
            last = verdict.confidence;
        }
    }

    #[test]
    fn test_half_probability_is_low_risk_with_zero_confidence() {
        // Label flips strictly above 0.5; a verdict sitting exactly on the
        // threshold reads LowRisk with no confidence either way
        let input = SessionInput {
            gsr: 1.5,
            ..quiet_input()
        };
        let weights = RiskWeights {
            gsr_weight: 0.5,
            ..RiskWeights::default()
        };

        let verdict = score_with_weights(&input, &weights, 0.0);
        assert!((verdict.probability - 0.5).abs() < EPS);
        assert_eq!(verdict.label, RiskLabel::LowRisk);
        assert!(verdict.confidence.abs() < EPS);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let input = quiet_input();
        let a = score_with_rng(&input, &mut StdRng::seed_from_u64(7));
        let b = score_with_rng(&input, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.probability, b.probability);
    }

    #[test]
    fn test_factor_rounding() {
        let input = SessionInput {
            eeg: [5.111, 5.111, 5.111, 5.111],
            gsr: 0.333,
            ..quiet_input()
        };

        let verdict = score_with_jitter(&input, 0.0);
        assert!((verdict.factors.eeg_activity - 5.11).abs() < EPS);
        assert!((verdict.factors.stress_level - 16.7).abs() < EPS); // 0.333 * 50 = 16.65 -> 16.7
    }
}
