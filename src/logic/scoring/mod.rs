//! Scoring Engine - Rule-Based Risk Assessment
//!
//! Pipeline: `SessionForm` (raw strings) → `validate::parse_form` →
//! `SessionInput` → `scorer::score` → `RiskVerdict`.
//!
//! Stateless; each scoring call is independent and requires no locking.

pub mod rules;
pub mod scorer;
pub mod types;
pub mod validate;

pub use rules::RiskWeights;
pub use scorer::{score, score_with_jitter, score_with_rng, score_with_weights};
pub use types::{
    CognitiveState, EmotionalState, Environment, FactorBreakdown, Gender, RiskLabel, RiskVerdict,
    SessionForm, SessionInput, SessionType,
};
pub use validate::{parse_form, InvalidInputError};
