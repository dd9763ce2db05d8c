//! Scoring Types
//!
//! Core types for the risk assessment flow. No logic here, only data
//! structures plus their string conversions for the form boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// SESSION ENUMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    Study,
    Test,
    Relaxation,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Study => "Study",
            SessionType::Test => "Test",
            SessionType::Relaxation => "Relaxation",
        }
    }
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Study" => Ok(SessionType::Study),
            "Test" => Ok(SessionType::Test),
            "Relaxation" => Ok(SessionType::Relaxation),
            other => Err(format!("unknown session type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Library,
    Home,
    QuietRoom,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Library => "Library",
            Environment::Home => "Home",
            Environment::QuietRoom => "Quiet Room",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Library" => Ok(Environment::Library),
            "Home" => Ok(Environment::Home),
            "Quiet Room" => Ok(Environment::QuietRoom),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// Self-reported cognitive state during the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CognitiveState {
    Focused,
    Distracted,
    CognitiveOverload,
}

impl CognitiveState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveState::Focused => "Focused",
            CognitiveState::Distracted => "Distracted",
            CognitiveState::CognitiveOverload => "Cognitive Overload",
        }
    }
}

impl FromStr for CognitiveState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Focused" => Ok(CognitiveState::Focused),
            "Distracted" => Ok(CognitiveState::Distracted),
            "Cognitive Overload" => Ok(CognitiveState::CognitiveOverload),
            other => Err(format!("unknown cognitive state: {}", other)),
        }
    }
}

/// Self-reported emotional state during the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionalState {
    Calm,
    Anxious,
    Stressed,
}

impl EmotionalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Calm => "Calm",
            EmotionalState::Anxious => "Anxious",
            EmotionalState::Stressed => "Stressed",
        }
    }

    /// Anxious and Stressed both count as distress for scoring
    pub fn is_distressed(&self) -> bool {
        matches!(self, EmotionalState::Anxious | EmotionalState::Stressed)
    }
}

impl FromStr for EmotionalState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Calm" => Ok(EmotionalState::Calm),
            "Anxious" => Ok(EmotionalState::Anxious),
            "Stressed" => Ok(EmotionalState::Stressed),
            other => Err(format!("unknown emotional state: {}", other)),
        }
    }
}

// ============================================================================
// SESSION FORM (raw user entry)
// ============================================================================

/// Raw form state as entered in the UI, all fields as strings.
///
/// Numeric fields are parsed by `validate::parse_form`; the select
/// fields default to the same initial values the form shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionForm {
    pub eeg1: String,
    pub eeg2: String,
    pub eeg3: String,
    pub eeg4: String,
    pub gsr: String,
    pub age: String,
    pub gender: String,
    pub session_type: String,
    pub duration: String,
    pub environment: String,
    pub cognitive_state: String,
    pub emotional_state: String,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self {
            eeg1: String::new(),
            eeg2: String::new(),
            eeg3: String::new(),
            eeg4: String::new(),
            gsr: String::new(),
            age: String::new(),
            gender: "Male".to_string(),
            session_type: "Study".to_string(),
            duration: String::new(),
            environment: "Library".to_string(),
            cognitive_state: "Focused".to_string(),
            emotional_state: "Calm".to_string(),
        }
    }
}

// ============================================================================
// SESSION INPUT (validated)
// ============================================================================

/// A validated patient-session record, consumed once per scoring call.
/// Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
    /// Four EEG band readings (Hz, expected 0-10)
    pub eeg: [f64; 4],
    /// Galvanic skin response (expected 0-2)
    pub gsr: f64,
    pub age: u32,
    pub gender: Gender,
    pub session_type: SessionType,
    pub duration_minutes: u32,
    pub environment: Environment,
    pub cognitive_state: CognitiveState,
    pub emotional_state: EmotionalState,
}

// ============================================================================
// RISK VERDICT
// ============================================================================

/// Binary risk label, thresholded at probability > 0.5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    HighRisk,
    LowRisk,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "High Risk",
            RiskLabel::LowRisk => "Low Risk",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "#ef4444", // Red
            RiskLabel::LowRisk => "#10b981",  // Green
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supporting factors echoed back alongside the verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorBreakdown {
    /// Mean of the four EEG bands, rounded to 2 decimals (UI appends "Hz")
    pub eeg_activity: f64,
    /// gsr * 50, rounded to 1 decimal. Legacy display scale with no
    /// documented physical unit; preserved as-is (UI appends "%").
    pub stress_level: f64,
    pub cognitive_load: CognitiveState,
    pub emotional_state: EmotionalState,
}

/// Result of one risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub id: String,
    /// Clamped to [0.05, 0.95]
    pub probability: f64,
    pub label: RiskLabel,
    /// |probability - 0.5| * 2, as a percentage (0-90)
    pub confidence: f64,
    pub factors: FactorBreakdown,
    pub assessed_at: DateTime<Utc>,
}
