//! Exercise and grading data model.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TutorError;

/// Free-form grading metadata.
///
/// Conventionally carries `key_concepts_understood`, `areas_for_improvement`
/// and `mastery_level`, but backends may attach arbitrary keys.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Difficulty requested for generated exercises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Kind of exercise to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    MultipleChoice,
    #[default]
    OpenEnded,
    Coding,
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::MultipleChoice => write!(f, "multiple_choice"),
            ExerciseType::OpenEnded => write!(f, "open_ended"),
            ExerciseType::Coding => write!(f, "coding"),
        }
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple_choice" => Ok(ExerciseType::MultipleChoice),
            "open_ended" => Ok(ExerciseType::OpenEnded),
            "coding" => Ok(ExerciseType::Coding),
            other => Err(format!("unknown exercise type: {other}")),
        }
    }
}

/// A practice exercise produced by a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// The exercise question.
    pub question: String,
    /// The correct answer or sample solution, when the backend supplies one.
    #[serde(default)]
    pub expected_answer: Option<String>,
    /// Why the expected answer is correct.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Difficulty the exercise was generated at.
    #[serde(default)]
    pub difficulty_level: Option<Difficulty>,
    /// Kind of exercise.
    #[serde(default)]
    pub exercise_type: Option<ExerciseType>,
    /// Names of the learning points this exercise covers.
    #[serde(default)]
    pub related_learning_points: Vec<String>,
}

/// The outcome of grading a student's answer.
///
/// Construction is validated: a score outside 0–100 or a confidence outside
/// 0–1 is rejected, never clamped. Fields are private so an out-of-range
/// result cannot be assembled by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingResult {
    score: f64,
    feedback: String,
    metadata: Metadata,
    confidence: f64,
}

impl GradingResult {
    /// Build a validated grading result.
    pub fn new(
        score: f64,
        feedback: impl Into<String>,
        metadata: Metadata,
        confidence: f64,
    ) -> Result<Self, TutorError> {
        if !(0.0..=100.0).contains(&score) {
            return Err(TutorError::ScoreOutOfRange(score));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(TutorError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            score,
            feedback: feedback.into(),
            metadata,
            confidence,
        })
    }

    /// The zero-score, zero-confidence sentinel a backend returns when it
    /// could not produce a real grade. Carries the error text under the
    /// `"error"` metadata key.
    pub fn failure(feedback: impl Into<String>, error: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("error".to_string(), serde_json::Value::String(error.into()));
        Self {
            score: 0.0,
            feedback: feedback.into(),
            metadata,
            confidence: 0.0,
        }
    }

    /// Score between 0 and 100.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Feedback for the student.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Backend confidence in the grade, between 0 and 1.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Whether this result is the failure sentinel.
    pub fn is_failure(&self) -> bool {
        self.metadata.contains_key("error")
    }
}
