//! Backend capability trait.
//!
//! The single seam the core depends on: anything that can generate
//! exercises and grade answers — an HTTP-backed model, a local server, a
//! deterministic test double — implements [`TutorBackend`]. Implementations
//! live in the `tutorkit-providers` crate.

use async_trait::async_trait;

use crate::learning_point::LearningPoint;
use crate::model::{Difficulty, Exercise, ExerciseType, GradingResult, Metadata};

/// A backend that can generate practice exercises and grade answers.
///
/// Neither operation returns a `Result`: downstream parsing and transport
/// failures are absorbed into the return value (an empty batch for
/// generation, a zero-score sentinel for grading), so callers never need
/// error handling around a backend call. Only construction and argument
/// validation fail synchronously, before any call is made.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Human-readable backend name (e.g. "openai").
    fn name(&self) -> &str;

    /// Generate exercises covering the given learning points.
    ///
    /// An empty `learning_points` slice or a `count` of zero yields an
    /// empty vec without any external call.
    async fn generate_exercises(
        &self,
        learning_points: &[LearningPoint],
        count: u32,
        difficulty: Difficulty,
        exercise_type: ExerciseType,
    ) -> Vec<Exercise>;

    /// Grade a free-form student answer against a problem statement.
    ///
    /// Always returns a [`GradingResult`]; failures degrade to the
    /// zero-score sentinel carrying an `"error"` metadata key.
    async fn grade_answer(
        &self,
        problem: &str,
        student_answer: &str,
        expected_answer: Option<&str>,
        metadata: Option<&Metadata>,
    ) -> GradingResult;
}
