//! Mock backend for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use tutorkit_core::learning_point::LearningPoint;
use tutorkit_core::model::{Difficulty, Exercise, ExerciseType, GradingResult, Metadata};
use tutorkit_core::traits::TutorBackend;

/// Fixed score every mock grade returns.
pub const MOCK_SCORE: f64 = 75.0;

/// A deterministic backend for contract testing without any network path.
///
/// Generates one templated exercise per (repetition, learning point) pair
/// and grades every answer with a fixed score. Records call counts and the
/// last grading call so tests can assert on what the core handed over.
#[derive(Default)]
pub struct MockTutor {
    generate_calls: AtomicU32,
    grade_calls: AtomicU32,
    last_graded_problem: Mutex<Option<String>>,
}

impl MockTutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of generation calls received.
    pub fn generate_calls(&self) -> u32 {
        self.generate_calls.load(Ordering::Relaxed)
    }

    /// Number of grading calls received.
    pub fn grade_calls(&self) -> u32 {
        self.grade_calls.load(Ordering::Relaxed)
    }

    /// Problem statement of the last grading call, if any.
    pub fn last_graded_problem(&self) -> Option<String> {
        self.last_graded_problem.lock().unwrap().clone()
    }
}

#[async_trait]
impl TutorBackend for MockTutor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_exercises(
        &self,
        learning_points: &[LearningPoint],
        count: u32,
        difficulty: Difficulty,
        exercise_type: ExerciseType,
    ) -> Vec<Exercise> {
        if learning_points.is_empty() || count == 0 {
            return Vec::new();
        }
        self.generate_calls.fetch_add(1, Ordering::Relaxed);

        let mut exercises = Vec::new();
        for _ in 0..count {
            for point in learning_points {
                exercises.push(Exercise {
                    question: format!(
                        "Explain the concept of {} in your own words.",
                        point.name()
                    ),
                    expected_answer: None,
                    explanation: Some(format!(
                        "This question tests understanding of {}",
                        point.description()
                    )),
                    difficulty_level: Some(difficulty),
                    exercise_type: Some(exercise_type),
                    related_learning_points: vec![point.name().to_string()],
                });
            }
        }
        exercises
    }

    async fn grade_answer(
        &self,
        problem: &str,
        _student_answer: &str,
        _expected_answer: Option<&str>,
        _metadata: Option<&Metadata>,
    ) -> GradingResult {
        self.grade_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_graded_problem.lock().unwrap() = Some(problem.to_string());

        let metadata = Metadata::from([
            (
                "key_concepts_understood".to_string(),
                json!(["core idea of the problem"]),
            ),
            (
                "areas_for_improvement".to_string(),
                json!(["add more detail and examples"]),
            ),
            ("mastery_level".to_string(), json!("intermediate")),
        ]);

        GradingResult::new(
            MOCK_SCORE,
            "Good attempt. Review the expected answer for details you missed.",
            metadata,
            1.0,
        )
        .expect("fixed mock grade is within range")
    }
}
