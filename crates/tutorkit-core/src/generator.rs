//! Orchestrates exercise generation across a batch of learning points.

use std::sync::Arc;

use crate::error::TutorError;
use crate::learning_point::LearningPoint;
use crate::model::{Difficulty, Exercise, ExerciseType};
use crate::traits::TutorBackend;

/// Drives a [`TutorBackend`] across a batch of learning points.
///
/// Each point gets its own backend call, so every generated exercise is
/// scoped to a single point and results come back in input order. Because
/// the backend never fails past its boundary, the batch cannot fail once
/// argument validation passes.
pub struct ExerciseGenerator {
    backend: Arc<dyn TutorBackend>,
}

impl ExerciseGenerator {
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self { backend }
    }

    /// Generate `count_per_point` exercises for each learning point,
    /// concatenated in input order.
    ///
    /// Rejects a negative `count_per_point` before any backend call.
    pub async fn generate_exercises_for_learning_points(
        &self,
        learning_points: &[LearningPoint],
        count_per_point: i32,
        difficulty: Difficulty,
        exercise_type: ExerciseType,
    ) -> Result<Vec<Exercise>, TutorError> {
        if count_per_point < 0 {
            return Err(TutorError::InvalidArgument(
                "count_per_point must be non-negative".to_string(),
            ));
        }
        let count = count_per_point as u32;

        let mut exercises = Vec::new();
        for point in learning_points {
            let batch = self
                .backend
                .generate_exercises(
                    std::slice::from_ref(point),
                    count,
                    difficulty,
                    exercise_type,
                )
                .await;
            tracing::debug!(
                point = point.name(),
                generated = batch.len(),
                "generated exercises for learning point"
            );
            exercises.extend(batch);
        }
        Ok(exercises)
    }
}
