//! Prompt construction for the model-backed adapter.
//!
//! Both prompts mandate a JSON-only reply so the adapter can parse the
//! model output with a strict schema and drop anything that deviates.

use tutorkit_core::learning_point::LearningPoint;
use tutorkit_core::model::{Difficulty, ExerciseType, Metadata};

/// System prompt for exercise generation.
pub const GENERATION_SYSTEM_PROMPT: &str =
    "You are an expert educational content creator. Respond only with the requested JSON format.";

/// System prompt for answer grading.
pub const GRADING_SYSTEM_PROMPT: &str =
    "You are an expert educator grading a student's answer. Respond only with the requested JSON format.";

fn type_instruction(exercise_type: ExerciseType) -> &'static str {
    match exercise_type {
        ExerciseType::MultipleChoice => {
            "Create multiple choice questions with 4 options (A, B, C, D). Include all options in the answer field."
        }
        ExerciseType::OpenEnded => "Create open-ended questions that test understanding.",
        ExerciseType::Coding => {
            "Create coding exercises that require writing code. Include a sample solution in the answer field."
        }
    }
}

fn difficulty_instruction(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "Keep the questions simple and straightforward.",
        Difficulty::Intermediate => "Include some complexity and deeper understanding.",
        Difficulty::Advanced => "Make the questions challenging and test complex understanding.",
    }
}

/// Build the exercise generation prompt for a batch of learning points.
pub fn exercise_prompt(
    learning_points: &[LearningPoint],
    difficulty: Difficulty,
    exercise_type: ExerciseType,
) -> String {
    let points_desc = learning_points
        .iter()
        .map(|point| format!("- {}: {}", point.name(), point.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Generate an educational exercise based on these learning points:

{points_desc}

Exercise Type: {}
Difficulty Level: {}

Respond with ONLY a JSON object that has these exact fields:
{{
    "question": "the exercise question",
    "expected_answer": "the correct answer or solution",
    "explanation": "explanation of why this is the correct answer"
}}"#,
        type_instruction(exercise_type),
        difficulty_instruction(difficulty),
    )
}

/// Build the grading prompt.
///
/// The expected-answer section is omitted entirely when absent. The context
/// block is built only from the `topic`, `difficulty` and `student_level`
/// metadata keys that are actually present; absent keys leave no trace.
pub fn grading_prompt(
    problem: &str,
    student_answer: &str,
    expected_answer: Option<&str>,
    metadata: Option<&Metadata>,
) -> String {
    let mut prompt = format!("Grade the student's answer to the following problem.\n\nProblem:\n{problem}\n");

    if let Some(expected) = expected_answer {
        prompt.push_str(&format!("\nExpected answer:\n{expected}\n"));
    }

    prompt.push_str(&format!("\nStudent's answer:\n{student_answer}\n"));

    if let Some(metadata) = metadata {
        let mut context_lines = Vec::new();
        for (key, label) in [
            ("topic", "Topic"),
            ("difficulty", "Difficulty"),
            ("student_level", "Student level"),
        ] {
            if let Some(value) = metadata.get(key) {
                let rendered = value.as_str().map_or_else(|| value.to_string(), String::from);
                context_lines.push(format!("- {label}: {rendered}"));
            }
        }
        if !context_lines.is_empty() {
            prompt.push_str(&format!("\nContext:\n{}\n", context_lines.join("\n")));
        }
    }

    prompt.push_str(
        r#"
Respond with ONLY a JSON object that has these exact fields:
{
    "score": <number between 0 and 100>,
    "feedback": "detailed feedback for the student",
    "metadata": {
        "key_concepts_understood": ["concepts the student demonstrated"],
        "areas_for_improvement": ["areas the student should work on"],
        "mastery_level": "beginner, intermediate, or advanced",
        "confidence": <number between 0 and 1>
    }
}"#,
    );

    prompt
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn exercise_prompt_lists_points_and_instructions() {
        let points = vec![
            LearningPoint::new("variables", "Understanding variables in programming"),
            LearningPoint::new("scope", "Variable scope rules"),
        ];
        let prompt = exercise_prompt(&points, Difficulty::Intermediate, ExerciseType::MultipleChoice);

        assert!(prompt.contains("- variables: Understanding variables in programming"));
        assert!(prompt.contains("- scope: Variable scope rules"));
        assert!(prompt.to_lowercase().contains("multiple choice questions"));
        assert!(prompt.contains("Include some complexity"));
        assert!(prompt.contains("\"expected_answer\""));
    }

    #[test]
    fn exercise_prompt_varies_by_type_and_difficulty() {
        let points = vec![LearningPoint::new("loops", "Iteration")];
        let coding = exercise_prompt(&points, Difficulty::Advanced, ExerciseType::Coding);
        assert!(coding.contains("coding exercises"));
        assert!(coding.contains("challenging"));

        let open = exercise_prompt(&points, Difficulty::Beginner, ExerciseType::OpenEnded);
        assert!(open.contains("open-ended questions"));
        assert!(open.contains("simple and straightforward"));
    }

    #[test]
    fn grading_prompt_includes_expected_answer_when_present() {
        let prompt = grading_prompt("What is 2+2?", "4", Some("Four"), None);
        assert!(prompt.contains("Expected answer:\nFour"));
        assert!(prompt.contains("Student's answer:\n4"));
    }

    #[test]
    fn grading_prompt_omits_expected_answer_when_absent() {
        let prompt = grading_prompt("What is 2+2?", "4", None, None);
        assert!(!prompt.contains("Expected answer"));
    }

    #[test]
    fn grading_prompt_context_only_renders_present_keys() {
        let metadata = Metadata::from([
            ("topic".to_string(), json!("Programming Basics")),
            ("student_level".to_string(), json!("beginner")),
            ("previous_attempts".to_string(), json!(3)),
        ]);
        let prompt = grading_prompt("P", "A", None, Some(&metadata));

        assert!(prompt.contains("Context:"));
        assert!(prompt.contains("- Topic: Programming Basics"));
        assert!(prompt.contains("- Student level: beginner"));
        assert!(!prompt.contains("Difficulty:"));
        assert!(!prompt.contains("previous_attempts"));
    }

    #[test]
    fn grading_prompt_skips_context_block_when_no_known_keys() {
        let metadata = Metadata::from([("irrelevant".to_string(), json!("x"))]);
        let prompt = grading_prompt("P", "A", None, Some(&metadata));
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn grading_prompt_mandates_json_schema() {
        let prompt = grading_prompt("P", "A", None, None);
        assert!(prompt.contains("ONLY a JSON object"));
        assert!(prompt.contains("\"key_concepts_understood\""));
        assert!(prompt.contains("\"areas_for_improvement\""));
        assert!(prompt.contains("\"mastery_level\""));
        assert!(prompt.contains("\"confidence\""));
    }
}
