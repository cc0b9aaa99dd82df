//! End-to-end tests driving the curriculum through a backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tutorkit_core::curriculum::Curriculum;
use tutorkit_core::generator::ExerciseGenerator;
use tutorkit_core::model::{Difficulty, ExerciseType, Metadata};
use tutorkit_core::traits::TutorBackend;
use tutorkit_providers::{MockTutor, OpenAiTutor};

fn programming_curriculum() -> Curriculum {
    let mut curriculum = Curriculum::new();
    curriculum.add_topic("Variables", "Storing and naming data");
    curriculum.add_topic("Functions", "Defining and calling functions");
    curriculum.assign_prerequisite("Functions", "Variables");

    curriculum.add_learning_point("declaration", "Declaring a variable");
    curriculum.add_learning_point("scope", "Where a variable is visible");
    curriculum.assign_learning_point_to_topic("declaration", "Variables");
    curriculum.assign_learning_point_to_topic("scope", "Variables");
    curriculum
}

#[tokio::test]
async fn curriculum_to_exercises_via_mock_backend() {
    let curriculum = programming_curriculum();
    assert_eq!(
        curriculum.get_topic_prerequisites("Functions"),
        std::collections::HashSet::from(["Variables".to_string()])
    );
    assert!(curriculum.get_topic_prerequisites("Unknown").is_empty());

    let points = curriculum.get_topic_learning_points("Variables");
    assert_eq!(points.len(), 2);

    let backend = Arc::new(MockTutor::new());
    let generator = ExerciseGenerator::new(backend.clone());
    let exercises = generator
        .generate_exercises_for_learning_points(
            &points,
            2,
            Difficulty::Beginner,
            ExerciseType::OpenEnded,
        )
        .await
        .unwrap();

    // Two exercises per point, one backend call per point, input order kept.
    assert_eq!(exercises.len(), 4);
    assert_eq!(backend.generate_calls(), 2);
    assert!(exercises[0].question.contains("declaration"));
    assert!(exercises[2].question.contains("scope"));
    for exercise in &exercises {
        assert_eq!(exercise.related_learning_points.len(), 1);
        assert_eq!(exercise.difficulty_level, Some(Difficulty::Beginner));
    }
}

#[tokio::test]
async fn grading_flow_against_openai_backend() {
    let server = MockServer::start().await;
    let reply = json!({
        "score": 72.5,
        "feedback": "The container analogy is fine but mention naming.",
        "metadata": {
            "key_concepts_understood": ["storage"],
            "areas_for_improvement": ["naming", "examples"],
            "mastery_level": "beginner",
            "confidence": 0.8
        }
    });
    let body = json!({
        "choices": [{"message": {"role": "assistant", "content": reply.to_string()}, "index": 0}],
        "model": "gpt-4.1-mini"
    });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        OpenAiTutor::new(Some("test-key".to_string()), None, Some(server.uri())).unwrap();

    let metadata = Metadata::from([
        ("topic".to_string(), json!("Programming Basics")),
        ("difficulty".to_string(), json!("beginner")),
        ("student_level".to_string(), json!("beginner")),
        ("previous_attempts".to_string(), json!(0)),
    ]);

    let result = backend
        .grade_answer(
            "Explain what a variable is in programming and provide an example.",
            "A variable is like a container that stores data in a program.",
            Some("A variable is a named storage location in computer memory."),
            Some(&metadata),
        )
        .await;

    assert_eq!(result.score(), 72.5);
    assert_eq!(result.confidence(), 0.8);
    assert!(!result.is_failure());
    assert_eq!(
        result.metadata().get("areas_for_improvement"),
        Some(&json!(["naming", "examples"]))
    );
}

#[tokio::test]
async fn generation_failure_leaves_batch_usable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let backend: Arc<dyn TutorBackend> = Arc::new(
        OpenAiTutor::new(Some("test-key".to_string()), None, Some(server.uri())).unwrap(),
    );
    let generator = ExerciseGenerator::new(backend);

    let curriculum = programming_curriculum();
    let points = curriculum.get_topic_learning_points("Variables");

    // The backend absorbs the transport failure, so the batch succeeds
    // with zero exercises instead of erroring out.
    let exercises = generator
        .generate_exercises_for_learning_points(
            &points,
            1,
            Difficulty::Intermediate,
            ExerciseType::Coding,
        )
        .await
        .unwrap();

    assert!(exercises.is_empty());
}
