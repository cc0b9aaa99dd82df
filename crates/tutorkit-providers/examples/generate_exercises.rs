//! Exercise generation example — minimal programmatic usage of tutorkit.
//!
//! Builds a tiny programming curriculum and generates exercises with the
//! mock backend, so it runs without any API key. Swap in `OpenAiTutor` (or
//! a `tutorkit.toml` with an openai backend) for real generation.
//!
//! ```bash
//! cargo run --example generate_exercises
//! ```

use std::sync::Arc;

use tutorkit_core::curriculum::Curriculum;
use tutorkit_core::generator::ExerciseGenerator;
use tutorkit_core::model::{Difficulty, ExerciseType};
use tutorkit_providers::{create_backend, load_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Build a small curriculum
    let mut curriculum = Curriculum::new();
    curriculum.add_topic("Variables", "Storing and naming data");
    curriculum.add_topic("Functions", "Defining and calling functions");
    curriculum.assign_prerequisite("Functions", "Variables");

    curriculum.add_learning_point("declaration", "Declaring a variable and assigning a value");
    curriculum.add_learning_point("scope", "Where a variable is visible and for how long");
    curriculum.assign_learning_point_to_topic("declaration", "Variables");
    curriculum.assign_learning_point_to_topic("scope", "Variables");

    println!("{curriculum}");
    println!(
        "Prerequisites of Functions: {:?}",
        curriculum.get_topic_prerequisites("Functions")
    );

    // Backend comes from tutorkit.toml when present, mock otherwise
    let config = load_config()?;
    let backend = create_backend(&config.backend)?;
    println!("Using backend: {}", backend.name());

    let generator = ExerciseGenerator::new(Arc::clone(&backend));
    let points = curriculum.get_topic_learning_points("Variables");
    let exercises = generator
        .generate_exercises_for_learning_points(
            &points,
            2,
            Difficulty::Beginner,
            ExerciseType::OpenEnded,
        )
        .await?;

    println!("\nGenerated {} exercises:", exercises.len());
    for (i, exercise) in exercises.iter().enumerate() {
        println!("\n{}. {}", i + 1, exercise.question);
        if let Some(explanation) = &exercise.explanation {
            println!("   ({explanation})");
        }
    }

    Ok(())
}
