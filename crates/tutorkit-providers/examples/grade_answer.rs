//! Grading example — grade a free-form student answer with OpenAI.
//!
//! ```bash
//! # Set your API key first:
//! export OPENAI_API_KEY="your-key-here"
//!
//! # Run the example:
//! cargo run --example grade_answer
//! ```

use serde_json::json;

use tutorkit_core::model::Metadata;
use tutorkit_core::traits::TutorBackend;
use tutorkit_providers::OpenAiTutor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = OpenAiTutor::new(None, None, None)?;

    let problem = "Explain what a variable is in programming and provide an example.";
    let student_answer = "A variable is like a container that stores data in a program. \
        For example, you can create a variable called 'age' and store the number 25 in it: age = 25";
    let expected_answer = "A variable is a named storage location in computer memory that can \
        hold data. Example: age = 25 creates a variable 'age' with the value 25.";

    let metadata = Metadata::from([
        ("topic".to_string(), json!("Programming Basics")),
        ("difficulty".to_string(), json!("beginner")),
        ("student_level".to_string(), json!("beginner")),
    ]);

    println!("Grading student's answer...");
    let result = backend
        .grade_answer(problem, student_answer, Some(expected_answer), Some(&metadata))
        .await;

    println!("\nScore: {}/100", result.score());
    println!("\nFeedback: {}", result.feedback());
    println!("\nMetadata:");
    for (key, value) in result.metadata() {
        println!("- {key}: {value}");
    }
    println!("\nGrading confidence: {}", result.confidence());

    Ok(())
}
