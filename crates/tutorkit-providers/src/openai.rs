//! OpenAI chat-completions backend implementation.
//!
//! Requests `n` completions per generation call and parses each one with a
//! strict JSON schema; anything the model gets wrong is dropped or degraded
//! to a sentinel value rather than surfaced as an error, per the
//! `TutorBackend` contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tutorkit_core::learning_point::LearningPoint;
use tutorkit_core::model::{Difficulty, Exercise, ExerciseType, GradingResult, Metadata};
use tutorkit_core::traits::TutorBackend;

use crate::error::BackendError;
use crate::prompt::{
    exercise_prompt, grading_prompt, GENERATION_SYSTEM_PROMPT, GRADING_SYSTEM_PROMPT,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Sampling temperature for exercise generation (varied output wanted).
const GENERATION_TEMPERATURE: f64 = 0.7;
/// Sampling temperature for grading (consistency wanted).
const GRADING_TEMPERATURE: f64 = 0.3;

const GRADING_PARSE_FAILURE_FEEDBACK: &str = "Failed to grade answer due to technical error.";

/// OpenAI-backed tutor adapter.
pub struct OpenAiTutor {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiTutor {
    /// Build an adapter from an explicit API key, falling back to the
    /// `OPENAI_API_KEY` environment variable read once here.
    ///
    /// Fails with [`BackendError::MissingApiKey`] when neither source
    /// yields a key, before any call is attempted.
    pub fn new(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, BackendError> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()))
            .ok_or(BackendError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        })
    }

    /// Model identifier this adapter sends with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn call_chat(
        &self,
        system_prompt: &str,
        prompt: &str,
        n: u32,
        temperature: f64,
    ) -> Result<ChatResponse, BackendError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            n,
            temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    BackendError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5)
                .saturating_mul(1000);
            return Err(BackendError::RateLimited {
                retry_after_ms: retry_after,
            });
        }
        if status == 401 {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::AuthenticationFailed(body));
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError {
                status,
                message: body,
            });
        }

        response.json().await.map_err(|e| BackendError::ApiError {
            status: 0,
            message: format!("failed to parse response: {e}"),
        })
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    n: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// The exact reply shape the generation prompt mandates.
#[derive(Deserialize)]
struct ExerciseReply {
    question: String,
    expected_answer: String,
    explanation: String,
}

/// The exact reply shape the grading prompt mandates.
#[derive(Deserialize)]
struct GradeReply {
    score: f64,
    feedback: String,
    #[serde(default)]
    metadata: Metadata,
}

/// Parse a single grading completion into a validated result.
///
/// Confidence is read from `metadata.confidence`, defaulting to 1.0; the
/// metadata object is passed through as the model gave it. An out-of-range
/// score or confidence counts as an extraction failure.
fn parse_grade_reply(content: &str) -> Result<GradingResult, String> {
    let reply: GradeReply = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let confidence = reply
        .metadata
        .get("confidence")
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(1.0);
    GradingResult::new(reply.score, reply.feedback, reply.metadata, confidence)
        .map_err(|e| e.to_string())
}

#[async_trait]
impl TutorBackend for OpenAiTutor {
    fn name(&self) -> &str {
        "openai"
    }

    #[instrument(skip(self, learning_points), fields(model = %self.model, points = learning_points.len()))]
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

        let prompt = exercise_prompt(learning_points, difficulty, exercise_type);
        let response = match self
            .call_chat(GENERATION_SYSTEM_PROMPT, &prompt, count, GENERATION_TEMPERATURE)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("exercise generation call failed: {err}");
                return Vec::new();
            }
        };

        let related: Vec<String> = learning_points
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        let mut exercises = Vec::new();
        for choice in response.choices {
            match serde_json::from_str::<ExerciseReply>(&choice.message.content) {
                Ok(reply) => exercises.push(Exercise {
                    question: reply.question,
                    expected_answer: Some(reply.expected_answer),
                    explanation: Some(reply.explanation),
                    difficulty_level: Some(difficulty),
                    exercise_type: Some(exercise_type),
                    related_learning_points: related.clone(),
                }),
                Err(err) => {
                    tracing::warn!(
                        content = choice.message.content,
                        "dropping completion that failed to parse: {err}"
                    );
                }
            }
        }
        exercises
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn grade_answer(
        &self,
        problem: &str,
        student_answer: &str,
        expected_answer: Option<&str>,
        metadata: Option<&Metadata>,
    ) -> GradingResult {
        let prompt = grading_prompt(problem, student_answer, expected_answer, metadata);
        let response = match self
            .call_chat(GRADING_SYSTEM_PROMPT, &prompt, 1, GRADING_TEMPERATURE)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("grading call failed: {err}");
                return GradingResult::failure(
                    format!("Failed to grade answer: {err}"),
                    err.to_string(),
                );
            }
        };

        let content = response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default();

        match parse_grade_reply(content) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(content, "failed to parse grading reply: {err}");
                GradingResult::failure(GRADING_PARSE_FAILURE_FEEDBACK, err)
            }
        }
    }
}
