//! tutorkit-core — Curriculum model, backend traits, and exercise generation.
//!
//! This crate defines the curriculum graph (topics, learning points,
//! prerequisites), the exercise/grading data model, and the backend
//! capability trait that the `tutorkit-providers` crate implements.

pub mod curriculum;
pub mod error;
pub mod generator;
pub mod learning_point;
pub mod model;
pub mod topic;
pub mod traits;
