//! A curriculum topic: prerequisites plus an ordered list of learning points.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::learning_point::LearningPoint;

/// A curriculum topic, identified by name.
///
/// Prerequisites and learning points are both tracked by name.
/// Prerequisites may name topics that do not exist yet; resolution happens
/// at the [`Curriculum`](crate::curriculum::Curriculum) level. The learning
/// point list preserves insertion order and rejects duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    name: String,
    description: String,
    prerequisites: HashSet<String>,
    learning_points: Vec<String>,
}

impl Topic {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            prerequisites: HashSet::new(),
            learning_points: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Add a prerequisite topic name. Idempotent, never fails.
    pub fn add_prerequisite(&mut self, prerequisite: &str) {
        self.prerequisites.insert(prerequisite.to_string());
    }

    /// Remove a prerequisite topic name. No-op if absent.
    pub fn remove_prerequisite(&mut self, prerequisite: &str) {
        self.prerequisites.remove(prerequisite);
    }

    /// Attach a learning point to this topic.
    ///
    /// Appends the point's name unless it is already listed, and records
    /// this topic in the point's back-reference set so both sides agree.
    pub fn add_learning_point(&mut self, learning_point: &mut LearningPoint) {
        if !self.contains(learning_point) {
            self.learning_points.push(learning_point.name().to_string());
            learning_point.add_topic(&self.name);
        }
    }

    /// Detach a learning point from this topic.
    ///
    /// The back-reference is cleared even when the point was never listed
    /// here, so a stale back-reference cannot survive a removal call.
    pub fn remove_learning_point(&mut self, learning_point: &mut LearningPoint) {
        self.learning_points
            .retain(|name| name != learning_point.name());
        learning_point.remove_topic(&self.name);
    }

    pub fn contains(&self, learning_point: &LearningPoint) -> bool {
        self.learning_points
            .iter()
            .any(|name| name == learning_point.name())
    }

    /// Prerequisite topic names, as a defensive copy.
    pub fn prerequisites(&self) -> HashSet<String> {
        self.prerequisites.clone()
    }

    /// Learning point names in insertion order, as a defensive copy.
    pub fn learning_points(&self) -> Vec<String> {
        self.learning_points.clone()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Topic(name='{}', prerequisites={:?}, learning_points={})",
            self.name,
            self.prerequisites,
            self.learning_points.len()
        )
    }
}
