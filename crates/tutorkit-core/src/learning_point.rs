//! A single teachable concept and its topic back-references.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single teachable concept, identified by name.
///
/// A learning point may belong to several topics at once. It tracks the
/// topics it belongs to by *name*, not by reference, so the curriculum
/// graph stays free of ownership cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPoint {
    name: String,
    description: String,
    topics: HashSet<String>,
}

impl LearningPoint {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            topics: HashSet::new(),
        }
    }

    /// Name, unique within a curriculum.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Record membership in a topic. Idempotent.
    pub fn add_topic(&mut self, topic: &str) {
        self.topics.insert(topic.to_string());
    }

    /// Drop membership in a topic. No-op if the name was never recorded.
    pub fn remove_topic(&mut self, topic: &str) {
        self.topics.remove(topic);
    }

    /// Names of the topics this point belongs to, as a defensive copy.
    pub fn topics(&self) -> HashSet<String> {
        self.topics.clone()
    }
}

impl fmt::Display for LearningPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LearningPoint(name='{}', topics={:?})",
            self.name, self.topics
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_topic() {
        let mut point = LearningPoint::new("variables", "Understanding variables");
        point.add_topic("Basics");
        point.add_topic("Basics");
        assert_eq!(point.topics().len(), 1);

        point.remove_topic("Basics");
        assert!(point.topics().is_empty());
    }

    #[test]
    fn remove_unknown_topic_is_noop() {
        let mut point = LearningPoint::new("variables", "Understanding variables");
        point.remove_topic("Nonexistent");
        assert!(point.topics().is_empty());
    }

    #[test]
    fn topics_returns_a_copy() {
        let mut point = LearningPoint::new("variables", "Understanding variables");
        point.add_topic("Basics");

        let mut copy = point.topics();
        copy.insert("Injected".to_string());

        assert_eq!(point.topics().len(), 1);
        assert!(!point.topics().contains("Injected"));
    }
}
