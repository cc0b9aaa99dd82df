//! The curriculum aggregate: owns topics and learning points, mediates
//! all cross-references between them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::learning_point::LearningPoint;
use crate::topic::Topic;

/// Root owner of all topics and learning points for a session.
///
/// Both registries use get-or-create semantics: re-adding an existing name
/// returns the existing entity unchanged, never overwrites. Cross-reference
/// operations are silent no-ops when either side does not exist, so callers
/// can wire up a curriculum without caring about insertion order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    topics: HashMap<String, Topic>,
    learning_points: HashMap<String, LearningPoint>,
}

impl Curriculum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic, or return the existing one unchanged (the description
    /// argument is ignored on repeat calls).
    pub fn add_topic(&mut self, name: &str, description: &str) -> &mut Topic {
        self.topics
            .entry(name.to_string())
            .or_insert_with(|| Topic::new(name, description))
    }

    /// Add a learning point, or return the existing one unchanged.
    pub fn add_learning_point(&mut self, name: &str, description: &str) -> &mut LearningPoint {
        self.learning_points
            .entry(name.to_string())
            .or_insert_with(|| LearningPoint::new(name, description))
    }

    /// Mark `prerequisite` as required before `topic`.
    ///
    /// Links only when both names exist as topics; otherwise does nothing.
    /// Cycles are not detected.
    pub fn assign_prerequisite(&mut self, topic: &str, prerequisite: &str) {
        if !self.topics.contains_key(prerequisite) {
            return;
        }
        if let Some(topic) = self.topics.get_mut(topic) {
            topic.add_prerequisite(prerequisite);
        }
    }

    /// Attach a learning point to a topic.
    ///
    /// Links only when both names exist; delegates to
    /// [`Topic::add_learning_point`] so the bidirectional back-reference
    /// invariant holds.
    pub fn assign_learning_point_to_topic(&mut self, learning_point: &str, topic: &str) {
        let Some(point) = self.learning_points.get_mut(learning_point) else {
            return;
        };
        let Some(topic) = self.topics.get_mut(topic) else {
            return;
        };
        topic.add_learning_point(point);
    }

    /// Prerequisite names for a topic; empty set for an unknown topic.
    pub fn get_topic_prerequisites(&self, topic: &str) -> HashSet<String> {
        self.topics
            .get(topic)
            .map(Topic::prerequisites)
            .unwrap_or_default()
    }

    /// Learning points for a topic in insertion order, cloned out of the
    /// registry; empty for an unknown topic.
    pub fn get_topic_learning_points(&self, topic: &str) -> Vec<LearningPoint> {
        let Some(topic) = self.topics.get(topic) else {
            return Vec::new();
        };
        topic
            .learning_points()
            .iter()
            .filter_map(|name| self.learning_points.get(name))
            .cloned()
            .collect()
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.get(name)
    }

    pub fn learning_point(&self, name: &str) -> Option<&LearningPoint> {
        self.learning_points.get(name)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn learning_point_count(&self) -> usize {
        self.learning_points.len()
    }
}

impl fmt::Display for Curriculum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Curriculum(topics={}, learning_points={})",
            self.topics.len(),
            self.learning_points.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_topic_is_get_or_create() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Variables", "Storing data");
        let topic = curriculum.add_topic("Variables", "A different description");

        assert_eq!(topic.description(), "Storing data");
        assert_eq!(curriculum.topic_count(), 1);
    }

    #[test]
    fn add_learning_point_is_get_or_create() {
        let mut curriculum = Curriculum::new();
        curriculum.add_learning_point("scope", "Variable scope");
        let point = curriculum.add_learning_point("scope", "Something else");

        assert_eq!(point.description(), "Variable scope");
        assert_eq!(curriculum.learning_point_count(), 1);
    }

    #[test]
    fn assign_prerequisite_links_existing_topics() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Variables", "");
        curriculum.add_topic("Functions", "");
        curriculum.assign_prerequisite("Functions", "Variables");

        let prereqs = curriculum.get_topic_prerequisites("Functions");
        assert_eq!(prereqs, HashSet::from(["Variables".to_string()]));
    }

    #[test]
    fn assign_prerequisite_ignores_unknown_names() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Functions", "");

        curriculum.assign_prerequisite("Functions", "Ghost");
        curriculum.assign_prerequisite("Ghost", "Functions");

        assert!(curriculum.get_topic_prerequisites("Functions").is_empty());
        assert_eq!(curriculum.topic_count(), 1);
    }

    #[test]
    fn assign_learning_point_links_both_sides() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Functions", "");
        curriculum.add_learning_point("parameters", "Function parameters");
        curriculum.assign_learning_point_to_topic("parameters", "Functions");

        let points = curriculum.get_topic_learning_points("Functions");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name(), "parameters");
        assert!(curriculum
            .learning_point("parameters")
            .is_some_and(|p| p.topics().contains("Functions")));
    }

    #[test]
    fn assign_learning_point_ignores_unknown_names() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Functions", "");

        curriculum.assign_learning_point_to_topic("ghost", "Functions");
        curriculum.assign_learning_point_to_topic("ghost", "AlsoGhost");

        assert!(curriculum.get_topic_learning_points("Functions").is_empty());
    }

    #[test]
    fn queries_on_unknown_topic_return_empty() {
        let curriculum = Curriculum::new();
        assert!(curriculum.get_topic_prerequisites("Unknown").is_empty());
        assert!(curriculum.get_topic_learning_points("Unknown").is_empty());
    }

    #[test]
    fn learning_points_come_back_in_insertion_order() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Functions", "");
        for name in ["third", "first", "second"] {
            curriculum.add_learning_point(name, "");
            curriculum.assign_learning_point_to_topic(name, "Functions");
        }

        let names: Vec<_> = curriculum
            .get_topic_learning_points("Functions")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn display_summarises_counts() {
        let mut curriculum = Curriculum::new();
        curriculum.add_topic("Variables", "");
        curriculum.add_learning_point("scope", "");
        assert_eq!(
            curriculum.to_string(),
            "Curriculum(topics=1, learning_points=1)"
        );
    }
}
