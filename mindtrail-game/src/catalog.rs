use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which engine plays a given subtopic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    #[default]
    Quiz,
    Sorting,
    Graph,
}

impl GameKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Sorting => "sorting",
            Self::Graph => "graph",
        }
    }

    /// Display label used in the catalog grid.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiz => "Quiz",
            Self::Sorting => "Sorting Lab",
            Self::Graph => "Graph Lab",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playable unit within a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: GameKind,
    #[serde(default = "default_levels")]
    pub levels: u8,
}

const fn default_levels() -> u8 {
    3
}

/// A topic groups related subtopics under one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
}

/// Top-level catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Container for the full catalog of learning games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogData {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogData {
    /// Create an empty catalog (useful for tests and boot state).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            subjects: Vec::new(),
        }
    }

    /// Parse catalog data from its embedded JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a subtopic by its id path.
    #[must_use]
    pub fn find_subtopic(&self, subject: &str, topic: &str, subtopic: &str) -> Option<&Subtopic> {
        self.subjects
            .iter()
            .find(|s| s.id == subject)?
            .topics
            .iter()
            .find(|t| t.id == topic)?
            .subtopics
            .iter()
            .find(|st| st.id == subtopic)
    }

    /// Total number of playable subtopics across the catalog.
    #[must_use]
    pub fn subtopic_count(&self) -> usize {
        self.subjects
            .iter()
            .flat_map(|s| &s.topics)
            .map(|t| t.subtopics.len())
            .sum()
    }

    /// Flatten the catalog into default selections, one per subtopic.
    #[must_use]
    pub fn selections(&self) -> Vec<Selection> {
        let mut out = Vec::new();
        for subject in &self.subjects {
            for topic in &subject.topics {
                for subtopic in &topic.subtopics {
                    out.push(Selection::new(&subject.id, &topic.id, &subtopic.id, 1));
                }
            }
        }
        out
    }
}

/// Descriptor of what the player is currently playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub subject: String,
    pub topic: String,
    pub subtopic: String,
    pub level: u8,
}

impl Selection {
    #[must_use]
    pub fn new(subject: &str, topic: &str, subtopic: &str, level: u8) -> Self {
        Self {
            subject: subject.to_string(),
            topic: topic.to_string(),
            subtopic: subtopic.to_string(),
            level,
        }
    }

    /// Composite key used to deduplicate first-time completions.
    #[must_use]
    pub fn completion_key(&self) -> String {
        format!("{}:{}:{}", self.subject, self.topic, self.subtopic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "subjects": [
            {
                "id": "math",
                "name": "Mathematics",
                "topics": [
                    {
                        "id": "arithmetic",
                        "name": "Arithmetic",
                        "subtopics": [
                            { "id": "times-tables", "name": "Times Tables" },
                            { "id": "merge-sort", "name": "Merge Sort", "kind": "sorting", "levels": 2 }
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_catalog_with_defaults() {
        let catalog = CatalogData::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.subtopic_count(), 2);
        let st = catalog
            .find_subtopic("math", "arithmetic", "times-tables")
            .unwrap();
        assert_eq!(st.kind, GameKind::Quiz);
        assert_eq!(st.levels, 3);
        let st = catalog
            .find_subtopic("math", "arithmetic", "merge-sort")
            .unwrap();
        assert_eq!(st.kind, GameKind::Sorting);
        assert_eq!(st.levels, 2);
    }

    #[test]
    fn selection_key_joins_id_path() {
        let sel = Selection::new("math", "arithmetic", "times-tables", 1);
        assert_eq!(sel.completion_key(), "math:arithmetic:times-tables");
    }

    #[test]
    fn missing_subtopic_lookup_is_none() {
        let catalog = CatalogData::from_json(SAMPLE).unwrap();
        assert!(catalog.find_subtopic("math", "arithmetic", "nope").is_none());
        assert!(catalog.find_subtopic("art", "arithmetic", "times-tables").is_none());
    }

    #[test]
    fn invalid_json_reports_parse_error() {
        let err = CatalogData::from_json("{ nope").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
