//! The project record handed to the export pipeline

use crate::{FictionContent, NonfictionContent, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Kind of book being planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ProjectType {
    #[default]
    Fiction,
    Nonfiction,
}

impl ProjectType {
    /// The lowercase tag as stored by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Fiction => "fiction",
            ProjectType::Nonfiction => "nonfiction",
        }
    }
}

impl From<String> for ProjectType {
    /// Anything that is not `nonfiction` is planned with the fiction template.
    fn from(tag: String) -> Self {
        if tag.trim().eq_ignore_ascii_case("nonfiction") {
            ProjectType::Nonfiction
        } else {
            ProjectType::Fiction
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved book planning project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Persistence identifier (opaque to the exporter)
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    /// Target manuscript length in words
    #[serde(default, deserialize_with = "deserialize_word_count")]
    pub word_count_goal: Option<u64>,
    /// Free-form story description
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub fiction: FictionContent,
    #[serde(flatten)]
    pub nonfiction: NonfictionContent,
}

impl Project {
    /// Create an empty project of the given type
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            ..Default::default()
        }
    }

    /// Set the project title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parse a project from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a project from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize back to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWordCount {
    Integer(u64),
    Real(f64),
    Text(String),
}

/// Form inputs submit word counts as numbers or as strings; blank and
/// unparsable values are treated as unset.
fn deserialize_word_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawWordCount>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawWordCount::Integer(n)) => Some(n),
        Some(RawWordCount::Real(n)) if n.is_finite() && n >= 0.0 => Some(n.round() as u64),
        Some(RawWordCount::Real(_)) => None,
        Some(RawWordCount::Text(s)) => {
            let digits: String = s.trim().chars().filter(|c| *c != ',').collect();
            digits.parse().ok()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_tags() {
        assert_eq!(ProjectType::from("nonfiction".to_string()), ProjectType::Nonfiction);
        assert_eq!(ProjectType::from("fiction".to_string()), ProjectType::Fiction);
        assert_eq!(ProjectType::from("poetry".to_string()), ProjectType::Fiction);
        assert_eq!(ProjectType::Nonfiction.to_string(), "nonfiction");
    }

    #[test]
    fn test_parse_fiction_project() {
        let json = r#"{
            "id": "3f1c",
            "title": "The Narrow Road",
            "type": "fiction",
            "genre": "Historical",
            "wordCountGoal": 80000,
            "premise": "A shepherd finds a lost king.",
            "storyStructure": { "openingScene": "Dawn on the hills" }
        }"#;

        let project = Project::from_json(json).unwrap();
        assert_eq!(project.title.as_deref(), Some("The Narrow Road"));
        assert_eq!(project.project_type, ProjectType::Fiction);
        assert_eq!(project.word_count_goal, Some(80000));
        assert_eq!(project.fiction.premise.as_deref(), Some("A shepherd finds a lost king."));
        let structure = project.fiction.story_structure.unwrap();
        assert_eq!(structure.opening_scene.as_deref(), Some("Dawn on the hills"));
        assert!(structure.hooking_moment.is_none());
    }

    #[test]
    fn test_parse_nonfiction_project() {
        let json = r#"{
            "title": "Rooted",
            "type": "nonfiction",
            "kingdomConcept": "Abiding",
            "readerPersona": { "lifeStage": "New parents", "struggle": "" },
            "holySpirit": null
        }"#;

        let project = Project::from_json(json).unwrap();
        assert_eq!(project.project_type, ProjectType::Nonfiction);
        let persona = project.nonfiction.reader_persona.unwrap();
        assert_eq!(persona.life_stage.as_deref(), Some("New parents"));
        assert_eq!(persona.struggle.as_deref(), Some(""));
        assert!(project.nonfiction.holy_spirit.is_none());
    }

    #[test]
    fn test_word_count_from_form_string() {
        let project = Project::from_json(r#"{"type":"fiction","wordCountGoal":"65,000"}"#).unwrap();
        assert_eq!(project.word_count_goal, Some(65000));

        let project = Project::from_json(r#"{"type":"fiction","wordCountGoal":""}"#).unwrap();
        assert_eq!(project.word_count_goal, None);

        let project = Project::from_json(r#"{"type":"fiction","wordCountGoal":null}"#).unwrap();
        assert_eq!(project.word_count_goal, None);
    }

    #[test]
    fn test_missing_type_defaults_to_fiction() {
        let project = Project::from_json("{}").unwrap();
        assert_eq!(project.project_type, ProjectType::Fiction);
        assert!(project.title.is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Project::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");
        let project = Project::new(ProjectType::Nonfiction).with_title("Rooted");
        std::fs::write(&path, project.to_json().unwrap()).unwrap();

        let loaded = Project::load(&path).unwrap();
        assert_eq!(loaded, project);
    }
}
