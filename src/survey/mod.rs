//! Question descriptors and the element contract consumed by input components.
//!
//! Descriptors arrive as an ordered JSON array. Every field is optional; missing
//! fields render as placeholders rather than failing the load.

pub mod attributes;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SurveyError;

pub use attributes::{serialize_attribute_value, serialize_attributes, ElementNode};

/// Title shown for a question that does not provide one
pub const UNTITLED_QUESTION: &str = "Untitled Question";

/// Element tag used when a question names no input component
pub const DEFAULT_COMPONENT_TAG: &str = "p";

/// One survey question, as supplied by the questions data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDescriptor {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default, alias = "component")]
    pub component_tag: Option<String>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

impl QuestionDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        QuestionDescriptor {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Title to display, falling back to the placeholder
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_QUESTION)
    }

    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn display_background(&self) -> &str {
        self.background_image.as_deref().unwrap_or("")
    }

    pub fn component_tag(&self) -> &str {
        match self.component_tag.as_deref() {
            Some(tag) if !tag.trim().is_empty() => tag,
            _ => DEFAULT_COMPONENT_TAG,
        }
    }

    /// Build the input element this question forwards its attributes to
    pub fn input_element(&self) -> ElementNode {
        ElementNode::from_attributes(self.component_tag(), self.attributes.as_ref())
    }
}

/// Parse an ordered question sequence from JSON text
pub fn parse_questions(json: &str) -> Result<Vec<QuestionDescriptor>, SurveyError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a questions file
pub fn load_questions(path: &Path) -> Result<Vec<QuestionDescriptor>, SurveyError> {
    let text = fs::read_to_string(path).map_err(|source| SurveyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&text)?;
    tracing::info!(
        path = %path.display(),
        count = questions.len(),
        "loaded survey questions"
    );
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_placeholders() {
        let questions = parse_questions("[{}]").unwrap();
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.display_title(), UNTITLED_QUESTION);
        assert_eq!(q.display_description(), "");
        assert_eq!(q.display_background(), "");
        assert_eq!(q.component_tag(), "p");
    }

    #[test]
    fn test_camel_case_keys_and_component_alias() {
        let json = r#"[
            {"title": "Name", "backgroundImage": "bg.png", "componentTag": "text-input"},
            {"title": "Age", "component": "number-input", "attributes": {"min": 0}}
        ]"#;
        let questions = parse_questions(json).unwrap();
        assert_eq!(questions[0].display_background(), "bg.png");
        assert_eq!(questions[0].component_tag(), "text-input");
        assert_eq!(questions[1].component_tag(), "number-input");
        assert_eq!(
            questions[1].input_element().to_markup(),
            r#"<number-input min="0"></number-input>"#
        );
    }

    #[test]
    fn test_blank_component_tag_falls_back() {
        let q = QuestionDescriptor {
            component_tag: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(q.component_tag(), DEFAULT_COMPONENT_TAG);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            parse_questions("{not json"),
            Err(SurveyError::Questions(_))
        ));
    }
}
