//! Retained document model for the survey
//!
//! The navigator builds this tree once per question sequence and afterwards
//! only flips the style-state flags (`active`, `hidden`, `open`). The
//! renderer in [`crate::ui`] paints whatever the flags say.

use crate::survey::{ElementNode, QuestionDescriptor};

/// Heading shown at the top of the section menu
pub const MENU_HEADING: &str = "Survey Sections";

/// One full-viewport panel for a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelNode {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub background_image: String,
    pub input: ElementNode,
    /// Active panels have their content revealed
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonNode {
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub index: usize,
    pub title: String,
    pub active: bool,
}

/// The slide-out section menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub heading: String,
    pub items: Vec<MenuItem>,
    pub open: bool,
}

/// Everything the navigator renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyDocument {
    pub panels: Vec<PanelNode>,
    pub up_button: ButtonNode,
    pub down_button: ButtonNode,
    pub menu_button: ButtonNode,
    pub menu: MenuNode,
}

impl SurveyDocument {
    /// Build the document for a question sequence
    ///
    /// The result depends only on `questions`, so building twice from the
    /// same sequence yields equal documents.
    pub fn build(questions: &[QuestionDescriptor]) -> Self {
        let panels = questions
            .iter()
            .enumerate()
            .map(|(index, question)| PanelNode {
                index,
                title: question.display_title().to_string(),
                description: question.display_description().to_string(),
                background_image: question.display_background().to_string(),
                input: question.input_element(),
                active: false,
            })
            .collect();

        let items = questions
            .iter()
            .enumerate()
            .map(|(index, question)| MenuItem {
                index,
                title: question.display_title().to_string(),
                active: false,
            })
            .collect();

        SurveyDocument {
            panels,
            up_button: ButtonNode { hidden: true },
            down_button: ButtonNode { hidden: false },
            menu_button: ButtonNode { hidden: false },
            menu: MenuNode {
                heading: MENU_HEADING.to_string(),
                items,
                open: false,
            },
        }
    }

    /// Indices of panels currently marked active
    pub fn active_panels(&self) -> Vec<usize> {
        self.panels
            .iter()
            .filter(|p| p.active)
            .map(|p| p.index)
            .collect()
    }

    /// Indices of menu entries currently highlighted
    pub fn active_menu_items(&self) -> Vec<usize> {
        self.menu
            .items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.index)
            .collect()
    }
}
