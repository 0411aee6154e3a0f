//! Declarative disclosure configuration.
//!
//! One table of typed descriptors drives the whole mount pass. Descriptors
//! are mounted in table order, so reveal groups listed before an accordion
//! over the same section get their control appended before the section is
//! wrapped.
//!
//! The table serializes as camelCase JSON:
//!
//! ```json
//! {
//!   "descriptors": [
//!     { "kind": "reveal", "containerId": "evidence-section", "itemClass": "evidence-cards", "initialVisible": 3 },
//!     { "kind": "accordion", "sectionId": "evidence-section", "title": "…", "icon": "🔬" },
//!     { "kind": "faq" }
//!   ]
//! }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::FAQ_QUESTION_CLASS;
use crate::effect::ControlLabel;
use crate::error::DisclosureError;

/// Partial-reveal list: items with `item_class` under `container_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    pub container_id: String,
    pub item_class: String,
    pub initial_visible: usize,
}

/// Accordion over the section with id `section_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionConfig {
    pub section_id: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub default_open: bool,
}

/// FAQ exclusive accordion over every element with `question_class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqConfig {
    #[serde(default = "default_question_class")]
    pub question_class: String,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self { question_class: default_question_class() }
    }
}

fn default_question_class() -> String {
    FAQ_QUESTION_CLASS.to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Descriptor {
    Reveal(RevealConfig),
    Accordion(AccordionConfig),
    Faq(FaqConfig),
}

impl Descriptor {
    /// The id or class the descriptor targets, for log lines.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Reveal(reveal) => &reveal.container_id,
            Self::Accordion(accordion) => &accordion.section_id,
            Self::Faq(faq) => &faq.question_class,
        }
    }
}

/// User-visible strings. `reveal_more` substitutes `{count}` with the hidden count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    pub reveal_more: String,
    pub collapse: String,
    pub accordion_toggle: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            reveal_more: "もっと見る（{count}件）".to_owned(),
            collapse: "閉じる".to_owned(),
            accordion_toggle: "セクションを開く・閉じる".to_owned(),
        }
    }
}

impl Labels {
    #[must_use]
    pub fn render(&self, label: ControlLabel) -> String {
        match label {
            ControlLabel::RevealMore { hidden } => self.reveal_more.replace("{count}", &hidden.to_string()),
            ControlLabel::Collapse => self.collapse.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureConfig {
    #[serde(default)]
    pub descriptors: Vec<Descriptor>,
    #[serde(default)]
    pub labels: Labels,
}

impl DisclosureConfig {
    /// Parse a JSON table.
    ///
    /// # Errors
    ///
    /// Returns [`DisclosureError::Config`] when the JSON is malformed or a
    /// descriptor is missing a required field.
    pub fn from_json(raw: &str) -> Result<Self, DisclosureError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The site's table: four long sections, each partially revealed and
    /// wrapped in a closed accordion, plus the FAQ.
    #[must_use]
    pub fn site() -> Self {
        let reveal = |container_id: &str, item_class: &str, initial_visible: usize| {
            Descriptor::Reveal(RevealConfig {
                container_id: container_id.to_owned(),
                item_class: item_class.to_owned(),
                initial_visible,
            })
        };
        let accordion = |section_id: &str, title: &str, icon: &str| {
            Descriptor::Accordion(AccordionConfig {
                section_id: section_id.to_owned(),
                title: title.to_owned(),
                icon: icon.to_owned(),
                default_open: false,
            })
        };

        Self {
            descriptors: vec![
                reveal("evidence-section", "evidence-cards", 3),
                reveal("theory-section", "theory-cards", 2),
                reveal("expert-section", "expert-quotes", 2),
                reveal("media-section", "timeline-items", 2),
                accordion("evidence-section", "エビデンスに基づく支援", "🔬"),
                accordion("theory-section", "競争優位性と理論的基盤", "💎"),
                accordion("expert-section", "専門性と信頼性", "🎓"),
                accordion("media-section", "メディア掲載・社会的認知", "📰"),
                Descriptor::Faq(FaqConfig::default()),
            ],
            labels: Labels::default(),
        }
    }
}
