//! Chat-platform skill envelope types.
//!
//! Inbound requests carry the user's text at `userRequest.utterance`.
//! Outbound replies are always a version 2.0 template with a single
//! `simpleText` output.

use serde::{Deserialize, Serialize};

/// Envelope version expected by the chat platform.
pub const SKILL_VERSION: &str = "2.0";

// =============================================================================
// Request
// =============================================================================

/// Inbound skill request. Only the fields nutrilog reads are modelled;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest {
    #[serde(rename = "userRequest")]
    pub user_request: UserRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    /// Kept untyped so a missing or non-string utterance is not a decode
    /// failure.
    #[serde(default)]
    pub utterance: Option<serde_json::Value>,
}

impl UserRequest {
    /// The utterance when it is present and textual.
    pub fn utterance_text(&self) -> Option<&str> {
        self.utterance.as_ref()?.as_str()
    }
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: SkillTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTemplate {
    pub outputs: Vec<SkillOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOutput {
    #[serde(rename = "simpleText")]
    pub simple_text: SimpleText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleText {
    pub text: String,
}

impl SkillResponse {
    /// A reply with one `simpleText` output.
    pub fn simple_text(text: impl Into<String>) -> Self {
        Self {
            version: SKILL_VERSION.to_string(),
            template: SkillTemplate {
                outputs: vec![SkillOutput {
                    simple_text: SimpleText { text: text.into() },
                }],
            },
        }
    }

    /// Text of the first output.
    pub fn text(&self) -> Option<&str> {
        self.template
            .outputs
            .first()
            .map(|o| o.simple_text.text.as_str())
    }
}
