//! Conversational core for nutrilog.
//!
//! Extracts a date reference from a user utterance and renders the matching
//! nutrition report from the store.

pub mod orchestrator;
pub mod parser;
pub mod response;

pub use orchestrator::{AssistantReply, NutritionAssistant, ReplyKind, DATE_PROMPT_MESSAGE};
pub use parser::DateExtractor;
pub use response::{format_reply, render, FormattedReply, NOT_IN_STORE_MESSAGE};
