//! Per-utterance pipeline: extract a date, then render the report.

use std::sync::Arc;

use nutrilog_core::{Clock, DateKey, NutritionStore};

use crate::parser::DateExtractor;
use crate::response::{render, FormattedReply};

/// Reply when no date reference could be extracted.
pub const DATE_PROMPT_MESSAGE: &str =
    "분석을 원하는 날짜를 '6월 18일' 또는 '오늘'처럼 입력해주세요.";

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// A stored report was rendered.
    Report,
    /// A date was found but the store has no record for it.
    NotInStore,
    /// No date reference in the utterance.
    DatePrompt,
}

/// Reply text plus what led to it, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub kind: ReplyKind,
    pub date: Option<DateKey>,
    pub text: String,
}

/// Answers nutrition questions against a shared, read-only store.
///
/// Holds no per-request state and can be shared across tasks.
#[derive(Clone)]
pub struct NutritionAssistant {
    store: Arc<NutritionStore>,
    extractor: DateExtractor,
    clock: Arc<dyn Clock>,
}

impl NutritionAssistant {
    pub fn new(store: Arc<NutritionStore>, extractor: DateExtractor, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            extractor,
            clock,
        }
    }

    pub fn store(&self) -> &NutritionStore {
        &self.store
    }

    /// Reply to one utterance.
    pub fn respond(&self, utterance: &str) -> AssistantReply {
        let Some(date) = self.extractor.extract_date(utterance, self.clock.as_ref()) else {
            tracing::debug!("No date reference in utterance");
            return AssistantReply {
                kind: ReplyKind::DatePrompt,
                date: None,
                text: DATE_PROMPT_MESSAGE.to_string(),
            };
        };

        tracing::debug!(date = %date, "Date extracted");
        match render(&self.store, &date) {
            FormattedReply::Formatted(text) => AssistantReply {
                kind: ReplyKind::Report,
                date: Some(date),
                text,
            },
            reply @ FormattedReply::NotInStore => AssistantReply {
                kind: ReplyKind::NotInStore,
                date: Some(date),
                text: reply.into_text(),
            },
        }
    }

    /// Reply when the request carried no usable utterance text.
    pub fn respond_without_utterance(&self) -> AssistantReply {
        AssistantReply {
            kind: ReplyKind::DatePrompt,
            date: None,
            text: DATE_PROMPT_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Debug for NutritionAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NutritionAssistant")
            .field("records", &self.store.len())
            .field("month", &self.extractor.month())
            .finish()
    }
}
