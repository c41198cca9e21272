//! Date-reference extraction from free-text utterances.
//!
//! Recognises "today" (`오늘` / `today`) and explicit mentions of the
//! configured month such as `6월 18일`, `6/18`, `6.18` or `6 18`, and
//! normalizes them into a [`DateKey`].

use chrono::Datelike;
use regex::Regex;

use nutrilog_core::{Clock, DateKey};

/// Tokens that mean "the current date". Matched as substrings.
const TODAY_TOKENS: &[&str] = &["오늘", "today"];

/// Extracts a [`DateKey`] from an utterance.
///
/// Compiled once per month and reused across requests.
#[derive(Debug, Clone)]
pub struct DateExtractor {
    month: u32,
    pattern: Regex,
}

impl DateExtractor {
    /// Build an extractor recognising explicit dates in `month`.
    pub fn new(month: u32) -> Self {
        // month, optional separator, optional space, 1-2 day digits, optional "일"
        let pattern = Regex::new(&format!(r"{month}[./월\s]?\s?([0-9]{{1,2}})일?"))
            .expect("Invalid date regex");
        Self { month, pattern }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Extract a date reference, or `None` when the text has none.
    ///
    /// A "today" token takes precedence over any explicit date and reads
    /// `clock`, so the result for such input changes from day to day. All
    /// other input is resolved without touching the clock. Day values are
    /// not range-checked.
    pub fn extract_date(&self, utterance: &str, clock: &dyn Clock) -> Option<DateKey> {
        let text = utterance.trim();

        if mentions_today(text) {
            let today = clock.today();
            return Some(DateKey::new(today.month(), today.day()));
        }

        let caps = self.pattern.captures(text)?;
        let day = caps.get(1)?.as_str().parse::<u32>().ok()?;
        Some(DateKey::new(self.month, day))
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new(6)
    }
}

fn mentions_today(text: &str) -> bool {
    let lower = text.to_lowercase();
    TODAY_TOKENS.iter().any(|token| lower.contains(token))
}
