//! Reply rendering for a day's nutrition report.
//!
//! Pure projection from a store and a date key to display text. Record
//! values are copied verbatim.

use std::fmt::Write;

use nutrilog_core::{DateKey, NutritionRecord, NutritionStore};

/// Reply when the requested date has no record.
pub const NOT_IN_STORE_MESSAGE: &str = "❗ 해당 날짜의 영양소 분석 정보가 없습니다.";

/// Outcome of rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedReply {
    Formatted(String),
    NotInStore,
}

impl FormattedReply {
    /// Text to send back, substituting the fixed "no data" message.
    pub fn into_text(self) -> String {
        match self {
            FormattedReply::Formatted(text) => text,
            FormattedReply::NotInStore => NOT_IN_STORE_MESSAGE.to_string(),
        }
    }
}

/// Render the report for `key`, or [`FormattedReply::NotInStore`].
pub fn render(store: &NutritionStore, key: &DateKey) -> FormattedReply {
    match store.get(key) {
        Some(record) => FormattedReply::Formatted(render_record(key, record)),
        None => FormattedReply::NotInStore,
    }
}

/// Render the report for `key` as display text.
pub fn format_reply(store: &NutritionStore, key: &DateKey) -> String {
    render(store, key).into_text()
}

fn render_record(key: &DateKey, record: &NutritionRecord) -> String {
    let mut out = format!("📅 {}월 {}일 영양소 분석:\n", key.month(), key.day());

    out.push('\n');
    for m in record.macros() {
        let _ = writeln!(out, "🔹 {}: {} ({})", m.label, m.value, m.status);
    }

    out.push('\n');
    let micros = record.micros();
    for (i, m) in micros.iter().enumerate() {
        let _ = write!(out, "🔸 {}: {}", m.label, m.status);
        if i + 1 < micros.len() {
            out.push('\n');
        }
    }

    out
}
