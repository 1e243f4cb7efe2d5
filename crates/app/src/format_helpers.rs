//! Shared formatting utilities for the UI layer.

use shared_types::{major_label, Score};

/// Placeholder for values the backend left out.
pub const EMPTY: &str = "-";

/// The text, or [`EMPTY`] when missing or blank.
pub fn text_or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| EMPTY.to_string())
}

/// A score as the backend sent it, or [`EMPTY`].
pub fn score_text(score: Option<&Score>) -> String {
    score
        .map(Score::to_string)
        .unwrap_or_else(|| EMPTY.to_string())
}

/// Human label of a stored major value.
pub fn major_text(major: Option<&str>) -> String {
    text_or_dash(major.map(major_label))
}

/// `"1 credit"`, `"3 credits"`.
pub fn credits_label(credits: Option<u32>) -> String {
    match credits {
        Some(1) => "1 credit".to_string(),
        Some(n) => format!("{n} credits"),
        None => EMPTY.to_string(),
    }
}

/// Whole-number percentage, e.g. a chance of rain.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}
