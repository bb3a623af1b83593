//! The subtitle cue model produced by the re-timer.

/// One cue on the post-edit timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    /// 1-based, assigned after sort-by-start.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Collapses internal whitespace runs to a single space and trims the ends;
/// the text itself is otherwise preserved as-is.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
