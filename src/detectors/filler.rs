//! Per-word filler classifier.
//!
//! Timing estimation is a tagged strategy keyed on whether a word carries
//! timing (`TimingSource::WordLevel`) or must be estimated from the
//! segment's overall span (`TimingSource::PositionEstimated`), modeled as a
//! tagged variant rather than a trait object.

use crate::config::PlannerConfig;
use crate::cut_region::CutRegion;
use crate::transcript::{Transcript, TranscriptSegment, Word};

enum TimingSource<'a> {
    WordLevel(&'a [Word]),
    PositionEstimated(Vec<&'a str>),
}

/// Detects filler-word candidates across every segment of the transcript.
/// Output is sorted by `start`.
pub fn detect_fillers(transcript: &Transcript, config: &PlannerConfig) -> Vec<CutRegion> {
    let mut regions = Vec::new();
    for segment in &transcript.segments {
        regions.extend(detect_fillers_in_segment(segment, config));
    }
    regions.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());
    regions
}

fn detect_fillers_in_segment(segment: &TranscriptSegment, config: &PlannerConfig) -> Vec<CutRegion> {
    let source = match &segment.words {
        Some(words) if !words.is_empty() && words_have_finite_timing(words) => {
            TimingSource::WordLevel(words)
        }
        _ => TimingSource::PositionEstimated(segment.text.split_whitespace().collect()),
    };

    match source {
        TimingSource::WordLevel(words) => detect_word_level(segment, words, config),
        TimingSource::PositionEstimated(tokens) => {
            detect_position_estimated(segment, &tokens, config)
        }
    }
}

fn words_have_finite_timing(words: &[Word]) -> bool {
    words
        .iter()
        .all(|w| w.start.is_finite() && w.end.is_finite())
}

fn detect_word_level(
    segment: &TranscriptSegment,
    words: &[Word],
    config: &PlannerConfig,
) -> Vec<CutRegion> {
    let mut regions = Vec::new();

    for (i, word) in words.iter().enumerate() {
        let normalized = normalize_token(&word.text);
        if !config.filler_words.contains(&normalized) {
            continue;
        }

        if normalized == "so" {
            let prev_raw = if i > 0 { Some(words[i - 1].text.as_str()) } else { None };
            let next_gap_ms = words
                .get(i + 1)
                .map(|next| (next.start - word.end) * 1000.0);
            if !is_so_context_filler(i, prev_raw, next_gap_ms) {
                continue;
            }
        }

        let raw_start = (word.start - config.filler_buffer_sec).max(0.0);
        let raw_end = word.end + config.filler_buffer_sec;
        let (start, end) = expand_to_min_duration(raw_start, raw_end, config.min_filler_cut_sec);

        regions.push(CutRegion::new(
            start,
            end,
            format!("filler_word_{normalized}"),
            true,
        ));
    }

    let _ = segment; // segment kept for signature symmetry with the estimated path
    regions
}

fn detect_position_estimated(
    segment: &TranscriptSegment,
    tokens: &[&str],
    config: &PlannerConfig,
) -> Vec<CutRegion> {
    let mut regions = Vec::new();
    let n = tokens.len();
    if n == 0 {
        return regions;
    }

    let span = segment.end - segment.start;

    for (i, raw_token) in tokens.iter().enumerate() {
        let normalized = normalize_token(raw_token);
        if !config.filler_words.contains(&normalized) {
            continue;
        }

        if normalized == "so" {
            let prev_raw = if i > 0 { Some(tokens[i - 1]) } else { None };
            if !is_so_context_filler(i, prev_raw, None) {
                continue;
            }
        }

        let r = i as f64 / n as f64;
        let r_next = (i + 1) as f64 / n as f64;
        let base_start = segment.start + r * span - 0.3;
        let base_end = segment.start + r_next * span + 0.3;

        let buffered_start = (base_start - config.filler_buffer_sec).max(0.0);
        let buffered_end = base_end + config.filler_buffer_sec;

        let (start, end) =
            expand_to_min_duration(buffered_start, buffered_end, config.min_filler_cut_sec);

        regions.push(CutRegion::new(
            start,
            end,
            format!("filler_word_{normalized}"),
            true,
        ));
    }

    regions
}

/// Lowercases and strips everything outside letters, digits, `'`, and `-`,
/// Unicode-aware via `char::is_alphanumeric`.
fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

/// Context rule for the token `so`:
/// - word-index 0 or 1 of the segment -> filler.
/// - gap to next word > 300ms (only known with word-level timing) -> filler.
/// - previous word ends in `.`, `!`, or `?` -> filler.
/// - otherwise -> not a filler.
fn is_so_context_filler(index: usize, prev_raw: Option<&str>, next_gap_ms: Option<f64>) -> bool {
    if index == 0 || index == 1 {
        return true;
    }
    if let Some(gap) = next_gap_ms {
        if gap > 300.0 {
            return true;
        }
    }
    if let Some(prev) = prev_raw {
        if prev.ends_with('.') || prev.ends_with('!') || prev.ends_with('?') {
            return true;
        }
    }
    false
}

/// Symmetrically expands `[start, end)` until its duration is at least
/// `min_duration`, clamping at zero and pushing any shortfall to `end`.
fn expand_to_min_duration(start: f64, end: f64, min_duration: f64) -> (f64, f64) {
    let duration = end - start;
    if duration >= min_duration {
        return (start, end);
    }
    let deficit = min_duration - duration;
    let mut new_start = start - deficit / 2.0;
    let mut new_end = end + deficit / 2.0;
    if new_start < 0.0 {
        let shortfall = -new_start;
        new_start = 0.0;
        new_end += shortfall;
    }
    (new_start, new_end)
}
