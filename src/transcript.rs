//! Transcript data model and input validation.
//!
//! Validation is centralized here rather than scattered through the
//! detectors: validate once at the boundary, before any alignment or
//! merging work begins.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single word with optional timing, as produced by a transcription
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    #[serde(alias = "word")]
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Word {
    fn is_finite_and_ordered(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start <= self.end
    }
}

/// One segment of transcribed speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The full transcript handed to the cut planner and subtitle re-timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Transcript {
    /// The end of the full timeline: the last segment's end time.
    ///
    /// Panics are avoided by requiring callers to run [`Transcript::validate`]
    /// first; an empty transcript has no well-defined `end_t`.
    pub fn end_t(&self) -> Option<f64> {
        self.segments.last().map(|s| s.end)
    }

    /// Enforces segment ordering/non-overlap and word-nesting invariants.
    /// Must be called before the transcript is handed to any detector or
    /// the planner.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.segments.is_empty() {
            return Err(CoreError::invalid_transcript(
                "segments must be non-empty",
            ));
        }

        for (i, seg) in self.segments.iter().enumerate() {
            if !(seg.start.is_finite() && seg.end.is_finite()) {
                return Err(CoreError::invalid_transcript(format!(
                    "segment {i} has non-finite start/end"
                )));
            }
            if !(seg.start < seg.end) {
                return Err(CoreError::invalid_transcript(format!(
                    "segment {i} violates start < end ({} >= {})",
                    seg.start, seg.end
                )));
            }

            if let Some(words) = &seg.words {
                if let Some(first) = words.first() {
                    if !(seg.start <= first.start) {
                        return Err(CoreError::invalid_transcript(format!(
                            "segment {i} words start before segment start"
                        )));
                    }
                }
                if let Some(last) = words.last() {
                    if !(last.end <= seg.end) {
                        return Err(CoreError::invalid_transcript(format!(
                            "segment {i} words end after segment end"
                        )));
                    }
                }
                for (j, word) in words.iter().enumerate() {
                    if !word.is_finite_and_ordered() {
                        return Err(CoreError::invalid_transcript(format!(
                            "segment {i} word {j} has invalid timing"
                        )));
                    }
                    if j + 1 < words.len() && word.end > words[j + 1].start {
                        return Err(CoreError::invalid_transcript(format!(
                            "segment {i} words {j} and {} overlap",
                            j + 1
                        )));
                    }
                }
            }

            if i + 1 < self.segments.len() {
                let next = &self.segments[i + 1];
                if !(seg.end <= next.start) {
                    return Err(CoreError::invalid_transcript(format!(
                        "segment {i} overlaps segment {}", i + 1
                    )));
                }
            }
        }

        Ok(())
    }
}
