//! Planner and subtitle configuration.
//!
//! `PlannerConfig` is the single immutable value that seeds both the cut
//! planner (CP) and, together with `SubtitleConfig`, the subtitle re-timer
//! (SR). Every field here is echoed verbatim into `metadata.parameters` on
//! the emitted plan (see `plan::PlanEmitter`), so downstream reviewers can
//! reproduce a run exactly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default filler vocabulary, lowercase and normalized.
pub fn default_filler_words() -> BTreeSet<String> {
    [
        "um", "uh", "like", "so", "actually", "well", "basically", "literally",
        "right", "okay", "yeah", "hmm",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Configuration shared by the silence detector, filler detector, merger,
/// filter, and segment-duration shaper.
///
/// # Examples
///
/// ```
/// use cutplan_core::config::PlannerConfig;
///
/// let config = PlannerConfig {
///     min_pause_ms: 2000,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Minimum inter-segment gap, in milliseconds, that becomes a silence
    /// cut candidate.
    pub min_pause_ms: u64,
    /// Lowercase filler vocabulary.
    pub filler_words: BTreeSet<String>,
    /// Padding, in seconds, added before and after a detected filler word.
    pub filler_buffer_sec: f64,
    /// Minimum filler-cut duration, in seconds, applied during detection.
    pub min_filler_cut_sec: f64,
    /// Drop merged cuts shorter than this, in seconds.
    pub min_cut_duration_sec: f64,
    /// Minimum acceptable kept-segment length, in seconds.
    pub min_segment_duration_sec: f64,
    /// Maximum acceptable kept-segment length, in seconds.
    pub max_segment_duration_sec: f64,
    /// Maximum inter-region gap, in milliseconds, at which adjacent cut
    /// candidates are merged.
    pub merge_threshold_ms: u64,
    /// Forbids any non-deterministic code path. Reserved for future
    /// extensions; the planner is deterministic regardless of this flag.
    pub deterministic: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_pause_ms: 1500,
            filler_words: default_filler_words(),
            filler_buffer_sec: 1.0,
            min_filler_cut_sec: 0.5,
            min_cut_duration_sec: 0.5,
            min_segment_duration_sec: 3.0,
            max_segment_duration_sec: 300.0,
            merge_threshold_ms: 500,
            deterministic: true,
        }
    }
}

impl PlannerConfig {
    /// Rejects configurations whose fields cannot produce a consistent plan.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min_segment_duration_sec > self.max_segment_duration_sec {
            return Err(CoreError::planning_failed(format!(
                "minSegmentDurationSec ({}) must be <= maxSegmentDurationSec ({})",
                self.min_segment_duration_sec, self.max_segment_duration_sec
            )));
        }
        if self.min_segment_duration_sec < 0.0 || self.max_segment_duration_sec <= 0.0 {
            return Err(CoreError::planning_failed(
                "segment duration bounds must be positive".to_string(),
            ));
        }
        if self.filler_buffer_sec < 0.0 || self.min_filler_cut_sec < 0.0 {
            return Err(CoreError::planning_failed(
                "filler timing parameters must be non-negative".to_string(),
            ));
        }
        if self.min_cut_duration_sec < 0.0 {
            return Err(CoreError::planning_failed(
                "minCutDurationSec must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration specific to the subtitle re-timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleConfig {
    /// Frame grid used to snap cue boundaries.
    pub target_fps: u32,
    /// Greedy word-wrap width for SRT/VTT text lines.
    pub srt_max_line_chars: usize,
    /// Maximum number of wrapped lines per cue; overflow lines are dropped.
    pub srt_max_lines: usize,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            srt_max_line_chars: 42,
            srt_max_lines: 2,
        }
    }
}

impl SubtitleConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target_fps == 0 {
            return Err(CoreError::planning_failed(
                "targetFps must be > 0".to_string(),
            ));
        }
        if self.srt_max_line_chars == 0 || self.srt_max_lines == 0 {
            return Err(CoreError::planning_failed(
                "srtMaxLineChars and srtMaxLines must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
