//! A deterministic, rule-based engine that turns a timed speech transcript
//! into an ordered, non-overlapping timeline of `keep`/`cut` regions (a
//! "cut plan"), and re-times subtitle cues onto the resulting post-edit
//! timeline.
//!
//! This crate is pure with respect to `(transcript, config) -> plan` and
//! `(transcript, plan, final_duration_sec, fps) -> cues`; it owns no
//! persistent state and performs no I/O. A host application is expected to
//! install its own `tracing` subscriber — this crate only emits spans and
//! events, it never initializes one itself.

pub mod config;
pub mod cut_region;
pub mod detectors;
pub mod error;
pub mod filter;
pub mod merger;
pub mod plan;
pub mod planner;
pub mod retimer;
pub mod time;
pub mod transcript;

use std::time::Instant;

use config::{PlannerConfig, SubtitleConfig};
use error::CoreResult;
use plan::{CutPlan, PlanEmitter};
use retimer::SubtitleCue;
use transcript::Transcript;

/// Runs the full cut-planning pipeline: detect silences and fillers, merge
/// and filter candidate cut regions, interleave and shape the timeline, and
/// emit the final plan.
///
/// `transcript` is validated up front; a structurally invalid transcript
/// short-circuits with [`error::CoreError::InvalidTranscript`] before any
/// detector runs.
pub fn plan_cuts(transcript: &Transcript, config: &PlannerConfig) -> CoreResult<CutPlan> {
    transcript.validate()?;
    config.validate()?;

    let start = Instant::now();

    let end_t = transcript
        .end_t()
        .expect("validate() guarantees a non-empty transcript");

    tracing::info!(segments = transcript.segments.len(), "planning cuts");

    let silences = detectors::silence::detect_silences(transcript, config);
    let fillers = detectors::filler::detect_fillers(transcript, config);
    tracing::debug!(
        silence_candidates = silences.len(),
        filler_candidates = fillers.len(),
        "detected candidate cut regions"
    );

    let mut candidates = silences;
    candidates.extend(fillers);

    let merged = merger::merge_regions(candidates, config);
    let filtered = filter::filter_short_cuts(merged, config);
    tracing::debug!(merged_cuts = filtered.len(), "merged and filtered cut regions");

    let interleaved = planner::interleave(&filtered, end_t);
    let shaped = planner::shape_segment_durations(interleaved, transcript, config);

    let processing_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        entries = shaped.len(),
        processing_time_ms,
        "cut plan ready"
    );

    Ok(PlanEmitter::emit(&shaped, config, processing_time_ms))
}

/// Runs the subtitle re-timer end to end: remaps transcript cues onto the
/// post-edit timeline described by `plan`, then renders both SRT and VTT
/// byte streams from the resulting cues.
///
/// This is the one-call equivalent of the §2 data-flow arrow
/// `transcript + cut_plan + render metadata -> SubtitleRetimer -> SRT + VTT`;
/// callers that only need the cues (e.g. to re-render a third subtitle
/// format) can call [`retimer::retime_subtitles`] directly instead.
pub fn retime_and_emit(
    transcript: &Transcript,
    plan: &CutPlan,
    final_duration_sec: f64,
    subtitle_config: &SubtitleConfig,
) -> CoreResult<(Vec<SubtitleCue>, String, String)> {
    let cues = retimer::retime_subtitles(transcript, plan, final_duration_sec, subtitle_config)?;
    let srt = retimer::srt::emit_srt(&cues, subtitle_config);
    let vtt = retimer::vtt::emit_vtt(&cues, subtitle_config);
    Ok((cues, srt, vtt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TranscriptSegment;

    fn segment(start: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: String::new(),
            words: None,
            confidence: None,
        }
    }

    #[test]
    fn rejects_empty_transcript_before_detectors_run() {
        let transcript = Transcript {
            segments: vec![],
            language: None,
        };
        let config = PlannerConfig::default();

        assert!(plan_cuts(&transcript, &config).is_err());
    }

    #[test]
    fn covers_whole_timeline_with_silence_only_plan() {
        // Four segments with silence-only gaps between them.
        let transcript = Transcript {
            segments: vec![
                segment(0.0, 5.5),
                segment(7.0, 12.0),
                segment(14.0, 18.5),
                segment(20.0, 25.0),
            ],
            language: None,
        };
        let config = PlannerConfig::default();

        let plan = plan_cuts(&transcript, &config).unwrap();

        assert_eq!(plan.cuts.len(), 7);
        assert_eq!(plan.cuts[0].start, "0.00");
        assert_eq!(plan.cuts.last().unwrap().end, "25.00");

        // Entries are contiguous: no gaps, no overlaps.
        for window in plan.cuts.windows(2) {
            assert_eq!(window[0].end, window[1].start);
        }
    }

    #[test]
    fn is_deterministic_across_runs() {
        let transcript = Transcript {
            segments: vec![segment(0.0, 5.0), segment(7.0, 20.0)],
            language: None,
        };
        let config = PlannerConfig::default();

        let first = plan_cuts(&transcript, &config).unwrap();
        let second = plan_cuts(&transcript, &config).unwrap();

        assert_eq!(first.cuts, second.cuts);
        assert_eq!(
            serde_json::to_value(&first.metadata.parameters).unwrap(),
            serde_json::to_value(&second.metadata.parameters).unwrap()
        );
    }

    #[test]
    fn retime_and_emit_produces_consistent_cues_and_byte_streams() {
        let transcript = Transcript {
            segments: vec![
                TranscriptSegment {
                    start: 0.0,
                    end: 5.0,
                    text: "hello there friend".to_string(),
                    words: None,
                    confidence: None,
                },
                segment(7.0, 10.0),
            ],
            language: None,
        };
        let config = PlannerConfig::default();
        let plan = plan_cuts(&transcript, &config).unwrap();
        let final_duration_sec: f64 = plan
            .cuts
            .iter()
            .filter(|e| e.entry_type == plan::PlanEntryType::Keep)
            .map(|e| e.end_sec().unwrap() - e.start_sec().unwrap())
            .sum();
        let subtitle_config = crate::config::SubtitleConfig::default();

        let (cues, srt, vtt) =
            retime_and_emit(&transcript, &plan, final_duration_sec, &subtitle_config).unwrap();

        assert!(!cues.is_empty());
        assert!(srt.contains(" --> "));
        assert!(vtt.starts_with("WEBVTT\n\n"));
    }
}
