//! Inter-segment gap detector.

use crate::config::PlannerConfig;
use crate::cut_region::CutRegion;
use crate::transcript::Transcript;

/// Emits one `CutRegion` per inter-segment gap at least `min_pause_ms` long.
/// No silence is emitted before the first or after the last segment, and
/// the result is sorted by `start` with no self-overlaps by construction
/// (segments are themselves ordered and non-overlapping).
pub fn detect_silences(transcript: &Transcript, config: &PlannerConfig) -> Vec<CutRegion> {
    let segments = &transcript.segments;
    let mut regions = Vec::new();

    for window in segments.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        let gap_sec = b.start - a.end;
        let gap_ms = gap_sec * 1000.0;

        if gap_ms >= config.min_pause_ms as f64 {
            let tag_ms = gap_ms.round() as i64;
            regions.push(CutRegion::new(
                a.end,
                b.start,
                format!("silence_{tag_ms}ms"),
                false,
            ));
        }
    }

    regions
}
