//! Timeline assembly and segment-duration shaping.
//!
//! Two explicit passes, each a simple iterative sweep with indices rather
//! than a recursive or graph-based formulation: interleave (Step A) builds
//! the initial `keep`/`cut` cover of `[0, endT]`, then duration shaping
//! (Step B) enforces min/max keep length.

use crate::config::PlannerConfig;
use crate::cut_region::CutRegion;
use crate::time::format_plan_seconds;
use crate::transcript::Transcript;

const NATURAL_SPLIT_GAP_SEC: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind {
    Keep,
    Cut,
}

/// A single entry on the shaped timeline, still in `f64` seconds. Converted
/// to the externally visible `PlanEntry` (with `%.2f`-formatted strings) by
/// `plan::PlanEmitter`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub start: f64,
    pub end: f64,
    pub kind: EntryKind,
    pub reason: String,
    pub confidence: f64,
}

impl TimelineEntry {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Step A: interleaves filtered cut regions with `keep` entries to cover
/// `[0, end_t]` exactly. If `cuts` is empty, a single keep spans the whole
/// timeline.
pub fn interleave(cuts: &[CutRegion], end_t: f64) -> Vec<TimelineEntry> {
    let mut out = Vec::with_capacity(cuts.len() * 2 + 1);
    let mut cursor = 0.0;

    for cut in cuts {
        if cut.start > cursor {
            out.push(keep(cursor, cut.start, "content"));
        }
        out.push(TimelineEntry {
            start: cut.start,
            end: cut.end,
            kind: EntryKind::Cut,
            reason: cut.reason.clone(),
            confidence: 1.0,
        });
        cursor = cut.end;
    }

    if cursor < end_t {
        out.push(keep(cursor, end_t, "content"));
    }

    out
}

fn keep(start: f64, end: f64, reason: &str) -> TimelineEntry {
    TimelineEntry {
        start,
        end,
        kind: EntryKind::Keep,
        reason: reason.to_string(),
        confidence: 1.0,
    }
}

/// Step B: enforces `minSegmentDurationSec`/`maxSegmentDurationSec` on every
/// `keep` entry, splitting over-long keeps at natural pauses (or equal
/// intervals) and merging/demoting short keeps.
pub fn shape_segment_durations(
    input: Vec<TimelineEntry>,
    transcript: &Transcript,
    config: &PlannerConfig,
) -> Vec<TimelineEntry> {
    let mut output: Vec<TimelineEntry> = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let entry = input[i].clone();

        if entry.kind == EntryKind::Cut {
            output.push(entry);
            i += 1;
            continue;
        }

        let duration = entry.duration();

        if duration < config.min_segment_duration_sec {
            if let Some(last) = output.last_mut() {
                if last.kind == EntryKind::Keep {
                    last.end = entry.end;
                    last.reason = if last.reason == "content" {
                        "content+merged".to_string()
                    } else {
                        last.reason.clone()
                    };
                    i += 1;
                    continue;
                }
            }

            if i + 1 < input.len() && input[i + 1].kind == EntryKind::Keep {
                let mut extended = input[i + 1].clone();
                extended.start = entry.start;
                output.push(extended);
                i += 2;
                continue;
            }

            output.push(TimelineEntry {
                start: entry.start,
                end: entry.end,
                kind: EntryKind::Cut,
                reason: format!("too_short_{}s", format_plan_seconds(duration)),
                confidence: 1.0,
            });
            i += 1;
            continue;
        }

        if duration > config.max_segment_duration_sec {
            output.extend(split_long_keep(&entry, transcript, config));
            i += 1;
            continue;
        }

        output.push(entry);
        i += 1;
    }

    output
}

fn split_long_keep(
    entry: &TimelineEntry,
    transcript: &Transcript,
    config: &PlannerConfig,
) -> Vec<TimelineEntry> {
    let mut boundaries = natural_split_points(entry.start, entry.end, transcript);

    if boundaries.is_empty() {
        let n = (entry.duration() / config.max_segment_duration_sec).ceil() as usize;
        let n = n.max(1);
        let step = entry.duration() / n as f64;
        for k in 1..n {
            boundaries.push(entry.start + step * k as f64);
        }
    }

    boundaries.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut points = Vec::with_capacity(boundaries.len() + 2);
    points.push(entry.start);
    points.extend(boundaries);
    points.push(entry.end);

    points
        .windows(2)
        .map(|w| TimelineEntry {
            start: w[0],
            end: w[1],
            kind: EntryKind::Keep,
            reason: entry.reason.clone(),
            confidence: entry.confidence,
        })
        .collect()
}

fn natural_split_points(keep_start: f64, keep_end: f64, transcript: &Transcript) -> Vec<f64> {
    let mut points = Vec::new();
    for window in transcript.segments.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        let gap_start = a.end;
        let gap_end = b.start;
        if gap_end - gap_start >= NATURAL_SPLIT_GAP_SEC
            && gap_start > keep_start
            && gap_start < keep_end
        {
            points.push(gap_start);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TranscriptSegment;

    fn plain_transcript(end_t: f64) -> Transcript {
        Transcript {
            segments: vec![TranscriptSegment {
                start: 0.0,
                end: end_t,
                text: String::new(),
                words: None,
                confidence: None,
            }],
            language: None,
        }
    }

    #[test]
    fn interleave_covers_whole_timeline_with_no_cuts() {
        let timeline = interleave(&[], 25.0);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].start, 0.0);
        assert_eq!(timeline[0].end, 25.0);
        assert_eq!(timeline[0].kind, EntryKind::Keep);
    }

    #[test]
    fn interleave_builds_s1_scenario() {
        let cuts = vec![
            CutRegion::new(5.5, 7.0, "silence_1500ms", false),
            CutRegion::new(12.0, 14.0, "silence_2000ms", false),
            CutRegion::new(18.5, 20.0, "silence_1500ms", false),
        ];
        let timeline = interleave(&cuts, 25.0);

        assert_eq!(timeline.len(), 7);
        assert_eq!(timeline[0].start, 0.0);
        assert_eq!(timeline[0].end, 5.5);
        assert_eq!(timeline[6].start, 20.0);
        assert_eq!(timeline[6].end, 25.0);
    }

    #[test]
    fn demotes_unmergeable_short_keep() {
        // A keep region [10.0, 11.5] bounded by cuts on both sides, too
        // short to survive and nothing adjacent to merge into.
        let input = vec![
            TimelineEntry {
                start: 0.0,
                end: 10.0,
                kind: EntryKind::Cut,
                reason: "silence_2000ms".to_string(),
                confidence: 1.0,
            },
            keep(10.0, 11.5, "content"),
            TimelineEntry {
                start: 11.5,
                end: 20.0,
                kind: EntryKind::Cut,
                reason: "silence_2000ms".to_string(),
                confidence: 1.0,
            },
        ];
        let config = PlannerConfig {
            min_segment_duration_sec: 3.0,
            ..Default::default()
        };
        let transcript = plain_transcript(20.0);

        let shaped = shape_segment_durations(input, &transcript, &config);

        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].kind, EntryKind::Cut);
        assert_eq!(shaped[0].reason, "too_short_1.50s");
    }

    #[test]
    fn merges_short_keep_into_previous_keep() {
        let input = vec![
            keep(0.0, 5.0, "content"),
            keep(5.0, 5.5, "content"),
        ];
        let config = PlannerConfig {
            min_segment_duration_sec: 3.0,
            ..Default::default()
        };
        let transcript = plain_transcript(5.5);

        let shaped = shape_segment_durations(input, &transcript, &config);

        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].end, 5.5);
        assert_eq!(shaped[0].reason, "content+merged");
    }

    #[test]
    fn extends_following_keep_leftward() {
        let input = vec![
            TimelineEntry {
                start: 0.0,
                end: 5.0,
                kind: EntryKind::Cut,
                reason: "silence_2000ms".to_string(),
                confidence: 1.0,
            },
            keep(5.0, 5.5, "content"),
            keep(5.5, 20.0, "content"),
        ];
        let config = PlannerConfig {
            min_segment_duration_sec: 3.0,
            ..Default::default()
        };
        let transcript = plain_transcript(20.0);

        let shaped = shape_segment_durations(input, &transcript, &config);

        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[1].start, 5.0);
        assert_eq!(shaped[1].end, 20.0);
    }

    #[test]
    fn splits_long_keep_at_natural_pauses() {
        // A 600s keep region splits at the natural pauses 200.0 and 420.0.
        let transcript = Transcript {
            segments: vec![
                TranscriptSegment {
                    start: 0.0,
                    end: 200.0,
                    text: String::new(),
                    words: None,
                    confidence: None,
                },
                TranscriptSegment {
                    start: 200.6,
                    end: 420.0,
                    text: String::new(),
                    words: None,
                    confidence: None,
                },
                TranscriptSegment {
                    start: 420.6,
                    end: 600.0,
                    text: String::new(),
                    words: None,
                    confidence: None,
                },
            ],
            language: None,
        };
        let config = PlannerConfig {
            max_segment_duration_sec: 300.0,
            ..Default::default()
        };

        let entry = keep(0.0, 600.0, "content");
        let splits = split_long_keep(&entry, &transcript, &config);

        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].start, 0.0);
        assert_eq!(splits[0].end, 200.0);
        assert_eq!(splits[1].start, 200.0);
        assert_eq!(splits[1].end, 420.0);
        assert_eq!(splits[2].start, 420.0);
        assert_eq!(splits[2].end, 600.0);
    }

    #[test]
    fn falls_back_to_equal_intervals_without_natural_splits() {
        let transcript = plain_transcript(900.0);
        let config = PlannerConfig {
            max_segment_duration_sec: 300.0,
            ..Default::default()
        };
        let entry = keep(0.0, 900.0, "content");

        let splits = split_long_keep(&entry, &transcript, &config);

        assert_eq!(splits.len(), 3);
        for split in &splits {
            assert!(split.duration() <= 300.0 + 1e-9);
        }
    }

    #[test]
    fn exactly_at_max_duration_is_not_split() {
        let input = vec![keep(0.0, 300.0, "content")];
        let config = PlannerConfig {
            max_segment_duration_sec: 300.0,
            ..Default::default()
        };
        let transcript = plain_transcript(300.0);

        let shaped = shape_segment_durations(input, &transcript, &config);

        assert_eq!(shaped.len(), 1);
    }
}
