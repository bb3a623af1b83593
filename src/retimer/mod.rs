//! Subtitle re-timer: maps transcript cues onto the post-edit timeline
//! produced by collapsing a cut plan's `cut` regions.

pub mod cues;
pub mod srt;
pub mod vtt;

use crate::config::SubtitleConfig;
use crate::error::{CoreError, CoreResult};
use crate::plan::{CutPlan, PlanEntryType, SCHEMA_VERSION};
use crate::time::{frame_duration, snap_to_frame};
use crate::transcript::Transcript;

pub use cues::SubtitleCue;
use cues::normalize_whitespace;

struct KeepRegion {
    start: f64,
    end: f64,
    offset: f64,
}

/// Re-times a transcript onto the post-edit timeline described by `plan`.
///
/// Returns cues sorted by `start` with 1-based indices: monotonic,
/// non-overlapping, bounded by `[0, final_duration_sec]`, and
/// frame-accurate within `subtitle_config.target_fps`.
pub fn retime_subtitles(
    transcript: &Transcript,
    plan: &CutPlan,
    final_duration_sec: f64,
    subtitle_config: &SubtitleConfig,
) -> CoreResult<Vec<SubtitleCue>> {
    if plan.schema_version != SCHEMA_VERSION {
        return Err(CoreError::schema_version_unsupported(
            SCHEMA_VERSION,
            plan.schema_version.clone(),
        ));
    }

    let keep_regions = extract_keep_regions(plan)?;

    let keep_duration_sum: f64 = keep_regions.iter().map(|k| k.end - k.start).sum();
    let fps = subtitle_config.target_fps;
    let tolerance = 2.0 * frame_duration(fps);
    if (final_duration_sec - keep_duration_sum).abs() > tolerance {
        return Err(CoreError::timing_mismatch(keep_duration_sum, final_duration_sec));
    }

    let mut raw_cues: Vec<(f64, f64, f64, f64, String)> = Vec::new();

    for segment in &transcript.segments {
        let text = normalize_whitespace(&segment.text);
        for keep in keep_regions.iter() {
            let overlaps = segment.start < keep.end && segment.end > keep.start;
            if !overlaps {
                continue;
            }

            let cs = segment.start.max(keep.start);
            let ce = segment.end.min(keep.end);

            let rs_raw = cs - keep.start + keep.offset;
            let re_raw = ce - keep.start + keep.offset;

            let rs = snap_to_frame(rs_raw, fps);
            let mut re = snap_to_frame(re_raw, fps);

            if re > final_duration_sec {
                re = final_duration_sec;
            }
            if rs >= final_duration_sec {
                continue;
            }
            if rs >= re {
                continue;
            }

            raw_cues.push((rs, re, rs_raw, re_raw, text.clone()));
        }
    }

    for (idx, (rs, re, rs_raw, re_raw, _)) in raw_cues.iter().enumerate() {
        if (rs - rs_raw).abs() > frame_duration(fps) + 1e-9 {
            return Err(CoreError::frame_accuracy(idx, *rs_raw, *rs));
        }
        if (re - re_raw).abs() > frame_duration(fps) + 1e-9 {
            return Err(CoreError::frame_accuracy(idx, *re_raw, *re));
        }
    }

    raw_cues.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    for window in raw_cues.windows(2) {
        let (_, end, ..) = window[0];
        let (next_start, ..) = window[1];
        if end > next_start {
            return Err(CoreError::frame_accuracy(0, next_start, end));
        }
    }

    let cues = raw_cues
        .into_iter()
        .enumerate()
        .map(|(i, (start, end, _, _, text))| SubtitleCue {
            index: i + 1,
            start,
            end,
            text,
        })
        .collect();

    Ok(cues)
}

fn extract_keep_regions(plan: &CutPlan) -> CoreResult<Vec<KeepRegion>> {
    let mut regions = Vec::new();
    let mut offset = 0.0;

    for entry in &plan.cuts {
        if entry.entry_type != PlanEntryType::Keep {
            continue;
        }
        let start = entry
            .start_sec()
            .ok_or_else(|| CoreError::invalid_plan("keep entry has unparsable start"))?;
        let end = entry
            .end_sec()
            .ok_or_else(|| CoreError::invalid_plan("keep entry has unparsable end"))?;

        regions.push(KeepRegion { start, end, offset });
        offset += end - start;
    }

    if regions.is_empty() {
        return Err(CoreError::invalid_plan("plan has no keep regions"));
    }

    Ok(regions)
}
