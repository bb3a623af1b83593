//! Combines overlapping/adjacent candidate cut regions while preserving
//! provenance. A classic "sort, then single-pass coalesce" sweep, not a
//! graph.

use crate::config::PlannerConfig;
use crate::cut_region::CutRegion;

/// Merges a combined list of silence and filler candidates into a sorted,
/// non-overlapping list.
///
/// Sweep ordering: primary key `start` ascending; candidates that tie within
/// 0.01s break ties filler-first, so filler provenance is never silently
/// absorbed by a co-starting silence candidate.
pub fn merge_regions(mut candidates: Vec<CutRegion>, config: &PlannerConfig) -> Vec<CutRegion> {
    if candidates.is_empty() {
        return candidates;
    }

    candidates.sort_by(|a, b| {
        if (a.start - b.start).abs() <= 0.01 {
            // filler-first tie-break
            match (a.is_filler, b.is_filler) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.start.partial_cmp(&b.start).unwrap(),
            }
        } else {
            a.start.partial_cmp(&b.start).unwrap()
        }
    });

    let threshold_sec = config.merge_threshold_ms as f64 / 1000.0;

    let mut merged: Vec<CutRegion> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match merged.last_mut() {
            Some(last) if (candidate.start - last.end) <= threshold_sec => {
                *last = merge_pair(last, &candidate);
            }
            _ => merged.push(candidate),
        }
    }

    merged
}

fn merge_pair(a: &CutRegion, b: &CutRegion) -> CutRegion {
    CutRegion::new(
        a.start.min(b.start),
        a.end.max(b.end),
        format!("{}+{}", a.reason, b.reason),
        a.is_filler || b.is_filler,
    )
}
