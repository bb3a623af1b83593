//! Drops merged cut regions shorter than `minCutDurationSec`. Ordering is
//! preserved.

use crate::config::PlannerConfig;
use crate::cut_region::CutRegion;

pub fn filter_short_cuts(regions: Vec<CutRegion>, config: &PlannerConfig) -> Vec<CutRegion> {
    regions
        .into_iter()
        .filter(|r| r.duration() >= config.min_cut_duration_sec)
        .collect()
}
