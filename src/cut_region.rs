//! The internal candidate/merged cut region type shared by the detectors,
//! merger, filter, and planner. Never serialized directly — `PlanEntry`
//! (see `plan.rs`) is the externally visible shape.

/// A half-open `[start, end)` interval slated for removal, carrying
/// provenance in `reason` and a `is_filler` flag used only for the merger's
/// tie-break rule; `is_filler` itself is never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct CutRegion {
    pub start: f64,
    pub end: f64,
    pub reason: String,
    pub is_filler: bool,
}

impl CutRegion {
    pub fn new(start: f64, end: f64, reason: impl Into<String>, is_filler: bool) -> Self {
        Self {
            start,
            end,
            reason: reason.into(),
            is_filler,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// `true` if this region's reason string contains at least one
    /// `filler_word_*` token — used to check that merging preserves filler
    /// provenance independent of the `is_filler` flag.
    pub fn has_filler_provenance(&self) -> bool {
        self.reason
            .split('+')
            .any(|tag| tag.starts_with("filler_word_"))
    }
}
