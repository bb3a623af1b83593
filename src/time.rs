//! Shared time-formatting and frame-grid utilities.
//!
//! All internal math stays in `f64` for a single pass; rounding only happens
//! at serialization boundaries (plan emission, subtitle timestamp
//! formatting, frame-grid snapping).

/// Formats a duration in seconds as a fixed `%.2f` string, the format used
/// throughout `PlanEntry.start`/`PlanEntry.end`.
pub fn format_plan_seconds(seconds: f64) -> String {
    format!("{:.2}", seconds)
}

/// Re-parses a `%.2f`-formatted plan time back into `f64`.
///
/// Serialized plan times are a lossy projection of the true timeline; callers
/// that need to do further arithmetic on plan entries must go through this
/// function rather than trust accumulated string state.
pub fn parse_plan_seconds(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Snaps a timestamp to the nearest frame boundary on a `target_fps` grid.
pub fn snap_to_frame(seconds: f64, target_fps: u32) -> f64 {
    let fps = target_fps as f64;
    (seconds * fps).round() / fps
}

/// Returns the duration, in seconds, of a single frame at `target_fps`.
pub fn frame_duration(target_fps: u32) -> f64 {
    1.0 / target_fps as f64
}

/// `true` if `value` is within one frame of `reference`.
pub fn within_one_frame(value: f64, reference: f64, target_fps: u32) -> bool {
    (value - reference).abs() <= frame_duration(target_fps) + 1e-9
}

/// Formats seconds as `HH:MM:SS,mmm` (SRT) or `HH:MM:SS.mmm` (VTT).
pub fn format_timestamp(seconds: f64, millis_separator: char) -> String {
    let total = seconds.max(0.0);
    let hours = (total / 3600.0).floor();
    let mins = ((total % 3600.0) / 60.0).floor();
    let secs = (total % 60.0).floor();
    let millis = ((total - total.floor()) * 1000.0).floor();
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours as u64, mins as u64, secs as u64, millis_separator, millis as u64
    )
}
