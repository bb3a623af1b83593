//! Cut plan serialization: assembles the externally visible JSON plan
//! document from a shaped timeline.

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::planner::{EntryKind, TimelineEntry};
use crate::time::{format_plan_seconds, parse_plan_seconds};

/// `"keep"` or `"cut"`, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanEntryType {
    Keep,
    Cut,
}

/// One entry of the emitted cut plan. `start`/`end` are `%.2f`-formatted
/// seconds strings — the serialized form is a lossy projection; callers
/// doing further arithmetic should re-parse via [`PlanEntry::start_sec`]
/// and [`PlanEntry::end_sec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub entry_type: PlanEntryType,
    pub reason: String,
    pub confidence: f64,
}

impl PlanEntry {
    pub fn start_sec(&self) -> Option<f64> {
        parse_plan_seconds(&self.start)
    }

    pub fn end_sec(&self) -> Option<f64> {
        parse_plan_seconds(&self.end)
    }

    /// Splits a compound (`+`-joined) reason back into its component tags.
    /// Useful for provenance assertions; a no-op for single-tag reasons.
    pub fn reason_tags(&self) -> Vec<&str> {
        self.reason.split('+').collect()
    }

    fn from_timeline_entry(entry: &TimelineEntry) -> Self {
        Self {
            start: format_plan_seconds(entry.start),
            end: format_plan_seconds(entry.end),
            entry_type: match entry.kind {
                EntryKind::Keep => PlanEntryType::Keep,
                EntryKind::Cut => PlanEntryType::Cut,
            },
            reason: entry.reason.clone(),
            confidence: entry.confidence,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetadata {
    pub processing_time_ms: u64,
    pub parameters: PlannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutPlan {
    pub schema_version: String,
    pub source: String,
    pub output: String,
    pub cuts: Vec<PlanEntry>,
    pub metadata: PlanMetadata,
}

pub const SCHEMA_VERSION: &str = "1.0.0";
pub const DEFAULT_SOURCE: &str = "transcripts/transcript.json";
pub const DEFAULT_OUTPUT: &str = "plan/cut_plan.json";

/// Serializes a shaped timeline into the final `CutPlan` shape. The only
/// field that may vary between otherwise-identical runs is
/// `metadata.processingTimeMs`.
pub struct PlanEmitter;

impl PlanEmitter {
    pub fn emit(
        timeline: &[TimelineEntry],
        config: &PlannerConfig,
        processing_time_ms: u64,
    ) -> CutPlan {
        let cuts = timeline
            .iter()
            .map(PlanEntry::from_timeline_entry)
            .collect();

        CutPlan {
            schema_version: SCHEMA_VERSION.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            cuts,
            metadata: PlanMetadata {
                processing_time_ms,
                parameters: config.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_schema_and_covers_entries() {
        let timeline = vec![
            TimelineEntry {
                start: 0.0,
                end: 5.5,
                kind: EntryKind::Keep,
                reason: "content".to_string(),
                confidence: 1.0,
            },
            TimelineEntry {
                start: 5.5,
                end: 7.0,
                kind: EntryKind::Cut,
                reason: "silence_1500ms".to_string(),
                confidence: 1.0,
            },
        ];
        let config = PlannerConfig::default();

        let plan = PlanEmitter::emit(&timeline, &config, 42);

        assert_eq!(plan.schema_version, "1.0.0");
        assert_eq!(plan.cuts.len(), 2);
        assert_eq!(plan.cuts[0].start, "0.00");
        assert_eq!(plan.cuts[0].end, "5.50");
        assert_eq!(plan.cuts[1].entry_type, PlanEntryType::Cut);
        assert_eq!(plan.metadata.processing_time_ms, 42);
    }

    #[test]
    fn reason_tags_splits_compound_reasons() {
        let entry = PlanEntry {
            start: "1.00".to_string(),
            end: "2.00".to_string(),
            entry_type: PlanEntryType::Cut,
            reason: "filler_word_uh+silence_1500ms".to_string(),
            confidence: 1.0,
        };
        assert_eq!(entry.reason_tags(), vec!["filler_word_uh", "silence_1500ms"]);
    }

    #[test]
    fn serializes_parameters_with_camel_case_keys() {
        let config = PlannerConfig::default();
        let plan = PlanEmitter::emit(&[], &config, 0);
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json["metadata"]["parameters"]["minPauseMs"].is_u64());
        assert!(json["metadata"]["parameters"]["fillerWords"].is_array());
    }
}
