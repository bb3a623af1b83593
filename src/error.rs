//! Error taxonomy shared by the cut planner and subtitle re-timer.
//!
//! Every public entry point returns `Result<T, CoreError>`. Context fields
//! are modeled as typed struct fields per variant rather than a loose
//! string map.

use thiserror::Error;

/// Context fields attached to an error for operator-facing logging, per
/// spec §7's "dictionary of context fields (`expected`, `actual`,
/// `cueIndex`, `jobId`)". `expected`/`actual` stay inlined as typed fields on
/// the variants that carry them (their shapes differ per variant); `jobId`
/// and `cueIndex` live here since every variant can carry both uniformly.
/// The core never knows its own job id — an adapter attaches it via
/// [`CoreError::with_job_id`] when re-raising or logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    pub job_id: Option<String>,
    pub cue_index: Option<usize>,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid transcript: {message}")]
    InvalidTranscript { message: String, context: ErrorContext },

    #[error("invalid plan: {message}")]
    InvalidPlan { message: String, context: ErrorContext },

    #[error("unsupported plan schema version: expected {expected}, got {actual}")]
    SchemaVersionUnsupported {
        expected: String,
        actual: String,
        context: ErrorContext,
    },

    #[error("timing mismatch: expected {expected:.3}s, actual {actual:.3}s")]
    TimingMismatch {
        expected: f64,
        actual: f64,
        context: ErrorContext,
    },

    #[error("frame accuracy violation at cue {cue_index}: expected {expected:.6}s, got {actual:.6}s")]
    FrameAccuracy {
        cue_index: usize,
        expected: f64,
        actual: f64,
        context: ErrorContext,
    },

    #[error("planning failed: {message}")]
    PlanningFailed { message: String, context: ErrorContext },
}

impl CoreError {
    pub fn invalid_transcript(message: impl Into<String>) -> Self {
        Self::InvalidTranscript {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn invalid_plan(message: impl Into<String>) -> Self {
        Self::InvalidPlan {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn planning_failed(message: impl Into<String>) -> Self {
        Self::PlanningFailed {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn schema_version_unsupported(
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::SchemaVersionUnsupported {
            expected: expected.into(),
            actual: actual.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn timing_mismatch(expected: f64, actual: f64) -> Self {
        Self::TimingMismatch {
            expected,
            actual,
            context: ErrorContext::default(),
        }
    }

    /// `cue_index` is also copied into `context.cue_index`, so adapters can
    /// read it uniformly through [`CoreError::context`] alongside `job_id`
    /// instead of having to match on the variant.
    pub fn frame_accuracy(cue_index: usize, expected: f64, actual: f64) -> Self {
        Self::FrameAccuracy {
            cue_index,
            expected,
            actual,
            context: ErrorContext {
                job_id: None,
                cue_index: Some(cue_index),
            },
        }
    }

    /// Attaches the adapter-supplied job id to this error's context.
    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.context_mut().job_id = Some(job_id.into());
        self
    }

    /// Typed context dictionary for operator-facing logging.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::InvalidTranscript { context, .. }
            | Self::InvalidPlan { context, .. }
            | Self::SchemaVersionUnsupported { context, .. }
            | Self::TimingMismatch { context, .. }
            | Self::FrameAccuracy { context, .. }
            | Self::PlanningFailed { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::InvalidTranscript { context, .. }
            | Self::InvalidPlan { context, .. }
            | Self::SchemaVersionUnsupported { context, .. }
            | Self::TimingMismatch { context, .. }
            | Self::FrameAccuracy { context, .. }
            | Self::PlanningFailed { context, .. } => context,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
