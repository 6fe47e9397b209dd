use thiserror::Error;

use super::axis::{Axis, AXIS_COUNT, MAX_SCORE};

/// Rejections raised while building an [`AxisScores`](super::AxisScores) snapshot.
///
/// Scores are never clamped and missing axes are never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("{axis} score {value} is out of range (expected 0-{})", MAX_SCORE)]
    OutOfRange { axis: Axis, value: i64 },

    #[error("missing score for {axis}")]
    MissingAxis { axis: Axis },

    #[error("expected {} scores, got {count}", AXIS_COUNT)]
    WrongAxisCount { count: usize },

    #[error("unknown axis '{name}'")]
    UnknownAxis { name: String },

    #[error("{axis} given more than once")]
    DuplicateAxis { axis: Axis },
}
