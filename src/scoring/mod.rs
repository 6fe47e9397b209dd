pub mod axis;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod validation;

pub use axis::{Axis, AxisScores, AXIS_COUNT, MAX_SCORE};
pub use config::*;
pub use engine::{classify, normalize, report, ClassificationReport, NormalizedScores, TypeCode};
pub use error::ScoreError;
pub use profile::{build_profile, AxisReading, Leaning, Profile, Stage};
pub use validation::validate_profile;
