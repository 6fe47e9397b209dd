use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ScoreError;

/// Number of JVDT-7 axes.
pub const AXIS_COUNT: usize = 7;

/// Highest valid raw score on any axis.
pub const MAX_SCORE: u8 = 100;

/// One of the seven JVDT-7 personality axes.
///
/// Declaration order is significant: it fixes the letter order of the
/// type code and the vertex order of the radar polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Perception,
    Interpretation,
    Reflection,
    Application,
    Motivation,
    Orientation,
    ValueExpression,
}

impl Axis {
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::Perception,
        Axis::Interpretation,
        Axis::Reflection,
        Axis::Application,
        Axis::Motivation,
        Axis::Orientation,
        Axis::ValueExpression,
    ];

    /// Position of this axis in declared order (0-based).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, as used in table rows and chart labels.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Perception => "Perception",
            Axis::Interpretation => "Interpretation",
            Axis::Reflection => "Reflection",
            Axis::Application => "Application",
            Axis::Motivation => "Motivation",
            Axis::Orientation => "Orientation",
            Axis::ValueExpression => "Value Expression",
        }
    }

    /// Canonical key used in JSON payloads ("value_expression").
    pub fn key(self) -> &'static str {
        match self {
            Axis::Perception => "perception",
            Axis::Interpretation => "interpretation",
            Axis::Reflection => "reflection",
            Axis::Application => "application",
            Axis::Motivation => "motivation",
            Axis::Orientation => "orientation",
            Axis::ValueExpression => "value_expression",
        }
    }

    /// Type-code letters as `(high, low)`: high when score >= 50.
    pub fn letters(self) -> (char, char) {
        match self {
            Axis::Perception => ('A', 'N'),
            Axis::Interpretation => ('R', 'C'),
            Axis::Reflection => ('I', 'E'),
            Axis::Application => ('D', 'P'),
            Axis::Motivation => ('S', 'M'),
            Axis::Orientation => ('T', 'H'),
            Axis::ValueExpression => ('L', 'R'),
        }
    }

    /// Pole names as `(first, second)`. The first pole carries the high letter.
    pub fn poles(self) -> (&'static str, &'static str) {
        match self {
            Axis::Perception => ("Association", "Analysis"),
            Axis::Interpretation => ("Root", "Context"),
            Axis::Reflection => ("Internal", "External"),
            Axis::Application => ("Dream", "Pragmatic"),
            Axis::Motivation => ("Self", "Mission"),
            Axis::Orientation => ("Task", "Horizon"),
            Axis::ValueExpression => ("Love", "Respect"),
        }
    }

    /// Look up an axis by display name or key.
    ///
    /// Case-insensitive; spaces, hyphens and underscores are interchangeable,
    /// so "Value Expression", "value_expression" and "value-expression" all match.
    pub fn from_name(name: &str) -> Option<Axis> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Axis::ALL.into_iter().find(|axis| axis.key() == normalized)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw 0-100 scores for all seven axes.
///
/// Every constructor validates, so holding an `AxisScores` means each value
/// is already in range. Snapshots are immutable; [`AxisScores::with`]
/// returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AxisScoresBody", into = "AxisScoresBody")]
pub struct AxisScores([u8; AXIS_COUNT]);

impl AxisScores {
    pub fn new(values: [u8; AXIS_COUNT]) -> Result<Self, ScoreError> {
        for (axis, value) in Axis::ALL.into_iter().zip(values) {
            check_range(axis, value as i64)?;
        }
        Ok(Self(values))
    }

    /// Build from an ordered list of exactly seven values.
    pub fn from_values(values: &[i64]) -> Result<Self, ScoreError> {
        if values.len() != AXIS_COUNT {
            return Err(ScoreError::WrongAxisCount {
                count: values.len(),
            });
        }
        let mut scores = [0u8; AXIS_COUNT];
        for (axis, &value) in Axis::ALL.into_iter().zip(values) {
            scores[axis.index()] = check_range(axis, value)?;
        }
        Ok(Self(scores))
    }

    /// Build from `(axis name, value)` pairs in any order.
    ///
    /// Every axis must appear exactly once.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut slots: [Option<u8>; AXIS_COUNT] = [None; AXIS_COUNT];
        for (name, value) in pairs {
            let name = name.as_ref();
            let axis = Axis::from_name(name).ok_or_else(|| ScoreError::UnknownAxis {
                name: name.to_string(),
            })?;
            if slots[axis.index()].is_some() {
                return Err(ScoreError::DuplicateAxis { axis });
            }
            slots[axis.index()] = Some(check_range(axis, value)?);
        }

        let mut scores = [0u8; AXIS_COUNT];
        for axis in Axis::ALL {
            scores[axis.index()] = slots[axis.index()].ok_or(ScoreError::MissingAxis { axis })?;
        }
        Ok(Self(scores))
    }

    /// The same value on every axis.
    pub fn uniform(value: i64) -> Result<Self, ScoreError> {
        Self::from_values(&[value; AXIS_COUNT])
    }

    pub fn get(&self, axis: Axis) -> u8 {
        self.0[axis.index()]
    }

    /// Copy of this snapshot with one axis replaced.
    pub fn with(&self, axis: Axis, value: i64) -> Result<Self, ScoreError> {
        let mut scores = self.0;
        scores[axis.index()] = check_range(axis, value)?;
        Ok(Self(scores))
    }

    pub fn values(&self) -> [u8; AXIS_COUNT] {
        self.0
    }

    /// `(axis, score)` pairs in declared axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, u8)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

fn check_range(axis: Axis, value: i64) -> Result<u8, ScoreError> {
    if (0..=MAX_SCORE as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ScoreError::OutOfRange { axis, value })
    }
}

/// Wire shape of a scores payload: one required field per axis, no extras.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct AxisScoresBody {
    perception: i64,
    interpretation: i64,
    reflection: i64,
    application: i64,
    motivation: i64,
    orientation: i64,
    value_expression: i64,
}

impl TryFrom<AxisScoresBody> for AxisScores {
    type Error = ScoreError;

    fn try_from(body: AxisScoresBody) -> Result<Self, Self::Error> {
        AxisScores::from_values(&[
            body.perception,
            body.interpretation,
            body.reflection,
            body.application,
            body.motivation,
            body.orientation,
            body.value_expression,
        ])
    }
}

impl From<AxisScores> for AxisScoresBody {
    fn from(scores: AxisScores) -> Self {
        let v = scores.values().map(i64::from);
        Self {
            perception: v[0],
            interpretation: v[1],
            reflection: v[2],
            application: v[3],
            motivation: v[4],
            orientation: v[5],
            value_expression: v[6],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order_matches_index() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_from_name_variants() {
        assert_eq!(Axis::from_name("Value Expression"), Some(Axis::ValueExpression));
        assert_eq!(Axis::from_name("value_expression"), Some(Axis::ValueExpression));
        assert_eq!(Axis::from_name(" value-expression "), Some(Axis::ValueExpression));
        assert_eq!(Axis::from_name("PERCEPTION"), Some(Axis::Perception));
        assert_eq!(Axis::from_name("intuition"), None);
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let err = AxisScores::from_values(&[10, 20, 30, 101, 50, 60, 70]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::OutOfRange {
                axis: Axis::Application,
                value: 101
            }
        );

        let err = AxisScores::from_values(&[-1, 20, 30, 40, 50, 60, 70]).unwrap_err();
        assert!(matches!(err, ScoreError::OutOfRange { axis: Axis::Perception, .. }));
    }

    #[test]
    fn test_from_values_rejects_wrong_count() {
        assert_eq!(
            AxisScores::from_values(&[50; 6]).unwrap_err(),
            ScoreError::WrongAxisCount { count: 6 }
        );
        assert_eq!(
            AxisScores::from_values(&[50; 8]).unwrap_err(),
            ScoreError::WrongAxisCount { count: 8 }
        );
    }

    #[test]
    fn test_new_rejects_over_max() {
        assert!(AxisScores::new([0, 0, 0, 0, 0, 0, 100]).is_ok());
        assert!(AxisScores::new([0, 0, 0, 0, 0, 0, 200]).is_err());
    }

    #[test]
    fn test_from_pairs_any_order() {
        let scores = AxisScores::from_pairs([
            ("Value Expression", 7),
            ("orientation", 6),
            ("Motivation", 5),
            ("application", 4),
            ("Reflection", 3),
            ("interpretation", 2),
            ("Perception", 1),
        ])
        .unwrap();
        assert_eq!(scores.values(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_from_pairs_missing_unknown_duplicate() {
        let missing = AxisScores::from_pairs([("Perception", 10)]).unwrap_err();
        assert_eq!(
            missing,
            ScoreError::MissingAxis {
                axis: Axis::Interpretation
            }
        );

        let unknown = AxisScores::from_pairs([("Intuition", 10)]).unwrap_err();
        assert!(matches!(unknown, ScoreError::UnknownAxis { .. }));

        let duplicate =
            AxisScores::from_pairs([("Perception", 10), ("perception", 20)]).unwrap_err();
        assert_eq!(
            duplicate,
            ScoreError::DuplicateAxis {
                axis: Axis::Perception
            }
        );
    }

    #[test]
    fn test_with_returns_new_snapshot() {
        let base = AxisScores::uniform(70).unwrap();
        let changed = base.with(Axis::Reflection, 20).unwrap();
        assert_eq!(base.get(Axis::Reflection), 70);
        assert_eq!(changed.get(Axis::Reflection), 20);
        assert!(base.with(Axis::Reflection, 120).is_err());
    }

    #[test]
    fn test_json_payload_roundtrip() {
        let json = r#"{
            "perception": 70, "interpretation": 60, "reflection": 50,
            "application": 40, "motivation": 30, "orientation": 20,
            "value_expression": 10
        }"#;
        let scores: AxisScores = serde_json::from_str(json).unwrap();
        assert_eq!(scores.values(), [70, 60, 50, 40, 30, 20, 10]);

        let value = serde_json::to_value(scores).unwrap();
        assert_eq!(value["value_expression"], 10);
        assert_eq!(value["perception"], 70);
    }

    #[test]
    fn test_json_payload_rejections() {
        let missing = r#"{"perception": 70}"#;
        assert!(serde_json::from_str::<AxisScores>(missing).is_err());

        let extra = r#"{
            "perception": 70, "interpretation": 60, "reflection": 50,
            "application": 40, "motivation": 30, "orientation": 20,
            "value_expression": 10, "humor": 99
        }"#;
        assert!(serde_json::from_str::<AxisScores>(extra).is_err());

        let out_of_range = r#"{
            "perception": 170, "interpretation": 60, "reflection": 50,
            "application": 40, "motivation": 30, "orientation": 20,
            "value_expression": 10
        }"#;
        let err = serde_json::from_str::<AxisScores>(out_of_range).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
