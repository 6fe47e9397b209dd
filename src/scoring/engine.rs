use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

use super::axis::{Axis, AxisScores, AXIS_COUNT, MAX_SCORE};

/// Scores at or above this value take the axis' high letter.
pub const CLASSIFY_THRESHOLD: u8 = 50;

/// Raw scores mapped onto [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedScores([f64; AXIS_COUNT]);

impl NormalizedScores {
    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

// Serialized as an object keyed by canonical axis key, in axis order.
impl Serialize for NormalizedScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AXIS_COUNT))?;
        for (axis, value) in self.iter() {
            map.serialize_entry(axis.key(), &value)?;
        }
        map.end()
    }
}

/// Seven-letter profile summary, one letter per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode([char; AXIS_COUNT]);

impl TypeCode {
    pub fn letter(&self, axis: Axis) -> char {
        self.0[axis.index()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Response body for a classification request.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub normalized: NormalizedScores,
    pub code: TypeCode,
}

pub fn normalize(scores: &AxisScores) -> NormalizedScores {
    let mut normalized = [0.0; AXIS_COUNT];
    for (axis, score) in scores.iter() {
        normalized[axis.index()] = f64::from(score) / f64::from(MAX_SCORE);
    }
    NormalizedScores(normalized)
}

/// Pick each axis' letter by comparing its raw score to [`CLASSIFY_THRESHOLD`].
/// A score of exactly 50 resolves to the high letter.
pub fn classify(scores: &AxisScores) -> TypeCode {
    let mut code = [' '; AXIS_COUNT];
    for (axis, score) in scores.iter() {
        code[axis.index()] = letter_for(axis, score);
    }
    TypeCode(code)
}

pub fn letter_for(axis: Axis, score: u8) -> char {
    let (high, low) = axis.letters();
    if score >= CLASSIFY_THRESHOLD {
        high
    } else {
        low
    }
}

pub fn report(scores: &AxisScores) -> ClassificationReport {
    ClassificationReport {
        normalized: normalize(scores),
        code: classify(scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [i64; AXIS_COUNT]) -> AxisScores {
        AxisScores::from_values(&values).unwrap()
    }

    #[test]
    fn test_normalize_divides_by_hundred() {
        let normalized = normalize(&scores([0, 25, 50, 75, 100, 33, 1]));
        assert_eq!(normalized.get(Axis::Perception), 0.0);
        assert_eq!(normalized.get(Axis::Interpretation), 0.25);
        assert_eq!(normalized.get(Axis::Reflection), 0.5);
        assert_eq!(normalized.get(Axis::Application), 0.75);
        assert_eq!(normalized.get(Axis::Motivation), 1.0);
        assert_eq!(normalized.get(Axis::Orientation), 33.0 / 100.0);
        assert_eq!(normalized.get(Axis::ValueExpression), 0.01);
    }

    #[test]
    fn test_classify_all_high() {
        let code = classify(&AxisScores::uniform(70).unwrap());
        assert_eq!(code.to_string(), "ARIDSTL");
    }

    #[test]
    fn test_classify_all_low() {
        let code = classify(&AxisScores::uniform(40).unwrap());
        assert_eq!(code.to_string(), "NCEPMHR");
    }

    #[test]
    fn test_classify_tie_resolves_high() {
        let at_threshold = classify(&scores([50, 0, 0, 0, 0, 0, 0]));
        assert_eq!(at_threshold.letter(Axis::Perception), 'A');

        let below = classify(&scores([49, 0, 0, 0, 0, 0, 0]));
        assert_eq!(below.letter(Axis::Perception), 'N');
    }

    #[test]
    fn test_classify_mixed() {
        let code = classify(&scores([90, 10, 50, 49, 100, 0, 51]));
        assert_eq!(code.to_string(), "ACIPSHL");
        assert_eq!(code.len(), 7);
    }

    #[test]
    fn test_value_expression_low_letter_is_r() {
        let code = classify(&scores([100, 100, 100, 100, 100, 100, 0]));
        assert_eq!(code.letter(Axis::ValueExpression), 'R');
        assert_eq!(code.letter(Axis::Interpretation), 'R');
    }

    #[test]
    fn test_report_json_shape() {
        let report = report(&AxisScores::uniform(70).unwrap());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["code"], "ARIDSTL");
        assert_eq!(value["normalized"]["perception"], 0.7);
        assert_eq!(value["normalized"]["value_expression"], 0.7);
        assert_eq!(value["normalized"].as_object().unwrap().len(), 7);
    }
}
