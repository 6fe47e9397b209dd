use serde::Serialize;
use std::fmt;

use super::axis::{Axis, AxisScores, AXIS_COUNT, MAX_SCORE};
use super::config::ProfileConfig;

/// Which pole an axis leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaning {
    First,
    Second,
    Balanced,
}

/// Virtue Ladder stage, from most one-sided (Instinct) to most integrated (Wisdom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stage {
    Instinct = 1,
    Awareness = 2,
    Balance = 3,
    Mastery = 4,
    Wisdom = 5,
}

impl Stage {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Stage for a level, clamped to 1..=5.
    pub fn from_level(level: i64) -> Stage {
        match level {
            i64::MIN..=1 => Stage::Instinct,
            2 => Stage::Awareness,
            3 => Stage::Balance,
            4 => Stage::Mastery,
            _ => Stage::Wisdom,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Instinct => "Instinct",
            Stage::Awareness => "Awareness",
            Stage::Balance => "Balance",
            Stage::Mastery => "Mastery",
            Stage::Wisdom => "Wisdom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::Instinct => "Foundation stage - developing basic awareness of different approaches",
            Stage::Awareness => "Recognition stage - noticing tensions and alternatives in thinking and acting",
            Stage::Balance => "Integration stage - learning to balance and alternate between different modes",
            Stage::Mastery => "Application stage - consistently integrating different approaches and teaching others",
            Stage::Wisdom => "Transcendence stage - seamless unity between apparently opposite ways of being",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisReading {
    pub axis: Axis,
    pub score: u8,
    /// Share of the first pole, in [0, 1]
    pub first_pole: f64,
    pub second_pole: f64,
    /// |first - second|
    pub margin: f64,
    /// 1 - margin
    pub balance: f64,
    pub leaning: Leaning,
    pub stage: Stage,
}

impl AxisReading {
    /// Name of the pole this axis leans toward, if any.
    pub fn leaning_pole(&self) -> Option<&'static str> {
        let (first, second) = self.axis.poles();
        match self.leaning {
            Leaning::First => Some(first),
            Leaning::Second => Some(second),
            Leaning::Balanced => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub readings: Vec<AxisReading>,
    /// Mean balance across all axes, in [0, 1]
    pub integration_index: f64,
    pub overall_stage: Stage,
    /// Mean stage level, rounded to one decimal
    pub average_stage: f64,
}

/// Build the pole/stage analysis for one snapshot.
pub fn build_profile(scores: &AxisScores, config: &ProfileConfig) -> Profile {
    let balanced_margin = config.balanced_margin();
    let thresholds = config.thresholds();

    let partial: Vec<(Axis, u8, f64)> = scores
        .iter()
        .map(|(axis, score)| (axis, score, margin_for(score)))
        .collect();

    let integration_index =
        partial.iter().map(|(_, _, margin)| 1.0 - margin).sum::<f64>() / AXIS_COUNT as f64;

    let readings: Vec<AxisReading> = partial
        .into_iter()
        .map(|(axis, score, margin)| {
            let first_pole = f64::from(score) / f64::from(MAX_SCORE);
            let second_pole = f64::from(MAX_SCORE - score) / f64::from(MAX_SCORE);

            let leaning = if margin < balanced_margin {
                Leaning::Balanced
            } else if first_pole > second_pole {
                Leaning::First
            } else {
                Leaning::Second
            };

            let stage = if margin >= thresholds.highly_skewed {
                Stage::Instinct
            } else if margin >= thresholds.strong_preference {
                Stage::Awareness
            } else if margin >= thresholds.directional_flexible {
                Stage::Balance
            } else if integration_index >= config.wisdom_integration() {
                Stage::Wisdom
            } else {
                Stage::Mastery
            };

            AxisReading {
                axis,
                score,
                first_pole,
                second_pole,
                margin,
                balance: 1.0 - margin,
                leaning,
                stage,
            }
        })
        .collect();

    let average = readings
        .iter()
        .map(|r| f64::from(r.stage.level()))
        .sum::<f64>()
        / AXIS_COUNT as f64;

    Profile {
        readings,
        integration_index,
        overall_stage: Stage::from_level(average.round() as i64),
        average_stage: (average * 10.0).round() / 10.0,
    }
}

// Integer arithmetic keeps margins exact at threshold values (e.g. 90 -> 0.8).
fn margin_for(score: u8) -> f64 {
    let distance = (2 * i64::from(score) - i64::from(MAX_SCORE)).abs();
    distance as f64 / f64::from(MAX_SCORE)
}
