use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::scoring::ProfileConfig;

pub const DEFAULT_INITIAL_SCORE: i64 = 70;
pub const DEFAULT_SLIDER_STEP: u8 = 5;
pub const DEFAULT_EXPORT_FILE: &str = "jvdt7_profile.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Starting value for every axis (default: 70)
    #[serde(default)]
    pub initial_score: Option<i64>,

    /// Per-axis starting values, keyed by axis name; overrides `initial_score`
    #[serde(default)]
    pub initial: Option<BTreeMap<String, i64>>,

    /// Explorer slider increment (default: 5)
    #[serde(default)]
    pub slider_step: Option<u8>,

    /// Where exports land when no path is given (default: ./jvdt7_profile.csv)
    #[serde(default)]
    pub export_path: Option<PathBuf>,

    #[serde(default)]
    pub theme: ThemeSetting,

    #[serde(default)]
    pub profile: Option<ProfileConfig>,
}

impl Config {
    pub fn initial_score(&self) -> i64 {
        self.initial_score.unwrap_or(DEFAULT_INITIAL_SCORE)
    }

    pub fn slider_step(&self) -> u8 {
        self.slider_step.unwrap_or(DEFAULT_SLIDER_STEP)
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE))
    }

    pub fn profile(&self) -> ProfileConfig {
        self.profile.clone().unwrap_or_default()
    }
}
