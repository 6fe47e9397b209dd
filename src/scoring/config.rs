use serde::{Deserialize, Serialize};

pub const DEFAULT_BALANCED_MARGIN: f64 = 0.1;
pub const DEFAULT_HIGHLY_SKEWED: f64 = 0.8;
pub const DEFAULT_STRONG_PREFERENCE: f64 = 0.65;
pub const DEFAULT_DIRECTIONAL_FLEXIBLE: f64 = 0.55;
pub const DEFAULT_WISDOM_INTEGRATION: f64 = 0.7;

/// Profile analysis thresholds.
///
/// Margins are the distance between the two pole fractions of an axis
/// (0.0 = perfectly balanced, 1.0 = fully one-sided). Every field is
/// optional; unset fields fall back to the defaults above.
///
/// Example YAML:
/// ```yaml
/// profile:
///   balanced_margin: 0.1
///   wisdom_integration: 0.7
///   margin_thresholds:
///     highly_skewed: 0.8
///     strong_preference: 0.65
///     directional_flexible: 0.55
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Margins below this count as a balanced leaning
    #[serde(default)]
    pub balanced_margin: Option<f64>,

    /// Integration Index needed for balanced axes to reach Wisdom instead of Mastery
    #[serde(default)]
    pub wisdom_integration: Option<f64>,

    #[serde(default)]
    pub margin_thresholds: Option<MarginThresholds>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            balanced_margin: Some(DEFAULT_BALANCED_MARGIN),
            wisdom_integration: Some(DEFAULT_WISDOM_INTEGRATION),
            margin_thresholds: Some(MarginThresholds::default()),
        }
    }
}

impl ProfileConfig {
    pub fn balanced_margin(&self) -> f64 {
        self.balanced_margin.unwrap_or(DEFAULT_BALANCED_MARGIN)
    }

    pub fn wisdom_integration(&self) -> f64 {
        self.wisdom_integration.unwrap_or(DEFAULT_WISDOM_INTEGRATION)
    }

    pub fn thresholds(&self) -> MarginThresholds {
        self.margin_thresholds.clone().unwrap_or_default()
    }
}

/// Margin cut-offs for the lower Virtue Ladder stages.
///
/// Expected ordering: `highly_skewed >= strong_preference >= directional_flexible`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MarginThresholds {
    /// At or above: Instinct
    #[serde(default = "default_highly_skewed")]
    pub highly_skewed: f64,

    /// At or above: Awareness
    #[serde(default = "default_strong_preference")]
    pub strong_preference: f64,

    /// At or above: Balance
    #[serde(default = "default_directional_flexible")]
    pub directional_flexible: f64,
}

impl Default for MarginThresholds {
    fn default() -> Self {
        Self {
            highly_skewed: DEFAULT_HIGHLY_SKEWED,
            strong_preference: DEFAULT_STRONG_PREFERENCE,
            directional_flexible: DEFAULT_DIRECTIONAL_FLEXIBLE,
        }
    }
}

fn default_highly_skewed() -> f64 {
    DEFAULT_HIGHLY_SKEWED
}

fn default_strong_preference() -> f64 {
    DEFAULT_STRONG_PREFERENCE
}

fn default_directional_flexible() -> f64 {
    DEFAULT_DIRECTIONAL_FLEXIBLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_config() {
        let config = ProfileConfig::default();
        assert_eq!(config.balanced_margin(), 0.1);
        assert_eq!(config.wisdom_integration(), 0.7);
        assert_eq!(config.thresholds().highly_skewed, 0.8);
    }

    #[test]
    fn test_profile_config_serde_roundtrip() {
        let config = ProfileConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ProfileConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_thresholds_fill_defaults() {
        let yaml = r#"
margin_thresholds:
  highly_skewed: 0.9
"#;
        let config: ProfileConfig = serde_saphyr::from_str(yaml).unwrap();
        let thresholds = config.thresholds();
        assert_eq!(thresholds.highly_skewed, 0.9);
        assert_eq!(thresholds.strong_preference, 0.65);
        assert_eq!(thresholds.directional_flexible, 0.55);
        assert!(config.balanced_margin.is_none());
        assert_eq!(config.balanced_margin(), 0.1);
    }

    #[test]
    fn test_empty_profile_config_parse() {
        let config: ProfileConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.balanced_margin.is_none());
        assert!(config.wisdom_integration.is_none());
        assert!(config.margin_thresholds.is_none());
        assert_eq!(config.thresholds(), MarginThresholds::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "balance_margin: 0.2\n";
        assert!(serde_saphyr::from_str::<ProfileConfig>(yaml).is_err());
    }
}
