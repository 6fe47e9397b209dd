use super::config::ProfileConfig;

/// Validate profile thresholds at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_profile(config: &ProfileConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(margin) = config.balanced_margin {
        check_fraction(&mut errors, "profile.balanced_margin", margin);
    }

    if let Some(integration) = config.wisdom_integration {
        check_fraction(&mut errors, "profile.wisdom_integration", integration);
    }

    if let Some(ref thresholds) = config.margin_thresholds {
        let fields = [
            ("highly_skewed", thresholds.highly_skewed),
            ("strong_preference", thresholds.strong_preference),
            ("directional_flexible", thresholds.directional_flexible),
        ];
        for (name, value) in fields {
            check_fraction(
                &mut errors,
                &format!("profile.margin_thresholds.{}", name),
                value,
            );
        }

        if thresholds.highly_skewed < thresholds.strong_preference {
            errors.push(format!(
                "profile.margin_thresholds: highly_skewed ({}) must be >= strong_preference ({})",
                thresholds.highly_skewed, thresholds.strong_preference
            ));
        }
        if thresholds.strong_preference < thresholds.directional_flexible {
            errors.push(format!(
                "profile.margin_thresholds: strong_preference ({}) must be >= directional_flexible ({})",
                thresholds.strong_preference, thresholds.directional_flexible
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_fraction(errors: &mut Vec<String>, field: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(format!("{}: must be between 0 and 1, got {}", field, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MarginThresholds;

    fn empty_config() -> ProfileConfig {
        ProfileConfig {
            balanced_margin: None,
            wisdom_integration: None,
            margin_thresholds: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_profile(&ProfileConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_profile(&empty_config()).is_ok());
    }

    #[test]
    fn test_balanced_margin_out_of_range() {
        let config = ProfileConfig {
            balanced_margin: Some(1.5),
            ..empty_config()
        };
        let errors = validate_profile(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("profile.balanced_margin"));
    }

    #[test]
    fn test_thresholds_out_of_order() {
        let config = ProfileConfig {
            margin_thresholds: Some(MarginThresholds {
                highly_skewed: 0.5,
                strong_preference: 0.65,
                directional_flexible: 0.55,
            }),
            ..empty_config()
        };
        let errors = validate_profile(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("highly_skewed (0.5) must be >= strong_preference"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ProfileConfig {
            balanced_margin: Some(-0.1),    // Error 1
            wisdom_integration: Some(2.0), // Error 2
            margin_thresholds: Some(MarginThresholds {
                highly_skewed: 1.2, // Error 3
                strong_preference: 0.65,
                directional_flexible: 0.55,
            }),
        };
        let errors = validate_profile(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[2].contains("profile.margin_thresholds.highly_skewed"));
    }
}
