pub mod init;
mod schema;

pub use schema::{Config, ThemeSetting, DEFAULT_EXPORT_FILE, DEFAULT_INITIAL_SCORE, DEFAULT_SLIDER_STEP};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::{validate_profile, Axis, AxisScores, ScoreError, AXIS_COUNT, MAX_SCORE};

/// Get the config directory path (~/.config/jvdt/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("jvdt")
}

/// Get the default config file path (~/.config/jvdt/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/jvdt/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default location is not an error: defaults apply.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Write configuration atomically, creating parent directories as needed.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let yaml = serde_saphyr::to_string(config).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

/// Starting scores: `initial_score` on every axis, then per-axis `initial` overrides.
pub fn initial_scores(config: &Config) -> Result<AxisScores, ScoreError> {
    let mut scores = AxisScores::uniform(config.initial_score())?;
    if let Some(ref initial) = config.initial {
        // Keys are raw spellings, so two of them can name the same axis
        let mut seen = [false; AXIS_COUNT];
        for (name, &value) in initial {
            let axis = Axis::from_name(name).ok_or_else(|| ScoreError::UnknownAxis {
                name: name.clone(),
            })?;
            if std::mem::replace(&mut seen[axis.index()], true) {
                return Err(ScoreError::DuplicateAxis { axis });
            }
            scores = scores.with(axis, value)?;
        }
    }
    Ok(scores)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(score) = config.initial_score {
        if !(0..=i64::from(MAX_SCORE)).contains(&score) {
            errors.push(format!("initial_score: must be between 0 and {}, got {}", MAX_SCORE, score));
        }
    }

    if let Some(ref initial) = config.initial {
        let mut seen = [false; AXIS_COUNT];
        for (name, &value) in initial {
            let Some(axis) = Axis::from_name(name) else {
                errors.push(format!("initial.{}: unknown axis", name));
                continue;
            };
            if std::mem::replace(&mut seen[axis.index()], true) {
                errors.push(format!("initial.{}: duplicate of {}", name, axis));
            }
            if !(0..=i64::from(MAX_SCORE)).contains(&value) {
                errors.push(format!(
                    "initial.{}: must be between 0 and {}, got {}",
                    name, MAX_SCORE, value
                ));
            }
        }
    }

    if let Some(step) = config.slider_step {
        if step == 0 || step > MAX_SCORE {
            errors.push(format!("slider_step: must be between 1 and {}, got {}", MAX_SCORE, step));
        }
    }

    if let Some(ref profile) = config.profile {
        if let Err(profile_errors) = validate_profile(profile) {
            errors.extend(profile_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
