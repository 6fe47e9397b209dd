use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config, ThemeSetting};
use crate::config::{DEFAULT_INITIAL_SCORE, DEFAULT_SLIDER_STEP};
use crate::scoring::{MarginThresholds, ProfileConfig, MAX_SCORE};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Re-prompt until `parse` accepts the input.
fn prompt_until<T>(
    message: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T> {
    loop {
        let input = prompt_with_default(message, default)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

pub fn parse_score(input: &str) -> Result<i64, String> {
    match input.parse::<i64>() {
        Ok(v) if (0..=i64::from(MAX_SCORE)).contains(&v) => Ok(v),
        Ok(_) => Err(format!("must be between 0 and {}", MAX_SCORE)),
        Err(_) => Err("must be a whole number".to_string()),
    }
}

pub fn parse_step(input: &str) -> Result<u8, String> {
    match input.parse::<u8>() {
        Ok(v) if (1..=MAX_SCORE).contains(&v) => Ok(v),
        _ => Err(format!("must be a whole number between 1 and {}", MAX_SCORE)),
    }
}

pub fn parse_theme(input: &str) -> Result<ThemeSetting, String> {
    match input.to_lowercase().as_str() {
        "auto" => Ok(ThemeSetting::Auto),
        "dark" => Ok(ThemeSetting::Dark),
        "light" => Ok(ThemeSetting::Light),
        _ => Err("must be auto, dark or light".to_string()),
    }
}

pub fn parse_fraction(input: &str) -> Result<f64, String> {
    match input.parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err("must be a number between 0 and 1".to_string()),
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, writes there. Otherwise, prompts the user
/// with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("JVDT Explorer Configuration");
    println!("===========================");
    println!();

    println!("Every axis starts at the same score when the explorer opens.");
    let initial_score = prompt_until(
        "Initial score",
        &DEFAULT_INITIAL_SCORE.to_string(),
        parse_score,
    )?;

    println!();
    println!("Arrow keys move the selected slider by this many points.");
    let slider_step = prompt_until("Slider step", &DEFAULT_SLIDER_STEP.to_string(), parse_step)?;

    println!();
    let theme = prompt_until("Theme (auto/dark/light)", "auto", parse_theme)?;

    println!();
    let profile = if prompt_yes_no("Customize Virtue Ladder thresholds? (n accepts defaults)", false)? {
        let defaults = MarginThresholds::default();
        let base = ProfileConfig::default();
        println!();
        println!("Margins run from 0 (perfect balance) to 1 (fully one-sided).");
        let highly_skewed = prompt_until(
            "Instinct at margin >=",
            &defaults.highly_skewed.to_string(),
            parse_fraction,
        )?;
        let strong_preference = prompt_until(
            "Awareness at margin >=",
            &defaults.strong_preference.to_string(),
            parse_fraction,
        )?;
        let directional_flexible = prompt_until(
            "Balance at margin >=",
            &defaults.directional_flexible.to_string(),
            parse_fraction,
        )?;
        let wisdom_integration = prompt_until(
            "Wisdom needs Integration Index >=",
            &base.wisdom_integration().to_string(),
            parse_fraction,
        )?;
        Some(ProfileConfig {
            balanced_margin: base.balanced_margin,
            wisdom_integration: Some(wisdom_integration),
            margin_thresholds: Some(MarginThresholds {
                highly_skewed,
                strong_preference,
                directional_flexible,
            }),
        })
    } else {
        None
    };

    let config = Config {
        initial_score: Some(initial_score),
        slider_step: Some(slider_step),
        theme,
        profile,
        ..Config::default()
    };

    if let Err(errors) = crate::config::validate_config(&config) {
        println!();
        println!("Configuration has problems:");
        for error in &errors {
            println!("  - {}", error);
        }
        anyhow::bail!("Refusing to write an invalid config");
    }

    let path = match default_path {
        Some(p) => p,
        None => {
            let default = get_config_path();
            PathBuf::from(prompt_with_default(
                "Write config to",
                &default.display().to_string(),
            )?)
        }
    };

    if path.exists() && !prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)? {
        println!("Aborted; existing config left untouched.");
        return Ok(());
    }

    save_config(&path, &config)?;
    println!();
    println!("Wrote {}", path.display());
    Ok(())
}
