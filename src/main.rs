use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use jvdt_explorer::config::{self, Config};
use jvdt_explorer::output;
use jvdt_explorer::radar;
use jvdt_explorer::scoring::{self, Axis, AxisScores};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_IO: i32 = 3;
const EXIT_CONFIG: i32 = 4;

/// Where the scores for a command come from. With no source given, the
/// config's initial scores are used; `--set` overrides apply last.
#[derive(Args, Debug, Default, Clone)]
struct ScoreArgs {
    /// Seven scores (0-100) in axis order: Perception, Interpretation,
    /// Reflection, Application, Motivation, Orientation, Value Expression
    #[arg(allow_negative_numbers = true, value_name = "SCORE")]
    scores: Vec<i64>,

    /// Override one axis, e.g. `--set reflection=20` (repeatable)
    #[arg(long = "set", value_name = "AXIS=SCORE")]
    overrides: Vec<String>,

    /// Read a JSON scores body keyed by axis ("-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["scores", "from_csv"])]
    from_json: Option<PathBuf>,

    /// Read a previously exported Axis,Score CSV
    #[arg(long, value_name = "PATH", conflicts_with = "scores")]
    from_csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive sliders and radar chart (default if no subcommand)
    Explore {
        #[command(flatten)]
        input: ScoreArgs,
    },
    /// Print normalized scores and the type code
    Classify {
        #[command(flatten)]
        input: ScoreArgs,

        /// Print the JSON response body instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print per-axis leaning, Virtue Ladder stages and the Integration Index
    Profile {
        #[command(flatten)]
        input: ScoreArgs,

        #[arg(long)]
        json: bool,
    },
    /// Print the radar polygon vertices (index, angle, radius, label)
    Radar {
        #[command(flatten)]
        input: ScoreArgs,

        /// Print x/y coordinates (zero angle up, clockwise) instead of polar
        #[arg(long)]
        cartesian: bool,

        #[arg(long, conflicts_with = "cartesian")]
        json: bool,
    },
    /// Print the score table
    Table {
        #[command(flatten)]
        input: ScoreArgs,

        /// Print as CSV (Axis,Score)
        #[arg(long)]
        csv: bool,
    },
    /// Write the score table as a CSV file
    Export {
        #[command(flatten)]
        input: ScoreArgs,

        /// Output file or directory (defaults to config export_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a config file interactively
    Init,
}

impl Commands {
    fn input(&self) -> Option<&ScoreArgs> {
        match self {
            Commands::Explore { input }
            | Commands::Classify { input, .. }
            | Commands::Profile { input, .. }
            | Commands::Radar { input, .. }
            | Commands::Table { input, .. }
            | Commands::Export { input, .. } => Some(input),
            Commands::Init => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "jvdt")]
#[command(about = "JVDT-7 personality profile explorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/jvdt/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    jvdt_explorer::logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Explore {
        input: ScoreArgs::default(),
    });
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = config::init::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let input = command.input().cloned().unwrap_or_default();
    let scores = match resolve_scores(&input, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid scores: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    tracing::debug!(scores = ?scores.values(), "resolved scores");

    let use_colors = output::should_use_colors();

    let result = match command {
        Commands::Explore { .. } => explore(scores, &config).await,
        Commands::Classify { json, .. } => {
            let report = scoring::report(&scores);
            if json {
                print_json(&report)
            } else {
                println!("{}", output::format_classification(&report, use_colors));
                Ok(())
            }
        }
        Commands::Profile { json, .. } => {
            let profile = scoring::build_profile(&scores, &config.profile());
            if json {
                print_json(&profile)
            } else {
                println!("{}", output::format_profile(&profile, use_colors));
                Ok(())
            }
        }
        Commands::Radar { cartesian, json, .. } => {
            let polygon = radar::to_polar_polygon(&scores);
            let labels = radar::axis_labels();
            if json {
                print_json(&serde_json::json!({ "labels": labels, "vertices": polygon }))
            } else {
                println!("{}", output::format_polygon(&polygon, &labels, cartesian));
                Ok(())
            }
        }
        Commands::Table { csv, .. } => {
            let rows = radar::to_table(&scores);
            if csv {
                print!("{}", radar::to_csv(&rows));
            } else {
                println!("{}", output::format_table(&rows, use_colors));
            }
            Ok(())
        }
        Commands::Export { output: path, .. } => {
            let path = path.unwrap_or_else(|| config.export_path());
            output::export_csv(&path, &scores).map(|written| {
                println!("Exported profile to {}", written.display());
            })
        }
        Commands::Init => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    std::process::exit(EXIT_SUCCESS);
}

async fn explore(scores: AxisScores, config: &Config) -> Result<()> {
    // Theme detection queries the terminal, so it must happen before raw mode
    let theme = jvdt_explorer::tui::resolve_theme(config.theme);
    let app = jvdt_explorer::tui::App::new(scores, config, theme);
    let final_scores = jvdt_explorer::tui::run_tui(app).await?;
    println!("Type code: {}", scoring::classify(&final_scores));
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Resolve scores from positional values, JSON, CSV or config, then apply `--set`.
fn resolve_scores(input: &ScoreArgs, config: &Config) -> Result<AxisScores> {
    let mut scores = if let Some(ref path) = input.from_json {
        let text = read_input(path)?;
        serde_json::from_str::<AxisScores>(&text)
            .with_context(|| format!("Failed to parse scores JSON from {}", path.display()))?
    } else if let Some(ref path) = input.from_csv {
        let text = read_input(path)?;
        radar::scores_from_csv(&text)
            .with_context(|| format!("Failed to read scores CSV from {}", path.display()))?
    } else if !input.scores.is_empty() {
        AxisScores::from_values(&input.scores)?
    } else {
        config::initial_scores(config).context("Invalid initial scores in config")?
    };

    for raw in &input.overrides {
        let (axis, value) = parse_override(raw)?;
        scores = scores.with(axis, value)?;
    }
    Ok(scores)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Parse `axis=score`, e.g. `value_expression=40`
fn parse_override(raw: &str) -> Result<(Axis, i64)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("--set expects AXIS=SCORE, got '{}'", raw))?;
    let axis = Axis::from_name(name)
        .ok_or_else(|| scoring::ScoreError::UnknownAxis { name: name.to_string() })?;
    let value = value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("--set {}: '{}' is not a whole number", axis, value))?;
    Ok((axis, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("value expression=40").unwrap(),
            (Axis::ValueExpression, 40)
        );
        assert!(parse_override("reflection").is_err());
        assert!(parse_override("humor=10").is_err());
        assert!(parse_override("reflection=ten").is_err());
    }

    #[test]
    fn test_resolve_positional_with_override() {
        let input = ScoreArgs {
            scores: vec![70, 70, 70, 70, 70, 70, 70],
            overrides: vec!["reflection=20".to_string()],
            ..ScoreArgs::default()
        };
        let scores = resolve_scores(&input, &Config::default()).unwrap();
        assert_eq!(scoring::classify(&scores).to_string(), "AREDSTL");
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        let too_few = ScoreArgs {
            scores: vec![70, 70],
            ..ScoreArgs::default()
        };
        assert!(resolve_scores(&too_few, &Config::default()).is_err());

        let out_of_range = ScoreArgs {
            scores: vec![70, 70, 70, 70, 70, 70, -3],
            ..ScoreArgs::default()
        };
        let err = resolve_scores(&out_of_range, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_resolve_defaults_to_config() {
        let scores = resolve_scores(&ScoreArgs::default(), &Config::default()).unwrap();
        assert_eq!(scores, AxisScores::uniform(70).unwrap());
    }

    #[test]
    fn test_cli_negative_scores_reach_validation() {
        let cli = Cli::try_parse_from(["jvdt", "classify", "1", "2", "3", "4", "5", "6", "-7"]).unwrap();
        let Some(Commands::Classify { input, .. }) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(input.scores, vec![1, 2, 3, 4, 5, 6, -7]);
    }
}
