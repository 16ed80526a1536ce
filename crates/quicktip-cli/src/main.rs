//! Quick Tip CLI
//!
//! One-shot tip calculations for scripts and shells:
//! - `fixed` and `custom` print the tip and total for a price
//! - `presets` lists the selector segments
//! - `config` manages the shared config file

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use quicktip_core::config::{Config, Directories};
use quicktip_core::{
    CUSTOM_SEGMENT, CalculationResult, NumericInputMode, TipChoice, TipMode, choice_for_segment,
    compute_custom_tip, compute_fixed_tip, compute_for_mode, parse_price, segment_choices,
    segment_for_percent,
};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Quick Tip CLI
#[derive(Parser)]
#[command(name = "quicktip")]
#[command(about = "Quick Tip - calculate tips from the command line")]
#[command(version)]
#[command(after_help = "\
Examples:
  quicktip fixed 20.00              Tip at the configured default segment
  quicktip fixed 20.00 --percent 18 Tip at any percentage
  quicktip fixed 64 --segment 2     Tip at the 15% segment
  quicktip custom 50 7.5            Add a fixed tip amount
  quicktip --json fixed 12.40       Machine-readable output
  quicktip presets --price 30       Compare every preset
  quicktip config init              Write a default config file
")]
struct Cli {
    /// Config file (defaults to ~/.config/quicktip/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Accept whole amounts only
    #[arg(short, long, global = true)]
    integer: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tip at a percentage of the price
    Fixed {
        /// Bill amount before tip
        price: String,

        /// Percentage to tip (overrides --segment)
        #[arg(short, long, conflicts_with = "segment")]
        percent: Option<String>,

        /// Preset segment index (0: 0%, 1: 10%, 2: 15%)
        #[arg(short, long)]
        segment: Option<usize>,
    },

    /// Tip a fixed amount on top of the price
    Custom {
        /// Bill amount before tip
        price: String,
        /// Tip amount
        tip: String,
    },

    /// List the tip selector segments
    Presets {
        /// Show the tip and total for this price at every preset
        #[arg(short, long)]
        price: Option<String>,
    },

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path
    Path,

    /// Print the effective config
    Show,
}

fn setup_logging(debug_flag: bool) {
    let level = if debug_flag { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let dirs = cli
        .config
        .clone()
        .map_or_else(Directories::new, Directories::for_config_file);
    let config_path = &dirs.config_file;

    match cli.command {
        Commands::Fixed {
            price,
            percent,
            segment,
        } => {
            let config = load_config(config_path, cli.integer)?;
            let segment = segment.unwrap_or(config.tip.default_segment);
            let (mode, result) = run_fixed(
                &price,
                percent.as_deref(),
                segment,
                config.input.numeric_mode,
            )?;
            if !cli.json
                && let Some(line) = percent_line(&mode)
            {
                println!("{line}");
            }
            print_result(&result, cli.json)
        }
        Commands::Custom { price, tip } => {
            let config = load_config(config_path, cli.integer)?;
            let result = run_custom(&price, &tip, config.input.numeric_mode)?;
            print_result(&result, cli.json)
        }
        Commands::Presets { price } => {
            let config = load_config(config_path, cli.integer)?;
            run_presets(price.as_deref(), config.input.numeric_mode, cli.json)
        }
        Commands::Config { command } => run_config_command(command, &dirs),
    }
}

/// Load the config file, applying the `--integer` override
fn load_config(path: &Path, integer: bool) -> Result<Config> {
    let mut config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if integer {
        config.input.numeric_mode = NumericInputMode::Integer;
    }
    Ok(config)
}

/// Tip at an explicit percentage, or at the given preset segment
fn run_fixed(
    price: &str,
    percent: Option<&str>,
    segment: usize,
    mode: NumericInputMode,
) -> Result<(TipMode, CalculationResult)> {
    let price = parse_price(price, mode)?;

    let percent = if let Some(text) = percent {
        parse_percent(text)?
    } else {
        match choice_for_segment(segment)? {
            TipChoice::Percent { percent } => percent,
            TipChoice::Custom => {
                bail!("Segment {segment} is the custom segment, use `quicktip custom` instead")
            }
        }
    };

    tracing::debug!("Fixed tip: price={price:?}, percent={percent}");
    let tip_mode = TipMode::Fixed { percent };
    Ok((tip_mode, compute_for_mode(price, tip_mode)?))
}

/// Parse a `--percent` argument. Percentages may be fractional even when
/// prices are whole, and `.5` is a complete value here.
fn parse_percent(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let padded = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    parse_price(&padded, NumericInputMode::Decimal)?
        .with_context(|| format!("Percentage {text:?} is not a number"))
}

/// "Percent: 15% (segment 2)" for a fixed mode
fn percent_line(mode: &TipMode) -> Option<String> {
    let percent = mode.percent()?.normalize();
    let line = match segment_for_percent(percent) {
        Some(segment) => format!("Percent: {percent}% (segment {segment})"),
        None => format!("Percent: {percent}%"),
    };
    Some(line)
}

fn run_custom(price: &str, tip: &str, mode: NumericInputMode) -> Result<CalculationResult> {
    let price = parse_price(price, mode)?;
    tracing::debug!("Custom tip: price={price:?}, tip={tip:?}");
    Ok(compute_custom_tip(price, tip, mode)?)
}

/// One row per segment, with results when a price is given
fn preset_rows(price: Option<&str>, mode: NumericInputMode) -> Result<Vec<serde_json::Value>> {
    let price = price.map(|text| parse_price(text, mode)).transpose()?;

    let mut rows = Vec::new();
    for (index, choice) in segment_choices().into_iter().enumerate() {
        let mut row = serde_json::json!({
            "segment": index,
            "label": choice.label(),
        });
        if let (Some(price), TipChoice::Percent { percent }) = (price, choice) {
            let result = compute_fixed_tip(price, percent)?;
            row["tip"] = serde_json::Value::String(result.tip);
            row["total"] = serde_json::Value::String(result.total);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn run_presets(price: Option<&str>, mode: NumericInputMode, json: bool) -> Result<()> {
    let rows = preset_rows(price, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let label = row["label"].as_str().unwrap_or_default();
        let index = &row["segment"];
        match (row["tip"].as_str(), row["total"].as_str()) {
            (Some(tip), Some(total)) => {
                println!("  {index}  {label:<7} tip {tip:>10}  total {total:>10}");
            }
            _ if *index == CUSTOM_SEGMENT => {
                println!("  {index}  {label:<7} (quicktip custom <PRICE> <TIP>)");
            }
            _ => println!("  {index}  {label}"),
        }
    }
    Ok(())
}

fn print_result(result: &CalculationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("Tip:   {}", result.tip);
        println!("Total: {}", result.total);
    }
    Ok(())
}

fn run_config_command(command: ConfigCommand, dirs: &Directories) -> Result<()> {
    let path = &dirs.config_file;
    match command {
        ConfigCommand::Init { force } => {
            init_config(dirs, force)?;
            println!("Wrote {}", path.display());
        }
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Show => {
            let config = load_config(path, false)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn init_config(dirs: &Directories, force: bool) -> Result<()> {
    let path = &dirs.config_file;
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    dirs.ensure_exists()
        .with_context(|| format!("Failed to create {}", dirs.config.display()))?;
    Config::default().save(path)?;
    Ok(())
}
