//! Baluster Layout Calculator - Entry Point

use balcalc::calculation::{check_item_bound, Calculation};
use balcalc::config::{ParameterOverrides, ResolvedConfig};
use balcalc::model::{AppError, Mode};
use balcalc::state::AppState;
use balcalc::view::{ColorConfig, UiStyles};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Baluster Layout Calculator - how many balusters fit, and where
#[derive(Parser, Debug)]
#[command(name = "balcalc")]
#[command(version)]
#[command(about = "Lay out evenly spaced balusters along a flat rail or a stair slope")]
pub struct Args {
    /// Start mode: flat or triangle
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Flat rail length
    #[arg(long, value_parser = finite_number)]
    pub rail_length: Option<f64>,

    /// Baluster width
    #[arg(long, value_parser = finite_number)]
    pub baluster_width: Option<f64>,

    /// Space between balusters
    #[arg(long, value_parser = finite_number)]
    pub spacing: Option<f64>,

    /// Triangle base length
    #[arg(long, value_parser = finite_number)]
    pub base: Option<f64>,

    /// Triangle height (ignored when --angle is positive)
    #[arg(long, value_parser = finite_number)]
    pub height: Option<f64>,

    /// Triangle angle in degrees; overrides the height when positive
    #[arg(long, value_parser = finite_number, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the results as text and exit
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Print the full calculation as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Numeric flags the user actually passed.
    pub fn parameter_overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            rail_length: self.rail_length,
            baluster_width: self.baluster_width,
            spacing: self.spacing,
            triangle_base: self.base,
            triangle_height: self.height,
            triangle_angle_degrees: self.angle,
        }
    }
}

/// Parse a flag value, rejecting NaN and infinities.
fn finite_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("'{s}' is not a finite number"))
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    // 1. Load config file (or None if missing)
    let config_file = balcalc::config::load_config_with_precedence(args.config.clone())?;

    // 2. Merge with defaults
    let merged = balcalc::config::merge_config(config_file);

    // 3. Apply environment variable overrides
    let with_env = balcalc::config::apply_env_overrides(merged)?;

    // 4. Apply CLI argument overrides
    Ok(balcalc::config::apply_cli_overrides(
        with_env,
        args.mode,
        &args.parameter_overrides(),
    ))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    // Initialize tracing with configured log file path
    balcalc::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Values given on the command line are held to the same bound as edits
    check_item_bound(&config.defaults)?;

    if args.print || args.json {
        let calc = Calculation::compute(&config.defaults);
        let output = if args.json {
            balcalc::report::render_json(&calc)?
        } else {
            balcalc::report::render_text(&calc, &config.unit_label)
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return Ok(());
    }

    let styles = UiStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let state = AppState::new(config.defaults, config.unit_label);
    balcalc::view::run_tui(state, styles)?;

    Ok(())
}
