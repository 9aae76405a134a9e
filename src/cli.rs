// ============================================================================
// Command-Line Front End
// Argument model, logging setup and output rendering for the binary
// ============================================================================

use crate::domain::{Calculation, Operation};
use crate::engine::Calculator;
use crate::numeric::Number;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

/// Basic two-operand calculator
#[derive(Debug, Parser)]
#[command(name = "calculator", author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// First operand
    #[arg(value_name = "A")]
    pub a: Number,

    /// Second operand
    #[arg(value_name = "B")]
    pub b: Number,

    /// Operation to apply
    #[arg(value_enum, value_name = "OPERATION")]
    pub operation: Operation,

    /// Print the calculation as a JSON object
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,

    /// Print the calculation as `a op b = result`
    #[arg(long)]
    pub explain: bool,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable diagnostic output
    #[arg(short, long)]
    pub quiet: bool,
}

/// How a successful calculation is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Just the result
    Plain,
    /// `Calculation` as JSON
    Json,
    /// `8.0 / 2.0 = 4.0`
    Explain,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.explain {
            OutputFormat::Explain
        } else {
            OutputFormat::Plain
        }
    }

    /// Max log level, `None` when logging is off
    pub fn log_level(&self) -> Option<Level> {
        if self.quiet {
            return None;
        }
        Some(match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
    }
}

/// Install a stderr fmt subscriber; stdout carries only the result
pub fn init_logging(level: Option<Level>) {
    let Some(level) = level else {
        return;
    };
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Evaluate the parsed arguments and render the output line
pub fn run(cli: &Cli) -> Result<String> {
    info!(a = cli.a, b = cli.b, operation = %cli.operation, "evaluating");
    let calculation = Calculator::new().record(cli.a, cli.b, cli.operation)?;
    render(&calculation, cli.output_format())
}

pub fn render(calculation: &Calculation, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Plain => format_number(calculation.result),
        OutputFormat::Json => {
            serde_json::to_string(calculation).context("failed to serialize calculation")?
        }
        OutputFormat::Explain => calculation.to_string(),
    };
    Ok(rendered)
}

/// Shortest round-trip rendering, always with a fractional part or exponent
pub fn format_number(value: Number) -> String {
    format!("{value:?}")
}
