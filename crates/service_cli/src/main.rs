//! rootscan - real roots and sign intervals from the command line
//!
//! # Commands
//!
//! - `rootscan solve "<lhs> = <rhs>"` - Real roots of an equation
//! - `rootscan inequality "<lhs> <op> <rhs>"` - Open intervals where an inequality holds
//! - `rootscan check "<expr>" --at X` - Value and derivative of an expression

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs, CliConfig};
use service_cli::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Equation and inequality solver
#[derive(Parser, Debug)]
#[command(name = "rootscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ROOTSCAN_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the real roots of an equation
    Solve {
        /// Equation in x, e.g. "x^3 - 4*x + 1 = 0"
        #[arg(allow_hyphen_values = true)]
        equation: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Stop after this many roots
        #[arg(long)]
        max_roots: Option<usize>,
    },

    /// Find where an inequality holds
    Inequality {
        /// Inequality in x, e.g. "(x-4)/(x-1) > x/3 + 4"
        #[arg(allow_hyphen_values = true)]
        statement: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Number of sub-intervals sampled in the scan window
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Evaluate an expression and its derivative at a point
    Check {
        /// Expression in x
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Evaluation point
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        at: f64,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            ..CliArgs::default()
        };
        match &self.command {
            Commands::Solve {
                format, max_roots, ..
            } => {
                args.format = format.clone();
                args.max_roots = *max_roots;
            }
            Commands::Inequality {
                format, samples, ..
            } => {
                args.format = format.clone();
                args.samples = *samples;
            }
            Commands::Check { format, .. } => args.format = format.clone(),
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli, config: &CliConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Solve { equation, .. } => commands::solve::run(&mut out, &equation, config),
        Commands::Inequality { statement, .. } => {
            commands::inequality::run(&mut out, &statement, config)
        }
        Commands::Check { expression, at, .. } => {
            commands::check::run(&mut out, &expression, at, config)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli.config_args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = service_cli::VERSION,
        log_level = %config.log_level,
        format = ?config.format,
        "Configuration loaded"
    );

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
