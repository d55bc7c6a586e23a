// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! djsim command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Run with a constant oracle and default constants
//! djsim run --oracle constant
//!
//! # Balanced oracle, custom relaxation rate, JSON output
//! djsim run --oracle balanced --relaxation-rate 0.2 --json
//!
//! # Show the effective configuration
//! djsim config
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use djsim::gates::basis_state_density;
use djsim::report::{ProbabilityReport, BASIS_LABELS};
use djsim::{run, Config, Oracle, OracleMode, Result, VERSION};

/// Pulse-level Deutsch–Jozsa simulator with Lindblad amplitude damping
#[derive(Parser)]
#[command(name = "djsim")]
#[command(version = VERSION)]
#[command(about = "Simulates the Deutsch-Jozsa algorithm at the pulse level with T1 noise")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the algorithm and print the final probability distribution
    Run {
        /// Oracle branch to simulate
        #[arg(long, value_enum, default_value_t = OracleMode::Constant)]
        oracle: OracleMode,

        /// Relaxation rate γ of the second qubit
        #[arg(long, env = "DJSIM_RELAXATION_RATE")]
        relaxation_rate: Option<f64>,

        /// Number of discrete damping steps
        #[arg(long, env = "DJSIM_EVOLUTION_STEPS")]
        steps: Option<usize>,

        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            oracle,
            relaxation_rate,
            steps,
            json,
        } => {
            // Override config with CLI args
            if let Some(gamma) = relaxation_rate {
                config.noise.relaxation_rate = gamma;
            }
            if let Some(n) = steps {
                config.noise.evolution_steps = n;
            }
            config.validate()?;

            let oracle = Oracle::new(oracle, &config.physics);
            let result = run(&basis_state_density(0), &oracle, &config)?;
            let report = ProbabilityReport::from_run(&result);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Oracle: {}", report.oracle);
                println!();
                println!("  state   probability");
                for (label, p) in BASIS_LABELS.iter().zip(&report.probabilities) {
                    println!("  |{}⟩    {:.6}", label, p);
                }
                println!();
                println!(
                    "trace = {:.6}, purity = {:.6}",
                    report.final_trace, report.final_purity
                );
            }
        }

        Commands::Config => {
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Initialize logging with tracing.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
