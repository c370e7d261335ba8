use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

use crate::config::Config;
use crate::driver::run_paced;
use crate::engine::{Coroutine, Outcome, Step};
use crate::tasks::{signal, Signal, Triangle};

#[derive(Parser)]
#[command(name = "costack")]
#[command(about = "costack - cooperative coroutine stepper", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Debug level of the root task (overrides config)
    #[arg(short = 'd', long, global = true)]
    pub debug: Option<u8>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drive the triangle/rectangle demo and print the signal after each tick
    Run {
        /// Number of triangle waves
        #[arg(long)]
        waves: Option<u32>,

        /// Rising edge level that aborts the run
        #[arg(long)]
        high_limit: Option<i32>,

        /// Tick on the configured interval instead of back to back
        #[arg(long)]
        paced: bool,

        /// Print a JSON snapshot per tick instead of the signal value
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Run the CLI by parsing process arguments
pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli).await
}

/// Run the CLI with provided arguments
pub async fn run_cli_from_args(args: Vec<String>) -> Result<()> {
    let cli = Cli::parse_from(args);
    run_cli_with_args(cli).await
}

async fn run_cli_with_args(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(Some(path.as_str())),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(debug) = cli.debug {
        config.debug = debug;
    }

    match cli.command {
        Commands::Run {
            waves,
            high_limit,
            paced,
            json,
        } => {
            if let Some(waves) = waves {
                config.waves = waves;
            }
            if let Some(high_limit) = high_limit {
                config.high_limit = high_limit;
            }
            config.validate()?;
            run_demo(&config, paced, json).await
        }

        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

async fn run_demo(config: &Config, paced: bool, json: bool) -> Result<()> {
    let sig = signal(0);
    let root = Triangle::new(config.waves, config.size, config.hold(), sig.clone())
        .into_node(config.debug);
    let mut co = Coroutine::new(root);

    if paced {
        run_paced(&mut co, config.tick_interval(), |co| report_tick(co, &sig, json)).await;
    } else {
        loop {
            let step = co.step();
            report_tick(&co, &sig, json);
            if step == Step::Done {
                break;
            }
        }
    }
    if !json {
        println!();
    }

    match co.outcome() {
        Outcome::Completed(result) => {
            println!("END: {} OK", result);
            Ok(())
        }
        Outcome::Aborted(report) => {
            println!("END: {} aborted", co.result());
            Err(anyhow!(
                "{} aborted in state {}: {}",
                report.node,
                report.state,
                report.reason
            ))
        }
        other => Err(anyhow!("Unexpected outcome: {:?}", other)),
    }
}

fn report_tick(co: &Coroutine, sig: &Signal, json: bool) {
    if json {
        match serde_json::to_string(&co.snapshot()) {
            Ok(line) => println!("{{\"signal\":{},\"snapshot\":{}}}", sig.get(), line),
            Err(e) => tracing::warn!("failed to serialize snapshot: {}", e),
        }
    } else {
        print!("{} ", sig.get());
        if let Err(e) = std::io::stdout().flush() {
            tracing::warn!("failed to flush stdout: {}", e);
        }
    }
}
