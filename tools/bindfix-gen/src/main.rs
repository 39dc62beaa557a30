// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! bindfix-gen CLI
//!
//! # Usage
//!
//! ```bash
//! # C++ header to stdout, or to a file
//! bindfix-gen header
//! bindfix-gen header -c gen.toml -o fixtures.hpp
//!
//! # Write the contract snapshot
//! bindfix-gen contract -o contract.json
//!
//! # Fail when the live shapes drifted from a snapshot
//! bindfix-gen check contract.json
//! ```

use anyhow::{Context, Result};
use bindfix::Contract;
use bindfix_gen::codegen::emit_header;
use bindfix_gen::GenConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Binding generator for the bindfix fixtures
#[derive(Parser, Debug)]
#[command(name = "bindfix-gen")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to $BINDFIX_GEN_CONFIG when set)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the C++ header
    Header {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the JSON contract
    Contract {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare the live contract with a snapshot
    Check {
        /// Contract snapshot (JSON)
        snapshot: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match GenConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Header { output } => cmd_header(&config, output.as_deref()),
        Commands::Contract { output } => cmd_contract(output.as_deref()),
        Commands::Check { snapshot } => cmd_check(&snapshot),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn cmd_header(config: &GenConfig, output: Option<&Path>) -> Result<ExitCode> {
    let registry = bindfix::fixtures::registry()?;
    tracing::info!("rendering header for {} shapes", registry.len());
    let header = emit_header(&registry, config)?;
    write_output(output, &header)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_contract(output: Option<&Path>) -> Result<ExitCode> {
    let contract = bindfix::fixtures::registry()?.contract()?;
    let mut json = contract.to_json_pretty()?;
    json.push('\n');
    write_output(output, &json)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(snapshot: &Path) -> Result<ExitCode> {
    let text = std::fs::read_to_string(snapshot)
        .with_context(|| format!("reading {}", snapshot.display()))?;
    let expected = Contract::from_json(&text)
        .with_context(|| format!("parsing {}", snapshot.display()))?;
    let live = bindfix::fixtures::registry()?.contract()?;

    let drifts = live.diff(&expected);
    if drifts.is_empty() {
        tracing::info!("no drift against {}", snapshot.display());
        return Ok(ExitCode::SUCCESS);
    }

    for drift in &drifts {
        println!("{drift}");
    }
    tracing::warn!("{} drift(s) against {}", drifts.len(), snapshot.display());
    Ok(ExitCode::FAILURE)
}
