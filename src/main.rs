//! tirrex_launch CLI

use clap::{Parser, Subcommand};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};
use tirrex_launch::{compose, declare_arguments};

#[derive(Parser)]
#[command(name = "tirrex_launch")]
#[command(about = "Launch-plan composer for the tirrex scout_mini demo", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the demo launch plan and write it as JSON
    Compose {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: plan.json)
        #[arg(short, long, default_value = "plan.json")]
        output: PathBuf,
    },

    /// List the declared launch arguments
    Args,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Compose { args, output } => {
            let overrides: HashMap<String, String> = args.into_iter().collect();
            compose_and_write(overrides, &output)
        }
        Commands::Args => {
            list_arguments();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn compose_and_write(
    overrides: HashMap<String, String>,
    output: &Path,
) -> tirrex_launch::Result<()> {
    let composed = compose(overrides)?;

    std::fs::write(output, composed.plan.to_json()?)?;

    log::info!("Generated launch plan: {}", output.display());
    log::info!(
        "  demo {}, run {}",
        composed.plan.demo,
        composed.plan.timestamp
    );
    log::info!("  log directory: {}", composed.plan.log_directory);
    log::info!("  debug directory: {}", composed.plan.debug_directory);

    if let Some(path) = composed.persist_replay()? {
        log::info!("  replay configuration: {}", path.display());
    }

    Ok(())
}

fn list_arguments() {
    println!("Declared arguments:");
    for arg in declare_arguments() {
        match &arg.description {
            Some(description) => {
                println!("  {} (default: {}) {}", arg.name, arg.default, description)
            }
            None => println!("  {} (default: {})", arg.name, arg.default),
        }
    }
}
