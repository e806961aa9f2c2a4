mod compare;
mod component;
mod config;
mod greatest;
mod output;
mod satisfies;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use compare::Comparison;
use config::{SemverConfig, Settings};

#[derive(Parser, Debug)]
#[command(name = "semver")]
#[command(about = "Command-line semver tools. On error, print to stderr and exit 255.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Let prerelease versions satisfy constraints written for other versions
    #[arg(long, global = true)]
    allow_prerelease: bool,

    /// Read settings from this file instead of searching for semver.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Test if a version satisfies a constraint. Exit 0 if satisfies, 1 if not.
    /// If verbose, print an explanation to stdout.
    Satisfies(satisfies::SatisfiesArgs),

    /// Compare two versions. Exit 0 if the first is greater, 1 if not.
    /// If verbose, print greater to stdout.
    Greater(compare::CompareArgs),

    /// Compare two versions. Exit 0 if the first is lesser, 1 if not.
    /// If verbose, print lesser to stdout.
    Lesser(compare::CompareArgs),

    /// Compare two versions. Exit 0 if they are equal, 1 if not.
    Equal(compare::CompareArgs),

    /// Increment major, minor, or patch component.
    Inc(component::IncArgs),

    /// Get major, minor, patch, prerelease or metadata component.
    Get(component::GetArgs),

    /// Set prerelease or metadata component.
    Set(component::SetArgs),

    /// Find the greatest version in a list.
    Greatest(greatest::GreatestArgs),
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { output::FAILURE } else { output::SUCCESS };
            e.print()?;
            return Ok(code);
        }
    };

    let config = match &cli.config {
        Some(path) => Some(SemverConfig::load_file(path)?),
        None => SemverConfig::load_from_cwd()?,
    };
    let settings = Settings::resolve(config.as_ref(), cli.verbose, cli.allow_prerelease);
    log::debug!("Effective settings: {:?}", settings);

    match cli.command {
        Commands::Satisfies(args) => satisfies::execute(args, &settings),
        Commands::Greater(args) => compare::execute(Comparison::Greater, args, &settings),
        Commands::Lesser(args) => compare::execute(Comparison::Lesser, args, &settings),
        Commands::Equal(args) => compare::execute(Comparison::Equal, args, &settings),
        Commands::Inc(args) => component::execute_inc(args),
        Commands::Get(args) => component::execute_get(args),
        Commands::Set(args) => component::execute_set(args),
        Commands::Greatest(args) => greatest::execute(args),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(output::FAILURE as u8)
        }
    }
}
