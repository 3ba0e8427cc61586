use alembic_versions::commands::{self, BranchOutcome, config::ConfigCommands};
use alembic_versions::config;
use alembic_versions::constants::CONFIG_FILENAME;
use alembic_versions::report::ReportFormat;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Help with managing alembic migrations in various ways.",
    long_about = None
)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for alembic-versions branch
#[derive(Parser, Debug)]
struct BranchArgs {
    #[command(flatten)]
    git_args: config::GitArgs,

    #[command(flatten)]
    directory_args: config::DirectoryArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: ReportFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Find new alembic migrations added in the current branch
    Branch(BranchArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);

    let outcome = run_main(cli).await?;

    // Return appropriate exit code based on outcome
    match outcome {
        Some(BranchOutcome::GitFailed) => std::process::exit(1),
        _ => Ok(()),
    }
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_main(cli: Cli) -> Result<Option<BranchOutcome>> {
    let file_config = config::load_config(&cli.config_file)?;

    match &cli.command {
        Commands::Branch(args) => {
            let cli_config = config::ConfigInput {
                git: Some(args.git_args.clone().into()),
                directories: Some(args.directory_args.clone().into()),
            };

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            info!("Finding new alembic migrations in this branch");
            let repo_root = PathBuf::from(".");
            let outcome = commands::cmd_branch(&config, &repo_root, args.format).await?;
            Ok(Some(outcome))
        }
        Commands::Config { command } => {
            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .resolve()?;

            info!("Managing configuration");
            commands::cmd_config(&config, &cli.config_file, command.clone())?;
            Ok(None)
        }
    }
}
