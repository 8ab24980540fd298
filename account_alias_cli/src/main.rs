use clap::Parser;
use std::path::PathBuf;

use account_alias_cli::config::ConfigManager;
use account_alias_cli::error::{CliError, CliResult, ErrorContext};
use account_alias_cli::invocation::{
    AliasArgs, INVALID_STATE_MESSAGE, Plan, program_name, usage_line,
};
use account_alias_cli::orchestrators::alias_orchestrator::AliasOrchestrator;

#[derive(Parser)]
#[command(name = "aws-account-alias")]
#[command(author, version, about = "Create or remove the IAM account alias of an AWS account", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(flatten)]
    alias: AliasArgs,

    /// AWS region for the API clients
    #[arg(long, value_name = "REGION")]
    region: Option<String>,

    /// Named AWS profile
    #[arg(long, value_name = "NAME")]
    profile: Option<String>,

    /// Custom endpoint URL for the API clients
    #[arg(long = "endpoint_url", value_name = "URL")]
    endpoint_url: Option<String>,

    /// Configuration file (defaults to the XDG config location)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("account_alias_core", log::LevelFilter::Debug)
            .filter_module("account_alias_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let debug = cli.debug;
    if let Err(err) = run(cli).await {
        eprint!("{}", err.format_for_user(debug));
        std::process::exit(err.exit_code() as i32);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let (state, alias) = match Plan::from_args(&cli.alias) {
        Plan::Usage => {
            log::debug!("No account alias given, nothing to do");
            println!("{}", usage_line(&program_name()));
            return Ok(());
        }
        Plan::InvalidState(value) => {
            log::debug!("Rejected account alias state: {value:?}");
            println!("{INVALID_STATE_MESSAGE}");
            return Ok(());
        }
        Plan::Reconcile { state, alias } => (state, alias),
    };

    let manager = cli
        .config
        .clone()
        .map(ConfigManager::with_path)
        .unwrap_or_default();
    let mut config = manager.load().map_err(|e| {
        CliError::configuration(&format!("{e:#}"))
            .with_context("path", &manager.get_config_path().display().to_string())
    })?;
    config.apply_cli_overrides(cli.region, cli.profile, cli.endpoint_url);

    let orchestrator =
        AliasOrchestrator::connect(&config, &cli.alias.credential_overrides()).await?;
    let line = orchestrator.run(state, &alias).await?;
    println!("{line}");

    Ok(())
}
