use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, error, warn};

use bogo_llm::cli::OutputFormatter;
use bogo_llm::{Cli, CommandHandler, Settings, TargetOverrides, TransportError};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    if cli.command.is_none() && cli.numbers.is_empty() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "provide numbers to sort, or a subcommand",
            )
            .exit();
    }

    // Initialize logging - only show errors unless asked
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // A missing .env file is fine; a broken one stops loading at the bad line
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Failed to load .env: {e}");
            let formatter = OutputFormatter::new(!cli.no_color);
            eprintln!("{}", formatter.format_warning(&format!("Failed to load .env: {e}")));
        }
    }

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(secs) = cli.timeout {
        settings.model.timeout_secs = Some(secs);
    }
    if cli.no_color {
        settings.output.use_colors = false;
    }
    debug!("Resolved settings: model={} url={}", settings.model.name, settings.model.api_url);

    let handler = match CommandHandler::new(settings) {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to initialize bogo: {e:#}");
            eprintln!("Error: Failed to initialize bogo: {e:#}");
            std::process::exit(1);
        }
    };

    let overrides = TargetOverrides::from(&cli);

    let outcome = match cli.command {
        Some(command) => handler.handle_command(command, &overrides).await,
        None => handler.handle_sort(&cli.numbers, &overrides).await,
    };

    match outcome {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("{}", handler.format_error(&format!("{e:#}")));
            if let Some(transport) = e.downcast_ref::<TransportError>() {
                let hint = if transport.is_auth_failure() {
                    "The endpoint rejected the API key. Set API_KEY or pass --api-key."
                } else {
                    "Check that the model server is running and API_URL points at it."
                };
                eprintln!("{}", handler.format_info(hint));
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
