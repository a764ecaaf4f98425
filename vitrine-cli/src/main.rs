mod cli;

use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use vitrine::prelude::*;

use crate::cli::Cli;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to create log file: {0}")]
    Log(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("The contact form has no field named '{0}'")]
    UnknownField(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let log_file = File::create(&cli.log)?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Logging disabled: {e}");
    }

    let mut config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(delay) = cli.delay_ms {
        config = config.with_submit_delay(Duration::from_millis(delay));
    }

    let transport = transport_for(&config)?;
    let store: Arc<dyn ThemeStore> = match FileThemeStore::in_config_dir() {
        Some(store) => Arc::new(store),
        None => Arc::new(NoThemeStore),
    };
    let site = Site::new(standard_page(), config, transport, store);

    for (name, value) in &cli.fields {
        let Some(field) = site.form().field(name) else {
            return Err(CliError::UnknownField(name.clone()));
        };
        field.set_value(value.as_str());
        let target = field.input().id();
        site.dispatch(&Event::input(target.as_str()));
        site.dispatch(&Event::blur(target.as_str()));
    }

    let outcome = site.submit().await;
    let banner = site
        .submission()
        .banners()
        .current()
        .map(|el| el.text_content());

    match outcome {
        Some(SubmissionOutcome::Succeeded) => {
            println!("{}", banner.unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }
        Some(SubmissionOutcome::Failed(reason)) => {
            eprintln!("Message not sent: {reason}");
            Ok(ExitCode::FAILURE)
        }
        None => {
            for field in site.form().fields() {
                if let Some(error) = field.error() {
                    eprintln!("{}: {}", field.name(), error.message());
                }
            }
            if let Some(banner) = banner {
                eprintln!("{banner}");
            }
            Ok(ExitCode::from(2))
        }
    }
}
