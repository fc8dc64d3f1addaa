use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use startup_validator::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "startup-validator", version, about = "Startup viability reports from an agent crew")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
    #[command(flatten)]
    settings: Settings,
}

#[derive(Subcommand)]
enum Cmd {
    /// Serve POST /validate-startup
    Serve,
    /// Validate one idea against the crew and print the report
    Validate {
        #[arg(long)]
        idea: String,
        #[arg(long)]
        background: String,
    },
    /// Pull the report out of a saved crew output (`{"tasks_output": [...]}`)
    Extract {
        #[arg(long)]
        input_file: PathBuf,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_validator(settings: &Settings) -> Result<Validator> {
    let crew = RemoteCrew::new(settings.crew_url.clone(), settings.crew_timeout())
        .context("building crew client")?;
    Ok(Validator::new(Arc::new(crew), Credential::from_env(settings.api_key_env.clone())))
}

fn print_report(report: ValidationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report.into_inner())?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.cmd {
        Cmd::Serve => {
            let validator = build_validator(&cli.settings)?;
            server::run_server(validator, cli.settings.bind, &cli.settings.cors_origins).await
        }
        Cmd::Validate { idea, background } => {
            let validator = build_validator(&cli.settings)?;
            print_report(validator.validate(&idea, &background).await?)
        }
        Cmd::Extract { input_file } => {
            let text = std::fs::read_to_string(&input_file)
                .with_context(|| format!("reading {}", input_file.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", input_file.display()))?;
            let output = CrewOutput::from_value(&value);
            print_report(extract_report(output.tasks())?)
        }
    }
}
