//! casepatch CLI
//!
//! Command-line interface for inspecting a case and generating the statement
//! bundles that restructure it.

use std::path::PathBuf;

use casepatch_core::logging_facility;
use casepatch_core_types::RequestContext;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "casepatch")]
#[command(
    about = "casepatch - Restructure payment cases into reviewable SQL bundles",
    long_about = None
)]
struct Cli {
    /// Path to a casepatch.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Payments store database file
    #[arg(long, global = true)]
    payments_db: Option<PathBuf>,

    /// Refunds store database file
    #[arg(long, global = true)]
    refunds_db: Option<PathBuf>,

    /// Logging profile: development, production or test
    #[arg(long, global = true)]
    log_profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Case inspection and reconciliation
    Case(commands::case::CaseArgs),
    /// Store setup and fixtures
    Store(commands::store::StoreArgs),
}

fn main() {
    // a missing .env is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let overrides = config::Overrides {
        config: cli.config,
        payments_db: cli.payments_db,
        refunds_db: cli.refunds_db,
        log_profile: cli.log_profile,
    };

    let result = config::Config::resolve(&overrides).and_then(|config| {
        logging_facility::init(config.profile);

        let trace_header = std::env::var(config::ENV_TRACE_ID).ok();
        let ctx = RequestContext::new().with_trace_header(trace_header.as_deref());
        let span = tracing::info_span!(
            "request",
            request_id = %ctx.request_id,
            trace_id = ctx.trace_id.as_ref().map(|t| t.as_str())
        );
        let _enter = span.enter();

        let outcome = match cli.command {
            Commands::Case(args) => commands::case::execute(args, &config),
            Commands::Store(args) => commands::store::execute(args, &config),
        };
        outcome.map_err(|e| e.with_context(&ctx))
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
