//! Case commands
//!
//! Usage:
//!   casepatch case show <CCD>
//!   casepatch case template <CCD>
//!   casepatch case patch <CCD> --request <FILE> [--output <FILE>]
//!
//! The stores are opened as they are, never created or migrated, and nothing
//! here writes to them: `patch` prints the statements for a reviewer to run.

use std::path::PathBuf;

use casepatch_core::errors::{CasePatchError, ExError, ExErrorKind, Result};
use casepatch_core::patch::PatchRequest;
use casepatch_engine::{query_case, reconcile_case};
use casepatch_store::Stores;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Args)]
pub struct CaseArgs {
    #[command(subcommand)]
    pub command: CaseCommand,
}

#[derive(Debug, Subcommand)]
pub enum CaseCommand {
    /// Print the nested view of a case and its monetary summary
    Show {
        /// CCD case number
        case_key: String,
    },
    /// Print a desired-state tree that keeps the case exactly as it is
    Template {
        /// CCD case number
        case_key: String,
    },
    /// Reconcile a case against a desired-state tree and print the bundle
    Patch {
        /// CCD case number
        case_key: String,

        /// Desired-state tree (JSON)
        #[arg(long)]
        request: PathBuf,

        /// Write the bundle here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Execute case command
pub fn execute(args: CaseArgs, config: &Config) -> Result<()> {
    let stores = Stores::open_existing(&config.payments_db, &config.refunds_db)?;
    let loader = stores.loader();

    match args.command {
        CaseCommand::Show { case_key } => {
            let result = query_case(&loader, &case_key)?;
            println!("{}", to_json(&result)?);
        }
        CaseCommand::Template { case_key } => {
            let result = query_case(&loader, &case_key)?;
            println!("{}", to_json(&PatchRequest::mirror(&result.case))?);
        }
        CaseCommand::Patch {
            case_key,
            request,
            output,
        } => {
            let content = std::fs::read_to_string(&request).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("read_request")
                    .with_entity(request.display().to_string())
                    .with_message(e.to_string())
            })?;
            let request: PatchRequest = serde_json::from_str(&content)
                .map_err(|e| ExError::from(CasePatchError::from(e)).with_op("parse_request"))?;

            let result = reconcile_case(&loader, &case_key, &request)?;
            let json = to_json(&result)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{}\n", json)).map_err(|e| {
                        ExError::new(ExErrorKind::Io)
                            .with_op("write_bundle")
                            .with_entity(path.display().to_string())
                            .with_message(e.to_string())
                    })?;
                    eprintln!(
                        "Wrote {} forward and {} rollback statements to {}",
                        result.forward_statements.len(),
                        result.rollback_statements.len(),
                        path.display()
                    );
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ExError::from(CasePatchError::from(e)).with_op("render_json"))
}
