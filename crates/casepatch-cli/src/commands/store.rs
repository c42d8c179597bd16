//! Store commands
//!
//! Usage:
//!   casepatch store init
//!   casepatch store seed <PATH>

use std::path::PathBuf;

use casepatch_core::errors::{ExError, ExErrorKind, Result};
use casepatch_store::seed::import_seed;
use casepatch_store::Stores;
use clap::{Args, Subcommand};

use crate::config::Config;

#[derive(Debug, Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommand,
}

#[derive(Debug, Subcommand)]
pub enum StoreCommand {
    /// Create both stores and apply pending migrations
    Init,
    /// Import a seed file, or every YAML file in a directory
    Seed {
        /// Path to seed YAML file or directory
        path: PathBuf,
    },
}

/// Execute store command
pub fn execute(args: StoreArgs, config: &Config) -> Result<()> {
    let mut stores = Stores::open(&config.payments_db, &config.refunds_db)?;

    match args.command {
        StoreCommand::Init => {
            println!("Payments store: {}", config.payments_db.display());
            println!("Refunds store: {}", config.refunds_db.display());
        }
        StoreCommand::Seed { path } => {
            let seed_files = if path.is_dir() {
                // sorted for determinism
                let mut files: Vec<PathBuf> = std::fs::read_dir(&path)
                    .map_err(|e| {
                        ExError::new(ExErrorKind::Io)
                            .with_op("read_seed_dir")
                            .with_entity(path.display().to_string())
                            .with_message(e.to_string())
                    })?
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| {
                        p.extension()
                            .map(|ext| ext == "yaml" || ext == "yml")
                            .unwrap_or(false)
                    })
                    .collect();
                files.sort();
                files
            } else {
                vec![path]
            };

            for seed_file in seed_files {
                println!("Importing {}...", seed_file.display());
                let report = import_seed(&seed_file, &mut stores)?;
                println!(
                    "Imported {} rows (digest: {})",
                    report.total(),
                    report.digest
                );
            }
        }
    }

    Ok(())
}
