// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;

use backoffice::{auth::PasswordGate, cli, commands, config::Config, logging, store::TransactionStore};

fn open_store(config: &Config) -> Result<TransactionStore> {
    TransactionStore::open(&config.data_file)
        .with_context(|| format!("Open data file {}", config.data_file.display()))
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("dashboard", sub)) => {
            let config = unlock(&matches)?;
            let store = open_store(&config)?;
            commands::dashboard::handle(&store, sub)?
        }
        Some(("tx", sub)) => {
            let config = unlock(&matches)?;
            match sub.subcommand() {
                Some(("sources", _)) => commands::transactions::sources(),
                _ => {
                    let mut store = open_store(&config)?;
                    commands::transactions::handle(&mut store, sub)?
                }
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// Resolve config and pass the password gate before any command runs.
fn unlock(matches: &clap::ArgMatches) -> Result<Config> {
    let config = Config::resolve(matches.get_one::<PathBuf>("data-file").cloned())?;
    PasswordGate::new(config.password.clone())
        .unlock(matches.get_one::<String>("password").map(|s| s.as_str()))?;
    Ok(config)
}
