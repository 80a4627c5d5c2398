// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Backoffice", "backoffice"));

pub const DATA_FILE_ENV: &str = "BACKOFFICE_DATA_FILE";
pub const PASSWORD_ENV: &str = "APP_PASSWORD";
const DATA_FILE_NAME: &str = "transactions.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub password: Option<String>,
}

impl Config {
    /// `data_file` is the `--data-file` flag, which clap already falls back
    /// to `BACKOFFICE_DATA_FILE` for.
    pub fn resolve(data_file: Option<PathBuf>) -> Result<Self> {
        let data_file = match data_file {
            Some(p) => p,
            None => default_data_file()?,
        };
        let password = std::env::var(PASSWORD_ENV)
            .ok()
            .filter(|p| !p.is_empty());
        Ok(Config {
            data_file,
            password,
        })
    }
}

pub fn default_data_file() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    // The store creates the directory on first write.
    Ok(proj.data_dir().join(DATA_FILE_NAME))
}
