// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{Error, Result};

/// Startup check against the optional `APP_PASSWORD`.
#[derive(Debug, Clone, Default)]
pub struct PasswordGate {
    expected: Option<String>,
}

impl PasswordGate {
    pub fn new(expected: Option<String>) -> Self {
        PasswordGate {
            expected: expected.filter(|p| !p.is_empty()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.expected.is_none()
    }

    pub fn check(&self, supplied: &str) -> Result<()> {
        match &self.expected {
            None => Ok(()),
            Some(expected) if expected == supplied => Ok(()),
            Some(_) => Err(Error::Unauthorized),
        }
    }

    /// Check the flag value if given, otherwise ask on the terminal.
    pub fn unlock(&self, supplied: Option<&str>) -> Result<()> {
        if self.is_open() {
            return Ok(());
        }
        match supplied {
            Some(p) => self.check(p),
            None => {
                let entered = rpassword::prompt_password("Enter password: ")?;
                self.check(&entered)
            }
        }
    }
}
