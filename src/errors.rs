// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised by the store, the VAT helpers and the password gate.

use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The only check applied to a submitted transaction.
    #[error("Enter a gross amount greater than 0.")]
    NonPositiveGross(Decimal),

    #[error("VAT rate {0}% is outside the allowed range 0-24%")]
    VatRateOutOfRange(Decimal),

    /// The expense source is not on the pick list for its category.
    #[error("Unknown source '{source_name}' for {category}; expected one of: {choices}")]
    UnknownSource {
        source_name: String,
        category: String,
        choices: String,
    },

    /// A row in the data file could not be read back into a transaction.
    ///
    /// `row` is 1-based and does not count the header.
    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    /// A dashboard total does not fit in a `Decimal`.
    #[error("Totals are too large to add up; check the gross amounts in the data file")]
    TotalsOverflow,

    #[error("Incorrect password")]
    Unauthorized,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Could not replace data file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;
