// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::models::{Entry, SaleChannel};

/// Reduced rate for food served on premises or taken away.
pub const REDUCED_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 0);
/// Standard rate; also the ceiling for any override.
pub const STANDARD_RATE: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatSplit {
    pub net: Decimal,
    pub vat_amount: Decimal,
}

/// Decompose a VAT-inclusive amount. Both parts are rounded to cents, so
/// `net + vat_amount` can differ from `gross` by at most one cent.
pub fn split_gross(gross: Decimal, rate: Decimal) -> VatSplit {
    let divisor = Decimal::ONE + rate / Decimal::ONE_HUNDRED;
    let net = (gross / divisor).round_dp(2);
    let vat_amount = (gross - net).round_dp(2);
    VatSplit { net, vat_amount }
}

pub fn default_rate(entry: &Entry) -> Decimal {
    match entry {
        Entry::Sale {
            channel: SaleChannel::DineIn | SaleChannel::Takeaway,
        } => REDUCED_RATE,
        _ => STANDARD_RATE,
    }
}

pub fn check_rate(rate: Decimal) -> Result<Decimal> {
    if rate < Decimal::ZERO || rate > STANDARD_RATE {
        return Err(Error::VatRateOutOfRange(rate));
    }
    Ok(rate)
}

/// Use the override when given, otherwise the default for the entry.
pub fn resolve_rate(entry: &Entry, rate: Option<Decimal>) -> Result<Decimal> {
    match rate {
        Some(r) => check_rate(r),
        None => Ok(default_rate(entry)),
    }
}
