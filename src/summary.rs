// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{Error, Result};
use crate::models::{Category, Transaction};

/// Dashboard metrics, all summed from the stored net and VAT columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardTotals {
    pub revenue: Decimal,
    pub cost_of_products: Decimal,
    pub operating_costs: Decimal,
    /// Output VAT on sales minus input VAT on expenses. Negative means a
    /// refund position.
    pub vat_payable: Decimal,
    pub sales_count: usize,
    pub expense_count: usize,
}

fn add(total: &mut Decimal, amount: Decimal) -> Result<()> {
    *total = total.checked_add(amount).ok_or(Error::TotalsOverflow)?;
    Ok(())
}

impl DashboardTotals {
    pub fn from_transactions<'a, I>(transactions: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = DashboardTotals::default();
        let mut vat_out = Decimal::ZERO;
        let mut vat_in = Decimal::ZERO;

        for tx in transactions {
            if tx.is_sale() {
                add(&mut totals.revenue, tx.net)?;
                add(&mut vat_out, tx.vat_amount)?;
                totals.sales_count += 1;
            } else {
                add(&mut vat_in, tx.vat_amount)?;
                totals.expense_count += 1;
            }
            match tx.category() {
                Category::CostOfProducts => add(&mut totals.cost_of_products, tx.net)?,
                Category::OperatingCosts => add(&mut totals.operating_costs, tx.net)?,
                Category::Sales => {}
            }
        }
        totals.vat_payable = vat_out.checked_sub(vat_in).ok_or(Error::TotalsOverflow)?;
        Ok(totals)
    }

    pub fn is_empty(&self) -> bool {
        self.sales_count == 0 && self.expense_count == 0
    }
}
