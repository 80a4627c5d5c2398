// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::TransactionStore;
use crate::summary::DashboardTotals;
use crate::utils::{align_right, fmt_money, in_month, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let totals = totals(store, m)?;
    if maybe_print_json(json_flag, jsonl_flag, &totals)? {
        return Ok(());
    }

    let data = vec![
        vec!["Revenue (net)".to_string(), fmt_money(&totals.revenue)],
        vec!["Cost of Products".to_string(), fmt_money(&totals.cost_of_products)],
        vec!["Operating Costs".to_string(), fmt_money(&totals.operating_costs)],
        vec!["VAT Payable".to_string(), fmt_money(&totals.vat_payable)],
    ];
    let mut table = pretty_table(&["Metric", "Amount"], data);
    align_right(&mut table, &[1]);
    println!("{}", table);

    if totals.is_empty() {
        println!("No transactions yet. Use `backoffice tx add` to record one.");
    } else {
        println!(
            "{} sales, {} expenses",
            totals.sales_count, totals.expense_count
        );
    }
    Ok(())
}

pub fn totals(store: &TransactionStore, m: &clap::ArgMatches) -> Result<DashboardTotals> {
    let month = m
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let totals = DashboardTotals::from_transactions(
        store
            .transactions()
            .iter()
            .filter(|tx| in_month(tx.date, month)),
    )?;
    Ok(totals)
}
