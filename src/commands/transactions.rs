// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    Entry, ExpenseCategory, NewTransaction, SaleChannel, Transaction, TxType, SALE_CHANNELS,
};
use crate::store::TransactionStore;
use crate::utils::{
    align_right, in_month, maybe_print_json, parse_date, parse_decimal, parse_month,
    pretty_table,
};
use crate::vat;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::debug;

pub fn handle(store: &mut TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let new = new_transaction(sub)?;
    let tx = store.append(new)?;
    println!(
        "Transaction added: {} {} on {} ({}), net {:.2} + VAT {:.2} at {}%",
        tx.tx_type(),
        tx.gross,
        tx.date,
        tx.display_channel(),
        tx.net,
        tx.vat_amount,
        tx.vat_rate.normalize()
    );
    Ok(())
}

/// Turn `tx add` arguments into a submission. Net and VAT are left to the
/// store; the rate falls back to the default for the channel.
pub fn new_transaction(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    let tx_type: TxType = sub
        .get_one::<String>("type")
        .map(|s| s.as_str())
        .unwrap_or("sale")
        .parse()
        .map_err(anyhow::Error::msg)?;
    let channel = sub.get_one::<String>("channel");
    let category = sub.get_one::<String>("category");
    let source = sub.get_one::<String>("source");

    let entry = match tx_type {
        TxType::Sale => {
            if category.is_some() || source.is_some() {
                bail!("--category and --source apply to expenses only");
            }
            let raw = channel.context("--channel is required for sales")?;
            let channel: SaleChannel = raw.parse().map_err(anyhow::Error::msg)?;
            Entry::Sale { channel }
        }
        TxType::Expense => {
            if channel.is_some() {
                bail!("--channel applies to sales only; use --source for expenses");
            }
            let category: ExpenseCategory = category
                .context("--category is required for expenses")?
                .parse()
                .map_err(anyhow::Error::msg)?;
            let raw = source.context("--source is required for expenses")?;
            let source = category.canonical_source(raw)?.to_string();
            Entry::Expense { category, source }
        }
    };

    let gross = parse_decimal(sub.get_one::<String>("gross").context("--gross is required")?)?;
    let rate = sub
        .get_one::<String>("vat")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let vat_rate = vat::resolve_rate(&entry, rate)?;
    debug!(%tx_type, %gross, %vat_rate, "built submission");

    Ok(NewTransaction {
        date,
        entry,
        description: sub.get_one::<String>("description").cloned(),
        gross,
        vat_rate,
    })
}

fn list(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.r#type.clone(),
                r.display_channel.clone(),
                r.category.clone(),
                r.description.clone(),
                r.gross.clone(),
                r.vat_rate.clone(),
                r.net.clone(),
                r.vat_amount.clone(),
            ]
        })
        .collect();
    let mut table = pretty_table(
        &[
            "Date",
            "Type",
            "Channel",
            "Category",
            "Description",
            "Gross",
            "VAT %",
            "Net",
            "VAT",
        ],
        rows,
    );
    align_right(&mut table, &[5, 6, 7, 8]);
    println!("{}", table);
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub r#type: String,
    pub channel: String,
    #[serde(skip)]
    pub display_channel: String,
    pub category: String,
    pub description: String,
    pub gross: String,
    pub vat_rate: String,
    pub net: String,
    pub vat_amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        TransactionRow {
            date: tx.date.to_string(),
            r#type: tx.tx_type().to_string(),
            channel: tx.channel().to_string(),
            display_channel: tx.display_channel(),
            category: tx.category().to_string(),
            description: tx.description.clone().unwrap_or_default(),
            gross: format!("{:.2}", tx.gross),
            vat_rate: tx.vat_rate.normalize().to_string(),
            net: format!("{:.2}", tx.net),
            vat_amount: format!("{:.2}", tx.vat_amount),
        }
    }
}

/// Rows in file order after the `--type`, `--month` and `--limit` filters.
pub fn query_rows(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let tx_type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TxType>())
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;

    let mut data: Vec<TransactionRow> = store
        .transactions()
        .iter()
        .filter(|tx| tx_type.is_none_or(|t| tx.tx_type() == t))
        .filter(|tx| in_month(tx.date, month))
        .map(TransactionRow::from)
        .collect();

    if let Some(&limit) = sub.get_one::<usize>("limit") {
        let skip = data.len().saturating_sub(limit);
        data.drain(..skip);
    }
    Ok(data)
}

/// Needs no store, so it works before any data file exists.
pub fn sources() {
    println!(
        "{}",
        pretty_table(&["Category", "Channel / Source", "Default VAT"], source_rows())
    );
}

/// Category, channel or source, and default VAT for every pick-list entry.
pub fn source_rows() -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for ch in SALE_CHANNELS {
        let entry = Entry::Sale { channel: ch };
        rows.push(vec![
            "Sales".to_string(),
            ch.to_string(),
            format!("{}%", vat::default_rate(&entry)),
        ]);
    }
    for cat in [ExpenseCategory::CostOfProducts, ExpenseCategory::OperatingCosts] {
        for src in cat.sources() {
            let entry = Entry::Expense {
                category: cat,
                source: src.to_string(),
            };
            rows.push(vec![
                cat.category().to_string(),
                src.to_string(),
                format!("{}%", vat::default_rate(&entry)),
            ]);
        }
    }
    rows
}
