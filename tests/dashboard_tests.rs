// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use backoffice::errors::Error;
use backoffice::models::{Entry, ExpenseCategory, SaleChannel, Transaction};
use backoffice::summary::DashboardTotals;
use backoffice::{cli, commands::dashboard, store::TransactionStore};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

fn record(entry: Entry, net: Decimal, vat_amount: Decimal) -> Transaction {
    Transaction {
        date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        entry,
        description: None,
        gross: net + vat_amount,
        vat_rate: Decimal::new(13, 0),
        net,
        vat_amount,
    }
}

fn sale(net: Decimal, vat: Decimal) -> Transaction {
    record(
        Entry::Sale {
            channel: SaleChannel::DineIn,
        },
        net,
        vat,
    )
}

fn expense(category: ExpenseCategory, net: Decimal, vat: Decimal) -> Transaction {
    record(
        Entry::Expense {
            category,
            source: "Other".into(),
        },
        net,
        vat,
    )
}

#[test]
fn empty_collection_is_all_zero() {
    let totals = DashboardTotals::from_transactions(&Vec::<Transaction>::new()).unwrap();
    assert!(totals.revenue.is_zero());
    assert!(totals.cost_of_products.is_zero());
    assert!(totals.operating_costs.is_zero());
    assert!(totals.vat_payable.is_zero());
    assert!(totals.is_empty());
}

#[test]
fn sales_only() {
    let txs = vec![
        sale(Decimal::new(100, 0), Decimal::new(13, 0)),
        sale(Decimal::new(50, 0), Decimal::new(65, 1)),
    ];
    let totals = DashboardTotals::from_transactions(&txs).unwrap();
    assert_eq!(format!("{:.2}", totals.revenue), "150.00");
    assert_eq!(format!("{:.2}", totals.vat_payable), "19.50");
    assert!(totals.cost_of_products.is_zero());
    assert!(totals.operating_costs.is_zero());
    assert_eq!(totals.sales_count, 2);
    assert_eq!(totals.expense_count, 0);
}

#[test]
fn expenses_split_by_category_and_offset_vat() {
    let txs = vec![
        sale(Decimal::new(1000, 0), Decimal::new(130, 0)),
        expense(
            ExpenseCategory::CostOfProducts,
            Decimal::new(200, 0),
            Decimal::new(48, 0),
        ),
        expense(
            ExpenseCategory::OperatingCosts,
            Decimal::new(500, 0),
            Decimal::new(120, 0),
        ),
        expense(
            ExpenseCategory::CostOfProducts,
            Decimal::new(5050, 2),
            Decimal::new(1212, 2),
        ),
    ];
    let totals = DashboardTotals::from_transactions(&txs).unwrap();
    assert_eq!(totals.revenue, Decimal::new(1000, 0));
    assert_eq!(totals.cost_of_products, Decimal::new(25050, 2));
    assert_eq!(totals.operating_costs, Decimal::new(500, 0));
    // 130 - (48 + 120 + 12.12)
    assert_eq!(totals.vat_payable, Decimal::new(-5012, 2));
    assert_eq!(totals.expense_count, 3);
}

#[test]
fn oversized_totals_are_an_error() {
    let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
    let txs = vec![sale(huge, Decimal::ZERO), sale(huge, Decimal::ZERO)];
    assert!(matches!(
        DashboardTotals::from_transactions(&txs),
        Err(Error::TotalsOverflow)
    ));

    let one = vec![sale(huge, Decimal::ZERO)];
    let totals = DashboardTotals::from_transactions(&one).unwrap();
    assert_eq!(totals.revenue, huge);
}

#[test]
fn oversized_store_fails_dashboard_without_panicking() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,type,channel,category,description,gross,vat_rate,net,vat_amount\n\
         2025-08-01,sale,Dine-in,Sales,,50000000000000000000000000000,0,50000000000000000000000000000,0\n\
         2025-08-02,sale,Dine-in,Sales,,50000000000000000000000000000,0,50000000000000000000000000000,0"
    )
    .unwrap();
    file.flush().unwrap();
    let store = TransactionStore::open(file.path()).unwrap();

    let matches = cli::build_cli().get_matches_from(["backoffice", "dashboard"]);
    let Some(("dashboard", dash_m)) = matches.subcommand() else {
        panic!("no dashboard subcommand");
    };
    let err = dashboard::totals(&store, dash_m).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::TotalsOverflow)
    ));
}

#[test]
fn month_filter_from_cli() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,type,channel,category,description,gross,vat_rate,net,vat_amount\n\
         2025-07-31,sale,Delivery,Sales,,124,24,100.00,24.00\n\
         2025-08-01,sale,Takeaway,Sales,,113,13,100.00,13.00\n\
         2025-08-15,expense,Bakery,Cost of Products,Bread,62,24,50.00,12.00"
    )
    .unwrap();
    file.flush().unwrap();
    let store = TransactionStore::open(file.path()).unwrap();

    let matches =
        cli::build_cli().get_matches_from(["backoffice", "dashboard", "--month", "2025-08"]);
    let Some(("dashboard", dash_m)) = matches.subcommand() else {
        panic!("no dashboard subcommand");
    };
    let totals = dashboard::totals(&store, dash_m).unwrap();
    assert_eq!(totals.revenue, Decimal::new(100, 0));
    assert_eq!(totals.cost_of_products, Decimal::new(50, 0));
    assert_eq!(totals.vat_payable, Decimal::new(1, 0));

    let all = cli::build_cli().get_matches_from(["backoffice", "dashboard"]);
    let Some(("dashboard", all_m)) = all.subcommand() else {
        panic!("no dashboard subcommand");
    };
    let totals = dashboard::totals(&store, all_m).unwrap();
    assert_eq!(totals.revenue, Decimal::new(200, 0));
    assert_eq!(totals.sales_count, 2);
}

#[test]
fn fmt_money_groups_thousands() {
    use backoffice::utils::fmt_money;
    assert_eq!(fmt_money(&Decimal::ZERO), "€0.00");
    assert_eq!(fmt_money(&Decimal::new(195, 1)), "€19.50");
    assert_eq!(fmt_money(&Decimal::new(123456789, 2)), "€1,234,567.89");
    assert_eq!(fmt_money(&Decimal::new(-5012, 2)), "-€50.12");
    assert_eq!(fmt_money(&Decimal::new(100000, 0)), "€100,000.00");
}
