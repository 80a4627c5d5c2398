// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::config::DATA_FILE_ENV;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Only include transactions dated in this month")
}

pub fn build_cli() -> Command {
    Command::new("backoffice")
        .version(clap::crate_version!())
        .about("Restaurant back office: record sales and expenses, report net totals and VAT")
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .global(true)
                .env(DATA_FILE_ENV)
                .value_parser(value_parser!(PathBuf))
                .help("CSV file holding the transactions"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .global(true)
                .help("Password, when APP_PASSWORD is set (prompted if omitted)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log store activity to stderr"),
        )
        .subcommand(json_args(
            Command::new("dashboard")
                .about("Revenue, cost of products, operating costs and VAT payable")
                .arg(month_arg()),
        ))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a sale or an expense")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["sale", "expense"])
                                .default_value("sale"),
                        )
                        .arg(
                            Arg::new("channel")
                                .long("channel")
                                .help("Sales channel: Dine-in, Takeaway or Delivery"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Expense category: cost-of-products or operating-costs"),
                        )
                        .arg(
                            Arg::new("source")
                                .long("source")
                                .help("Supplier or expense type (see `tx sources`)"),
                        )
                        .arg(Arg::new("description").long("description").short('d'))
                        .arg(
                            Arg::new("gross")
                                .long("gross")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Amount including VAT"),
                        )
                        .arg(
                            Arg::new("vat")
                                .long("vat")
                                .value_name("PERCENT")
                                .help("VAT rate 0-24; defaults to 13 for dine-in/takeaway, else 24"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List all transactions")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["sale", "expense"]),
                        )
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show only the most recent N rows"),
                        ),
                ))
                .subcommand(
                    Command::new("sources")
                        .about("Sales channels and expense sources, with default VAT"),
                ),
        )
}
