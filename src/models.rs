// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

pub const SALE_CHANNELS: [SaleChannel; 3] =
    [SaleChannel::DineIn, SaleChannel::Takeaway, SaleChannel::Delivery];

pub const COST_OF_PRODUCTS_SOURCES: [&str; 7] = [
    "Supermarket",
    "Meat supplier",
    "Vegetable supplier",
    "Beverage supplier",
    "Bakery",
    "Seafood supplier",
    "Other",
];

pub const OPERATING_COSTS_SOURCES: [&str; 10] = [
    "Rent",
    "Electricity",
    "Water",
    "WiFi / Internet",
    "Delivery platform fees",
    "Marketing",
    "Repairs & Maintenance",
    "POS/Software",
    "Cleaning",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Sale,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Sale => "sale",
            TxType::Expense => "expense",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(TxType::Sale),
            "expense" => Ok(TxType::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sales,
    CostOfProducts,
    OperatingCosts,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sales => "Sales",
            Category::CostOfProducts => "Cost of Products",
            Category::OperatingCosts => "Operating Costs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sales" => Ok(Category::Sales),
            "Cost of Products" => Ok(Category::CostOfProducts),
            "Operating Costs" => Ok(Category::OperatingCosts),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleChannel {
    DineIn,
    Takeaway,
    Delivery,
}

impl SaleChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleChannel::DineIn => "Dine-in",
            SaleChannel::Takeaway => "Takeaway",
            SaleChannel::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for SaleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SALE_CHANNELS
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown sales channel '{}' (use Dine-in, Takeaway or Delivery)",
                    s.trim()
                )
            })
    }
}

/// The two categories an expense can be booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    CostOfProducts,
    OperatingCosts,
}

impl ExpenseCategory {
    pub fn category(&self) -> Category {
        match self {
            ExpenseCategory::CostOfProducts => Category::CostOfProducts,
            ExpenseCategory::OperatingCosts => Category::OperatingCosts,
        }
    }

    pub fn sources(&self) -> &'static [&'static str] {
        match self {
            ExpenseCategory::CostOfProducts => &COST_OF_PRODUCTS_SOURCES,
            ExpenseCategory::OperatingCosts => &OPERATING_COSTS_SOURCES,
        }
    }

    /// Match `name` against the pick list and return its canonical spelling.
    pub fn canonical_source(&self, name: &str) -> Result<&'static str, Error> {
        let wanted = name.trim();
        self.sources()
            .iter()
            .copied()
            .find(|s| s.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownSource {
                source_name: wanted.to_string(),
                category: self.category().to_string(),
                choices: self.sources().join(", "),
            })
    }
}

impl TryFrom<Category> for ExpenseCategory {
    type Error = String;

    fn try_from(c: Category) -> Result<Self, Self::Error> {
        match c {
            Category::CostOfProducts => Ok(ExpenseCategory::CostOfProducts),
            Category::OperatingCosts => Ok(ExpenseCategory::OperatingCosts),
            Category::Sales => Err("expenses cannot be booked as Sales".to_string()),
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(' ', "-").as_str() {
            "cost-of-products" | "cogs" => Ok(ExpenseCategory::CostOfProducts),
            "operating-costs" | "opex" => Ok(ExpenseCategory::OperatingCosts),
            other => Err(format!(
                "unknown expense category '{}' (use cost-of-products or operating-costs)",
                other
            )),
        }
    }
}

/// Type-specific part of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Sale { channel: SaleChannel },
    Expense { category: ExpenseCategory, source: String },
}

impl Entry {
    pub fn tx_type(&self) -> TxType {
        match self {
            Entry::Sale { .. } => TxType::Sale,
            Entry::Expense { .. } => TxType::Expense,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Entry::Sale { .. } => Category::Sales,
            Entry::Expense { category, .. } => category.category(),
        }
    }

    pub fn channel(&self) -> &str {
        match self {
            Entry::Sale { channel } => channel.as_str(),
            Entry::Expense { source, .. } => source,
        }
    }
}

/// What the operator submits; net and VAT are derived on append.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub entry: Entry,
    pub description: Option<String>,
    pub gross: Decimal,
    pub vat_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub entry: Entry,
    pub description: Option<String>,
    pub gross: Decimal,
    pub vat_rate: Decimal,
    pub net: Decimal,
    pub vat_amount: Decimal,
}

impl Transaction {
    pub fn tx_type(&self) -> TxType {
        self.entry.tx_type()
    }

    pub fn category(&self) -> Category {
        self.entry.category()
    }

    pub fn channel(&self) -> &str {
        self.entry.channel()
    }

    pub fn is_sale(&self) -> bool {
        self.tx_type() == TxType::Sale
    }

    /// Channel prefixed for listings; never written to disk.
    pub fn display_channel(&self) -> String {
        match self.entry {
            Entry::Sale { .. } => format!("Sales: {}", self.channel()),
            Entry::Expense { .. } => format!("Source: {}", self.channel()),
        }
    }
}
