// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat-file transaction store.
//!
//! The whole collection lives in one CSV file with a header row. Every append
//! rewrites the file from memory through a temp file in the same directory,
//! so readers see either the old or the new contents. There is no locking:
//! if two processes append at once, the last rename wins.

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::{Error, Result};
use crate::models::{
    Category, Entry, ExpenseCategory, NewTransaction, SaleChannel, Transaction, TxType,
};
use crate::vat;

pub const HEADER: [&str; 9] = [
    "date",
    "type",
    "channel",
    "category",
    "description",
    "gross",
    "vat_rate",
    "net",
    "vat_amount",
];

#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let transactions = load(&path)?;
        Ok(TransactionStore { path, transactions })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Validate, derive net and VAT, and persist. On error nothing is
    /// written and the in-memory collection is left as it was.
    pub fn append(&mut self, new: NewTransaction) -> Result<Transaction> {
        if new.gross <= Decimal::ZERO {
            return Err(Error::NonPositiveGross(new.gross));
        }
        let vat_rate = vat::check_rate(new.vat_rate)?;
        let split = vat::split_gross(new.gross, vat_rate);
        let tx = Transaction {
            date: new.date,
            entry: new.entry,
            description: new.description.filter(|d| !d.trim().is_empty()),
            gross: new.gross,
            vat_rate,
            net: split.net,
            vat_amount: split.vat_amount,
        };

        self.transactions.push(tx.clone());
        if let Err(e) = save(&self.path, &self.transactions) {
            self.transactions.pop();
            return Err(e);
        }
        info!(
            path = %self.path.display(),
            count = self.transactions.len(),
            "appended {} of {}",
            tx.tx_type(),
            tx.gross
        );
        Ok(tx)
    }
}

/// Read every record from `path`; a missing file is an empty ledger.
pub fn load(path: &Path) -> Result<Vec<Transaction>> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file yet");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        out.push(columns.parse(i + 1, &rec)?);
    }
    debug!(path = %path.display(), rows = out.len(), "loaded transactions");
    Ok(out)
}

fn save(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut wtr = csv::Writer::from_writer(tmp.as_file_mut());
        wtr.write_record(HEADER)?;
        for tx in transactions {
            wtr.write_record(to_record(tx))?;
        }
        wtr.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    debug!(path = %path.display(), rows = transactions.len(), "rewrote data file");
    Ok(())
}

fn to_record(tx: &Transaction) -> [String; 9] {
    [
        tx.date.to_string(),
        tx.tx_type().to_string(),
        tx.channel().to_string(),
        tx.category().to_string(),
        tx.description.clone().unwrap_or_default(),
        tx.gross.normalize().to_string(),
        tx.vat_rate.normalize().to_string(),
        format!("{:.2}", tx.net),
        format!("{:.2}", tx.vat_amount),
    ]
}

/// Positions of the known columns, looked up by header name.
struct Columns {
    idx: [usize; 9],
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut idx = [0usize; 9];
        for (slot, name) in idx.iter_mut().zip(HEADER) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::InvalidRecord {
                    row: 0,
                    reason: format!("missing column '{}'", name),
                })?;
        }
        Ok(Columns { idx })
    }

    fn field<'r>(&self, rec: &'r StringRecord, col: usize) -> &'r str {
        rec.get(self.idx[col]).unwrap_or("").trim()
    }

    fn parse(&self, row: usize, rec: &StringRecord) -> Result<Transaction> {
        let invalid = |reason: String| Error::InvalidRecord { row, reason };
        let decimal = |col: usize| -> Result<Decimal> {
            let raw = self.field(rec, col);
            raw.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(raw))
                .map_err(|_| invalid(format!("{} '{}' is not a number", HEADER[col], raw)))
        };

        let raw_date = self.field(rec, 0);
        let date = crate::utils::parse_date(raw_date)
            .map_err(|_| invalid(format!("date '{}' is not YYYY-MM-DD", raw_date)))?;
        let tx_type: TxType = self.field(rec, 1).parse().map_err(invalid)?;
        let channel = self.field(rec, 2);
        let category: Category = self.field(rec, 3).parse().map_err(invalid)?;

        let entry = match tx_type {
            TxType::Sale => {
                if category != Category::Sales {
                    return Err(invalid(format!("sale booked under '{}'", category)));
                }
                let channel: SaleChannel = channel.parse().map_err(invalid)?;
                Entry::Sale { channel }
            }
            TxType::Expense => {
                let category = ExpenseCategory::try_from(category).map_err(invalid)?;
                Entry::Expense {
                    category,
                    source: channel.to_string(),
                }
            }
        };

        let description = Some(self.field(rec, 4))
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Transaction {
            date,
            entry,
            description,
            gross: decimal(5)?,
            vat_rate: decimal(6)?,
            net: decimal(7)?,
            vat_amount: decimal(8)?,
        })
    }
}
