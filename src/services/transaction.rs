//! Transaction service
//!
//! Business logic for recording, deleting and querying transactions:
//! filtered views, keyword search and income/expense totals.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{SaverError, SaverResult};
use crate::models::{Money, Transaction, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

/// A transaction together with its 1-based position in the full list
pub type Positioned<'a> = (usize, &'a Transaction);

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by income or expense
    pub kind: Option<TransactionType>,
    /// Filter by category label (case-insensitive)
    pub category: Option<String>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Keep transactions matching any of these keywords
    pub keywords: Vec<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category label
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by the start of a date range
    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Filter by the end of a date range
    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by keywords
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Reject a range whose start lies after its end
    pub fn validate(&self) -> SaverResult<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(SaverError::Validation(format!(
                    "Start date {} is after end date {}.",
                    start, end
                )));
            }
        }
        Ok(())
    }

    /// Check whether a transaction passes every configured filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !txn.in_category(category) {
                return false;
            }
        }

        let date = txn.timestamp.date();
        if self.start_date.is_some_and(|start| date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| date > end) {
            return false;
        }

        if !self.keywords.is_empty() {
            let description = txn.description.to_lowercase();
            let category = txn.category.as_deref().unwrap_or_default().to_lowercase();
            return self
                .keywords
                .iter()
                .any(|k| description.contains(k.as_str()) || category.contains(k.as_str()));
        }

        true
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Income and expense totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub income_count: usize,
    pub expense_count: usize,
}

impl Totals {
    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    /// Total for one kind of transaction
    pub fn of_kind(&self, kind: TransactionType) -> Money {
        match kind {
            TransactionType::Income => self.income,
            TransactionType::Expense => self.expense,
        }
    }

    fn record(&mut self, txn: &Transaction) -> SaverResult<()> {
        let (sum, count) = match txn.kind {
            TransactionType::Income => (&mut self.income, &mut self.income_count),
            TransactionType::Expense => (&mut self.expense, &mut self.expense_count),
        };
        *sum = sum.checked_add(txn.amount).ok_or_else(|| {
            SaverError::Validation(format!("{} total is too large to calculate.", txn.kind))
        })?;
        *count += 1;
        Ok(())
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction, returning its position
    pub fn create(&mut self, input: CreateTransactionInput) -> SaverResult<(usize, Transaction)> {
        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let mut txn = Transaction::new(
            input.kind,
            input.description.trim(),
            input.amount,
            input.timestamp,
        );
        txn.category = category;

        txn.validate()
            .map_err(|e| SaverError::Validation(e.to_string()))?;

        let position = self.storage.transactions.add(txn.clone());
        log::debug!(
            "recorded {} #{}: {} ({} cents)",
            txn.kind,
            position,
            txn.description,
            txn.amount.cents()
        );

        Ok((position, txn))
    }

    /// Delete the transaction at `position`
    pub fn delete(&mut self, position: usize) -> SaverResult<Transaction> {
        let removed = self.storage.transactions.remove(position)?;
        log::debug!("deleted transaction #{}: {}", position, removed.description);
        Ok(removed)
    }

    /// List transactions matching `filter`, in insertion order
    pub fn list(&self, filter: &TransactionFilter) -> SaverResult<Vec<Positioned<'_>>> {
        filter.validate()?;
        Ok(self
            .storage
            .transactions
            .iter_positioned()
            .filter(|(_, txn)| filter.matches(txn))
            .collect())
    }

    /// List transactions matching `filter`, oldest first
    ///
    /// Transactions with equal timestamps keep their insertion order.
    pub fn history(&self, filter: &TransactionFilter) -> SaverResult<Vec<Positioned<'_>>> {
        let mut transactions = self.list(filter)?;
        transactions.sort_by_key(|(_, txn)| txn.timestamp);
        Ok(transactions)
    }

    /// Transactions whose description or category contains any keyword
    pub fn search<S: AsRef<str>>(&self, keywords: &[S]) -> SaverResult<Vec<Positioned<'_>>> {
        let filter = TransactionFilter::new().keywords(keywords);
        if filter.keywords.is_empty() {
            return Err(SaverError::Validation(
                "Please provide at least one keyword to search for.".into(),
            ));
        }
        self.list(&filter)
    }

    /// Sum income and expense over the transactions matching `filter`
    pub fn totals(&self, filter: &TransactionFilter) -> SaverResult<Totals> {
        let mut totals = Totals::default();
        for (_, txn) in self.list(filter)? {
            totals.record(txn)?;
        }
        Ok(totals)
    }
}
