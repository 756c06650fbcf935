//! Transaction model
//!
//! A single income or expense entry. Amounts are always stored positive;
//! the direction of the money flow is carried by `TransactionType`.

use chrono::NaiveDateTime;
use std::fmt;

use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Income or expense
    pub kind: TransactionType,

    /// Amount, always positive
    pub amount: Money,

    /// What the money was for
    pub description: String,

    /// Category label; not checked against the category list
    pub category: Option<String>,

    /// When the transaction happened
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionType,
        description: impl Into<String>,
        amount: Money,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category: None,
            timestamp,
        }
    }

    /// Create an income entry
    pub fn income(description: impl Into<String>, amount: Money, timestamp: NaiveDateTime) -> Self {
        Self::new(TransactionType::Income, description, amount, timestamp)
    }

    /// Create an expense entry
    pub fn expense(
        description: impl Into<String>,
        amount: Money,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(TransactionType::Expense, description, amount, timestamp)
    }

    /// Attach a category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Check whether the category label matches `name`, ignoring case
    pub fn in_category(&self, name: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(name.trim()))
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required."),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}.", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
