//! In-memory transaction list
//!
//! Transactions are kept in insertion order and addressed by 1-based
//! position, the same numbers the listings show.

use crate::error::{SaverError, SaverResult};
use crate::models::Transaction;

/// Insertion-ordered list of transactions
#[derive(Debug, Default)]
pub struct TransactionList {
    transactions: Vec<Transaction>,
}

impl TransactionList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and return its position
    pub fn add(&mut self, transaction: Transaction) -> usize {
        self.transactions.push(transaction);
        self.transactions.len()
    }

    /// Remove the transaction at `position`, shifting later ones up
    pub fn remove(&mut self, position: usize) -> SaverResult<Transaction> {
        if !self.contains_position(position) {
            return Err(SaverError::invalid_transaction_index(position));
        }
        Ok(self.transactions.remove(position - 1))
    }

    /// Get the transaction at `position`
    pub fn get(&self, position: usize) -> Option<&Transaction> {
        position
            .checked_sub(1)
            .and_then(|index| self.transactions.get(index))
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Iterate over `(position, transaction)` pairs
    pub fn iter_positioned(&self) -> impl Iterator<Item = (usize, &Transaction)> {
        self.transactions
            .iter()
            .enumerate()
            .map(|(index, txn)| (index + 1, txn))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn contains_position(&self, position: usize) -> bool {
        (1..=self.transactions.len()).contains(&position)
    }
}
