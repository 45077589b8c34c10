use std::sync::RwLock;

use chrono::Datelike;

use crate::domain::{models::transaction::Transaction, ports::TransactionRepository};
use crate::error::AppError;

pub struct MemoryTransactionRepo {
    rows: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryTransactionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionRepository for MemoryTransactionRepo {
    fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        if rows.iter().any(|t| t.id == transaction.id) {
            return Err(AppError::Conflict(format!(
                "Transaction {} already exists",
                transaction.id
            )));
        }
        rows.push(transaction.clone());
        Ok(transaction.clone())
    }

    fn list(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.rows.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn list_by_month(&self, year: i32, month: u32) -> Result<Vec<Transaction>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows
            .iter()
            .filter(|t| t.date.year() == year && t.date.month() == month)
            .cloned()
            .collect())
    }
}
