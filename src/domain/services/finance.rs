use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::domain::models::transaction::{Transaction, TransactionKind};
use crate::domain::ports::TransactionRepository;
use crate::error::AppError;

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
    /// Revenue from plan sales, excluded from the average ticket.
    pub subscription: f64,
    pub avg_ticket: f64,
}

pub struct FinanceService {
    transactions: Arc<dyn TransactionRepository>,
}

impl FinanceService {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub fn record(
        &self,
        amount: f64,
        kind: TransactionKind,
        date: DateTime<Utc>,
        description: String,
        category: Option<String>,
    ) -> Result<Transaction, AppError> {
        if amount <= 0.0 {
            return Err(AppError::Validation(
                "Transaction amount must be positive".to_string(),
            ));
        }

        let created = self
            .transactions
            .create(&Transaction::new(amount, kind, date, description, category))?;
        info!(
            "Transaction recorded: {} ({:?} {:.2})",
            created.id, created.kind, created.amount
        );
        Ok(created)
    }

    /// One month of the ledger, newest first.
    pub fn month_statement(&self, year: i32, month: u32) -> Result<Vec<Transaction>, AppError> {
        let mut items = self.transactions.list_by_month(year, month)?;
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    pub fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlySummary, AppError> {
        let mut income = 0.0;
        let mut expense = 0.0;
        let mut subscription = 0.0;
        let mut service_count = 0u32;

        for t in self.transactions.list_by_month(year, month)? {
            match t.kind {
                TransactionKind::Expense => expense += t.amount,
                kind => {
                    income += t.amount;
                    if kind == TransactionKind::SubscriptionSale {
                        subscription += t.amount;
                    }
                    if kind == TransactionKind::Service {
                        service_count += 1;
                    }
                }
            }
        }

        let avg_ticket = if service_count > 0 {
            (income - subscription) / service_count as f64
        } else {
            0.0
        };

        Ok(MonthlySummary {
            income,
            expense,
            profit: income - expense,
            subscription,
            avg_ticket,
        })
    }
}
