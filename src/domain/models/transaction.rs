use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Service,
    SubscriptionSale,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        !matches!(self, TransactionKind::Expense)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: Option<String>, // e.g. "Aluguel", "Produtos"
}

impl Transaction {
    pub fn new(
        amount: f64,
        kind: TransactionKind,
        date: DateTime<Utc>,
        description: String,
        category: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            kind,
            date,
            description,
            category,
        }
    }
}
