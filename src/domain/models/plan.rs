use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Credits,
    Unlimited,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub kind: PlanKind,
    /// Ignored for unlimited plans.
    pub credits: i32,
    pub validity_days: i64,
}

impl Plan {
    pub fn new(name: String, price: f64, kind: PlanKind, credits: i32, validity_days: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            kind,
            credits,
            validity_days,
        }
    }
}
