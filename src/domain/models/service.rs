use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Service,
    Combo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    #[serde(default)]
    pub kind: ServiceKind,
}

impl Service {
    pub fn new(name: String, price: f64, duration_minutes: i32, kind: ServiceKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            duration_minutes,
            kind,
        }
    }
}
