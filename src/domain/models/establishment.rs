use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::schedule::WeeklySchedule;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,    // UF
    pub zip_code: String, // CEP
    pub complement: Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} - {}, {}/{}",
            self.street, self.number, self.neighborhood, self.city, self.state
        )
    }
}

/// The business entity whose default schedule professionals may override.
/// Single-row: one establishment per running instance.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Establishment {
    pub name: String,
    pub owner_name: String,
    pub timezone: String,
    pub schedule: WeeklySchedule,
    pub address: Option<Address>,
}

impl Establishment {
    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(chrono_tz::UTC)
    }
}
