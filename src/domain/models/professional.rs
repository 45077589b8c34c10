use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::schedule::WeeklySchedule;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Barber,
    Manicure,
    Hairdresser,
    Esthetician,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Specific schedule, overrides the establishment default.
    pub schedule: WeeklySchedule,
}

impl Professional {
    pub fn new(name: String, role: Role, schedule: WeeklySchedule) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            role,
            schedule,
        }
    }
}
