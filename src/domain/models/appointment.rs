use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment in this status still occupies its time slot.
    /// Cancelled and no-show visits free the slot for rebooking.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Completed)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub client_name: String, // Denormalized for ease
    pub professional_id: String,
    pub service_id: String,
    pub service_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub is_subscription: bool, // If paid with credits
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub client_id: String,
    pub client_name: String,
    pub professional_id: String,
    pub service_id: String,
    pub service_name: String,
    pub start: DateTime<Utc>,
    pub duration_min: i32,
    pub is_subscription: bool,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams) -> Self {
        let end_time = params.start + Duration::minutes(params.duration_min as i64);

        Self {
            id: Uuid::new_v4().to_string(),
            client_id: params.client_id,
            client_name: params.client_name,
            professional_id: params.professional_id,
            service_id: params.service_id,
            service_name: params.service_name,
            start_time: params.start,
            end_time,
            status: AppointmentStatus::Scheduled,
            is_subscription: params.is_subscription,
            created_at: Utc::now(),
        }
    }
}
