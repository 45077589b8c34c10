use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::domain::{models::appointment::Appointment, ports::AppointmentRepository};
use crate::error::AppError;

pub struct MemoryAppointmentRepo {
    rows: RwLock<Vec<Appointment>>,
}

impl MemoryAppointmentRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryAppointmentRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentRepository for MemoryAppointmentRepo {
    fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        if rows.iter().any(|a| a.id == appointment.id) {
            return Err(AppError::Conflict(format!(
                "Appointment {} already exists",
                appointment.id
            )));
        }
        rows.push(appointment.clone());
        Ok(appointment.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(self.rows.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn list_by_professional(&self, professional_id: &str) -> Result<Vec<Appointment>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows
            .iter()
            .filter(|a| a.professional_id == professional_id)
            .cloned()
            .collect())
    }

    fn list_by_client(&self, client_id: &str) -> Result<Vec<Appointment>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows
            .iter()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect())
    }

    fn list_by_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows
            .iter()
            .filter(|a| a.start_time < end && a.end_time > start)
            .cloned()
            .collect())
    }

    fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let row = rows
            .iter_mut()
            .find(|a| a.id == appointment.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Appointment {} not found", appointment.id))
            })?;
        *row = appointment.clone();
        Ok(appointment.clone())
    }
}
