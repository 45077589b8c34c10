use std::sync::Arc;

use tracing::info;

use crate::domain::models::establishment::{Address, Establishment};
use crate::domain::models::professional::{Professional, Role};
use crate::domain::models::schedule::WeeklySchedule;
use crate::domain::ports::{EstablishmentRepository, ProfessionalRepository};
use crate::domain::services::availability::validate_schedule;
use crate::error::AppError;

pub struct SettingsService {
    establishment: Arc<dyn EstablishmentRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
}

impl SettingsService {
    pub fn new(
        establishment: Arc<dyn EstablishmentRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
    ) -> Self {
        Self {
            establishment,
            professionals,
        }
    }

    pub fn establishment(&self) -> Result<Establishment, AppError> {
        self.establishment.get()
    }

    pub fn update_profile(&self, name: String, owner_name: String) -> Result<Establishment, AppError> {
        if name.trim().is_empty() || owner_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Establishment and owner names are required".to_string(),
            ));
        }

        let mut establishment = self.establishment.get()?;
        establishment.name = name;
        establishment.owner_name = owner_name;
        self.establishment.update(&establishment)
    }

    pub fn set_establishment_schedule(
        &self,
        schedule: WeeklySchedule,
    ) -> Result<Establishment, AppError> {
        validate_schedule(&schedule)?;

        let mut establishment = self.establishment.get()?;
        establishment.schedule = schedule;

        let updated = self.establishment.update(&establishment)?;
        info!("Establishment schedule updated");
        Ok(updated)
    }

    pub fn set_address(&self, address: Address) -> Result<Establishment, AppError> {
        let mut establishment = self.establishment.get()?;
        establishment.address = Some(address);
        self.establishment.update(&establishment)
    }

    /// New team members start on the house schedule and diverge from there.
    pub fn add_professional(&self, name: String, role: Role) -> Result<Professional, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Professional name is required".to_string()));
        }

        let schedule = self.establishment.get()?.schedule;
        let created = self
            .professionals
            .create(&Professional::new(name, role, schedule))?;
        info!("Professional added: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub fn set_professional_schedule(
        &self,
        professional_id: &str,
        schedule: WeeklySchedule,
    ) -> Result<Professional, AppError> {
        validate_schedule(&schedule)?;

        let mut professional = self
            .professionals
            .find_by_id(professional_id)?
            .ok_or_else(|| AppError::NotFound(format!("Professional {professional_id} not found")))?;
        professional.schedule = schedule;

        let updated = self.professionals.update(&professional)?;
        info!("Schedule updated for professional {}", updated.id);
        Ok(updated)
    }

    pub fn list_professionals(&self) -> Result<Vec<Professional>, AppError> {
        self.professionals.list()
    }
}
