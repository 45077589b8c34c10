use std::sync::RwLock;

use crate::domain::{models::professional::Professional, ports::ProfessionalRepository};
use crate::error::AppError;

pub struct MemoryProfessionalRepo {
    rows: RwLock<Vec<Professional>>,
}

impl MemoryProfessionalRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryProfessionalRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfessionalRepository for MemoryProfessionalRepo {
    fn create(&self, professional: &Professional) -> Result<Professional, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        if rows.iter().any(|p| p.id == professional.id) {
            return Err(AppError::Conflict(format!(
                "Professional {} already exists",
                professional.id
            )));
        }
        rows.push(professional.clone());
        Ok(professional.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Professional>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Professional>, AppError> {
        Ok(self.rows.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn update(&self, professional: &Professional) -> Result<Professional, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let row = rows
            .iter_mut()
            .find(|p| p.id == professional.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Professional {} not found", professional.id))
            })?;
        *row = professional.clone();
        Ok(professional.clone())
    }
}
