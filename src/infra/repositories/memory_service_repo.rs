use std::sync::RwLock;

use crate::domain::{models::service::Service, ports::ServiceRepository};
use crate::error::AppError;

pub struct MemoryServiceRepo {
    rows: RwLock<Vec<Service>>,
}

impl MemoryServiceRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryServiceRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRepository for MemoryServiceRepo {
    fn create(&self, service: &Service) -> Result<Service, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        if rows.iter().any(|s| s.id == service.id) {
            return Err(AppError::Conflict(format!("Service {} already exists", service.id)));
        }
        rows.push(service.clone());
        Ok(service.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows.iter().find(|s| s.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Service>, AppError> {
        Ok(self.rows.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn update(&self, service: &Service) -> Result<Service, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let row = rows
            .iter_mut()
            .find(|s| s.id == service.id)
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", service.id)))?;
        *row = service.clone();
        Ok(service.clone())
    }

    fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("Service {id} not found")));
        }
        Ok(())
    }
}
