use std::sync::RwLock;

use crate::domain::{models::establishment::Establishment, ports::EstablishmentRepository};
use crate::error::AppError;

pub struct MemoryEstablishmentRepo {
    row: RwLock<Establishment>,
}

impl MemoryEstablishmentRepo {
    pub fn new(initial: Establishment) -> Self {
        Self {
            row: RwLock::new(initial),
        }
    }
}

impl EstablishmentRepository for MemoryEstablishmentRepo {
    fn get(&self) -> Result<Establishment, AppError> {
        Ok(self.row.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn update(&self, establishment: &Establishment) -> Result<Establishment, AppError> {
        let mut row = self.row.write().map_err(|_| AppError::Internal)?;
        *row = establishment.clone();
        Ok(establishment.clone())
    }
}
