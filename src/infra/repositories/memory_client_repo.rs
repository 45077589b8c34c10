use std::sync::RwLock;

use crate::domain::{models::client::Client, ports::ClientRepository};
use crate::error::AppError;

pub struct MemoryClientRepo {
    rows: RwLock<Vec<Client>>,
}

impl MemoryClientRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryClientRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRepository for MemoryClientRepo {
    fn create(&self, client: &Client) -> Result<Client, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        if rows.iter().any(|c| c.id == client.id) {
            return Err(AppError::Conflict(format!("Client {} already exists", client.id)));
        }
        rows.push(client.clone());
        Ok(client.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Client>, AppError> {
        Ok(self.rows.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn update(&self, client: &Client) -> Result<Client, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let row = rows
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", client.id)))?;
        *row = client.clone();
        Ok(client.clone())
    }
}
