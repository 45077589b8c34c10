use std::sync::RwLock;

use crate::domain::{models::plan::Plan, ports::PlanRepository};
use crate::error::AppError;

pub struct MemoryPlanRepo {
    rows: RwLock<Vec<Plan>>,
}

impl MemoryPlanRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryPlanRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanRepository for MemoryPlanRepo {
    fn create(&self, plan: &Plan) -> Result<Plan, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        if rows.iter().any(|p| p.id == plan.id) {
            return Err(AppError::Conflict(format!("Plan {} already exists", plan.id)));
        }
        rows.push(plan.clone());
        Ok(plan.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Plan>, AppError> {
        let rows = self.rows.read().map_err(|_| AppError::Internal)?;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Plan>, AppError> {
        Ok(self.rows.read().map_err(|_| AppError::Internal)?.clone())
    }

    fn update(&self, plan: &Plan) -> Result<Plan, AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let row = rows
            .iter_mut()
            .find(|p| p.id == plan.id)
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", plan.id)))?;
        *row = plan.clone();
        Ok(plan.clone())
    }

    fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.write().map_err(|_| AppError::Internal)?;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("Plan {id} not found")));
        }
        Ok(())
    }
}
