use std::sync::Arc;

use tracing::info;

use crate::domain::models::plan::{Plan, PlanKind};
use crate::domain::models::service::{Service, ServiceKind};
use crate::domain::ports::{PlanRepository, ServiceRepository};
use crate::error::AppError;

pub struct CatalogService {
    services: Arc<dyn ServiceRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl CatalogService {
    pub fn new(services: Arc<dyn ServiceRepository>, plans: Arc<dyn PlanRepository>) -> Self {
        Self { services, plans }
    }

    pub fn add_service(
        &self,
        name: String,
        price: f64,
        duration_minutes: i32,
        kind: ServiceKind,
    ) -> Result<Service, AppError> {
        validate_service_fields(&name, price, duration_minutes)?;

        let created = self
            .services
            .create(&Service::new(name, price, duration_minutes, kind))?;
        info!("Service added to catalog: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub fn update_service(&self, service: &Service) -> Result<Service, AppError> {
        validate_service_fields(&service.name, service.price, service.duration_minutes)?;
        self.services.update(service)
    }

    pub fn remove_service(&self, id: &str) -> Result<(), AppError> {
        self.services.delete(id)
    }

    pub fn list_services(&self) -> Result<Vec<Service>, AppError> {
        self.services.list()
    }

    pub fn add_plan(
        &self,
        name: String,
        price: f64,
        kind: PlanKind,
        credits: i32,
        validity_days: i64,
    ) -> Result<Plan, AppError> {
        validate_plan_fields(&name, price, kind, credits, validity_days)?;

        let created = self
            .plans
            .create(&Plan::new(name, price, kind, credits, validity_days))?;
        info!("Plan added: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub fn update_plan(&self, plan: &Plan) -> Result<Plan, AppError> {
        validate_plan_fields(&plan.name, plan.price, plan.kind, plan.credits, plan.validity_days)?;
        self.plans.update(plan)
    }

    pub fn remove_plan(&self, id: &str) -> Result<(), AppError> {
        self.plans.delete(id)
    }

    pub fn list_plans(&self) -> Result<Vec<Plan>, AppError> {
        self.plans.list()
    }
}

fn validate_service_fields(name: &str, price: f64, duration_minutes: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Service name is required".to_string()));
    }
    if price <= 0.0 {
        return Err(AppError::Validation("Service price must be positive".to_string()));
    }
    if duration_minutes <= 0 {
        return Err(AppError::Validation(
            "Service duration must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_plan_fields(
    name: &str,
    price: f64,
    kind: PlanKind,
    credits: i32,
    validity_days: i64,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Plan name is required".to_string()));
    }
    if price <= 0.0 {
        return Err(AppError::Validation("Plan price must be positive".to_string()));
    }
    if validity_days <= 0 {
        return Err(AppError::Validation(
            "Plan validity must be positive".to_string(),
        ));
    }
    if kind == PlanKind::Credits && credits <= 0 {
        return Err(AppError::Validation(
            "Credit plans need a positive credit total".to_string(),
        ));
    }
    Ok(())
}
