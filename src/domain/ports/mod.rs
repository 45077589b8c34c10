use chrono::{DateTime, Utc};

use crate::domain::models::{
    appointment::Appointment, client::Client, establishment::Establishment, plan::Plan,
    professional::Professional, service::Service, transaction::Transaction,
};
use crate::error::AppError;

/// Single-row store for the business entity itself.
pub trait EstablishmentRepository: Send + Sync {
    fn get(&self) -> Result<Establishment, AppError>;
    fn update(&self, establishment: &Establishment) -> Result<Establishment, AppError>;
}

pub trait ProfessionalRepository: Send + Sync {
    fn create(&self, professional: &Professional) -> Result<Professional, AppError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Professional>, AppError>;
    fn list(&self) -> Result<Vec<Professional>, AppError>;
    fn update(&self, professional: &Professional) -> Result<Professional, AppError>;
}

pub trait ServiceRepository: Send + Sync {
    fn create(&self, service: &Service) -> Result<Service, AppError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError>;
    fn list(&self) -> Result<Vec<Service>, AppError>;
    fn update(&self, service: &Service) -> Result<Service, AppError>;
    fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub trait PlanRepository: Send + Sync {
    fn create(&self, plan: &Plan) -> Result<Plan, AppError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Plan>, AppError>;
    fn list(&self) -> Result<Vec<Plan>, AppError>;
    fn update(&self, plan: &Plan) -> Result<Plan, AppError>;
    fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub trait ClientRepository: Send + Sync {
    fn create(&self, client: &Client) -> Result<Client, AppError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError>;
    fn list(&self) -> Result<Vec<Client>, AppError>;
    fn update(&self, client: &Client) -> Result<Client, AppError>;
}

pub trait AppointmentRepository: Send + Sync {
    fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;
    fn list(&self) -> Result<Vec<Appointment>, AppError>;
    fn list_by_professional(&self, professional_id: &str) -> Result<Vec<Appointment>, AppError>;
    fn list_by_client(&self, client_id: &str) -> Result<Vec<Appointment>, AppError>;
    fn list_by_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppError>;
    fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
}

pub trait TransactionRepository: Send + Sync {
    fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError>;
    fn list(&self) -> Result<Vec<Transaction>, AppError>;
    fn list_by_month(&self, year: i32, month: u32) -> Result<Vec<Transaction>, AppError>;
}
