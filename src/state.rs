use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    AppointmentRepository, ClientRepository, EstablishmentRepository, PlanRepository,
    ProfessionalRepository, ServiceRepository, TransactionRepository,
};
use crate::domain::services::{
    booking::BookingService, catalog::CatalogService, clients::ClientService,
    finance::FinanceService, settings::SettingsService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub establishment_repo: Arc<dyn EstablishmentRepository>,
    pub professional_repo: Arc<dyn ProfessionalRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub plan_repo: Arc<dyn PlanRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub transaction_repo: Arc<dyn TransactionRepository>,
    pub booking_service: Arc<BookingService>,
    pub client_service: Arc<ClientService>,
    pub finance_service: Arc<FinanceService>,
    pub catalog_service: Arc<CatalogService>,
    pub settings_service: Arc<SettingsService>,
}
