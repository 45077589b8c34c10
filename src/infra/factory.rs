use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::models::establishment::Establishment;
use crate::domain::ports::{
    AppointmentRepository, ClientRepository, EstablishmentRepository, PlanRepository,
    ProfessionalRepository, ServiceRepository, TransactionRepository,
};
use crate::domain::services::{
    booking::BookingService, catalog::CatalogService, clients::ClientService,
    defaults::default_schedule, finance::FinanceService, settings::SettingsService,
};
use crate::infra::repositories::{
    memory_appointment_repo::MemoryAppointmentRepo, memory_client_repo::MemoryClientRepo,
    memory_establishment_repo::MemoryEstablishmentRepo, memory_plan_repo::MemoryPlanRepo,
    memory_professional_repo::MemoryProfessionalRepo, memory_service_repo::MemoryServiceRepo,
    memory_transaction_repo::MemoryTransactionRepo,
};
use crate::infra::seed::seed_demo_data;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    let establishment = Establishment {
        name: config.establishment_name.clone(),
        owner_name: config.owner_name.clone(),
        timezone: config.timezone.clone(),
        schedule: default_schedule(),
        address: None,
    };

    let establishment_repo: Arc<dyn EstablishmentRepository> =
        Arc::new(MemoryEstablishmentRepo::new(establishment));
    let professional_repo: Arc<dyn ProfessionalRepository> =
        Arc::new(MemoryProfessionalRepo::new());
    let service_repo: Arc<dyn ServiceRepository> = Arc::new(MemoryServiceRepo::new());
    let plan_repo: Arc<dyn PlanRepository> = Arc::new(MemoryPlanRepo::new());
    let client_repo: Arc<dyn ClientRepository> = Arc::new(MemoryClientRepo::new());
    let appointment_repo: Arc<dyn AppointmentRepository> = Arc::new(MemoryAppointmentRepo::new());
    let transaction_repo: Arc<dyn TransactionRepository> = Arc::new(MemoryTransactionRepo::new());

    let booking_service = Arc::new(BookingService::new(
        establishment_repo.clone(),
        professional_repo.clone(),
        service_repo.clone(),
        client_repo.clone(),
        appointment_repo.clone(),
    ));
    let client_service = Arc::new(ClientService::new(client_repo.clone(), plan_repo.clone()));
    let finance_service = Arc::new(FinanceService::new(transaction_repo.clone()));
    let catalog_service = Arc::new(CatalogService::new(service_repo.clone(), plan_repo.clone()));
    let settings_service = Arc::new(SettingsService::new(
        establishment_repo.clone(),
        professional_repo.clone(),
    ));

    let state = AppState {
        config: config.clone(),
        establishment_repo,
        professional_repo,
        service_repo,
        plan_repo,
        client_repo,
        appointment_repo,
        transaction_repo,
        booking_service,
        client_service,
        finance_service,
        catalog_service,
        settings_service,
    };

    if config.seed_demo_data {
        info!("Seeding demo data...");
        seed_demo_data(&state).expect("Failed to seed demo data");
    }

    state
}
