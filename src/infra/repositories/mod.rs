pub mod memory_appointment_repo;
pub mod memory_client_repo;
pub mod memory_establishment_repo;
pub mod memory_plan_repo;
pub mod memory_professional_repo;
pub mod memory_service_repo;
pub mod memory_transaction_repo;
