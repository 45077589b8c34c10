pub mod appointment;
pub mod client;
pub mod establishment;
pub mod plan;
pub mod professional;
pub mod schedule;
pub mod service;
pub mod transaction;
