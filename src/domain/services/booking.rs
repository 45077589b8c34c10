use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::{info, warn};

use crate::domain::models::appointment::{Appointment, AppointmentStatus, NewAppointmentParams};
use crate::domain::ports::{
    AppointmentRepository, ClientRepository, EstablishmentRepository, ProfessionalRepository,
    ServiceRepository,
};
use crate::domain::services::availability::{
    available_dates, compute_slots, group_slots, GroupedSlots,
};
use crate::error::AppError;

pub struct BookingRequest {
    pub client_id: String,
    pub professional_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub use_credits: bool,
}

#[derive(Debug, Default)]
pub struct DaySummary {
    pub total: usize,
    pub scheduled: usize,
    pub projected_revenue: f64,
}

pub struct BookingService {
    establishment: Arc<dyn EstablishmentRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
    services: Arc<dyn ServiceRepository>,
    clients: Arc<dyn ClientRepository>,
    appointments: Arc<dyn AppointmentRepository>,
}

impl BookingService {
    pub fn new(
        establishment: Arc<dyn EstablishmentRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
        services: Arc<dyn ServiceRepository>,
        clients: Arc<dyn ClientRepository>,
        appointments: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            establishment,
            professionals,
            services,
            clients,
            appointments,
        }
    }

    /// Bookable start times for one professional, service and date.
    pub fn slots_for(
        &self,
        professional_id: &str,
        service_id: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, AppError> {
        let professional = self
            .professionals
            .find_by_id(professional_id)?
            .ok_or_else(|| AppError::NotFound(format!("Professional {professional_id} not found")))?;
        let service = self
            .services
            .find_by_id(service_id)?
            .ok_or_else(|| AppError::NotFound(format!("Service {service_id} not found")))?;

        let tz = self.establishment.get()?.tz();
        let blocking = self.blocking_appointments(professional_id)?;

        let slots = compute_slots(
            date,
            service.duration_minutes,
            &blocking,
            &professional.schedule,
            tz,
            now,
        )?;
        Ok(slots)
    }

    /// Same as `slots_for`, bucketed into morning/afternoon/evening.
    pub fn grouped_slots_for(
        &self,
        professional_id: &str,
        service_id: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<GroupedSlots, AppError> {
        let slots = self.slots_for(professional_id, service_id, date, now)?;
        let tz = self.establishment.get()?.tz();
        Ok(group_slots(&slots, tz))
    }

    /// Days in `[start, end]` on which the professional can still take the
    /// service at least once.
    pub fn available_dates_for(
        &self,
        professional_id: &str,
        service_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let professional = self
            .professionals
            .find_by_id(professional_id)?
            .ok_or_else(|| AppError::NotFound(format!("Professional {professional_id} not found")))?;
        let service = self
            .services
            .find_by_id(service_id)?
            .ok_or_else(|| AppError::NotFound(format!("Service {service_id} not found")))?;

        let tz = self.establishment.get()?.tz();
        let blocking = self.blocking_appointments(professional_id)?;

        let dates = available_dates(
            start,
            end,
            service.duration_minutes,
            &blocking,
            &professional.schedule,
            tz,
            now,
        )?;
        Ok(dates)
    }

    pub fn book(&self, request: BookingRequest, now: DateTime<Utc>) -> Result<Appointment, AppError> {
        let client = self
            .clients
            .find_by_id(&request.client_id)?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", request.client_id)))?;
        let service = self
            .services
            .find_by_id(&request.service_id)?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", request.service_id)))?;

        if request.use_credits {
            let subscription = client
                .active_subscription
                .as_ref()
                .filter(|s| s.active)
                .ok_or_else(|| {
                    AppError::Validation("Client has no active subscription".to_string())
                })?;
            if subscription.remaining_credits() <= 0 {
                return Err(AppError::Conflict("Subscription has no credits left".to_string()));
            }
        }

        let tz = self.establishment.get()?.tz();
        let start = tz
            .from_local_datetime(&request.date.and_time(request.time))
            .single()
            .ok_or_else(|| {
                AppError::Validation("Invalid local time (ambiguous or skipped due to DST)".to_string())
            })?
            .with_timezone(&Utc);

        if start < now {
            return Err(AppError::Validation("Cannot book in the past".to_string()));
        }

        let valid_slots =
            self.slots_for(&request.professional_id, &request.service_id, request.date, now)?;

        if !valid_slots.contains(&start) {
            warn!(
                "Booking rejected: slot {} not available. Valid slots: {:?}",
                start, valid_slots
            );
            return Err(AppError::Conflict(
                "Selected time slot is not available".to_string(),
            ));
        }

        let appointment = Appointment::new(NewAppointmentParams {
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            professional_id: request.professional_id.clone(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            start,
            duration_min: service.duration_minutes,
            is_subscription: request.use_credits,
        });

        let created = self.appointments.create(&appointment)?;
        info!(
            "Appointment confirmed: {} ({} for {})",
            created.id, created.service_name, created.client_name
        );
        Ok(created)
    }

    /// Moves an appointment through its lifecycle. The first transition into
    /// Completed stamps the client's last visit and, for credit-paid visits,
    /// consumes one credit (clamped at the plan total, which stays untouched
    /// otherwise: exhaustion never deactivates the subscription by itself).
    pub fn update_status(
        &self,
        appointment_id: &str,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let mut appointment = self
            .appointments
            .find_by_id(appointment_id)?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {appointment_id} not found")))?;

        let first_completion = new_status == AppointmentStatus::Completed
            && appointment.status != AppointmentStatus::Completed;
        appointment.status = new_status;

        if first_completion {
            let mut client = self
                .clients
                .find_by_id(&appointment.client_id)?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Client {} not found", appointment.client_id))
                })?;

            client.last_visit = Some(appointment.end_time);

            if appointment.is_subscription
                && let Some(sub) = client.active_subscription.as_mut()
                && sub.used_credits < sub.total_credits
            {
                sub.used_credits += 1;
                info!(
                    "Credit consumed for client {}: {}/{}",
                    client.id, sub.used_credits, sub.total_credits
                );
            }

            self.clients.update(&client)?;
        }

        self.appointments.update(&appointment)
    }

    /// Appointments for one day, optionally narrowed to a professional,
    /// ascending by start time.
    pub fn agenda(
        &self,
        date: NaiveDate,
        professional_id: Option<&str>,
    ) -> Result<Vec<Appointment>, AppError> {
        let tz = self.establishment.get()?.tz();

        let day_start_tz = tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            .single()
            .unwrap();
        let day_end_tz = tz
            .from_local_datetime(&date.and_hms_opt(23, 59, 59).unwrap())
            .single()
            .unwrap();

        let mut items: Vec<Appointment> = self
            .appointments
            .list_by_range(day_start_tz.with_timezone(&Utc), day_end_tz.with_timezone(&Utc))?
            .into_iter()
            .filter(|a| professional_id.map_or(true, |id| a.professional_id == id))
            .collect();

        items.sort_by_key(|a| a.start_time);
        Ok(items)
    }

    /// Headline numbers for the agenda view. Appointments whose service has
    /// been removed from the catalog count zero instead of failing the day.
    pub fn day_summary(
        &self,
        date: NaiveDate,
        professional_id: Option<&str>,
    ) -> Result<DaySummary, AppError> {
        let items = self.agenda(date, professional_id)?;
        let catalog = self.services.list()?;

        let mut summary = DaySummary {
            total: items.len(),
            ..Default::default()
        };

        for item in &items {
            if item.status == AppointmentStatus::Scheduled {
                summary.scheduled += 1;
            }
            if item.status != AppointmentStatus::Cancelled {
                summary.projected_revenue += catalog
                    .iter()
                    .find(|s| s.id == item.service_id)
                    .map_or(0.0, |s| s.price);
            }
        }

        Ok(summary)
    }

    /// A client's full visit record, newest first.
    pub fn client_history(&self, client_id: &str) -> Result<Vec<Appointment>, AppError> {
        if self.clients.find_by_id(client_id)?.is_none() {
            return Err(AppError::NotFound(format!("Client {client_id} not found")));
        }

        let mut items = self.appointments.list_by_client(client_id)?;
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(items)
    }

    fn blocking_appointments(&self, professional_id: &str) -> Result<Vec<Appointment>, AppError> {
        let items = self
            .appointments
            .list_by_professional(professional_id)?
            .into_iter()
            .filter(|a| a.status.blocks_slot())
            .collect();
        Ok(items)
    }
}
