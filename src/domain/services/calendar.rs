use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

use crate::domain::models::{appointment::Appointment, establishment::Establishment};

/// Generates an iCalendar (.ics) string for a confirmed appointment
pub fn generate_ics(establishment: &Establishment, appointment: &Appointment) -> String {
    let location = establishment
        .address
        .as_ref()
        .map(|a| a.to_string())
        .unwrap_or_else(|| establishment.name.clone());

    let mut calendar = Calendar::new();

    let ical_event = IcalEvent::new()
        .summary(&format!("{} - {}", appointment.service_name, establishment.name))
        .description(&format!("Appointment for {}", appointment.client_name))
        .location(&location)
        .starts(appointment.start_time)
        .ends(appointment.end_time)
        .uid(&appointment.id)
        .done();

    calendar.push(ical_event);
    calendar.to_string()
}
