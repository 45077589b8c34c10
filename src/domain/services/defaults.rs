use crate::domain::models::professional::Role;
use crate::domain::models::schedule::{DaySchedule, TimeRange, WeeklySchedule};
use crate::domain::models::service::{Service, ServiceKind};

/// Weekday hours with a lunch break, a shorter Saturday, Sunday closed.
pub fn default_schedule() -> WeeklySchedule {
    let weekday = DaySchedule::open(vec![
        TimeRange::from_hm(9, 0, 12, 0),
        TimeRange::from_hm(13, 0, 19, 0),
    ]);

    WeeklySchedule {
        mon: weekday.clone(),
        tue: weekday.clone(),
        wed: weekday.clone(),
        thu: weekday.clone(),
        fri: weekday,
        sat: DaySchedule::open(vec![TimeRange::from_hm(9, 0, 17, 0)]),
        sun: DaySchedule::closed(),
    }
}

/// Starter catalog offered when onboarding a professional of the given role.
pub fn default_services(role: Role) -> Vec<Service> {
    match role {
        Role::Barber => vec![
            Service::new("Corte Degradê".to_string(), 50.0, 45, ServiceKind::Service),
            Service::new("Barba Modelada".to_string(), 40.0, 30, ServiceKind::Service),
            Service::new("Combo Corte + Barba".to_string(), 90.0, 75, ServiceKind::Combo),
            Service::new("Selagem Masculina".to_string(), 80.0, 60, ServiceKind::Service),
        ],
        Role::Manicure => vec![
            Service::new("Mão Simples".to_string(), 35.0, 40, ServiceKind::Service),
            Service::new("Spa dos Pés + Mão".to_string(), 85.0, 90, ServiceKind::Combo),
            Service::new("Esmaltação em Gel".to_string(), 70.0, 60, ServiceKind::Service),
        ],
        Role::Hairdresser => vec![
            Service::new("Corte + Escova".to_string(), 120.0, 60, ServiceKind::Combo),
            Service::new("Escova Modelada".to_string(), 60.0, 40, ServiceKind::Service),
            Service::new("Hidratação".to_string(), 150.0, 50, ServiceKind::Service),
        ],
        Role::Esthetician => vec![
            Service::new("Limpeza de Pele Profunda".to_string(), 140.0, 70, ServiceKind::Service),
            Service::new("Drenagem Linfática".to_string(), 100.0, 50, ServiceKind::Service),
        ],
    }
}
