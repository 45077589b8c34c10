#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use salon_agenda::config::Config;
use salon_agenda::domain::models::client::{Client, Subscription};
use salon_agenda::domain::models::professional::{Professional, Role};
use salon_agenda::domain::models::schedule::{DaySchedule, TimeRange, WeeklySchedule};
use salon_agenda::domain::models::service::{Service, ServiceKind};
use salon_agenda::infra::factory::bootstrap_state;
use salon_agenda::state::AppState;

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// A real state over the in-memory repositories, pinned to UTC and
    /// without the demo data set.
    pub fn new() -> Self {
        let config = Config {
            establishment_name: "Studio Teste".to_string(),
            owner_name: "Dona do Studio".to_string(),
            timezone: "UTC".to_string(),
            seed_demo_data: false,
        };
        Self {
            state: bootstrap_state(&config),
        }
    }

    pub fn add_professional(&self, name: &str, role: Role, schedule: WeeklySchedule) -> Professional {
        self.state
            .professional_repo
            .create(&Professional::new(name.to_string(), role, schedule))
            .unwrap()
    }

    pub fn add_service(&self, name: &str, price: f64, duration_minutes: i32) -> Service {
        self.state
            .service_repo
            .create(&Service::new(
                name.to_string(),
                price,
                duration_minutes,
                ServiceKind::Service,
            ))
            .unwrap()
    }

    pub fn add_client(&self, name: &str, phone: &str) -> Client {
        self.state
            .client_repo
            .create(&Client::new(name.to_string(), phone.to_string()))
            .unwrap()
    }

    pub fn add_subscriber(&self, name: &str, phone: &str, total: i32, used: i32) -> Client {
        let mut client = Client::new(name.to_string(), phone.to_string());
        client.active_subscription = Some(Subscription {
            id: Uuid::new_v4().to_string(),
            plan_name: "Plano Teste".to_string(),
            total_credits: total,
            used_credits: used,
            expires_at: utc(2031, 1, 1, 0, 0),
            active: true,
        });
        self.state.client_repo.create(&client).unwrap()
    }
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn open_day(ranges: &[(u32, u32, u32, u32)]) -> DaySchedule {
    DaySchedule::open(
        ranges
            .iter()
            .map(|&(sh, sm, eh, em)| TimeRange::from_hm(sh, sm, eh, em))
            .collect(),
    )
}

/// Monday through Saturday open with the given ranges, Sunday closed.
pub fn week_open(ranges: &[(u32, u32, u32, u32)]) -> WeeklySchedule {
    WeeklySchedule {
        mon: open_day(ranges),
        tue: open_day(ranges),
        wed: open_day(ranges),
        thu: open_day(ranges),
        fri: open_day(ranges),
        sat: open_day(ranges),
        sun: DaySchedule::closed(),
    }
}
