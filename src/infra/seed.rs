use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::models::appointment::{Appointment, AppointmentStatus, NewAppointmentParams};
use crate::domain::models::client::{Client, Subscription};
use crate::domain::models::plan::{Plan, PlanKind};
use crate::domain::models::professional::{Professional, Role};
use crate::domain::models::schedule::DaySchedule;
use crate::domain::models::service::Service;
use crate::domain::models::transaction::{Transaction, TransactionKind};
use crate::domain::services::defaults::{default_schedule, default_services};
use crate::error::AppError;
use crate::state::AppState;

/// Populates a freshly bootstrapped state with a demo data set anchored to
/// the current day, so the agenda and the ledger have something to show.
pub fn seed_demo_data(state: &AppState) -> Result<(), AppError> {
    let now = Utc::now();

    // Team. Fernanda takes Mondays off.
    let larissa = state.professional_repo.create(&Professional::new(
        "Larissa Costa".to_string(),
        Role::Hairdresser,
        default_schedule(),
    ))?;
    let mut folga_segunda = default_schedule();
    folga_segunda.mon = DaySchedule::closed();
    let fernanda = state.professional_repo.create(&Professional::new(
        "Fernanda Alves".to_string(),
        Role::Manicure,
        folga_segunda,
    ))?;
    let tiago = state.professional_repo.create(&Professional::new(
        "Tiago Silva".to_string(),
        Role::Barber,
        default_schedule(),
    ))?;

    let mut services = Vec::new();
    for service in default_services(Role::Barber) {
        services.push(state.service_repo.create(&service)?);
    }

    let escova_plan = state.plan_repo.create(&Plan::new(
        "Clube da Escova".to_string(),
        199.90,
        PlanKind::Credits,
        4,
        30,
    ))?;
    let maos_plan = state.plan_repo.create(&Plan::new(
        "Mãos de Fada".to_string(),
        280.0,
        PlanKind::Credits,
        4,
        45,
    ))?;
    state.plan_repo.create(&Plan::new(
        "Sempre Bela (Ilimitado)".to_string(),
        450.0,
        PlanKind::Unlimited,
        0,
        30,
    ))?;

    let mariana = {
        let mut client = Client::new("Mariana Lima".to_string(), "(81) 99234-5678".to_string());
        client.active_subscription = Some(subscription(&escova_plan.name, 4, 1, now + Duration::days(15)));
        state.client_repo.create(&client)?
    };
    let joao = state.client_repo.create(&Client::new(
        "João Pedro Gomes".to_string(),
        "(81) 98877-4433".to_string(),
    ))?;
    let camila = {
        let mut client = Client::new("Camila Queiroz".to_string(), "(81) 99665-2211".to_string());
        // Low balance on purpose.
        client.active_subscription = Some(subscription(&maos_plan.name, 4, 3, now + Duration::days(5)));
        state.client_repo.create(&client)?
    };
    let rafael = state.client_repo.create(&Client::new(
        "Rafael Vasconcelos".to_string(),
        "(81) 99911-0022".to_string(),
    ))?;

    let corte = &services[0];
    let barba = &services[1];
    let selagem = &services[3];

    // Today's agenda: one finished credit visit, the rest still to come.
    let mut done = appointment(&mariana, &larissa, barba, today_at(now, 10, 0), true);
    done.status = AppointmentStatus::Completed;
    state.appointment_repo.create(&done)?;

    state.appointment_repo.create(&appointment(&joao, &tiago, corte, today_at(now, 11, 0), false))?;
    state.appointment_repo.create(&appointment(&camila, &larissa, selagem, today_at(now, 14, 0), true))?;
    state.appointment_repo.create(&appointment(&rafael, &tiago, barba, today_at(now, 15, 30), false))?;

    // Tomorrow and yesterday, so date filters have edges to hit.
    state.appointment_repo.create(&appointment(&mariana, &fernanda, corte, days_from_today(now, 1, 9, 0), false))?;
    let mut past = appointment(&camila, &larissa, selagem, days_from_today(now, -1, 16, 0), false);
    past.status = AppointmentStatus::Completed;
    state.appointment_repo.create(&past)?;

    // Ledger: current month, last month, and one projected renewal.
    let ledger = [
        (60.0, TransactionKind::Service, today_at(now, 10, 45), "Escova - Mariana Lima", None),
        (85.0, TransactionKind::Service, month_at(now, 0, 5), "Spa Pés e Mãos - Amanda", None),
        (350.0, TransactionKind::Expense, month_at(now, 0, 2), "Conta de energia", Some("Contas")),
        (120.0, TransactionKind::Expense, today_at(now, 14, 0), "Produtos Vertix/Wella", Some("Suprimentos")),
        (199.90, TransactionKind::SubscriptionSale, month_at(now, -1, 15), "Clube da Escova - Mariana", None),
        (50.0, TransactionKind::Service, month_at(now, -1, 20), "Corte Masc - João", None),
        (280.0, TransactionKind::SubscriptionSale, month_at(now, -1, 10), "Mãos de Fada - Camila Q.", None),
        (199.90, TransactionKind::SubscriptionSale, month_at(now, 1, 1), "Renovação - Mariana Lima", None),
    ];
    for (amount, kind, date, description, category) in ledger {
        state.transaction_repo.create(&Transaction::new(
            amount,
            kind,
            date,
            description.to_string(),
            category.map(str::to_string),
        ))?;
    }

    Ok(())
}

fn subscription(plan_name: &str, total: i32, used: i32, expires_at: DateTime<Utc>) -> Subscription {
    Subscription {
        id: Uuid::new_v4().to_string(),
        plan_name: plan_name.to_string(),
        total_credits: total,
        used_credits: used,
        expires_at,
        active: true,
    }
}

fn appointment(
    client: &Client,
    professional: &Professional,
    service: &Service,
    start: DateTime<Utc>,
    is_subscription: bool,
) -> Appointment {
    Appointment::new(NewAppointmentParams {
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        professional_id: professional.id.clone(),
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        start,
        duration_min: service.duration_minutes,
        is_subscription,
    })
}

fn today_at(now: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&now.date_naive().and_hms_opt(hour, minute, 0).unwrap())
}

fn days_from_today(now: DateTime<Utc>, days: i64, hour: u32, minute: u32) -> DateTime<Utc> {
    let date = now.date_naive() + Duration::days(days);
    Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
}

fn month_at(now: DateTime<Utc>, months: i32, day: u32) -> DateTime<Utc> {
    let shifted = if months >= 0 {
        now.date_naive().checked_add_months(Months::new(months as u32))
    } else {
        now.date_naive().checked_sub_months(Months::new(months.unsigned_abs()))
    }
    .expect("month arithmetic stays in range");

    let date = shifted.with_day(day).unwrap_or(shifted);
    Utc.from_utc_datetime(&date.and_hms_opt(10, 0, 0).unwrap())
}
