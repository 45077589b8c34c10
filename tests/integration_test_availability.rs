mod common;

use chrono::{DateTime, Duration, Utc, Weekday};
use chrono_tz::Tz;

use common::{date, utc, week_open};
use salon_agenda::domain::models::appointment::{Appointment, NewAppointmentParams};
use salon_agenda::domain::models::schedule::{DaySchedule, TimeRange};
use salon_agenda::domain::services::availability::{
    available_dates, compute_slots, group_slots, validate_schedule, AvailabilityError,
};

const TZ: Tz = chrono_tz::UTC;

// 2030-06-03 is a Monday; "now" sits two days earlier so nothing is past.
fn monday() -> chrono::NaiveDate {
    date(2030, 6, 3)
}

fn two_days_before() -> DateTime<Utc> {
    utc(2030, 6, 1, 0, 0)
}

fn busy(start: DateTime<Utc>, minutes: i64) -> Appointment {
    Appointment::new(NewAppointmentParams {
        client_id: "c1".to_string(),
        client_name: "Cliente".to_string(),
        professional_id: "p1".to_string(),
        service_id: "s1".to_string(),
        service_name: "Serviço".to_string(),
        start,
        duration_min: minutes as i32,
        is_subscription: false,
    })
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    utc(2030, 6, 3, hour, minute)
}

#[test]
fn test_hourly_service_on_a_three_hour_morning() {
    let schedule = week_open(&[(9, 0, 12, 0)]);

    let slots = compute_slots(monday(), 60, &[], &schedule, TZ, two_days_before()).unwrap();

    // 11:00 + 60 fits exactly; 11:30 + 60 would spill past noon.
    let expected: Vec<_> = [(9, 0), (9, 30), (10, 0), (10, 30), (11, 0)]
        .iter()
        .map(|&(h, m)| at(h, m))
        .collect();
    assert_eq!(slots, expected);
}

#[test]
fn test_existing_appointment_blocks_overlapping_candidates() {
    let schedule = week_open(&[(9, 0, 12, 0)]);
    let taken = busy(at(9, 30), 60); // 09:30-10:30

    let slots = compute_slots(monday(), 30, &[taken], &schedule, TZ, two_days_before()).unwrap();

    let expected: Vec<_> = [(9, 0), (10, 30), (11, 0), (11, 30)]
        .iter()
        .map(|&(h, m)| at(h, m))
        .collect();
    assert_eq!(slots, expected);
}

#[test]
fn test_closed_day_is_an_explicit_signal() {
    let schedule = week_open(&[(9, 0, 12, 0)]);

    // 2030-06-09 is a Sunday.
    let err = compute_slots(date(2030, 6, 9), 30, &[], &schedule, TZ, two_days_before()).unwrap_err();

    assert_eq!(err, AvailabilityError::ClosedDay(Weekday::Sun));
}

#[test]
fn test_fully_booked_day_is_empty_not_an_error() {
    let schedule = week_open(&[(9, 0, 10, 0)]);
    let taken = busy(at(9, 0), 60);

    let slots = compute_slots(monday(), 60, &[taken], &schedule, TZ, two_days_before()).unwrap();

    assert!(slots.is_empty());
}

#[test]
fn test_non_positive_duration_is_rejected() {
    let schedule = week_open(&[(9, 0, 12, 0)]);

    let err = compute_slots(monday(), 0, &[], &schedule, TZ, two_days_before()).unwrap_err();
    assert_eq!(err, AvailabilityError::InvalidDuration(0));

    let err = compute_slots(monday(), -15, &[], &schedule, TZ, two_days_before()).unwrap_err();
    assert_eq!(err, AvailabilityError::InvalidDuration(-15));
}

#[test]
fn test_inverted_range_is_rejected() {
    let mut schedule = week_open(&[(9, 0, 12, 0)]);
    schedule.mon.ranges.push(TimeRange::from_hm(18, 0, 14, 0));

    let err = compute_slots(monday(), 30, &[], &schedule, TZ, two_days_before()).unwrap_err();

    assert!(matches!(err, AvailabilityError::InvalidRange { .. }));
}

#[test]
fn test_past_candidates_are_dropped() {
    let schedule = week_open(&[(9, 0, 12, 0)]);

    // Mid-morning on the target day itself: a slot starting exactly at the
    // current moment is still bookable, earlier ones are gone.
    let slots = compute_slots(monday(), 30, &[], &schedule, TZ, at(10, 30)).unwrap();

    let expected: Vec<_> = [(10, 30), (11, 0), (11, 30)]
        .iter()
        .map(|&(h, m)| at(h, m))
        .collect();
    assert_eq!(slots, expected);
}

#[test]
fn test_slots_never_straddle_a_break() {
    let schedule = week_open(&[(9, 0, 12, 0), (13, 0, 19, 0)]);

    let slots = compute_slots(monday(), 75, &[], &schedule, TZ, two_days_before()).unwrap();

    for slot in &slots {
        let end = *slot + Duration::minutes(75);
        let fits_morning = *slot >= at(9, 0) && end <= at(12, 0);
        let fits_afternoon = *slot >= at(13, 0) && end <= at(19, 0);
        assert!(fits_morning || fits_afternoon, "slot {slot} spills out of its range");
    }

    // Last morning start for 75 minutes is 10:30 (ends 11:45).
    assert!(slots.contains(&at(10, 30)));
    assert!(!slots.contains(&at(11, 0)));
    assert!(slots.contains(&at(13, 0)));
}

#[test]
fn test_declaration_order_does_not_leak_into_output() {
    let mut schedule = week_open(&[]);
    schedule.mon = DaySchedule::open(vec![
        TimeRange::from_hm(13, 0, 19, 0),
        TimeRange::from_hm(9, 0, 12, 0),
    ]);

    let slots = compute_slots(monday(), 60, &[], &schedule, TZ, two_days_before()).unwrap();

    assert!(slots.windows(2).all(|w| w[0] < w[1]), "output must be ascending");
    assert_eq!(slots.first(), Some(&at(9, 0)));
}

#[test]
fn test_overlapping_ranges_do_not_duplicate_slots() {
    let mut schedule = week_open(&[]);
    schedule.mon = DaySchedule::open(vec![
        TimeRange::from_hm(9, 0, 12, 0),
        TimeRange::from_hm(10, 0, 13, 0),
    ]);

    let slots = compute_slots(monday(), 30, &[], &schedule, TZ, two_days_before()).unwrap();

    let ten_oclock = slots.iter().filter(|s| **s == at(10, 0)).count();
    assert_eq!(ten_oclock, 1);
    assert!(slots.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_same_inputs_same_output() {
    let schedule = week_open(&[(9, 0, 12, 0), (13, 0, 19, 0)]);
    let taken = busy(at(14, 0), 45);

    let first = compute_slots(monday(), 30, &[taken.clone()], &schedule, TZ, two_days_before()).unwrap();
    let second = compute_slots(monday(), 30, &[taken], &schedule, TZ, two_days_before()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_appointments_on_other_days_do_not_block() {
    let schedule = week_open(&[(9, 0, 12, 0)]);
    let tuesday_visit = busy(utc(2030, 6, 4, 9, 0), 60);

    let slots = compute_slots(monday(), 60, &[tuesday_visit], &schedule, TZ, two_days_before()).unwrap();

    assert_eq!(slots.len(), 5);
}

#[test]
fn test_grouped_slots_split_by_local_period() {
    let slots = vec![at(9, 0), at(11, 30), at(14, 0), at(17, 30), at(18, 0), at(19, 30)];

    let grouped = group_slots(&slots, TZ);

    assert_eq!(grouped.morning, vec![at(9, 0), at(11, 30)]);
    assert_eq!(grouped.afternoon, vec![at(14, 0), at(17, 30)]);
    assert_eq!(grouped.evening, vec![at(18, 0), at(19, 30)]);
}

#[test]
fn test_available_dates_skip_closed_and_full_days() {
    // One bookable hour per day; Monday is fully taken, Sunday is closed.
    let schedule = week_open(&[(9, 0, 10, 0)]);
    let taken = busy(at(9, 0), 60);

    let dates = available_dates(
        monday(),
        date(2030, 6, 9),
        60,
        &[taken],
        &schedule,
        TZ,
        two_days_before(),
    )
    .unwrap();

    assert_eq!(
        dates,
        vec![
            date(2030, 6, 4),
            date(2030, 6, 5),
            date(2030, 6, 6),
            date(2030, 6, 7),
            date(2030, 6, 8),
        ]
    );
}

#[test]
fn test_available_dates_propagate_misconfiguration() {
    let schedule = week_open(&[(15, 0, 11, 0)]);

    let err = available_dates(monday(), date(2030, 6, 9), 30, &[], &schedule, TZ, two_days_before())
        .unwrap_err();

    assert!(matches!(err, AvailabilityError::InvalidRange { .. }));
}

#[test]
fn test_validate_schedule_checks_closed_days_too() {
    let mut schedule = week_open(&[(9, 0, 12, 0)]);
    schedule.sun.ranges.push(TimeRange::from_hm(12, 0, 9, 0));

    assert!(matches!(
        validate_schedule(&schedule),
        Err(AvailabilityError::InvalidRange { .. })
    ));

    assert!(validate_schedule(&week_open(&[(9, 0, 12, 0)])).is_ok());
}
