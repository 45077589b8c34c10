use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::appointment::Appointment;
use crate::domain::models::schedule::WeeklySchedule;

/// Candidate starts are walked on a fixed half-hour grid.
pub const SLOT_STEP_MIN: i32 = 30;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("no opening hours on {0}")]
    ClosedDay(Weekday),
    #[error("service duration must be positive, got {0} minutes")]
    InvalidDuration(i32),
    #[error("schedule range ends at or before its start ({start}..{end})")]
    InvalidRange { start: NaiveTime, end: NaiveTime },
}

/// Computes the bookable start times for `date`, as UTC instants, sorted
/// ascending and deduplicated.
///
/// `existing` is taken as-is: every entry blocks its interval. Which statuses
/// still occupy a slot is the caller's decision (see
/// `AppointmentStatus::blocks_slot`). Candidates are local wall-clock times in
/// `tz`; an open day with no free candidate yields `Ok(vec![])`, which is
/// distinct from the error cases below.
pub fn compute_slots(
    date: NaiveDate,
    duration_min: i32,
    existing: &[Appointment],
    schedule: &WeeklySchedule,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>, AvailabilityError> {
    if duration_min <= 0 {
        return Err(AvailabilityError::InvalidDuration(duration_min));
    }

    let day = schedule.day(date.weekday());
    if !day.is_open {
        return Err(AvailabilityError::ClosedDay(date.weekday()));
    }

    for range in &day.ranges {
        if range.start >= range.end {
            return Err(AvailabilityError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
    }

    let mut slots = Vec::new();

    for range in &day.ranges {
        let end_min = minute_of_day(range.end);
        let mut cursor = minute_of_day(range.start);

        // The slot must fit entirely inside the range: no overflow past a
        // break or closing time.
        while cursor + duration_min <= end_min {
            let time = NaiveTime::from_hms_opt((cursor / 60) as u32, (cursor % 60) as u32, 0)
                .expect("cursor stays within one day");

            // DST-skipped local times have no UTC instant; drop the candidate.
            if let Some(local) = tz.from_local_datetime(&date.and_time(time)).single() {
                let slot_start = local.with_timezone(&Utc);
                let slot_end = slot_start + Duration::minutes(duration_min as i64);

                let busy = existing
                    .iter()
                    .any(|a| slot_start < a.end_time && slot_end > a.start_time);

                if slot_start >= now && !busy {
                    slots.push(slot_start);
                }
            }

            cursor += SLOT_STEP_MIN;
        }
    }

    // Declaration order of the ranges is not trusted; overlapping ranges
    // must not yield the same start twice.
    slots.sort();
    slots.dedup();
    Ok(slots)
}

/// Days in `[start, end]` that still have at least one bookable slot.
/// Closed days are skipped; misconfiguration errors propagate.
pub fn available_dates(
    start: NaiveDate,
    end: NaiveDate,
    duration_min: i32,
    existing: &[Appointment],
    schedule: &WeeklySchedule,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<Vec<NaiveDate>, AvailabilityError> {
    let mut dates = Vec::new();
    let mut date = start;

    while date <= end {
        match compute_slots(date, duration_min, existing, schedule, tz, now) {
            Ok(slots) if !slots.is_empty() => dates.push(date),
            Ok(_) | Err(AvailabilityError::ClosedDay(_)) => {}
            Err(e) => return Err(e),
        }
        date = date + Duration::days(1);
    }

    Ok(dates)
}

#[derive(Debug, Default, Serialize)]
pub struct GroupedSlots {
    pub morning: Vec<DateTime<Utc>>,
    pub afternoon: Vec<DateTime<Utc>>,
    pub evening: Vec<DateTime<Utc>>,
}

/// Buckets slots by local wall-clock period for display.
pub fn group_slots(slots: &[DateTime<Utc>], tz: Tz) -> GroupedSlots {
    let mut grouped = GroupedSlots::default();

    for slot in slots {
        let hour = slot.with_timezone(&tz).hour();
        if hour < 12 {
            grouped.morning.push(*slot);
        } else if hour < 18 {
            grouped.afternoon.push(*slot);
        } else {
            grouped.evening.push(*slot);
        }
    }

    grouped
}

/// Rejects a schedule containing an inverted range, on open days or not:
/// a closed day may be toggled open later without re-editing its ranges.
pub fn validate_schedule(schedule: &WeeklySchedule) -> Result<(), AvailabilityError> {
    for (_, day) in schedule.days() {
        for range in &day.ranges {
            if range.start >= range.end {
                return Err(AvailabilityError::InvalidRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
    }
    Ok(())
}

fn minute_of_day(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}
