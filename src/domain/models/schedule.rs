use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// An open interval of wall-clock time within a single day.
///
/// `start < end` is validated where ranges are consumed, never assumed:
/// schedules arrive from an editing surface that cannot guarantee it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Convenience for schedule literals ("09:00" to "12:00" style).
    pub fn from_hm(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Self {
        Self {
            start: NaiveTime::from_hms_opt(start_h, start_m, 0).expect("valid wall-clock time"),
            end: NaiveTime::from_hms_opt(end_h, end_m, 0).expect("valid wall-clock time"),
        }
    }
}

/// Multiple ranges allow for breaks (e.g. 09-12, 13-18).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub is_open: bool,
    pub ranges: Vec<TimeRange>,
}

impl DaySchedule {
    pub fn open(ranges: Vec<TimeRange>) -> Self {
        Self { is_open: true, ranges }
    }

    pub fn closed() -> Self {
        Self::default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WeeklySchedule {
    pub mon: DaySchedule,
    pub tue: DaySchedule,
    pub wed: DaySchedule,
    pub thu: DaySchedule,
    pub fri: DaySchedule,
    pub sat: DaySchedule,
    pub sun: DaySchedule,
}

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DaySchedule {
        match weekday {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        [
            (Weekday::Mon, &self.mon),
            (Weekday::Tue, &self.tue),
            (Weekday::Wed, &self.wed),
            (Weekday::Thu, &self.thu),
            (Weekday::Fri, &self.fri),
            (Weekday::Sat, &self.sat),
            (Weekday::Sun, &self.sun),
        ]
        .into_iter()
    }
}
