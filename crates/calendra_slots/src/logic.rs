// --- File: crates/calendra_slots/src/logic.rs ---
use calendra_common::models::Booking;
use calendra_config::SlotsConfig;
use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

use crate::error::SlotsError;
use crate::models::{Slot, SlotsByDate};

/// Configuration for working hours and days
#[derive(Debug, Clone)]
pub struct WorkingHoursConfig {
    /// Time zone the working hours are expressed in
    pub time_zone: Tz,
    /// Start time of the working day (e.g., 9:00 AM)
    pub start_time: NaiveTime,
    /// End time of the working day (e.g., 5:00 PM); at or before the start
    /// means the shift ends the next day
    pub end_time: NaiveTime,
    /// Days of the week when appointments can be scheduled
    pub working_days: Vec<Weekday>,
}

impl WorkingHoursConfig {
    pub fn from_config(config: &SlotsConfig) -> Result<Self, SlotsError> {
        let parse_time = |value: &str| {
            NaiveTime::parse_from_str(value, "%H:%M")
                .map_err(|_| SlotsError::ConfigError(format!("invalid working time '{}'", value)))
        };
        let working_days = config
            .working_days
            .iter()
            .map(|day| {
                Weekday::from_str(day)
                    .map_err(|_| SlotsError::ConfigError(format!("invalid working day '{}'", day)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            time_zone: Tz::from_str(&config.default_time_zone)
                .map_err(|_| SlotsError::ConfigError(config.default_time_zone.clone()))?,
            start_time: parse_time(&config.work_start_time)?,
            end_time: parse_time(&config.work_end_time)?,
            working_days,
        })
    }
}

/// Configuration for appointment scheduling
#[derive(Debug, Clone)]
pub struct AppointmentConfig {
    pub event_type_id: i64,
    /// Duration of each appointment
    pub duration: Duration,
    /// Time step between candidate starts
    pub step: Duration,
    /// Free time required before and after the appointment
    pub before_buffer: Duration,
    pub after_buffer: Duration,
    /// How far ahead of `now` the earliest slot has to be
    pub minimum_notice: Duration,
    /// Seat capacity for seated event types
    pub seats: Option<u32>,
}

/// Sorts and merges overlapping or touching busy periods.
pub fn merge_busy_periods(
    busy: &[(DateTime<Utc>, DateTime<Utc>)],
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let mut sorted = busy.to_vec();
    sorted.sort_by_key(|(start, _)| *start);
    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn overlaps_merged(
    merged: &[(DateTime<Utc>, DateTime<Utc>)],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    let first_ending_after = merged.partition_point(|(_, busy_end)| *busy_end <= start);
    merged
        .get(first_ending_after)
        .map(|(busy_start, _)| *busy_start < end)
        .unwrap_or(false)
}

/// Resolves a local wall-clock time, moving forward out of DST gaps.
fn local_to_utc(time_zone: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    time_zone
        .from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            time_zone
                .from_local_datetime(&(local + Duration::hours(1)))
                .earliest()
        })
        .map(|t| t.with_timezone(&Utc))
}

fn working_window(
    day: NaiveDate,
    working_hours: &WorkingHoursConfig,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = local_to_utc(&working_hours.time_zone, day.and_time(working_hours.start_time))?;
    let end_day = if working_hours.end_time > working_hours.start_time {
        day
    } else {
        day.succ_opt()?
    };
    let end = local_to_utc(&working_hours.time_zone, end_day.and_time(working_hours.end_time))?;
    Some((start, end))
}

/// Calculates the free slots of an event type between `query_start` and
/// `query_end`.
///
/// Candidates start at the beginning of each working day and advance by
/// `appointment.step`. A candidate survives when it lies inside the query
/// window and the working day, respects the minimum notice relative to
/// `now`, and its buffered interval does not overlap a blocking booking.
/// For seated event types a booking of the same event type that still has
/// free seats does not block its own start time; the slot reports how many
/// attendees are already booked.
pub fn get_available_slots(
    query_start: DateTime<Utc>,
    query_end: DateTime<Utc>,
    appointment: &AppointmentConfig,
    working_hours: &WorkingHoursConfig,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> SlotsByDate {
    let mut available = SlotsByDate::new();
    if appointment.duration <= Duration::zero() || query_end <= query_start {
        return available;
    }
    let step = if appointment.step > Duration::zero() {
        appointment.step
    } else {
        appointment.duration
    };
    let earliest_start = now + appointment.minimum_notice;

    let is_open_seated = |booking: &Booking| match appointment.seats {
        Some(capacity) => {
            booking.event_type_id == Some(appointment.event_type_id)
                && (booking.attendees.len() as u32) < capacity
        }
        None => false,
    };
    let (open_seated, fixed): (Vec<&Booking>, Vec<&Booking>) = bookings
        .iter()
        .filter(|b| b.status.is_blocking())
        .partition(|b| is_open_seated(*b));
    let busy: Vec<(DateTime<Utc>, DateTime<Utc>)> =
        fixed.iter().map(|b| (b.start_time, b.end_time)).collect();
    let merged_busy = merge_busy_periods(&busy);

    debug!(
        "Calculating slots for event type {} between {} and {} ({} busy periods, {} open seated bookings)",
        appointment.event_type_id,
        query_start,
        query_end,
        merged_busy.len(),
        open_seated.len()
    );

    let time_zone = working_hours.time_zone;
    let mut day = query_start.with_timezone(&time_zone).date_naive();
    let last_day = query_end.with_timezone(&time_zone).date_naive();

    while day <= last_day {
        if working_hours.working_days.contains(&day.weekday()) {
            if let Some((day_start, day_end)) = working_window(day, working_hours) {
                let mut candidate = day_start;
                while candidate + appointment.duration <= day_end {
                    let end = candidate + appointment.duration;
                    if candidate >= query_start && end <= query_end && candidate >= earliest_start {
                        let window_start = candidate - appointment.before_buffer;
                        let window_end = end + appointment.after_buffer;
                        let seated_here = open_seated.iter().find(|b| b.start_time == candidate);
                        let blocked = overlaps_merged(&merged_busy, window_start, window_end)
                            || open_seated.iter().any(|b| {
                                seated_here.map_or(true, |here| here.uid != b.uid)
                                    && b.start_time < window_end
                                    && b.end_time > window_start
                            });

                        if !blocked {
                            let slot = match seated_here {
                                Some(booking) => Slot {
                                    time: candidate,
                                    attendees: Some(booking.attendees.len() as u32),
                                    booking_uid: Some(booking.uid.clone()),
                                },
                                None => Slot::free(candidate),
                            };
                            available
                                .entry(candidate.format("%Y-%m-%d").to_string())
                                .or_default()
                                .push(slot);
                        }
                    }
                    candidate += step;
                }
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    available
}

pub fn parse_time_zone(value: Option<&str>) -> Result<Tz, SlotsError> {
    match value {
        None => Ok(Tz::UTC),
        Some(name) => {
            Tz::from_str(name).map_err(|_| SlotsError::InvalidTimeZone(name.to_string()))
        }
    }
}

/// Parses a window bound given as RFC 3339 or as a date in `time_zone`.
///
/// A date used as the end of a window includes the whole day.
pub fn parse_window_bound(
    value: &str,
    time_zone: Tz,
    is_end: bool,
) -> Result<DateTime<Utc>, SlotsError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SlotsError::TimeParseError(value.to_string()))?;
    let date = if is_end {
        date.succ_opt()
            .ok_or_else(|| SlotsError::TimeParseError(value.to_string()))?
    } else {
        date
    };
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| local_to_utc(&time_zone, midnight))
        .ok_or_else(|| SlotsError::TimeParseError(value.to_string()))
}
