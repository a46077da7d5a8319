#[cfg(test)]
mod tests {
    use crate::logic::{
        get_available_slots, merge_busy_periods, AppointmentConfig, WorkingHoursConfig,
    };
    use calendra_common::models::{Booking, BookingStatus};
    use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap()
    }

    fn busy_bookings(offsets: &[(i64, i64)]) -> Vec<Booking> {
        offsets
            .iter()
            .enumerate()
            .map(|(i, (start_minutes, length))| Booking {
                uid: format!("b{}", i),
                event_type_id: Some(42),
                start_time: base() + Duration::minutes(*start_minutes),
                end_time: base() + Duration::minutes(start_minutes + length),
                status: BookingStatus::Accepted,
                attendees: vec![],
            })
            .collect()
    }

    proptest! {
        #[test]
        fn slots_respect_working_hours_and_bookings(
            duration_minutes in 15..120i64,
            step_minutes in 5..60i64,
            work_start_hour in 0..10u32,
            work_end_hour in 12..23u32,
            days in 1..10i64,
            notice_minutes in 0..600i64,
            busy in prop::collection::vec((0..14_400i64, 15..240i64), 0..12),
            zone in prop::sample::select(vec![Tz::UTC, Tz::Europe__Zurich, Tz::America__New_York]),
        ) {
            let working_hours = WorkingHoursConfig {
                time_zone: zone,
                start_time: NaiveTime::from_hms_opt(work_start_hour, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(work_end_hour, 0, 0).unwrap(),
                working_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
            };
            let appointment = AppointmentConfig {
                event_type_id: 1,
                duration: Duration::minutes(duration_minutes),
                step: Duration::minutes(step_minutes),
                before_buffer: Duration::zero(),
                after_buffer: Duration::zero(),
                minimum_notice: Duration::minutes(notice_minutes),
                seats: None,
            };
            let bookings = busy_bookings(&busy);
            let start = base();
            let end = base() + Duration::days(days);
            let now = base() + Duration::hours(1);

            let slots = get_available_slots(start, end, &appointment, &working_hours, &bookings, now);

            let periods: Vec<_> = bookings.iter().map(|b| (b.start_time, b.end_time)).collect();
            let merged = merge_busy_periods(&periods);
            let mut previous: Option<DateTime<Utc>> = None;

            for (date, day) in &slots {
                for slot in day {
                    let slot_end = slot.time + appointment.duration;
                    prop_assert_eq!(&slot.time.format("%Y-%m-%d").to_string(), date);
                    prop_assert!(slot.time >= start && slot_end <= end);
                    prop_assert!(slot.time >= now + appointment.minimum_notice);

                    let local = slot.time.with_timezone(&zone);
                    prop_assert!(working_hours.working_days.contains(&local.weekday()));
                    prop_assert!(local.time() >= working_hours.start_time);
                    let local_end = slot_end.with_timezone(&zone);
                    prop_assert!(local_end.date_naive() == local.date_naive());
                    prop_assert!(local_end.time() <= working_hours.end_time);

                    for (busy_start, busy_end) in &merged {
                        prop_assert!(!(slot.time < *busy_end && slot_end > *busy_start));
                    }
                    if let Some(prev) = previous {
                        prop_assert!(slot.time > prev);
                    }
                    previous = Some(slot.time);
                }
            }
        }

        #[test]
        fn merged_periods_are_disjoint_and_sorted(
            busy in prop::collection::vec((0..10_000i64, 1..500i64), 0..30),
        ) {
            let periods: Vec<_> = busy
                .iter()
                .map(|(s, l)| (base() + Duration::minutes(*s), base() + Duration::minutes(s + l)))
                .collect();
            let merged = merge_busy_periods(&periods);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].1 < pair[1].0);
            }
            for (s, e) in &periods {
                prop_assert!(merged.iter().any(|(ms, me)| ms <= s && e <= me));
            }
        }
    }
}
