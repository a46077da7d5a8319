// --- File: crates/calendra_slots/src/service.rs ---
//! Availability and booking operations of the slots module.

use calendra_common::models::{Attendee, Booking, BookingStatus, EventType};
use calendra_config::AppConfig;
use calendra_event_types::seats::{displayed_seats, SeatsLimits};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::SlotsError;
use crate::logic::{
    get_available_slots, parse_time_zone, parse_window_bound, AppointmentConfig,
    WorkingHoursConfig,
};
use crate::models::{
    AvailableSlots, BookSlotRequest, BookingsQuery, GetAvailableSlotsInput, SlotsByDate,
};
use crate::repository::{EventTypeKey, SlotsRepository};

pub struct SlotsService {
    repository: Arc<SlotsRepository>,
    working_hours: WorkingHoursConfig,
    default_notice: Duration,
    max_range: Duration,
    seats_limits: SeatsLimits,
    // Serializes the availability check and the write of a booking.
    booking_lock: Mutex<()>,
}

impl SlotsService {
    pub fn new(repository: Arc<SlotsRepository>, config: &AppConfig) -> Result<Self, SlotsError> {
        Ok(Self {
            repository,
            working_hours: WorkingHoursConfig::from_config(&config.slots)?,
            default_notice: Duration::minutes(config.slots.minimum_booking_notice_minutes.max(0)),
            max_range: Duration::days(config.slots.max_range_days.max(1)),
            seats_limits: SeatsLimits::from(&config.event_types),
            booking_lock: Mutex::new(()),
        })
    }

    pub async fn get_available_slots(
        &self,
        input: &GetAvailableSlotsInput,
        is_team_event: bool,
    ) -> Result<AvailableSlots, SlotsError> {
        self.get_available_slots_at(input, is_team_event, Utc::now()).await
    }

    /// Same as [`get_available_slots`](Self::get_available_slots) with an explicit clock.
    pub async fn get_available_slots_at(
        &self,
        input: &GetAvailableSlotsInput,
        is_team_event: bool,
        now: DateTime<Utc>,
    ) -> Result<AvailableSlots, SlotsError> {
        let key =
            EventTypeKey::from_parts(input.event_type_id, input.event_type_slug.as_deref())?;
        let time_zone = parse_time_zone(input.time_zone.as_deref())?;
        let start = parse_window_bound(&input.start_time, time_zone, false)?;
        let end = parse_window_bound(&input.end_time, time_zone, true)?;
        if end < start {
            return Err(SlotsError::InvalidRange(
                "endTime must not be before startTime".to_string(),
            ));
        }
        if end - start > self.max_range {
            return Err(SlotsError::InvalidRange(format!(
                "the window may span at most {} days",
                self.max_range.num_days()
            )));
        }

        let event_type = self.resolve_event_type(&key, is_team_event).await?;
        let duration = resolve_duration(&event_type, input.duration)?;
        let mut slots = self.compute(&event_type, start, end, duration, now).await?;
        if !event_type.seats_show_availability_count {
            // bookers still need the uid to join a seated booking
            for slot in slots.values_mut().flatten() {
                slot.attendees = None;
            }
        }
        debug!(
            "Event type {}: {} days with free slots between {} and {}",
            event_type.id,
            slots.len(),
            start,
            end
        );

        Ok(AvailableSlots {
            event_type_id: event_type.id,
            slots,
        })
    }

    async fn resolve_event_type(
        &self,
        key: &EventTypeKey,
        is_team_event: bool,
    ) -> Result<EventType, SlotsError> {
        match self.repository.get_event_type(key).await? {
            Some(event_type) if !is_team_event || event_type.team.is_some() => Ok(event_type),
            _ => Err(SlotsError::EventTypeNotFound(key.to_string())),
        }
    }

    fn appointment(&self, event_type: &EventType, duration: u32) -> AppointmentConfig {
        AppointmentConfig {
            event_type_id: event_type.id,
            duration: Duration::minutes(duration.into()),
            step: Duration::minutes(event_type.slot_interval.unwrap_or(duration).into()),
            before_buffer: Duration::minutes(event_type.before_event_buffer.into()),
            after_buffer: Duration::minutes(event_type.after_event_buffer.into()),
            minimum_notice: event_type
                .minimum_booking_notice
                .map(|m| Duration::minutes(m.into()))
                .unwrap_or(self.default_notice),
            seats: event_type
                .seats()
                .map(|seats| displayed_seats(Some(seats), &self.seats_limits)),
        }
    }

    async fn compute(
        &self,
        event_type: &EventType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration: u32,
        now: DateTime<Utc>,
    ) -> Result<SlotsByDate, SlotsError> {
        let appointment = self.appointment(event_type, duration);
        let bookings = self
            .repository
            .get_bookings(
                start - appointment.before_buffer,
                end + appointment.after_buffer,
            )
            .await?;
        Ok(get_available_slots(
            start,
            end,
            &appointment,
            &self.working_hours,
            &bookings,
            now,
        ))
    }

    pub async fn book_slot(&self, request: BookSlotRequest) -> Result<Booking, SlotsError> {
        self.book_slot_at(request, Utc::now()).await
    }

    /// Books the slot starting at `request.start`, joining the seated
    /// booking already at that time when there is one.
    pub async fn book_slot_at(
        &self,
        request: BookSlotRequest,
        now: DateTime<Utc>,
    ) -> Result<Booking, SlotsError> {
        if request.attendee_name.trim().is_empty() {
            return Err(SlotsError::InvalidBooking(
                "attendeeName is required".to_string(),
            ));
        }
        if !request.attendee_email.contains('@') {
            return Err(SlotsError::InvalidBooking(format!(
                "'{}' is not an email address",
                request.attendee_email
            )));
        }
        let start = DateTime::parse_from_rfc3339(&request.start)
            .map_err(|_| SlotsError::TimeParseError(request.start.clone()))?
            .with_timezone(&Utc);

        let event_type = self
            .resolve_event_type(&EventTypeKey::Id(request.event_type_id), false)
            .await?;
        let duration = resolve_duration(&event_type, request.duration)?;
        let end = start + Duration::minutes(duration.into());
        let attendee = Attendee {
            name: request.attendee_name.trim().to_string(),
            email: request.attendee_email.trim().to_lowercase(),
        };

        let _guard = self.booking_lock.lock().await;
        let slots = self.compute(&event_type, start, end, duration, now).await?;
        let slot = slots
            .values()
            .flatten()
            .find(|slot| slot.time == start)
            .ok_or(SlotsError::SlotUnavailable)?;

        if let Some(uid) = &slot.booking_uid {
            let mut booking = self
                .repository
                .get_booking(uid)
                .await?
                .ok_or(SlotsError::SlotUnavailable)?;
            if booking.attendees.iter().any(|a| a.email == attendee.email) {
                return Err(SlotsError::AlreadyBooked(attendee.email));
            }
            booking.attendees.push(attendee);
            let updated = self
                .repository
                .update_booking(booking)
                .await?
                .ok_or(SlotsError::SlotUnavailable)?;
            info!(
                "Seat taken on booking {} ({} attendees)",
                updated.uid,
                updated.attendees.len()
            );
            return Ok(updated);
        }

        let booking = Booking {
            uid: Uuid::new_v4().to_string(),
            event_type_id: Some(event_type.id),
            start_time: start,
            end_time: end,
            status: if event_type.requires_confirmation {
                BookingStatus::Pending
            } else {
                BookingStatus::Accepted
            },
            attendees: vec![attendee],
        };
        let created = self.repository.create_booking(booking).await?;
        info!(
            "Booked event type {} at {} ({})",
            event_type.id, created.start_time, created.uid
        );
        Ok(created)
    }

    pub async fn list_bookings(&self, query: &BookingsQuery) -> Result<Vec<Booking>, SlotsError> {
        let time_zone = parse_time_zone(query.time_zone.as_deref())?;
        let start = parse_window_bound(&query.start_time, time_zone, false)?;
        let end = parse_window_bound(&query.end_time, time_zone, true)?;
        if end < start {
            return Err(SlotsError::InvalidRange(
                "endTime must not be before startTime".to_string(),
            ));
        }
        self.repository.get_bookings(start, end).await
    }
}

/// The requested duration when the event type offers it, else its length.
pub fn resolve_duration(
    event_type: &EventType,
    requested: Option<u32>,
) -> Result<u32, SlotsError> {
    match requested {
        None => Ok(event_type.length),
        Some(minutes) if event_type.allowed_durations().contains(&minutes) => Ok(minutes),
        Some(minutes) => Err(SlotsError::InvalidDuration(minutes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendra_common::models::EventType;

    #[test]
    fn test_resolve_duration() {
        let mut event_type = EventType::new(1, "Call", "call", 30);
        assert_eq!(resolve_duration(&event_type, None).unwrap(), 30);
        assert_eq!(resolve_duration(&event_type, Some(30)).unwrap(), 30);
        assert!(resolve_duration(&event_type, Some(45)).is_err());

        event_type.metadata.multiple_duration = Some(vec![15, 45]);
        assert_eq!(resolve_duration(&event_type, Some(45)).unwrap(), 45);
        assert_eq!(resolve_duration(&event_type, Some(30)).unwrap(), 30);
        assert!(resolve_duration(&event_type, Some(20)).is_err());
    }

    #[test]
    fn test_event_type_key() {
        assert_eq!(
            EventTypeKey::from_parts(Some(3), Some("x")).unwrap(),
            EventTypeKey::Id(3)
        );
        assert_eq!(
            EventTypeKey::from_parts(None, Some("intro")).unwrap(),
            EventTypeKey::Slug("intro".to_string())
        );
        assert!(matches!(
            EventTypeKey::from_parts(None, None),
            Err(SlotsError::MissingEventType)
        ));
    }
}
