//! Shapes computed slots for HTTP responses.

use chrono::{Duration, SecondsFormat};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::SlotsError;
use crate::logic::parse_time_zone;
use crate::models::{OutputSlot, SlotFormat, SlotsByDate, SlotsResponse};
use crate::repository::{EventTypeKey, SlotsRepository};

pub struct SlotsOutputService {
    repository: Arc<SlotsRepository>,
}

impl SlotsOutputService {
    pub fn new(repository: Arc<SlotsRepository>) -> Self {
        Self { repository }
    }

    async fn slot_duration(
        &self,
        duration: Option<u32>,
        event_type_id: i64,
    ) -> Result<u32, SlotsError> {
        if let Some(minutes) = duration {
            return Ok(minutes);
        }
        let key = EventTypeKey::Id(event_type_id);
        self.repository
            .get_event_type(&key)
            .await?
            .map(|event_type| event_type.length)
            .ok_or_else(|| SlotsError::EventTypeNotFound(key.to_string()))
    }

    /// Re-keys `available` by local date in `time_zone` (UTC by default) and
    /// renders each slot as a start time or, in range format, a start/end pair.
    pub async fn get_output_slots(
        &self,
        available: &SlotsByDate,
        duration: Option<u32>,
        event_type_id: i64,
        slot_format: Option<&str>,
        time_zone: Option<&str>,
    ) -> Result<SlotsResponse, SlotsError> {
        let format = SlotFormat::parse(slot_format).ok_or_else(|| {
            SlotsError::InvalidSlotFormat(slot_format.unwrap_or_default().to_string())
        })?;
        let time_zone = parse_time_zone(time_zone)?;
        let length = match format {
            SlotFormat::Range => {
                let minutes = self.slot_duration(duration, event_type_id).await?;
                Duration::minutes(minutes.into())
            }
            SlotFormat::Time => Duration::zero(),
        };

        let mut slots: BTreeMap<String, Vec<OutputSlot>> = BTreeMap::new();
        for slot in available.values().flatten() {
            let local_start = slot.time.with_timezone(&time_zone);
            let rendered = match format {
                SlotFormat::Time => OutputSlot::Time {
                    time: local_start.to_rfc3339_opts(SecondsFormat::Secs, false),
                    attendees: slot.attendees,
                    booking_uid: slot.booking_uid.clone(),
                },
                SlotFormat::Range => OutputSlot::Range {
                    start_time: local_start.to_rfc3339_opts(SecondsFormat::Secs, false),
                    end_time: (local_start + length).to_rfc3339_opts(SecondsFormat::Secs, false),
                    attendees: slot.attendees,
                    booking_uid: slot.booking_uid.clone(),
                },
            };
            slots
                .entry(local_start.format("%Y-%m-%d").to_string())
                .or_default()
                .push(rendered);
        }
        Ok(SlotsResponse { slots })
    }
}
