// --- File: crates/calendra_slots/src/models.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query of the available slots endpoints.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct GetAvailableSlotsInput {
    /// Window start, RFC 3339 or YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05"))]
    pub start_time: String,
    /// Window end, RFC 3339 or YYYY-MM-DD (the whole day is included)
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-09"))]
    pub end_time: String,
    #[serde(default)]
    pub event_type_id: Option<i64>,
    #[serde(default)]
    pub event_type_slug: Option<String>,
    /// Minutes; defaults to the event type length
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration: Option<u32>,
    /// IANA time zone the response dates are keyed in
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Europe/Zurich"))]
    pub time_zone: Option<String>,
    /// "time" (default) or "range"
    #[serde(default)]
    pub slot_format: Option<String>,
    #[serde(default)]
    pub is_team_event: Option<bool>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotFormat {
    #[default]
    Time,
    Range,
}

impl SlotFormat {
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("time") => Some(SlotFormat::Time),
            Some("range") => Some(SlotFormat::Range),
            Some(_) => None,
        }
    }
}

/// A free start time as computed by the availability logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub time: DateTime<Utc>,
    /// Attendees already on a seated booking at this time.
    pub attendees: Option<u32>,
    pub booking_uid: Option<String>,
}

impl Slot {
    pub fn free(time: DateTime<Utc>) -> Self {
        Self {
            time,
            attendees: None,
            booking_uid: None,
        }
    }
}

/// Slots grouped by UTC date ("YYYY-MM-DD").
pub type SlotsByDate = BTreeMap<String, Vec<Slot>>;

/// Result of the slots service: the resolved event type and its free slots.
#[derive(Debug, Clone)]
pub struct AvailableSlots {
    pub event_type_id: i64,
    pub slots: SlotsByDate,
}

/// One slot as rendered in the HTTP response.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputSlot {
    #[serde(rename_all = "camelCase")]
    Range {
        start_time: String,
        end_time: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        attendees: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        booking_uid: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Time {
        time: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        attendees: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        booking_uid: Option<String>,
    },
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotsResponse {
    /// Local date in the requested time zone -> slots of that day
    pub slots: BTreeMap<String, Vec<OutputSlot>>,
}

/// Body of `POST /bookings`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSlotRequest {
    pub event_type_id: i64,
    /// RFC 3339
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05T09:00:00Z"))]
    pub start: String,
    #[serde(default)]
    pub duration: Option<u32>,
    pub attendee_name: String,
    pub attendee_email: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct BookingsQuery {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub time_zone: Option<String>,
}
