// --- File: crates/calendra_common/src/models.rs ---
//! Data structures shared by the persistence layer and the HTTP crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the hosts of a team event type are assigned.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingType {
    RoundRobin,
    Collective,
    Managed,
}

impl SchedulingType {
    /// Lower-case key used for translations ("round_robin", ...).
    pub fn as_key(&self) -> &'static str {
        match self {
            SchedulingType::RoundRobin => "round_robin",
            SchedulingType::Collective => "collective",
            SchedulingType::Managed => "managed",
        }
    }
}

/// Who may edit a booking field and whether bookers see it.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Editable {
    System,
    SystemButOptional,
    SystemButHidden,
    User,
    UserReadonly,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub hidden: bool,
    pub editable: Editable,
}

impl BookingField {
    pub fn system(name: &str, field_type: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            label: None,
            required,
            hidden: false,
            editable: if required {
                Editable::System
            } else {
                Editable::SystemButOptional
            },
        }
    }

    /// The fields every new event type starts with.
    pub fn defaults() -> Vec<BookingField> {
        vec![
            BookingField::system("name", "name", true),
            BookingField::system("email", "email", true),
            BookingField::system("location", "radioInput", false),
            BookingField::system("notes", "textarea", false),
            BookingField::system("guests", "multiemail", false),
            BookingField::system("rescheduleReason", "textarea", false),
        ]
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "type")]
    pub location_type: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringEvent {
    /// "DAILY" | "WEEKLY" | "MONTHLY" | "YEARLY"
    pub freq: String,
    pub count: u32,
    pub interval: u32,
}

/// Per-app settings stored in the event type metadata.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub enabled: bool,
    /// Smallest currency unit.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub currency: Option<String>,
    /// "ON_BOOKING" or "HOLD" (charge a no-show fee later).
    #[serde(default)]
    pub payment_option: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedEventConfig {
    /// Fields a child event type may edit locally.
    #[serde(default)]
    pub unlocked_fields: BTreeMap<String, bool>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_duration: Option<Vec<u32>>,
    #[serde(default)]
    pub apps: BTreeMap<String, AppData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_event_config: Option<ManagedEventConfig>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    pub active: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: i64,
    pub name: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
}

/// A per-member copy of a managed event type.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildEventType {
    pub event_type_id: i64,
    pub owner_name: String,
}

/// An app installed for the owner of an event type.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledApp {
    pub slug: String,
    pub is_installed: bool,
}

/// A bookable meeting template.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Minutes.
    pub length: u32,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub team: Option<Team>,
    /// Set on children of a managed event type.
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub scheduling_type: Option<SchedulingType>,
    #[serde(default)]
    pub children: Vec<ChildEventType>,
    #[serde(default)]
    pub schedule_id: Option<i64>,
    #[serde(default)]
    pub schedule_name: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default = "BookingField::defaults")]
    pub booking_fields: Vec<BookingField>,
    #[serde(default)]
    pub requires_confirmation: bool,
    #[serde(default)]
    pub seats_per_time_slot: Option<u32>,
    #[serde(default)]
    pub seats_per_time_slot_enabled: bool,
    #[serde(default)]
    pub seats_show_attendees: bool,
    #[serde(default)]
    pub seats_show_availability_count: bool,
    #[serde(default)]
    pub recurring_event: Option<RecurringEvent>,
    /// Minutes; `None` falls back to the configured notice.
    #[serde(default)]
    pub minimum_booking_notice: Option<u32>,
    #[serde(default)]
    pub before_event_buffer: u32,
    #[serde(default)]
    pub after_event_buffer: u32,
    /// Minutes between slot starts; `None` steps by the duration.
    #[serde(default)]
    pub slot_interval: Option<u32>,
    #[serde(default)]
    pub metadata: EventTypeMetadata,
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub installed_apps: Vec<InstalledApp>,
}

impl EventType {
    pub fn new(id: i64, title: impl Into<String>, slug: impl Into<String>, length: u32) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            length,
            hidden: false,
            team: None,
            parent_id: None,
            scheduling_type: None,
            children: Vec::new(),
            schedule_id: None,
            schedule_name: None,
            locations: Vec::new(),
            booking_fields: BookingField::defaults(),
            requires_confirmation: false,
            seats_per_time_slot: None,
            seats_per_time_slot_enabled: false,
            seats_show_attendees: false,
            seats_show_availability_count: false,
            recurring_event: None,
            minimum_booking_notice: None,
            before_event_buffer: 0,
            after_event_buffer: 0,
            slot_interval: None,
            metadata: EventTypeMetadata::default(),
            webhooks: Vec::new(),
            workflows: Vec::new(),
            installed_apps: Vec::new(),
        }
    }

    /// Seat capacity when seats are enabled.
    pub fn seats(&self) -> Option<u32> {
        if self.seats_per_time_slot_enabled {
            self.seats_per_time_slot
        } else {
            None
        }
    }

    /// Durations a booker may pick: the length plus any multiple-duration entries.
    pub fn allowed_durations(&self) -> Vec<u32> {
        let mut durations = vec![self.length];
        if let Some(extra) = &self.metadata.multiple_duration {
            durations.extend(extra.iter().filter(|d| **d != self.length));
        }
        durations
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Accepted,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Accepted => "ACCEPTED",
            BookingStatus::Pending => "PENDING",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ACCEPTED" => Some(BookingStatus::Accepted),
            "PENDING" => Some(BookingStatus::Pending),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether the booking occupies its time.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

/// A booked time; seated event types gather several attendees on one booking.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub uid: String,
    pub event_type_id: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub attendees: Vec<Attendee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_json_defaults() {
        let event_type: EventType = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Intro",
            "slug": "intro",
            "length": 30
        }))
        .unwrap();
        assert_eq!(event_type.booking_fields.len(), 6);
        assert!(event_type
            .booking_fields
            .iter()
            .any(|f| f.name == "guests" && f.editable == Editable::SystemButOptional));
        assert_eq!(event_type.seats(), None);
        assert_eq!(event_type.allowed_durations(), vec![30]);
    }

    #[test]
    fn test_allowed_durations_keep_the_length() {
        let mut event_type = EventType::new(1, "Call", "call", 30);
        event_type.metadata.multiple_duration = Some(vec![15, 30, 45]);
        assert_eq!(event_type.allowed_durations(), vec![30, 15, 45]);
    }

    #[test]
    fn test_scheduling_type_wire_format() {
        let value = serde_json::to_value(SchedulingType::RoundRobin).unwrap();
        assert_eq!(value, "ROUND_ROBIN");
        assert_eq!(SchedulingType::Managed.as_key(), "managed");
    }

    #[test]
    fn test_editable_wire_format() {
        let value = serde_json::to_value(Editable::SystemButHidden).unwrap();
        assert_eq!(value, "system-but-hidden");
    }

    #[test]
    fn test_seats_only_when_enabled() {
        let mut event_type = EventType::new(1, "Class", "class", 60);
        event_type.seats_per_time_slot = Some(4);
        assert_eq!(event_type.seats(), None);
        event_type.seats_per_time_slot_enabled = true;
        assert_eq!(event_type.seats(), Some(4));
    }

    #[test]
    fn test_booking_status_round_trip_strings() {
        for status in [
            BookingStatus::Accepted,
            BookingStatus::Pending,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert!(!BookingStatus::Cancelled.is_blocking());
    }
}
