//! Seats settings of the advanced tab.
//!
//! Seats let several attendees book the same slot. They cannot be combined
//! with multiple locations, a no-show fee held on the card, or (when being
//! switched on) a recurring event.

use calendra_common::models::{Editable, EventType};
use calendra_config::EventTypesConfig;
use serde::{Deserialize, Serialize};

use crate::error::EventTypeError;
use crate::locale::Translator;
use crate::locked_fields::LockedFieldsManager;

pub const MAX_SEATS_PER_TIME_SLOT: u32 = 1000;
pub const DEFAULT_SEATS_PER_TIME_SLOT: u32 = 5;

pub const SEATS_ENABLED_FIELD: &str = "seatsPerTimeSlotEnabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatsLimits {
    pub default_seats: u32,
    pub max_seats: u32,
}

impl Default for SeatsLimits {
    fn default() -> Self {
        Self {
            default_seats: DEFAULT_SEATS_PER_TIME_SLOT,
            max_seats: MAX_SEATS_PER_TIME_SLOT,
        }
    }
}

impl From<&EventTypesConfig> for SeatsLimits {
    fn from(config: &EventTypesConfig) -> Self {
        Self {
            default_seats: config.default_seats_per_time_slot.max(1),
            max_seats: config.max_seats_per_time_slot.max(1),
        }
    }
}

/// What the "offer seats" toggle shows for an event type.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatsToggleState {
    pub title: String,
    pub description: String,
    pub checked: bool,
    /// Toggle cannot be flipped, either because of the event type's other
    /// settings or because a managed parent locked it.
    pub disabled: bool,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    pub seats_value: u32,
    pub max_seats: u32,
    pub seats_show_attendees: bool,
    pub seats_show_availability_count: bool,
}

/// A stripe app charging a held no-show fee.
pub fn no_show_fee_enabled(event_type: &EventType) -> bool {
    event_type
        .metadata
        .apps
        .get("stripe")
        .map(|app| app.enabled && app.payment_option.as_deref() == Some("HOLD"))
        .unwrap_or(false)
}

pub fn is_multi_location(event_type: &EventType) -> bool {
    event_type.locations.len() > 1
}

/// True when settings other than locking keep the toggle from changing.
pub fn toggle_blocked(event_type: &EventType) -> bool {
    no_show_fee_enabled(event_type)
        || is_multi_location(event_type)
        || (!event_type.seats_per_time_slot_enabled && event_type.recurring_event.is_some())
}

/// Translation key explaining why seats are unsupported, first match wins.
pub fn tooltip_key(event_type: &EventType) -> Option<&'static str> {
    if is_multi_location(event_type) {
        Some("multilocation_doesnt_support_seats")
    } else if no_show_fee_enabled(event_type) {
        Some("no_show_fee_doesnt_support_seats")
    } else if event_type.recurring_event.is_some() {
        Some("recurring_event_doesnt_support_seats")
    } else {
        None
    }
}

/// Fails with the translated tooltip when the seats toggle may not change.
pub fn ensure_toggle_allowed(
    event_type: &EventType,
    translator: &dyn Translator,
) -> Result<(), EventTypeError> {
    if !toggle_blocked(event_type) {
        return Ok(());
    }
    let reason = tooltip_key(event_type)
        .map(|key| translator.t(key))
        .unwrap_or_else(|| "Seats cannot be changed for this event type".to_string());
    Err(EventTypeError::SeatsUnavailable(reason))
}

/// Seat count to display; legacy values above the maximum are capped.
pub fn displayed_seats(value: Option<u32>, limits: &SeatsLimits) -> u32 {
    match value {
        Some(v) => v.min(limits.max_seats),
        None => limits.default_seats,
    }
}

pub fn seats_toggle_state(
    event_type: &EventType,
    limits: &SeatsLimits,
    translator: &dyn Translator,
) -> SeatsToggleState {
    let manager = LockedFieldsManager::new(event_type);
    let lock = manager.should_lock_disable_props(SEATS_ENABLED_FIELD);

    SeatsToggleState {
        title: format!("{} (for Group sessions only)", translator.t("offer_seats")),
        description: translator.t("offer_seats_description"),
        checked: event_type.seats_per_time_slot_enabled,
        disabled: lock.disabled || toggle_blocked(event_type),
        locked: lock.locked,
        lock_description: manager.lock_description(SEATS_ENABLED_FIELD, translator),
        tooltip: tooltip_key(event_type).map(|key| translator.t(key)),
        alert: no_show_fee_enabled(event_type).then(|| translator.t("seats_and_no_show_fee_error")),
        seats_value: displayed_seats(event_type.seats_per_time_slot, limits),
        max_seats: limits.max_seats,
        seats_show_attendees: event_type.seats_show_attendees,
        seats_show_availability_count: event_type.seats_show_availability_count,
    }
}

/// Shows or hides the `guests` booking field; other fields are untouched.
pub fn toggle_guests(event_type: &mut EventType, enabled: bool) {
    for field in event_type
        .booking_fields
        .iter_mut()
        .filter(|f| f.name == "guests")
    {
        field.hidden = !enabled;
        field.editable = if enabled {
            Editable::SystemButOptional
        } else {
            Editable::SystemButHidden
        };
    }
}

/// Flips the seats toggle and applies the settings that go with it.
///
/// `original_seats` is the seat count stored before the change and is
/// restored when seats get re-enabled.
pub fn set_seats_enabled(
    event_type: &mut EventType,
    enabled: bool,
    original_seats: Option<u32>,
    limits: &SeatsLimits,
) {
    if enabled {
        toggle_guests(event_type, false);
        event_type.requires_confirmation = false;
        event_type.metadata.multiple_duration = None;
        event_type.seats_per_time_slot = Some(original_seats.unwrap_or(limits.default_seats));
    } else {
        event_type.seats_per_time_slot = None;
        toggle_guests(event_type, true);
    }
    event_type.seats_per_time_slot_enabled = enabled;
}

/// Stores a new seat count, capped at the maximum.
pub fn set_seats_per_time_slot(
    event_type: &mut EventType,
    value: i64,
    limits: &SeatsLimits,
) -> Result<u32, EventTypeError> {
    if value < 1 {
        return Err(EventTypeError::InvalidSeats(value));
    }
    let seats = u32::try_from(value)
        .unwrap_or(u32::MAX)
        .min(limits.max_seats);
    event_type.seats_per_time_slot = Some(seats);
    Ok(seats)
}

/// Body of `PATCH /event-types/{id}/seats`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeatsRequest {
    pub enabled: bool,
    #[serde(default)]
    pub seats_per_time_slot: Option<i64>,
    #[serde(default)]
    pub seats_show_attendees: Option<bool>,
    #[serde(default)]
    pub seats_show_availability_count: Option<bool>,
}

/// Applies `request` to `event_type`, enforcing locks and the toggle rules.
pub fn apply_seats_update(
    event_type: &mut EventType,
    request: &UpdateSeatsRequest,
    limits: &SeatsLimits,
    translator: &dyn Translator,
) -> Result<(), EventTypeError> {
    let lock = LockedFieldsManager::new(event_type).should_lock_disable_props(SEATS_ENABLED_FIELD);
    if lock.disabled {
        return Err(EventTypeError::Locked(SEATS_ENABLED_FIELD.to_string()));
    }

    if request.enabled != event_type.seats_per_time_slot_enabled {
        ensure_toggle_allowed(event_type, translator)?;
        let original = event_type.seats_per_time_slot;
        set_seats_enabled(event_type, request.enabled, original, limits);
    }

    if event_type.seats_per_time_slot_enabled {
        if let Some(value) = request.seats_per_time_slot {
            set_seats_per_time_slot(event_type, value, limits)?;
        }
        if let Some(show) = request.seats_show_attendees {
            event_type.seats_show_attendees = show;
        }
        if let Some(show) = request.seats_show_availability_count {
            event_type.seats_show_availability_count = show;
        }
    }
    Ok(())
}
