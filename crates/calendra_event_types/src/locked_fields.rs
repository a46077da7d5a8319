//! Field locking for managed event types.
//!
//! A managed event type is owned by a team and copied to one child event
//! type per member. Fields the admin has not unlocked are read-only on the
//! children and follow the parent whenever it changes.

use calendra_common::models::{EventType, SchedulingType};
use serde::Serialize;

use crate::locale::Translator;

/// Fields a managed parent pushes down to its children.
pub const MANAGED_FIELDS: &[&str] = &[
    "length",
    "multipleDuration",
    "locations",
    "bookingFields",
    "requiresConfirmation",
    "seatsPerTimeSlotEnabled",
    "seatsPerTimeSlot",
    "seatsShowAttendees",
    "seatsShowAvailabilityCount",
];

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LockDisableProps {
    pub disabled: bool,
    pub locked: bool,
}

pub struct LockedFieldsManager<'a> {
    event_type: &'a EventType,
}

impl<'a> LockedFieldsManager<'a> {
    pub fn new(event_type: &'a EventType) -> Self {
        Self { event_type }
    }

    pub fn is_managed_event_type(&self) -> bool {
        self.event_type.scheduling_type == Some(SchedulingType::Managed)
    }

    pub fn is_children_managed_event_type(&self) -> bool {
        self.event_type.parent_id.is_some() && !self.is_managed_event_type()
    }

    fn is_unlocked(&self, field: &str) -> bool {
        self.event_type
            .metadata
            .managed_event_config
            .as_ref()
            .and_then(|config| config.unlocked_fields.get(field))
            .copied()
            .unwrap_or(false)
    }

    pub fn should_lock_disable_props(&self, field: &str) -> LockDisableProps {
        if self.is_children_managed_event_type() {
            let locked = !self.is_unlocked(field);
            LockDisableProps {
                disabled: locked,
                locked,
            }
        } else if self.is_managed_event_type() {
            LockDisableProps {
                disabled: false,
                locked: !self.is_unlocked(field),
            }
        } else {
            LockDisableProps::default()
        }
    }

    /// Hint shown next to a lock icon, if the field has one.
    pub fn lock_description(&self, field: &str, translator: &dyn Translator) -> Option<String> {
        let locked = !self.is_unlocked(field);
        let key = if self.is_managed_event_type() {
            if locked {
                "locked_fields_admin_description"
            } else {
                "unlocked_fields_admin_description"
            }
        } else if self.is_children_managed_event_type() {
            if locked {
                "locked_fields_member_description"
            } else {
                "unlocked_fields_member_description"
            }
        } else {
            return None;
        };
        Some(translator.t(key))
    }

    /// Copies every locked field of the managed parent onto `child`.
    pub fn propagate_to_child(&self, child: &mut EventType) {
        let parent = self.event_type;
        for field in MANAGED_FIELDS {
            if self.is_unlocked(field) {
                continue;
            }
            match *field {
                "length" => child.length = parent.length,
                "multipleDuration" => {
                    child.metadata.multiple_duration = parent.metadata.multiple_duration.clone()
                }
                "locations" => child.locations = parent.locations.clone(),
                "bookingFields" => child.booking_fields = parent.booking_fields.clone(),
                "requiresConfirmation" => {
                    child.requires_confirmation = parent.requires_confirmation
                }
                "seatsPerTimeSlotEnabled" => {
                    child.seats_per_time_slot_enabled = parent.seats_per_time_slot_enabled
                }
                "seatsPerTimeSlot" => child.seats_per_time_slot = parent.seats_per_time_slot,
                "seatsShowAttendees" => child.seats_show_attendees = parent.seats_show_attendees,
                "seatsShowAvailabilityCount" => {
                    child.seats_show_availability_count = parent.seats_show_availability_count
                }
                _ => {}
            }
        }
        child.parent_id = Some(parent.id);
        child.metadata.managed_event_config = parent.metadata.managed_event_config.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishTranslator;
    use calendra_common::models::{Location, ManagedEventConfig};

    fn managed_parent() -> EventType {
        let mut parent = EventType::new(1, "Onboarding", "onboarding", 45);
        parent.scheduling_type = Some(SchedulingType::Managed);
        parent
    }

    fn child_of(parent: &EventType) -> EventType {
        let mut child = EventType::new(2, "Onboarding", "onboarding", 30);
        child.parent_id = Some(parent.id);
        child
    }

    #[test]
    fn test_plain_event_type_is_never_locked() {
        let event_type = EventType::new(3, "Chat", "chat", 15);
        let manager = LockedFieldsManager::new(&event_type);
        assert!(!manager.is_managed_event_type());
        assert!(!manager.is_children_managed_event_type());
        assert_eq!(
            manager.should_lock_disable_props("seatsPerTimeSlotEnabled"),
            LockDisableProps::default()
        );
        assert!(manager.lock_description("length", &EnglishTranslator).is_none());
    }

    #[test]
    fn test_child_fields_locked_unless_unlocked() {
        let parent = managed_parent();
        let mut child = child_of(&parent);
        child.metadata.managed_event_config = Some(ManagedEventConfig {
            unlocked_fields: [("locations".to_string(), true)].into_iter().collect(),
        });
        let manager = LockedFieldsManager::new(&child);

        assert!(manager.is_children_managed_event_type());
        let seats = manager.should_lock_disable_props("seatsPerTimeSlotEnabled");
        assert!(seats.locked && seats.disabled);
        let locations = manager.should_lock_disable_props("locations");
        assert!(!locations.locked && !locations.disabled);
    }

    #[test]
    fn test_parent_reports_lock_but_stays_editable() {
        let parent = managed_parent();
        let props = LockedFieldsManager::new(&parent).should_lock_disable_props("length");
        assert!(props.locked);
        assert!(!props.disabled);
    }

    #[test]
    fn test_propagate_skips_unlocked_fields() {
        let mut parent = managed_parent();
        parent.seats_per_time_slot_enabled = true;
        parent.seats_per_time_slot = Some(8);
        parent.locations = vec![Location {
            location_type: "inPerson".to_string(),
            address: Some("HQ".to_string()),
            link: None,
        }];
        parent.metadata.managed_event_config = Some(ManagedEventConfig {
            unlocked_fields: [("locations".to_string(), true)].into_iter().collect(),
        });

        let mut child = child_of(&parent);
        LockedFieldsManager::new(&parent).propagate_to_child(&mut child);

        assert_eq!(child.length, 45);
        assert_eq!(child.seats(), Some(8));
        assert!(child.locations.is_empty());
        assert_eq!(child.metadata.managed_event_config, parent.metadata.managed_event_config);
    }
}
