#[cfg(test)]
mod tests {
    use crate::error::EventTypeError;
    use crate::locale::EnglishTranslator;
    use crate::seats::*;
    use calendra_common::models::{
        AppData, Editable, EventType, Location, RecurringEvent, SchedulingType,
    };

    fn event_type() -> EventType {
        EventType::new(7, "Group yoga", "group-yoga", 60)
    }

    fn location(kind: &str) -> Location {
        Location {
            location_type: kind.to_string(),
            address: None,
            link: None,
        }
    }

    fn with_no_show_fee(mut event_type: EventType) -> EventType {
        event_type.metadata.apps.insert(
            "stripe".to_string(),
            AppData {
                enabled: true,
                price: 2000,
                currency: Some("chf".to_string()),
                payment_option: Some("HOLD".to_string()),
            },
        );
        event_type
    }

    fn guests(event_type: &EventType) -> (bool, Editable) {
        let field = event_type
            .booking_fields
            .iter()
            .find(|f| f.name == "guests")
            .unwrap();
        (field.hidden, field.editable)
    }

    #[test]
    fn test_plain_event_type_can_enable_seats() {
        let state = seats_toggle_state(&event_type(), &SeatsLimits::default(), &EnglishTranslator);
        assert!(!state.checked);
        assert!(!state.disabled);
        assert!(!state.locked);
        assert!(state.tooltip.is_none());
        assert!(state.alert.is_none());
        assert_eq!(state.seats_value, 5);
        assert_eq!(state.title, "Offer seats (for Group sessions only)");
    }

    #[test]
    fn test_multilocation_tooltip_wins() {
        let mut et = with_no_show_fee(event_type());
        et.locations = vec![location("zoom"), location("inPerson")];
        et.recurring_event = Some(RecurringEvent {
            freq: "WEEKLY".to_string(),
            count: 4,
            interval: 1,
        });
        let state = seats_toggle_state(&et, &SeatsLimits::default(), &EnglishTranslator);
        assert!(state.disabled);
        assert_eq!(
            state.tooltip.as_deref(),
            Some("Multiple Locations does not support seats yet")
        );
        assert_eq!(
            state.alert.as_deref(),
            Some("Currently cannot enable seats and charge a no-show fee")
        );
    }

    #[test]
    fn test_no_show_fee_needs_hold_option() {
        let mut et = with_no_show_fee(event_type());
        assert!(no_show_fee_enabled(&et));
        if let Some(app) = et.metadata.apps.get_mut("stripe") {
            app.payment_option = Some("ON_BOOKING".to_string());
        }
        assert!(!no_show_fee_enabled(&et));
        assert!(!toggle_blocked(&et));
    }

    #[test]
    fn test_recurring_blocks_only_enabling() {
        let mut et = event_type();
        et.recurring_event = Some(RecurringEvent {
            freq: "WEEKLY".to_string(),
            count: 3,
            interval: 1,
        });
        assert!(toggle_blocked(&et));

        et.seats_per_time_slot_enabled = true;
        let state = seats_toggle_state(&et, &SeatsLimits::default(), &EnglishTranslator);
        assert!(!state.disabled);
        assert_eq!(
            state.tooltip.as_deref(),
            Some("Recurring events do not support seats yet")
        );
    }

    #[test]
    fn test_legacy_seat_count_is_capped() {
        let limits = SeatsLimits::default();
        assert_eq!(displayed_seats(Some(5000), &limits), MAX_SEATS_PER_TIME_SLOT);
        assert_eq!(displayed_seats(Some(12), &limits), 12);
        assert_eq!(displayed_seats(None, &limits), DEFAULT_SEATS_PER_TIME_SLOT);
    }

    #[test]
    fn test_enabling_seats_hides_guests_and_resets_options() {
        let mut et = event_type();
        et.requires_confirmation = true;
        et.metadata.multiple_duration = Some(vec![30, 60]);

        set_seats_enabled(&mut et, true, None, &SeatsLimits::default());

        assert!(et.seats_per_time_slot_enabled);
        assert_eq!(et.seats_per_time_slot, Some(5));
        assert!(!et.requires_confirmation);
        assert!(et.metadata.multiple_duration.is_none());
        assert_eq!(guests(&et), (true, Editable::SystemButHidden));

        let email = et.booking_fields.iter().find(|f| f.name == "email").unwrap();
        assert!(!email.hidden);
    }

    #[test]
    fn test_disabling_seats_restores_guests() {
        let mut et = event_type();
        set_seats_enabled(&mut et, true, Some(9), &SeatsLimits::default());
        assert_eq!(et.seats_per_time_slot, Some(9));

        set_seats_enabled(&mut et, false, Some(9), &SeatsLimits::default());
        assert!(!et.seats_per_time_slot_enabled);
        assert_eq!(et.seats_per_time_slot, None);
        assert_eq!(guests(&et), (false, Editable::SystemButOptional));
    }

    #[test]
    fn test_seat_count_validation() {
        let mut et = event_type();
        let limits = SeatsLimits::default();
        assert!(matches!(
            set_seats_per_time_slot(&mut et, 0, &limits),
            Err(EventTypeError::InvalidSeats(0))
        ));
        assert_eq!(set_seats_per_time_slot(&mut et, 2500, &limits).unwrap(), 1000);
        assert_eq!(set_seats_per_time_slot(&mut et, 3, &limits).unwrap(), 3);
    }

    #[test]
    fn test_update_rejected_for_locked_child() {
        let mut child = event_type();
        child.parent_id = Some(1);
        let request = UpdateSeatsRequest {
            enabled: true,
            seats_per_time_slot: Some(4),
            seats_show_attendees: None,
            seats_show_availability_count: None,
        };
        let result =
            apply_seats_update(&mut child, &request, &SeatsLimits::default(), &EnglishTranslator);
        assert!(matches!(result, Err(EventTypeError::Locked(_))));
    }

    #[test]
    fn test_update_rejected_when_blocked() {
        let mut et = with_no_show_fee(event_type());
        let request = UpdateSeatsRequest {
            enabled: true,
            seats_per_time_slot: None,
            seats_show_attendees: None,
            seats_show_availability_count: None,
        };
        match apply_seats_update(&mut et, &request, &SeatsLimits::default(), &EnglishTranslator) {
            Err(EventTypeError::SeatsUnavailable(reason)) => {
                assert_eq!(reason, "No show fee does not support seats yet")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_update_on_managed_parent_applies() {
        let mut parent = event_type();
        parent.scheduling_type = Some(SchedulingType::Managed);
        let request = UpdateSeatsRequest {
            enabled: true,
            seats_per_time_slot: Some(12),
            seats_show_attendees: Some(true),
            seats_show_availability_count: None,
        };
        apply_seats_update(&mut parent, &request, &SeatsLimits::default(), &EnglishTranslator)
            .unwrap();
        assert_eq!(parent.seats(), Some(12));
        assert!(parent.seats_show_attendees);
    }
}
