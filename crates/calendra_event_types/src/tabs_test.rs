#[cfg(test)]
mod tests {
    use crate::locale::EnglishTranslator;
    use crate::tabs::{tabs_metadata, tabs_navigation};
    use calendra_common::models::{
        AppData, ChildEventType, EventType, InstalledApp, SchedulingType, Team, Webhook, Workflow,
    };

    fn team() -> Team {
        Team {
            id: 3,
            name: "Support".to_string(),
        }
    }

    fn names(event_type: &EventType) -> Vec<String> {
        tabs_navigation(event_type, &EnglishTranslator)
            .tabs
            .into_iter()
            .map(|t| t.data_testid)
            .collect()
    }

    #[test]
    fn test_personal_event_type_tabs() {
        let event_type = EventType::new(12, "Consultation", "consultation", 30);
        let navigation = tabs_navigation(&event_type, &EnglishTranslator);

        assert_eq!(
            names(&event_type),
            vec!["basics", "availability", "event_limit_tab_title"]
        );
        let basics = &navigation.tabs[0];
        assert_eq!(basics.href, "/event-types/12?tabName=setup");
        assert_eq!(basics.icon, "link");
        assert_eq!(basics.info, "30 mins");

        let availability = &navigation.tabs[1];
        assert_eq!(availability.href, "/event-types/12?tabName=availability");
        assert_eq!(availability.icon, "calendar");
        assert_eq!(availability.info, "Working Hours");

        let limits = &navigation.tabs[2];
        assert_eq!(limits.name, "Limits");
        assert_eq!(limits.icon, "clock");
        assert_eq!(limits.info, "How often you can be booked");
    }

    #[test]
    fn test_multiple_durations_are_listed() {
        let mut event_type = EventType::new(1, "Call", "call", 15);
        event_type.metadata.multiple_duration = Some(vec![15, 30, 45]);
        let navigation = tabs_navigation(&event_type, &EnglishTranslator);
        assert_eq!(navigation.tabs[0].info, "15, 30, 45 mins");
    }

    #[test]
    fn test_team_event_gets_assignment_tab() {
        let mut event_type = EventType::new(5, "Demo", "demo", 45);
        event_type.team = Some(team());
        event_type.scheduling_type = Some(SchedulingType::RoundRobin);
        event_type.schedule_name = Some("Office".to_string());

        let navigation = tabs_navigation(&event_type, &EnglishTranslator);
        assert_eq!(
            names(&event_type),
            vec!["basics", "availability", "assignment", "event_limit_tab_title"]
        );
        let assignment = &navigation.tabs[2];
        assert_eq!(assignment.href, "/event-types/5?tabName=team");
        assert_eq!(assignment.icon, "users");
        assert_eq!(assignment.info, "Round Robin");
        assert_eq!(navigation.tabs[1].info, "Office");
    }

    #[test]
    fn test_managed_parent_counts_members() {
        let mut event_type = EventType::new(8, "Onboarding", "onboarding", 30);
        event_type.team = Some(team());
        event_type.scheduling_type = Some(SchedulingType::Managed);
        event_type.children = vec![
            ChildEventType {
                event_type_id: 9,
                owner_name: "Ada".to_string(),
            },
            ChildEventType {
                event_type_id: 10,
                owner_name: "Grace".to_string(),
            },
        ];

        let navigation = tabs_navigation(&event_type, &EnglishTranslator);
        assert_eq!(navigation.tabs[1].info, "Member's default schedule");
        assert_eq!(navigation.tabs[2].info, "Managed - 2 members");

        event_type.schedule_id = Some(4);
        let navigation = tabs_navigation(&event_type, &EnglishTranslator);
        assert_eq!(navigation.tabs[1].info, "Working Hours");
    }

    #[test]
    fn test_managed_child_schedule_suffix() {
        let mut child = EventType::new(9, "Onboarding", "onboarding", 30);
        child.parent_id = Some(8);
        child.schedule_id = Some(2);
        child.schedule_name = Some("Mornings".to_string());
        let navigation = tabs_navigation(&child, &EnglishTranslator);
        assert_eq!(navigation.tabs[1].info, "Mornings - Managed");

        child.schedule_name = None;
        let navigation = tabs_navigation(&child, &EnglishTranslator);
        assert_eq!(navigation.tabs[1].info, "Working Hours");
    }

    #[test]
    fn test_metadata_counters() {
        let mut event_type = EventType::new(2, "Paid", "paid", 60);
        event_type.metadata.apps.insert(
            "stripe".to_string(),
            AppData {
                enabled: true,
                price: 5000,
                currency: Some("chf".to_string()),
                payment_option: Some("ON_BOOKING".to_string()),
            },
        );
        event_type.metadata.apps.insert(
            "giphy".to_string(),
            AppData {
                enabled: true,
                ..AppData::default()
            },
        );
        event_type.installed_apps = vec![
            InstalledApp {
                slug: "stripe".to_string(),
                is_installed: true,
            },
            InstalledApp {
                slug: "zapier".to_string(),
                is_installed: true,
            },
        ];
        event_type.webhooks = vec![
            Webhook {
                id: "a".to_string(),
                active: true,
            },
            Webhook {
                id: "b".to_string(),
                active: false,
            },
        ];
        event_type.workflows = vec![Workflow {
            id: 1,
            name: "Reminder".to_string(),
        }];

        let metadata = tabs_metadata(&event_type);
        assert_eq!(metadata.enabled_apps_number, 1);
        assert_eq!(metadata.installed_apps_number, 2);
        assert_eq!(metadata.enabled_workflows_number, 1);
        assert_eq!(metadata.active_webhooks_number, 1);
        assert!(metadata.require_payment);
    }
}
