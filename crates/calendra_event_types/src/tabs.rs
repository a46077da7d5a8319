//! Navigation tabs of the event type editor.

use calendra_common::models::EventType;
use serde::Serialize;

use crate::locale::Translator;
use crate::locked_fields::LockedFieldsManager;

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabItem {
    pub name: String,
    pub href: String,
    pub icon: String,
    pub info: String,
    #[serde(rename = "data-testid")]
    pub data_testid: String,
}

/// Counters shown as badges next to the editor's extra tabs.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsMetadata {
    pub enabled_apps_number: usize,
    pub installed_apps_number: usize,
    pub enabled_workflows_number: usize,
    pub active_webhooks_number: usize,
    pub require_payment: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabsNavigation {
    pub tabs: Vec<TabItem>,
    pub metadata: TabsMetadata,
}

fn tab(name: String, href: String, icon: &str, info: String, test_id: &str) -> TabItem {
    TabItem {
        name,
        href,
        icon: icon.to_string(),
        info,
        data_testid: test_id.to_string(),
    }
}

fn base_navigation(event_type: &EventType, translator: &dyn Translator) -> Vec<TabItem> {
    let id = event_type.id;
    let duration = match &event_type.metadata.multiple_duration {
        Some(durations) => durations
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        None => event_type.length.to_string(),
    };

    vec![
        tab(
            translator.t("basics"),
            format!("/event-types/{}?tabName=setup", id),
            "link",
            format!("{} {}", duration, translator.t("minute_timeUnit")),
            "basics",
        ),
        tab(
            translator.t("event_limit_tab_title"),
            format!("/event-types/{}?tabName=limits", id),
            "clock",
            translator.t("event_limit_tab_description"),
            "event_limit_tab_title",
        ),
    ]
}

fn availability_info(event_type: &EventType, translator: &dyn Translator) -> String {
    let manager = LockedFieldsManager::new(event_type);
    let default_name = || translator.t("default_schedule_name");

    if manager.is_managed_event_type() || manager.is_children_managed_event_type() {
        if event_type.schedule_id.is_none() {
            translator.t("members_default_schedule")
        } else if manager.is_children_managed_event_type() {
            match &event_type.schedule_name {
                Some(name) => format!("{} - {}", name, translator.t("managed")),
                None => default_name(),
            }
        } else {
            event_type.schedule_name.clone().unwrap_or_else(default_name)
        }
    } else {
        event_type.schedule_name.clone().unwrap_or_else(default_name)
    }
}

fn assignment_info(event_type: &EventType, translator: &dyn Translator) -> String {
    let scheduling = event_type
        .scheduling_type
        .map(|s| translator.t(s.as_key()))
        .unwrap_or_default();
    if LockedFieldsManager::new(event_type).is_managed_event_type() {
        format!(
            "{} - {}",
            scheduling,
            translator.t_count("number_member", event_type.children.len())
        )
    } else {
        scheduling
    }
}

pub fn tabs_metadata(event_type: &EventType) -> TabsMetadata {
    let enabled_apps_number = event_type
        .metadata
        .apps
        .iter()
        .filter(|(slug, app)| {
            app.enabled
                && event_type
                    .installed_apps
                    .iter()
                    .any(|installed| &installed.slug == *slug && installed.is_installed)
        })
        .count();

    TabsMetadata {
        enabled_apps_number,
        installed_apps_number: event_type.installed_apps.len(),
        enabled_workflows_number: event_type.workflows.len(),
        active_webhooks_number: event_type.webhooks.iter().filter(|w| w.active).count(),
        require_payment: event_type
            .metadata
            .apps
            .values()
            .any(|app| app.enabled && app.price > 0),
    }
}

/// Builds the editor tabs: basics, availability, assignment (team event
/// types only) and limits, in that order.
pub fn tabs_navigation(event_type: &EventType, translator: &dyn Translator) -> TabsNavigation {
    let mut tabs = base_navigation(event_type, translator);
    tabs.insert(
        1,
        tab(
            translator.t("availability"),
            format!("/event-types/{}?tabName=availability", event_type.id),
            "calendar",
            availability_info(event_type, translator),
            "availability",
        ),
    );

    if event_type.team.is_some() {
        tabs.insert(
            2,
            tab(
                translator.t("assignment"),
                format!("/event-types/{}?tabName=team", event_type.id),
                "users",
                assignment_info(event_type, translator),
                "assignment",
            ),
        );
    }

    TabsNavigation {
        tabs,
        metadata: tabs_metadata(event_type),
    }
}
