//! English strings for the event type editor.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Looks up display strings by key.
pub trait Translator: Send + Sync {
    /// Translation for `key`, or `key` itself when unknown.
    fn t(&self, key: &str) -> String;

    /// Plural-aware translation. Looks up `{key}_one` or `{key}_other` and
    /// substitutes `{{count}}`.
    fn t_count(&self, key: &str, count: usize) -> String;
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("basics", "Basics"),
        ("availability", "Availability"),
        ("assignment", "Assignment"),
        ("event_limit_tab_title", "Limits"),
        ("event_limit_tab_description", "How often you can be booked"),
        ("minute_timeUnit", "mins"),
        ("members_default_schedule", "Member's default schedule"),
        ("default_schedule_name", "Working Hours"),
        ("managed", "Managed"),
        ("round_robin", "Round Robin"),
        ("collective", "Collective"),
        ("number_member_one", "{{count}} member"),
        ("number_member_other", "{{count}} members"),
        ("offer_seats", "Offer seats"),
        (
            "offer_seats_description",
            "This is for group sessions only, don't enable this if this is not a group session",
        ),
        ("number_of_seats", "Number of seats per booking"),
        ("seats", "seats"),
        (
            "multilocation_doesnt_support_seats",
            "Multiple Locations does not support seats yet",
        ),
        (
            "no_show_fee_doesnt_support_seats",
            "No show fee does not support seats yet",
        ),
        (
            "recurring_event_doesnt_support_seats",
            "Recurring events do not support seats yet",
        ),
        (
            "seats_and_no_show_fee_error",
            "Currently cannot enable seats and charge a no-show fee",
        ),
        ("locked_fields_admin_description", "Members will not be able to edit this"),
        ("locked_fields_member_description", "This option was locked by the team admin"),
        ("unlocked_fields_admin_description", "Members can edit"),
        ("unlocked_fields_member_description", "Unlocked by team admin"),
    ])
});

#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn t(&self, key: &str) -> String {
        EN.get(key).map(|s| s.to_string()).unwrap_or_else(|| key.to_string())
    }

    fn t_count(&self, key: &str, count: usize) -> String {
        let suffix = if count == 1 { "one" } else { "other" };
        let plural_key = format!("{}_{}", key, suffix);
        match EN.get(plural_key.as_str()) {
            Some(template) => template.replace("{{count}}", &count.to_string()),
            None => self.t(key),
        }
    }
}
