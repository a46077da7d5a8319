//! Event type operations used by the HTTP handlers.

use calendra_common::models::{
    ChildEventType, EventType, EventTypeMetadata, InstalledApp, Location, RecurringEvent,
    SchedulingType, Team, Webhook, Workflow,
};
use calendra_common::services::EventTypeRepository;
use calendra_common::slugify;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::EventTypeError;
use crate::locale::Translator;
use crate::locked_fields::LockedFieldsManager;
use crate::seats::{
    apply_seats_update, ensure_toggle_allowed, seats_toggle_state, set_seats_enabled,
    SeatsLimits, SeatsToggleState, UpdateSeatsRequest,
};
use crate::tabs::{tabs_navigation, TabsNavigation};

/// Body of `POST /event-types`. `slug` defaults to the slugified title.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventTypeRequest {
    #[cfg_attr(feature = "openapi", schema(example = "30 Min Meeting"))]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub length: u32,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub team: Option<Team>,
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
    #[serde(default)]
    pub requires_confirmation: bool,
    #[serde(default)]
    pub seats_per_time_slot: Option<u32>,
    #[serde(default)]
    pub recurring_event: Option<RecurringEvent>,
    #[serde(default)]
    pub minimum_booking_notice: Option<u32>,
    #[serde(default)]
    pub before_event_buffer: u32,
    #[serde(default)]
    pub after_event_buffer: u32,
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

impl CreateEventTypeRequest {
    fn into_event_type(
        self,
        slug: String,
        limits: &SeatsLimits,
        translator: &dyn Translator,
    ) -> Result<EventType, EventTypeError> {
        let mut event_type = EventType::new(0, self.title, slug, self.length);
        event_type.hidden = self.hidden;
        event_type.team = self.team;
        event_type.parent_id = self.parent_id;
        event_type.scheduling_type = self.scheduling_type;
        event_type.children = self.children;
        event_type.schedule_id = self.schedule_id;
        event_type.schedule_name = self.schedule_name;
        event_type.locations = self.locations;
        event_type.requires_confirmation = self.requires_confirmation;
        event_type.recurring_event = self.recurring_event;
        event_type.minimum_booking_notice = self.minimum_booking_notice;
        event_type.before_event_buffer = self.before_event_buffer;
        event_type.after_event_buffer = self.after_event_buffer;
        event_type.slot_interval = self.slot_interval;
        event_type.metadata = self.metadata;
        event_type.webhooks = self.webhooks;
        event_type.workflows = self.workflows;
        event_type.installed_apps = self.installed_apps;
        if let Some(seats) = self.seats_per_time_slot {
            ensure_toggle_allowed(&event_type, translator)?;
            let seats = seats.clamp(1, limits.max_seats);
            set_seats_enabled(&mut event_type, true, Some(seats), limits);
        }
        Ok(event_type)
    }
}

pub struct EventTypeService {
    repository: Arc<dyn EventTypeRepository>,
    limits: SeatsLimits,
    translator: Arc<dyn Translator>,
}

impl EventTypeService {
    pub fn new(
        repository: Arc<dyn EventTypeRepository>,
        limits: SeatsLimits,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            repository,
            limits,
            translator,
        }
    }

    pub async fn list(&self) -> Result<Vec<EventType>, EventTypeError> {
        Ok(self.repository.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<EventType, EventTypeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventTypeError::NotFound(id))
    }

    pub async fn create(
        &self,
        request: CreateEventTypeRequest,
    ) -> Result<EventType, EventTypeError> {
        if request.title.trim().is_empty() {
            return Err(EventTypeError::Invalid("title must not be empty".to_string()));
        }
        if request.length == 0 {
            return Err(EventTypeError::Invalid("length must be positive".to_string()));
        }
        let source = request.slug.clone().unwrap_or_else(|| request.title.clone());
        let slug = slugify(&source, false);
        if slug.is_empty() {
            return Err(EventTypeError::Invalid(format!(
                "cannot derive a slug from '{}'",
                source
            )));
        }
        if self.repository.find_by_slug(&slug).await?.is_some() {
            return Err(EventTypeError::SlugTaken(slug));
        }

        let event_type =
            request.into_event_type(slug, &self.limits, self.translator.as_ref())?;
        let created = self.repository.create(event_type).await.map_err(|err| {
            match err.duplicate_slug().map(str::to_string) {
                Some(slug) => EventTypeError::SlugTaken(slug),
                None => EventTypeError::Repository(err),
            }
        })?;
        info!("Created event type {} ({})", created.id, created.slug);
        Ok(created)
    }

    pub async fn delete(&self, id: i64) -> Result<(), EventTypeError> {
        if self.repository.delete(id).await? {
            info!("Deleted event type {}", id);
            Ok(())
        } else {
            Err(EventTypeError::NotFound(id))
        }
    }

    pub async fn seats_state(&self, id: i64) -> Result<SeatsToggleState, EventTypeError> {
        let event_type = self.get(id).await?;
        Ok(seats_toggle_state(&event_type, &self.limits, self.translator.as_ref()))
    }

    /// Changes the seats settings and pushes them to managed children.
    pub async fn update_seats(
        &self,
        id: i64,
        request: UpdateSeatsRequest,
    ) -> Result<SeatsToggleState, EventTypeError> {
        let mut event_type = self.get(id).await?;
        apply_seats_update(&mut event_type, &request, &self.limits, self.translator.as_ref())?;

        let updated = self
            .repository
            .update(event_type)
            .await?
            .ok_or(EventTypeError::NotFound(id))?;
        debug!(
            "Event type {} seats now {:?} (enabled: {})",
            id, updated.seats_per_time_slot, updated.seats_per_time_slot_enabled
        );

        self.propagate_to_children(&updated).await?;
        Ok(seats_toggle_state(&updated, &self.limits, self.translator.as_ref()))
    }

    async fn propagate_to_children(&self, parent: &EventType) -> Result<(), EventTypeError> {
        let manager = LockedFieldsManager::new(parent);
        if !manager.is_managed_event_type() {
            return Ok(());
        }
        for child_ref in &parent.children {
            let Some(mut child) = self.repository.find_by_id(child_ref.event_type_id).await? else {
                warn!(
                    "Managed event type {} lists missing child {}",
                    parent.id, child_ref.event_type_id
                );
                continue;
            };
            manager.propagate_to_child(&mut child);
            self.repository.update(child).await?;
        }
        info!(
            "Propagated locked fields of {} to {} children",
            parent.id,
            parent.children.len()
        );
        Ok(())
    }

    pub async fn tabs(&self, id: i64) -> Result<TabsNavigation, EventTypeError> {
        let event_type = self.get(id).await?;
        Ok(tabs_navigation(&event_type, self.translator.as_ref()))
    }
}
