//! Validation and commit of submitted form values.

use crate::component::{Component, InsertPosition, Mount};
use crate::config::BoardConfig;
use crate::error::{Field, FieldViolation, ValidationError};
use crate::store::RecordStore;
use crate::types::{Record, ValidatedInput};
use crate::validation::{check, FieldValue, ValidationRule};
use parking_lot::Mutex;
use std::sync::Arc;

use super::form::FormHost;

/// A submission trigger from the surrounding UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the environment's own form handling (page navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of handling one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The record was stored and the form cleared.
    Committed(Record),
    /// Nothing was stored; the form keeps its values.
    Rejected(ValidationError),
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed(_))
    }
}

/// Submit callback with its collector captured at registration time.
pub type SubmitHandler = Box<dyn FnMut(&mut SubmitEvent) -> SubmitOutcome + Send>;

/// Gathers form values, validates them and commits records.
pub struct InputCollector<H: FormHost> {
    host: H,
    store: Arc<RecordStore>,
    config: BoardConfig,
    mount: Mount,
    /// Error from the last rejected submission, cleared on commit.
    last_error: Option<ValidationError>,
}

impl<H: FormHost> InputCollector<H> {
    /// Create a collector mounted at the start of the configured host.
    pub fn new(store: Arc<RecordStore>, config: BoardConfig, host: H) -> Self {
        let mount = Mount::new(
            config.host_id.clone(),
            config.form_element_id.clone(),
            InsertPosition::AtStart,
        );
        let mut collector = Self {
            host,
            store,
            config,
            mount,
            last_error: None,
        };
        collector.configure();
        collector
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Read and validate the form without touching the store.
    pub fn gather(&self) -> Result<ValidatedInput, ValidationError> {
        let values = self.host.values();
        let config = &self.config;

        let mut title = ValidationRule::new(values.title.as_str()).required();
        if let Some(max) = config.title_max_length {
            title = title.max_length(max);
        }
        let description = ValidationRule::new(values.description.as_str())
            .required()
            .min_length(config.description_min_length);
        let capacity_value = FieldValue::parse_number(&values.capacity);
        let capacity = ValidationRule::new(capacity_value.clone())
            .required()
            .integer()
            .min(f64::from(config.capacity_min))
            .max(f64::from(config.capacity_max));

        let violations: Vec<FieldViolation> = [
            (Field::Title, title),
            (Field::Description, description),
            (Field::Capacity, capacity),
        ]
        .iter()
        .flat_map(|(field, rule)| {
            check(rule).into_iter().map(move |violation| FieldViolation {
                field: *field,
                violation,
            })
        })
        .collect();

        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        // In range and whole, so the cast is exact.
        let capacity = capacity_value.as_number().unwrap_or_default() as u32;
        Ok(ValidatedInput {
            title: values.title,
            description: values.description,
            capacity,
        })
    }

    /// Handle a submission.
    pub fn submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        match self.gather() {
            Ok(input) => {
                let record = self
                    .store
                    .append(input.title, input.description, input.capacity);
                tracing::info!(id = %record.id, title = %record.title, "record committed");

                self.host.clear();
                self.last_error = None;
                self.render();
                SubmitOutcome::Committed(record)
            }
            Err(error) => {
                tracing::warn!(%error, "submission rejected");
                self.last_error = Some(error.clone());
                self.render();
                SubmitOutcome::Rejected(error)
            }
        }
    }
}

impl<H: FormHost + 'static> InputCollector<H> {
    /// Build the submit handler for a shared collector.
    ///
    /// The collector is captured once here, so the handler always acts on
    /// it no matter who invokes it later.
    pub fn bind(collector: &Arc<Mutex<Self>>) -> SubmitHandler {
        let collector = Arc::clone(collector);
        Box::new(move |event: &mut SubmitEvent| collector.lock().submit(event))
    }
}

impl<H: FormHost> Component for InputCollector<H> {
    fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Start from a clean slate: no stale feedback on display.
    fn configure(&mut self) {
        self.last_error = None;
        self.render();
        tracing::debug!(element = %self.mount.element_id, "form configured");
    }

    fn render(&mut self) {
        self.host.show_feedback(self.last_error.as_ref());
    }
}
