//! Form-submission collaborator.

use crate::error::ValidationError;

/// Raw text of the three form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    /// Expected to hold a whole number, but may be anything.
    pub capacity: String,
}

impl FormValues {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            capacity: capacity.into(),
        }
    }
}

/// The form surface an [`InputCollector`](super::InputCollector) drives.
pub trait FormHost: Send {
    /// Current field values, as typed.
    fn values(&self) -> FormValues;

    /// Reset every field to empty text.
    fn clear(&mut self);

    /// Show the current validation problem, or remove it when `None`.
    fn show_feedback(&mut self, error: Option<&ValidationError>);
}

/// A form held entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryForm {
    pub values: FormValues,
    /// Feedback currently on display.
    pub feedback: Option<ValidationError>,
    /// Every error ever shown, oldest first.
    pub reported: Vec<ValidationError>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type values into all three fields.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: impl Into<String>,
    ) {
        self.values = FormValues::new(title, description, capacity);
    }
}

impl FormHost for InMemoryForm {
    fn values(&self) -> FormValues {
        self.values.clone()
    }

    fn clear(&mut self) {
        self.values = FormValues::default();
    }

    fn show_feedback(&mut self, error: Option<&ValidationError>) {
        if let Some(error) = error {
            self.reported.push(error.clone());
        }
        self.feedback = error.cloned();
    }
}
