//! Form input collection.
//!
//! The [`InputCollector`] reads raw values from a [`FormHost`], validates
//! them and commits a record to the store:
//!
//! - title: required
//! - description: required, minimum length
//! - capacity: required, whole number within the configured range
//!
//! A rejected submission leaves the form exactly as the user typed it and
//! shows the validation error; a committed one clears every field.

mod collector;
mod form;

pub use collector::{InputCollector, SubmitEvent, SubmitHandler, SubmitOutcome};
pub use form::{FormHost, FormValues, InMemoryForm};
