//! Declarative field validation.
//!
//! A [`ValidationRule`] pairs one raw field value with the constraints it
//! must meet. Rules are plain values built fresh for every check:
//!
//! - `required`: the value, rendered as text and trimmed, is non-empty
//! - `min_length` / `max_length`: text values only
//! - `min` / `max` / `integer`: numeric values only
//!
//! Constraints that do not apply to the value's kind are skipped rather
//! than failed, and a missing constraint is never checked.
//!
//! # Example
//!
//! ```
//! use recordboard::validation::{validate, FieldValue, ValidationRule};
//!
//! let rule = ValidationRule::new(FieldValue::parse_number("3"))
//!     .required()
//!     .min(1.0)
//!     .max(10.0);
//! assert!(validate(&rule));
//! ```

mod rules;

pub use rules::{check, validate, FieldValue, ValidationRule, Violation};
