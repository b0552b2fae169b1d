//! Filtered, rendered record lists.
//!
//! A [`FilteredView`] selects one [`RecordStatus`](crate::RecordStatus) for
//! its whole life. Every store notification replaces its items with the
//! matching records (in store order) and redraws the list through a
//! [`ListRenderer`].

mod filtered;
mod render;

pub use filtered::{filter_by_status, FilteredView};
pub use render::{Frame, ListRenderer, TextRenderer};
