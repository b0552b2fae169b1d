//! Rendering collaborator for record lists.

use crate::types::Record;
use parking_lot::Mutex;
use std::sync::Arc;

/// Draws a list of records.
///
/// Each call replaces whatever the list showed before; implementations
/// never patch the previous output.
pub trait ListRenderer: Send {
    fn render_list(&mut self, heading: &str, list_id: &str, items: &[Record]);
}

/// Visible output of a [`TextRenderer`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub heading: String,
    pub list_id: String,
    /// One entry per record title.
    pub lines: Vec<String>,
}

impl Frame {
    /// Plain-text form: heading, then one bulleted line per item.
    pub fn to_text(&self) -> String {
        let mut out = self.heading.clone();
        for line in &self.lines {
            out.push_str("\n- ");
            out.push_str(line);
        }
        out
    }
}

/// In-memory renderer that keeps the latest frame.
///
/// Clones share the same frame, so a caller can keep one clone to inspect
/// what a view drew.
#[derive(Clone, Default)]
pub struct TextRenderer {
    frame: Arc<Mutex<Frame>>,
    renders: Arc<Mutex<usize>>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Frame {
        self.frame.lock().clone()
    }

    /// How many times the list has been drawn.
    pub fn render_count(&self) -> usize {
        *self.renders.lock()
    }
}

impl ListRenderer for TextRenderer {
    fn render_list(&mut self, heading: &str, list_id: &str, items: &[Record]) {
        *self.frame.lock() = Frame {
            heading: heading.to_string(),
            list_id: list_id.to_string(),
            lines: items.iter().map(|r| r.title.clone()).collect(),
        };
        *self.renders.lock() += 1;
    }
}
