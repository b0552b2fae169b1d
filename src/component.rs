//! Shared lifecycle contract for mounted components.

/// Where a component's element goes inside its host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    AtStart,
    AtEnd,
}

/// A component's place in the host document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mount {
    /// Container the element is attached to.
    pub host_id: String,
    /// Id assigned to the component's own element.
    pub element_id: String,
    pub position: InsertPosition,
}

impl Mount {
    pub fn new(
        host_id: impl Into<String>,
        element_id: impl Into<String>,
        position: InsertPosition,
    ) -> Self {
        Self {
            host_id: host_id.into(),
            element_id: element_id.into(),
            position,
        }
    }
}

/// Capability shared by the input form and the record lists.
///
/// Constructors call `configure` once, then `render`.
pub trait Component {
    fn mount(&self) -> &Mount;

    /// Wire up event handling.
    fn configure(&mut self);

    /// Redraw the component's content from its current state.
    fn render(&mut self);
}
