//! Category-filtered view over the record store.

use crate::component::{Component, InsertPosition, Mount};
use crate::store::RecordStore;
use crate::subscriptions::SubscriptionId;
use crate::types::{Record, RecordStatus};
use parking_lot::Mutex;
use std::sync::Arc;

use super::render::ListRenderer;

/// Records of `snapshot` whose status is `category`, in snapshot order.
pub fn filter_by_status(snapshot: Vec<Record>, category: RecordStatus) -> Vec<Record> {
    snapshot
        .into_iter()
        .filter(|r| r.status == category)
        .collect()
}

/// State shared between the view and its store listener.
struct ViewState {
    items: Vec<Record>,
    heading: String,
    list_id: String,
    renderer: Box<dyn ListRenderer>,
}

impl ViewState {
    fn render(&mut self) {
        self.renderer
            .render_list(&self.heading, &self.list_id, &self.items);
    }
}

/// A list showing the store's records of one status.
pub struct FilteredView {
    category: RecordStatus,
    mount: Mount,
    store: Arc<RecordStore>,
    state: Arc<Mutex<ViewState>>,
    subscription: Option<SubscriptionId>,
}

impl FilteredView {
    /// Create a view appended to `host_id`, subscribe it to `store` and draw
    /// its (empty) list.
    pub fn new(
        category: RecordStatus,
        store: Arc<RecordStore>,
        host_id: &str,
        renderer: impl ListRenderer + 'static,
    ) -> Self {
        let name = category.as_str();
        let state = ViewState {
            items: Vec::new(),
            heading: format!("{} PROJECTS", name.to_uppercase()),
            list_id: format!("{}-project-list", name),
            renderer: Box::new(renderer),
        };

        let mut view = Self {
            category,
            mount: Mount::new(host_id, format!("{}-projects", name), InsertPosition::AtEnd),
            store,
            state: Arc::new(Mutex::new(state)),
            subscription: None,
        };
        view.configure();
        view.render();
        view
    }

    pub fn category(&self) -> RecordStatus {
        self.category
    }

    /// Copy of the last computed items.
    pub fn items(&self) -> Vec<Record> {
        self.state.lock().items.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    pub fn heading(&self) -> String {
        self.state.lock().heading.clone()
    }

    pub fn list_id(&self) -> String {
        self.state.lock().list_id.clone()
    }

    /// Stop receiving store notifications. Items keep their last value.
    pub fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.store.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Component for FilteredView {
    fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Subscribe to the store. Does nothing if already subscribed.
    fn configure(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let state = Arc::clone(&self.state);
        let category = self.category;
        let id = self.store.subscribe(move |snapshot| {
            let mut state = state.lock();
            state.items = filter_by_status(snapshot, category);
            state.render();
        });

        tracing::debug!(%category, subscription = id.0, "view subscribed");
        self.subscription = Some(id);
    }

    fn render(&mut self) {
        self.state.lock().render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TextRenderer;

    #[test]
    fn test_new_view_renders_empty_frame() {
        let store = Arc::new(RecordStore::new());
        let renderer = TextRenderer::new();
        let view = FilteredView::new(RecordStatus::Active, store, "app", renderer.clone());

        let frame = renderer.frame();
        assert_eq!(frame.heading, "ACTIVE PROJECTS");
        assert_eq!(frame.list_id, "active-project-list");
        assert!(frame.lines.is_empty());
        assert_eq!(view.mount().element_id, "active-projects");
        assert_eq!(view.mount().position, InsertPosition::AtEnd);
    }

    #[test]
    fn test_configure_twice_subscribes_once() {
        let store = Arc::new(RecordStore::new());
        let mut view = FilteredView::new(
            RecordStatus::Finished,
            Arc::clone(&store),
            "app",
            TextRenderer::new(),
        );
        view.configure();
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_detach_freezes_items() {
        let store = Arc::new(RecordStore::new());
        let mut view = FilteredView::new(
            RecordStatus::Active,
            Arc::clone(&store),
            "app",
            TextRenderer::new(),
        );

        store.append("one", "first record", 1);
        view.detach();
        store.append("two", "second record", 2);

        assert!(!view.is_attached());
        assert_eq!(view.len(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_filter_preserves_order() {
        let store = RecordStore::new();
        let a = store.append("a", "record a", 1);
        let b = store.append("b", "record b", 1);
        let c = store.append("c", "record c", 1);
        store.set_status(b.id, RecordStatus::Finished).unwrap();

        let active = filter_by_status(store.snapshot(), RecordStatus::Active);
        let ids: Vec<_> = active.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }
}
