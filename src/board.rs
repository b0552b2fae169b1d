//! Board wiring: one store, one input form and one list per status.

use crate::component::{Component, Mount};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::input::{FormHost, InputCollector, SubmitEvent, SubmitHandler, SubmitOutcome};
use crate::store::RecordStore;
use crate::subscriptions::SubscriptionHandle;
use crate::types::{Record, RecordId, RecordStatus};
use crate::view::{FilteredView, ListRenderer};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// The assembled application.
///
/// Owns the store every component shares. Components are created in mount
/// order: the form at the start of the host, then the active and finished
/// lists appended after it.
pub struct Board<H: FormHost + 'static> {
    config: BoardConfig,
    store: Arc<RecordStore>,
    input: Arc<Mutex<InputCollector<H>>>,
    /// The form's mount point, so reading it never takes the input lock.
    form_mount: Mount,
    on_submit: SubmitHandler,
    active: FilteredView,
    finished: FilteredView,
}

impl<H: FormHost + 'static> Board<H> {
    /// Build a board around a fresh store.
    pub fn new<R, F>(config: BoardConfig, form: H, renderer_for: F) -> Result<Self>
    where
        R: ListRenderer + 'static,
        F: FnMut(RecordStatus) -> R,
    {
        Self::with_store(Arc::new(RecordStore::new()), config, form, renderer_for)
    }

    /// Build a board around an existing store, e.g. [`RecordStore::global`].
    pub fn with_store<R, F>(
        store: Arc<RecordStore>,
        config: BoardConfig,
        form: H,
        mut renderer_for: F,
    ) -> Result<Self>
    where
        R: ListRenderer + 'static,
        F: FnMut(RecordStatus) -> R,
    {
        config.validate()?;

        let input = Arc::new(Mutex::new(InputCollector::new(
            Arc::clone(&store),
            config.clone(),
            form,
        )));
        let form_mount = input.lock().mount().clone();
        let on_submit = InputCollector::bind(&input);

        let active = FilteredView::new(
            RecordStatus::Active,
            Arc::clone(&store),
            &config.host_id,
            renderer_for(RecordStatus::Active),
        );
        let finished = FilteredView::new(
            RecordStatus::Finished,
            Arc::clone(&store),
            &config.host_id,
            renderer_for(RecordStatus::Finished),
        );

        tracing::debug!(host = %config.host_id, "board assembled");
        Ok(Self {
            config,
            store,
            input,
            form_mount,
            on_submit,
            active,
            finished,
        })
    }

    /// Trigger a form submission.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut event = SubmitEvent::new();
        (self.on_submit)(&mut event)
    }

    /// Mark a record finished, moving it from the active to the finished list.
    pub fn finish(&self, id: RecordId) -> Result<Record> {
        self.store.set_status(id, RecordStatus::Finished)
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Lock the input collector, e.g. to fill in the form.
    ///
    /// Release the guard before calling [`submit`](Self::submit).
    pub fn input(&self) -> MutexGuard<'_, InputCollector<H>> {
        self.input.lock()
    }

    pub fn view(&self, category: RecordStatus) -> &FilteredView {
        match category {
            RecordStatus::Active => &self.active,
            RecordStatus::Finished => &self.finished,
        }
    }

    /// Snapshots over a channel sized by `channel_buffer_size`.
    pub fn subscribe_channel(&self) -> SubscriptionHandle {
        self.store.subscribe_channel(self.config.channel_buffer_size)
    }

    /// Mount points in creation order.
    pub fn mounts(&self) -> Vec<Mount> {
        vec![
            self.form_mount.clone(),
            self.active.mount().clone(),
            self.finished.mount().clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::InsertPosition;
    use crate::error::BoardError;
    use crate::input::InMemoryForm;
    use crate::view::TextRenderer;

    fn board() -> Board<InMemoryForm> {
        Board::new(BoardConfig::default(), InMemoryForm::new(), |_| TextRenderer::new()).unwrap()
    }

    #[test]
    fn test_mount_order() {
        let mounts = board().mounts();
        let ids: Vec<_> = mounts.iter().map(|m| m.element_id.as_str()).collect();
        assert_eq!(ids, vec!["user-input", "active-projects", "finished-projects"]);
        assert_eq!(mounts[0].position, InsertPosition::AtStart);
        assert!(mounts.iter().all(|m| m.host_id == "app"));
    }

    #[test]
    fn test_mounts_while_input_is_locked() {
        let board = board();
        let mut input = board.input();
        input.host_mut().fill("Build API", "Design and implement", "3");

        let mounts = board.mounts();
        assert_eq!(mounts[0], *input.mount());
        assert_eq!(mounts.len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BoardConfig {
            capacity_min: 3,
            capacity_max: 1,
            ..Default::default()
        };
        let result = Board::new(config, InMemoryForm::new(), |_| TextRenderer::new());
        assert!(matches!(result, Err(BoardError::Config(_))));
    }

    #[test]
    fn test_finish_moves_record() {
        let mut board = board();
        board
            .input()
            .host_mut()
            .fill("Build API", "Design and implement", "3");

        let record = match board.submit() {
            SubmitOutcome::Committed(record) => record,
            other => panic!("expected commit, got {:?}", other),
        };
        assert_eq!(board.view(RecordStatus::Active).len(), 1);

        board.finish(record.id).unwrap();
        assert!(board.view(RecordStatus::Active).is_empty());
        assert_eq!(board.view(RecordStatus::Finished).items()[0].id, record.id);
    }
}
