//! # Record Board
//!
//! A form-to-list core: submitted records are validated, committed to a
//! single observable store, and immediately reflected in filtered lists.
//!
//! ## Core Concepts
//!
//! - **Records**: title, description, capacity and an `Active`/`Finished` status
//! - **Store**: the one authoritative, ordered record collection; every
//!   mutation fans out a full snapshot to subscribers, in subscription order
//! - **Validation**: declarative per-field rules checked before any commit
//! - **Views**: per-status lists recomputed and redrawn on every snapshot
//!
//! ## Example
//!
//! ```
//! use recordboard::{Board, BoardConfig, InMemoryForm, RecordStatus, TextRenderer};
//!
//! let mut board = Board::new(BoardConfig::default(), InMemoryForm::new(), |_| {
//!     TextRenderer::new()
//! })?;
//!
//! board.input().host_mut().fill("Build API", "Design and implement", "3");
//! assert!(board.submit().is_committed());
//!
//! assert_eq!(board.view(RecordStatus::Active).len(), 1);
//! assert!(board.view(RecordStatus::Finished).is_empty());
//! # Ok::<(), recordboard::BoardError>(())
//! ```

pub mod board;
pub mod component;
pub mod config;
pub mod error;
pub mod input;
pub mod store;
pub mod subscriptions;
pub mod types;
pub mod validation;
pub mod view;

// Re-exports
pub use board::Board;
pub use component::{Component, InsertPosition, Mount};
pub use config::BoardConfig;
pub use error::{BoardError, Field, FieldViolation, Result, ValidationError};
pub use input::{
    FormHost, FormValues, InMemoryForm, InputCollector, SubmitEvent, SubmitHandler, SubmitOutcome,
};
pub use store::RecordStore;
pub use subscriptions::{DropReason, Listener, StoreEvent, SubscriptionHandle, SubscriptionId};
pub use types::*;
pub use validation::{check, validate, FieldValue, ValidationRule, Violation};
pub use view::{filter_by_status, FilteredView, Frame, ListRenderer, TextRenderer};
