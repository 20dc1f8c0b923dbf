//! Journal Core - Library state and derived views for the book journal
//!
//! This crate provides everything between the domain types and a renderer:
//!
//! - **Store**: single owner of the library state, applying actions through a reducer
//! - **Action/Event**: the state transitions and what they did
//! - **Tree**: genre forest with direct and recursive book counts
//! - **Hierarchy**: root-first genre paths and descendant scopes
//! - **Search**: scoped free-text search, most recent first
//! - **View**: all derived views for one snapshot
//! - **Draft**: editable copy of a book's notes with dirty tracking
//! - **Config**: cover palette, placeholder labels and date display
//!
//! # Architecture
//!
//! The store is the only writer. Everything else is a pure function of a
//! state snapshot, recomputed after every change:
//!
//! ```text
//! Action → LibraryStore → Arc<LibraryState> → LibraryView
//!                ↓
//!           StoreEvent → observers
//! ```

pub mod action;
pub mod clock;
pub mod collation;
pub mod config;
pub mod content;
pub mod draft;
pub mod error;
pub mod event;
pub mod format;
pub mod hierarchy;
pub mod ids;
pub mod sample;
pub mod search;
pub mod state;
pub mod store;
pub mod tree;
pub mod view;

pub use action::Action;
pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use collation::{BinaryCollator, Collator, UnicodeCollator};
pub use config::{DisplayConfig, JournalConfig, Labels, DEFAULT_PALETTE};
pub use draft::{BookDraft, DraftField};
pub use error::{ConfigError, JournalError, Result};
pub use event::{StoreEvent, StoreObserver};
pub use format::{ChronoDateFormatter, DateFormatter};
pub use hierarchy::{descendant_scope, genre_path};
pub use ids::{IdGenerator, UuidGenerator};
#[cfg(any(test, feature = "testing"))]
pub use ids::SequentialIds;
pub use sample::sample_library;
pub use search::{haystack, search_books};
pub use state::LibraryState;
pub use store::{LibraryStore, StoreEnv};
pub use tree::{build_genre_tree, flatten_tree, format_tree, GenreTreeNode};
pub use view::LibraryView;
