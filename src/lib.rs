//! Per-room widget layout persistence for a smart-home dashboard.
//!
//! This crate owns the ordered list of widgets shown in each room of the
//! dashboard. Layouts are persisted as a single JSON blob through a
//! pluggable key-value backend, with hard-coded defaults for rooms that
//! were never saved and a self-healing migration that prunes retired
//! widgets from older stored data on read.
//!
//! Layout is cosmetic and must never block rendering, so no operation on
//! [`LayoutStore`] returns an error: read failures degrade to the default
//! layout, write failures are logged and leave the previous persisted
//! state untouched.
//!
//! # Example
//!
//! ```
//! use room_layouts::LayoutStore;
//!
//! let mut store = LayoutStore::in_memory();
//!
//! // Rooms that were never saved get their default widget set.
//! let mut widgets = store.room_layout("Home");
//! assert_eq!(widgets.len(), 3);
//!
//! // Reorder and persist; order is renumbered from array position.
//! widgets.swap(0, 1);
//! store.save_room_layout("Home", &widgets);
//! assert_eq!(store.room_layout("Home")[0].id, "energy-widget");
//! ```

#![warn(missing_docs)]

mod catalog;
mod climate;
mod defaults;
mod editor;
mod error;
mod migration;
mod storage;
mod store;
mod types;

// Re-export all public types
pub use catalog::{available_for, catalog, catalog_entry, CatalogEntry, WidgetCategory};
pub use climate::{ClimateMode, ClimateState, ClimateStore};
pub use defaults::default_layout;
pub use editor::RoomEditor;
pub use error::{Result, StorageError};
pub use migration::RETIRED_WIDGET_IDS;
pub use storage::{default_store_dir, FileBackend, MemoryBackend, StorageBackend};
pub use store::LayoutStore;
pub use types::{RoomLayout, WidgetDescriptor, WidgetKind};
