//! The layout store: durable, per-room ordered widget lists.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::defaults::default_layout;
use crate::error::{Result, StorageError};
use crate::migration;
use crate::storage::{MemoryBackend, StorageBackend};
use crate::types::{RoomLayout, WidgetDescriptor};

/// Storage key for the whole multi-room layout blob.
pub(crate) const STORAGE_KEY: &str = "home-dashboard-room-layouts";

/// Durable, per-room ordered widget lists with deterministic defaults.
///
/// The entire multi-room store is one JSON blob mapping room names to
/// [`RoomLayout`] records, so every save is a whole-blob read-modify-write.
/// The backing medium is treated as unreliable (disabled, full, or holding
/// malformed data from an incompatible version): no operation here returns
/// an error. Failed reads fall back to [`default_layout`] and failed
/// writes are logged, leaving the previous persisted state untouched.
///
/// All operations run synchronously to completion, so a save that returns
/// before a subsequent read is guaranteed to be visible to it within the
/// same process. Concurrent writers in other processes are unserialized;
/// last write wins.
#[derive(Debug)]
pub struct LayoutStore<B: StorageBackend> {
    backend: B,
}

impl LayoutStore<MemoryBackend> {
    /// Creates a store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<B: StorageBackend> LayoutStore<B> {
    /// Creates a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read-only access to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the room's widget list, sorted ascending by `order`.
    ///
    /// A room that was never saved gets [`default_layout`] and nothing is
    /// written. A stored list passes through the retirement migration
    /// first; when the migration changed anything, the cleaned list is
    /// persisted back before returning so the next read is already clean.
    pub fn room_layout(&mut self, room_name: &str) -> Vec<WidgetDescriptor> {
        let layouts = self.all_layouts();
        let Some(layout) = layouts.get(room_name) else {
            return default_layout(room_name);
        };

        let (widgets, changed) = migration::clean_widgets(layout.widgets.clone());
        if changed {
            log::debug!("Migrated stored layout for room {}", room_name);
            self.save_room_layout(room_name, &widgets);
        }
        widgets
    }

    /// Persists `widgets` as the room's layout.
    ///
    /// Render order is taken from array position: `order` is renumbered to
    /// `0..len` before storing, and `lastUpdated` is set to now. The save
    /// merges into the whole-store blob, leaving every other room's record
    /// unchanged.
    pub fn save_room_layout(&mut self, room_name: &str, widgets: &[WidgetDescriptor]) {
        let mut layouts = self.all_layouts();

        let widgets = widgets
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, mut widget)| {
                widget.order = index as u32;
                widget
            })
            .collect();

        layouts.insert(
            room_name.to_string(),
            RoomLayout {
                room_name: room_name.to_string(),
                widgets,
                last_updated: Utc::now(),
            },
        );

        if let Err(e) = self.store_all(&layouts) {
            log::warn!("Failed to save layout for room {}: {}", room_name, e);
        }
    }

    /// Deletes the room's record. An absent room is a no-op.
    pub fn remove_room_layout(&mut self, room_name: &str) {
        let mut layouts = self.all_layouts();
        if layouts.remove(room_name).is_none() {
            return;
        }

        if let Err(e) = self.store_all(&layouts) {
            log::warn!("Failed to remove layout for room {}: {}", room_name, e);
        }
    }

    /// Deletes every room's record.
    pub fn clear_all(&mut self) {
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            log::warn!("Failed to clear room layouts: {}", e);
        }
    }

    /// Whether the room has a saved record. Never synthesizes defaults and
    /// never writes.
    pub fn has_room_layout(&self, room_name: &str) -> bool {
        self.all_layouts().contains_key(room_name)
    }

    /// When the room's record was last saved, or `None` if it never was.
    pub fn room_last_updated(&self, room_name: &str) -> Option<DateTime<Utc>> {
        self.all_layouts()
            .get(room_name)
            .map(|layout| layout.last_updated)
    }

    /// Reads the whole multi-room blob, degrading to empty on any failure.
    fn all_layouts(&self) -> HashMap<String, RoomLayout> {
        match self.load_all() {
            Ok(layouts) => layouts,
            Err(e) => {
                log::warn!("Failed to read room layouts, treating store as empty: {}", e);
                HashMap::new()
            }
        }
    }

    fn load_all(&self) -> Result<HashMap<String, RoomLayout>> {
        let Some(blob) = self.backend.load(STORAGE_KEY)? else {
            return Ok(HashMap::new());
        };

        serde_json::from_str(&blob).map_err(|e| StorageError::Parse(e.to_string()))
    }

    fn store_all(&mut self, layouts: &HashMap<String, RoomLayout>) -> Result<()> {
        let blob =
            serde_json::to_string(layouts).map_err(|e| StorageError::Parse(e.to_string()))?;
        self.backend.store(STORAGE_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WidgetKind;

    #[test]
    fn test_save_renumbers_order_from_array_position() {
        let mut store = LayoutStore::in_memory();

        // Caller-supplied order values are stale; array position wins.
        let widgets = vec![
            WidgetDescriptor::new("scene-buttons", WidgetKind::Scene, "Scene Controls", 9),
            WidgetDescriptor::new("energy-widget", WidgetKind::Energy, "Energy Usage", 4),
        ];
        store.save_room_layout("Den", &widgets);

        let saved = store.room_layout("Den");
        assert_eq!(saved[0].id, "scene-buttons");
        assert_eq!(saved[0].order, 0);
        assert_eq!(saved[1].id, "energy-widget");
        assert_eq!(saved[1].order, 1);
    }

    #[test]
    fn test_save_merges_into_whole_store_blob() {
        let mut store = LayoutStore::in_memory();

        store.save_room_layout("Den", &default_layout("Den"));
        store.save_room_layout("Home", &default_layout("Home"));

        assert!(store.has_room_layout("Den"));
        assert!(store.has_room_layout("Home"));
        assert_eq!(store.room_layout("Den").len(), 1);
        assert_eq!(store.room_layout("Home").len(), 3);
    }

    #[test]
    fn test_last_updated_is_set_by_the_store() {
        let mut store = LayoutStore::in_memory();
        assert_eq!(store.room_last_updated("Den"), None);

        let before = Utc::now();
        store.save_room_layout("Den", &default_layout("Den"));
        let updated = store.room_last_updated("Den").expect("record should exist");

        assert!(updated >= before);
        assert!(updated <= Utc::now());
    }
}
