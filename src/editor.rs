//! Room editing surface: the caller side of the layout store contract.
//!
//! Wraps one room's widget list the way the drag-and-drop editor uses it:
//! every mutation re-derives render order from array position and saves
//! through the store immediately, so the persisted record always matches
//! what is on screen.

use crate::catalog::CatalogEntry;
use crate::storage::StorageBackend;
use crate::store::LayoutStore;
use crate::types::WidgetDescriptor;

/// Edits one room's widget list against a [`LayoutStore`].
#[derive(Debug)]
pub struct RoomEditor<'a, B: StorageBackend> {
    store: &'a mut LayoutStore<B>,
    room_name: String,
    widgets: Vec<WidgetDescriptor>,
}

impl<'a, B: StorageBackend> RoomEditor<'a, B> {
    /// Opens the room for editing, loading its current (or default) layout.
    pub fn open(store: &'a mut LayoutStore<B>, room_name: &str) -> Self {
        let widgets = store.room_layout(room_name);
        Self {
            store,
            room_name: room_name.to_string(),
            widgets,
        }
    }

    /// The room being edited.
    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// The widgets in render order.
    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    /// Moves the widget at `from` to position `to` (drag-end semantics:
    /// remove, then insert).
    ///
    /// Returns `false` without saving when either index is out of range.
    pub fn move_widget(&mut self, from: usize, to: usize) -> bool {
        if from >= self.widgets.len() || to >= self.widgets.len() {
            return false;
        }
        if from != to {
            let widget = self.widgets.remove(from);
            self.widgets.insert(to, widget);
            self.save();
        }
        true
    }

    /// Removes the widget with the given id.
    ///
    /// Returns `false` without saving when no widget has that id.
    pub fn remove_widget(&mut self, id: &str) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|widget| widget.id != id);
        if self.widgets.len() == before {
            return false;
        }
        self.save();
        true
    }

    /// Appends a widget from the catalog to the end of the room.
    ///
    /// Returns `false` without saving when the room already contains the
    /// entry's id; ids are unique within a room.
    pub fn add_widget(&mut self, entry: &CatalogEntry) -> bool {
        if self.widgets.iter().any(|widget| widget.id == entry.id) {
            return false;
        }
        self.widgets.push(entry.to_descriptor());
        self.save();
        true
    }

    fn save(&mut self) {
        self.store.save_room_layout(&self.room_name, &self.widgets);
        // Reload so local `order` values match the renumbered record
        self.widgets = self.store.room_layout(&self.room_name);
    }
}
