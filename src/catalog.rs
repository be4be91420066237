//! The widget catalog: the closed set of widgets a room can add.
//!
//! Mirrors what the add-widget dialog offers. Retired widgets are absent
//! here even when old layouts still reference them; those are cleaned up
//! on read via [`RETIRED_WIDGET_IDS`](crate::RETIRED_WIDGET_IDS).

use crate::types::{WidgetDescriptor, WidgetKind};

/// Catalog grouping used by the add-widget dialog's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetCategory {
    /// Passive status displays (energy, water, security)
    Monitoring,
    /// Interactive device controls (scenes, thermostat, lights)
    Control,
    /// Music, TV, and entertainment
    Media,
    /// Everything else (notes, reminders)
    Utility,
}

/// One addable widget in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Instance id the widget gets when added to a room
    pub id: &'static str,
    /// Which widget implementation renders it
    pub kind: WidgetKind,
    /// Display name
    pub name: &'static str,
    /// Short description shown in the add-widget dialog
    pub description: &'static str,
    /// Catalog grouping
    pub category: WidgetCategory,
}

impl CatalogEntry {
    /// Mints a visible descriptor for this entry.
    ///
    /// `order` starts at zero; the store renumbers from array position on
    /// save, so the placeholder value never persists.
    pub fn to_descriptor(&self) -> WidgetDescriptor {
        WidgetDescriptor::new(self.id, self.kind, self.name, 0)
    }
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "energy-widget",
        kind: WidgetKind::Energy,
        name: "Energy Usage",
        description: "Monitor electricity consumption and costs",
        category: WidgetCategory::Monitoring,
    },
    CatalogEntry {
        id: "scene-buttons",
        kind: WidgetKind::Scene,
        name: "Scene Controls",
        description: "Quick access to room scenes and presets",
        category: WidgetCategory::Control,
    },
    CatalogEntry {
        id: "temperature-card",
        kind: WidgetKind::Temperature,
        name: "Temperature",
        description: "Control thermostat and view temperature",
        category: WidgetCategory::Control,
    },
    CatalogEntry {
        id: "media-controls",
        kind: WidgetKind::Media,
        name: "Media Controls",
        description: "Control music, TV, and entertainment",
        category: WidgetCategory::Media,
    },
    CatalogEntry {
        id: "notes-widget",
        kind: WidgetKind::Notes,
        name: "Notes",
        description: "Quick notes and reminders for the room",
        category: WidgetCategory::Utility,
    },
    CatalogEntry {
        id: "lighting-controls",
        kind: WidgetKind::Lighting,
        name: "Lighting",
        description: "Control room lights and brightness",
        category: WidgetCategory::Control,
    },
    CatalogEntry {
        id: "security-widget",
        kind: WidgetKind::Security,
        name: "Security",
        description: "Monitor security cameras and alarms",
        category: WidgetCategory::Monitoring,
    },
    CatalogEntry {
        id: "flo-widget",
        kind: WidgetKind::Flo,
        name: "Flo by Moen",
        description: "Track water usage and leak detection",
        category: WidgetCategory::Monitoring,
    },
];

/// All widgets the catalog offers, in display order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Looks up a catalog entry by id.
pub fn catalog_entry(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

/// Catalog entries not yet placed in a room.
///
/// Each widget can appear at most once per room, so entries whose id is in
/// `existing_ids` are filtered out.
pub fn available_for(existing_ids: &[&str]) -> Vec<&'static CatalogEntry> {
    CATALOG
        .iter()
        .filter(|entry| !existing_ids.contains(&entry.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::RETIRED_WIDGET_IDS;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|other| other.id != entry.id),
                "Duplicate catalog id: {}",
                entry.id
            );
        }
    }

    #[test]
    fn test_catalog_excludes_retired_widgets() {
        for retired in RETIRED_WIDGET_IDS {
            assert!(
                catalog_entry(retired).is_none(),
                "Retired widget {} must not be offered",
                retired
            );
        }
    }

    #[test]
    fn test_catalog_has_no_unknown_kinds() {
        assert!(CATALOG.iter().all(|e| e.kind != WidgetKind::Unknown));
    }

    #[test]
    fn test_available_for_filters_existing_ids() {
        let available = available_for(&["energy-widget", "flo-widget"]);

        assert_eq!(available.len(), CATALOG.len() - 2);
        assert!(available.iter().all(|e| e.id != "energy-widget"));
        assert!(available.iter().all(|e| e.id != "flo-widget"));
    }

    #[test]
    fn test_available_for_empty_room_offers_everything() {
        assert_eq!(available_for(&[]).len(), CATALOG.len());
    }

    #[test]
    fn test_to_descriptor_is_visible() {
        let entry = catalog_entry("notes-widget").expect("entry should exist");
        let descriptor = entry.to_descriptor();

        assert_eq!(descriptor.id, "notes-widget");
        assert_eq!(descriptor.kind, WidgetKind::Notes);
        assert_eq!(descriptor.title, "Notes");
        assert!(descriptor.visible);
    }
}
