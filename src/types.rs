//! Core domain types for room layouts.
//!
//! This module defines the persisted data model: WidgetKind,
//! WidgetDescriptor, and RoomLayout. Field names and kind strings match
//! the stored JSON format exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of widget implementations the dashboard can render.
///
/// Serialized as the lowercase kind strings stored under the JSON `type`
/// field. Kind strings outside the closed set deserialize to
/// [`WidgetKind::Unknown`] instead of failing the whole blob; such entries
/// are pruned by the migration step on the next read, the same path
/// retired widget ids take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Energy consumption monitor
    Energy,
    /// Scene and preset buttons
    Scene,
    /// Thermostat card
    Temperature,
    /// Weather forecast
    Weather,
    /// Generic on/off toggle card
    Toggle,
    /// Music and TV media controls
    Media,
    /// Free-form room notes
    Notes,
    /// Light switches and brightness
    Lighting,
    /// Security cameras and alarm state
    Security,
    /// Apple TV remote
    #[serde(rename = "appletv")]
    AppleTv,
    /// Flo by Moen water monitor
    Flo,
    /// Catch-all for kind strings this build does not recognize
    #[serde(other)]
    Unknown,
}

/// One entry in a room's ordered widget list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Stable unique identifier within a room (e.g. `"energy-widget"`)
    pub id: String,
    /// Which widget implementation renders this entry
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Display label, not structurally significant
    pub title: String,
    /// Reserved show/hide flag; round-trips but no caller toggles it yet
    pub visible: bool,
    /// Render position, ascending; exactly `0..len` after any save
    pub order: u32,
}

impl WidgetDescriptor {
    /// Creates a visible descriptor with the given identity and position.
    pub fn new(id: &str, kind: WidgetKind, title: &str, order: u32) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            visible: true,
            order,
        }
    }
}

/// A room's persisted layout record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLayout {
    /// Room name, also the key in the whole-store blob
    pub room_name: String,
    /// Widget list; the `order` field is authoritative, not array position
    pub widgets: Vec<WidgetDescriptor>,
    /// When the record was last saved; set by the store, never the caller
    pub last_updated: DateTime<Utc>,
}
