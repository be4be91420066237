//! Hard-coded default layouts for rooms that were never saved.

use crate::types::{WidgetDescriptor, WidgetKind};

/// The room name that receives the richer default widget set.
const HOME_ROOM: &str = "Home";

/// Returns the default widget list for a room with no saved layout.
///
/// The room literally named `"Home"` gets scene controls, the energy
/// monitor, and the Flo water monitor; every other room starts with just
/// the energy monitor. Synthesizing a default never writes anything.
pub fn default_layout(room_name: &str) -> Vec<WidgetDescriptor> {
    if room_name == HOME_ROOM {
        vec![
            WidgetDescriptor::new("scene-buttons", WidgetKind::Scene, "Scene Controls", 0),
            WidgetDescriptor::new("energy-widget", WidgetKind::Energy, "Energy Usage", 1),
            WidgetDescriptor::new("flo-widget", WidgetKind::Flo, "Flo by Moen", 2),
        ]
    } else {
        vec![WidgetDescriptor::new(
            "energy-widget",
            WidgetKind::Energy,
            "Energy Usage",
            0,
        )]
    }
}
