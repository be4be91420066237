//! Per-room climate control state.
//!
//! Temperature controls persist independently of the widget layout: one
//! key per room under a fixed prefix, holding a flat array of per-widget
//! climate state. Same contract as the layout store, with the same guarded
//! reads: failures degrade to the default and are logged, never raised.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};
use crate::storage::StorageBackend;

/// Key prefix for per-room climate records.
pub(crate) const CLIMATE_KEY_PREFIX: &str = "home-dashboard-climate";

/// Thermostat operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateMode {
    /// Heating
    Heat,
    /// Cooling
    Cool,
    /// Fan only
    Blow,
    /// Automatic heat/cool switching
    Auto,
    /// Thermostat off
    Off,
}

/// Climate state for one temperature widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateState {
    /// Measured temperature, degrees Fahrenheit
    pub current_temp: i32,
    /// Setpoint, degrees Fahrenheit
    pub target_temp: i32,
    /// Active mode
    pub mode: ClimateMode,
    /// Relative humidity, percent
    pub humidity: u8,
}

impl Default for ClimateState {
    fn default() -> Self {
        Self {
            current_temp: 72,
            target_temp: 70,
            mode: ClimateMode::Cool,
            humidity: 45,
        }
    }
}

/// Per-room climate persistence, parallel to
/// [`LayoutStore`](crate::LayoutStore).
///
/// Unlike the layout store's single shared blob, each room's climate state
/// lives under its own key (`home-dashboard-climate-<roomName>`), so rooms
/// never rewrite each other's records.
#[derive(Debug)]
pub struct ClimateStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ClimateStore<B> {
    /// Creates a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the room's climate widgets, or an empty list if the room
    /// was never saved or its record cannot be read.
    pub fn room_climate(&self, room_name: &str) -> Vec<ClimateState> {
        match self.load_room(room_name) {
            Ok(states) => states,
            Err(e) => {
                log::warn!("Failed to read climate state for room {}: {}", room_name, e);
                Vec::new()
            }
        }
    }

    /// Persists the room's climate widgets.
    pub fn save_room_climate(&mut self, room_name: &str, states: &[ClimateState]) {
        let blob = match serde_json::to_string(states) {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("Failed to serialize climate state for room {}: {}", room_name, e);
                return;
            }
        };

        if let Err(e) = self.backend.store(&Self::key_for(room_name), &blob) {
            log::warn!("Failed to save climate state for room {}: {}", room_name, e);
        }
    }

    /// Deletes the room's climate record. An absent room is a no-op.
    pub fn remove_room_climate(&mut self, room_name: &str) {
        if let Err(e) = self.backend.remove(&Self::key_for(room_name)) {
            log::warn!("Failed to remove climate state for room {}: {}", room_name, e);
        }
    }

    fn key_for(room_name: &str) -> String {
        format!("{}-{}", CLIMATE_KEY_PREFIX, room_name)
    }

    fn load_room(&self, room_name: &str) -> Result<Vec<ClimateState>> {
        let Some(blob) = self.backend.load(&Self::key_for(room_name))? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&blob).map_err(|e| StorageError::Parse(e.to_string()))
    }
}
