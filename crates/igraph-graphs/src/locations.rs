//! Registered recording locations and their bucket rotation offsets

use igraph_common::{IGraphError, Result};
use serde::{Deserialize, Serialize};

/// A named recording location.
///
/// `utc_offset_hours` is the fixed hour shift used to relabel UTC buckets
/// as local-time buckets. It is baked in per location and is NOT DST-aware;
/// the IANA identifier is carried alongside so a time-zone-correct
/// replacement has the data it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub key: String,
    pub display_name: String,
    pub timezone: String,
    pub utc_offset_hours: u8,
}

/// Immutable mapping from location key to time-zone data.
///
/// Constructed once at startup and passed by reference into the merger;
/// iteration order is registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    /// The two locations the recordings come from
    pub fn with_defaults() -> Self {
        Self {
            locations: vec![
                Location {
                    key: "LA".to_string(),
                    display_name: "Los Angeles".to_string(),
                    timezone: "America/Los_Angeles".to_string(),
                    utc_offset_hours: 17,
                },
                Location {
                    key: "Pittsburgh".to_string(),
                    display_name: "Pittsburgh".to_string(),
                    timezone: "America/New_York".to_string(),
                    utc_offset_hours: 20,
                },
            ],
        }
    }

    /// Look up a location by key
    pub fn resolve(&self, key: &str) -> Result<&Location> {
        self.locations
            .iter()
            .find(|location| location.key == key)
            .ok_or_else(|| IGraphError::config(format!("unknown location key: {key:?}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
