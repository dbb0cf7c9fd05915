//! Payloads der Equipment-Collections (`/access-points`, `/cameras`, …).

use floorplan_engine::NewMarker;
use serde::{Deserialize, Serialize};

/// Neuer Equipment-Datensatz, der beim Platzieren eines Markers angelegt wird.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentDraft {
    /// Anzeigename (aus dem Marker-Label oder generiert)
    pub name: String,
    /// Floorplan, auf dem das Equipment platziert wird
    pub floorplan_id: i64,
}

impl EquipmentDraft {
    /// Leitet den Equipment-Entwurf aus einem Marker-Payload ab.
    pub fn for_marker(marker: &NewMarker) -> Self {
        let name = marker
            .label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("New {}", marker.marker_type.as_str().replace('_', " ")));
        Self {
            name,
            floorplan_id: marker.floorplan_id,
        }
    }
}

/// Antwort der Equipment-API (nur die für Marker relevanten Felder).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
