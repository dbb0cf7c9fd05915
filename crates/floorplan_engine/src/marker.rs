//! Marker-Datenmodell und Payloads für die Persistenz.
//!
//! Ein Marker ist eine positionierte Annotation auf genau einer Seite eines
//! Floorplan-Dokuments. Feldnamen entsprechen dem Wire-Format der REST-API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coords::{PercentPos, clamp_percent};
use crate::error::MarkerError;

/// Equipment-ID für Notiz-Marker (kein Equipment).
pub const NOTE_EQUIPMENT_ID: i64 = -1;
/// Equipment-ID als Signal „neues Equipment anlegen" beim Erstellen.
pub const NEW_EQUIPMENT_ID: i64 = 0;
/// Standard-Label für Notizen ohne Text.
pub const DEFAULT_NOTE_LABEL: &str = "Note";
/// Suffix für duplizierte Labels.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Art des Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerType {
    /// Zutrittspunkt (Tür, Leser)
    AccessPoint,
    /// Kamera
    Camera,
    /// Aufzug
    Elevator,
    /// Gegensprechanlage
    Intercom,
    /// Freitext-Notiz ohne Equipment
    Note,
}

impl MarkerType {
    /// Alle Typen in Anzeige-Reihenfolge.
    pub const ALL: [MarkerType; 5] = [
        MarkerType::AccessPoint,
        MarkerType::Camera,
        MarkerType::Elevator,
        MarkerType::Intercom,
        MarkerType::Note,
    ];

    /// Präfix der Anzeigenummer ("AP1", "C2", …).
    pub fn prefix(self) -> &'static str {
        match self {
            MarkerType::AccessPoint => "AP",
            MarkerType::Camera => "C",
            MarkerType::Elevator => "E",
            MarkerType::Intercom => "I",
            MarkerType::Note => "N",
        }
    }

    /// Wire-Name des Typs.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerType::AccessPoint => "access_point",
            MarkerType::Camera => "camera",
            MarkerType::Elevator => "elevator",
            MarkerType::Intercom => "intercom",
            MarkerType::Note => "note",
        }
    }

    /// `true` für Notizen.
    pub fn is_note(self) -> bool {
        self == MarkerType::Note
    }

    /// REST-Collection des zugehörigen Equipments (None für Notizen).
    pub fn equipment_collection(self) -> Option<&'static str> {
        match self {
            MarkerType::AccessPoint => Some("access-points"),
            MarkerType::Camera => Some("cameras"),
            MarkerType::Elevator => Some("elevators"),
            MarkerType::Intercom => Some("intercoms"),
            MarkerType::Note => None,
        }
    }

    /// Standardgröße in logischen Einheiten, wenn der Marker keine eigene hat.
    pub fn default_size(self) -> MarkerSize {
        match self {
            MarkerType::Note => MarkerSize::new(120.0, 40.0),
            _ => MarkerSize::new(32.0, 32.0),
        }
    }
}

impl std::fmt::Display for MarkerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breite/Höhe eines Markers in logischen Einheiten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerSize {
    pub width: f64,
    pub height: f64,
}

impl MarkerSize {
    /// Erstellt eine Größe.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Hebt beide Dimensionen auf mindestens `min` an.
    pub fn floored(self, min: f64) -> Self {
        Self {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }
}

fn default_page() -> u32 {
    1
}

/// Ein gespeicherter Marker, wie ihn die Persistenz liefert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Von der Persistenz vergebene ID (monoton steigend)
    pub id: u64,
    /// Besitzendes Floorplan-Dokument
    pub floorplan_id: i64,
    /// Seite im Dokument (1-basiert)
    #[serde(default = "default_page")]
    pub page: u32,
    /// Marker-Art
    pub marker_type: MarkerType,
    /// Referenziertes Equipment, `-1` bei Notizen
    pub equipment_id: i64,
    /// X-Position in Prozent der Container-Breite
    pub position_x: f64,
    /// Y-Position in Prozent der Container-Höhe
    pub position_y: f64,
    /// Anzeigetext (Notiztext bzw. Equipment-Name)
    #[serde(default)]
    pub label: Option<String>,
    /// Optionale Breite (sonst Standard pro Typ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Optionale Höhe (sonst Standard pro Typ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Erstellungszeitpunkt
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Marker {
    /// Aktuelle Position als Prozent-Koordinate.
    pub fn position(&self) -> PercentPos {
        PercentPos::new(self.position_x, self.position_y)
    }

    /// Setzt die Position (geklemmt).
    pub fn set_position(&mut self, position: PercentPos) {
        let position = PercentPos::new(position.x, position.y);
        self.position_x = position.x;
        self.position_y = position.y;
    }

    /// Explizit gesetzte Größe, falls Breite und Höhe vorhanden sind.
    pub fn size(&self) -> Option<MarkerSize> {
        Some(MarkerSize::new(self.width?, self.height?))
    }

    /// Größe für die Darstellung (eigene oder Typ-Standard).
    pub fn effective_size(&self) -> MarkerSize {
        self.size().unwrap_or_else(|| self.marker_type.default_size())
    }

    /// Setzt eine eigene Größe.
    pub fn set_size(&mut self, size: MarkerSize) {
        self.width = Some(size.width);
        self.height = Some(size.height);
    }

    /// Stellt die Invarianten nach dem Empfang her: Positionen in [0, 100],
    /// Notizen ohne Equipment.
    pub fn normalized(mut self) -> Self {
        self.position_x = clamp_percent(self.position_x);
        self.position_y = clamp_percent(self.position_y);
        if self.marker_type.is_note() {
            self.equipment_id = NOTE_EQUIPMENT_ID;
        }
        self.page = self.page.max(1);
        self
    }

    /// Entwurf für ein Duplikat: um `offset` Prozentpunkte versetzt (max. 100),
    /// bei Equipment-Markern mit `equipment_id = 0` (neues Equipment anlegen),
    /// nicht-leere Labels mit " (Copy)".
    pub fn duplicate_draft(&self, offset: f64) -> MarkerDraft {
        let position = self.position().offset(offset, offset);
        let equipment_id = if self.marker_type.is_note() {
            NOTE_EQUIPMENT_ID
        } else {
            NEW_EQUIPMENT_ID
        };
        let label = self
            .label
            .as_deref()
            .filter(|label| !label.is_empty())
            .map(|label| format!("{label}{COPY_SUFFIX}"));

        MarkerDraft {
            floorplan_id: Some(self.floorplan_id),
            page: Some(self.page),
            marker_type: Some(self.marker_type),
            equipment_id: Some(equipment_id),
            position_x: Some(position.x),
            position_y: Some(position.y),
            label,
            size: self.size(),
        }
    }
}

/// Entwurf eines neuen Markers, Pflichtfelder optional bis zur Validierung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerDraft {
    pub floorplan_id: Option<i64>,
    /// Seite, Standard 1
    pub page: Option<u32>,
    pub marker_type: Option<MarkerType>,
    pub equipment_id: Option<i64>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub label: Option<String>,
    pub size: Option<MarkerSize>,
}

impl MarkerDraft {
    /// Vollständiger Entwurf an einer Position. Equipment-Marker starten mit
    /// `equipment_id = 0`, Notizen mit `-1`.
    pub fn new(
        floorplan_id: i64,
        page: u32,
        marker_type: MarkerType,
        position: PercentPos,
    ) -> Self {
        let equipment_id = if marker_type.is_note() {
            NOTE_EQUIPMENT_ID
        } else {
            NEW_EQUIPMENT_ID
        };
        Self {
            floorplan_id: Some(floorplan_id),
            page: Some(page),
            marker_type: Some(marker_type),
            equipment_id: Some(equipment_id),
            position_x: Some(position.x),
            position_y: Some(position.y),
            label: None,
            size: None,
        }
    }

    /// Verknüpft ein bestehendes Equipment.
    pub fn with_equipment(mut self, equipment_id: i64) -> Self {
        self.equipment_id = Some(equipment_id);
        self
    }

    /// Setzt das Label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Prüft die Pflichtfelder und liefert den sendefertigen Payload.
    pub fn validate(&self) -> Result<NewMarker, MarkerError> {
        let floorplan_id = self
            .floorplan_id
            .ok_or(MarkerError::Validation { field: "floorplan_id" })?;
        let marker_type = self
            .marker_type
            .ok_or(MarkerError::Validation { field: "marker_type" })?;
        let equipment_id = self
            .equipment_id
            .ok_or(MarkerError::Validation { field: "equipment_id" })?;
        let position_x = finite(self.position_x, "position_x")?;
        let position_y = finite(self.position_y, "position_y")?;

        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(MarkerError::Validation { field: "page" });
        }

        let equipment_id = if marker_type.is_note() {
            NOTE_EQUIPMENT_ID
        } else if equipment_id < NEW_EQUIPMENT_ID {
            return Err(MarkerError::Validation { field: "equipment_id" });
        } else {
            equipment_id
        };

        let label = match (marker_type, self.label.as_deref().map(str::trim)) {
            (MarkerType::Note, None | Some("")) => Some(DEFAULT_NOTE_LABEL.to_string()),
            (_, Some("")) | (_, None) => None,
            (_, Some(_)) => self.label.clone(),
        };

        Ok(NewMarker {
            floorplan_id,
            page,
            marker_type,
            equipment_id,
            position_x: clamp_percent(position_x),
            position_y: clamp_percent(position_y),
            label,
            width: self.size.map(|s| s.width),
            height: self.size.map(|s| s.height),
        })
    }
}

fn finite(value: Option<f64>, field: &'static str) -> Result<f64, MarkerError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(MarkerError::Validation { field }),
    }
}

/// Validierter Create-Payload (`POST /floorplan-markers`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMarker {
    pub floorplan_id: i64,
    pub page: u32,
    pub marker_type: MarkerType,
    pub equipment_id: i64,
    pub position_x: f64,
    pub position_y: f64,
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Geänderte Felder eines Markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerPatch {
    pub position: Option<PercentPos>,
    pub size: Option<MarkerSize>,
    /// `Some(None)` entfernt das Label
    pub label: Option<Option<String>>,
}

impl MarkerPatch {
    /// Nur Position ändern.
    pub fn position(position: PercentPos) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Nur Größe ändern.
    pub fn size(size: MarkerSize) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Nur Label ändern.
    pub fn label(label: Option<String>) -> Self {
        Self {
            label: Some(label),
            ..Self::default()
        }
    }

    /// `true`, wenn nichts geändert wird.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.size.is_none() && self.label.is_none()
    }
}

/// Update-Anfrage vor der Vollständigkeitsprüfung.
///
/// Der Update-Endpunkt ersetzt den ganzen Datensatz: `floorplan_id`, `page`,
/// `marker_type` und `equipment_id` müssen bei jedem Update mitgeschickt werden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerUpdate {
    pub floorplan_id: Option<i64>,
    pub page: Option<u32>,
    pub marker_type: Option<MarkerType>,
    pub equipment_id: Option<i64>,
    pub position: Option<PercentPos>,
    pub size: Option<MarkerSize>,
    pub label: Option<Option<String>>,
}

impl MarkerUpdate {
    /// Übernimmt den vollständigen Feldsatz eines bekannten Markers.
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            floorplan_id: Some(marker.floorplan_id),
            page: Some(marker.page),
            marker_type: Some(marker.marker_type),
            equipment_id: Some(marker.equipment_id),
            position: Some(marker.position()),
            size: marker.size(),
            label: Some(marker.label.clone()),
        }
    }

    /// Überschreibt mit den Feldern eines Patches.
    pub fn apply(mut self, patch: &MarkerPatch) -> Self {
        if let Some(position) = patch.position {
            self.position = Some(position);
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        if let Some(label) = &patch.label {
            self.label = Some(label.clone());
        }
        self
    }

    /// Prüft den Pflichtfeld-Satz und baut den sendefertigen Body.
    pub fn complete(self) -> Result<MarkerUpdateBody, MarkerError> {
        let floorplan_id = self
            .floorplan_id
            .ok_or(MarkerError::IncompleteUpdate { field: "floorplan_id" })?;
        let page = self
            .page
            .filter(|page| *page > 0)
            .ok_or(MarkerError::IncompleteUpdate { field: "page" })?;
        let marker_type = self
            .marker_type
            .ok_or(MarkerError::IncompleteUpdate { field: "marker_type" })?;
        let equipment_id = self
            .equipment_id
            .ok_or(MarkerError::IncompleteUpdate { field: "equipment_id" })?;
        let equipment_id = if marker_type.is_note() {
            NOTE_EQUIPMENT_ID
        } else {
            equipment_id
        };
        let position = self.position.map(|p| PercentPos::new(p.x, p.y));

        Ok(MarkerUpdateBody {
            floorplan_id,
            page,
            marker_type,
            equipment_id,
            position_x: position.map(|p| p.x),
            position_y: position.map(|p| p.y),
            label: self.label,
            width: self.size.map(|s| s.width),
            height: self.size.map(|s| s.height),
        })
    }
}

/// Vollständiger Update-Payload (`PUT /floorplan-markers/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerUpdateBody {
    pub floorplan_id: i64,
    pub page: u32,
    pub marker_type: MarkerType,
    pub equipment_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}
