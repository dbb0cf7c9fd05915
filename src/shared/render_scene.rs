//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Darstellung sie konsumiert.

use floorplan_engine::{ContainerRect, MarkerSize, MarkerType, PercentPos, PixelPos, ViewerMode};

/// Darstellungsdaten eines einzelnen Markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub marker_id: u64,
    pub marker_type: MarkerType,
    /// Badge-Text ("AP1", "C12", …)
    pub display_label: String,
    /// Freitext-Label des Markers
    pub label: Option<String>,
    /// Position in Prozent (inkl. laufendem Drag-Zwischenstand)
    pub position: PercentPos,
    /// CSS-Position relativ zum Container; `None` vor dem ersten Layout
    pub pixels: Option<PixelPos>,
    /// Effektive Größe (inkl. laufendem Resize-Zwischenstand)
    pub size: MarkerSize,
    /// Marker ist Ziel der aktiven Drag/Resize-Session
    pub is_dragging: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Angezeigte Seite
    pub page: u32,
    /// Aktiver Interaktionsmodus
    pub mode: ViewerMode,
    /// Container-Bounding-Box (falls gelayoutet)
    pub container: Option<ContainerRect>,
    /// Marker der Seite, aufsteigend nach ID
    pub markers: Vec<MarkerView>,
}

impl RenderScene {
    /// Gibt zurück, ob Marker auf der Seite liegen.
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }

    /// Marker nach ID.
    pub fn marker(&self, marker_id: u64) -> Option<&MarkerView> {
        self.markers.iter().find(|m| m.marker_id == marker_id)
    }
}
