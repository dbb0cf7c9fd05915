use floorplan_engine::{
    ContainerRect, MarkerDraft, MarkerHandle, MarkerPatch, PointerPos, ViewerMode,
};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Marker eines Floorplans laden
    LoadMarkers { floorplan_id: i64 },
    /// Angezeigte Seite setzen
    SetPage { page: u32 },
    /// Interaktionsmodus setzen
    SetViewerMode { mode: ViewerMode },
    /// Container-Bounding-Box setzen
    SetContainerRect { rect: ContainerRect },
    /// Platzierungs-Dialog an einer Pointer-Position öffnen
    OpenPlacementDialog { pointer: PointerPos },
    /// Platzierungs-Dialog schließen
    ClosePlacementDialog,
    /// Drag/Resize-Session starten
    BeginMarkerDrag {
        marker_id: u64,
        handle: MarkerHandle,
        pointer: PointerPos,
    },
    /// Pointer-Position der Session aktualisieren
    UpdateMarkerDrag { pointer: PointerPos },
    /// Gedrosselten Live-Zwischenstand übernehmen
    ApplyDragFrame,
    /// Session beenden und Endwert persistieren
    EndMarkerDrag { pointer: PointerPos },
    /// Neuen Marker anlegen
    CreateMarker { draft: MarkerDraft },
    /// Felder eines Markers ändern
    UpdateMarker { marker_id: u64, patch: MarkerPatch },
    /// Marker löschen
    DeleteMarker { marker_id: u64 },
    /// Marker duplizieren
    DuplicateMarker { marker_id: u64 },
    /// Benachrichtigung entfernen
    DismissNotification { index: usize },
}
