use floorplan_engine::{ContainerRect, MarkerHandle, MarkerType, PointerPos, ViewerMode};

/// Getroffener Marker bei einem Pointer-Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerTarget {
    /// ID des getroffenen Markers
    pub marker_id: u64,
    /// Körper oder Resize-Griff
    pub handle: MarkerHandle,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Floorplan wurde geöffnet, Marker laden
    FloorplanOpened { floorplan_id: i64 },
    /// Marker des aktuellen Floorplans neu laden
    ReloadRequested,
    /// Andere Seite des Dokuments anzeigen
    PageChanged { page: u32 },
    /// Interaktionsmodus gewechselt (Select, Pan, AddMarker)
    ViewerModeChanged { mode: ViewerMode },
    /// Container wurde (neu) gelayoutet
    ContainerResized { rect: ContainerRect },
    /// Pointer-Down, optional über einem Marker
    PointerPressed {
        pointer: PointerPos,
        target: Option<PointerTarget>,
    },
    /// Pointer-Move (global)
    PointerMoved { pointer: PointerPos },
    /// Pointer-Up (global, auch außerhalb verfolgter Elemente)
    PointerReleased { pointer: PointerPos },
    /// Animation-Frame des Hosts
    AnimationFrame,
    /// Platzierungs-Dialog bestätigt
    PlacementConfirmed {
        marker_type: MarkerType,
        label: Option<String>,
        /// Bestehendes Equipment; `None` legt neues an
        equipment_id: Option<i64>,
    },
    /// Platzierungs-Dialog abgebrochen
    PlacementCancelled,
    /// Label eines Markers bearbeitet
    MarkerLabelEdited {
        marker_id: u64,
        label: Option<String>,
    },
    /// Marker löschen
    MarkerDeleteRequested { marker_id: u64 },
    /// Marker duplizieren
    MarkerDuplicateRequested { marker_id: u64 },
    /// Benachrichtigung schließen
    NotificationDismissed { index: usize },
}
