//! Floorplan-Engine: headless Kern für Marker auf Floorplan-Dokumenten.
//!
//! Enthält keine I/O. Persistenz und UI-Anbindung liegen im Host-Crate.
//!
//! - `coords`: Pointer-Koordinaten ↔ Prozent-Koordinaten eines Containers
//! - `marker`: Datenmodell, Create/Update-Payloads und deren Validierung
//! - `drag`: Drag/Resize-Zustandsmaschine (genau eine aktive Session)
//! - `sequence`: Laufende Anzeigenummern pro Marker-Typ

pub mod coords;
pub mod drag;
pub mod error;
pub mod marker;
pub mod sequence;

pub use coords::{ContainerRect, PercentPos, PixelPos, PointerPos, to_percent, to_pixels};
pub use drag::{
    DragChange, DragCommit, DragController, DragKind, DragPreview, DragState, MarkerHandle,
    ViewerMode,
};
pub use error::MarkerError;
pub use marker::{
    Marker, MarkerDraft, MarkerPatch, MarkerSize, MarkerType, MarkerUpdate, MarkerUpdateBody,
    NewMarker,
};
pub use sequence::{display_label, display_number, explicit_number, sequence_numbers};
