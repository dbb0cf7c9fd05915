//! Drag/Resize-Zustandsmaschine für genau einen Marker.
//!
//! `Idle → Dragging | Resizing → Idle`. Die Session ist ein expliziter Wert
//! im Controller; es gibt keinen globalen Zwischenzustand. Während einer
//! aktiven Session werden weitere Pointer-Downs ignoriert.
//!
//! Live-Updates laufen gedrosselt über `animation_frame()` (höchstens eines pro
//! Frame). Der Commit bei `pointer_up` wird immer aus der Release-Position
//! berechnet, nie aus einem gedrosselten Zwischenstand.

use crate::coords::{ContainerRect, PercentPos, PointerPos, to_percent};
use crate::error::MarkerError;
use crate::marker::{Marker, MarkerSize};

/// Mindestgröße eines Markers beim Resizen (logische Einheiten).
pub const DEFAULT_MIN_MARKER_SIZE: f64 = 20.0;

/// Interaktionsmodus des Floorplan-Viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    /// Marker auswählen, verschieben, skalieren
    #[default]
    Select,
    /// Dokument verschieben
    Pan,
    /// Klick auf das Dokument platziert einen neuen Marker
    AddMarker,
}

/// Getroffener Bereich eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerHandle {
    /// Marker-Körper (verschieben)
    Body,
    /// Resize-Griff (skalieren)
    Resize,
}

/// Art der aktiven Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

/// Änderung, die eine Session am Marker vornimmt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragChange {
    /// Neue Position in Prozent
    Position(PercentPos),
    /// Neue Größe in logischen Einheiten
    Size(MarkerSize),
}

/// Visueller Zwischenstand während einer Session (noch nicht persistiert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPreview {
    pub marker_id: u64,
    pub change: DragChange,
}

/// Ergebnis einer beendeten Session, das persistiert werden soll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCommit {
    pub marker_id: u64,
    /// Endwert aus der Release-Position
    pub change: DragChange,
    /// Bestätigter Wert vor der Session (für Revert bei Fehler)
    pub previous: DragChange,
}

/// Daten einer aktiven Session.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Betroffener Marker
    pub marker_id: u64,
    container: ContainerRect,
    origin: PointerPos,
    start_position: PercentPos,
    start_size: MarkerSize,
    latest: PointerPos,
    frame_pending: bool,
}

/// Zustand des Controllers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// Keine aktive Session
    #[default]
    Idle,
    /// Marker wird verschoben
    Dragging(DragSession),
    /// Marker wird skaliert
    Resizing(DragSession),
}

/// Single-Slot-Controller für Drag/Resize.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    min_size: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MARKER_SIZE)
    }
}

impl DragController {
    /// Erstellt einen Controller mit gegebener Mindestgröße.
    pub fn new(min_size: f64) -> Self {
        Self {
            state: DragState::Idle,
            min_size: min_size.max(1.0),
        }
    }

    /// Aktueller Zustand (read-only).
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// `true`, solange eine Session läuft.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Marker der aktiven Session.
    pub fn active_marker(&self) -> Option<u64> {
        self.session().map(|s| s.marker_id)
    }

    /// Art der aktiven Session.
    pub fn kind(&self) -> Option<DragKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(_) => Some(DragKind::Move),
            DragState::Resizing(_) => Some(DragKind::Resize),
        }
    }

    fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(s) | DragState::Resizing(s) => Some(s),
        }
    }

    fn session_mut(&mut self) -> Option<&mut DragSession> {
        match &mut self.state {
            DragState::Idle => None,
            DragState::Dragging(s) | DragState::Resizing(s) => Some(s),
        }
    }

    /// Pointer-Down über einem Marker.
    ///
    /// `Ok(true)` wenn eine Session gestartet wurde, `Ok(false)` wenn ignoriert
    /// (falscher Modus oder bereits aktiv).
    pub fn pointer_down(
        &mut self,
        mode: ViewerMode,
        marker: &Marker,
        handle: MarkerHandle,
        pointer: PointerPos,
        container: ContainerRect,
    ) -> Result<bool, MarkerError> {
        if mode != ViewerMode::Select {
            log::debug!("Pointer-Down auf Marker {} im Modus {:?} ignoriert", marker.id, mode);
            return Ok(false);
        }
        if let Some(active) = self.active_marker() {
            log::debug!(
                "Marker {} ignoriert: Session für Marker {} läuft noch",
                marker.id,
                active
            );
            return Ok(false);
        }
        if !container.is_laid_out() {
            return Err(MarkerError::LayoutNotReady {
                width: container.width,
                height: container.height,
            });
        }

        let session = DragSession {
            marker_id: marker.id,
            container,
            origin: pointer,
            start_position: marker.position(),
            start_size: marker.effective_size(),
            latest: pointer,
            frame_pending: false,
        };
        self.state = match handle {
            MarkerHandle::Body => DragState::Dragging(session),
            MarkerHandle::Resize => DragState::Resizing(session),
        };
        log::debug!("{:?}-Session für Marker {} gestartet", self.kind(), marker.id);
        Ok(true)
    }

    /// Merkt sich die letzte Pointer-Position. `false` ohne aktive Session.
    pub fn pointer_move(&mut self, pointer: PointerPos) -> bool {
        let Some(session) = self.session_mut() else {
            return false;
        };
        session.latest = pointer;
        session.frame_pending = true;
        true
    }

    /// Liefert höchstens einen Live-Zwischenstand pro Frame, und nur wenn seit
    /// dem letzten Frame ein Move eingegangen ist.
    pub fn animation_frame(&mut self) -> Option<DragPreview> {
        let min_size = self.min_size;
        let kind = self.kind()?;
        let session = self.session_mut()?;
        if !session.frame_pending {
            return None;
        }
        session.frame_pending = false;
        let change = session.change_at(kind, session.latest, min_size).ok()?;
        Some(DragPreview {
            marker_id: session.marker_id,
            change,
        })
    }

    /// Pointer-Up (global): beendet die Session immer.
    ///
    /// Liefert `None`, wenn keine Session lief oder sich nichts geändert hat
    /// (kein Commit bei Drag ohne Nettobewegung).
    pub fn pointer_up(&mut self, pointer: PointerPos) -> Result<Option<DragCommit>, MarkerError> {
        let kind = self.kind();
        let state = std::mem::take(&mut self.state);
        let (Some(kind), DragState::Dragging(session) | DragState::Resizing(session)) =
            (kind, state)
        else {
            return Ok(None);
        };

        if pointer == session.origin {
            log::debug!("Marker {}: keine Nettobewegung, kein Commit", session.marker_id);
            return Ok(None);
        }

        let change = session.change_at(kind, pointer, self.min_size)?;
        let previous = match kind {
            DragKind::Move => DragChange::Position(session.start_position),
            DragKind::Resize => DragChange::Size(session.start_size),
        };
        if change == previous {
            log::debug!("Marker {}: Endwert unverändert, kein Commit", session.marker_id);
            return Ok(None);
        }

        Ok(Some(DragCommit {
            marker_id: session.marker_id,
            change,
            previous,
        }))
    }

    /// Verwirft eine laufende Session ohne Commit (z.B. beim Seitenwechsel).
    pub fn cancel(&mut self) -> Option<u64> {
        let marker_id = self.active_marker();
        self.state = DragState::Idle;
        marker_id
    }

    /// Übernimmt eine neue Container-Geometrie in die laufende Session.
    ///
    /// Prozentwerte werden danach gegen die neue Box berechnet. Eine Box ohne
    /// messbare Größe wird ignoriert. `false` ohne aktive Session.
    pub fn set_container(&mut self, container: ContainerRect) -> bool {
        if !container.is_laid_out() {
            return false;
        }
        let Some(session) = self.session_mut() else {
            return false;
        };
        session.container = container;
        session.frame_pending = true;
        true
    }
}

impl DragSession {
    fn change_at(
        &self,
        kind: DragKind,
        pointer: PointerPos,
        min_size: f64,
    ) -> Result<DragChange, MarkerError> {
        match kind {
            DragKind::Move => Ok(DragChange::Position(to_percent(pointer, self.container)?)),
            DragKind::Resize => {
                let dx = pointer.client_x - self.origin.client_x;
                let dy = pointer.client_y - self.origin.client_y;
                let size = MarkerSize::new(self.start_size.width + dx, self.start_size.height + dy)
                    .floored(min_size);
                Ok(DragChange::Size(size))
            }
        }
    }
}
