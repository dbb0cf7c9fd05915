//! Application State: zentrale Datenhaltung.

use chrono::{DateTime, Utc};
use floorplan_engine::{
    ContainerRect, DragController, DragPreview, PercentPos, PointerPos, ViewerMode,
};

use super::CommandLog;
use crate::shared::ViewerOptions;
use crate::store::MarkerStore;

/// Schwere einer Benutzer-Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Sichtbare Benachrichtigung (Toast) für den Benutzer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Zustand des Platzierungs-Dialogs (Klick auf Dokument → Dialog → Submit).
#[derive(Debug, Clone)]
pub struct PlacementDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Angeklickte Position in Prozent
    pub position: Option<PercentPos>,
}

impl Default for PlacementDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementDialogState {
    /// Erstellt einen geschlossenen Dialog-Zustand.
    pub fn new() -> Self {
        Self {
            visible: false,
            position: None,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Platzierungs-Dialog für neue Marker
    pub placement_dialog: PlacementDialogState,
    /// Offene Benachrichtigungen (älteste zuerst)
    pub notifications: Vec<Notification>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Dialog geschlossen, keine Meldungen).
    pub fn new() -> Self {
        Self {
            placement_dialog: PlacementDialogState::new(),
            notifications: Vec::new(),
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug)]
pub struct ViewState {
    /// Aktiver Interaktionsmodus
    pub mode: ViewerMode,
    /// Angezeigte Seite (1-basiert)
    pub page: u32,
    /// Bounding-Box des Dokument-Containers (None vor dem ersten Layout)
    pub container: Option<ContainerRect>,
    /// Platzierungs-Klick, der auf das Layout wartet
    pub pending_placement: Option<PointerPos>,
    /// Visueller Zwischenstand eines Drags/Resizes bis zur Bestätigung
    pub drag_override: Option<DragPreview>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            mode: ViewerMode::Select,
            page: 1,
            container: None,
            pending_placement: None,
            drag_override: None,
        }
    }
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Marker des geladenen Floorplans
    pub store: MarkerStore,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Drag/Resize-Session (Single-Slot)
    pub drag: DragController,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        let mut view = ViewState::new();
        view.page = options.default_page.max(1);
        Self {
            store: MarkerStore::new(),
            view,
            ui: UiState::new(),
            drag: DragController::new(options.min_marker_size),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Fügt eine Info-Meldung hinzu.
    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.push_notification(NotificationLevel::Info, message.into());
    }

    /// Fügt eine Fehlermeldung hinzu.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.push_notification(NotificationLevel::Error, message.into());
    }

    fn push_notification(&mut self, level: NotificationLevel, message: String) {
        self.ui.notifications.push(Notification {
            level,
            message,
            created_at: Utc::now(),
        });
    }

    /// Letzte Fehlermeldung (für Tests und Statusleiste).
    pub fn last_error(&self) -> Option<&str> {
        self.ui
            .notifications
            .iter()
            .rev()
            .find(|n| n.level == NotificationLevel::Error)
            .map(|n| n.message.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
