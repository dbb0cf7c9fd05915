//! Fehler-Taxonomie der Engine.

use thiserror::Error;

/// Fehler, die ohne Netzwerkzugriff erkannt werden.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarkerError {
    /// Container hat noch keine messbare Größe (Layout steht aus).
    /// Der Aufrufer muss nach dem Layout erneut mappen, niemals auf 0,0 ausweichen.
    #[error("Container noch nicht vermessen ({width}x{height}), Mapping nach Layout wiederholen")]
    LayoutNotReady { width: f64, height: f64 },
    /// Pflichtfeld für Create fehlt oder ist ungültig.
    #[error("Marker-Entwurf ungültig: Pflichtfeld `{field}` fehlt oder ist ungültig")]
    Validation { field: &'static str },
    /// Update-Payload ohne vollständigen Pflichtfeld-Satz.
    #[error("Marker-Update unvollständig: Pflichtfeld `{field}` fehlt")]
    IncompleteUpdate { field: &'static str },
}
