//! Anbindung an die Persistenz-API (Marker und Equipment).
//!
//! `FloorplanBackend` ist die Naht zwischen Marker-Store und Transport:
//! `RestClient` spricht HTTP, Tests verwenden In-Memory-Backends.

mod equipment;
mod rest;

use floorplan_engine::{Marker, MarkerType, MarkerUpdateBody, NewMarker};
use thiserror::Error;

pub use equipment::{EquipmentDraft, EquipmentRecord};
pub use rest::RestClient;

/// Fehler beim Zugriff auf die Persistenz-API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Verbindung, Timeout oder sonstiger Transportfehler
    #[error("Transportfehler: {0}")]
    Transport(#[from] reqwest::Error),
    /// API hat mit einem Fehlerstatus geantwortet
    #[error("API antwortete mit Status {status}: {body}")]
    Status { status: u16, body: String },
    /// Antwort ließ sich nicht dekodieren
    #[error("Antwort nicht lesbar: {0}")]
    Decode(#[from] serde_json::Error),
    /// Marker-Typ ohne Equipment-Collection (Notizen)
    #[error("Marker-Typ {0} hat kein Equipment")]
    NoEquipment(MarkerType),
}

/// Asynchrone Persistenz-Operationen für Floorplan-Marker.
///
/// Alle Aufrufe werden einzeln abgewartet; es gibt keine automatischen Retries.
#[allow(async_fn_in_trait)]
pub trait FloorplanBackend {
    /// `GET /floorplans/{id}/markers`
    async fn list_markers(&self, floorplan_id: i64) -> Result<Vec<Marker>, ApiError>;

    /// `POST /floorplan-markers`
    async fn create_marker(&self, body: &NewMarker) -> Result<Marker, ApiError>;

    /// `PUT /floorplan-markers/{id}` mit vollständigem Pflichtfeld-Satz
    async fn update_marker(&self, id: u64, body: &MarkerUpdateBody) -> Result<Marker, ApiError>;

    /// `DELETE /floorplan-markers/{id}`
    async fn delete_marker(&self, id: u64) -> Result<(), ApiError>;

    /// `POST /{equipment-collection}`
    async fn create_equipment(
        &self,
        kind: MarkerType,
        draft: &EquipmentDraft,
    ) -> Result<EquipmentRecord, ApiError>;

    /// `DELETE /{equipment-collection}/{id}` (Rollback nach fehlgeschlagener Marker-Anlage)
    async fn delete_equipment(&self, kind: MarkerType, id: i64) -> Result<(), ApiError>;
}
