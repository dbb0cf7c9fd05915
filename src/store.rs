//! Marker-Store: lokale, maßgebliche Marker-Menge eines Floorplans.
//!
//! Alle Schreibzugriffe laufen über die Persistenz und werden lokal erst nach
//! bestätigter Antwort angewendet (kein optimistisches Mutieren).

use floorplan_engine::marker::NEW_EQUIPMENT_ID;
use floorplan_engine::{Marker, MarkerDraft, MarkerError, MarkerPatch, MarkerType, MarkerUpdate};
use thiserror::Error;

use crate::api::{ApiError, EquipmentDraft, FloorplanBackend};

/// Fehler der Store-Operationen.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validierung vor dem Request (kein Netzwerkzugriff erfolgt)
    #[error(transparent)]
    Invalid(#[from] MarkerError),
    /// Laden der Marker fehlgeschlagen
    #[error("Marker für Floorplan {floorplan_id} konnten nicht geladen werden")]
    Fetch {
        floorplan_id: i64,
        #[source]
        source: ApiError,
    },
    /// Create/Update/Delete fehlgeschlagen
    #[error("Marker-Anfrage fehlgeschlagen")]
    Transport(#[source] ApiError),
    /// Equipment wurde angelegt, Marker nicht, und der Rollback schlug fehl
    #[error("Equipment {equipment_id} ({kind}) ohne Marker zurückgeblieben")]
    OrphanedEquipment {
        kind: MarkerType,
        equipment_id: i64,
        #[source]
        source: ApiError,
    },
}

/// Marker eines Floorplans (über alle Seiten).
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    floorplan_id: Option<i64>,
    markers: Vec<Marker>,
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell geladener Floorplan.
    pub fn floorplan_id(&self) -> Option<i64> {
        self.floorplan_id
    }

    /// Alle Marker (read-only).
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Marker nach ID.
    pub fn get(&self, id: u64) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Marker einer Seite.
    pub fn markers_on_page(&self, page: u32) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.page == page)
    }

    /// Anzahl der Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// `true` ohne Marker.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Ersetzt bzw. ergänzt einen lokalen Datensatz mit einer Server-Antwort.
    /// Marker fremder Floorplans werden verworfen.
    pub fn replace_local(&mut self, marker: Marker) {
        let marker = marker.normalized();
        if self.floorplan_id.is_some_and(|id| id != marker.floorplan_id) {
            log::warn!(
                "Marker {} gehört zu Floorplan {}, nicht zum geladenen",
                marker.id,
                marker.floorplan_id
            );
            self.markers.retain(|m| m.id != marker.id);
            return;
        }
        match self.markers.iter_mut().find(|m| m.id == marker.id) {
            Some(existing) => *existing = marker,
            None => self.markers.push(marker),
        }
    }

    /// Lädt alle Marker eines Floorplans. Bei Fehler bleibt der lokale Stand erhalten.
    pub async fn load<B: FloorplanBackend>(
        &mut self,
        backend: &B,
        floorplan_id: i64,
    ) -> Result<&[Marker], StoreError> {
        let markers = backend
            .list_markers(floorplan_id)
            .await
            .map_err(|source| StoreError::Fetch {
                floorplan_id,
                source,
            })?;

        self.floorplan_id = Some(floorplan_id);
        self.markers = markers
            .into_iter()
            .map(Marker::normalized)
            .filter(|m| m.floorplan_id == floorplan_id)
            .collect();
        log::info!(
            "{} Marker für Floorplan {} geladen",
            self.markers.len(),
            floorplan_id
        );
        Ok(&self.markers)
    }

    /// Legt einen Marker an.
    ///
    /// Mit `equipment_id = 0` wird zuerst das Equipment angelegt und danach
    /// der Marker. Scheitert der Marker, wird das Equipment wieder gelöscht.
    pub async fn create<B: FloorplanBackend>(
        &mut self,
        backend: &B,
        draft: &MarkerDraft,
    ) -> Result<Marker, StoreError> {
        let mut payload = draft.validate()?;

        let created = if payload.equipment_id == NEW_EQUIPMENT_ID {
            let kind = payload.marker_type;
            let equipment = backend
                .create_equipment(kind, &EquipmentDraft::for_marker(&payload))
                .await
                .map_err(StoreError::Transport)?;
            log::info!("Equipment {} ({}) angelegt", equipment.id, kind);
            payload.equipment_id = equipment.id;

            match backend.create_marker(&payload).await {
                Ok(marker) => marker,
                Err(err) => {
                    return Err(rollback_equipment(backend, kind, equipment.id, err).await);
                }
            }
        } else {
            backend
                .create_marker(&payload)
                .await
                .map_err(StoreError::Transport)?
        };

        let created = created.normalized();
        log::info!(
            "Marker {} ({}) auf Seite {} erstellt",
            created.id,
            created.marker_type,
            created.page
        );
        self.replace_local(created.clone());
        Ok(created)
    }

    /// Aktualisiert einen Marker. Der vollständige Pflichtfeld-Satz wird aus dem
    /// lokalen Datensatz ergänzt; ein unbekannter Marker ist nicht ergänzbar.
    pub async fn update<B: FloorplanBackend>(
        &mut self,
        backend: &B,
        id: u64,
        patch: &MarkerPatch,
    ) -> Result<Marker, StoreError> {
        let update = match self.get(id) {
            Some(current) => MarkerUpdate::from_marker(current).apply(patch),
            None => MarkerUpdate::default().apply(patch),
        };
        let body = update.complete()?;

        let updated = backend
            .update_marker(id, &body)
            .await
            .map_err(StoreError::Transport)?
            .normalized();
        log::info!("Marker {} aktualisiert", id);
        self.replace_local(updated.clone());
        Ok(updated)
    }

    /// Löscht einen Marker; lokal erst nach Bestätigung.
    pub async fn remove<B: FloorplanBackend>(
        &mut self,
        backend: &B,
        id: u64,
    ) -> Result<(), StoreError> {
        backend
            .delete_marker(id)
            .await
            .map_err(StoreError::Transport)?;
        self.markers.retain(|m| m.id != id);
        log::info!("Marker {} gelöscht", id);
        Ok(())
    }

    /// Dupliziert einen Marker (versetzt, neues Equipment, Label mit " (Copy)").
    pub async fn duplicate<B: FloorplanBackend>(
        &mut self,
        backend: &B,
        source: &Marker,
        offset: f64,
    ) -> Result<Marker, StoreError> {
        let draft = source.duplicate_draft(offset);
        let copy = self.create(backend, &draft).await?;
        log::info!("Marker {} dupliziert als {}", source.id, copy.id);
        Ok(copy)
    }
}

/// Kompensiert eine halbe Zwei-Schritt-Anlage: löscht das bereits erstellte Equipment.
async fn rollback_equipment<B: FloorplanBackend>(
    backend: &B,
    kind: MarkerType,
    equipment_id: i64,
    marker_error: ApiError,
) -> StoreError {
    log::warn!(
        "Marker-Anlage fehlgeschlagen, lösche Equipment {} ({}): {}",
        equipment_id,
        kind,
        marker_error
    );
    match backend.delete_equipment(kind, equipment_id).await {
        Ok(()) => StoreError::Transport(marker_error),
        Err(rollback_error) => {
            log::error!(
                "Rollback für Equipment {} ({}) fehlgeschlagen: {}",
                equipment_id,
                kind,
                rollback_error
            );
            StoreError::OrphanedEquipment {
                kind,
                equipment_id,
                source: marker_error,
            }
        }
    }
}
