//! In-Memory-Backend für Integrationstests.

#![allow(dead_code)]

use std::sync::Mutex;

use floorplan_engine::{Marker, MarkerSize, MarkerType, MarkerUpdateBody, NewMarker, PercentPos};
use site_walk_floorplan::api::{EquipmentDraft, EquipmentRecord};
use site_walk_floorplan::{ApiError, FloorplanBackend};

/// Anzahl der Aufrufe pro Endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calls {
    pub list_markers: usize,
    pub create_marker: usize,
    pub update_marker: usize,
    pub delete_marker: usize,
    pub create_equipment: usize,
    pub delete_equipment: usize,
}

impl Calls {
    /// Summe aller Netzwerkaufrufe.
    pub fn total(&self) -> usize {
        self.list_markers
            + self.create_marker
            + self.update_marker
            + self.delete_marker
            + self.create_equipment
            + self.delete_equipment
    }
}

/// Endpoints, die mit Status 500 antworten sollen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures {
    pub list_markers: bool,
    pub create_marker: bool,
    pub update_marker: bool,
    pub delete_marker: bool,
    pub create_equipment: bool,
    pub delete_equipment: bool,
}

#[derive(Debug, Default)]
struct Inner {
    markers: Vec<Marker>,
    equipment: Vec<(MarkerType, i64)>,
    next_marker_id: u64,
    next_equipment_id: i64,
    calls: Calls,
    failures: Failures,
    updates: Vec<(u64, MarkerUpdateBody)>,
}

/// Backend mit Marker- und Equipment-Tabellen im Speicher.
#[derive(Debug)]
pub struct MockBackend {
    inner: Mutex<Inner>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_marker_id: 100,
                next_equipment_id: 500,
                ..Inner::default()
            }),
        }
    }

    /// Legt einen Marker direkt in der "Datenbank" an.
    pub fn seed(&self, marker: Marker) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_marker_id = inner.next_marker_id.max(marker.id + 1);
        inner.markers.push(marker);
    }

    pub fn fail(&self, configure: impl FnOnce(&mut Failures)) {
        configure(&mut self.inner.lock().unwrap().failures);
    }

    pub fn calls(&self) -> Calls {
        self.inner.lock().unwrap().calls
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.inner.lock().unwrap().markers.clone()
    }

    pub fn equipment(&self) -> Vec<(MarkerType, i64)> {
        self.inner.lock().unwrap().equipment.clone()
    }

    pub fn updates(&self) -> Vec<(u64, MarkerUpdateBody)> {
        self.inner.lock().unwrap().updates.clone()
    }
}

fn server_error(endpoint: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        body: format!("{endpoint} failed"),
    }
}

fn not_found(id: u64) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("marker {id} not found"),
    }
}

impl FloorplanBackend for MockBackend {
    async fn list_markers(&self, floorplan_id: i64) -> Result<Vec<Marker>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list_markers += 1;
        if inner.failures.list_markers {
            return Err(server_error("list"));
        }
        Ok(inner
            .markers
            .iter()
            .filter(|m| m.floorplan_id == floorplan_id)
            .cloned()
            .collect())
    }

    async fn create_marker(&self, body: &NewMarker) -> Result<Marker, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.create_marker += 1;
        if inner.failures.create_marker {
            return Err(server_error("create marker"));
        }
        let id = inner.next_marker_id;
        inner.next_marker_id += 1;
        let marker = Marker {
            id,
            floorplan_id: body.floorplan_id,
            page: body.page,
            marker_type: body.marker_type,
            equipment_id: body.equipment_id,
            position_x: body.position_x,
            position_y: body.position_y,
            label: body.label.clone(),
            width: body.width,
            height: body.height,
            created_at: None,
        };
        inner.markers.push(marker.clone());
        Ok(marker)
    }

    async fn update_marker(&self, id: u64, body: &MarkerUpdateBody) -> Result<Marker, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.update_marker += 1;
        if inner.failures.update_marker {
            return Err(server_error("update marker"));
        }
        inner.updates.push((id, body.clone()));
        let marker = inner
            .markers
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found(id))?;
        marker.floorplan_id = body.floorplan_id;
        marker.page = body.page;
        marker.marker_type = body.marker_type;
        marker.equipment_id = body.equipment_id;
        if let (Some(x), Some(y)) = (body.position_x, body.position_y) {
            marker.set_position(PercentPos::new(x, y));
        }
        if let Some(label) = &body.label {
            marker.label = label.clone();
        }
        if let (Some(width), Some(height)) = (body.width, body.height) {
            marker.set_size(MarkerSize::new(width, height));
        }
        Ok(marker.clone())
    }

    async fn delete_marker(&self, id: u64) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete_marker += 1;
        if inner.failures.delete_marker {
            return Err(server_error("delete marker"));
        }
        let before = inner.markers.len();
        inner.markers.retain(|m| m.id != id);
        if inner.markers.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn create_equipment(
        &self,
        kind: MarkerType,
        draft: &EquipmentDraft,
    ) -> Result<EquipmentRecord, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.create_equipment += 1;
        if kind.equipment_collection().is_none() {
            return Err(ApiError::NoEquipment(kind));
        }
        if inner.failures.create_equipment {
            return Err(server_error("create equipment"));
        }
        let id = inner.next_equipment_id;
        inner.next_equipment_id += 1;
        inner.equipment.push((kind, id));
        Ok(EquipmentRecord {
            id,
            name: Some(draft.name.clone()),
            location: None,
        })
    }

    async fn delete_equipment(&self, kind: MarkerType, id: i64) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.delete_equipment += 1;
        if inner.failures.delete_equipment {
            return Err(server_error("delete equipment"));
        }
        inner.equipment.retain(|(k, e)| !(*k == kind && *e == id));
        Ok(())
    }
}

/// Marker-Datensatz für Floorplan 1 mit Standardwerten.
pub fn marker(id: u64, marker_type: MarkerType, x: f64, y: f64) -> Marker {
    Marker {
        id,
        floorplan_id: 1,
        page: 1,
        marker_type,
        equipment_id: if marker_type.is_note() { -1 } else { id as i64 + 1000 },
        position_x: x,
        position_y: y,
        label: None,
        width: None,
        height: None,
        created_at: None,
    }
}
