//! HTTP-Implementierung von `FloorplanBackend` (reqwest, JSON).

use std::time::Duration;

use floorplan_engine::{Marker, MarkerType, MarkerUpdateBody, NewMarker};
use serde::de::DeserializeOwned;

use super::{ApiError, EquipmentDraft, EquipmentRecord, FloorplanBackend};
use crate::shared::ViewerOptions;

/// REST-Client gegen die Site-Walk-API.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Erstellt einen Client mit Basis-URL und Request-Timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Erstellt einen Client aus den Laufzeit-Optionen.
    pub fn from_options(options: &ViewerOptions) -> Result<Self, ApiError> {
        Self::new(&options.api_base_url, options.request_timeout())
    }

    /// Basis-URL ohne abschließenden Slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn equipment_url(&self, kind: MarkerType, id: Option<i64>) -> Result<String, ApiError> {
        let collection = kind
            .equipment_collection()
            .ok_or(ApiError::NoEquipment(kind))?;
        Ok(match id {
            Some(id) => self.url(&format!("{collection}/{id}")),
            None => self.url(collection),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

impl FloorplanBackend for RestClient {
    async fn list_markers(&self, floorplan_id: i64) -> Result<Vec<Marker>, ApiError> {
        let url = self.url(&format!("floorplans/{floorplan_id}/markers"));
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn create_marker(&self, body: &NewMarker) -> Result<Marker, ApiError> {
        let url = self.url("floorplan-markers");
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        read_json(response).await
    }

    async fn update_marker(&self, id: u64, body: &MarkerUpdateBody) -> Result<Marker, ApiError> {
        let url = self.url(&format!("floorplan-markers/{id}"));
        log::debug!("PUT {}", url);
        let response = self.client.put(url).json(body).send().await?;
        read_json(response).await
    }

    async fn delete_marker(&self, id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("floorplan-markers/{id}"));
        log::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        expect_success(response).await
    }

    async fn create_equipment(
        &self,
        kind: MarkerType,
        draft: &EquipmentDraft,
    ) -> Result<EquipmentRecord, ApiError> {
        let url = self.equipment_url(kind, None)?;
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(draft).send().await?;
        read_json(response).await
    }

    async fn delete_equipment(&self, kind: MarkerType, id: i64) -> Result<(), ApiError> {
        let url = self.equipment_url(kind, Some(id))?;
        log::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        expect_success(response).await
    }
}
