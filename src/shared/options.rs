//! Zentrale Konfiguration für den Floorplan-Marker-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use floorplan_engine::drag::DEFAULT_MIN_MARKER_SIZE;
use serde::{Deserialize, Serialize};

// ── API ─────────────────────────────────────────────────────────────

/// Standard-Basis-URL der Site-Walk-API.
pub const API_BASE_URL: &str = "http://localhost:8000/api";
/// Umgebungsvariable, die die Basis-URL überschreibt.
pub const API_BASE_URL_ENV: &str = "SITE_WALK_API_URL";
/// Timeout pro Request in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// ── Marker ──────────────────────────────────────────────────────────

/// Versatz eines Duplikats in Prozentpunkten (beide Achsen).
pub const DUPLICATE_OFFSET_PERCENT: f64 = 2.0;
/// Mindestgröße beim Resizen in logischen Einheiten.
pub const MIN_MARKER_SIZE: f64 = DEFAULT_MIN_MARKER_SIZE;

// ── Viewer ──────────────────────────────────────────────────────────

/// Startseite beim Öffnen eines Floorplans.
pub const DEFAULT_PAGE: u32 = 1;

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `site_walk_floorplan.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── API ─────────────────────────────────────────────────────
    /// Basis-URL der Persistenz-API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Timeout pro Request in Sekunden
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    // ── Marker ──────────────────────────────────────────────────
    /// Versatz beim Duplizieren in Prozentpunkten
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset_percent: f64,
    /// Mindestgröße beim Resizen
    #[serde(default = "default_min_marker_size")]
    pub min_marker_size: f64,

    // ── Viewer ──────────────────────────────────────────────────
    /// Seite, die nach dem Laden angezeigt wird
    #[serde(default = "default_page")]
    pub default_page: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            duplicate_offset_percent: DUPLICATE_OFFSET_PERCENT,
            min_marker_size: MIN_MARKER_SIZE,
            default_page: DEFAULT_PAGE,
        }
    }
}

fn default_api_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

fn default_duplicate_offset() -> f64 {
    DUPLICATE_OFFSET_PERCENT
}

fn default_min_marker_size() -> f64 {
    MIN_MARKER_SIZE
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("site-walk-floorplan"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("site_walk_floorplan.toml")
    }

    /// Übernimmt eine gesetzte `SITE_WALK_API_URL`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                log::info!("API-URL aus {}: {}", API_BASE_URL_ENV, url);
                self.api_base_url = url.to_string();
            }
        }
    }

    /// Request-Timeout als `Duration` (mindestens 1 s).
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
