//! Koordinaten-Mapping zwischen Pointer-Events und Prozent-Positionen.
//!
//! Marker-Positionen werden als Prozent (0–100) relativ zur Bounding-Box des
//! Dokument-Containers gespeichert. Dadurch bleiben sie beim Zoomen und bei
//! unterschiedlichen Fenstergrößen stabil.

use serde::{Deserialize, Serialize};

use crate::error::MarkerError;

/// Untere Grenze einer Prozent-Koordinate.
pub const PERCENT_MIN: f64 = 0.0;
/// Obere Grenze einer Prozent-Koordinate.
pub const PERCENT_MAX: f64 = 100.0;

/// Bounding-Box des Referenz-Containers in Client-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerRect {
    /// Linke Kante (Client-Koordinaten)
    pub left: f64,
    /// Obere Kante (Client-Koordinaten)
    pub top: f64,
    /// Breite in Pixeln
    pub width: f64,
    /// Höhe in Pixeln
    pub height: f64,
}

impl ContainerRect {
    /// Erstellt eine neue Bounding-Box.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `true`, sobald der Container eine messbare Größe hat.
    pub fn is_laid_out(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Prüft, ob ein Pointer innerhalb der Box liegt (Kanten inklusive).
    pub fn contains(&self, pointer: PointerPos) -> bool {
        pointer.client_x >= self.left
            && pointer.client_x <= self.left + self.width
            && pointer.client_y >= self.top
            && pointer.client_y <= self.top + self.height
    }

    fn ensure_laid_out(&self) -> Result<(), MarkerError> {
        if self.is_laid_out() {
            Ok(())
        } else {
            Err(MarkerError::LayoutNotReady {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Absolute Pointer-Position (clientX/clientY).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPos {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerPos {
    /// Erstellt eine Pointer-Position.
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Position in Prozent relativ zum Container, immer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentPos {
    pub x: f64,
    pub y: f64,
}

impl PercentPos {
    /// Erstellt eine Prozent-Position; beide Achsen werden auf [0, 100] geklemmt.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Verschiebt um ein Delta (Prozentpunkte) und klemmt erneut.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rundet beide Achsen auf ganze Prozent.
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

/// CSS-Position (left/top) relativ zum Container in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPos {
    pub left: f64,
    pub top: f64,
}

/// Klemmt einen Prozentwert auf [0, 100]. NaN wird zu 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return PERCENT_MIN;
    }
    value.clamp(PERCENT_MIN, PERCENT_MAX)
}

/// Pointer → Prozent ohne Rundung (geklemmt).
pub fn to_percent_exact(
    pointer: PointerPos,
    rect: ContainerRect,
) -> Result<PercentPos, MarkerError> {
    rect.ensure_laid_out()?;
    let x = (pointer.client_x - rect.left) / rect.width * PERCENT_MAX;
    let y = (pointer.client_y - rect.top) / rect.height * PERCENT_MAX;
    Ok(PercentPos::new(x, y))
}

/// Pointer → Prozent, auf ganze Prozent gerundet und auf [0, 100] geklemmt.
///
/// Schlägt mit `LayoutNotReady` fehl, solange Breite oder Höhe 0 ist.
pub fn to_percent(pointer: PointerPos, rect: ContainerRect) -> Result<PercentPos, MarkerError> {
    Ok(to_percent_exact(pointer, rect)?.rounded())
}

/// Prozent → CSS-Position relativ zum Container.
pub fn to_pixels(percent: PercentPos, rect: ContainerRect) -> PixelPos {
    PixelPos {
        left: percent.x / PERCENT_MAX * rect.width,
        top: percent.y / PERCENT_MAX * rect.height,
    }
}

/// Prozent → absolute Client-Position (Umkehrung von `to_percent_exact`).
pub fn to_client(percent: PercentPos, rect: ContainerRect) -> PointerPos {
    let pixels = to_pixels(percent, rect);
    PointerPos::new(rect.left + pixels.left, rect.top + pixels.top)
}
