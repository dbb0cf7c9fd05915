//! Laufende Anzeigenummern pro Marker-Typ ("AP1", "C2", …).
//!
//! Nummern werden nie gespeichert, sondern bei jedem Render aus der aktuellen
//! Marker-Menge berechnet: pro Typ aufsteigend nach `id` sortiert, 1-basiert.
//! Nach einem Löschen rücken die Nummern sofort nach (keine Lücken).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::marker::{Marker, MarkerType};

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*$").expect("gültiges Trailing-Number-Pattern"));

/// Berechnet die Sequenznummer jedes Markers (Marker-ID → Nummer).
pub fn sequence_numbers(markers: &[Marker]) -> HashMap<u64, u32> {
    let mut by_type: HashMap<MarkerType, Vec<u64>> = HashMap::new();
    for marker in markers {
        by_type.entry(marker.marker_type).or_default().push(marker.id);
    }

    let mut numbers = HashMap::with_capacity(markers.len());
    for ids in by_type.values_mut() {
        ids.sort_unstable();
        ids.dedup();
        for (index, id) in ids.iter().enumerate() {
            numbers.insert(*id, index as u32 + 1);
        }
    }
    numbers
}

/// Explizite Nummer am Ende eines Labels ("Door 12" → 12).
pub fn explicit_number(label: &str) -> Option<u32> {
    TRAILING_NUMBER
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Anzeigenummer: explizite Label-Nummer hat Vorrang, sonst die Sequenznummer.
pub fn display_number(marker: &Marker, sequence: u32) -> u32 {
    marker
        .label
        .as_deref()
        .and_then(explicit_number)
        .unwrap_or(sequence)
}

/// Vollständiges Anzeige-Label (Typ-Präfix + Nummer).
pub fn display_label(marker: &Marker, sequence: u32) -> String {
    format!(
        "{}{}",
        marker.marker_type.prefix(),
        display_number(marker, sequence)
    )
}
