//! Site-Walk Floorplan Viewer (Headless).
//!
//! Lädt die Marker eines Floorplans über die API und listet die Marker
//! einer Seite mit ihren Anzeige-Labels.

use anyhow::Context;
use site_walk_floorplan::app::build_render_scene;
use site_walk_floorplan::{AppController, AppIntent, AppState, RestClient, ViewerOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Site-Walk Floorplan v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let mut args = std::env::args().skip(1);
    let floorplan_id = args
        .next()
        .context("Aufruf: site-walk-floorplan <floorplan-id> [seite]")?
        .parse::<i64>()
        .context("Floorplan-ID muss eine Zahl sein")?;
    let page: Option<u32> = args
        .next()
        .map(|raw| raw.parse::<u32>().context("Seite muss eine positive Zahl sein"))
        .transpose()?;

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = ViewerOptions::config_path();
    let mut options = ViewerOptions::load_from_file(&config_path);
    options.apply_env_overrides();

    let backend = RestClient::from_options(&options)?;
    log::info!("API: {}", backend.base_url());

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new(backend);

    controller
        .handle_intent(&mut state, AppIntent::FloorplanOpened { floorplan_id })
        .await?;
    if let Some(page) = page {
        controller
            .handle_intent(&mut state, AppIntent::PageChanged { page })
            .await?;
    }

    let scene = build_render_scene(&state);
    println!(
        "Floorplan {} · Seite {} · {} Marker",
        floorplan_id,
        scene.page,
        scene.markers.len()
    );
    if !scene.has_markers() {
        println!("Keine Marker auf dieser Seite");
    }
    for marker in &scene.markers {
        println!(
            "{:>6}  {:<14} {:>5.1}% {:>5.1}%  {}",
            marker.display_label,
            marker.marker_type.as_str(),
            marker.position.x,
            marker.position.y,
            marker.label.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
