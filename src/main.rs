//! Waypoint-Trail Demo.
//!
//! Lädt einen Trail als JSON (oder baut ein Demo-Quadrat über den Editor-Controller),
//! sampelt ihn gleichmäßig und lässt einen Agent ein paar Schritte laufen.
//!
//! Aufruf: `waypoint-trail [trail.json] [samples]`

use anyhow::Context;
use glam::Vec3;
use std::path::Path;
use waypoint_trail::core::trail_length;
use waypoint_trail::{
    sample_position, AppCommand, AppController, AppState, IdentityFrame, TrailAgent, TrailData,
    TrailOptions,
};

/// Standardanzahl der Samples, wenn kein zweites Argument übergeben wird
const DEFAULT_SAMPLE_COUNT: usize = 8;
/// Simulierte Schrittweite für den Agent in Sekunden
const AGENT_STEP: f32 = 0.25;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Waypoint-Trail v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = TrailOptions::load_from_file(&TrailOptions::config_path());
    let mut args = std::env::args().skip(1);

    let trail = match args.next() {
        Some(path) => load_trail(Path::new(&path))?,
        None => build_demo_square(&options)?,
    };
    let sample_count = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Ungültige Sample-Anzahl: {}", raw))?,
        None => DEFAULT_SAMPLE_COUNT,
    };

    if trail.is_empty() {
        log::warn!("Trail enthält keine Punkte, nichts zu sampeln");
        return Ok(());
    }

    println!(
        "Trail: {} Punkte, geschlossen: {}",
        trail.len(),
        options.complete_trail
    );
    for step in 0..sample_count {
        let factor = step as f32 / sample_count as f32;
        let pos = sample_position(&trail, factor, options.complete_trail)?;
        println!("  f={:.3} → ({:.3}, {:.3}, {:.3})", factor, pos.x, pos.y, pos.z);
    }

    let length = trail_length(
        &trail,
        options.complete_trail,
        options.trail_detail_level,
        &IdentityFrame,
    );
    println!(
        "Polylinien-Länge (Detail {}): {:.3}",
        options.trail_detail_level, length
    );

    let mut agent = TrailAgent::from_options(&options);
    for _ in 0..4 {
        if let Some(pose) = agent.update(&trail, &IdentityFrame, AGENT_STEP)? {
            println!(
                "Agent f={:.3}: Position {:?}, Rotation {:?}",
                agent.factor, pose.position, pose.rotation
            );
        }
    }

    Ok(())
}

/// Liest einen Trail im JSON-Format (`{ "points": [...], "next_id": n }`).
fn load_trail(path: &Path) -> anyhow::Result<TrailData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Trail-Datei nicht lesbar: {}", path.display()))?;
    let trail: TrailData = serde_json::from_str(&content)
        .with_context(|| format!("Trail-Datei fehlerhaft: {}", path.display()))?;
    log::info!("{} Punkte geladen aus {}", trail.len(), path.display());
    Ok(trail)
}

/// Baut ein Einheitsquadrat in der XZ-Ebene über denselben Weg wie ein Editor.
fn build_demo_square(options: &TrailOptions) -> anyhow::Result<TrailData> {
    let mut state = AppState::with_options(options.clone());
    let mut controller = AppController::new();

    let corners = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    for (index, position) in corners.into_iter().enumerate() {
        controller.handle_command(&mut state, AppCommand::AddPoint)?;
        controller.handle_command(&mut state, AppCommand::MovePoint { index, position })?;
        controller.handle_command(
            &mut state,
            AppCommand::RenamePoint {
                index,
                name: Some(format!("Ecke {}", index + 1)),
            },
        )?;
    }

    log::info!(
        "Demo-Quadrat gebaut ({} Commands)",
        state.command_log.len()
    );
    Ok(TrailData::clone(&state.trail))
}
