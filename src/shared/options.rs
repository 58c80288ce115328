//! Zentrale Konfiguration für Trail-Darstellung, Follower und Editing.
//!
//! `TrailOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Trail ───────────────────────────────────────────────────────────

/// Zwischenschritte pro Segment bei der Polylinien-Ausgabe.
pub const TRAIL_DETAIL_LEVEL: u32 = 20;

// ── Follower ────────────────────────────────────────────────────────

/// Standard-Geschwindigkeit eines Followers.
pub const AGENT_SPEED: f32 = 1.0;
/// Teiler für den Faktor-Fortschritt: `factor += speed * dt / AGENT_SPEED_DIVISOR`.
pub const AGENT_SPEED_DIVISOR: f32 = 10.0;

// ── Editing ─────────────────────────────────────────────────────────

/// Maximale Undo/Redo-Tiefe.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Trail-Optionen.
/// Wird als `waypoint_trail.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailOptions {
    // ── Trail ───────────────────────────────────────────────────
    /// Zwischenschritte pro Segment (0 = nichts ausgeben)
    pub trail_detail_level: u32,
    /// Trail geschlossen (letzter Punkt → erster Punkt)
    pub complete_trail: bool,

    // ── Follower ────────────────────────────────────────────────
    /// Standard-Geschwindigkeit neuer Follower
    pub agent_speed: f32,
    /// Follower-Faktor periodisch weiterlaufen lassen statt auf [0, 1] zu klemmen
    pub agent_loop: bool,
    /// Höhen-Offset des Followers entlang +Y
    pub agent_base_offset: f32,

    // ── Editing ─────────────────────────────────────────────────
    /// Maximale Undo/Redo-Tiefe
    pub history_depth: usize,
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            trail_detail_level: TRAIL_DETAIL_LEVEL,
            complete_trail: true,
            agent_speed: AGENT_SPEED,
            agent_loop: true,
            agent_base_offset: 0.0,
            history_depth: HISTORY_DEPTH,
        }
    }
}

impl TrailOptions {
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
            .unwrap_or_else(|_| std::path::PathBuf::from("waypoint_trail"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("waypoint_trail.toml")
    }
}
