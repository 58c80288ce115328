//! Agent, der einen Trail per Faktor abfährt und seine Pose daraus ableitet.

use crate::core::{sample_position_in, TrailData, TrailFrame, TrailResult};
use crate::shared::options::AGENT_SPEED_DIVISOR;
use crate::shared::TrailOptions;
use glam::{Mat3, Quat, Vec3};

/// Position und Blickrichtung eines Agents im Eltern-Raum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentPose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Bewegt sich entlang eines Trails.
///
/// Der Faktor wächst pro Update um `speed * dt / 10`. Ohne `looped` wird er auf
/// `[0, 1]` begrenzt, mit `looped` normalisiert erst das Sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailAgent {
    /// Aktueller Faktor auf dem Trail
    pub factor: f32,
    /// Geschwindigkeit in Faktor-Einheiten (geteilt durch 10) pro Sekunde
    pub speed: f32,
    /// Faktor läuft über 1 hinaus weiter
    pub looped: bool,
    /// Trail wird als geschlossene Schleife gesampelt
    pub complete_trail: bool,
    /// Angehalten: Faktor bleibt stehen
    pub is_stopped: bool,
    /// Vertikaler Versatz der Pose (entlang +Y)
    pub base_offset: f32,
    applied_factor: Option<f32>,
    rotation: Quat,
}

impl TrailAgent {
    /// Erstellt einen laufenden Agent am Trail-Anfang.
    pub fn new(speed: f32) -> Self {
        Self {
            factor: 0.0,
            speed,
            looped: true,
            complete_trail: true,
            is_stopped: false,
            base_offset: 0.0,
            applied_factor: None,
            rotation: Quat::IDENTITY,
        }
    }

    /// Übernimmt Geschwindigkeit, Loop-Verhalten und Versatz aus den Optionen.
    pub fn from_options(options: &TrailOptions) -> Self {
        Self {
            looped: options.agent_loop,
            complete_trail: options.complete_trail,
            base_offset: options.agent_base_offset,
            ..Self::new(options.agent_speed)
        }
    }

    /// Hält den Agent an.
    pub fn stop(&mut self) {
        self.is_stopped = true;
    }

    /// Lässt den Agent weiterlaufen.
    pub fn resume(&mut self) {
        self.is_stopped = false;
    }

    /// Zuletzt angewendeter Faktor (None vor dem ersten Update)
    pub fn applied_factor(&self) -> Option<f32> {
        self.applied_factor
    }

    /// Zuletzt berechnete Rotation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Schreitet den Faktor um `dt` Sekunden fort (ohne Sampling).
    pub fn advance(&mut self, dt: f32) {
        if self.is_stopped {
            return;
        }
        self.factor += self.speed * dt / AGENT_SPEED_DIVISOR;
        if !self.looped {
            self.factor = self.factor.clamp(0.0, 1.0);
        }
    }

    /// Fortschreiten und neue Pose berechnen.
    ///
    /// Liefert `None`, wenn sich der Faktor seit dem letzten Update nicht geändert hat.
    /// Die Rotation blickt von der vorherigen zur neuen Position (oben = +Y); bei
    /// Stillstand bleibt die vorherige Rotation erhalten.
    pub fn update(
        &mut self,
        data: &TrailData,
        frame: &impl TrailFrame,
        dt: f32,
    ) -> TrailResult<Option<AgentPose>> {
        self.advance(dt);
        if self.applied_factor == Some(self.factor) {
            return Ok(None);
        }

        let position = sample_position_in(data, self.factor, self.complete_trail, frame)?;
        if let Some(previous_factor) = self.applied_factor {
            let previous = sample_position_in(data, previous_factor, self.complete_trail, frame)?;
            if let Some(rotation) = look_rotation(position - previous) {
                self.rotation = rotation;
            }
        }
        self.applied_factor = Some(self.factor);

        Ok(Some(AgentPose {
            position: position + Vec3::Y * self.base_offset,
            rotation: self.rotation,
        }))
    }
}

impl Default for TrailAgent {
    fn default() -> Self {
        Self::from_options(&TrailOptions::default())
    }
}

/// Rotation, deren lokale +Z-Achse auf `forward` zeigt (oben möglichst +Y).
///
/// `None` bei Null-Richtung. Senkrechte Richtungen nutzen +X als rechte Achse.
pub fn look_rotation(forward: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let right = Vec3::Y.cross(forward).try_normalize().unwrap_or(Vec3::X);
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{sample_position, IdentityFrame, TrailPoint};
    use approx::assert_relative_eq;

    fn line_trail() -> TrailData {
        let mut data = TrailData::new();
        data.append(TrailPoint::new(Vec3::ZERO));
        data.append(TrailPoint::new(Vec3::new(10.0, 0.0, 0.0)));
        data
    }

    #[test]
    fn first_update_places_agent_at_start() {
        let mut agent = TrailAgent::new(1.0);
        agent.stop();

        let pose = agent
            .update(&line_trail(), &IdentityFrame, 0.5)
            .expect("Trail nicht leer")
            .expect("erste Pose");

        assert_eq!(pose.position, Vec3::ZERO);
        assert_eq!(pose.rotation, Quat::IDENTITY);
        // Unveränderter Faktor → keine neue Pose
        assert_eq!(
            agent.update(&line_trail(), &IdentityFrame, 0.5),
            Ok(None)
        );
    }

    #[test]
    fn advance_uses_speed_divisor() {
        let mut agent = TrailAgent::new(2.0);
        agent.advance(0.5);
        assert_relative_eq!(agent.factor, 0.1);
    }

    #[test]
    fn open_agent_clamps_factor() {
        let mut agent = TrailAgent::new(10.0);
        agent.looped = false;
        agent.advance(5.0);
        assert_eq!(agent.factor, 1.0);

        agent.speed = -10.0;
        agent.advance(5.0);
        assert_eq!(agent.factor, 0.0);
    }

    #[test]
    fn stopped_agent_keeps_factor() {
        let mut agent = TrailAgent::new(1.0);
        agent.stop();
        agent.advance(3.0);
        assert_eq!(agent.factor, 0.0);

        agent.resume();
        agent.advance(1.0);
        assert_relative_eq!(agent.factor, 0.1);
    }

    #[test]
    fn moving_agent_faces_travel_direction() {
        let data = line_trail();
        let mut agent = TrailAgent::new(1.0);
        agent.looped = false;
        agent.complete_trail = false;
        agent.base_offset = 2.0;

        agent.update(&data, &IdentityFrame, 0.0).expect("start");
        let pose = agent
            .update(&data, &IdentityFrame, 1.0)
            .expect("Trail nicht leer")
            .expect("Faktor geändert");

        let on_trail = sample_position(&data, 0.1, false).expect("Trail nicht leer");
        assert!(pose.position.abs_diff_eq(on_trail + Vec3::new(0.0, 2.0, 0.0), 1e-5));
        let forward = pose.rotation * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn empty_trail_is_an_error() {
        let mut agent = TrailAgent::new(1.0);
        assert!(agent.update(&TrailData::new(), &IdentityFrame, 0.1).is_err());
    }

    #[test]
    fn look_rotation_handles_degenerate_directions() {
        assert_eq!(look_rotation(Vec3::ZERO), None);
        assert!(look_rotation(Vec3::Z)
            .expect("Richtung")
            .abs_diff_eq(Quat::IDENTITY, 1e-6));

        let up = look_rotation(Vec3::Y).expect("Richtung");
        assert!((up * Vec3::Z).abs_diff_eq(Vec3::Y, 1e-5));
    }
}
