//! Koordinaten-Transformationen zwischen Trail-lokalem Raum und Eltern-Raum.
//!
//! Der Kern kennt keinen Szenengraphen: Hosts reichen eine `TrailFrame`-Implementierung
//! herein, wenn der Trail relativ zu einem beweglichen Objekt definiert ist.

use glam::{Affine3A, Quat, Vec3};

/// Reine Koordinatenabbildung für Punkte und Richtungen.
///
/// Richtungen (Tangenten) werden ohne Translationsanteil abgebildet.
pub trait TrailFrame {
    /// Lokaler Punkt → Eltern-Raum
    fn point_to_parent(&self, point: Vec3) -> Vec3;
    /// Lokale Richtung → Eltern-Raum
    fn vector_to_parent(&self, vector: Vec3) -> Vec3;
    /// Punkt im Eltern-Raum → lokal
    fn point_to_local(&self, point: Vec3) -> Vec3;
    /// Richtung im Eltern-Raum → lokal
    fn vector_to_local(&self, vector: Vec3) -> Vec3;
}

/// Identitäts-Abbildung: Trail-Raum == Eltern-Raum
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdentityFrame;

impl TrailFrame for IdentityFrame {
    fn point_to_parent(&self, point: Vec3) -> Vec3 {
        point
    }

    fn vector_to_parent(&self, vector: Vec3) -> Vec3 {
        vector
    }

    fn point_to_local(&self, point: Vec3) -> Vec3 {
        point
    }

    fn vector_to_local(&self, vector: Vec3) -> Vec3 {
        vector
    }
}

/// Affine Abbildung mit vorberechneter Inversen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineFrame {
    to_parent: Affine3A,
    to_local: Affine3A,
}

impl AffineFrame {
    /// Erstellt den Frame aus der Lokal→Eltern-Transformation.
    ///
    /// Die Transformation muss invertierbar sein (keine Null-Skalierung).
    pub fn new(to_parent: Affine3A) -> Self {
        Self {
            to_parent,
            to_local: to_parent.inverse(),
        }
    }

    /// Erstellt den Frame aus Skalierung, Rotation und Translation.
    pub fn from_scale_rotation_translation(scale: Vec3, rotation: Quat, translation: Vec3) -> Self {
        Self::new(Affine3A::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }

    /// Lokal→Eltern-Transformation
    pub fn to_parent(&self) -> Affine3A {
        self.to_parent
    }
}

impl Default for AffineFrame {
    fn default() -> Self {
        Self::new(Affine3A::IDENTITY)
    }
}

impl TrailFrame for AffineFrame {
    fn point_to_parent(&self, point: Vec3) -> Vec3 {
        self.to_parent.transform_point3(point)
    }

    fn vector_to_parent(&self, vector: Vec3) -> Vec3 {
        self.to_parent.transform_vector3(vector)
    }

    fn point_to_local(&self, point: Vec3) -> Vec3 {
        self.to_local.transform_point3(point)
    }

    fn vector_to_local(&self, vector: Vec3) -> Vec3 {
        self.to_local.transform_vector3(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tangents, TrailPoint};

    fn rotated_frame() -> AffineFrame {
        AffineFrame::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_vectors_ignore_translation() {
        let frame = AffineFrame::from_scale_rotation_translation(
            Vec3::ONE,
            Quat::IDENTITY,
            Vec3::new(5.0, 6.0, 7.0),
        );
        assert_eq!(frame.vector_to_parent(Vec3::X), Vec3::X);
        assert_eq!(frame.point_to_parent(Vec3::X), Vec3::new(6.0, 6.0, 7.0));
    }

    #[test]
    fn test_point_round_trip_keeps_mode_and_id() {
        let frame = rotated_frame();
        let mut point = TrailPoint::new(Vec3::new(1.0, 2.0, 3.0)).with_tangents(Tangents::Split {
            left: Vec3::new(0.0, 0.0, -1.0),
            right: Vec3::new(1.0, 0.0, 0.0),
        });
        point.set_id(7);

        let parent = point.to_parent(&frame);
        assert_eq!(parent.id(), 7);
        assert_eq!(parent.mode, point.mode);
        // Rotation 90° um Y: +X → -Z, Skalierung 2
        assert!(parent
            .tangent_right
            .abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));

        let back = parent.to_local(&frame);
        assert!(back.position.abs_diff_eq(point.position, 1e-5));
        assert!(back.tangent_left.abs_diff_eq(point.tangent_left, 1e-5));
        assert!(back.tangent_right.abs_diff_eq(point.tangent_right, 1e-5));
    }

    #[test]
    fn test_identity_frame_is_noop() {
        let point = TrailPoint::new(Vec3::new(1.0, -2.0, 3.0))
            .with_tangents(Tangents::Unified(Vec3::Y));
        assert_eq!(point.to_parent(&IdentityFrame), point);
        assert_eq!(point.to_local(&IdentityFrame), point);
    }
}
