//! Per-segment geometry, mass and constraint data.

use nalgebra::{UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::joint::JointLimits;
use crate::shape::{CollisionShape, mirror_rotation, mirror_vector};

/// Nominal density of bone in kg/m³.
///
/// Only used by [`SegmentDefinition::density_mass_estimate`]. Generated
/// masses come from fixed fractions of total body mass.
pub const BONE_DENSITY_KG_M3: f64 = 1500.0;

/// Rest-pose description of one skeletal segment.
///
/// Positions are expressed in the immediate parent's local frame; for the
/// root segment the position is an offset from the body origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentDefinition {
    /// Length along the segment's long axis, in meters.
    pub length: f64,
    /// Origin relative to the parent segment.
    pub bind_position: Vector3<f64>,
    /// Orientation relative to the parent segment.
    pub bind_rotation: UnitQuaternion<f64>,
    /// Mass in kg.
    pub mass: f64,
    /// Collision proxies, in the segment's local frame.
    pub shapes: Vec<CollisionShape>,
    /// Rotational limits of the joint to the parent.
    pub joint_limits: JointLimits,
}

impl SegmentDefinition {
    /// Create a definition with identity bind rotation and locked limits.
    #[must_use]
    pub fn new(length: f64, bind_position: Vector3<f64>, mass: f64) -> Self {
        Self {
            length,
            bind_position,
            bind_rotation: UnitQuaternion::identity(),
            mass,
            shapes: Vec::new(),
            joint_limits: JointLimits::LOCKED,
        }
    }

    /// Append a collision shape.
    #[must_use]
    pub fn with_shape(mut self, shape: CollisionShape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Set the joint limits.
    #[must_use]
    pub fn with_limits(mut self, limits: JointLimits) -> Self {
        self.joint_limits = limits;
        self
    }

    /// The first collision shape, if any.
    #[must_use]
    pub fn primary_shape(&self) -> Option<&CollisionShape> {
        self.shapes.first()
    }

    /// The same segment reflected onto the other side of the body.
    ///
    /// Bind position and shapes are reflected across the sagittal plane.
    /// Length, mass and joint limits carry over unchanged.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            length: self.length,
            bind_position: mirror_vector(&self.bind_position),
            bind_rotation: mirror_rotation(&self.bind_rotation),
            mass: self.mass,
            shapes: self.shapes.iter().map(CollisionShape::mirrored).collect(),
            joint_limits: self.joint_limits,
        }
    }

    /// Sum of the collision shape volumes, in m³. Overlaps are counted twice.
    #[must_use]
    pub fn shape_volume(&self) -> f64 {
        self.shapes.iter().map(CollisionShape::volume).sum()
    }

    /// Mass implied by the collision volume at [`BONE_DENSITY_KG_M3`].
    #[must_use]
    pub fn density_mass_estimate(&self) -> f64 {
        self.shape_volume() * BONE_DENSITY_KG_M3
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn humerus_like() -> SegmentDefinition {
        SegmentDefinition::new(0.36, Vector3::new(0.05, -0.02, 0.0), 3.9)
            .with_shape(CollisionShape::capsule(
                0.04,
                0.36,
                Vector3::new(0.0, -0.18, 0.0),
            ))
            .with_limits(JointLimits::ball(-90.0, 180.0, -90.0, 90.0, -45.0, 135.0))
    }

    #[test]
    fn test_new_defaults() {
        let def = SegmentDefinition::new(0.1, Vector3::zeros(), 1.0);
        assert_eq!(def.bind_rotation, UnitQuaternion::identity());
        assert!(def.joint_limits.is_locked());
        assert!(def.primary_shape().is_none());
        assert_eq!(def.shape_volume(), 0.0);
    }

    #[test]
    fn test_mirrored() {
        let left = humerus_like();
        let right = left.mirrored();

        assert_eq!(right.bind_position, Vector3::new(-0.05, -0.02, 0.0));
        assert_eq!(right.length, left.length);
        assert_eq!(right.mass, left.mass);
        assert_eq!(right.joint_limits, left.joint_limits);
        assert_eq!(right.bind_rotation, UnitQuaternion::identity());
        assert_eq!(right.mirrored(), left);
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SegmentDefinition>();
        assert_send_sync::<CollisionShape>();
        assert_send_sync::<JointLimits>();
        assert_send_sync::<crate::JointKind>();
        assert_send_sync::<crate::SegmentId>();
        assert_send_sync::<crate::GeneticParameters>();
        assert_send_sync::<crate::AnatomyError>();
    }

    #[test]
    fn test_density_estimate() {
        let def = SegmentDefinition::new(0.1, Vector3::zeros(), 1.0)
            .with_shape(CollisionShape::cuboid(0.05, 0.05, 0.05));
        assert_relative_eq!(def.shape_volume(), 0.001, epsilon = 1e-12);
        assert_relative_eq!(def.density_mass_estimate(), 1.5, epsilon = 1e-9);
        // Declared mass is independent of the estimate.
        assert_eq!(def.mass, 1.0);
    }

    #[test]
    fn test_primary_shape() {
        let def = humerus_like();
        assert_eq!(def.primary_shape().map(CollisionShape::kind_name), Some("capsule"));
    }
}
