//! Simplified collision geometry attached to a segment.
//!
//! All shapes live in the owning segment's local (bind) frame. They are
//! proxies for physics and visualization, not render meshes.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A collision primitive in segment-local coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollisionShape {
    /// Oriented box.
    Box {
        /// Half-width, half-height, half-depth in meters.
        half_extents: Vector3<f64>,
        /// Center relative to the segment origin.
        offset: Vector3<f64>,
        /// Orientation relative to the segment frame.
        rotation: UnitQuaternion<f64>,
    },
    /// Cylinder with hemispherical caps, long axis along local Y.
    Capsule {
        /// Radius in meters.
        radius: f64,
        /// Total length including both caps, in meters.
        length: f64,
        /// Center relative to the segment origin.
        offset: Vector3<f64>,
        /// Orientation relative to the segment frame.
        rotation: UnitQuaternion<f64>,
    },
    /// Sphere.
    Sphere {
        /// Radius in meters.
        radius: f64,
        /// Center relative to the segment origin.
        offset: Vector3<f64>,
    },
}

impl CollisionShape {
    /// Centered, axis-aligned box.
    #[must_use]
    pub fn cuboid(half_width: f64, half_height: f64, half_depth: f64) -> Self {
        Self::cuboid_at(
            Vector3::new(half_width, half_height, half_depth),
            Vector3::zeros(),
        )
    }

    /// Axis-aligned box with its center at `offset`.
    #[must_use]
    pub fn cuboid_at(half_extents: Vector3<f64>, offset: Vector3<f64>) -> Self {
        Self::Box {
            half_extents,
            offset,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Capsule aligned with the segment's Y axis.
    #[must_use]
    pub fn capsule(radius: f64, length: f64, offset: Vector3<f64>) -> Self {
        Self::Capsule {
            radius,
            length,
            offset,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Sphere centered at `offset`.
    #[must_use]
    pub fn sphere(radius: f64, offset: Vector3<f64>) -> Self {
        Self::Sphere { radius, offset }
    }

    /// Center of the shape in the segment frame.
    #[must_use]
    pub fn offset(&self) -> Vector3<f64> {
        match self {
            Self::Box { offset, .. } | Self::Capsule { offset, .. } | Self::Sphere { offset, .. } => {
                *offset
            }
        }
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Capsule { .. } => "capsule",
            Self::Sphere { .. } => "sphere",
        }
    }

    /// Enclosed volume in cubic meters.
    ///
    /// A capsule shorter than its two caps is treated as a sphere.
    #[must_use]
    pub fn volume(&self) -> f64 {
        use std::f64::consts::PI;

        match self {
            Self::Box { half_extents, .. } => {
                8.0 * half_extents.x * half_extents.y * half_extents.z
            }
            Self::Capsule { radius, length, .. } => {
                let cylinder = (length - 2.0 * radius).max(0.0);
                PI * radius * radius * cylinder + 4.0 / 3.0 * PI * radius.powi(3)
            }
            Self::Sphere { radius, .. } => 4.0 / 3.0 * PI * radius.powi(3),
        }
    }

    /// Reflection across the sagittal (YZ) plane.
    ///
    /// Negates the lateral offset and reflects the orientation, so a left-side
    /// shape becomes its right-side twin.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        match self {
            Self::Box {
                half_extents,
                offset,
                rotation,
            } => Self::Box {
                half_extents: *half_extents,
                offset: mirror_vector(offset),
                rotation: mirror_rotation(rotation),
            },
            Self::Capsule {
                radius,
                length,
                offset,
                rotation,
            } => Self::Capsule {
                radius: *radius,
                length: *length,
                offset: mirror_vector(offset),
                rotation: mirror_rotation(rotation),
            },
            Self::Sphere { radius, offset } => Self::Sphere {
                radius: *radius,
                offset: mirror_vector(offset),
            },
        }
    }
}

/// Negate the lateral (X) component.
pub(crate) fn mirror_vector(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(-v.x, v.y, v.z)
}

/// Reflect a rotation across the YZ plane: `(w, x, y, z) -> (w, x, -y, -z)`.
pub(crate) fn mirror_rotation(q: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::new_unchecked(Quaternion::new(q.w, q.i, -q.j, -q.k))
}
