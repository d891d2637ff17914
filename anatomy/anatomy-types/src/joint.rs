//! Joint constraint types.
//!
//! A joint couples a segment to its parent. [`JointKind`] says which kind of
//! articulation it is; [`JointLimits`] is the angular box the child may
//! rotate through relative to its bind pose.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Degrees to radians, applied once when a preset is built.
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Anatomical classification of a joint.
///
/// Purely descriptive. The limits paired with a kind are authored by hand and
/// are not checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointKind {
    /// Rotation about all three axes (shoulder, hip).
    BallAndSocket,
    /// Flexion/extension only (elbow, knee, interphalangeal).
    Hinge,
    /// Twist about the long axis only (atlas/axis, forearm).
    Pivot,
    /// Flexion plus side-to-side, no twist (wrist, knuckles, head nod).
    Condyloid,
    /// Like condyloid with a larger, opposable range (thumb base, clavicle).
    Saddle,
    /// Small sliding motion, modelled as a tight cone (carpals, tarsals).
    Gliding,
    /// Fused; mechanically rigid (skull sutures).
    Fibrous,
    /// Small flexible cone through cartilage pads (vertebral discs).
    Cartilaginous,
}

impl JointKind {
    /// All joint kinds.
    pub const ALL: [Self; 8] = [
        Self::BallAndSocket,
        Self::Hinge,
        Self::Pivot,
        Self::Condyloid,
        Self::Saddle,
        Self::Gliding,
        Self::Fibrous,
        Self::Cartilaginous,
    ];

    /// Nominal rotational degrees of freedom.
    #[must_use]
    pub const fn dof(self) -> usize {
        match self {
            Self::Fibrous => 0,
            Self::Hinge | Self::Pivot => 1,
            Self::Condyloid | Self::Saddle => 2,
            Self::BallAndSocket | Self::Gliding | Self::Cartilaginous => 3,
        }
    }

    /// Check if this kind is fused.
    #[must_use]
    pub const fn is_rigid(self) -> bool {
        matches!(self, Self::Fibrous)
    }
}

impl std::fmt::Display for JointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BallAndSocket => write!(f, "ball_and_socket"),
            Self::Hinge => write!(f, "hinge"),
            Self::Pivot => write!(f, "pivot"),
            Self::Condyloid => write!(f, "condyloid"),
            Self::Saddle => write!(f, "saddle"),
            Self::Gliding => write!(f, "gliding"),
            Self::Fibrous => write!(f, "fibrous"),
            Self::Cartilaginous => write!(f, "cartilaginous"),
        }
    }
}

/// Rotational limits of a joint, in radians relative to the bind pose.
///
/// - Pitch: X axis (flexion/extension)
/// - Yaw: Y axis (twist)
/// - Roll: Z axis (abduction/adduction)
///
/// This is a data carrier. Presets take degrees; nothing checks that
/// `min <= max`.
///
/// # Example
///
/// ```
/// use anatomy_types::JointLimits;
///
/// let elbow = JointLimits::hinge(0.0, 145.0);
/// assert!(elbow.contains(1.0, 0.0, 0.0));
/// assert_eq!(elbow.max_yaw, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointLimits {
    /// Minimum pitch.
    pub min_pitch: f64,
    /// Maximum pitch.
    pub max_pitch: f64,
    /// Minimum yaw.
    pub min_yaw: f64,
    /// Maximum yaw.
    pub max_yaw: f64,
    /// Minimum roll.
    pub min_roll: f64,
    /// Maximum roll.
    pub max_roll: f64,
}

impl JointLimits {
    /// No rotation on any axis.
    pub const LOCKED: Self = Self {
        min_pitch: 0.0,
        max_pitch: 0.0,
        min_yaw: 0.0,
        max_yaw: 0.0,
        min_roll: 0.0,
        max_roll: 0.0,
    };

    /// Create limits from radian bounds.
    #[must_use]
    pub const fn new(
        min_pitch: f64,
        max_pitch: f64,
        min_yaw: f64,
        max_yaw: f64,
        min_roll: f64,
        max_roll: f64,
    ) -> Self {
        Self {
            min_pitch,
            max_pitch,
            min_yaw,
            max_yaw,
            min_roll,
            max_roll,
        }
    }

    /// Fused joint (sutures).
    #[must_use]
    pub const fn locked() -> Self {
        Self::LOCKED
    }

    /// Pitch-only range, in degrees.
    #[must_use]
    pub fn hinge(min_deg: f64, max_deg: f64) -> Self {
        Self {
            min_pitch: min_deg * DEG_TO_RAD,
            max_pitch: max_deg * DEG_TO_RAD,
            ..Self::LOCKED
        }
    }

    /// Yaw-only range, in degrees.
    #[must_use]
    pub fn pivot(min_deg: f64, max_deg: f64) -> Self {
        Self {
            min_yaw: min_deg * DEG_TO_RAD,
            max_yaw: max_deg * DEG_TO_RAD,
            ..Self::LOCKED
        }
    }

    /// Full three-axis box, in degrees.
    #[must_use]
    pub fn ball(
        pitch_min: f64,
        pitch_max: f64,
        yaw_min: f64,
        yaw_max: f64,
        roll_min: f64,
        roll_max: f64,
    ) -> Self {
        Self::new(
            pitch_min * DEG_TO_RAD,
            pitch_max * DEG_TO_RAD,
            yaw_min * DEG_TO_RAD,
            yaw_max * DEG_TO_RAD,
            roll_min * DEG_TO_RAD,
            roll_max * DEG_TO_RAD,
        )
    }

    /// Pitch and roll with no twist (condyloid and saddle joints), in degrees.
    #[must_use]
    pub fn biaxial(pitch_min: f64, pitch_max: f64, roll_min: f64, roll_max: f64) -> Self {
        Self {
            min_pitch: pitch_min * DEG_TO_RAD,
            max_pitch: pitch_max * DEG_TO_RAD,
            min_roll: roll_min * DEG_TO_RAD,
            max_roll: roll_max * DEG_TO_RAD,
            ..Self::LOCKED
        }
    }

    /// Check if every bound is zero.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self == Self::LOCKED
    }

    /// Width of the pitch range.
    #[must_use]
    pub fn pitch_range(&self) -> f64 {
        self.max_pitch - self.min_pitch
    }

    /// Width of the yaw range.
    #[must_use]
    pub fn yaw_range(&self) -> f64 {
        self.max_yaw - self.min_yaw
    }

    /// Width of the roll range.
    #[must_use]
    pub fn roll_range(&self) -> f64 {
        self.max_roll - self.min_roll
    }

    /// Check if an orientation (radians) lies inside the box, bounds inclusive.
    #[must_use]
    pub fn contains(&self, pitch: f64, yaw: f64, roll: f64) -> bool {
        (self.min_pitch..=self.max_pitch).contains(&pitch)
            && (self.min_yaw..=self.max_yaw).contains(&yaw)
            && (self.min_roll..=self.max_roll).contains(&roll)
    }
}
