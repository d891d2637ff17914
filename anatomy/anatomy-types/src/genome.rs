//! Genetic body parameters and the proportions derived from them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five scalars that drive skeleton generation.
///
/// Values are taken as given. Nothing is clamped or validated, so
/// degenerate input (zero or negative height, say) yields a geometrically
/// degenerate but complete skeleton.
///
/// # Example
///
/// ```
/// use anatomy_types::GeneticParameters;
///
/// let tall = GeneticParameters::average_adult().with_height(2.0);
/// let p = tall.proportions();
/// assert!((p.leg_length - 0.96).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneticParameters {
    /// Standing height in meters.
    pub height: f64,
    /// Total body mass in kg.
    pub mass: f64,
    /// Width multiplier: 0.5 slender, 1.0 average, 1.5 stocky.
    pub build: f64,
    /// Head size as a fraction of height.
    pub head_ratio: f64,
    /// Leg length as a fraction of height.
    pub leg_ratio: f64,
}

impl Default for GeneticParameters {
    fn default() -> Self {
        Self::average_adult()
    }
}

impl GeneticParameters {
    /// Create parameters from all five values.
    #[must_use]
    pub const fn new(height: f64, mass: f64, build: f64, head_ratio: f64, leg_ratio: f64) -> Self {
        Self {
            height,
            mass,
            build,
            head_ratio,
            leg_ratio,
        }
    }

    /// 1.80 m, 78 kg, average build, head 1/8 of height, legs 48%.
    #[must_use]
    pub const fn average_adult() -> Self {
        Self::new(1.80, 78.0, 1.0, 0.125, 0.48)
    }

    /// Set the height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the total mass.
    #[must_use]
    pub const fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the build multiplier.
    #[must_use]
    pub const fn with_build(mut self, build: f64) -> Self {
        self.build = build;
        self
    }

    /// Set the head ratio.
    #[must_use]
    pub const fn with_head_ratio(mut self, head_ratio: f64) -> Self {
        self.head_ratio = head_ratio;
        self
    }

    /// Set the leg ratio.
    #[must_use]
    pub const fn with_leg_ratio(mut self, leg_ratio: f64) -> Self {
        self.leg_ratio = leg_ratio;
        self
    }

    /// Body dimensions derived from these parameters.
    #[must_use]
    pub fn proportions(&self) -> Proportions {
        Proportions::from_parameters(self)
    }
}

/// Gross body dimensions, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proportions {
    /// Head height.
    pub head_size: f64,
    /// Hip joint to ground.
    pub leg_length: f64,
    /// Whatever height remains after legs and head.
    pub torso_length: f64,
    /// Shoulder span, scaled by build.
    pub shoulder_width: f64,
    /// Hip span, scaled by build.
    pub hip_width: f64,
    /// Shoulder to fingertip.
    pub arm_length: f64,
}

impl Proportions {
    /// Shoulder span as a fraction of height at average build.
    pub const SHOULDER_RATIO: f64 = 0.23;
    /// Hip span as a fraction of height at average build.
    pub const HIP_RATIO: f64 = 0.16;
    /// Arm length as a fraction of height.
    pub const ARM_RATIO: f64 = 0.42;

    /// Derive proportions from genetic parameters.
    #[must_use]
    pub fn from_parameters(params: &GeneticParameters) -> Self {
        let head_size = params.height * params.head_ratio;
        let leg_length = params.height * params.leg_ratio;
        Self {
            head_size,
            leg_length,
            torso_length: params.height - leg_length - head_size,
            shoulder_width: params.height * Self::SHOULDER_RATIO * params.build,
            hip_width: params.height * Self::HIP_RATIO * params.build,
            arm_length: params.height * Self::ARM_RATIO,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_average_adult() {
        let params = GeneticParameters::default();
        assert_eq!(params, GeneticParameters::average_adult());
        assert_eq!(params.height, 1.80);
        assert_eq!(params.mass, 78.0);
        assert_eq!(params.build, 1.0);
        assert_eq!(params.head_ratio, 0.125);
        assert_eq!(params.leg_ratio, 0.48);
    }

    #[test]
    fn test_average_proportions() {
        let p = GeneticParameters::average_adult().proportions();
        assert_relative_eq!(p.head_size, 0.225, epsilon = 1e-12);
        assert_relative_eq!(p.leg_length, 0.864, epsilon = 1e-12);
        assert_relative_eq!(p.torso_length, 0.711, epsilon = 1e-12);
        assert_relative_eq!(p.shoulder_width, 0.414, epsilon = 1e-12);
        assert_relative_eq!(p.hip_width, 0.288, epsilon = 1e-12);
        assert_relative_eq!(p.arm_length, 0.756, epsilon = 1e-12);
    }

    #[test]
    fn test_build_scales_widths_only() {
        let base = GeneticParameters::average_adult().proportions();
        let stocky = GeneticParameters::average_adult()
            .with_build(1.5)
            .proportions();

        assert_relative_eq!(stocky.shoulder_width, base.shoulder_width * 1.5, epsilon = 1e-12);
        assert_relative_eq!(stocky.hip_width, base.hip_width * 1.5, epsilon = 1e-12);
        assert_eq!(stocky.torso_length, base.torso_length);
        assert_eq!(stocky.arm_length, base.arm_length);
    }

    #[test]
    fn test_no_validation() {
        let p = GeneticParameters::new(0.0, -1.0, 0.0, 0.6, 0.6).proportions();
        assert_eq!(p.leg_length, 0.0);
        assert_eq!(p.torso_length, 0.0);

        // Head and legs longer than the body leave a negative torso.
        let p = GeneticParameters::average_adult()
            .with_head_ratio(0.6)
            .with_leg_ratio(0.6)
            .proportions();
        assert!(p.torso_length < 0.0);
    }
}
