//! Procedural skeleton generation.
//!
//! Generation runs region by region (pelvis, spine, skull, legs, arms). Each
//! region computes parent-local geometry from the body [`Proportions`] and
//! hands finished definitions to an [`Assembly`], which attaches joint
//! limits from the registry.
//!
//! Bilateral segments are computed once for the left side and reflected to
//! produce the right side.

mod axial;
mod digit;
mod limbs;

use anatomy_types::{
    AnatomyError, CollisionShape, GeneticParameters, JointLimits, Lateral, Proportions, Result,
    SegmentDefinition, SegmentId, Side, Vector3,
};
use tracing::{debug, warn};

use crate::config::{GeneratorConfig, MissingJointPolicy};
use crate::registry::JointRegistry;
use crate::skeleton::Skeleton;

/// Generate a skeleton with the default generator.
///
/// Uses the standard registry and never fails.
///
/// # Example
///
/// ```
/// use anatomy_skeleton::generate;
/// use anatomy_types::{GeneticParameters, SegmentId};
///
/// let skeleton = generate(&GeneticParameters::average_adult());
/// assert_eq!(skeleton.len(), 206);
/// assert!((skeleton[SegmentId::Sacrum].mass - 7.8).abs() < 1e-9);
/// ```
#[must_use]
pub fn generate(params: &GeneticParameters) -> Skeleton {
    SkeletonGenerator::new().assemble(params).skeleton
}

/// Configurable skeleton generator.
///
/// Holds a registry reference and options; generation itself is pure, so one
/// generator can be shared across threads.
#[derive(Debug, Clone)]
pub struct SkeletonGenerator<'r> {
    config: GeneratorConfig,
    registry: &'r JointRegistry,
}

impl Default for SkeletonGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl SkeletonGenerator<'static> {
    /// Generator over the global standard registry with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            registry: JointRegistry::global(),
        }
    }
}

impl<'r> SkeletonGenerator<'r> {
    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Read joints from `registry` instead.
    #[must_use]
    pub fn with_registry<'a>(self, registry: &'a JointRegistry) -> SkeletonGenerator<'a> {
        SkeletonGenerator {
            config: self.config,
            registry,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The registry joints are read from.
    #[must_use]
    pub fn registry(&self) -> &'r JointRegistry {
        self.registry
    }

    /// Generate a skeleton.
    ///
    /// # Errors
    ///
    /// Returns [`AnatomyError::MissingJoint`] if the policy is
    /// [`MissingJointPolicy::Reject`] and any non-root segment has no entry in
    /// the registry. The default policy never fails.
    pub fn generate(&self, params: &GeneticParameters) -> Result<Skeleton> {
        let Assembly {
            skeleton, missing, ..
        } = self.assemble(params);

        if !missing.is_empty() && self.config.missing_joint == MissingJointPolicy::Reject {
            return Err(AnatomyError::MissingJoint { segments: missing });
        }
        Ok(skeleton)
    }

    fn assemble(&self, params: &GeneticParameters) -> Assembly<'r> {
        debug!(
            height = params.height,
            mass = params.mass,
            build = params.build,
            "generating skeleton"
        );

        let mut assembly = Assembly::new(params, self.registry);
        axial::root(&mut assembly);
        axial::pelvis(&mut assembly);
        axial::spine(&mut assembly);
        axial::skull(&mut assembly);
        limbs::legs(&mut assembly);
        limbs::arms(&mut assembly);

        debug!(
            segments = assembly.skeleton.len(),
            missing_joints = assembly.missing.len(),
            "generated skeleton"
        );
        assembly
    }
}

/// Accumulates segments during one generation pass.
pub(crate) struct Assembly<'r> {
    registry: &'r JointRegistry,
    /// Build multiplier.
    pub(crate) build: f64,
    /// Total body mass in kg.
    pub(crate) total_mass: f64,
    /// Derived body dimensions.
    pub(crate) body: Proportions,
    skeleton: Skeleton,
    missing: Vec<SegmentId>,
}

impl<'r> Assembly<'r> {
    fn new(params: &GeneticParameters, registry: &'r JointRegistry) -> Self {
        Self {
            registry,
            build: params.build,
            total_mass: params.mass,
            body: params.proportions(),
            skeleton: Skeleton::new(),
            missing: Vec::new(),
        }
    }

    /// Mass for a fraction of total body mass.
    pub(crate) fn mass(&self, fraction: f64) -> f64 {
        self.total_mass * fraction
    }

    /// Add a segment, copying its limits from the registry.
    pub(crate) fn place(&mut self, segment: SegmentId, definition: SegmentDefinition) {
        let limits = match self.registry.lookup(segment) {
            Some(entry) => entry.limits,
            None => {
                if !segment.is_root() {
                    warn!(%segment, "no joint entry, using locked limits");
                    self.missing.push(segment);
                }
                JointLimits::LOCKED
            }
        };
        self.skeleton.insert(segment, definition.with_limits(limits));
    }

    /// Add both members of a pair from the left-side definition.
    pub(crate) fn place_pair(&mut self, lateral: Lateral, left: SegmentDefinition) {
        let right = left.mirrored();
        self.place(lateral.on(Side::Left), left);
        self.place(lateral.on(Side::Right), right);
    }
}

/// Capsule running from the segment origin down its length along -Y.
pub(crate) fn hanging_capsule(radius: f64, length: f64) -> CollisionShape {
    CollisionShape::capsule(radius, length, Vector3::new(0.0, -length / 2.0, 0.0))
}
