//! Generator configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a generated segment has no joint in the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingJointPolicy {
    /// Give the segment locked limits and log a warning.
    #[default]
    FallbackLocked,
    /// Fail generation with [`AnatomyError::MissingJoint`].
    ///
    /// [`AnatomyError::MissingJoint`]: anatomy_types::AnatomyError::MissingJoint
    Reject,
}

/// Options for [`SkeletonGenerator`](crate::SkeletonGenerator).
///
/// # Example
///
/// ```
/// use anatomy_skeleton::{GeneratorConfig, MissingJointPolicy};
///
/// let config = GeneratorConfig::strict();
/// assert_eq!(config.missing_joint, MissingJointPolicy::Reject);
/// assert_eq!(GeneratorConfig::default().missing_joint, MissingJointPolicy::FallbackLocked);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Handling of segments absent from the registry.
    pub missing_joint: MissingJointPolicy,
}

impl GeneratorConfig {
    /// Configuration that rejects incomplete registries.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            missing_joint: MissingJointPolicy::Reject,
        }
    }

    /// Set the missing-joint policy.
    #[must_use]
    pub fn with_missing_joint(mut self, policy: MissingJointPolicy) -> Self {
        self.missing_joint = policy;
        self
    }
}
