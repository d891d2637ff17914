//! Procedural human skeleton generation.
//!
//! Turns five [`GeneticParameters`] into a complete 206-segment
//! [`Skeleton`]: lengths, bind positions, masses, collision shapes and joint
//! limits for every bone.
//!
//! # Components
//!
//! - [`JointRegistry`] - Parent, joint kind and limits for each segment
//! - [`validate`] - Structural checks on a registry (single root, no loops,
//!   mirrored pairs)
//! - [`SkeletonGenerator`] / [`generate`] - The region-by-region generator
//! - [`mass`] - The mass distribution table
//!
//! # Layer 0
//!
//! Pure computation with no engine dependencies. Generation is deterministic
//! and reentrant; the standard registry is built once and shared read-only.
//!
//! # Example
//!
//! ```
//! use anatomy_skeleton::{JointRegistry, generate};
//! use anatomy_types::{GeneticParameters, SegmentId};
//!
//! let params = GeneticParameters::average_adult().with_mass(90.0);
//! let skeleton = generate(&params);
//!
//! let femur = &skeleton[SegmentId::FemurLeft];
//! assert!(femur.mass > skeleton[SegmentId::DistalPhalanxIndexFingerLeft].mass);
//!
//! let knee = JointRegistry::global().lookup(SegmentId::TibiaLeft).unwrap();
//! assert_eq!(knee.parent, SegmentId::FemurLeft);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Accessors over hashbrown maps can't be const
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
    clippy::cast_precision_loss,       // usize to f64 is fine for counts
    clippy::missing_errors_doc,        // Error docs added where non-obvious
    clippy::module_name_repetitions,   // JointRegistry in registry, etc.
)]

mod config;
mod generator;
pub mod mass;
mod registry;
mod skeleton;
mod validation;

pub use config::{GeneratorConfig, MissingJointPolicy};
pub use generator::{SkeletonGenerator, generate};
pub use registry::{JointEntry, JointRegistry, ParentRef};
pub use skeleton::Skeleton;
pub use validation::{RegistryReport, validate};
