//! Core types for procedural skeleton generation.
//!
//! This crate provides the data vocabulary shared by skeleton producers and
//! consumers:
//!
//! - [`SegmentId`] - The closed catalog of 206 bones
//! - [`JointLimits`] / [`JointKind`] - How a segment may rotate against its parent
//! - [`CollisionShape`] - Box, capsule and sphere proxies
//! - [`SegmentDefinition`] - Length, bind pose, mass, shapes and limits of one bone
//! - [`GeneticParameters`] / [`Proportions`] - The inputs and the body
//!   dimensions derived from them
//!
//! # Design Philosophy
//!
//! These types are **pure data**. Generation, the joint registry and its
//! validation live in `anatomy-skeleton`.
//!
//! # Coordinate System
//!
//! - X: lateral (left is +X)
//! - Y: up
//! - Z: forward
//! - Right-handed, meters, kilograms, radians
//!
//! # Example
//!
//! ```
//! use anatomy_types::{Lateral, SegmentId, Side};
//!
//! let femur = Lateral::Femur.on(Side::Left);
//! assert_eq!(femur, SegmentId::FemurLeft);
//! assert_eq!(femur.mirror(), SegmentId::FemurRight);
//! assert_eq!(SegmentId::ALL.len(), 206);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
    clippy::missing_errors_doc,        // Error docs added where non-obvious
    clippy::too_many_arguments,        // Limit presets mirror the six bounds
)]

mod definition;
mod error;
mod genome;
mod joint;
mod segment;
mod shape;

pub use definition::{BONE_DENSITY_KG_M3, SegmentDefinition};
pub use error::AnatomyError;
pub use genome::{GeneticParameters, Proportions};
pub use joint::{JointKind, JointLimits};
pub use segment::{Lateral, SegmentId, Side};
pub use shape::CollisionShape;

// Re-export math types for convenience
pub use nalgebra::{UnitQuaternion, Vector3};

/// Result type for skeleton operations.
pub type Result<T> = std::result::Result<T, AnatomyError>;
