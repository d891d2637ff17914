//! Error types for skeleton construction and registry validation.

use thiserror::Error;

use crate::segment::SegmentId;

/// Errors raised while building or validating a skeleton hierarchy.
///
/// Generation itself never fails with the default configuration; these
/// errors surface from name parsing, strict generation, and registry
/// validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnatomyError {
    /// A segment name did not match the catalog.
    #[error("unknown segment: {0}")]
    UnknownSegment(String),

    /// Non-root segments have no joint entry.
    #[error("no joint entry for {} segment(s): {}", .segments.len(), join(.segments))]
    MissingJoint {
        /// The segments that were looked up and not found.
        segments: Vec<SegmentId>,
    },

    /// The designated root has a parent joint and another segment is
    /// parentless instead.
    #[error("root segment {root} must not have a parent joint ({found} has none)")]
    RootHasJoint {
        /// The designated root.
        root: SegmentId,
        /// The segment that lacks a parent joint.
        found: SegmentId,
    },

    /// Every segment has a parent; the hierarchy has no root.
    #[error("no root segment found (every segment has a parent joint)")]
    NoRoot,

    /// More than one segment lacks a parent joint.
    #[error("multiple root segments found: {}", join(.0))]
    MultipleRoots(Vec<SegmentId>),

    /// A segment names itself as parent.
    #[error("segment {0} is its own parent")]
    SelfParent(SegmentId),

    /// Following parents from this segment never reaches the root.
    #[error("kinematic loop detected involving segment {0}")]
    Cycle(SegmentId),

    /// The two members of a bilateral pair are not mirror images.
    #[error("asymmetric pair {left}/{right}: {reason}")]
    AsymmetricPair {
        /// Left member.
        left: SegmentId,
        /// Right member.
        right: SegmentId,
        /// What differs.
        reason: String,
    },
}

fn join(segments: &[SegmentId]) -> String {
    segments
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AnatomyError {
    /// Create an asymmetric-pair error.
    #[must_use]
    pub fn asymmetric(left: SegmentId, right: SegmentId, reason: impl Into<String>) -> Self {
        Self::AsymmetricPair {
            left,
            right,
            reason: reason.into(),
        }
    }

    /// Check if this error describes a malformed hierarchy (as opposed to
    /// bad input).
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::RootHasJoint { .. }
                | Self::NoRoot
                | Self::MultipleRoots(_)
                | Self::SelfParent(_)
                | Self::Cycle(_)
                | Self::AsymmetricPair { .. }
        )
    }
}
