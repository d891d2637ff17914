//! The generated skeleton.

use std::ops::Index;

use anatomy_types::{SegmentDefinition, SegmentId, Vector3};
use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registry::JointRegistry;

/// A complete set of segment definitions, keyed by segment.
///
/// Each call to the generator returns a fresh, independently owned value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Skeleton {
    segments: HashMap<SegmentId, SegmentDefinition>,
}

impl Skeleton {
    /// An empty skeleton.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: HashMap::with_capacity(SegmentId::COUNT),
        }
    }

    /// Add or replace a segment, returning the previous definition.
    pub fn insert(
        &mut self,
        segment: SegmentId,
        definition: SegmentDefinition,
    ) -> Option<SegmentDefinition> {
        self.segments.insert(segment, definition)
    }

    /// Definition of `segment`.
    #[must_use]
    pub fn get(&self, segment: SegmentId) -> Option<&SegmentDefinition> {
        self.segments.get(&segment)
    }

    /// Check if `segment` is present.
    #[must_use]
    pub fn contains(&self, segment: SegmentId) -> bool {
        self.segments.contains_key(&segment)
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the skeleton has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in catalog index order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &SegmentDefinition)> {
        SegmentId::ALL
            .into_iter()
            .filter_map(|segment| self.get(segment).map(|def| (segment, def)))
    }

    /// Segments missing from the catalog.
    #[must_use]
    pub fn missing(&self) -> Vec<SegmentId> {
        SegmentId::ALL
            .into_iter()
            .filter(|segment| !self.contains(*segment))
            .collect()
    }

    /// Sum of all segment masses in kg.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.segments.values().map(|def| def.mass).sum()
    }

    /// Bind position of `segment` in the body frame.
    ///
    /// Adds up parent-local bind positions along the registry's parent chain.
    /// Bind rotations are identity, so no rotation is applied. Ancestors
    /// missing from the skeleton contribute nothing.
    #[must_use]
    pub fn world_position(&self, segment: SegmentId, registry: &JointRegistry) -> Option<Vector3<f64>> {
        let mut position = self.get(segment)?.bind_position;
        let mut current = segment;
        // Bounded so a looping registry cannot hang.
        for _ in 0..SegmentId::COUNT {
            let Some(parent) = registry.parent(current) else {
                break;
            };
            if let Some(def) = self.get(parent) {
                position += def.bind_position;
            }
            current = parent;
        }
        Some(position)
    }

    /// Body-frame bind positions of every segment.
    #[must_use]
    pub fn world_bind_positions(&self, registry: &JointRegistry) -> HashMap<SegmentId, Vector3<f64>> {
        self.segments
            .keys()
            .filter_map(|segment| {
                self.world_position(*segment, registry)
                    .map(|position| (*segment, position))
            })
            .collect()
    }
}

impl Index<SegmentId> for Skeleton {
    type Output = SegmentDefinition;

    fn index(&self, segment: SegmentId) -> &Self::Output {
        &self.segments[&segment]
    }
}
