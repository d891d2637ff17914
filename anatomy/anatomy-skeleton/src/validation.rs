//! Joint registry validation.
//!
//! Checks that a registry describes a single tree rooted at
//! [`SegmentId::ROOT`] and that bilateral pairs are mirror images.

use anatomy_types::{AnatomyError, Lateral, Result, SegmentId, Side};
use hashbrown::HashSet;

use crate::registry::JointRegistry;

/// Kinematic structure of a validated registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryReport {
    /// The single segment with no parent joint.
    pub root: SegmentId,
    /// Every segment, parents before children (root first).
    pub sorted_segments: Vec<SegmentId>,
    depths: Vec<usize>,
}

impl RegistryReport {
    /// Number of joints between `segment` and the root.
    #[must_use]
    pub fn depth(&self, segment: SegmentId) -> usize {
        self.depths.get(segment.index()).copied().unwrap_or_default()
    }

    /// Depth of the deepest segment.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.depths.iter().copied().max().unwrap_or_default()
    }
}

/// Validate a joint registry.
///
/// This checks:
/// - No segment is its own parent
/// - Exactly one segment lacks a joint, and it is [`SegmentId::ROOT`]
/// - Every parent chain reaches the root (no kinematic loops)
/// - Each bilateral pair has mirrored parents, equal kinds and equal limits
///
/// # Errors
///
/// Returns the first structural problem found.
pub fn validate(registry: &JointRegistry) -> Result<RegistryReport> {
    check_self_parents(registry)?;

    let root = find_root(registry)?;
    let sorted_segments = topological_sort(registry, root)?;

    let mut depths = vec![0; SegmentId::COUNT];
    for segment in &sorted_segments {
        if let Some(parent) = registry.parent(*segment) {
            depths[segment.index()] = depths[parent.index()] + 1;
        }
    }

    check_symmetry(registry)?;

    Ok(RegistryReport {
        root,
        sorted_segments,
        depths,
    })
}

fn check_self_parents(registry: &JointRegistry) -> Result<()> {
    match registry.iter().find(|(child, entry)| entry.parent == *child) {
        Some((child, _)) => Err(AnatomyError::SelfParent(child)),
        None => Ok(()),
    }
}

fn find_root(registry: &JointRegistry) -> Result<SegmentId> {
    let roots = registry.unjointed();
    match roots.as_slice() {
        [] => Err(AnatomyError::NoRoot),
        [root] if root.is_root() => Ok(*root),
        [found] => Err(AnatomyError::RootHasJoint {
            root: SegmentId::ROOT,
            found: *found,
        }),
        _ => Err(AnatomyError::MultipleRoots(roots)),
    }
}

/// Depth-first walk from the root; anything left unvisited sits on a loop.
fn topological_sort(registry: &JointRegistry, root: SegmentId) -> Result<Vec<SegmentId>> {
    fn visit(
        segment: SegmentId,
        registry: &JointRegistry,
        visited: &mut HashSet<SegmentId>,
        sorted: &mut Vec<SegmentId>,
    ) {
        if !visited.insert(segment) {
            return;
        }
        sorted.push(segment);
        for child in registry.children(segment) {
            visit(child, registry, visited, sorted);
        }
    }

    let mut visited = HashSet::with_capacity(SegmentId::COUNT);
    let mut sorted = Vec::with_capacity(SegmentId::COUNT);
    visit(root, registry, &mut visited, &mut sorted);

    if let Some(stray) = SegmentId::ALL.into_iter().find(|s| !visited.contains(s)) {
        return Err(AnatomyError::Cycle(loop_member(registry, stray)));
    }

    Ok(sorted)
}

/// Follow parents from `start` until a segment repeats.
fn loop_member(registry: &JointRegistry, start: SegmentId) -> SegmentId {
    let mut seen = HashSet::new();
    let mut current = start;
    while seen.insert(current) {
        match registry.parent(current) {
            Some(parent) => current = parent,
            None => return start,
        }
    }
    current
}

fn check_symmetry(registry: &JointRegistry) -> Result<()> {
    for lateral in Lateral::ALL {
        let (left, right) = (lateral.on(Side::Left), lateral.on(Side::Right));
        let (Some(l), Some(r)) = (registry.lookup(left), registry.lookup(right)) else {
            return Err(AnatomyError::asymmetric(left, right, "only one side has a joint"));
        };

        if l.parent.mirror() != r.parent {
            return Err(AnatomyError::asymmetric(
                left,
                right,
                format!("parents {} and {} are not mirrored", l.parent, r.parent),
            ));
        }
        if l.kind != r.kind {
            return Err(AnatomyError::asymmetric(
                left,
                right,
                format!("joint kinds differ ({} vs {})", l.kind, r.kind),
            ));
        }
        if l.limits != r.limits {
            return Err(AnatomyError::asymmetric(left, right, "joint limits differ"));
        }
    }
    Ok(())
}
