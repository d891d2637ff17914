//! The joint registry: parent, kind and limits for every non-root segment.
//!
//! The registry is the single source of truth for the hierarchy. The
//! generator reads limits from it; consumers read parents from it to walk
//! the tree.
//!
//! Bilateral joints are authored once, side-relative, and instantiated for
//! both sides, so the left and right entries of a pair cannot drift apart.

use std::sync::OnceLock;

use anatomy_types::{JointKind, JointLimits, Lateral, SegmentId, Side};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Process-wide standard registry, built on first access.
static STANDARD_REGISTRY: OnceLock<JointRegistry> = OnceLock::new();

/// How a segment hangs from its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointEntry {
    /// The segment this one is attached to.
    pub parent: SegmentId,
    /// Anatomical joint classification.
    pub kind: JointKind,
    /// Rotational limits relative to the bind pose.
    pub limits: JointLimits,
}

impl JointEntry {
    /// Create an entry.
    #[must_use]
    pub const fn new(parent: SegmentId, kind: JointKind, limits: JointLimits) -> Self {
        Self {
            parent,
            kind,
            limits,
        }
    }

    /// Fused suture to `parent`.
    #[must_use]
    pub const fn fused(parent: SegmentId) -> Self {
        Self::new(parent, JointKind::Fibrous, JointLimits::LOCKED)
    }
}

/// Parent of a bilateral joint, relative to the child's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef {
    /// A midline segment, shared by both sides.
    Axial(SegmentId),
    /// The member of another pair on the child's own side.
    SameSide(Lateral),
}

impl ParentRef {
    /// Resolve to a concrete segment for a child on `side`.
    #[must_use]
    pub const fn on(self, side: Side) -> SegmentId {
        match self {
            Self::Axial(segment) => segment,
            Self::SameSide(lateral) => lateral.on(side),
        }
    }
}

impl From<SegmentId> for ParentRef {
    fn from(segment: SegmentId) -> Self {
        Self::Axial(segment)
    }
}

impl From<Lateral> for ParentRef {
    fn from(lateral: Lateral) -> Self {
        Self::SameSide(lateral)
    }
}

/// Segment → joint table, indexed by [`SegmentId::index`].
///
/// Build one with [`JointRegistry::standard`] (or [`JointRegistry::empty`]
/// plus inserts for custom hierarchies), then share it by reference. The
/// process-wide standard table is [`JointRegistry::global`].
///
/// # Example
///
/// ```
/// use anatomy_skeleton::JointRegistry;
/// use anatomy_types::{JointKind, SegmentId};
///
/// let registry = JointRegistry::global();
/// assert!(registry.lookup(SegmentId::Sacrum).is_none());
///
/// let knee = registry.lookup(SegmentId::TibiaLeft).unwrap();
/// assert_eq!(knee.parent, SegmentId::FemurLeft);
/// assert_eq!(knee.kind, JointKind::Hinge);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointRegistry {
    entries: Vec<Option<JointEntry>>,
}

impl Default for JointRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl JointRegistry {
    /// A registry with no joints.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: vec![None; SegmentId::COUNT],
        }
    }

    /// The shared standard registry.
    ///
    /// Built once on first call; every later call returns the same instance.
    #[must_use]
    pub fn global() -> &'static Self {
        STANDARD_REGISTRY.get_or_init(|| {
            let registry = Self::standard();
            debug!(joints = registry.len(), "built standard joint registry");
            registry
        })
    }

    /// Build the standard adult joint table.
    ///
    /// Every segment except [`SegmentId::ROOT`] gets exactly one entry.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.add_spine();
        registry.add_skull();
        registry.add_thorax();
        registry.add_upper_limbs();
        registry.add_hands();
        registry.add_lower_limbs();
        registry.add_feet();
        registry
    }

    /// The joint attaching `segment` to its parent. `None` for the root.
    #[must_use]
    pub fn lookup(&self, segment: SegmentId) -> Option<&JointEntry> {
        self.entries.get(segment.index()).and_then(Option::as_ref)
    }

    /// Parent of `segment`.
    #[must_use]
    pub fn parent(&self, segment: SegmentId) -> Option<SegmentId> {
        self.lookup(segment).map(|entry| entry.parent)
    }

    /// Joint kind of `segment`.
    #[must_use]
    pub fn kind(&self, segment: SegmentId) -> Option<JointKind> {
        self.lookup(segment).map(|entry| entry.kind)
    }

    /// Set the joint for `child`, returning the previous entry.
    pub fn insert(&mut self, child: SegmentId, entry: JointEntry) -> Option<JointEntry> {
        self.entries
            .get_mut(child.index())
            .and_then(|slot| slot.replace(entry))
    }

    /// Set the joints of both members of `child`.
    ///
    /// The parent is resolved per side, so `ParentRef::SameSide` attaches the
    /// left child to the left parent and the right child to the right one.
    pub fn insert_pair(
        &mut self,
        child: Lateral,
        parent: impl Into<ParentRef>,
        kind: JointKind,
        limits: JointLimits,
    ) {
        let parent = parent.into();
        for side in Side::BOTH {
            self.insert(child.on(side), JointEntry::new(parent.on(side), kind, limits));
        }
    }

    /// Remove the joint for `child`, returning it.
    pub fn remove(&mut self, child: SegmentId) -> Option<JointEntry> {
        self.entries.get_mut(child.index()).and_then(Option::take)
    }

    /// Number of segments with a joint.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Check if no segment has a joint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All `(child, joint)` pairs in segment index order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &JointEntry)> {
        SegmentId::ALL
            .into_iter()
            .zip(&self.entries)
            .filter_map(|(segment, entry)| entry.as_ref().map(|e| (segment, e)))
    }

    /// Segments whose parent is `segment`, in index order.
    pub fn children(&self, segment: SegmentId) -> impl Iterator<Item = SegmentId> + '_ {
        self.iter()
            .filter(move |(_, entry)| entry.parent == segment)
            .map(|(child, _)| child)
    }

    /// Segments in the catalog that have no joint.
    ///
    /// For a well-formed registry this is exactly the root.
    #[must_use]
    pub fn unjointed(&self) -> Vec<SegmentId> {
        SegmentId::ALL
            .into_iter()
            .filter(|segment| self.lookup(*segment).is_none())
            .collect()
    }

    fn add(&mut self, child: SegmentId, parent: SegmentId, kind: JointKind, limits: JointLimits) {
        self.insert(child, JointEntry::new(parent, kind, limits));
    }

    /// Connect a serial chain: each element hangs from the next.
    fn chain(&mut self, segments: &[SegmentId], kind: JointKind, limits: JointLimits) {
        for (child, parent) in segments.iter().zip(segments.iter().skip(1)) {
            self.add(*child, *parent, kind, limits);
        }
    }

    fn add_spine(&mut self) {
        use JointKind::Cartilaginous;

        self.add(
            SegmentId::Coccyx,
            SegmentId::Sacrum,
            Cartilaginous,
            JointLimits::LOCKED,
        );

        // Lumbosacral junction carries more flexion than the lumbar stack.
        self.add(
            SegmentId::Lumbar5,
            SegmentId::Sacrum,
            Cartilaginous,
            JointLimits::ball(-15.0, 5.0, -5.0, 5.0, -5.0, 5.0),
        );
        self.chain(
            &SegmentId::LUMBAR,
            Cartilaginous,
            JointLimits::ball(-10.0, 5.0, -5.0, 5.0, -5.0, 5.0),
        );

        let thoracic = JointLimits::ball(-5.0, 5.0, -15.0, 15.0, -5.0, 5.0);
        self.add(SegmentId::Thoracic12, SegmentId::Lumbar1, Cartilaginous, thoracic);
        self.chain(&SegmentId::THORACIC, Cartilaginous, thoracic);

        let cervical = JointLimits::ball(-10.0, 10.0, -10.0, 10.0, -10.0, 10.0);
        self.add(SegmentId::Cervical7, SegmentId::Thoracic1, Cartilaginous, cervical);
        self.chain(&SegmentId::CERVICAL[1..], Cartilaginous, cervical);

        self.add(
            SegmentId::Cervical1Atlas,
            SegmentId::Cervical2Axis,
            JointKind::Pivot,
            JointLimits::pivot(-80.0, 80.0),
        );

        self.add(
            SegmentId::Hyoid,
            SegmentId::Cervical3,
            JointKind::Gliding,
            JointLimits::ball(-10.0, 10.0, -5.0, 5.0, -5.0, 5.0),
        );
    }

    fn add_skull(&mut self) {
        self.add(
            SegmentId::Occipital,
            SegmentId::Cervical1Atlas,
            JointKind::Condyloid,
            JointLimits::biaxial(-25.0, 25.0, -10.0, 10.0),
        );

        self.insert(SegmentId::Sphenoid, JointEntry::fused(SegmentId::Occipital));
        self.insert(SegmentId::Frontal, JointEntry::fused(SegmentId::Sphenoid));
        self.insert(SegmentId::Ethmoid, JointEntry::fused(SegmentId::Sphenoid));
        self.insert(SegmentId::Vomer, JointEntry::fused(SegmentId::Sphenoid));

        for (child, parent) in [
            (Lateral::Parietal, ParentRef::Axial(SegmentId::Occipital)),
            (Lateral::Temporal, ParentRef::SameSide(Lateral::Parietal)),
            (Lateral::Maxilla, ParentRef::Axial(SegmentId::Frontal)),
            (Lateral::Nasal, ParentRef::Axial(SegmentId::Frontal)),
            (Lateral::Zygomatic, ParentRef::SameSide(Lateral::Maxilla)),
            (Lateral::Lacrimal, ParentRef::SameSide(Lateral::Maxilla)),
            (Lateral::Palatine, ParentRef::SameSide(Lateral::Maxilla)),
            (Lateral::InferiorNasalConcha, ParentRef::SameSide(Lateral::Maxilla)),
        ] {
            self.insert_pair(child, parent, JointKind::Fibrous, JointLimits::LOCKED);
        }

        // Ossicle chain: eardrum to oval window.
        let ossicle = 2.0;
        self.insert_pair(
            Lateral::Malleus,
            Lateral::Temporal,
            JointKind::Gliding,
            JointLimits::ball(-ossicle, ossicle, -ossicle, ossicle, -ossicle, ossicle),
        );
        self.insert_pair(
            Lateral::Incus,
            Lateral::Malleus,
            JointKind::Saddle,
            JointLimits::biaxial(-ossicle, ossicle, -ossicle, ossicle),
        );
        self.insert_pair(
            Lateral::Stapes,
            Lateral::Incus,
            JointKind::BallAndSocket,
            JointLimits::ball(-ossicle, ossicle, -ossicle, ossicle, -ossicle, ossicle),
        );

        // Single jaw hinge, anchored on the left temporal bone.
        self.add(
            SegmentId::Mandible,
            SegmentId::TemporalLeft,
            JointKind::Hinge,
            JointLimits::hinge(0.0, 45.0),
        );
    }

    fn add_thorax(&mut self) {
        self.add(
            SegmentId::Sternum,
            SegmentId::Thoracic4,
            JointKind::Cartilaginous,
            JointLimits::ball(-5.0, 5.0, -5.0, 5.0, -5.0, 5.0),
        );

        let rib = JointLimits::ball(-5.0, 5.0, -5.0, 5.0, -5.0, 5.0);
        for (lateral, vertebra) in Lateral::RIBS.into_iter().zip(SegmentId::THORACIC) {
            self.insert_pair(lateral, vertebra, JointKind::Gliding, rib);
        }
    }

    fn add_upper_limbs(&mut self) {
        self.insert_pair(
            Lateral::Clavicle,
            SegmentId::Sternum,
            JointKind::Saddle,
            JointLimits::biaxial(-10.0, 20.0, -10.0, 10.0),
        );
        self.insert_pair(
            Lateral::Scapula,
            Lateral::Clavicle,
            JointKind::Gliding,
            JointLimits::ball(-20.0, 20.0, -20.0, 20.0, -20.0, 20.0),
        );
        self.insert_pair(
            Lateral::Humerus,
            Lateral::Scapula,
            JointKind::BallAndSocket,
            JointLimits::ball(-90.0, 180.0, -90.0, 90.0, -45.0, 135.0),
        );
        self.insert_pair(
            Lateral::Ulna,
            Lateral::Humerus,
            JointKind::Hinge,
            JointLimits::hinge(0.0, 145.0),
        );
        self.insert_pair(
            Lateral::Radius,
            Lateral::Humerus,
            JointKind::Pivot,
            JointLimits::pivot(-90.0, 90.0),
        );
    }

    fn add_hands(&mut self) {
        self.insert_pair(
            Lateral::Lunate,
            Lateral::Radius,
            JointKind::Condyloid,
            JointLimits::biaxial(-60.0, 60.0, -30.0, 30.0),
        );

        let carpal = JointLimits::ball(-5.0, 5.0, -5.0, 5.0, -5.0, 5.0);
        for (child, parent) in [
            (Lateral::Scaphoid, Lateral::Radius),
            (Lateral::Triquetrum, Lateral::Lunate),
            (Lateral::Pisiform, Lateral::Triquetrum),
            (Lateral::Capitate, Lateral::Lunate),
            (Lateral::Hamate, Lateral::Capitate),
            (Lateral::Trapezium, Lateral::Scaphoid),
            (Lateral::Trapezoid, Lateral::Scaphoid),
            (Lateral::Metacarpal2, Lateral::Capitate),
            (Lateral::Metacarpal3, Lateral::Capitate),
            (Lateral::Metacarpal4, Lateral::Hamate),
            (Lateral::Metacarpal5, Lateral::Hamate),
        ] {
            self.insert_pair(child, parent, JointKind::Gliding, carpal);
        }

        self.insert_pair(
            Lateral::Metacarpal1,
            Lateral::Trapezium,
            JointKind::Saddle,
            JointLimits::ball(-20.0, 20.0, -20.0, 20.0, -45.0, 45.0),
        );
        self.insert_pair(
            Lateral::ProximalPhalanxThumb,
            Lateral::Metacarpal1,
            JointKind::Hinge,
            JointLimits::hinge(0.0, 60.0),
        );
        self.insert_pair(
            Lateral::DistalPhalanxThumb,
            Lateral::ProximalPhalanxThumb,
            JointKind::Hinge,
            JointLimits::hinge(0.0, 80.0),
        );

        for [metacarpal, proximal, middle, distal] in FINGERS {
            self.insert_pair(
                proximal,
                metacarpal,
                JointKind::Condyloid,
                JointLimits::biaxial(-10.0, 90.0, -20.0, 20.0),
            );
            self.insert_pair(middle, proximal, JointKind::Hinge, JointLimits::hinge(0.0, 100.0));
            self.insert_pair(distal, middle, JointKind::Hinge, JointLimits::hinge(0.0, 80.0));
        }
    }

    fn add_lower_limbs(&mut self) {
        self.insert_pair(
            Lateral::HipBone,
            SegmentId::Sacrum,
            JointKind::Fibrous,
            JointLimits::LOCKED,
        );
        self.insert_pair(
            Lateral::Femur,
            Lateral::HipBone,
            JointKind::BallAndSocket,
            JointLimits::ball(-20.0, 120.0, -30.0, 30.0, -10.0, 45.0),
        );
        self.insert_pair(
            Lateral::Patella,
            Lateral::Femur,
            JointKind::Gliding,
            JointLimits::ball(-10.0, 10.0, -5.0, 5.0, -5.0, 5.0),
        );
        self.insert_pair(
            Lateral::Tibia,
            Lateral::Femur,
            JointKind::Hinge,
            JointLimits::hinge(0.0, 150.0),
        );
        self.insert_pair(
            Lateral::Fibula,
            Lateral::Tibia,
            JointKind::Gliding,
            JointLimits::ball(-5.0, 5.0, -5.0, 5.0, -5.0, 5.0),
        );
    }

    fn add_feet(&mut self) {
        self.insert_pair(
            Lateral::Talus,
            Lateral::Tibia,
            JointKind::Hinge,
            JointLimits::hinge(-20.0, 50.0),
        );
        self.insert_pair(
            Lateral::Calcaneus,
            Lateral::Talus,
            JointKind::Gliding,
            JointLimits::ball(-10.0, 10.0, -10.0, 10.0, -10.0, 10.0),
        );

        let tarsal = JointLimits::ball(-5.0, 5.0, -5.0, 5.0, -5.0, 5.0);
        for (child, parent) in [
            (Lateral::Navicular, Lateral::Talus),
            (Lateral::Cuboid, Lateral::Calcaneus),
            (Lateral::MedialCuneiform, Lateral::Navicular),
            (Lateral::IntermediateCuneiform, Lateral::Navicular),
            (Lateral::LateralCuneiform, Lateral::Navicular),
            (Lateral::Metatarsal1, Lateral::MedialCuneiform),
            (Lateral::Metatarsal2, Lateral::IntermediateCuneiform),
            (Lateral::Metatarsal3, Lateral::LateralCuneiform),
            (Lateral::Metatarsal4, Lateral::Cuboid),
            (Lateral::Metatarsal5, Lateral::Cuboid),
        ] {
            self.insert_pair(child, parent, JointKind::Gliding, tarsal);
        }

        let toe_base = JointLimits::biaxial(-10.0, 60.0, -10.0, 10.0);
        self.insert_pair(
            Lateral::ProximalPhalanxBigToe,
            Lateral::Metatarsal1,
            JointKind::Condyloid,
            toe_base,
        );
        self.insert_pair(
            Lateral::DistalPhalanxBigToe,
            Lateral::ProximalPhalanxBigToe,
            JointKind::Hinge,
            JointLimits::hinge(0.0, 60.0),
        );

        for [metatarsal, proximal, middle, distal] in LESSER_TOES {
            self.insert_pair(proximal, metatarsal, JointKind::Condyloid, toe_base);
            self.insert_pair(middle, proximal, JointKind::Hinge, JointLimits::hinge(0.0, 60.0));
            self.insert_pair(distal, middle, JointKind::Hinge, JointLimits::hinge(0.0, 50.0));
        }
    }
}

/// Index to little finger: metacarpal, proximal, middle, distal.
const FINGERS: [[Lateral; 4]; 4] = [
    [
        Lateral::Metacarpal2,
        Lateral::ProximalPhalanxIndexFinger,
        Lateral::MiddlePhalanxIndexFinger,
        Lateral::DistalPhalanxIndexFinger,
    ],
    [
        Lateral::Metacarpal3,
        Lateral::ProximalPhalanxMiddleFinger,
        Lateral::MiddlePhalanxMiddleFinger,
        Lateral::DistalPhalanxMiddleFinger,
    ],
    [
        Lateral::Metacarpal4,
        Lateral::ProximalPhalanxRingFinger,
        Lateral::MiddlePhalanxRingFinger,
        Lateral::DistalPhalanxRingFinger,
    ],
    [
        Lateral::Metacarpal5,
        Lateral::ProximalPhalanxLittleFinger,
        Lateral::MiddlePhalanxLittleFinger,
        Lateral::DistalPhalanxLittleFinger,
    ],
];

/// Second to little toe: metatarsal, proximal, middle, distal.
const LESSER_TOES: [[Lateral; 4]; 4] = [
    [
        Lateral::Metatarsal2,
        Lateral::ProximalPhalanxToe2,
        Lateral::MiddlePhalanxToe2,
        Lateral::DistalPhalanxToe2,
    ],
    [
        Lateral::Metatarsal3,
        Lateral::ProximalPhalanxToe3,
        Lateral::MiddlePhalanxToe3,
        Lateral::DistalPhalanxToe3,
    ],
    [
        Lateral::Metatarsal4,
        Lateral::ProximalPhalanxToe4,
        Lateral::MiddlePhalanxToe4,
        Lateral::DistalPhalanxToe4,
    ],
    [
        Lateral::Metatarsal5,
        Lateral::ProximalPhalanxLittleToe,
        Lateral::MiddlePhalanxLittleToe,
        Lateral::DistalPhalanxLittleToe,
    ],
];

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const D2R: f64 = std::f64::consts::PI / 180.0;

    #[test]
    fn test_standard_covers_every_non_root() {
        let registry = JointRegistry::standard();
        assert_eq!(registry.len(), SegmentId::COUNT - 1);
        assert_eq!(registry.unjointed(), vec![SegmentId::ROOT]);
        assert!(registry.lookup(SegmentId::Sacrum).is_none());
    }

    #[test]
    fn test_global_is_shared() {
        let a = JointRegistry::global();
        let b = JointRegistry::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, JointRegistry::standard());
    }

    #[test]
    fn test_humerus_entry() {
        let registry = JointRegistry::standard();
        let entry = registry.lookup(SegmentId::HumerusLeft).unwrap();
        assert_eq!(entry.parent, SegmentId::ScapulaLeft);
        assert_eq!(entry.kind, JointKind::BallAndSocket);
        assert_relative_eq!(entry.limits.min_pitch, -90.0 * D2R, epsilon = 1e-3);
        assert_relative_eq!(entry.limits.max_pitch, 180.0 * D2R, epsilon = 1e-3);
        assert_relative_eq!(entry.limits.min_yaw, -90.0 * D2R, epsilon = 1e-3);
        assert_relative_eq!(entry.limits.max_yaw, 90.0 * D2R, epsilon = 1e-3);
        assert_relative_eq!(entry.limits.min_roll, -45.0 * D2R, epsilon = 1e-3);
        assert_relative_eq!(entry.limits.max_roll, 135.0 * D2R, epsilon = 1e-3);
    }

    #[test]
    fn test_spine_chain() {
        let registry = JointRegistry::standard();
        assert_eq!(registry.parent(SegmentId::Lumbar5), Some(SegmentId::Sacrum));
        assert_eq!(registry.parent(SegmentId::Lumbar1), Some(SegmentId::Lumbar2));
        assert_eq!(registry.parent(SegmentId::Thoracic12), Some(SegmentId::Lumbar1));
        assert_eq!(registry.parent(SegmentId::Thoracic1), Some(SegmentId::Thoracic2));
        assert_eq!(registry.parent(SegmentId::Cervical7), Some(SegmentId::Thoracic1));
        assert_eq!(
            registry.parent(SegmentId::Cervical2Axis),
            Some(SegmentId::Cervical3)
        );
        assert_eq!(
            registry.parent(SegmentId::Cervical1Atlas),
            Some(SegmentId::Cervical2Axis)
        );
        assert_eq!(registry.kind(SegmentId::Cervical1Atlas), Some(JointKind::Pivot));
        assert_eq!(
            registry.parent(SegmentId::Occipital),
            Some(SegmentId::Cervical1Atlas)
        );
    }

    #[test]
    fn test_same_side_parents() {
        let registry = JointRegistry::standard();
        assert_eq!(registry.parent(SegmentId::UlnaRight), Some(SegmentId::HumerusRight));
        assert_eq!(registry.parent(SegmentId::IncusLeft), Some(SegmentId::MalleusLeft));
        assert_eq!(registry.parent(SegmentId::ClavicleRight), Some(SegmentId::Sternum));
        assert_eq!(registry.parent(SegmentId::Rib7Right), Some(SegmentId::Thoracic7));
        assert_eq!(registry.parent(SegmentId::Mandible), Some(SegmentId::TemporalLeft));
    }

    #[test]
    fn test_pairs_are_identical() {
        let registry = JointRegistry::standard();
        for lateral in Lateral::ALL {
            let left = registry.lookup(lateral.on(Side::Left)).unwrap();
            let right = registry.lookup(lateral.on(Side::Right)).unwrap();
            assert_eq!(left.kind, right.kind, "{lateral}");
            assert_eq!(left.limits, right.limits, "{lateral}");
            assert_eq!(left.parent.mirror(), right.parent, "{lateral}");
        }
    }

    #[test]
    fn test_insert_and_remove() {
        let mut registry = JointRegistry::empty();
        assert!(registry.is_empty());

        let entry = JointEntry::fused(SegmentId::Sacrum);
        assert!(registry.insert(SegmentId::Coccyx, entry).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.insert(SegmentId::Coccyx, entry), Some(entry));

        registry.insert_pair(
            Lateral::HipBone,
            SegmentId::Sacrum,
            JointKind::Fibrous,
            JointLimits::LOCKED,
        );
        let children: Vec<_> = registry.children(SegmentId::Sacrum).collect();
        assert_eq!(
            children,
            vec![SegmentId::Coccyx, SegmentId::HipBoneLeft, SegmentId::HipBoneRight]
        );

        assert_eq!(registry.remove(SegmentId::Coccyx), Some(entry));
        assert!(registry.remove(SegmentId::Coccyx).is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_parent_ref() {
        assert_eq!(
            ParentRef::from(Lateral::Femur).on(Side::Right),
            SegmentId::FemurRight
        );
        assert_eq!(
            ParentRef::from(SegmentId::Sternum).on(Side::Left),
            SegmentId::Sternum
        );
    }
}
