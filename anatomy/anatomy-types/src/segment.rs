//! The closed catalog of skeletal segments.
//!
//! Every bone of the adult human skeleton is one [`SegmentId`]. Identifiers
//! are dense (`0..206`) so tables keyed by segment can be flat arrays.
//!
//! Segments come in two flavours:
//!
//! - **Axial** segments lie on the midline (spine, sternum, unpaired skull
//!   bones) and have no side.
//! - **Bilateral** segments exist once per side. The side-agnostic kind is a
//!   [`Lateral`]; [`Lateral::on`] picks the left or right member.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AnatomyError;

/// Body side of a bilateral segment.
///
/// The lateral axis is X: the left side is +X, the right side is -X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Left side (+X).
    Left,
    /// Right side (-X).
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Sign applied to the lateral (X) axis.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

macro_rules! segment_catalog {
    (
        axial { $( $axial:ident => $axial_name:literal, )* }
        bilateral { $( $lateral:ident ( $left:ident, $right:ident ) => $lateral_name:literal, )* }
    ) => {
        /// Identifier of one skeletal segment.
        ///
        /// The discriminant is the dense index used by flat per-segment tables.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(u8)]
        pub enum SegmentId {
            $(
                #[doc = concat!("`", $axial_name, "`.")]
                $axial,
            )*
            $(
                #[doc = concat!("Left `", $lateral_name, "`.")]
                $left,
                #[doc = concat!("Right `", $lateral_name, "`.")]
                $right,
            )*
        }

        impl SegmentId {
            /// Every segment in index order.
            pub const ALL: [Self; Self::COUNT] = [
                $( Self::$axial, )*
                $( Self::$left, Self::$right, )*
            ];

            /// Stable snake-case name, e.g. `femur_left`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$axial => $axial_name, )*
                    $(
                        Self::$left => concat!($lateral_name, "_left"),
                        Self::$right => concat!($lateral_name, "_right"),
                    )*
                }
            }

            /// Bilateral kind and side, or `None` for axial segments.
            #[must_use]
            pub const fn laterality(self) -> Option<(Lateral, Side)> {
                match self {
                    $(
                        Self::$left => Some((Lateral::$lateral, Side::Left)),
                        Self::$right => Some((Lateral::$lateral, Side::Right)),
                    )*
                    _ => None,
                }
            }
        }

        /// Side-agnostic kind of a bilateral segment.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum Lateral {
            $(
                #[doc = concat!("`", $lateral_name, "` pair.")]
                $lateral,
            )*
        }

        impl Lateral {
            /// Every bilateral kind in catalog order.
            pub const ALL: [Self; Self::COUNT] = [ $( Self::$lateral, )* ];

            /// The member of this pair on the given side.
            #[must_use]
            pub const fn on(self, side: Side) -> SegmentId {
                match (self, side) {
                    $(
                        (Self::$lateral, Side::Left) => SegmentId::$left,
                        (Self::$lateral, Side::Right) => SegmentId::$right,
                    )*
                }
            }

            /// Snake-case name without side suffix.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$lateral => $lateral_name, )*
                }
            }
        }
    };
}

segment_catalog! {
    axial {
        Sacrum => "sacrum",
        Coccyx => "coccyx",
        Lumbar1 => "lumbar_1",
        Lumbar2 => "lumbar_2",
        Lumbar3 => "lumbar_3",
        Lumbar4 => "lumbar_4",
        Lumbar5 => "lumbar_5",
        Thoracic1 => "thoracic_1",
        Thoracic2 => "thoracic_2",
        Thoracic3 => "thoracic_3",
        Thoracic4 => "thoracic_4",
        Thoracic5 => "thoracic_5",
        Thoracic6 => "thoracic_6",
        Thoracic7 => "thoracic_7",
        Thoracic8 => "thoracic_8",
        Thoracic9 => "thoracic_9",
        Thoracic10 => "thoracic_10",
        Thoracic11 => "thoracic_11",
        Thoracic12 => "thoracic_12",
        Cervical1Atlas => "cervical_1_atlas",
        Cervical2Axis => "cervical_2_axis",
        Cervical3 => "cervical_3",
        Cervical4 => "cervical_4",
        Cervical5 => "cervical_5",
        Cervical6 => "cervical_6",
        Cervical7 => "cervical_7",
        Sternum => "sternum",
        Hyoid => "hyoid",
        Occipital => "occipital",
        Frontal => "frontal",
        Sphenoid => "sphenoid",
        Ethmoid => "ethmoid",
        Vomer => "vomer",
        Mandible => "mandible",
    }
    bilateral {
        Parietal(ParietalLeft, ParietalRight) => "parietal",
        Temporal(TemporalLeft, TemporalRight) => "temporal",
        Maxilla(MaxillaLeft, MaxillaRight) => "maxilla",
        Zygomatic(ZygomaticLeft, ZygomaticRight) => "zygomatic",
        Nasal(NasalLeft, NasalRight) => "nasal",
        Lacrimal(LacrimalLeft, LacrimalRight) => "lacrimal",
        Palatine(PalatineLeft, PalatineRight) => "palatine",
        InferiorNasalConcha(InferiorNasalConchaLeft, InferiorNasalConchaRight) => "inferior_nasal_concha",
        Malleus(MalleusLeft, MalleusRight) => "malleus",
        Incus(IncusLeft, IncusRight) => "incus",
        Stapes(StapesLeft, StapesRight) => "stapes",
        Rib1(Rib1Left, Rib1Right) => "rib_1",
        Rib2(Rib2Left, Rib2Right) => "rib_2",
        Rib3(Rib3Left, Rib3Right) => "rib_3",
        Rib4(Rib4Left, Rib4Right) => "rib_4",
        Rib5(Rib5Left, Rib5Right) => "rib_5",
        Rib6(Rib6Left, Rib6Right) => "rib_6",
        Rib7(Rib7Left, Rib7Right) => "rib_7",
        Rib8(Rib8Left, Rib8Right) => "rib_8",
        Rib9(Rib9Left, Rib9Right) => "rib_9",
        Rib10(Rib10Left, Rib10Right) => "rib_10",
        Rib11(Rib11Left, Rib11Right) => "rib_11",
        Rib12(Rib12Left, Rib12Right) => "rib_12",
        Clavicle(ClavicleLeft, ClavicleRight) => "clavicle",
        Scapula(ScapulaLeft, ScapulaRight) => "scapula",
        Humerus(HumerusLeft, HumerusRight) => "humerus",
        Radius(RadiusLeft, RadiusRight) => "radius",
        Ulna(UlnaLeft, UlnaRight) => "ulna",
        Scaphoid(ScaphoidLeft, ScaphoidRight) => "scaphoid",
        Lunate(LunateLeft, LunateRight) => "lunate",
        Triquetrum(TriquetrumLeft, TriquetrumRight) => "triquetrum",
        Pisiform(PisiformLeft, PisiformRight) => "pisiform",
        Trapezium(TrapeziumLeft, TrapeziumRight) => "trapezium",
        Trapezoid(TrapezoidLeft, TrapezoidRight) => "trapezoid",
        Capitate(CapitateLeft, CapitateRight) => "capitate",
        Hamate(HamateLeft, HamateRight) => "hamate",
        Metacarpal1(Metacarpal1Left, Metacarpal1Right) => "metacarpal_1",
        Metacarpal2(Metacarpal2Left, Metacarpal2Right) => "metacarpal_2",
        Metacarpal3(Metacarpal3Left, Metacarpal3Right) => "metacarpal_3",
        Metacarpal4(Metacarpal4Left, Metacarpal4Right) => "metacarpal_4",
        Metacarpal5(Metacarpal5Left, Metacarpal5Right) => "metacarpal_5",
        ProximalPhalanxThumb(ProximalPhalanxThumbLeft, ProximalPhalanxThumbRight) => "proximal_phalanx_thumb",
        DistalPhalanxThumb(DistalPhalanxThumbLeft, DistalPhalanxThumbRight) => "distal_phalanx_thumb",
        ProximalPhalanxIndexFinger(ProximalPhalanxIndexFingerLeft, ProximalPhalanxIndexFingerRight) => "proximal_phalanx_index_finger",
        MiddlePhalanxIndexFinger(MiddlePhalanxIndexFingerLeft, MiddlePhalanxIndexFingerRight) => "middle_phalanx_index_finger",
        DistalPhalanxIndexFinger(DistalPhalanxIndexFingerLeft, DistalPhalanxIndexFingerRight) => "distal_phalanx_index_finger",
        ProximalPhalanxMiddleFinger(ProximalPhalanxMiddleFingerLeft, ProximalPhalanxMiddleFingerRight) => "proximal_phalanx_middle_finger",
        MiddlePhalanxMiddleFinger(MiddlePhalanxMiddleFingerLeft, MiddlePhalanxMiddleFingerRight) => "middle_phalanx_middle_finger",
        DistalPhalanxMiddleFinger(DistalPhalanxMiddleFingerLeft, DistalPhalanxMiddleFingerRight) => "distal_phalanx_middle_finger",
        ProximalPhalanxRingFinger(ProximalPhalanxRingFingerLeft, ProximalPhalanxRingFingerRight) => "proximal_phalanx_ring_finger",
        MiddlePhalanxRingFinger(MiddlePhalanxRingFingerLeft, MiddlePhalanxRingFingerRight) => "middle_phalanx_ring_finger",
        DistalPhalanxRingFinger(DistalPhalanxRingFingerLeft, DistalPhalanxRingFingerRight) => "distal_phalanx_ring_finger",
        ProximalPhalanxLittleFinger(ProximalPhalanxLittleFingerLeft, ProximalPhalanxLittleFingerRight) => "proximal_phalanx_little_finger",
        MiddlePhalanxLittleFinger(MiddlePhalanxLittleFingerLeft, MiddlePhalanxLittleFingerRight) => "middle_phalanx_little_finger",
        DistalPhalanxLittleFinger(DistalPhalanxLittleFingerLeft, DistalPhalanxLittleFingerRight) => "distal_phalanx_little_finger",
        HipBone(HipBoneLeft, HipBoneRight) => "hip_bone",
        Femur(FemurLeft, FemurRight) => "femur",
        Patella(PatellaLeft, PatellaRight) => "patella",
        Tibia(TibiaLeft, TibiaRight) => "tibia",
        Fibula(FibulaLeft, FibulaRight) => "fibula",
        Talus(TalusLeft, TalusRight) => "talus",
        Calcaneus(CalcaneusLeft, CalcaneusRight) => "calcaneus",
        Navicular(NavicularLeft, NavicularRight) => "navicular",
        Cuboid(CuboidLeft, CuboidRight) => "cuboid",
        MedialCuneiform(MedialCuneiformLeft, MedialCuneiformRight) => "medial_cuneiform",
        IntermediateCuneiform(IntermediateCuneiformLeft, IntermediateCuneiformRight) => "intermediate_cuneiform",
        LateralCuneiform(LateralCuneiformLeft, LateralCuneiformRight) => "lateral_cuneiform",
        Metatarsal1(Metatarsal1Left, Metatarsal1Right) => "metatarsal_1",
        Metatarsal2(Metatarsal2Left, Metatarsal2Right) => "metatarsal_2",
        Metatarsal3(Metatarsal3Left, Metatarsal3Right) => "metatarsal_3",
        Metatarsal4(Metatarsal4Left, Metatarsal4Right) => "metatarsal_4",
        Metatarsal5(Metatarsal5Left, Metatarsal5Right) => "metatarsal_5",
        ProximalPhalanxBigToe(ProximalPhalanxBigToeLeft, ProximalPhalanxBigToeRight) => "proximal_phalanx_big_toe",
        DistalPhalanxBigToe(DistalPhalanxBigToeLeft, DistalPhalanxBigToeRight) => "distal_phalanx_big_toe",
        ProximalPhalanxToe2(ProximalPhalanxToe2Left, ProximalPhalanxToe2Right) => "proximal_phalanx_toe_2",
        MiddlePhalanxToe2(MiddlePhalanxToe2Left, MiddlePhalanxToe2Right) => "middle_phalanx_toe_2",
        DistalPhalanxToe2(DistalPhalanxToe2Left, DistalPhalanxToe2Right) => "distal_phalanx_toe_2",
        ProximalPhalanxToe3(ProximalPhalanxToe3Left, ProximalPhalanxToe3Right) => "proximal_phalanx_toe_3",
        MiddlePhalanxToe3(MiddlePhalanxToe3Left, MiddlePhalanxToe3Right) => "middle_phalanx_toe_3",
        DistalPhalanxToe3(DistalPhalanxToe3Left, DistalPhalanxToe3Right) => "distal_phalanx_toe_3",
        ProximalPhalanxToe4(ProximalPhalanxToe4Left, ProximalPhalanxToe4Right) => "proximal_phalanx_toe_4",
        MiddlePhalanxToe4(MiddlePhalanxToe4Left, MiddlePhalanxToe4Right) => "middle_phalanx_toe_4",
        DistalPhalanxToe4(DistalPhalanxToe4Left, DistalPhalanxToe4Right) => "distal_phalanx_toe_4",
        ProximalPhalanxLittleToe(ProximalPhalanxLittleToeLeft, ProximalPhalanxLittleToeRight) => "proximal_phalanx_little_toe",
        MiddlePhalanxLittleToe(MiddlePhalanxLittleToeLeft, MiddlePhalanxLittleToeRight) => "middle_phalanx_little_toe",
        DistalPhalanxLittleToe(DistalPhalanxLittleToeLeft, DistalPhalanxLittleToeRight) => "distal_phalanx_little_toe",
    }
}

/// Look up a 1-based anatomical ordinal in a serial table.
fn ordinal<T: Copy>(table: &[T], n: usize) -> Option<T> {
    n.checked_sub(1).and_then(|i| table.get(i)).copied()
}

impl SegmentId {
    /// Number of segments in the catalog.
    pub const COUNT: usize = 206;

    /// The designated root of the hierarchy.
    pub const ROOT: Self = Self::Sacrum;

    /// Lumbar vertebrae, `L1` (top) to `L5`.
    pub const LUMBAR: [Self; 5] = [
        Self::Lumbar1,
        Self::Lumbar2,
        Self::Lumbar3,
        Self::Lumbar4,
        Self::Lumbar5,
    ];

    /// Thoracic vertebrae, `T1` (top) to `T12`.
    pub const THORACIC: [Self; 12] = [
        Self::Thoracic1,
        Self::Thoracic2,
        Self::Thoracic3,
        Self::Thoracic4,
        Self::Thoracic5,
        Self::Thoracic6,
        Self::Thoracic7,
        Self::Thoracic8,
        Self::Thoracic9,
        Self::Thoracic10,
        Self::Thoracic11,
        Self::Thoracic12,
    ];

    /// Cervical vertebrae, atlas (top) to `C7`.
    pub const CERVICAL: [Self; 7] = [
        Self::Cervical1Atlas,
        Self::Cervical2Axis,
        Self::Cervical3,
        Self::Cervical4,
        Self::Cervical5,
        Self::Cervical6,
        Self::Cervical7,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Segment at a dense index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this is the designated root.
    #[must_use]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    /// Side of a bilateral segment.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        self.laterality().map(|(_, side)| side)
    }

    /// Bilateral kind, or `None` for axial segments.
    #[must_use]
    pub fn lateral(self) -> Option<Lateral> {
        self.laterality().map(|(lateral, _)| lateral)
    }

    /// Whether this segment lies on the midline.
    #[must_use]
    pub fn is_axial(self) -> bool {
        self.laterality().is_none()
    }

    /// The same segment on the opposite side. Axial segments map to themselves.
    #[must_use]
    pub fn mirror(self) -> Self {
        match self.laterality() {
            Some((lateral, side)) => lateral.on(side.opposite()),
            None => self,
        }
    }

    /// Lumbar vertebra `L{n}`, `n` in `1..=5`.
    #[must_use]
    pub fn lumbar(n: usize) -> Option<Self> {
        ordinal(&Self::LUMBAR, n)
    }

    /// Thoracic vertebra `T{n}`, `n` in `1..=12`.
    #[must_use]
    pub fn thoracic(n: usize) -> Option<Self> {
        ordinal(&Self::THORACIC, n)
    }

    /// Cervical vertebra `C{n}`, `n` in `1..=7`.
    #[must_use]
    pub fn cervical(n: usize) -> Option<Self> {
        ordinal(&Self::CERVICAL, n)
    }
}

impl Lateral {
    /// Number of bilateral kinds.
    pub const COUNT: usize = 86;

    /// Rib pairs, first (top) to twelfth.
    pub const RIBS: [Self; 12] = [
        Self::Rib1,
        Self::Rib2,
        Self::Rib3,
        Self::Rib4,
        Self::Rib5,
        Self::Rib6,
        Self::Rib7,
        Self::Rib8,
        Self::Rib9,
        Self::Rib10,
        Self::Rib11,
        Self::Rib12,
    ];

    /// Rib pair `n`, `n` in `1..=12`.
    #[must_use]
    pub fn rib(n: usize) -> Option<Self> {
        ordinal(&Self::RIBS, n)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Lateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmentId {
    type Err = AnatomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|segment| segment.name() == s)
            .ok_or_else(|| AnatomyError::UnknownSegment(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SegmentId::ALL.len(), 206);
        assert_eq!(Lateral::ALL.len(), 86);

        let axial = SegmentId::ALL.iter().filter(|s| s.is_axial()).count();
        assert_eq!(axial, 34);
        assert_eq!(axial + 2 * Lateral::COUNT, SegmentId::COUNT);
    }

    #[test]
    fn test_dense_index_matches_order() {
        for (i, segment) in SegmentId::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
            assert_eq!(SegmentId::from_index(i), Some(*segment));
        }
        assert_eq!(SegmentId::from_index(SegmentId::COUNT), None);
    }

    #[test]
    fn test_names_unique_and_parse() {
        let names: HashSet<&str> = SegmentId::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), SegmentId::COUNT);

        for segment in SegmentId::ALL {
            assert_eq!(segment.name().parse::<SegmentId>().unwrap(), segment);
        }
        assert_eq!(SegmentId::FemurLeft.to_string(), "femur_left");
        assert!("tail".parse::<SegmentId>().is_err());
    }

    #[test]
    fn test_laterality() {
        assert_eq!(
            SegmentId::HumerusLeft.laterality(),
            Some((Lateral::Humerus, Side::Left))
        );
        assert_eq!(SegmentId::HumerusRight.side(), Some(Side::Right));
        assert_eq!(SegmentId::Sacrum.lateral(), None);
        assert_eq!(Lateral::Femur.on(Side::Right), SegmentId::FemurRight);
    }

    #[test]
    fn test_mirror_is_involution() {
        for segment in SegmentId::ALL {
            assert_eq!(segment.mirror().mirror(), segment);
            if segment.is_axial() {
                assert_eq!(segment.mirror(), segment);
            } else {
                assert_ne!(segment.mirror(), segment);
                assert_eq!(segment.mirror().lateral(), segment.lateral());
            }
        }
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(SegmentId::lumbar(5), Some(SegmentId::Lumbar5));
        assert_eq!(SegmentId::thoracic(12), Some(SegmentId::Thoracic12));
        assert_eq!(SegmentId::cervical(1), Some(SegmentId::Cervical1Atlas));
        assert_eq!(Lateral::rib(7), Some(Lateral::Rib7));

        assert_eq!(SegmentId::lumbar(0), None);
        assert_eq!(SegmentId::lumbar(6), None);
        assert_eq!(Lateral::rib(13), None);
    }

    #[test]
    fn test_side() {
        assert_eq!(Side::Left.sign(), 1.0);
        assert_eq!(Side::Right.sign(), -1.0);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.to_string(), "right");
    }
}
