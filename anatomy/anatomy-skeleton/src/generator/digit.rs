//! Fingers and toes.
//!
//! A digit is a base bone (metacarpal or metatarsal) followed by two or three
//! phalanges. The base takes 40% of the digit length; the phalanges share
//! the rest, with the distal one shortened to 80%. Each bone hangs from the
//! end of the previous one along -Y and gets progressively thinner.

use anatomy_types::{Lateral, SegmentDefinition, Vector3};

use super::{Assembly, hanging_capsule};
use crate::mass;

const BASE_SHARE: f64 = 0.4;
const DISTAL_SHORTENING: f64 = 0.8;

/// Width multipliers: base, proximal, middle, distal.
const TAPER: [f64; 4] = [1.0, 0.9, 0.8, 0.7];

/// Left-side layout of one digit.
#[derive(Debug, Clone, Copy)]
pub(super) struct Digit {
    pub base: Lateral,
    pub proximal: Lateral,
    /// `None` for the thumb and big toe.
    pub middle: Option<Lateral>,
    pub distal: Lateral,
    /// Origin of the base bone in its parent's frame.
    pub start: Vector3<f64>,
    /// Base plus phalanges, in meters.
    pub length: f64,
    /// Base bone radius, in meters.
    pub width: f64,
}

impl Digit {
    /// Digit with three phalanges.
    pub(super) fn three(
        [base, proximal, middle, distal]: [Lateral; 4],
        start: Vector3<f64>,
        length: f64,
        width: f64,
    ) -> Self {
        Self {
            base,
            proximal,
            middle: Some(middle),
            distal,
            start,
            length,
            width,
        }
    }

    /// Digit with two phalanges.
    pub(super) fn two(
        [base, proximal, distal]: [Lateral; 3],
        start: Vector3<f64>,
        length: f64,
        width: f64,
    ) -> Self {
        Self {
            base,
            proximal,
            middle: None,
            distal,
            start,
            length,
            width,
        }
    }

    fn phalanx_count(&self) -> f64 {
        if self.middle.is_some() { 3.0 } else { 2.0 }
    }
}

/// Emit every bone of `digit`, both sides.
pub(super) fn place(assembly: &mut Assembly<'_>, digit: &Digit) {
    let base_len = digit.length * BASE_SHARE;
    let phalanx_len = digit.length * (1.0 - BASE_SHARE) / digit.phalanx_count();
    let distal_len = phalanx_len * DISTAL_SHORTENING;
    let [base_w, proximal_w, middle_w, distal_w] = TAPER.map(|t| digit.width * t);

    assembly.place_pair(
        digit.base,
        SegmentDefinition::new(base_len, digit.start, assembly.mass(mass::DIGIT_BASE))
            .with_shape(hanging_capsule(base_w, base_len)),
    );

    assembly.place_pair(
        digit.proximal,
        SegmentDefinition::new(
            phalanx_len,
            Vector3::new(0.0, -base_len, 0.0),
            assembly.mass(mass::PROXIMAL_PHALANX),
        )
        .with_shape(hanging_capsule(proximal_w, phalanx_len)),
    );

    let next = Vector3::new(0.0, -phalanx_len, 0.0);

    if let Some(middle) = digit.middle {
        assembly.place_pair(
            middle,
            SegmentDefinition::new(phalanx_len, next, assembly.mass(mass::MIDDLE_PHALANX))
                .with_shape(hanging_capsule(middle_w, phalanx_len)),
        );
    }

    assembly.place_pair(
        digit.distal,
        SegmentDefinition::new(distal_len, next, assembly.mass(mass::DISTAL_PHALANX))
            .with_shape(hanging_capsule(distal_w, distal_len)),
    );
}
