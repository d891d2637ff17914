//! Legs, feet, arms and hands.
//!
//! Everything here is laid out for the left side (+X); the assembly mirrors
//! it onto the right.

use anatomy_types::{CollisionShape, Lateral, SegmentDefinition, Vector3};
use tracing::trace;

use super::digit::{self, Digit};
use super::{Assembly, hanging_capsule};
use crate::mass;

const FEMUR_SHARE: f64 = 0.52;
const TIBIA_SHARE: f64 = 0.40;
const HUMERUS_SHARE: f64 = 0.48;
const FOREARM_SHARE: f64 = 0.42;

/// Hip to toe.
pub(super) fn legs(assembly: &mut Assembly<'_>) {
    let leg = assembly.body.leg_length;
    let build = assembly.build;
    let femur_len = leg * FEMUR_SHARE;
    let tibia_len = leg * TIBIA_SHARE;

    assembly.place_pair(
        Lateral::Femur,
        SegmentDefinition::new(
            femur_len,
            Vector3::new(0.08, -0.05, 0.02),
            assembly.mass(mass::FEMUR),
        )
        .with_shape(hanging_capsule(0.05 * build, femur_len)),
    );
    assembly.place_pair(
        Lateral::Tibia,
        SegmentDefinition::new(
            tibia_len,
            Vector3::new(0.0, -femur_len, 0.0),
            assembly.mass(mass::TIBIA),
        )
        .with_shape(hanging_capsule(0.04 * build, tibia_len)),
    );
    assembly.place_pair(
        Lateral::Patella,
        SegmentDefinition::new(0.05, Vector3::new(0.0, 0.0, 0.04), assembly.mass(mass::PATELLA))
            .with_shape(CollisionShape::sphere(0.03, Vector3::zeros())),
    );
    assembly.place_pair(
        Lateral::Fibula,
        SegmentDefinition::new(
            tibia_len,
            Vector3::new(0.03, 0.0, 0.0),
            assembly.mass(mass::FIBULA),
        )
        .with_shape(hanging_capsule(0.015, tibia_len)),
    );

    foot(assembly, tibia_len);
    trace!("generated legs");
}

fn foot(assembly: &mut Assembly<'_>, tibia_len: f64) {
    assembly.place_pair(
        Lateral::Talus,
        SegmentDefinition::new(0.05, Vector3::new(0.0, -tibia_len, 0.0), assembly.mass(mass::TALUS))
            .with_shape(CollisionShape::cuboid(0.04, 0.04, 0.04)),
    );
    assembly.place_pair(
        Lateral::Calcaneus,
        SegmentDefinition::new(
            0.08,
            Vector3::new(0.0, -0.03, -0.03),
            assembly.mass(mass::CALCANEUS),
        )
        .with_shape(CollisionShape::cuboid(0.04, 0.04, 0.06)),
    );
    assembly.place_pair(
        Lateral::Navicular,
        SegmentDefinition::new(
            0.04,
            Vector3::new(0.0, -0.02, 0.04),
            assembly.mass(mass::NAVICULAR),
        ),
    );
    assembly.place_pair(
        Lateral::Cuboid,
        SegmentDefinition::new(
            0.04,
            Vector3::new(-0.015, 0.0, 0.06),
            assembly.mass(mass::CUBOID),
        )
        .with_shape(CollisionShape::cuboid(0.015, 0.015, 0.02)),
    );

    for (cuneiform, x) in [
        (Lateral::MedialCuneiform, 0.015),
        (Lateral::IntermediateCuneiform, 0.0),
        (Lateral::LateralCuneiform, -0.01),
    ] {
        assembly.place_pair(
            cuneiform,
            SegmentDefinition::new(0.025, Vector3::new(x, 0.0, 0.02), assembly.mass(mass::CUNEIFORM))
                .with_shape(CollisionShape::cuboid(0.008, 0.012, 0.015)),
        );
    }

    let toes = [
        Digit::two(
            [
                Lateral::Metatarsal1,
                Lateral::ProximalPhalanxBigToe,
                Lateral::DistalPhalanxBigToe,
            ],
            Vector3::new(0.02, 0.0, 0.05),
            0.08,
            0.02,
        ),
        Digit::three(
            [
                Lateral::Metatarsal2,
                Lateral::ProximalPhalanxToe2,
                Lateral::MiddlePhalanxToe2,
                Lateral::DistalPhalanxToe2,
            ],
            Vector3::new(0.01, 0.0, 0.05),
            0.07,
            0.015,
        ),
        Digit::three(
            [
                Lateral::Metatarsal3,
                Lateral::ProximalPhalanxToe3,
                Lateral::MiddlePhalanxToe3,
                Lateral::DistalPhalanxToe3,
            ],
            Vector3::new(0.0, 0.0, 0.05),
            0.065,
            0.015,
        ),
        Digit::three(
            [
                Lateral::Metatarsal4,
                Lateral::ProximalPhalanxToe4,
                Lateral::MiddlePhalanxToe4,
                Lateral::DistalPhalanxToe4,
            ],
            Vector3::new(-0.01, 0.0, 0.05),
            0.06,
            0.015,
        ),
        Digit::three(
            [
                Lateral::Metatarsal5,
                Lateral::ProximalPhalanxLittleToe,
                Lateral::MiddlePhalanxLittleToe,
                Lateral::DistalPhalanxLittleToe,
            ],
            Vector3::new(-0.02, 0.0, 0.05),
            0.055,
            0.012,
        ),
    ];
    for toe in &toes {
        digit::place(assembly, toe);
    }
}

/// Shoulder girdle to fingertips.
pub(super) fn arms(assembly: &mut Assembly<'_>) {
    let shoulder = assembly.body.shoulder_width;
    let arm = assembly.body.arm_length;
    let build = assembly.build;
    let humerus_len = arm * HUMERUS_SHARE;
    let forearm_len = arm * FOREARM_SHARE;

    assembly.place_pair(
        Lateral::Clavicle,
        SegmentDefinition::new(
            shoulder * 0.45,
            Vector3::new(0.02, 0.08, 0.04),
            assembly.mass(mass::CLAVICLE),
        )
        .with_shape(CollisionShape::capsule(
            0.02,
            shoulder * 0.4,
            Vector3::new(shoulder * 0.2, 0.0, 0.0),
        )),
    );
    assembly.place_pair(
        Lateral::Scapula,
        SegmentDefinition::new(
            0.15,
            Vector3::new(shoulder * 0.4, 0.0, -0.05),
            assembly.mass(mass::SCAPULA),
        )
        .with_shape(CollisionShape::cuboid(0.1, 0.12, 0.02)),
    );
    assembly.place_pair(
        Lateral::Humerus,
        SegmentDefinition::new(
            humerus_len,
            Vector3::new(0.05, -0.02, 0.0),
            assembly.mass(mass::HUMERUS),
        )
        .with_shape(hanging_capsule(0.04 * build, humerus_len)),
    );

    let elbow = Vector3::new(0.0, -humerus_len, 0.0);
    assembly.place_pair(
        Lateral::Radius,
        SegmentDefinition::new(forearm_len, elbow, assembly.mass(mass::RADIUS))
            .with_shape(hanging_capsule(0.025 * build, forearm_len)),
    );
    assembly.place_pair(
        Lateral::Ulna,
        SegmentDefinition::new(forearm_len, elbow, assembly.mass(mass::ULNA))
            .with_shape(hanging_capsule(0.02, forearm_len)),
    );

    hand(assembly, forearm_len);
    trace!("generated arms");
}

fn hand(assembly: &mut Assembly<'_>, forearm_len: f64) {
    assembly.place_pair(
        Lateral::Lunate,
        SegmentDefinition::new(
            0.03,
            Vector3::new(0.0, -forearm_len, 0.0),
            assembly.mass(mass::CARPAL),
        )
        .with_shape(CollisionShape::cuboid(0.03, 0.03, 0.02)),
    );
    assembly.place_pair(
        Lateral::Capitate,
        SegmentDefinition::new(0.02, Vector3::new(0.0, -0.02, 0.0), assembly.mass(mass::CARPAL)),
    );

    let small_carpal = CollisionShape::cuboid(0.008, 0.008, 0.008);
    for (carpal, position) in [
        (Lateral::Scaphoid, Vector3::new(0.015, -forearm_len, 0.0)),
        (Lateral::Triquetrum, Vector3::new(-0.015, 0.0, 0.0)),
        (Lateral::Pisiform, Vector3::new(0.0, 0.0, 0.01)),
        (Lateral::Hamate, Vector3::new(-0.012, 0.0, 0.0)),
        (Lateral::Trapezium, Vector3::new(0.01, -0.02, 0.005)),
        (Lateral::Trapezoid, Vector3::new(0.0, -0.02, 0.0)),
    ] {
        assembly.place_pair(
            carpal,
            SegmentDefinition::new(0.015, position, assembly.mass(mass::CARPAL))
                .with_shape(small_carpal.clone()),
        );
    }

    let fingers = [
        Digit::two(
            [
                Lateral::Metacarpal1,
                Lateral::ProximalPhalanxThumb,
                Lateral::DistalPhalanxThumb,
            ],
            Vector3::new(0.03, -0.02, 0.02),
            0.05,
            0.012,
        ),
        Digit::three(
            [
                Lateral::Metacarpal2,
                Lateral::ProximalPhalanxIndexFinger,
                Lateral::MiddlePhalanxIndexFinger,
                Lateral::DistalPhalanxIndexFinger,
            ],
            Vector3::new(0.015, -0.03, 0.0),
            0.09,
            0.01,
        ),
        Digit::three(
            [
                Lateral::Metacarpal3,
                Lateral::ProximalPhalanxMiddleFinger,
                Lateral::MiddlePhalanxMiddleFinger,
                Lateral::DistalPhalanxMiddleFinger,
            ],
            Vector3::new(0.0, -0.03, 0.0),
            0.10,
            0.01,
        ),
        Digit::three(
            [
                Lateral::Metacarpal4,
                Lateral::ProximalPhalanxRingFinger,
                Lateral::MiddlePhalanxRingFinger,
                Lateral::DistalPhalanxRingFinger,
            ],
            Vector3::new(-0.015, -0.03, 0.0),
            0.09,
            0.01,
        ),
        Digit::three(
            [
                Lateral::Metacarpal5,
                Lateral::ProximalPhalanxLittleFinger,
                Lateral::MiddlePhalanxLittleFinger,
                Lateral::DistalPhalanxLittleFinger,
            ],
            Vector3::new(-0.03, -0.03, 0.0),
            0.07,
            0.008,
        ),
    ];
    for finger in &fingers {
        digit::place(assembly, finger);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use crate::generator::generate;
    use anatomy_types::{CollisionShape, GeneticParameters, SegmentId, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn test_leg_lengths() {
        let skeleton = generate(&GeneticParameters::average_adult());
        let leg = 1.80 * 0.48;

        assert_relative_eq!(skeleton[SegmentId::FemurLeft].length, leg * 0.52, epsilon = 1e-12);
        assert_relative_eq!(skeleton[SegmentId::TibiaLeft].length, leg * 0.40, epsilon = 1e-12);
        assert_relative_eq!(
            skeleton[SegmentId::TibiaLeft].bind_position,
            Vector3::new(0.0, -leg * 0.52, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            skeleton[SegmentId::TalusRight].bind_position.y,
            -leg * 0.40,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_arm_lengths() {
        let skeleton = generate(&GeneticParameters::average_adult());
        let arm = 1.80 * 0.42;

        assert_relative_eq!(skeleton[SegmentId::HumerusLeft].length, arm * 0.48, epsilon = 1e-12);
        assert_relative_eq!(skeleton[SegmentId::RadiusLeft].length, arm * 0.42, epsilon = 1e-12);
        assert_eq!(
            skeleton[SegmentId::RadiusLeft].bind_position,
            skeleton[SegmentId::UlnaLeft].bind_position
        );
    }

    #[test]
    fn test_index_finger_digit() {
        let skeleton = generate(&GeneticParameters::average_adult());
        let base = 0.09 * 0.4;
        let phalanx = 0.09 * 0.6 / 3.0;

        let metacarpal = &skeleton[SegmentId::Metacarpal2Left];
        assert_relative_eq!(metacarpal.length, base, epsilon = 1e-12);
        assert_eq!(metacarpal.bind_position, Vector3::new(0.015, -0.03, 0.0));

        let proximal = &skeleton[SegmentId::ProximalPhalanxIndexFingerLeft];
        assert_relative_eq!(proximal.length, phalanx, epsilon = 1e-12);
        assert_relative_eq!(proximal.bind_position.y, -base, epsilon = 1e-12);

        let distal = &skeleton[SegmentId::DistalPhalanxIndexFingerLeft];
        assert_relative_eq!(distal.length, phalanx * 0.8, epsilon = 1e-12);
        assert_relative_eq!(distal.bind_position.y, -phalanx, epsilon = 1e-12);
        match distal.primary_shape() {
            Some(CollisionShape::Capsule { radius, .. }) => {
                assert_relative_eq!(*radius, 0.007, epsilon = 1e-12);
            }
            other => panic!("expected capsule, got {other:?}"),
        }
    }

    #[test]
    fn test_thumb_has_two_phalanges() {
        let skeleton = generate(&GeneticParameters::average_adult());
        let phalanx = 0.05 * 0.6 / 2.0;
        assert_relative_eq!(
            skeleton[SegmentId::ProximalPhalanxThumbRight].length,
            phalanx,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            skeleton[SegmentId::DistalPhalanxThumbRight].length,
            phalanx * 0.8,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_right_side_is_mirrored() {
        let skeleton = generate(&GeneticParameters::average_adult());
        let left = &skeleton[SegmentId::FemurLeft];
        let right = &skeleton[SegmentId::FemurRight];
        assert_eq!(left.bind_position, Vector3::new(0.08, -0.05, 0.02));
        assert_eq!(right.bind_position, Vector3::new(-0.08, -0.05, 0.02));
        assert_eq!(left.mass, right.mass);

        let clavicle = &skeleton[SegmentId::ClavicleRight];
        assert!(clavicle.primary_shape().unwrap().offset().x < 0.0);
    }
}
