//! Pelvis, spine with rib cage, and skull.

use anatomy_types::{CollisionShape, Lateral, SegmentDefinition, SegmentId, Vector3};
use tracing::trace;

use super::{Assembly, hanging_capsule};
use crate::mass;

/// Share of the torso taken by each spinal region.
const LUMBAR_SHARE: f64 = 0.35;
const THORACIC_SHARE: f64 = 0.45;
const CERVICAL_SHARE: f64 = 0.20;

/// Ribs are numbered from the top; the seventh is the widest.
const WIDEST_RIB: usize = 7;

/// The sacrum, placed at hip height.
pub(super) fn root(assembly: &mut Assembly<'_>) {
    let body = assembly.body;
    assembly.place(
        SegmentId::Sacrum,
        SegmentDefinition::new(
            body.head_size * 0.8,
            Vector3::new(0.0, body.leg_length, 0.0),
            assembly.mass(mass::SACRUM),
        )
        .with_shape(CollisionShape::cuboid(
            body.hip_width * 0.4,
            body.head_size * 0.4,
            body.head_size * 0.3,
        )),
    );
}

/// Coccyx and hip bones.
pub(super) fn pelvis(assembly: &mut Assembly<'_>) {
    let body = assembly.body;

    assembly.place(
        SegmentId::Coccyx,
        SegmentDefinition::new(
            body.head_size * 0.2,
            Vector3::new(0.0, -body.head_size * 0.4, -0.02),
            assembly.mass(mass::COCCYX),
        ),
    );

    assembly.place_pair(
        Lateral::HipBone,
        SegmentDefinition::new(
            0.2,
            Vector3::new(body.hip_width * 0.5, 0.0, 0.0),
            assembly.mass(mass::HIP_BONE),
        )
        .with_shape(CollisionShape::cuboid(0.1 * assembly.build, 0.14, 0.08)),
    );

    trace!("generated pelvis");
}

/// Vertebrae bottom-up, each stacked on the one below, with ribs, sternum and
/// hyoid hung from their vertebrae.
pub(super) fn spine(assembly: &mut Assembly<'_>) {
    let torso = assembly.body.torso_length;
    let build = assembly.build;

    let seg = torso * LUMBAR_SHARE / SegmentId::LUMBAR.len() as f64;
    for vertebra in SegmentId::LUMBAR.into_iter().rev() {
        assembly.place(
            vertebra,
            SegmentDefinition::new(seg, Vector3::new(0.0, seg, 0.0), assembly.mass(mass::LUMBAR))
                .with_shape(CollisionShape::cuboid(0.04 * build, seg * 0.9, 0.04)),
        );
    }

    let thoracic_seg = torso * THORACIC_SHARE / SegmentId::THORACIC.len() as f64;
    let levels = SegmentId::THORACIC.into_iter().zip(Lateral::RIBS);
    for (i, (vertebra, rib)) in levels.enumerate().rev() {
        assembly.place(
            vertebra,
            SegmentDefinition::new(
                thoracic_seg,
                Vector3::new(0.0, thoracic_seg, 0.0),
                assembly.mass(mass::THORACIC),
            )
            .with_shape(CollisionShape::cuboid(0.035 * build, thoracic_seg * 0.9, 0.035)),
        );
        rib_pair(assembly, rib, i + 1);
    }

    sternum(assembly, thoracic_seg);

    let seg = torso * CERVICAL_SHARE / SegmentId::CERVICAL.len() as f64;
    for vertebra in SegmentId::CERVICAL.into_iter().rev() {
        assembly.place(
            vertebra,
            SegmentDefinition::new(seg, Vector3::new(0.0, seg, 0.0), assembly.mass(mass::CERVICAL))
                .with_shape(CollisionShape::cuboid(0.025, seg * 0.8, 0.025)),
        );
    }

    assembly.place(
        SegmentId::Hyoid,
        SegmentDefinition::new(0.03, Vector3::new(0.0, 0.0, 0.04), assembly.mass(mass::HYOID))
            .with_shape(CollisionShape::cuboid(0.02, 0.005, 0.01)),
    );

    trace!(vertebrae = 24, "generated spine");
}

/// Half-extent growth of rib `number` (1 = top) over the smallest rib.
fn rib_scale(number: usize) -> f64 {
    let steps = if number > WIDEST_RIB {
        12usize.saturating_sub(number)
    } else {
        number
    };
    steps as f64 * 0.15
}

fn rib_pair(assembly: &mut Assembly<'_>, rib: Lateral, number: usize) {
    let scale = rib_scale(number);
    let half_extents = Vector3::new(0.1 + scale, 0.02, 0.05 + scale);
    let offset = Vector3::new(half_extents.x / 2.0, 0.0, half_extents.z / 2.0);

    assembly.place_pair(
        rib,
        SegmentDefinition::new(0.1, Vector3::new(0.03, 0.0, 0.0), assembly.mass(mass::RIB))
            .with_shape(CollisionShape::cuboid_at(half_extents, offset)),
    );
}

/// Breastbone, hanging from the front of the fourth thoracic level and
/// spanning roughly six vertebrae.
fn sternum(assembly: &mut Assembly<'_>, thoracic_seg: f64) {
    let length = thoracic_seg * 6.0;
    assembly.place(
        SegmentId::Sternum,
        SegmentDefinition::new(
            length,
            Vector3::new(0.0, 0.0, 0.1 * assembly.build),
            assembly.mass(mass::STERNUM),
        )
        .with_shape(CollisionShape::cuboid_at(
            Vector3::new(0.02 * assembly.build, length / 2.0, 0.01),
            Vector3::new(0.0, -length / 2.0, 0.0),
        )),
    );
}

/// Cranium, face, middle ear and jaw.
pub(super) fn skull(assembly: &mut Assembly<'_>) {
    let size = assembly.body.head_size;

    assembly.place(
        SegmentId::Occipital,
        SegmentDefinition::new(size, Vector3::new(0.0, 0.02, 0.0), assembly.mass(mass::OCCIPITAL))
            .with_shape(CollisionShape::sphere(
                size * 0.5,
                Vector3::new(0.0, size * 0.4, 0.05),
            )),
    );

    // Cranial plates are fused and carry no collision geometry of their own.
    let plate = SegmentDefinition::new(size * 0.2, Vector3::zeros(), assembly.mass(mass::CRANIAL_PLATE));
    assembly.place(SegmentId::Frontal, plate.clone());
    assembly.place(SegmentId::Sphenoid, plate.clone());
    assembly.place_pair(Lateral::Parietal, plate.clone());
    assembly.place_pair(Lateral::Temporal, plate);

    assembly.place(
        SegmentId::Ethmoid,
        SegmentDefinition::new(
            size * 0.1,
            Vector3::new(0.0, 0.02, 0.06),
            assembly.mass(mass::ETHMOID),
        ),
    );
    assembly.place(
        SegmentId::Vomer,
        SegmentDefinition::new(
            size * 0.15,
            Vector3::new(0.0, -0.02, 0.05),
            assembly.mass(mass::VOMER),
        ),
    );

    face(assembly, size);
    middle_ear(assembly);

    assembly.place(
        SegmentId::Mandible,
        SegmentDefinition::new(
            size * 0.4,
            Vector3::new(0.0, 0.03, 0.05),
            assembly.mass(mass::MANDIBLE),
        )
        .with_shape(CollisionShape::cuboid_at(
            Vector3::new(0.06, 0.02, 0.08),
            Vector3::new(0.0, -0.05, 0.06),
        )),
    );

    trace!("generated skull");
}

/// Paired facial bones, built out from the maxillae under the frontal bone.
fn face(assembly: &mut Assembly<'_>, size: f64) {
    assembly.place_pair(
        Lateral::Maxilla,
        SegmentDefinition::new(
            size * 0.25,
            Vector3::new(0.015, -size * 0.3, 0.02),
            assembly.mass(mass::MAXILLA),
        )
        .with_shape(CollisionShape::cuboid(0.025, 0.025, 0.02)),
    );
    assembly.place_pair(
        Lateral::Zygomatic,
        SegmentDefinition::new(
            size * 0.2,
            Vector3::new(0.035, 0.01, -0.01),
            assembly.mass(mass::ZYGOMATIC),
        )
        .with_shape(CollisionShape::cuboid(0.01, 0.015, 0.02)),
    );
    assembly.place_pair(
        Lateral::Nasal,
        SegmentDefinition::new(
            size * 0.1,
            Vector3::new(0.005, -size * 0.2, 0.04),
            assembly.mass(mass::NASAL),
        ),
    );
    assembly.place_pair(
        Lateral::Lacrimal,
        SegmentDefinition::new(
            0.01,
            Vector3::new(0.01, size * 0.1, 0.0),
            assembly.mass(mass::LACRIMAL),
        ),
    );
    assembly.place_pair(
        Lateral::Palatine,
        SegmentDefinition::new(
            0.02,
            Vector3::new(0.008, -0.01, -0.03),
            assembly.mass(mass::PALATINE),
        ),
    );
    assembly.place_pair(
        Lateral::InferiorNasalConcha,
        SegmentDefinition::new(
            0.02,
            Vector3::new(0.006, 0.0, -0.01),
            assembly.mass(mass::NASAL_CONCHA),
        ),
    );
}

/// Malleus, incus and stapes, chained inward from the temporal bone.
fn middle_ear(assembly: &mut Assembly<'_>) {
    let chain = [
        (Lateral::Malleus, 0.008, Vector3::new(0.01, 0.0, 0.0)),
        (Lateral::Incus, 0.007, Vector3::new(0.002, 0.0, -0.002)),
        (Lateral::Stapes, 0.003, Vector3::new(0.002, -0.002, 0.0)),
    ];
    for (ossicle, length, position) in chain {
        assembly.place_pair(
            ossicle,
            SegmentDefinition::new(length, position, assembly.mass(mass::OSSICLE))
                .with_shape(hanging_capsule(length * 0.25, length)),
        );
    }
}
