//! Integration tests for skeleton generation.
//!
//! Run with: cargo test -p anatomy-skeleton --test generation

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use anatomy_skeleton::{JointRegistry, generate, mass};
use anatomy_types::{
    CollisionShape, GeneticParameters, JointKind, Lateral, SegmentId, Side, Vector3,
};
use approx::assert_relative_eq;

fn average() -> anatomy_skeleton::Skeleton {
    generate(&GeneticParameters::average_adult())
}

// =============================================================================
// Completeness
// =============================================================================

#[test]
fn every_catalog_segment_is_generated() {
    let skeleton = average();
    assert_eq!(skeleton.len(), 206);
    for segment in SegmentId::ALL {
        assert!(skeleton.contains(segment), "missing {segment}");
    }
    assert!(skeleton.missing().is_empty());
}

#[test]
fn serial_structures_are_present() {
    let skeleton = average();
    for n in 1..=5 {
        assert!(skeleton.contains(SegmentId::lumbar(n).unwrap()));
    }
    for n in 1..=12 {
        assert!(skeleton.contains(SegmentId::thoracic(n).unwrap()));
        let rib = Lateral::rib(n).unwrap();
        assert!(skeleton.contains(rib.on(Side::Left)));
        assert!(skeleton.contains(rib.on(Side::Right)));
    }
    for n in 1..=7 {
        assert!(skeleton.contains(SegmentId::cervical(n).unwrap()));
    }
}

#[test]
fn iteration_follows_catalog_order() {
    let skeleton = average();
    let order: Vec<_> = skeleton.iter().map(|(segment, _)| segment).collect();
    assert_eq!(order, SegmentId::ALL.to_vec());
}

// =============================================================================
// Root and proportions
// =============================================================================

#[test]
fn root_takes_a_tenth_of_body_mass() {
    let skeleton = average();
    let sacrum = &skeleton[SegmentId::Sacrum];

    assert_relative_eq!(sacrum.mass, 7.8, epsilon = 1e-9);
    assert_relative_eq!(sacrum.length, 0.225 * 0.8, epsilon = 1e-12);
    assert_relative_eq!(
        sacrum.bind_position,
        Vector3::new(0.0, 0.864, 0.0),
        epsilon = 1e-12
    );
    match sacrum.primary_shape() {
        Some(CollisionShape::Box { half_extents, .. }) => {
            assert_relative_eq!(
                *half_extents,
                Vector3::new(0.288 * 0.4, 0.225 * 0.4, 0.225 * 0.3),
                epsilon = 1e-12
            );
        }
        other => panic!("expected box, got {other:?}"),
    }
}

#[test]
fn spine_regions_split_the_torso() {
    let skeleton = average();
    let torso = 0.711;

    let lumbar: f64 = SegmentId::LUMBAR.iter().map(|s| skeleton[*s].length).sum();
    let thoracic: f64 = SegmentId::THORACIC.iter().map(|s| skeleton[*s].length).sum();
    let cervical: f64 = SegmentId::CERVICAL.iter().map(|s| skeleton[*s].length).sum();

    assert_relative_eq!(lumbar, torso * 0.35, epsilon = 1e-9);
    assert_relative_eq!(thoracic, torso * 0.45, epsilon = 1e-9);
    assert_relative_eq!(cervical, torso * 0.20, epsilon = 1e-9);

    // Each vertebra sits one segment height above the one below.
    let l3 = &skeleton[SegmentId::Lumbar3];
    assert_relative_eq!(l3.bind_position.y, l3.length, epsilon = 1e-12);
}

#[test]
fn ribs_widen_to_the_seventh() {
    let skeleton = average();
    let half_width = |n: usize| match skeleton[Lateral::rib(n).unwrap().on(Side::Left)]
        .primary_shape()
    {
        Some(CollisionShape::Box { half_extents, .. }) => half_extents.x,
        other => panic!("expected box, got {other:?}"),
    };

    assert_relative_eq!(half_width(1), 0.25, epsilon = 1e-12);
    assert_relative_eq!(half_width(7), 1.15, epsilon = 1e-12);
    assert_relative_eq!(half_width(12), 0.1, epsilon = 1e-12);
    assert!(half_width(7) > half_width(6));
    assert!(half_width(7) > half_width(8));

    let rib = &skeleton[SegmentId::Rib4Right];
    assert_eq!(rib.bind_position, Vector3::new(-0.03, 0.0, 0.0));
    assert!(rib.primary_shape().unwrap().offset().x < 0.0);
}

// =============================================================================
// Mass
// =============================================================================

#[test]
fn every_segment_has_positive_mass() {
    for (segment, def) in average().iter() {
        assert!(def.mass > 0.0, "{segment} has mass {}", def.mass);
    }
}

#[test]
fn femur_outweighs_fingertip() {
    let skeleton = average();
    assert!(
        skeleton[SegmentId::FemurLeft].mass > skeleton[SegmentId::DistalPhalanxIndexFingerLeft].mass
    );
}

#[test]
fn doubling_mass_doubles_every_segment() {
    let base = GeneticParameters::average_adult();
    let light = generate(&base);
    let heavy = generate(&base.with_mass(base.mass * 2.0));

    for (segment, def) in light.iter() {
        assert_relative_eq!(heavy[segment].mass, def.mass * 2.0, max_relative = 1e-12);
    }
    assert_relative_eq!(heavy.total_mass(), light.total_mass() * 2.0, max_relative = 1e-12);
}

#[test]
fn small_bones_keep_their_reference_weight() {
    let skeleton = average();
    assert_relative_eq!(skeleton[SegmentId::Coccyx].mass, 0.05, epsilon = 1e-12);
    assert_relative_eq!(skeleton[SegmentId::Mandible].mass, 0.3, epsilon = 1e-12);
    assert_relative_eq!(skeleton[SegmentId::PatellaLeft].mass, 0.1, epsilon = 1e-12);
    assert_relative_eq!(
        skeleton[SegmentId::Metacarpal3Right].mass,
        mass::DIGIT_BASE * mass::REFERENCE_MASS_KG,
        epsilon = 1e-12
    );
}

#[test]
fn declared_mass_ignores_density() {
    let skeleton = average();
    let femur = &skeleton[SegmentId::FemurLeft];
    assert!(femur.density_mass_estimate() > 0.0);
    assert!((femur.density_mass_estimate() - femur.mass).abs() > 1e-6);
}

// =============================================================================
// Symmetry and limits
// =============================================================================

#[test]
fn pairs_are_mirror_images() {
    let skeleton = average();
    for lateral in Lateral::ALL {
        let left = &skeleton[lateral.on(Side::Left)];
        let right = &skeleton[lateral.on(Side::Right)];

        assert_eq!(left.length, right.length, "{lateral}");
        assert_eq!(left.mass, right.mass, "{lateral}");
        assert_eq!(left.joint_limits, right.joint_limits, "{lateral}");
        assert_eq!(left.bind_position.x, -right.bind_position.x, "{lateral}");
        assert_eq!(left.bind_position.y, right.bind_position.y, "{lateral}");
        assert_eq!(left.bind_position.z, right.bind_position.z, "{lateral}");
        assert_eq!(left.shapes.len(), right.shapes.len(), "{lateral}");
        for (l, r) in left.shapes.iter().zip(&right.shapes) {
            assert_eq!(l.mirrored(), *r, "{lateral}");
        }
    }
}

#[test]
fn limits_match_registry() {
    let skeleton = average();
    let registry = JointRegistry::global();
    for (segment, def) in skeleton.iter() {
        match registry.lookup(segment) {
            Some(entry) => assert_eq!(def.joint_limits, entry.limits, "{segment}"),
            None => assert!(def.joint_limits.is_locked(), "{segment}"),
        }
    }
}

#[test]
fn bind_rotations_are_identity() {
    for (_, def) in average().iter() {
        assert_eq!(def.bind_rotation, anatomy_types::UnitQuaternion::identity());
    }
}

#[test]
fn fused_joints_get_locked_limits() {
    let skeleton = average();
    let registry = JointRegistry::global();
    for (segment, entry) in registry.iter() {
        if entry.kind == JointKind::Fibrous {
            assert!(skeleton[segment].joint_limits.is_locked(), "{segment}");
        }
    }
}

// =============================================================================
// World positions
// =============================================================================

#[test]
fn world_positions_follow_the_hierarchy() {
    let skeleton = average();
    let registry = JointRegistry::global();
    let world = skeleton.world_bind_positions(registry);

    assert_eq!(world.len(), 206);
    assert_relative_eq!(
        world[&SegmentId::Sacrum],
        Vector3::new(0.0, 0.864, 0.0),
        epsilon = 1e-12
    );

    // Neck sits above the pelvis, feet below it.
    assert!(world[&SegmentId::Cervical1Atlas].y > world[&SegmentId::Sacrum].y);
    assert!(world[&SegmentId::TalusLeft].y < world[&SegmentId::Sacrum].y);

    // Left limbs on +X, right limbs on -X.
    assert!(world[&SegmentId::HumerusLeft].x > 0.0);
    assert!(world[&SegmentId::HumerusRight].x < 0.0);
    assert_relative_eq!(
        world[&SegmentId::FemurLeft].x,
        -world[&SegmentId::FemurRight].x,
        epsilon = 1e-12
    );
}

// =============================================================================
// Determinism and degenerate input
// =============================================================================

#[test]
fn concurrent_generation_matches_serial() {
    let params = GeneticParameters::average_adult();
    let expected = generate(&params);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| generate(&params)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results.len(), 8);
    for skeleton in &results {
        assert_eq!(skeleton.len(), SegmentId::COUNT);
        assert_eq!(skeleton, &expected);
    }
}

#[test]
fn generation_is_deterministic() {
    let params = GeneticParameters::new(1.65, 61.0, 0.8, 0.13, 0.47);
    assert_eq!(generate(&params), generate(&params));
}

#[test]
fn degenerate_parameters_still_produce_complete_skeleton() {
    let skeleton = generate(&GeneticParameters::new(0.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(skeleton.len(), 206);
    assert_eq!(skeleton.total_mass(), 0.0);

    let skeleton = generate(&GeneticParameters::new(-1.0, 70.0, 1.0, 0.125, 0.48));
    assert_eq!(skeleton.len(), 206);
}
