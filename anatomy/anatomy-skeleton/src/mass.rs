//! Segment masses as fractions of total body mass.
//!
//! Every generated mass is `total_mass × fraction`, so masses scale linearly
//! with the input. Small bones are authored in kilograms for the reference
//! adult and converted with [`reference`].

/// Total mass of the adult the kilogram figures were authored for.
pub const REFERENCE_MASS_KG: f64 = 78.0;

/// Fraction of body mass that weighs `kg` on the reference adult.
#[must_use]
pub const fn reference(kg: f64) -> f64 {
    kg / REFERENCE_MASS_KG
}

// Axial skeleton

/// Sacrum.
pub const SACRUM: f64 = 0.10;
/// Coccyx.
pub const COCCYX: f64 = reference(0.05);
/// One lumbar vertebra.
pub const LUMBAR: f64 = 0.015;
/// One thoracic vertebra.
pub const THORACIC: f64 = 0.012;
/// One cervical vertebra.
pub const CERVICAL: f64 = 0.008;
/// One rib.
pub const RIB: f64 = reference(0.05);
/// Sternum.
pub const STERNUM: f64 = reference(0.15);
/// Hyoid.
pub const HYOID: f64 = reference(0.005);

// Skull

/// Occipital, which carries the mass of the cranial vault.
pub const OCCIPITAL: f64 = 0.05;
/// Each remaining cranial plate.
pub const CRANIAL_PLATE: f64 = reference(0.1);
/// Mandible.
pub const MANDIBLE: f64 = reference(0.3);
/// Ethmoid.
pub const ETHMOID: f64 = reference(0.02);
/// Vomer.
pub const VOMER: f64 = reference(0.01);
/// One maxilla.
pub const MAXILLA: f64 = reference(0.08);
/// One zygomatic.
pub const ZYGOMATIC: f64 = reference(0.03);
/// One nasal bone.
pub const NASAL: f64 = reference(0.005);
/// One lacrimal bone.
pub const LACRIMAL: f64 = reference(0.002);
/// One palatine.
pub const PALATINE: f64 = reference(0.005);
/// One inferior nasal concha.
pub const NASAL_CONCHA: f64 = reference(0.005);
/// One auditory ossicle.
pub const OSSICLE: f64 = reference(0.0001);

// Lower limb

/// One hip bone.
pub const HIP_BONE: f64 = 0.04;
/// One femur.
pub const FEMUR: f64 = 0.12;
/// One tibia.
pub const TIBIA: f64 = 0.06;
/// One fibula.
pub const FIBULA: f64 = 0.01;
/// One patella.
pub const PATELLA: f64 = reference(0.1);
/// Talus.
pub const TALUS: f64 = reference(0.1);
/// Calcaneus.
pub const CALCANEUS: f64 = reference(0.1);
/// Navicular.
pub const NAVICULAR: f64 = reference(0.05);
/// Cuboid.
pub const CUBOID: f64 = reference(0.05);
/// One cuneiform.
pub const CUNEIFORM: f64 = reference(0.03);

// Upper limb

/// One clavicle.
pub const CLAVICLE: f64 = 0.02;
/// One scapula.
pub const SCAPULA: f64 = 0.03;
/// One humerus.
pub const HUMERUS: f64 = 0.05;
/// One radius.
pub const RADIUS: f64 = 0.02;
/// One ulna.
pub const ULNA: f64 = 0.02;
/// One carpal.
pub const CARPAL: f64 = reference(0.01);

// Digits (hands and feet alike)

/// Metacarpal or metatarsal.
pub const DIGIT_BASE: f64 = reference(0.005);
/// Proximal phalanx.
pub const PROXIMAL_PHALANX: f64 = reference(0.002);
/// Middle phalanx.
pub const MIDDLE_PHALANX: f64 = reference(0.002);
/// Distal phalanx.
pub const DISTAL_PHALANX: f64 = reference(0.001);
