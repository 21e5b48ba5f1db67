use ahash::AHashMap;
use particle_id::ParticleID;

/// A single reconstructed event.
///
/// Carries the part of the event store that jet flattening consumes: the
/// reconstructed jet collections, keyed by their collection name.
#[derive(Clone, Debug, Default)]
pub struct Event {
    /// Reconstructed jet collections, keyed by collection name.
    pub jets: AHashMap<String, Vec<Jet>>,
}

impl Event {
    /// Look up a jet collection by name.
    pub fn jet_collection(&self, name: &str) -> Option<&[Jet]> {
        self.jets.get(name).map(Vec::as_slice)
    }
}

/// A reconstructed jet.
#[derive(Clone, Debug, PartialEq)]
pub struct Jet {
    /// Three-momentum (x, y, z) in GeV.
    pub p: [f64; 3],
    /// Energy in GeV.
    pub energy: f64,
    /// Invariant mass in GeV.
    pub mass: f64,
    /// Monte-Carlo truth identity code of the jet.
    pub truth_id: ParticleID,
    /// Constituent candidates, in reconstruction order.
    pub particles: Vec<Particle>,
}

impl Default for Jet {
    fn default() -> Self {
        Self {
            p: [0.; 3],
            energy: 0.,
            mass: 0.,
            truth_id: ParticleID::new(0),
            particles: Vec::new(),
        }
    }
}

/// A reconstructed particle inside a jet.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Three-momentum (x, y, z) in GeV.
    pub p: [f64; 3],
    /// Energy in GeV.
    pub energy: f64,
    /// Mass in GeV.
    pub mass: f64,
    /// Electric charge in units of the elementary charge.
    pub charge: f64,
    /// Reconstructed particle type code.
    pub id: ParticleID,
    /// Associated reconstructed tracks.
    ///
    /// A charged candidate has exactly one track, a neutral one none.
    /// Any other multiplicity is malformed input.
    pub tracks: Vec<Track>,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            p: [0.; 3],
            energy: 0.,
            mass: 0.,
            charge: 0.,
            id: ParticleID::new(0),
            tracks: Vec::new(),
        }
    }
}

/// A reconstructed charged-particle trajectory.
///
/// The flattening only counts the tracks attached to a candidate; the helix
/// parameters below are what a later covariance extraction would read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    /// Transverse displacement of the point of closest approach, in mm.
    pub d0: f64,
    /// Longitudinal displacement of the point of closest approach, in mm.
    pub z0: f64,
    /// Lower triangle of the helix parameter covariance matrix in the
    /// (d0, phi, omega, z0, tan lambda) parametrisation.
    pub cov: [f64; 15],
}
