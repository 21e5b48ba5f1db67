//! Truth-identity classification for jets and their constituents.

use particle_id::ParticleID;

/// Truth category of a reconstructed jet.
///
/// Codes 1 to 5 label the quark flavours in the order u, d, s, c, b; 15 labels
/// tau jets and 21 gluon jets. Every other code is kept as
/// [`JetFlavour::Unknown`] and sets no flag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum JetFlavour {
    /// Up-quark jet
    Up,
    /// Down-quark jet
    Down,
    /// Strange-quark jet
    Strange,
    /// Charm-quark jet
    Charm,
    /// Bottom-quark jet
    Bottom,
    /// Tau jet
    Tau,
    /// Gluon jet
    Gluon,
    /// Truth code outside the known flavour set
    Unknown(i32),
}

impl JetFlavour {
    /// Classify a jet from its truth identity code.
    pub fn from_id(id: ParticleID) -> Self {
        use JetFlavour::*;
        match id.id() {
            1 => Up,
            2 => Down,
            3 => Strange,
            4 => Charm,
            5 => Bottom,
            15 => Tau,
            21 => Gluon,
            other => Unknown(other),
        }
    }
}

/// Jet truth flavour as mutually exclusive boolean flags.
///
/// At most one flag is set; an unknown truth code sets none.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct JetFlags {
    pub is_u: bool,
    pub is_d: bool,
    pub is_s: bool,
    pub is_c: bool,
    pub is_b: bool,
    pub is_tau: bool,
    pub is_g: bool,
}

impl From<JetFlavour> for JetFlags {
    fn from(flavour: JetFlavour) -> Self {
        let mut flags = Self::default();
        match flavour {
            JetFlavour::Up => flags.is_u = true,
            JetFlavour::Down => flags.is_d = true,
            JetFlavour::Strange => flags.is_s = true,
            JetFlavour::Charm => flags.is_c = true,
            JetFlavour::Bottom => flags.is_b = true,
            JetFlavour::Tau => flags.is_tau = true,
            JetFlavour::Gluon => flags.is_g = true,
            JetFlavour::Unknown(_) => {}
        }
        flags
    }
}

/// Reconstructed kind of a jet constituent.
///
/// Electrons, muons and photons are identified by their type code alone.
/// Every other code is a hadron, split into neutral and charged by the
/// number of associated tracks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CandKind {
    Electron,
    Muon,
    Photon,
    NeutralHadron,
    ChargedHadron,
}

impl CandKind {
    /// Classify a candidate from its type code and associated track count.
    pub fn classify(id: ParticleID, n_tracks: usize) -> Self {
        use CandKind::*;
        match id.id() {
            11 | -11 => Electron,
            13 | -13 => Muon,
            22 => Photon,
            _ if n_tracks == 0 => NeutralHadron,
            _ => ChargedHadron,
        }
    }
}

/// Candidate kind as mutually exclusive boolean flags; exactly one is set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CandFlags {
    pub is_el: bool,
    pub is_mu: bool,
    pub is_gamma: bool,
    pub is_neutral_had: bool,
    pub is_charged_had: bool,
}

impl From<CandKind> for CandFlags {
    fn from(kind: CandKind) -> Self {
        let mut flags = Self::default();
        match kind {
            CandKind::Electron => flags.is_el = true,
            CandKind::Muon => flags.is_mu = true,
            CandKind::Photon => flags.is_gamma = true,
            CandKind::NeutralHadron => flags.is_neutral_had = true,
            CandKind::ChargedHadron => flags.is_charged_had = true,
        }
        flags
    }
}
