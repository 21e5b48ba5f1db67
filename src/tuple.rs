//! The per-jet output row.

use crate::flavour::{CandFlags, JetFlags};

/// One output row of the flat jet ntuple.
///
/// Field layout follows the flavour-tagging training trees: a block of
/// per-jet scalars followed by per-candidate sequence columns. The
/// [`Flattener`](crate::flatten::Flattener) owns one `JetTuple`, resets and
/// refills it for every jet, and commits it through a
/// [`TupleWriter`](crate::writer::TupleWriter).
///
/// The per-candidate kinematic, identity and relative-feature columns grow
/// by one entry per candidate. The track-derived columns (helix covariance,
/// displacement and impact-parameter significance) only receive entries for
/// candidates without a track, which get explicit zeros; candidates with one
/// track append nothing there. The five per-kind multiplicity scalars are
/// part of the schema but are left at zero.
#[derive(Clone, Debug, Default)]
pub struct JetTuple {
    /// Output row index. Owned and advanced by the flattener, written at
    /// commit time and left untouched by [`clear`](Self::clear).
    pub event_number: i32,

    // jet kinematics
    pub jet_p: f32,
    pub jet_e: f32,
    pub jet_mass: f32,
    pub jet_nconst: i32,
    pub jet_theta: f32,
    pub jet_phi: f32,

    // jet truth flavour flags
    pub jet_is_u: bool,
    pub jet_is_d: bool,
    pub jet_is_s: bool,
    pub jet_is_c: bool,
    pub jet_is_b: bool,
    pub jet_is_tau: bool,
    pub jet_is_g: bool,

    // per-kind candidate multiplicities
    pub jet_n_mu: i32,
    pub jet_n_el: i32,
    pub jet_n_gamma: i32,
    pub jet_n_neutral_had: i32,
    pub jet_n_charged_had: i32,

    // candidate kinematics and identity
    pub cand_e: Vec<f32>,
    pub cand_p: Vec<f32>,
    pub cand_theta: Vec<f32>,
    pub cand_phi: Vec<f32>,
    pub cand_type: Vec<i32>,
    pub cand_charge: Vec<f32>,

    // candidate kind flags
    pub cand_is_el: Vec<bool>,
    pub cand_is_mu: Vec<bool>,
    pub cand_is_gamma: Vec<bool>,
    pub cand_is_neutral_had: Vec<bool>,
    pub cand_is_charged_had: Vec<bool>,

    // features relative to the jet axis
    pub cand_erel_log: Vec<f32>,
    pub cand_phi_rel: Vec<f32>,
    pub cand_theta_rel: Vec<f32>,

    // helix covariance
    pub cand_dptdpt: Vec<f32>,
    pub cand_detadeta: Vec<f32>,
    pub cand_dphidphi: Vec<f32>,
    pub cand_dxydxy: Vec<f32>,
    pub cand_dzdz: Vec<f32>,
    pub cand_dxydz: Vec<f32>,
    pub cand_dphidxy: Vec<f32>,
    pub cand_dlambdadz: Vec<f32>,
    pub cand_dxyc: Vec<f32>,
    pub cand_dxyctgtheta: Vec<f32>,
    pub cand_phic: Vec<f32>,
    pub cand_phidz: Vec<f32>,
    pub cand_phictgtheta: Vec<f32>,
    pub cand_cdz: Vec<f32>,
    pub cand_cctgtheta: Vec<f32>,

    // track displacement and impact-parameter significance
    pub cand_dxy: Vec<f32>,
    pub cand_dz: Vec<f32>,
    pub cand_sip2d_val: Vec<f32>,
    pub cand_sip2d_sig: Vec<f32>,
    pub cand_sip3d_val: Vec<f32>,
    pub cand_sip3d_sig: Vec<f32>,
    pub cand_jet_dist_val: Vec<f32>,
    pub cand_jet_dist_sig: Vec<f32>,
}

impl JetTuple {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all jet-scoped fields: scalars to zero, sequences to empty.
    ///
    /// Sequence columns keep their allocations for the next jet.
    /// `event_number` is not touched; the row counter outlives single jets.
    pub fn clear(&mut self) {
        self.jet_p = 0.;
        self.jet_e = 0.;
        self.jet_mass = 0.;
        self.jet_nconst = 0;
        self.jet_theta = 0.;
        self.jet_phi = 0.;

        self.set_jet_flags(JetFlags::default());

        self.jet_n_mu = 0;
        self.jet_n_el = 0;
        self.jet_n_gamma = 0;
        self.jet_n_neutral_had = 0;
        self.jet_n_charged_had = 0;

        self.cand_e.clear();
        self.cand_p.clear();
        self.cand_theta.clear();
        self.cand_phi.clear();
        self.cand_type.clear();
        self.cand_charge.clear();

        self.cand_is_el.clear();
        self.cand_is_mu.clear();
        self.cand_is_gamma.clear();
        self.cand_is_neutral_had.clear();
        self.cand_is_charged_had.clear();

        self.cand_erel_log.clear();
        self.cand_phi_rel.clear();
        self.cand_theta_rel.clear();

        self.cand_dptdpt.clear();
        self.cand_detadeta.clear();
        self.cand_dphidphi.clear();
        self.cand_dxydxy.clear();
        self.cand_dzdz.clear();
        self.cand_dxydz.clear();
        self.cand_dphidxy.clear();
        self.cand_dlambdadz.clear();
        self.cand_dxyc.clear();
        self.cand_dxyctgtheta.clear();
        self.cand_phic.clear();
        self.cand_phidz.clear();
        self.cand_phictgtheta.clear();
        self.cand_cdz.clear();
        self.cand_cctgtheta.clear();

        self.cand_dxy.clear();
        self.cand_dz.clear();
        self.cand_sip2d_val.clear();
        self.cand_sip2d_sig.clear();
        self.cand_sip3d_val.clear();
        self.cand_sip3d_sig.clear();
        self.cand_jet_dist_val.clear();
        self.cand_jet_dist_sig.clear();
    }

    /// Set the seven jet truth flavour scalars from a flag set.
    pub fn set_jet_flags(&mut self, flags: JetFlags) {
        self.jet_is_u = flags.is_u;
        self.jet_is_d = flags.is_d;
        self.jet_is_s = flags.is_s;
        self.jet_is_c = flags.is_c;
        self.jet_is_b = flags.is_b;
        self.jet_is_tau = flags.is_tau;
        self.jet_is_g = flags.is_g;
    }

    /// Append one candidate's kind flags to the five flag columns.
    pub fn push_cand_flags(&mut self, flags: CandFlags) {
        self.cand_is_el.push(flags.is_el);
        self.cand_is_mu.push(flags.is_mu);
        self.cand_is_gamma.push(flags.is_gamma);
        self.cand_is_neutral_had.push(flags.is_neutral_had);
        self.cand_is_charged_had.push(flags.is_charged_had);
    }

    /// Append an explicit zero to every track-derived column.
    ///
    /// Used for candidates without an associated track.
    pub fn push_track_zeros(&mut self) {
        self.cand_dptdpt.push(0.);
        self.cand_detadeta.push(0.);
        self.cand_dphidphi.push(0.);
        self.cand_dxydxy.push(0.);
        self.cand_dzdz.push(0.);
        self.cand_dxydz.push(0.);
        self.cand_dphidxy.push(0.);
        self.cand_dlambdadz.push(0.);
        self.cand_dxyc.push(0.);
        self.cand_dxyctgtheta.push(0.);
        self.cand_phic.push(0.);
        self.cand_phidz.push(0.);
        self.cand_phictgtheta.push(0.);
        self.cand_cdz.push(0.);
        self.cand_cctgtheta.push(0.);

        self.cand_dxy.push(0.);
        self.cand_dz.push(0.);
        self.cand_sip2d_val.push(0.);
        self.cand_sip2d_sig.push(0.);
        self.cand_sip3d_val.push(0.);
        self.cand_sip3d_sig.push(0.);
        self.cand_jet_dist_val.push(0.);
        self.cand_jet_dist_sig.push(0.);
    }

    /// Lengths of the track-derived columns, for shape checks.
    pub(crate) fn track_column_lens(&self) -> [usize; 23] {
        [
            self.cand_dptdpt.len(),
            self.cand_detadeta.len(),
            self.cand_dphidphi.len(),
            self.cand_dxydxy.len(),
            self.cand_dzdz.len(),
            self.cand_dxydz.len(),
            self.cand_dphidxy.len(),
            self.cand_dlambdadz.len(),
            self.cand_dxyc.len(),
            self.cand_dxyctgtheta.len(),
            self.cand_phic.len(),
            self.cand_phidz.len(),
            self.cand_phictgtheta.len(),
            self.cand_cdz.len(),
            self.cand_cctgtheta.len(),
            self.cand_dxy.len(),
            self.cand_dz.len(),
            self.cand_sip2d_val.len(),
            self.cand_sip2d_sig.len(),
            self.cand_sip3d_val.len(),
            self.cand_sip3d_sig.len(),
            self.cand_jet_dist_val.len(),
            self.cand_jet_dist_sig.len(),
        ]
    }
}
