//! Sinks for finished rows.

use crate::error::Error;
use crate::tuple::JetTuple;

/// A sink for finished jet rows.
///
/// One call to [`fill`](Self::fill) commits one complete row as a unit.
/// The caller reuses its row buffer afterwards, so implementations must copy
/// what they keep rather than hold on to references.
pub trait TupleWriter {
    /// Commit one row.
    fn fill(&mut self, row: &JetTuple) -> Result<(), Error>;
}

/// An in-memory columnar store of committed rows.
///
/// Every [`JetTuple`] field is mirrored as a column: scalars become
/// `Vec<T>`, per-candidate sequences become `Vec<Vec<T>>` with one inner
/// vector per row. Mainly useful in tests and for small conversions that
/// stay in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryTuple {
    pub event_number: Vec<i32>,

    pub jet_p: Vec<f32>,
    pub jet_e: Vec<f32>,
    pub jet_mass: Vec<f32>,
    pub jet_nconst: Vec<i32>,
    pub jet_theta: Vec<f32>,
    pub jet_phi: Vec<f32>,

    pub jet_is_u: Vec<bool>,
    pub jet_is_d: Vec<bool>,
    pub jet_is_s: Vec<bool>,
    pub jet_is_c: Vec<bool>,
    pub jet_is_b: Vec<bool>,
    pub jet_is_tau: Vec<bool>,
    pub jet_is_g: Vec<bool>,

    pub jet_n_mu: Vec<i32>,
    pub jet_n_el: Vec<i32>,
    pub jet_n_gamma: Vec<i32>,
    pub jet_n_neutral_had: Vec<i32>,
    pub jet_n_charged_had: Vec<i32>,

    pub cand_e: Vec<Vec<f32>>,
    pub cand_p: Vec<Vec<f32>>,
    pub cand_theta: Vec<Vec<f32>>,
    pub cand_phi: Vec<Vec<f32>>,
    pub cand_type: Vec<Vec<i32>>,
    pub cand_charge: Vec<Vec<f32>>,

    pub cand_is_el: Vec<Vec<bool>>,
    pub cand_is_mu: Vec<Vec<bool>>,
    pub cand_is_gamma: Vec<Vec<bool>>,
    pub cand_is_neutral_had: Vec<Vec<bool>>,
    pub cand_is_charged_had: Vec<Vec<bool>>,

    pub cand_erel_log: Vec<Vec<f32>>,
    pub cand_phi_rel: Vec<Vec<f32>>,
    pub cand_theta_rel: Vec<Vec<f32>>,

    pub cand_dptdpt: Vec<Vec<f32>>,
    pub cand_detadeta: Vec<Vec<f32>>,
    pub cand_dphidphi: Vec<Vec<f32>>,
    pub cand_dxydxy: Vec<Vec<f32>>,
    pub cand_dzdz: Vec<Vec<f32>>,
    pub cand_dxydz: Vec<Vec<f32>>,
    pub cand_dphidxy: Vec<Vec<f32>>,
    pub cand_dlambdadz: Vec<Vec<f32>>,
    pub cand_dxyc: Vec<Vec<f32>>,
    pub cand_dxyctgtheta: Vec<Vec<f32>>,
    pub cand_phic: Vec<Vec<f32>>,
    pub cand_phidz: Vec<Vec<f32>>,
    pub cand_phictgtheta: Vec<Vec<f32>>,
    pub cand_cdz: Vec<Vec<f32>>,
    pub cand_cctgtheta: Vec<Vec<f32>>,

    pub cand_dxy: Vec<Vec<f32>>,
    pub cand_dz: Vec<Vec<f32>>,
    pub cand_sip2d_val: Vec<Vec<f32>>,
    pub cand_sip2d_sig: Vec<Vec<f32>>,
    pub cand_sip3d_val: Vec<Vec<f32>>,
    pub cand_sip3d_sig: Vec<Vec<f32>>,
    pub cand_jet_dist_val: Vec<Vec<f32>>,
    pub cand_jet_dist_sig: Vec<Vec<f32>>,
}

impl MemoryTuple {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed rows.
    pub fn len(&self) -> usize {
        self.event_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TupleWriter for MemoryTuple {
    fn fill(&mut self, row: &JetTuple) -> Result<(), Error> {
        self.event_number.push(row.event_number);

        self.jet_p.push(row.jet_p);
        self.jet_e.push(row.jet_e);
        self.jet_mass.push(row.jet_mass);
        self.jet_nconst.push(row.jet_nconst);
        self.jet_theta.push(row.jet_theta);
        self.jet_phi.push(row.jet_phi);

        self.jet_is_u.push(row.jet_is_u);
        self.jet_is_d.push(row.jet_is_d);
        self.jet_is_s.push(row.jet_is_s);
        self.jet_is_c.push(row.jet_is_c);
        self.jet_is_b.push(row.jet_is_b);
        self.jet_is_tau.push(row.jet_is_tau);
        self.jet_is_g.push(row.jet_is_g);

        self.jet_n_mu.push(row.jet_n_mu);
        self.jet_n_el.push(row.jet_n_el);
        self.jet_n_gamma.push(row.jet_n_gamma);
        self.jet_n_neutral_had.push(row.jet_n_neutral_had);
        self.jet_n_charged_had.push(row.jet_n_charged_had);

        self.cand_e.push(row.cand_e.clone());
        self.cand_p.push(row.cand_p.clone());
        self.cand_theta.push(row.cand_theta.clone());
        self.cand_phi.push(row.cand_phi.clone());
        self.cand_type.push(row.cand_type.clone());
        self.cand_charge.push(row.cand_charge.clone());

        self.cand_is_el.push(row.cand_is_el.clone());
        self.cand_is_mu.push(row.cand_is_mu.clone());
        self.cand_is_gamma.push(row.cand_is_gamma.clone());
        self.cand_is_neutral_had.push(row.cand_is_neutral_had.clone());
        self.cand_is_charged_had.push(row.cand_is_charged_had.clone());

        self.cand_erel_log.push(row.cand_erel_log.clone());
        self.cand_phi_rel.push(row.cand_phi_rel.clone());
        self.cand_theta_rel.push(row.cand_theta_rel.clone());

        self.cand_dptdpt.push(row.cand_dptdpt.clone());
        self.cand_detadeta.push(row.cand_detadeta.clone());
        self.cand_dphidphi.push(row.cand_dphidphi.clone());
        self.cand_dxydxy.push(row.cand_dxydxy.clone());
        self.cand_dzdz.push(row.cand_dzdz.clone());
        self.cand_dxydz.push(row.cand_dxydz.clone());
        self.cand_dphidxy.push(row.cand_dphidxy.clone());
        self.cand_dlambdadz.push(row.cand_dlambdadz.clone());
        self.cand_dxyc.push(row.cand_dxyc.clone());
        self.cand_dxyctgtheta.push(row.cand_dxyctgtheta.clone());
        self.cand_phic.push(row.cand_phic.clone());
        self.cand_phidz.push(row.cand_phidz.clone());
        self.cand_phictgtheta.push(row.cand_phictgtheta.clone());
        self.cand_cdz.push(row.cand_cdz.clone());
        self.cand_cctgtheta.push(row.cand_cctgtheta.clone());

        self.cand_dxy.push(row.cand_dxy.clone());
        self.cand_dz.push(row.cand_dz.clone());
        self.cand_sip2d_val.push(row.cand_sip2d_val.clone());
        self.cand_sip2d_sig.push(row.cand_sip2d_sig.clone());
        self.cand_sip3d_val.push(row.cand_sip3d_val.clone());
        self.cand_sip3d_sig.push(row.cand_sip3d_sig.clone());
        self.cand_jet_dist_val.push(row.cand_jet_dist_val.clone());
        self.cand_jet_dist_sig.push(row.cand_jet_dist_sig.clone());

        Ok(())
    }
}
