//! Event-to-row conversion.

use itertools::Itertools;
use log::{debug, trace};

use crate::error::Error;
use crate::event::{Event, Jet};
use crate::flavour::{CandKind, JetFlavour};
use crate::kin;
use crate::tuple::JetTuple;
use crate::writer::TupleWriter;

/// Jet collection read when none is configured.
pub const DEFAULT_JET_COLLECTION: &str = "RefinedVertexJets";

/// Converts events into per-jet rows.
///
/// A `Flattener` owns the row buffer and the running row counter. Each jet
/// of the configured collection becomes one committed row; the counter
/// advances once per committed row and is never reset, so row indices keep
/// growing across events.
#[derive(Clone, Debug)]
pub struct Flattener {
    collection: String,
    row: JetTuple,
    event_number: i32,
}

impl Flattener {
    /// Create a flattener reading [`DEFAULT_JET_COLLECTION`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flattener reading the given jet collection.
    pub fn with_collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Self::default()
        }
    }

    /// Name of the jet collection being read.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Number of rows committed so far.
    pub fn rows_written(&self) -> i32 {
        self.event_number
    }

    /// Flatten all jets of one event into `out`.
    ///
    /// Returns the number of rows committed. A malformed candidate aborts
    /// the conversion with its row uncommitted; rows committed earlier,
    /// including earlier jets of the same event, are kept.
    pub fn flatten_event<W: TupleWriter>(
        &mut self,
        event: &Event,
        out: &mut W,
    ) -> Result<usize, Error> {
        let jets = event
            .jet_collection(&self.collection)
            .ok_or_else(|| Error::MissingCollection(self.collection.clone()))?;
        debug!("flattening {} jets from `{}`", jets.len(), self.collection);

        let mut committed = 0;
        for jet in jets {
            self.fill_jet(jet)?;
            trace!(
                "row {}: {} candidates",
                self.row.event_number,
                self.row.jet_nconst
            );
            out.fill(&self.row)?;
            self.event_number += 1;
            committed += 1;
        }
        Ok(committed)
    }

    fn fill_jet(&mut self, jet: &Jet) -> Result<(), Error> {
        let row = &mut self.row;
        row.clear();
        row.event_number = self.event_number;

        row.jet_p = kin::momentum(jet.p) as f32;
        row.jet_e = jet.energy as f32;
        row.jet_mass = jet.mass as f32;
        row.jet_nconst = jet.particles.len() as i32;
        row.jet_theta = kin::theta(jet.p) as f32;
        row.jet_phi = kin::phi(jet.p) as f32;
        row.set_jet_flags(JetFlavour::from_id(jet.truth_id).into());

        for cand in &jet.particles {
            let e = cand.energy as f32;
            row.cand_e.push(e);
            row.cand_p.push(kin::momentum(cand.p) as f32);
            let theta = kin::theta(cand.p) as f32;
            row.cand_theta.push(theta);
            let phi = kin::phi(cand.p) as f32;
            row.cand_phi.push(phi);
            row.cand_type.push(cand.id.id());
            row.cand_charge.push(cand.charge as f32);

            let kind = CandKind::classify(cand.id, cand.tracks.len());
            row.push_cand_flags(kind.into());

            // relative features are taken from the stored single-precision
            // values, not the double-precision input
            let erel = e as f64 / row.jet_e as f64;
            row.cand_erel_log.push(erel.ln() as f32);
            row.cand_phi_rel.push(phi - row.jet_phi);
            row.cand_theta_rel.push(theta - row.jet_theta);

            match cand.tracks.len() {
                0 => row.push_track_zeros(),
                // TODO: read out the helix covariance and impact parameters
                // of the single track
                1 => {}
                n => {
                    return Err(Error::TooManyTracks {
                        id: cand.id.id(),
                        n_tracks: n,
                    })
                }
            }
        }

        let cand_lens = [
            row.cand_e.len(),
            row.cand_p.len(),
            row.cand_theta.len(),
            row.cand_phi.len(),
            row.cand_type.len(),
            row.cand_charge.len(),
            row.cand_is_el.len(),
            row.cand_is_charged_had.len(),
            row.cand_erel_log.len(),
            row.cand_phi_rel.len(),
            row.cand_theta_rel.len(),
        ];
        debug_assert!(
            cand_lens.iter().all_equal(),
            "per-candidate columns out of step: {cand_lens:?}"
        );
        debug_assert!(row.track_column_lens().iter().all_equal());
        Ok(())
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Self {
            collection: DEFAULT_JET_COLLECTION.to_string(),
            row: JetTuple::new(),
            event_number: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_collection() {
        let flattener = Flattener::new();
        assert_eq!(flattener.collection(), "RefinedVertexJets");
        assert_eq!(flattener.rows_written(), 0);
    }

    #[test]
    fn custom_collection() {
        let flattener = Flattener::with_collection("Durham2Jets");
        assert_eq!(flattener.collection(), "Durham2Jets");
    }
}
