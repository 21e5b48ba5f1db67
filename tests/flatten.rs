use std::f32::consts::FRAC_PI_2;

use approx::assert_relative_eq;

use jetflat::{
    Error, Event, Flattener, Jet, MemoryTuple, Particle, ParticleID, Track,
    DEFAULT_JET_COLLECTION,
};

fn jet(truth: i32, particles: Vec<Particle>) -> Jet {
    Jet {
        p: [3., 4., 0.],
        energy: 10.,
        mass: 1.2,
        truth_id: ParticleID::new(truth),
        particles,
    }
}

fn single_jet_event(jet: Jet) -> Event {
    let mut event = Event::default();
    event
        .jets
        .insert(DEFAULT_JET_COLLECTION.to_string(), vec![jet]);
    event
}

fn photon(p: [f64; 3], energy: f64) -> Particle {
    Particle {
        p,
        energy,
        id: ParticleID::new(22),
        ..Default::default()
    }
}

fn pion(p: [f64; 3], energy: f64) -> Particle {
    Particle {
        p,
        energy,
        mass: 0.14,
        charge: 1.,
        id: ParticleID::new(211),
        tracks: vec![Track {
            d0: 0.1,
            z0: 0.05,
            cov: [1e-3; 15],
        }],
        ..Default::default()
    }
}

fn neutron(p: [f64; 3], energy: f64) -> Particle {
    Particle {
        p,
        energy,
        mass: 0.94,
        id: ParticleID::new(2112),
        ..Default::default()
    }
}

#[test]
fn jet_scalars_and_angles() {
    let event = single_jet_event(jet(5, vec![photon([1., 0., 0.], 1.)]));
    let mut out = MemoryTuple::new();
    let rows = Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert_eq!(rows, 1);
    assert_eq!(out.jet_p[0], 5.);
    assert_eq!(out.jet_e[0], 10.);
    assert_eq!(out.jet_mass[0], 1.2);
    assert_eq!(out.jet_nconst[0], 1);
    assert_eq!(out.jet_theta[0], FRAC_PI_2);
    assert_relative_eq!(out.jet_phi[0], 0.927_295_2, epsilon = 1e-6);
}

#[test]
fn truth_code_sets_exactly_its_flag() {
    let event = single_jet_event(jet(5, vec![]));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert!(out.jet_is_b[0]);
    assert!(!out.jet_is_u[0]);
    assert!(!out.jet_is_d[0]);
    assert!(!out.jet_is_s[0]);
    assert!(!out.jet_is_c[0]);
    assert!(!out.jet_is_tau[0]);
    assert!(!out.jet_is_g[0]);

    let event = single_jet_event(jet(21, vec![]));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();
    assert!(out.jet_is_g[0]);
    assert!(!out.jet_is_b[0]);
}

#[test]
fn candidate_columns_match_constituent_count() {
    let cands = vec![
        photon([1., 0., 0.], 1.),
        pion([0., 2., 1.], 2.3),
        neutron([1., 1., 1.], 2.),
    ];
    let event = single_jet_event(jet(4, cands));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert_eq!(out.jet_nconst[0], 3);
    assert_eq!(out.cand_e[0].len(), 3);
    assert_eq!(out.cand_p[0].len(), 3);
    assert_eq!(out.cand_theta[0].len(), 3);
    assert_eq!(out.cand_phi[0].len(), 3);
    assert_eq!(out.cand_type[0].len(), 3);
    assert_eq!(out.cand_charge[0].len(), 3);
    assert_eq!(out.cand_erel_log[0].len(), 3);
    assert_eq!(out.cand_phi_rel[0].len(), 3);
    assert_eq!(out.cand_theta_rel[0].len(), 3);
    assert_eq!(out.cand_is_el[0].len(), 3);
    assert_eq!(out.cand_is_charged_had[0].len(), 3);
}

#[test]
fn candidate_identity_columns() {
    let cands = vec![
        photon([1., 0., 0.], 1.),
        pion([0., 2., 1.], 2.3),
        neutron([1., 1., 1.], 2.),
    ];
    let event = single_jet_event(jet(4, cands));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert_eq!(out.cand_type[0], vec![22, 211, 2112]);
    assert_eq!(out.cand_charge[0], vec![0., 1., 0.]);
    assert_eq!(out.cand_is_gamma[0], vec![true, false, false]);
    assert_eq!(out.cand_is_charged_had[0], vec![false, true, false]);
    assert_eq!(out.cand_is_neutral_had[0], vec![false, false, true]);
    assert_eq!(out.cand_is_el[0], vec![false, false, false]);
    assert_eq!(out.cand_is_mu[0], vec![false, false, false]);
}

#[test]
fn relative_energy_is_log_ratio() {
    let event = single_jet_event(jet(5, vec![photon([1., 0., 0.], 2.)]));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    // ln(2 / 10)
    assert_relative_eq!(out.cand_erel_log[0][0], -1.609_437_9, epsilon = 1e-6);
}

#[test]
fn relative_angles_are_differences_of_stored_values() {
    let event = single_jet_event(jet(5, vec![photon([0., 2., 2.], 3.)]));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    // bit-exact: the stored single-precision angles are what gets subtracted
    assert_eq!(out.cand_phi_rel[0][0], out.cand_phi[0][0] - out.jet_phi[0]);
    assert_eq!(
        out.cand_theta_rel[0][0],
        out.cand_theta[0][0] - out.jet_theta[0]
    );
}

#[test]
fn zero_energy_candidate_yields_non_finite_log_ratio() {
    let event = single_jet_event(jet(5, vec![photon([1., 0., 0.], 0.)]));
    let mut out = MemoryTuple::new();
    let rows = Flattener::new().flatten_event(&event, &mut out).unwrap();

    // non-finite values flow into the row instead of failing the conversion
    assert_eq!(rows, 1);
    assert_eq!(out.cand_erel_log[0][0], f32::NEG_INFINITY);
}

#[test]
fn neutral_candidate_zero_fills_track_columns() {
    let event = single_jet_event(jet(5, vec![photon([1., 0., 0.], 1.)]));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert_eq!(out.cand_dptdpt[0], vec![0.]);
    assert_eq!(out.cand_detadeta[0], vec![0.]);
    assert_eq!(out.cand_dphidphi[0], vec![0.]);
    assert_eq!(out.cand_dxydxy[0], vec![0.]);
    assert_eq!(out.cand_dzdz[0], vec![0.]);
    assert_eq!(out.cand_dxydz[0], vec![0.]);
    assert_eq!(out.cand_dphidxy[0], vec![0.]);
    assert_eq!(out.cand_dlambdadz[0], vec![0.]);
    assert_eq!(out.cand_dxyc[0], vec![0.]);
    assert_eq!(out.cand_dxyctgtheta[0], vec![0.]);
    assert_eq!(out.cand_phic[0], vec![0.]);
    assert_eq!(out.cand_phidz[0], vec![0.]);
    assert_eq!(out.cand_phictgtheta[0], vec![0.]);
    assert_eq!(out.cand_cdz[0], vec![0.]);
    assert_eq!(out.cand_cctgtheta[0], vec![0.]);
    assert_eq!(out.cand_dxy[0], vec![0.]);
    assert_eq!(out.cand_dz[0], vec![0.]);
    assert_eq!(out.cand_sip2d_val[0], vec![0.]);
    assert_eq!(out.cand_sip2d_sig[0], vec![0.]);
    assert_eq!(out.cand_sip3d_val[0], vec![0.]);
    assert_eq!(out.cand_sip3d_sig[0], vec![0.]);
    assert_eq!(out.cand_jet_dist_val[0], vec![0.]);
    assert_eq!(out.cand_jet_dist_sig[0], vec![0.]);
}

#[test]
fn tracked_candidate_appends_no_track_columns() {
    let event = single_jet_event(jet(5, vec![pion([0., 2., 1.], 2.3)]));
    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    // kinematic columns have the entry, track-derived columns stay empty
    assert_eq!(out.cand_e[0].len(), 1);
    assert!(out.cand_dptdpt[0].is_empty());
    assert!(out.cand_dxy[0].is_empty());
    assert!(out.cand_sip3d_sig[0].is_empty());
    assert!(out.cand_jet_dist_val[0].is_empty());
}

#[test]
fn two_tracks_abort_without_commit() {
    let mut bad = pion([0., 2., 1.], 2.3);
    bad.tracks.push(Track::default());
    let event = single_jet_event(jet(5, vec![bad]));

    let mut out = MemoryTuple::new();
    let mut flattener = Flattener::new();
    let err = flattener.flatten_event(&event, &mut out).unwrap_err();

    assert_eq!(
        err,
        Error::TooManyTracks {
            id: 211,
            n_tracks: 2
        }
    );
    assert!(out.is_empty());
    assert_eq!(flattener.rows_written(), 0);
}

#[test]
fn abort_keeps_earlier_rows() {
    let mut bad = pion([0., 2., 1.], 2.3);
    bad.tracks.push(Track::default());

    let mut event = Event::default();
    event.jets.insert(
        DEFAULT_JET_COLLECTION.to_string(),
        vec![jet(5, vec![photon([1., 0., 0.], 1.)]), jet(4, vec![bad])],
    );

    let mut out = MemoryTuple::new();
    let mut flattener = Flattener::new();
    assert!(flattener.flatten_event(&event, &mut out).is_err());

    assert_eq!(out.len(), 1);
    assert!(out.jet_is_b[0]);
    assert_eq!(flattener.rows_written(), 1);
}

#[test]
fn row_counter_spans_events() {
    let mut first = Event::default();
    first.jets.insert(
        DEFAULT_JET_COLLECTION.to_string(),
        vec![jet(1, vec![]), jet(2, vec![])],
    );
    let second = single_jet_event(jet(3, vec![]));

    let mut out = MemoryTuple::new();
    let mut flattener = Flattener::new();
    assert_eq!(flattener.flatten_event(&first, &mut out).unwrap(), 2);
    assert_eq!(flattener.flatten_event(&second, &mut out).unwrap(), 1);

    assert_eq!(out.event_number, vec![0, 1, 2]);
    assert_eq!(flattener.rows_written(), 3);
}

#[test]
fn multiplicity_counters_stay_zero() {
    let muon = Particle {
        p: [1., 0., 0.],
        energy: 1.,
        mass: 0.106,
        charge: -1.,
        id: ParticleID::new(13),
        ..Default::default()
    };
    let electron = Particle {
        p: [0., 1., 0.],
        energy: 1.,
        charge: -1.,
        id: ParticleID::new(11),
        ..Default::default()
    };
    let event = single_jet_event(jet(5, vec![muon.clone(), muon, electron]));

    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert_eq!(out.cand_is_mu[0], vec![true, true, false]);
    assert_eq!(out.jet_n_mu[0], 0);
    assert_eq!(out.jet_n_el[0], 0);
    assert_eq!(out.jet_n_gamma[0], 0);
    assert_eq!(out.jet_n_neutral_had[0], 0);
    assert_eq!(out.jet_n_charged_had[0], 0);
}

#[test]
fn missing_collection_is_an_error() {
    let event = Event::default();
    let mut out = MemoryTuple::new();
    let err = Flattener::new()
        .flatten_event(&event, &mut out)
        .unwrap_err();

    assert_eq!(
        err,
        Error::MissingCollection(DEFAULT_JET_COLLECTION.to_string())
    );
    assert!(out.is_empty());
}

#[test]
fn named_collection_is_read() {
    let mut event = Event::default();
    event
        .jets
        .insert("Durham2Jets".to_string(), vec![jet(5, vec![])]);

    let mut out = MemoryTuple::new();
    let rows = Flattener::with_collection("Durham2Jets")
        .flatten_event(&event, &mut out)
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn buffers_reset_between_jets() {
    let mut event = Event::default();
    event.jets.insert(
        DEFAULT_JET_COLLECTION.to_string(),
        vec![
            jet(
                5,
                vec![
                    photon([1., 0., 0.], 1.),
                    photon([0., 1., 0.], 1.),
                    photon([0., 0., 1.], 1.),
                ],
            ),
            jet(1, vec![photon([1., 1., 0.], 1.5)]),
        ],
    );

    let mut out = MemoryTuple::new();
    Flattener::new().flatten_event(&event, &mut out).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out.cand_e[1].len(), 1);
    assert_eq!(out.cand_type[1].len(), 1);
    assert_eq!(out.cand_is_gamma[1].len(), 1);
    assert_eq!(out.cand_dptdpt[1].len(), 1);
    assert!(out.jet_is_u[1]);
    assert!(!out.jet_is_b[1]);
}
