//! Flatten reconstructed-jet events into per-jet ntuples for flavour
//! tagging.
//!
//! Each jet of a configured collection becomes one row: jet kinematics and
//! truth flavour flags as scalars, candidate features as variable-length
//! columns. Rows go to a [`TupleWriter`]; [`MemoryTuple`] keeps them in
//! memory.
//!
//! # Example
//!
//! ```
//! use jetflat::{Event, Flattener, Jet, MemoryTuple, Particle, ParticleID};
//!
//! let jet = Jet {
//!     p: [3., 4., 0.],
//!     energy: 10.,
//!     mass: 1.2,
//!     truth_id: ParticleID::new(5),
//!     particles: vec![Particle {
//!         p: [1.5, 2., 0.],
//!         energy: 2.5,
//!         id: ParticleID::new(22),
//!         ..Default::default()
//!     }],
//! };
//! let mut event = Event::default();
//! event.jets.insert("RefinedVertexJets".to_string(), vec![jet]);
//!
//! let mut out = MemoryTuple::new();
//! let rows = Flattener::new().flatten_event(&event, &mut out)?;
//! assert_eq!(rows, 1);
//! assert!(out.jet_is_b[0]);
//! # Ok::<(), jetflat::Error>(())
//! ```
pub mod error;
pub mod event;
pub mod flatten;
pub mod flavour;
pub mod kin;
pub mod tuple;
pub mod writer;

pub use crate::error::Error;
pub use crate::event::{Event, Jet, Particle, Track};
pub use crate::flatten::{Flattener, DEFAULT_JET_COLLECTION};
pub use crate::flavour::{CandFlags, CandKind, JetFlags, JetFlavour};
pub use crate::tuple::JetTuple;
pub use crate::writer::{MemoryTuple, TupleWriter};

pub use particle_id::ParticleID;
