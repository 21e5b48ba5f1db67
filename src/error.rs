use thiserror::Error;

/// Errors produced while flattening events.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The configured jet collection is absent from an event.
    #[error("no jet collection named `{0}` in event")]
    MissingCollection(String),

    /// A candidate carries more than one reconstructed track.
    ///
    /// Well-formed input associates at most one track with each candidate.
    /// Anything else means the upstream reconstruction is corrupt, so the
    /// flattener stops without committing the row it was building.
    #[error(
        "candidate with type code {id} has {n_tracks} associated tracks, at most 1 is allowed"
    )]
    TooManyTracks {
        /// Reconstructed type code of the offending candidate.
        id: i32,
        /// Number of associated tracks.
        n_tracks: usize,
    },
}
