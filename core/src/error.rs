use thiserror::Error;

/// Failures surfaced by graph store operations.
///
/// Every failure is local to the failing call; no operation leaves the
/// store in a torn state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("artist name cannot be empty")]
    EmptyName,
    #[error("artist '{0}' not found")]
    ArtistNotFound(String),
    #[error("artist '{0}' already exists")]
    ArtistExists(String),
}
