use crate::graph::GraphStore;
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Writes the whole store (node table plus adjacency) to one bincode file.
/// This is the handoff format between the import tool and the web backend.
pub fn save_snapshot(store: &GraphStore, path: &Path) -> Result<(), SnapshotError> {
    let bytes = bincode::serialize(store)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<GraphStore, SnapshotError> {
    let bytes = fs::read(path)?;
    Ok(bincode::deserialize(&bytes)?)
}
