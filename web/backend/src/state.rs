use featpath_core::{GraphStore, SnapshotError, load_snapshot};
use parking_lot::RwLock;
use std::path::Path;

/// The single shared graph. Reads run concurrently under the read lock;
/// every mutation takes the write lock, so readers never observe a torn
/// intermediate state.
pub struct AppState {
    pub graph: RwLock<GraphStore>,
}

impl AppState {
    /// Loads the snapshot written by `featpath-import` when `SNAPSHOT_PATH`
    /// points at one; otherwise starts with an empty graph.
    pub fn new() -> Result<Self, SnapshotError> {
        let snapshot_path_str = std::env::var("SNAPSHOT_PATH")
            .unwrap_or_else(|_| "../../data/featpath.snapshot".to_string());
        let snapshot_path = Path::new(&snapshot_path_str);

        let graph = if snapshot_path.exists() {
            let graph = load_snapshot(snapshot_path)?;
            tracing::info!(
                artists = graph.node_count(),
                collaborations = graph.edge_count(),
                snapshot = %snapshot_path.display(),
                "loaded graph snapshot"
            );
            graph
        } else {
            tracing::warn!(
                snapshot = %snapshot_path.display(),
                "no snapshot found, starting with an empty graph"
            );
            GraphStore::new()
        };

        Ok(Self {
            graph: RwLock::new(graph),
        })
    }

    pub fn with_graph(graph: GraphStore) -> Self {
        Self {
            graph: RwLock::new(graph),
        }
    }
}
