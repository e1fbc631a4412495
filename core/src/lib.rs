pub mod error;
pub mod graph;
pub mod loader;
pub mod pathfinding;
pub mod snapshot;

// Re-export commonly used items
pub use error::GraphError;
pub use graph::GraphStore;
pub use loader::{Collab, DEFAULT_BATCH_SIZE, LoadStats, bulk_load};
pub use pathfinding::{PathResult, bfs_find_path};
pub use snapshot::{SnapshotError, load_snapshot, save_snapshot};
