pub mod bfs;
pub mod utils;

// Re-export the public surface
pub use bfs::bfs_find_path;
pub use utils::PathResult;
