mod state;

use super::utils::PathResult;
use crate::graph::GraphStore;
use state::BfsState;
use std::time::Instant;

/// Shortest connection between two artists by hop count, treating every
/// stored collaboration as traversable in both directions.
///
/// Returns the search outcome, the number of artists visited, and the
/// elapsed time in seconds. Equal start and end is reported as
/// [`PathResult::SameArtist`] before any traversal; an endpoint missing
/// from the graph short-circuits to [`PathResult::NotFound`].
pub fn bfs_find_path(start: &str, target: &str, graph: &GraphStore) -> (PathResult, usize, f64) {
    let search_timer = Instant::now();

    if start == target {
        return (
            PathResult::SameArtist,
            0,
            search_timer.elapsed().as_secs_f64(),
        );
    }
    if !graph.contains(start) || !graph.contains(target) {
        return (
            PathResult::NotFound,
            0,
            search_timer.elapsed().as_secs_f64(),
        );
    }

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state.find_path_to_target(start, target, graph);

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    let result = match path {
        Some((artists, songs)) => PathResult::Found { artists, songs },
        None => PathResult::NotFound,
    };
    (result, bfs_state.visited.len(), elapsed_time)
}
