use super::super::utils::reconstruct_path;
use crate::graph::GraphStore;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub struct BfsState {
    queue: VecDeque<String>,
    pub visited: FxHashSet<String>,
    parent_map: FxHashMap<String, (String, String)>,
}

impl BfsState {
    pub fn new(start: &str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start.to_string());
        visited.insert(start.to_string());

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &str, current: &str, song: &str) {
        if !self.visited.contains(neighbor) {
            self.visited.insert(neighbor.to_string());
            self.parent_map.insert(
                neighbor.to_string(),
                (current.to_string(), song.to_string()),
            );
            self.queue.push_back(neighbor.to_string());
        }
    }

    pub fn find_path_to_target(
        &mut self,
        start: &str,
        target: &str,
        graph: &GraphStore,
    ) -> Option<(Vec<String>, Vec<String>)> {
        while let Some(current_artist) = self.queue.pop_front() {
            if current_artist == target {
                return Some(reconstruct_path(&self.parent_map, start, target));
            }

            for (neighbor, song) in graph.collaborators(&current_artist) {
                self.visit_neighbor(neighbor, &current_artist, song);
            }
        }

        None
    }
}
