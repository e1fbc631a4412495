use crate::error::GraphError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-node adjacency: neighbor name -> songs connecting the pair, in
/// insertion order. A parallel edge (same pair, new song) appends.
type Adjacency = IndexMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct NodeEntry {
    outgoing: Adjacency,
    incoming: Adjacency,
}

/// The artist collaboration graph.
///
/// Storage is a directed multigraph: every edge records the (from, to, song)
/// triple it was merged with, and the triple is its identity. A
/// collaboration is symmetric for discovery purposes, so each node keeps
/// both outgoing and incoming adjacency and [`GraphStore::collaborators`]
/// enumerates across both.
///
/// Insertion order is preserved end to end (node table and adjacency), which
/// makes neighbor expansion during path search deterministic for a given
/// load order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GraphStore {
    nodes: IndexMap<String, NodeEntry>,
    edge_count: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts an artist node: inserts if absent, no-op otherwise. Returns
    /// the canonical name.
    pub fn merge_node(&mut self, name: &str) -> Result<String, GraphError> {
        if name.trim().is_empty() {
            return Err(GraphError::EmptyName);
        }
        if !self.nodes.contains_key(name) {
            self.nodes.insert(name.to_string(), NodeEntry::default());
        }
        Ok(name.to_string())
    }

    /// Upserts the (from, to, song) collaboration. Both endpoints must
    /// already exist. Returns true if the edge was created, false if the
    /// identical triple was already present.
    pub fn merge_edge(&mut self, from: &str, to: &str, song: &str) -> Result<bool, GraphError> {
        if !self.nodes.contains_key(from) {
            return Err(GraphError::ArtistNotFound(from.to_string()));
        }
        if !self.nodes.contains_key(to) {
            return Err(GraphError::ArtistNotFound(to.to_string()));
        }

        {
            let entry = self
                .nodes
                .get_mut(from)
                .ok_or_else(|| GraphError::ArtistNotFound(from.to_string()))?;
            let songs = entry.outgoing.entry(to.to_string()).or_default();
            if songs.iter().any(|known| known.as_str() == song) {
                return Ok(false);
            }
            songs.push(song.to_string());
        }

        let entry = self
            .nodes
            .get_mut(to)
            .ok_or_else(|| GraphError::ArtistNotFound(to.to_string()))?;
        entry
            .incoming
            .entry(from.to_string())
            .or_default()
            .push(song.to_string());

        self.edge_count += 1;
        Ok(true)
    }

    /// Creates an artist node, refusing duplicates. The duplicate check is
    /// case-insensitive even though names themselves are case-sensitive
    /// keys; the trimmed name is stored.
    pub fn create_node_exclusive(&mut self, name: &str) -> Result<String, GraphError> {
        let clean_name = name.trim();
        if clean_name.is_empty() {
            return Err(GraphError::EmptyName);
        }

        let folded = clean_name.to_lowercase();
        if self
            .nodes
            .keys()
            .any(|existing| existing.to_lowercase() == folded)
        {
            return Err(GraphError::ArtistExists(clean_name.to_string()));
        }

        self.nodes
            .insert(clean_name.to_string(), NodeEntry::default());
        Ok(clean_name.to_string())
    }

    /// Removes an artist and every collaboration it appears in, in either
    /// direction. Returns the number of edges removed.
    pub fn delete_node_cascade(&mut self, name: &str) -> Result<usize, GraphError> {
        let entry = self
            .nodes
            .shift_remove(name)
            .ok_or_else(|| GraphError::ArtistNotFound(name.to_string()))?;

        let mut removed = 0;
        for (neighbor, songs) in &entry.outgoing {
            removed += songs.len();
            if neighbor.as_str() != name {
                if let Some(other) = self.nodes.get_mut(neighbor) {
                    other.incoming.shift_remove(name);
                }
            }
        }
        for (neighbor, songs) in &entry.incoming {
            if neighbor.as_str() == name {
                // Self-loops were already counted on the outgoing side.
                continue;
            }
            removed += songs.len();
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.outgoing.shift_remove(name);
            }
        }

        self.edge_count -= removed;
        Ok(removed)
    }

    /// All artist names, sorted ascending. The substring filter is
    /// case-sensitive.
    pub fn list_node_names(&self, filter: Option<&str>) -> Vec<String> {
        let mut names: Vec<String> = match filter {
            Some(needle) => self
                .nodes
                .keys()
                .filter(|name| name.contains(needle))
                .cloned()
                .collect(),
            None => self.nodes.keys().cloned().collect(),
        };
        names.sort();
        names
    }

    /// Clears all nodes and edges. Used by the bulk loader before a full
    /// reimport.
    pub fn reset_all(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Undirected neighbor enumeration for path search: every artist across
    /// an edge in either direction, with one song label per neighbor.
    ///
    /// Order is adjacency insertion order, outgoing before incoming; for
    /// parallel edges the label is the first song inserted. A neighbor
    /// connected in both directions shows up twice, which is harmless to a
    /// traversal that tracks visited nodes.
    pub fn collaborators(&self, name: &str) -> Vec<(&str, &str)> {
        let Some(entry) = self.nodes.get(name) else {
            return Vec::new();
        };

        let mut connections = Vec::with_capacity(entry.outgoing.len() + entry.incoming.len());
        for (neighbor, songs) in entry.outgoing.iter().chain(entry.incoming.iter()) {
            if let Some(song) = songs.first() {
                connections.push((neighbor.as_str(), song.as_str()));
            }
        }
        connections
    }
}
