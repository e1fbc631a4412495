use rustc_hash::FxHashMap;

/// Outcome of a shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// The connection: the artists in order, plus the song linking each
    /// consecutive pair (always one fewer song than artists).
    Found {
        artists: Vec<String>,
        songs: Vec<String>,
    },
    /// No connecting path, or an endpoint that is not in the graph.
    NotFound,
    /// Start and end name the same artist.
    SameArtist,
}

pub(crate) fn reconstruct_path(
    parent_map: &FxHashMap<String, (String, String)>,
    start: &str,
    target: &str,
) -> (Vec<String>, Vec<String>) {
    let mut artists = vec![target.to_string()];
    let mut songs = Vec::new();

    let mut current = target;
    while current != start {
        let (parent, song) = &parent_map[current];
        songs.push(song.clone());
        artists.push(parent.clone());
        current = parent.as_str();
    }

    artists.reverse();
    songs.reverse();
    (artists, songs)
}
