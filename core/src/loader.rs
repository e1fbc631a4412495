use crate::error::GraphError;
use crate::graph::GraphStore;

/// One "featured together" record from the ingestion side: two artists and
/// the song crediting them both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collab {
    pub artist1: String,
    pub artist2: String,
    pub song: String,
}

impl Collab {
    pub fn new(
        artist1: impl Into<String>,
        artist2: impl Into<String>,
        song: impl Into<String>,
    ) -> Self {
        Self {
            artist1: artist1.into(),
            artist2: artist2.into(),
            song: song.into(),
        }
    }
}

/// What a bulk load actually did, for reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    pub triples_processed: usize,
    pub nodes_created: usize,
    pub edges_created: usize,
}

pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Rebuilds the store from scratch: clears everything, then merges both
/// artists and the connecting edge for every triple, in fixed-size batches.
/// `report_progress` receives the running triple count after each batch.
///
/// Destructive: the previous graph is discarded on every load.
/// Batch boundaries carry no correctness meaning, they only bound the
/// interval between progress reports. A reader interleaved with a load on a
/// shared store can observe a partially rebuilt graph; callers wanting full
/// isolation should load into a private store and swap it in.
///
/// The first invalid triple (empty artist name) aborts the load; triples
/// already applied stay applied and the error surfaces to the caller.
pub fn bulk_load(
    store: &mut GraphStore,
    triples: &[Collab],
    batch_size: usize,
    mut report_progress: impl FnMut(usize),
) -> Result<LoadStats, GraphError> {
    let batch_size = batch_size.max(1);
    store.reset_all();

    let mut stats = LoadStats::default();
    for batch in triples.chunks(batch_size) {
        for collab in batch {
            let nodes_before = store.node_count();
            store.merge_node(&collab.artist1)?;
            store.merge_node(&collab.artist2)?;
            stats.nodes_created += store.node_count() - nodes_before;

            if store.merge_edge(&collab.artist1, &collab.artist2, &collab.song)? {
                stats.edges_created += 1;
            }
            stats.triples_processed += 1;
        }
        report_progress(stats.triples_processed);
    }

    Ok(stats)
}
