use serde::Serialize;

/// Hooks called by a search as it progresses
///
/// All methods default to doing nothing. `()` is the no-op observer.
pub trait SearchObserver<V, W> {
    /// A vertex left the queue with its final distance
    fn on_finalize(&mut self, _vertex: &V, _distance: W) {}

    /// An outgoing edge of a finalized vertex was examined
    fn on_edge_scanned(&mut self, _from: &V, _to: &V) {}

    /// A tentative distance was lowered from `previous` to `current`
    fn on_improve(&mut self, _vertex: &V, _previous: W, _current: W) {}

    /// A new entry for the vertex was pushed onto the queue
    fn on_enqueue(&mut self, _vertex: &V) {}

    /// A queue entry for an already finalized vertex was discarded
    fn on_stale(&mut self, _vertex: &V) {}
}

impl<V, W> SearchObserver<V, W> for () {}

/// Counters collected during a search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub vertices_finalized: usize,
    pub edges_scanned: usize,
    pub distance_updates: usize,
    pub queue_entries: usize,
    pub stale_entries: usize,
}

impl<V, W> SearchObserver<V, W> for SearchStats {
    fn on_finalize(&mut self, _vertex: &V, _distance: W) {
        self.vertices_finalized += 1;
    }

    fn on_edge_scanned(&mut self, _from: &V, _to: &V) {
        self.edges_scanned += 1;
    }

    fn on_improve(&mut self, _vertex: &V, _previous: W, _current: W) {
        self.distance_updates += 1;
    }

    fn on_enqueue(&mut self, _vertex: &V) {
        self.queue_entries += 1;
    }

    fn on_stale(&mut self, _vertex: &V) {
        self.stale_entries += 1;
    }
}
