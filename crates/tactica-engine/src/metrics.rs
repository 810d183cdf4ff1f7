//! Cumulative counters for a battlefield session.
//!
//! [`BoardMetrics`] is updated by [`Battlefield`](crate::Battlefield) as it
//! commits requests and rebuilds highlights; consumers (telemetry, debug
//! overlays, benches) read a copy via
//! [`Battlefield::metrics`](crate::Battlefield::metrics).

/// Counters accumulated since the battlefield was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardMetrics {
    /// Units placed on the board.
    pub units_spawned: u64,
    /// Units removed from the board.
    pub units_despawned: u64,
    /// Moves committed.
    pub moves_committed: u64,
    /// Moves declined for any reason.
    pub moves_rejected: u64,
    /// In-place rotations committed.
    pub rotations_committed: u64,
    /// In-place rotations declined.
    pub rotations_rejected: u64,
    /// Highlight rebuilds performed.
    pub highlight_rebuilds: u64,
    /// Selection refreshes skipped because nothing relevant changed.
    pub highlight_rebuilds_skipped: u64,
    /// Total cells marked across all rebuilds.
    pub cells_marked: u64,
    /// Total cells cleared across all rebuilds.
    pub cells_cleared: u64,
    /// Overlay geometry rebuilds.
    pub overlay_rebuilds: u64,
}

impl BoardMetrics {
    /// Committed over attempted moves, or `None` before the first attempt.
    pub fn move_acceptance(&self) -> Option<f64> {
        let attempts = self.moves_committed + self.moves_rejected;
        (attempts > 0).then(|| self.moves_committed as f64 / attempts as f64)
    }
}
