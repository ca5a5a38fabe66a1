//! Viewport-driven placement state for a deck of floating cards.
//!
//! The generator itself is pure; this wrapper owns the recompute policy: the
//! whole placement set is replaced when the viewport extent changes, never
//! patched incrementally, and the previous set is discarded.

use cardrift_layout::{generate, BandFit, BandMetrics, PlacementSet};
use rand::Rng;

/// Current placements for a fixed-size deck of cards.
///
/// The caller reads the viewport extent from its windowing environment and
/// pushes it in through [`set_viewport_extent`](Self::set_viewport_extent) on
/// every resize; card order inside the set is already randomized, so zipping
/// card `i` to [`offset_for`](Self::offset_for)`(i)` is all the assignment
/// the caller does.
#[derive(Clone, Debug)]
pub struct FloatingDeckState {
    count: usize,
    metrics: BandMetrics,
    viewport_extent: f32,
    placements: PlacementSet,
}

impl FloatingDeckState {
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        metrics: BandMetrics,
        viewport_extent: f32,
        rng: &mut R,
    ) -> Self {
        let placements = generate(count, viewport_extent, &metrics, rng);
        Self {
            count,
            metrics,
            viewport_extent,
            placements,
        }
    }

    /// Replaces the placement set if the viewport extent actually changed.
    ///
    /// Returns `true` when a recompute happened. Repeated resize events with
    /// the same extent keep the existing placements stable.
    pub fn set_viewport_extent<R: Rng + ?Sized>(&mut self, extent: f32, rng: &mut R) -> bool {
        if extent == self.viewport_extent {
            return false;
        }
        log::debug!(
            "deck: viewport extent {} -> {}, recomputing {} placements",
            self.viewport_extent,
            extent,
            self.count
        );
        self.viewport_extent = extent;
        self.placements = generate(self.count, extent, &self.metrics, rng);
        true
    }

    /// Offset assigned to the card at `index`, or the band start for an
    /// index past the placed range.
    pub fn offset_for(&self, index: usize) -> f32 {
        self.placements
            .offsets()
            .get(index)
            .copied()
            .unwrap_or_else(|| self.metrics.usable_band(self.viewport_extent).start())
    }

    #[inline]
    pub fn placements(&self) -> &PlacementSet {
        &self.placements
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    /// Whether the current viewport was too small to guarantee card spacing.
    #[inline]
    pub fn is_overflowing(&self) -> bool {
        self.placements.fit() == BandFit::Overflow
    }
}
