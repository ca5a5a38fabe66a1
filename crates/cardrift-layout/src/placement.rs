//! Non-overlapping random placement of cards along one axis.
//!
//! The generator is a pure function of its inputs and the injected random
//! source: it never blocks, holds no state across calls, and always returns
//! exactly `count` offsets. When the band cannot hold `count` cards at the
//! required separation it degrades to even spacing and reports the condition
//! instead of failing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::band::{BandMetrics, UsableBand};

/// Whole-set resampling rounds attempted before switching to slotted
/// construction when the greedy pass comes up short.
const MAX_SAMPLE_ROUNDS: usize = 8;

/// Which branch of the capacity check produced a placement set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandFit {
    /// The band held every card at the required separation.
    Fits,
    /// The band was too small; offsets are evenly spaced and adjacent cards
    /// may sit closer than `item_extent + min_gap`.
    Overflow,
}

/// One invocation's output: an ordered sequence of offsets, one per card.
///
/// The order is already randomized; callers zip it against their own card
/// list as-is. There is no identity linkage back to cards and no state kept
/// across invocations.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementSet {
    offsets: Vec<f32>,
    fit: BandFit,
}

impl PlacementSet {
    #[inline]
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    #[inline]
    pub fn fit(&self) -> BandFit {
        self.fit
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.fit == BandFit::Overflow
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn into_offsets(self) -> Vec<f32> {
        self.offsets
    }
}

/// Places `count` cards inside the usable band of `viewport_extent`.
///
/// Fits branch (`count` within band capacity): every pair of offsets ends up
/// at least `item_extent + min_gap` apart and every card lies fully inside
/// the band. Overflow branch: offsets are evenly spaced across the band,
/// which keeps them inside it but may violate the separation guarantee; the
/// condition is logged at warn level.
///
/// # Arguments
/// * `count` - Number of cards needing an offset
/// * `viewport_extent` - Total usable length of the axis, e.g. window height
/// * `metrics` - Card size, gap, and buffer values derived by the caller
/// * `rng` - Random source; seed it for reproducible output
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    viewport_extent: f32,
    metrics: &BandMetrics,
    rng: &mut R,
) -> PlacementSet {
    let band = metrics.usable_band(viewport_extent);
    let slot = metrics.required_slot();

    if count == 0 {
        return PlacementSet {
            offsets: Vec::new(),
            fit: BandFit::Fits,
        };
    }

    if count > band.max_fit(slot) {
        log::warn!(
            "placement: {} cards exceed band capacity {} (usable {:.1} at slot {:.1}); \
             falling back to even spacing",
            count,
            band.max_fit(slot),
            band.length(),
            slot
        );
        let mut offsets = even_spacing(count, &band);
        offsets.shuffle(rng);
        return PlacementSet {
            offsets,
            fit: BandFit::Overflow,
        };
    }

    let mut offsets = sample_separated(count, &band, metrics, rng);
    offsets.shuffle(rng);
    PlacementSet {
        offsets,
        fit: BandFit::Fits,
    }
}

/// Arithmetic progression across the band with step `length / count`.
///
/// On a zero-length band every offset collapses to the band start.
fn even_spacing(count: usize, band: &UsableBand) -> Vec<f32> {
    let step = band.length() / count as f32;
    (0..count).map(|i| band.start() + step * i as f32).collect()
}

/// Random offsets with pairwise separation of at least `required_slot`.
///
/// Samples `count` uniform candidates, sorts them, and greedily keeps the
/// ones far enough from the previous acceptance. Re-samples the whole set a
/// bounded number of times when the pass under-fills, then finishes with
/// jittered even slots, which always satisfy the separation bound when
/// `count` is within band capacity.
fn sample_separated<R: Rng + ?Sized>(
    count: usize,
    band: &UsableBand,
    metrics: &BandMetrics,
    rng: &mut R,
) -> Vec<f32> {
    let slot = metrics.required_slot();
    let span = (band.length() - metrics.item_extent).max(0.0);

    let mut accepted: Vec<f32> = Vec::with_capacity(count);
    for round in 0..MAX_SAMPLE_ROUNDS {
        let mut candidates: Vec<f32> = (0..count)
            .map(|_| band.start() + rng.gen_range(0.0..=span))
            .collect();
        candidates.sort_by(f32::total_cmp);

        accepted.clear();
        for candidate in candidates {
            // Candidates are sorted, so only the latest acceptance can conflict.
            let far_enough = accepted.last().map_or(true, |prev| candidate - prev >= slot);
            if far_enough {
                accepted.push(candidate);
            }
        }
        if accepted.len() == count {
            return accepted;
        }
        log::debug!(
            "placement: greedy pass {} accepted {} of {} cards, resampling",
            round + 1,
            accepted.len(),
            count
        );
    }

    // Slotted construction: each card gets its own band segment of width
    // `length / count` (at least one required slot when count is within
    // capacity) and jitters inside it without leaving room to collide with
    // its neighbors.
    let step = band.length() / count as f32;
    let jitter = (step - slot).max(0.0);
    accepted.clear();
    for i in 0..count {
        let slot_start = band.start() + step * i as f32;
        accepted.push(slot_start + rng.gen_range(0.0..=jitter));
    }
    accepted
}

#[cfg(test)]
#[path = "tests/placement_tests.rs"]
mod tests;
