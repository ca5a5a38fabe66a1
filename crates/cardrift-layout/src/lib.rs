//! Placement policy for floating-card layouts.
//!
//! Given a viewport extent and card metrics, [`generate`] produces one vertical
//! offset per card such that no two cards start close enough to collide, or an
//! evenly spaced fallback when the band cannot hold them all.

mod band;
mod placement;

pub use band::*;
pub use placement::*;

pub mod prelude {
    pub use crate::band::{BandMetrics, UsableBand};
    pub use crate::placement::{generate, BandFit, PlacementSet};
}
