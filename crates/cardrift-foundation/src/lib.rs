//! Foundation elements for cardrift decks: default card metrics and the
//! viewport-driven state that owns a deck's current placements.

mod deck;
mod metrics;

pub use deck::*;
pub use metrics::*;
