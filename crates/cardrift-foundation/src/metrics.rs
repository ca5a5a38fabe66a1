//! Default metrics for the floating card deck.

use cardrift_layout::BandMetrics;

/// Height of one floating card, in logical pixels.
pub const CARD_EXTENT: f32 = 110.0;

/// Minimum empty space required between two cards.
pub const MIN_GAP: f32 = 50.0;

/// Height of the section title block at the top of the viewport.
pub const TITLE_EXTENT: f32 = 100.0;

/// Space reserved above the band: the title block plus one card gap.
pub const LEADING_BUFFER: f32 = TITLE_EXTENT + MIN_GAP;

/// Space reserved below the band.
pub const TRAILING_BUFFER: f32 = 40.0;

/// Band metrics for the default card deck.
pub const fn card_defaults() -> BandMetrics {
    BandMetrics::new(CARD_EXTENT, MIN_GAP, LEADING_BUFFER, TRAILING_BUFFER)
}
