//! Usable-band geometry: the sub-interval of the viewport axis left over for
//! placing cards after reserving the leading and trailing buffers.

/// Per-invocation sizing inputs for card placement along one axis.
///
/// All values are logical pixels. `item_extent` is expected to be positive and
/// the remaining fields non-negative; the caller derives them from its own
/// layout (title block height, margins) and validates them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandMetrics {
    /// Size of one card along the placement axis.
    pub item_extent: f32,
    /// Minimum empty space required between two adjacent cards.
    pub min_gap: f32,
    /// Space reserved at the start of the axis (e.g. for a title block).
    pub leading_buffer: f32,
    /// Space reserved at the end of the axis.
    pub trailing_buffer: f32,
}

impl BandMetrics {
    pub const fn new(
        item_extent: f32,
        min_gap: f32,
        leading_buffer: f32,
        trailing_buffer: f32,
    ) -> Self {
        Self {
            item_extent,
            min_gap,
            leading_buffer,
            trailing_buffer,
        }
    }

    /// Axis length one card claims: its own extent plus the minimum gap.
    #[inline]
    pub fn required_slot(&self) -> f32 {
        self.item_extent + self.min_gap
    }

    /// Derives the usable band for the given viewport extent.
    ///
    /// When the buffers meet or exceed the viewport the band collapses to
    /// zero length at `leading_buffer` rather than going negative, so callers
    /// never sample from an inverted range.
    pub fn usable_band(&self, viewport_extent: f32) -> UsableBand {
        let length = (viewport_extent - self.leading_buffer - self.trailing_buffer).max(0.0);
        UsableBand {
            start: self.leading_buffer,
            length,
        }
    }
}

/// The interval `[start, start + length]` available for card placement.
///
/// `length` is always non-negative; a zero-length band means the buffers
/// consumed the whole viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsableBand {
    start: f32,
    length: f32,
}

impl UsableBand {
    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.length
    }

    /// Maximum number of cards that fit while honoring `required_slot`.
    ///
    /// A non-positive slot (zero-size cards with no gap) reports zero so the
    /// caller routes through the even-spacing fallback instead of dividing
    /// by zero.
    pub fn max_fit(&self, required_slot: f32) -> usize {
        if required_slot <= 0.0 {
            return 0;
        }
        (self.length / required_slot).floor() as usize
    }
}
