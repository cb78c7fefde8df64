//! Scroll-reveal bookkeeping for decorative page sections.
//!
//! A viewport-intersection check in the spirit of `IntersectionObserver`:
//! elements are revealed once at least `threshold` of their height lies inside
//! the viewport after the bottom margin is subtracted, and stay revealed.

/// Vertical extent of an element, in viewport coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible, in `0.0..=1.0`.
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport.
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

/// Tracks which of a fixed set of elements have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    options: RevealOptions,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(element_count: usize, options: RevealOptions) -> Self {
        Self {
            options,
            revealed: vec![false; element_count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Re-check every element against the current viewport.
    ///
    /// Returns the indices revealed by this call. `extents` is indexed like the
    /// tracker; extra entries are ignored.
    pub fn observe(&mut self, viewport_height: f64, extents: &[Extent]) -> Vec<usize> {
        let mut newly_revealed = Vec::new();

        for (index, extent) in extents.iter().enumerate().take(self.revealed.len()) {
            if self.revealed[index] {
                continue;
            }
            if intersects(viewport_height, extent, &self.options) {
                self.revealed[index] = true;
                newly_revealed.push(index);
            }
        }

        newly_revealed
    }
}

/// Whether `extent` is visible enough inside `[0, viewport_height - bottom_margin]`.
pub fn intersects(viewport_height: f64, extent: &Extent, options: &RevealOptions) -> bool {
    let visible_bottom = (viewport_height - options.bottom_margin).max(0.0);

    if extent.height <= 0.0 {
        // Zero-height elements count once their edge is inside the area
        return extent.top >= 0.0 && extent.top <= visible_bottom;
    }

    let overlap = (extent.top + extent.height).min(visible_bottom) - extent.top.max(0.0);
    overlap > 0.0 && overlap / extent.height >= options.threshold
}
