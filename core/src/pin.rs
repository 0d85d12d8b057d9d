use crate::snap::PinnedRegion;

/// Scroll distance a pinned section holds, in pixels of document scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinSpan {
    pub start: f64,
    pub end: Option<f64>,
    pub pinned: bool,
}

impl PinSpan {
    pub fn pinned(start: f64, end: f64) -> Self {
        Self {
            start,
            end: Some(end),
            pinned: true,
        }
    }

    /// Span for a section whose top sticks to the viewport top for
    /// `ratio * viewport_height` pixels.
    pub fn from_section(top: f64, viewport_height: f64, ratio: f64) -> Self {
        let distance = (viewport_height * ratio).max(0.0);
        Self::pinned(top, top + distance)
    }

    pub fn end_or_start(&self) -> f64 {
        self.end.unwrap_or(self.start)
    }

    pub fn length(&self) -> f64 {
        (self.end_or_start() - self.start).max(0.0)
    }

    pub fn normalize(&self, max_scroll: f64) -> Option<PinnedRegion> {
        if !max_scroll.is_finite() || max_scroll <= 0.0 {
            return None;
        }
        if !self.start.is_finite() || !self.end_or_start().is_finite() {
            return None;
        }
        Some(PinnedRegion::new(
            self.start / max_scroll,
            self.end_or_start() / max_scroll,
        ))
    }

    /// Fraction of the pin scrolled through at `offset`, clamped to `[0, 1]`.
    pub fn progress(&self, offset: f64) -> f64 {
        let length = self.length();
        if length <= 0.0 {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / length).clamp(0.0, 1.0)
    }
}
