use crate::config::SnapSettings;
use crate::pin::PinSpan;

/// A pinned section expressed as a fraction of the total scroll distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedRegion {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl PinnedRegion {
    /// `end` below `start` collapses to a zero-span region at `start`.
    pub fn new(start: f64, end: f64) -> Self {
        let end = end.max(start);
        Self {
            start,
            end,
            center: start + (end - start) * 0.5,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, value: f64, buffer: f64) -> bool {
        value >= self.start - buffer && value <= self.end + buffer
    }
}

/// Maps a normalized scroll position to the position the page should settle on.
///
/// Positions inside a pinned region (widened by `buffer` on both sides) snap to
/// the nearest region center; everything else scrolls freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResolver {
    regions: Vec<PinnedRegion>,
    buffer: f64,
}

impl SnapResolver {
    pub fn new(mut regions: Vec<PinnedRegion>, buffer: f64) -> Self {
        regions.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { regions, buffer }
    }

    /// Builds the resolver from raw pin spans. Returns `None` when the page has
    /// nothing to snap to: no scrollable overflow or no pinned span.
    pub fn from_pins(pins: &[PinSpan], max_scroll: f64, settings: &SnapSettings) -> Option<Self> {
        if !max_scroll.is_finite() || max_scroll <= 0.0 {
            return None;
        }
        let regions: Vec<PinnedRegion> = pins
            .iter()
            .filter(|pin| pin.pinned)
            .filter_map(|pin| pin.normalize(max_scroll))
            .collect();
        if regions.is_empty() {
            return None;
        }
        Some(Self::new(regions, settings.buffer))
    }

    pub fn regions(&self) -> &[PinnedRegion] {
        &self.regions
    }

    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn in_pinned(&self, value: f64) -> bool {
        self.regions
            .iter()
            .any(|region| region.contains(value, self.buffer))
    }

    pub fn resolve(&self, value: f64) -> f64 {
        if !value.is_finite() || !self.in_pinned(value) {
            return value;
        }
        let Some(first) = self.regions.first() else {
            return value;
        };
        // strict `<` keeps the earliest region on exact ties
        self.regions.iter().fold(first.center, |closest, region| {
            if (region.center - value).abs() < (closest - value).abs() {
                region.center
            } else {
                closest
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_center_is_midpoint() {
        let region = PinnedRegion::new(0.2, 0.6);
        assert!((region.center - 0.4).abs() < 1e-12);
        assert!((region.span() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn inverted_region_collapses_to_start() {
        let region = PinnedRegion::new(0.5, 0.3);
        assert_eq!(region.end, 0.5);
        assert_eq!(region.center, 0.5);
    }

    #[test]
    fn regions_are_sorted_on_construction() {
        let resolver = SnapResolver::new(
            vec![PinnedRegion::new(0.6, 0.7), PinnedRegion::new(0.1, 0.2)],
            0.02,
        );
        assert_eq!(resolver.regions()[0].start, 0.1);
        assert_eq!(resolver.regions()[1].start, 0.6);
    }

    #[test]
    fn nan_passes_through() {
        let resolver = SnapResolver::new(vec![PinnedRegion::new(0.0, 1.0)], 0.02);
        assert!(resolver.resolve(f64::NAN).is_nan());
    }
}
