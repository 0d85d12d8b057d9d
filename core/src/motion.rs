use crate::config::SnapSettings;
use crate::ease::Ease;

// browsers round scroll offsets, so sub-pixel corrections never settle
const MIN_SNAP_DISTANCE_PX: f64 = 1.0;

/// An eased scroll animation toward a snap target, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMotion {
    from: f64,
    to: f64,
    started_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl SnapMotion {
    /// Returns `None` when the target is already within a pixel.
    pub fn new(
        from: f64,
        to: f64,
        now_ms: f64,
        viewport_height: f64,
        settings: &SnapSettings,
    ) -> Option<Self> {
        if !from.is_finite() || !to.is_finite() {
            return None;
        }
        let distance = (to - from).abs();
        if distance < MIN_SNAP_DISTANCE_PX {
            return None;
        }
        let duration_secs = snap_duration_secs(distance, viewport_height, settings);
        Some(Self {
            from,
            to,
            started_ms: now_ms,
            duration_ms: duration_secs * 1000.0,
            ease: settings.ease,
        })
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn position_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = (now_ms - self.started_ms) / self.duration_ms;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_ms >= self.duration_ms
    }
}

/// Longer jumps take longer, up to one viewport of travel.
pub fn snap_duration_secs(distance_px: f64, viewport_height: f64, settings: &SnapSettings) -> f64 {
    let min = settings.duration_min.max(0.0);
    let max = settings.duration_max.max(min);
    if viewport_height <= 0.0 || !viewport_height.is_finite() {
        return max;
    }
    let ratio = (distance_px.abs() / viewport_height).clamp(0.0, 1.0);
    min + (max - min) * ratio
}
