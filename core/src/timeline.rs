use std::fmt;

use crate::ease::Ease;

pub const DEFAULT_TWEEN_DURATION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Vw,
    Vh,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const ZERO: Length = Length::px(0.0);

    pub const fn px(value: f64) -> Self {
        Self { value, unit: Unit::Px }
    }

    pub const fn vw(value: f64) -> Self {
        Self { value, unit: Unit::Vw }
    }

    pub const fn vh(value: f64) -> Self {
        Self { value, unit: Unit::Vh }
    }

    /// Interpolates between two lengths. A zero endpoint adopts the unit of the
    /// other one, so `0 -> -18vw` animates in `vw`.
    pub fn lerp(self, to: Length, t: f64) -> Length {
        if t >= 1.0 {
            return to;
        }
        if t <= 0.0 {
            return self;
        }
        let unit = if self.unit == to.unit || self.value == 0.0 {
            to.unit
        } else if to.value == 0.0 {
            self.unit
        } else if t < 0.5 {
            return self;
        } else {
            return to;
        };
        Length {
            value: self.value + (to.value - self.value) * t,
            unit,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", trim_float(self.value), self.unit.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: Length,
    pub y: Length,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        x: Length::ZERO,
        y: Length::ZERO,
        scale: 1.0,
        opacity: 1.0,
    };

    pub const HIDDEN: Pose = Pose {
        x: Length::ZERO,
        y: Length::ZERO,
        scale: 1.0,
        opacity: 0.0,
    };

    pub const fn with_x(mut self, x: Length) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: Length) -> Self {
        self.y = y;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Endpoints are returned exactly so settled parts compare equal to
    /// their rest pose.
    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        if t >= 1.0 {
            return to;
        }
        if t <= 0.0 {
            return self;
        }
        Pose {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            scale: self.scale + (to.scale - self.scale) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: translate3d({}, {}, 0) scale({}); opacity: {};",
            self.x,
            self.y,
            trim_float(self.scale),
            trim_float(self.opacity.clamp(0.0, 1.0))
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<K> {
    pub target: K,
    pub at: f64,
    pub duration: f64,
    pub from: Pose,
    pub to: Pose,
    pub ease: Ease,
}

impl<K> Tween<K> {
    pub const fn new(target: K, at: f64, from: Pose, to: Pose, ease: Ease) -> Self {
        Self {
            target,
            at,
            duration: DEFAULT_TWEEN_DURATION,
            from,
            to,
            ease,
        }
    }

    pub fn end(&self) -> f64 {
        self.at + self.duration.max(0.0)
    }

    fn sample(&self, time: f64) -> Pose {
        let local = if self.duration <= 0.0 {
            1.0
        } else {
            (time - self.at) / self.duration
        };
        self.from.lerp(self.to, self.ease.apply(local))
    }
}

/// A scroll-scrubbed timeline: tweens are placed at timeline positions and the
/// whole timeline is sampled by a progress value in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<K> {
    tweens: Vec<Tween<K>>,
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new(tweens: &[Tween<K>]) -> Self {
        let mut tweens = tweens.to_vec();
        tweens.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { tweens }
    }

    pub fn duration(&self) -> f64 {
        self.tweens
            .iter()
            .map(Tween::end)
            .fold(0.0, f64::max)
    }

    pub fn targets(&self) -> Vec<K> {
        let mut targets = Vec::new();
        for tween in &self.tweens {
            if !targets.contains(&tween.target) {
                targets.push(tween.target);
            }
        }
        targets
    }

    pub fn sample(&self, target: K, progress: f64) -> Option<Pose> {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let time = progress * self.duration();
        let mut tweens = self.tweens.iter().filter(|tween| tween.target == target);
        let first = tweens.next()?;
        let mut active = first;
        for tween in tweens {
            if tween.at <= time {
                active = tween;
            }
        }
        if time < active.at {
            return Some(active.from);
        }
        Some(active.sample(time))
    }

    pub fn sample_all(&self, progress: f64) -> Vec<(K, Pose)> {
        self.targets()
            .into_iter()
            .filter_map(|target| self.sample(target, progress).map(|pose| (target, pose)))
            .collect()
    }
}

/// Smooths displayed progress toward the scroll-driven progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    current: f64,
    lag_secs: f64,
}

impl Scrub {
    pub fn new(lag_secs: f64) -> Self {
        Self {
            current: 0.0,
            lag_secs: lag_secs.max(0.0),
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn jump(&mut self, progress: f64) {
        self.current = progress;
    }

    pub fn update(&mut self, target: f64, dt_secs: f64) -> f64 {
        if self.lag_secs <= 0.0 || !dt_secs.is_finite() {
            self.current = target;
            return self.current;
        }
        let alpha = 1.0 - (-dt_secs.max(0.0) / self.lag_secs).exp();
        self.current += (target - self.current) * alpha;
        if (target - self.current).abs() < 1e-4 {
            self.current = target;
        }
        self.current
    }

    pub fn is_settled(&self, target: f64) -> bool {
        self.current == target
    }
}

/// Progress of a non-pinned element between two viewport anchor lines.
///
/// `start_fraction` is where the element top must reach (0.7 = 70% down the
/// viewport); `end_fraction` is where its bottom must reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRange {
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl TriggerRange {
    pub const fn new(start_fraction: f64, end_fraction: f64) -> Self {
        Self {
            start_fraction,
            end_fraction,
        }
    }

    pub fn progress(&self, scroll_y: f64, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        let start = element_top - viewport_height * self.start_fraction;
        let end = element_top + element_height - viewport_height * self.end_fraction;
        if end <= start {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}

fn trim_float(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
