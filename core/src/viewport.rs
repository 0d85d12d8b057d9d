#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn from_width(width: f64, min_desktop_width: u32) -> Self {
        if width >= f64::from(min_desktop_width) {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == Layout::Desktop
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Layout::Desktop => "layout-desktop",
            Layout::Mobile => "layout-mobile",
        }
    }
}

/// Largest scroll offset of a document; zero when it does not overflow.
pub fn max_scroll(document_height: f64, viewport_height: f64) -> f64 {
    let max = document_height - viewport_height;
    if max.is_finite() && max > 0.0 {
        max
    } else {
        0.0
    }
}

pub fn normalized_position(scroll_y: f64, max_scroll: f64) -> Option<f64> {
    if max_scroll <= 0.0 || !max_scroll.is_finite() {
        return None;
    }
    Some((scroll_y / max_scroll).clamp(0.0, 1.0))
}

pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Page progress in percent for the navigation progress bar.
pub fn scroll_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    normalized_position(scroll_y, max_scroll(document_height, viewport_height))
        .map(|position| position * 100.0)
        .unwrap_or(0.0)
}

/// Whether an element's top edge, relative to the viewport, has risen above
/// `fraction` of the viewport height.
pub fn reveal_reached(element_top: f64, viewport_height: f64, fraction: f64) -> bool {
    element_top <= viewport_height * fraction
}
