use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PageMetrics {
    pub(crate) scroll_y: f64,
    pub(crate) viewport_width: f64,
    pub(crate) viewport_height: f64,
    pub(crate) document_height: f64,
}

impl PageMetrics {
    pub(crate) fn max_scroll(&self) -> f64 {
        folio_core::viewport::max_scroll(self.document_height, self.viewport_height)
    }
}

pub(crate) fn page_metrics() -> Option<PageMetrics> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_width = window.inner_width().ok()?.as_f64()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);
    Some(PageMetrics {
        scroll_y,
        viewport_width,
        viewport_height,
        document_height,
    })
}

pub(crate) fn viewport_width() -> f64 {
    page_metrics()
        .map(|metrics| metrics.viewport_width)
        .unwrap_or(0.0)
}

pub(crate) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Jumps the window to `y` without smooth scrolling; snap motion drives its
/// own easing frame by frame.
pub(crate) fn scroll_to_instant(y: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(ScrollBehavior::Instant);
    window.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        gloo::console::warn!("no section with id", id.to_string());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Document-space top of an element.
pub(crate) fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub(crate) fn set_style(element: &Element, css: &str) {
    if let Err(err) = element.set_attribute("style", css) {
        gloo::console::warn!("style write failed", err);
    }
}

pub(crate) fn elements_with_part(root: &Element, part: &str) -> Vec<Element> {
    let selector = format!("[data-part=\"{part}\"]");
    let Ok(list) = root.query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_style_replaces_inline_style() {
        let element = gloo::utils::document()
            .create_element("div")
            .expect("element");
        set_style(&element, "opacity: 0.5;");
        set_style(&element, "opacity: 1;");
        assert_eq!(element.get_attribute("style").as_deref(), Some("opacity: 1;"));
    }

    #[wasm_bindgen_test]
    fn parts_are_found_by_data_attribute() {
        let root = gloo::utils::document()
            .create_element("div")
            .expect("root");
        root.set_inner_html(r#"<p data-part="cta"></p><p data-part="text"></p><p data-part="cta"></p>"#);
        assert_eq!(elements_with_part(&root, "cta").len(), 2);
        assert!(elements_with_part(&root, "portrait").is_empty());
    }
}
