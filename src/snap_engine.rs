use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Date;

use folio_core::{viewport, SnapMotion, SnapResolver, SnapSettings};

use crate::dom;
use crate::scroll_runtime;

/// Global scroll snap for pinned sections.
///
/// Installed once per page mount. The region set is built after a settle
/// delay so every pinned section has registered, and rebuilt lazily whenever
/// the pin layout changes. Dropping the engine releases every listener, timer
/// and frame it owns.
pub(crate) struct SnapEngine {
    state: Rc<EngineState>,
}

struct EngineState {
    settings: SnapSettings,
    resolver: RefCell<Option<SnapResolver>>,
    resolver_version: Cell<Option<u64>>,
    motion: RefCell<Option<SnapMotion>>,
    listeners: RefCell<Vec<EventListener>>,
    settle_timer: RefCell<Option<Timeout>>,
    idle_timer: RefCell<Option<Timeout>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl SnapEngine {
    /// Returns `None` when snapping is off for this viewport; narrow screens
    /// keep native scrolling.
    pub(crate) fn install(settings: SnapSettings) -> Option<Self> {
        let width = dom::viewport_width();
        if !settings.active_for_width(width) {
            gloo::console::log!("snap disabled", format!("viewport {width}px"));
            return None;
        }
        let state = Rc::new(EngineState {
            settings,
            resolver: RefCell::new(None),
            resolver_version: Cell::new(None),
            motion: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            settle_timer: RefCell::new(None),
            idle_timer: RefCell::new(None),
            frame: RefCell::new(None),
        });
        let settle_state = Rc::clone(&state);
        let timer = Timeout::new(state.settings.settle_delay_ms, move || {
            settle_state.settle_timer.borrow_mut().take();
            settle_state.settle();
        });
        *state.settle_timer.borrow_mut() = Some(timer);
        Some(Self { state })
    }

    #[cfg(test)]
    fn is_armed(&self) -> bool {
        !self.state.listeners.borrow().is_empty()
    }
}

impl Drop for SnapEngine {
    fn drop(&mut self) {
        self.state.teardown();
    }
}

impl EngineState {
    fn settle(self: &Rc<Self>) {
        if !self.refresh_resolver() {
            gloo::console::log!("snap idle: nothing pinned or page not scrollable");
            return;
        }
        if let Some(resolver) = self.resolver.borrow().as_ref() {
            gloo::console::log!(
                "snap ready",
                format!(
                    "{} regions {:?}",
                    resolver.regions().len(),
                    scroll_runtime::pinned_sections()
                )
            );
        }
        self.install_listeners();
    }

    /// Rebuilds the resolver when the pin layout changed. Returns whether a
    /// usable resolver exists.
    fn refresh_resolver(&self) -> bool {
        let version = scroll_runtime::layout_version();
        if self.resolver_version.get() == Some(version) {
            return self.resolver.borrow().is_some();
        }
        let Some(metrics) = dom::page_metrics() else {
            return false;
        };
        let pins = scroll_runtime::pins();
        let resolver = SnapResolver::from_pins(&pins, metrics.max_scroll(), &self.settings);
        let ready = resolver.is_some();
        *self.resolver.borrow_mut() = resolver;
        self.resolver_version.set(Some(version));
        ready
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut listeners = Vec::new();

        let state = Rc::clone(self);
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            state.on_scroll();
        }));

        let state = Rc::clone(self);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            state.resolver_version.set(None);
        }));

        // mousedown covers scrollbar drags, which raise no wheel or key events
        for name in ["wheel", "touchstart", "keydown", "mousedown"] {
            let state = Rc::clone(self);
            listeners.push(EventListener::new(&window, name, move |_| {
                state.cancel_motion();
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn on_scroll(self: &Rc<Self>) {
        if self.motion.borrow().is_some() {
            return;
        }
        let state = Rc::clone(self);
        let timer = Timeout::new(self.settings.scroll_idle_ms, move || {
            state.idle_timer.borrow_mut().take();
            state.on_scroll_end();
        });
        *self.idle_timer.borrow_mut() = Some(timer);
    }

    fn on_scroll_end(self: &Rc<Self>) {
        if self.motion.borrow().is_some() {
            return;
        }
        let Some(metrics) = dom::page_metrics() else {
            return;
        };
        let max_scroll = metrics.max_scroll();
        let Some(value) = viewport::normalized_position(metrics.scroll_y, max_scroll) else {
            return;
        };
        if !self.refresh_resolver() {
            return;
        }
        let target = {
            let resolver = self.resolver.borrow();
            let Some(resolver) = resolver.as_ref() else {
                return;
            };
            resolver.resolve(value) * max_scroll
        };
        let Some(motion) = SnapMotion::new(
            metrics.scroll_y,
            target,
            Date::now(),
            metrics.viewport_height,
            &self.settings,
        ) else {
            return;
        };
        *self.motion.borrow_mut() = Some(motion);
        self.queue_frame();
    }

    fn queue_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let state = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            state.frame.borrow_mut().take();
            state.step();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn step(self: &Rc<Self>) {
        let Some(motion) = *self.motion.borrow() else {
            return;
        };
        let now = Date::now();
        dom::scroll_to_instant(motion.position_at(now));
        if motion.is_finished(now) {
            self.motion.borrow_mut().take();
            return;
        }
        self.queue_frame();
    }

    fn cancel_motion(&self) {
        if self.motion.borrow_mut().take().is_some() {
            self.frame.borrow_mut().take();
        }
    }

    fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.settle_timer.borrow_mut().take();
        self.idle_timer.borrow_mut().take();
        self.frame.borrow_mut().take();
        self.motion.borrow_mut().take();
        self.resolver.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PinSpan;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    const SETTLE_MS: u32 = 20;

    fn test_settings() -> SnapSettings {
        let mut settings = SnapSettings::default();
        settings.min_viewport_width = 0;
        settings.settle_delay_ms = SETTLE_MS;
        settings
    }

    fn tall_spacer(height_px: u32) -> Element {
        let spacer = gloo::utils::document()
            .create_element("div")
            .expect("spacer element");
        spacer
            .set_attribute("style", &format!("height: {height_px}px;"))
            .expect("spacer style");
        gloo::utils::body()
            .append_child(&spacer)
            .expect("spacer attached");
        spacer
    }

    async fn wait_until(what: &str, timeout_ms: f64, ready: impl Fn() -> bool) {
        let deadline = Date::now() + timeout_ms;
        while !ready() {
            assert!(Date::now() < deadline, "timed out waiting for {what}");
            TimeoutFuture::new(10).await;
        }
    }

    async fn settled() {
        TimeoutFuture::new(SETTLE_MS + 50).await;
    }

    #[wasm_bindgen_test]
    fn disabled_engine_installs_nothing() {
        let mut settings = SnapSettings::default();
        settings.enabled = false;
        assert!(SnapEngine::install(settings).is_none());
    }

    #[wasm_bindgen_test]
    fn engine_waits_for_settle_before_listening() {
        let engine = SnapEngine::install(test_settings()).expect("engine installs");
        assert!(!engine.is_armed());
        drop(engine);
    }

    #[wasm_bindgen_test(async)]
    async fn dropping_an_armed_engine_releases_its_state() {
        scroll_runtime::clear();
        let spacer = tall_spacer(6000);
        scroll_runtime::register_pin("pinned", PinSpan::pinned(1000.0, 2000.0));

        let engine = SnapEngine::install(test_settings()).expect("engine installs");
        settled().await;
        assert!(engine.is_armed());

        let weak = Rc::downgrade(&engine.state);
        drop(engine);
        assert!(weak.upgrade().is_none(), "listeners still hold the engine");

        spacer.remove();
        scroll_runtime::clear();
    }

    #[wasm_bindgen_test(async)]
    async fn scroll_end_inside_a_pin_snaps_to_its_center() {
        scroll_runtime::clear();
        dom::scroll_to_instant(0.0);
        let spacer = tall_spacer(6000);
        scroll_runtime::register_pin("pinned", PinSpan::pinned(1000.0, 2000.0));
        let settings = test_settings();
        let timeout_ms = f64::from(settings.scroll_idle_ms) + settings.duration_max * 1000.0 + 2000.0;

        let engine = SnapEngine::install(settings).expect("engine installs");
        settled().await;
        assert!(engine.is_armed());

        dom::scroll_to_instant(1010.0);
        wait_until("snap to the pin center", timeout_ms, || {
            (dom::scroll_y() - 1500.0).abs() <= 1.0
        })
        .await;

        drop(engine);
        dom::scroll_to_instant(0.0);
        spacer.remove();
        scroll_runtime::clear();
    }

    #[wasm_bindgen_test(async)]
    async fn unscrollable_page_never_arms() {
        scroll_runtime::clear();
        scroll_runtime::register_pin("pinned", PinSpan::pinned(0.0, 400.0));
        let body = gloo::utils::body();
        let saved = body.get_attribute("style");
        body.set_attribute("style", "display: none;").expect("hide body");
        let metrics = dom::page_metrics().expect("page metrics");
        assert_eq!(metrics.max_scroll(), 0.0);

        let engine = SnapEngine::install(test_settings()).expect("engine installs");
        settled().await;
        let armed = engine.is_armed();
        let resolver_built = engine.state.resolver.borrow().is_some();
        drop(engine);

        match saved {
            Some(style) => body.set_attribute("style", &style).expect("restore body"),
            None => body.remove_attribute("style").expect("restore body"),
        }
        scroll_runtime::clear();
        assert!(!armed);
        assert!(!resolver_built);
    }

    #[wasm_bindgen_test(async)]
    async fn pointer_press_cancels_a_running_snap() {
        scroll_runtime::clear();
        let spacer = tall_spacer(6000);
        scroll_runtime::register_pin("pinned", PinSpan::pinned(1000.0, 2000.0));
        let settings = test_settings();
        let engine = SnapEngine::install(settings.clone()).expect("engine installs");
        settled().await;
        assert!(engine.is_armed());

        let motion = SnapMotion::new(0.0, 1500.0, Date::now(), 800.0, &settings)
            .expect("motion over a pixel");
        *engine.state.motion.borrow_mut() = Some(motion);
        engine.state.queue_frame();

        let press = web_sys::Event::new("mousedown").expect("mousedown event");
        gloo::utils::window()
            .dispatch_event(&press)
            .expect("dispatch mousedown");
        assert!(engine.state.motion.borrow().is_none());
        assert!(engine.state.frame.borrow().is_none());

        drop(engine);
        dom::scroll_to_instant(0.0);
        spacer.remove();
        scroll_runtime::clear();
    }
}
