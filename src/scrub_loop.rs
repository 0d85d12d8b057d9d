use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};

use folio_core::Scrub;

const FALLBACK_FRAME_SECS: f64 = 1.0 / 60.0;

/// Drives a scrubbed progress value toward a scroll-derived target, one
/// animation frame at a time, and hands every intermediate value to `apply`.
pub(crate) struct ScrubLoop {
    scrub: RefCell<Scrub>,
    target: Cell<f64>,
    last_frame: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    apply: Box<dyn Fn(f64)>,
}

impl ScrubLoop {
    pub(crate) fn new(lag_secs: f64, apply: impl Fn(f64) + 'static) -> Rc<Self> {
        Rc::new(Self {
            scrub: RefCell::new(Scrub::new(lag_secs)),
            target: Cell::new(0.0),
            last_frame: Cell::new(None),
            frame: RefCell::new(None),
            apply: Box::new(apply),
        })
    }

    /// Places the scrub at `progress` without easing.
    pub(crate) fn jump(&self, progress: f64) {
        self.target.set(progress);
        self.scrub.borrow_mut().jump(progress);
        (self.apply)(progress);
    }

    pub(crate) fn seek(self: &Rc<Self>, progress: f64) {
        if self.target.get() == progress && self.frame.borrow().is_some() {
            return;
        }
        self.target.set(progress);
        self.queue_frame();
    }

    pub(crate) fn stop(&self) {
        self.frame.borrow_mut().take();
        self.last_frame.set(None);
    }

    fn queue_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let state = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            state.frame.borrow_mut().take();
            state.step(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn step(self: &Rc<Self>, timestamp: f64) {
        let dt = self
            .last_frame
            .replace(Some(timestamp))
            .map_or(FALLBACK_FRAME_SECS, |last| ((timestamp - last) / 1000.0).max(0.0));
        let target = self.target.get();
        let current = self.scrub.borrow_mut().update(target, dt);
        (self.apply)(current);
        if self.scrub.borrow().is_settled(target) {
            self.last_frame.set(None);
            return;
        }
        self.queue_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn jump_applies_immediately() {
        let seen = Rc::new(Cell::new(-1.0));
        let sink = Rc::clone(&seen);
        let scrub = ScrubLoop::new(0.6, move |value| sink.set(value));
        scrub.jump(0.4);
        assert_eq!(seen.get(), 0.4);
        scrub.stop();
    }
}
