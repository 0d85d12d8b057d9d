use std::cell::Cell;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Global installed by the loading overlay script in `index.html`.
const LOADER_GLOBAL: &str = "__FOLIO_BOOT";

/// Startup phases, in order. `Ready` and `Failed` are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum BootPhase {
    Starting,
    Mounting,
    Measuring,
    Ready,
    Failed,
}

impl BootPhase {
    fn label(self) -> &'static str {
        match self {
            BootPhase::Starting => "Starting",
            BootPhase::Mounting => "Building page",
            BootPhase::Measuring => "Measuring sections",
            BootPhase::Ready => "Ready",
            BootPhase::Failed => "Failed",
        }
    }

    fn is_final(self) -> bool {
        matches!(self, BootPhase::Ready | BootPhase::Failed)
    }
}

thread_local! {
    static PHASE: Cell<BootPhase> = const { Cell::new(BootPhase::Starting) };
}

pub(crate) fn phase() -> BootPhase {
    PHASE.with(Cell::get)
}

/// Moves the overlay forward. Repeated or backward steps are ignored.
pub(crate) fn advance(next: BootPhase) {
    let current = phase();
    if current.is_final() || next <= current || next == BootPhase::Failed {
        return;
    }
    PHASE.with(|slot| slot.set(next));
    if next == BootPhase::Ready {
        call_loader("ready", &[]);
    } else {
        call_loader("setPhase", &[JsValue::from_str(next.label())]);
    }
}

pub(crate) fn fail(message: &str) {
    if phase().is_final() {
        return;
    }
    PHASE.with(|slot| slot.set(BootPhase::Failed));
    call_loader("fail", &[JsValue::from_str(message)]);
}

fn call_loader(method: &str, args: &[JsValue]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(loader) = Reflect::get(&window, &JsValue::from_str(LOADER_GLOBAL)) else {
        return;
    };
    if loader.is_null() || loader.is_undefined() {
        return;
    }
    let Ok(method) = Reflect::get(&loader, &JsValue::from_str(method)) else {
        return;
    };
    let Ok(method) = method.dyn_into::<Function>() else {
        return;
    };
    let args: Array = args.iter().collect();
    if let Err(err) = method.apply(&loader, &args) {
        gloo::console::warn!("boot loader call failed", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn phases_only_move_forward() {
        advance(BootPhase::Measuring);
        advance(BootPhase::Mounting);
        assert!(phase() >= BootPhase::Measuring);
        advance(BootPhase::Ready);
        fail("late failure");
        assert_eq!(phase(), BootPhase::Ready);
    }
}
