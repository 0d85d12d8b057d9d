use std::cell::RefCell;

use folio_core::PinSpan;

#[derive(Clone, Debug)]
struct PinEntry {
    id: u64,
    section: String,
    span: PinSpan,
}

#[derive(Default)]
struct Registry {
    pins: Vec<PinEntry>,
    next_id: u64,
    layout_version: u64,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry {
        next_id: 1,
        ..Registry::default()
    });
}

/// Registers a pinned section's span and returns its handle.
pub(crate) fn register_pin(section: &str, span: PinSpan) -> u64 {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id = registry.next_id.saturating_add(1);
        registry.pins.push(PinEntry {
            id,
            section: section.to_string(),
            span,
        });
        registry.layout_version = registry.layout_version.wrapping_add(1);
        id
    })
}

pub(crate) fn update_pin(id: u64, span: PinSpan) {
    REGISTRY.with(|registry| {
        let mut guard = registry.borrow_mut();
        let registry = &mut *guard;
        let Some(entry) = registry.pins.iter_mut().find(|entry| entry.id == id) else {
            return;
        };
        if entry.span == span {
            return;
        }
        entry.span = span;
        registry.layout_version = registry.layout_version.wrapping_add(1);
    });
}

pub(crate) fn remove_pin(id: u64) {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let before = registry.pins.len();
        registry.pins.retain(|entry| entry.id != id);
        if registry.pins.len() != before {
            registry.layout_version = registry.layout_version.wrapping_add(1);
        }
    });
}

/// Pin spans ordered by start offset.
pub(crate) fn pins() -> Vec<PinSpan> {
    REGISTRY.with(|registry| {
        let mut spans: Vec<PinSpan> = registry
            .borrow()
            .pins
            .iter()
            .map(|entry| entry.span)
            .collect();
        spans.sort_by(|a, b| a.start.total_cmp(&b.start));
        spans
    })
}

pub(crate) fn pinned_sections() -> Vec<String> {
    REGISTRY.with(|registry| {
        registry
            .borrow()
            .pins
            .iter()
            .map(|entry| entry.section.clone())
            .collect()
    })
}

/// Bumped whenever a pin is added, moved or removed.
pub(crate) fn layout_version() -> u64 {
    REGISTRY.with(|registry| registry.borrow().layout_version)
}

pub(crate) fn clear() {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if registry.pins.is_empty() {
            return;
        }
        registry.pins.clear();
        registry.layout_version = registry.layout_version.wrapping_add(1);
    });
}
