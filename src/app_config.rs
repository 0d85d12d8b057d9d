use std::cell::RefCell;

use web_sys::UrlSearchParams;

use folio_core::{ConfigError, PageSettings, SnapSettings};

const SNAP_KEYS: &[&str] = &[
    "snap",
    "snap_buffer",
    "snap_min",
    "snap_max",
    "snap_settle_ms",
    "snap_idle_ms",
    "snap_min_width",
    "snap_ease",
];

#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct PageConfig {
    pub(crate) snap: SnapSettings,
    pub(crate) page: PageSettings,
}

thread_local! {
    static PAGE_CONFIG: RefCell<Option<PageConfig>> = RefCell::new(None);
}

pub(crate) fn page_config() -> PageConfig {
    if let Some(config) = PAGE_CONFIG.with(|slot| slot.borrow().clone()) {
        return config;
    }
    let config = load_page_config();
    PAGE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config.clone());
    });
    config
}

fn load_page_config() -> PageConfig {
    let mut config = PageConfig::default();
    for (key, value) in build_time_overrides() {
        apply(&mut config.snap, key, &value);
    }
    for (key, value) in query_overrides() {
        apply(&mut config.snap, &key, &value);
    }
    config
}

fn apply(settings: &mut SnapSettings, key: &str, value: &str) {
    if let Err(err) = settings.apply_override(key, value) {
        report(key, &err);
    }
}

fn report(key: &str, err: &ConfigError) {
    gloo::console::warn!("ignoring snap setting", key.to_string(), err.to_string());
}

fn build_time_overrides() -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();
    if let Some(raw) = option_env!("FOLIO_SNAP_MIN_WIDTH").or(option_env!("TRUNK_PUBLIC_FOLIO_SNAP_MIN_WIDTH")) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            overrides.push(("snap_min_width", trimmed.to_string()));
        }
    }
    if let Some(raw) = option_env!("FOLIO_SNAP_BUFFER") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            overrides.push(("snap_buffer", trimmed.to_string()));
        }
    }
    overrides
}

fn query_overrides() -> Vec<(String, String)> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let search = window.location().search().unwrap_or_default();
    if search.trim().is_empty() {
        return Vec::new();
    }
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return Vec::new();
    };
    SNAP_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (key.to_string(), value)))
        .collect()
}
