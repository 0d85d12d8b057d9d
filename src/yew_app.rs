use yew::prelude::*;

use folio_core::Layout;

use crate::app_config::{self, PageConfig};
use crate::boot::{self, BootPhase};
use crate::contact_view::Contact;
use crate::dom;
use crate::navigation::Navigation;
use crate::scroll_runtime;
use crate::sections::{Capabilities, ExperienceSection, FeaturedWork, Footer, Hero, Projects, Skills};
use crate::snap_engine::SnapEngine;

/// Page-wide settings shared with every section. The layout is decided once
/// at mount; resizing across the breakpoint keeps the initial choice.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageContext {
    pub(crate) layout: Layout,
    pub(crate) config: PageConfig,
}

impl PageContext {
    pub(crate) fn detect() -> Self {
        let config = app_config::page_config();
        let layout = Layout::from_width(dom::viewport_width(), config.snap.min_viewport_width);
        Self { layout, config }
    }
}

#[hook]
pub(crate) fn use_page_context() -> PageContext {
    use_context::<PageContext>().unwrap_or_else(PageContext::detect)
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let context = use_memo((), |_| PageContext::detect());
    {
        let snap = context.config.snap.clone();
        use_effect_with((), move |_| {
            boot::advance(BootPhase::Measuring);
            let engine = SnapEngine::install(snap);
            boot::advance(BootPhase::Ready);
            move || {
                drop(engine);
                scroll_runtime::clear();
            }
        });
    }
    html! {
        <ContextProvider<PageContext> context={(*context).clone()}>
            <div class={classes!("page", context.layout.class_name())}>
                <div class="grain-overlay" />
                <div class="vignette" />
                <Navigation />
                <main class="page-main">
                    <Hero />
                    <Capabilities />
                    <FeaturedWork />
                    <ExperienceSection />
                    <Skills />
                    <Projects />
                    <Contact />
                    <Footer />
                </main>
            </div>
        </ContextProvider<PageContext>>
    }
}

pub(crate) fn run_app() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match document.get_element_by_id("app") {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            boot::fail("missing #app mount node");
            gloo::console::error!("missing #app mount node; rendering into body");
            yew::Renderer::<App>::new().render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use folio_core::content::SECTION_IDS;
    use gloo::timers::future::TimeoutFuture;
    use js_sys::Date;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn layout_follows_snap_breakpoint() {
        let context = PageContext::detect();
        let expected = Layout::from_width(
            dom::viewport_width(),
            context.config.snap.min_viewport_width,
        );
        assert_eq!(context.layout, expected);
    }

    fn mount_into_fresh_root() -> web_sys::Document {
        set_panic_hook();
        let document = gloo::utils::document();
        let root = document.create_element("div").expect("test root element");
        gloo::utils::body()
            .append_child(&root)
            .expect("test root attached");
        yew::Renderer::<App>::with_root(root).render();
        document
    }

    async fn wait_until(what: &str, ready: impl Fn() -> bool) {
        let deadline = Date::now() + 5000.0;
        while !ready() {
            assert!(Date::now() < deadline, "timed out waiting for {what}");
            TimeoutFuture::new(10).await;
        }
    }

    #[wasm_bindgen_test(async)]
    async fn app_renders_every_section() {
        let document = mount_into_fresh_root();
        wait_until("contact section", || document.get_element_by_id("contact").is_some()).await;
        for id in SECTION_IDS {
            assert!(
                document.get_element_by_id(id).is_some(),
                "section #{id} missing"
            );
        }
    }

    #[wasm_bindgen_test(async)]
    async fn desktop_layout_registers_pins() {
        if !PageContext::detect().layout.is_desktop() {
            return;
        }
        mount_into_fresh_root();
        wait_until("pinned sections", || scroll_runtime::pinned_sections().len() >= 4).await;
        let pins = scroll_runtime::pins();
        assert!(pins.windows(2).all(|pair| pair[0].start <= pair[1].start));
    }
}
