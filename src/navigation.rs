use gloo::events::EventListener;
use yew::prelude::*;

use folio_core::content::{NavLink, NAV_LINKS, PROFILE};
use folio_core::viewport;

use crate::dom;
use crate::yew_app::use_page_context;

const MENU_STAGGER_MS: usize = 100;

fn resume_href() -> String {
    format!("./{}", PROFILE.resume)
}

/// Fixed top bar: section links, resume download, page progress and the
/// mobile overlay menu.
#[function_component(Navigation)]
pub(crate) fn navigation() -> Html {
    let context = use_page_context();
    let scrolled = use_state_eq(|| false);
    let progress = use_state_eq(|| 0.0_f64);
    let menu_open = use_state(|| false);
    {
        let scrolled = scrolled.setter();
        let progress = progress.setter();
        let threshold = context.config.page.scrolled_threshold_px;
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let update = move || {
                let Some(metrics) = dom::page_metrics() else {
                    return;
                };
                scrolled.set(viewport::is_scrolled(metrics.scroll_y, threshold));
                let percent = viewport::scroll_percent(
                    metrics.scroll_y,
                    metrics.document_height,
                    metrics.viewport_height,
                );
                progress.set((percent * 10.0).round() / 10.0);
            };
            update();
            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "scroll", move |_| update()));
            move || drop(listener)
        });
    }

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |target: &'static str| {
            dom::scroll_to_section(target);
            menu_open.set(false);
        })
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let link = |link: &'static NavLink, class: &'static str, style: Option<String>| {
        let go_to = go_to.clone();
        let target = link.target;
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            go_to.emit(target);
        });
        html! {
            <a key={link.label} class={class} href={link.href()} {onclick} {style}>
                { link.label }
            </a>
        }
    };

    let logo = {
        let go_to = go_to.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            go_to.emit("hero");
        })
    };
    let open = *menu_open;
    let menu_item_style = |index: usize| {
        if open {
            format!("transition-delay: {}ms;", index * MENU_STAGGER_MS)
        } else {
            "transition-delay: 0ms;".to_string()
        }
    };

    html! {
        <>
            <nav class={classes!("nav", (*scrolled).then_some("nav-scrolled"))}>
                <div class="nav-inner">
                    <a class="nav-logo" href="#hero" onclick={logo}>{ PROFILE.short_name }</a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|item| link(item, "nav-link", None)) }
                        <a class="nav-resume" href={resume_href()} download="">{ "Resume" }</a>
                    </div>
                    <button
                        class="nav-menu-toggle"
                        aria-label={if open { "Close menu" } else { "Open menu" }}
                        onclick={toggle_menu}
                    >
                        { if open { "\u{2715}" } else { "\u{2630}" } }
                    </button>
                </div>
                <div class="nav-progress">
                    <div class="nav-progress-fill" style={format!("width: {}%;", *progress)} />
                </div>
            </nav>
            <div class={classes!("nav-overlay", open.then_some("is-open"))}>
                <div class="nav-overlay-links">
                    {
                        for NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, item)| link(item, "nav-overlay-link", Some(menu_item_style(index))))
                    }
                    <a
                        class="nav-overlay-resume"
                        href={resume_href()}
                        download=""
                        style={menu_item_style(NAV_LINKS.len().saturating_sub(1))}
                    >
                        { "Download Resume" }
                    </a>
                </div>
            </div>
        </>
    }
}
