use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use folio_core::{PinSpan, Timeline, Tween};

use crate::dom;
use crate::reveal::Reveal;
use crate::scroll_runtime;
use crate::scrub_loop::ScrubLoop;
use crate::yew_app::use_page_context;

/// Tweens of a pinned section, keyed by the `data-part` of the elements they
/// move.
pub(crate) type PartTweens = &'static [Tween<&'static str>];

#[derive(Properties, PartialEq)]
pub(crate) struct PinnedSectionProps {
    pub(crate) id: &'static str,
    /// Extra scroll the section holds, in viewport heights.
    pub(crate) ratio: f64,
    pub(crate) tweens: PartTweens,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Html,
}

/// A section that sticks to the viewport while its timeline is scrubbed by
/// scroll. On the mobile layout it flows like any other section and fades in
/// once.
#[function_component(PinnedSection)]
pub(crate) fn pinned_section(props: &PinnedSectionProps) -> Html {
    let context = use_page_context();
    let track_ref = use_node_ref();
    let stage_ref = use_node_ref();
    let pinned = context.layout.is_desktop();
    {
        let track_ref = track_ref.clone();
        let stage_ref = stage_ref.clone();
        let section = props.id;
        let tweens = props.tweens;
        let lag = context.config.page.scrub_lag_secs;
        use_effect_with((pinned, props.ratio), move |(pinned, ratio)| {
            let driver = if *pinned {
                PinDriver::start(section, *ratio, tweens, lag, &track_ref, &stage_ref)
            } else {
                None
            };
            move || {
                if let Some(driver) = driver {
                    driver.stop();
                }
            }
        });
    }

    if !pinned {
        return html! {
            <section id={props.id} class={classes!("section-flow", props.class.clone())}>
                <Reveal>{ props.children.clone() }</Reveal>
            </section>
        };
    }
    let track_style = format!("height: calc(100vh + {:.2}vh);", props.ratio * 100.0);
    html! {
        <section
            id={props.id}
            ref={track_ref}
            class={classes!("pin-track", props.class.clone())}
            style={track_style}
        >
            <div ref={stage_ref} class="pin-stage">
                { props.children.clone() }
            </div>
        </section>
    }
}

struct PinDriver {
    section: &'static str,
    track: Element,
    ratio: f64,
    pin_id: u64,
    span: Cell<PinSpan>,
    scrub: Rc<ScrubLoop>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PinDriver {
    fn start(
        section: &'static str,
        ratio: f64,
        tweens: PartTweens,
        lag_secs: f64,
        track_ref: &NodeRef,
        stage_ref: &NodeRef,
    ) -> Option<Rc<Self>> {
        let track = track_ref.cast::<Element>()?;
        let stage = stage_ref.cast::<Element>()?;
        let timeline = Timeline::new(tweens);
        let parts: Vec<(&'static str, Vec<Element>)> = timeline
            .targets()
            .into_iter()
            .map(|part| (part, dom::elements_with_part(&stage, part)))
            .collect();
        for (part, elements) in &parts {
            if elements.is_empty() {
                gloo::console::warn!("pinned section has no element for part", section, *part);
            }
        }
        let scrub = ScrubLoop::new(lag_secs, move |progress| {
            for (part, elements) in &parts {
                let Some(pose) = timeline.sample(*part, progress) else {
                    continue;
                };
                let css = pose.to_css();
                for element in elements {
                    dom::set_style(element, &css);
                }
            }
        });

        let span = measure(&track, ratio);
        let pin_id = scroll_runtime::register_pin(section, span);
        let driver = Rc::new(Self {
            section,
            track,
            ratio,
            pin_id,
            span: Cell::new(span),
            scrub,
            listeners: RefCell::new(Vec::new()),
        });
        driver.scrub.jump(span.progress(dom::scroll_y()));
        driver.install_listeners();
        Some(driver)
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut listeners = Vec::new();
        let driver = Rc::clone(self);
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            driver.on_scroll();
        }));
        // images and fonts shift the page after mount
        for name in ["resize", "load"] {
            let driver = Rc::clone(self);
            listeners.push(EventListener::new(&window, name, move |_| {
                driver.remeasure();
                driver.on_scroll();
            }));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn on_scroll(self: &Rc<Self>) {
        let progress = self.span.get().progress(dom::scroll_y());
        self.scrub.seek(progress);
    }

    fn remeasure(&self) {
        let span = measure(&self.track, self.ratio);
        if span == self.span.get() {
            return;
        }
        gloo::console::log!(
            "pin moved",
            self.section,
            format!("{:.0}..{:.0}", span.start, span.end_or_start())
        );
        self.span.set(span);
        scroll_runtime::update_pin(self.pin_id, span);
    }

    fn stop(&self) {
        self.listeners.borrow_mut().clear();
        self.scrub.stop();
        scroll_runtime::remove_pin(self.pin_id);
    }
}

fn measure(track: &Element, ratio: f64) -> PinSpan {
    let viewport_height = dom::page_metrics()
        .map(|metrics| metrics.viewport_height)
        .unwrap_or(0.0);
    PinSpan::from_section(dom::document_top(track), viewport_height, ratio)
}
