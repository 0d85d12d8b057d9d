use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use folio_core::viewport::reveal_reached;

use crate::dom;
use crate::yew_app::use_page_context;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn class_name(self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal-below",
            RevealFrom::Left => "reveal-left",
            RevealFrom::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) from: RevealFrom,
    #[prop_or_default]
    pub(crate) delay_ms: u32,
    /// Viewport fraction the top edge must cross; the page default otherwise.
    #[prop_or_default]
    pub(crate) fraction: Option<f64>,
    #[prop_or_default]
    pub(crate) children: Html,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub(crate) fn reveal(props: &RevealProps) -> Html {
    let context = use_page_context();
    let visible = use_state_eq(|| false);
    let node = use_node_ref();
    let fraction = props
        .fraction
        .unwrap_or(context.config.page.reveal_fraction);
    {
        let node = node.clone();
        let visible = visible.setter();
        use_effect_with(fraction, move |fraction| {
            let fraction = *fraction;
            let done = Rc::new(Cell::new(false));
            let check = move || {
                if done.get() {
                    return;
                }
                let Some(element) = node.cast::<Element>() else {
                    return;
                };
                let Some(metrics) = dom::page_metrics() else {
                    return;
                };
                let top = element.get_bounding_client_rect().top();
                if reveal_reached(top, metrics.viewport_height, fraction) {
                    done.set(true);
                    visible.set(true);
                }
            };
            check();
            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "scroll", move |_| check()));
            move || drop(listener)
        });
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));
    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.from.class_name(),
                (*visible).then_some("is-visible"),
                props.class.clone()
            )}
            {style}
        >
            { props.children.clone() }
        </div>
    }
}
