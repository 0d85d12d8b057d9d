use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use folio_core::content::CONTACT;
use folio_core::{ContactDraft, ContactField, Ease, Length, Pose, SubmitPhase, Tween};

use crate::pin_view::{PartTweens, PinnedSection};

pub(crate) const CONTACT_PIN_RATIO: f64 = 1.3;

const CONTACT_TWEENS: PartTweens = &[
    Tween::new("radar", 0.0, Pose::HIDDEN.with_scale(0.65), Pose::REST, Ease::None),
    Tween::new(
        "headline",
        0.0,
        Pose::HIDDEN.with_y(Length::vh(-30.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "subhead",
        0.08,
        Pose::HIDDEN.with_y(Length::vh(10.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "buttons",
        0.12,
        Pose::HIDDEN.with_y(Length::vh(18.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "form",
        0.15,
        Pose::HIDDEN.with_y(Length::vh(20.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new("radar", 0.7, Pose::REST, Pose::HIDDEN.with_scale(1.12), Ease::Power2In),
    Tween::new(
        "headline",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(-15.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "subhead",
        0.72,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(-10.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "buttons",
        0.75,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(12.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "form",
        0.75,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(12.0)),
        Ease::Power2In,
    ),
];

fn contact_radar() -> Html {
    html! {
        <svg class="contact-radar" viewBox="0 0 400 400" aria-hidden="true">
            <circle cx="200" cy="200" r="190" class="radar-glow" />
            { for [180, 140, 100, 60, 20].into_iter().map(|r| html! {
                <circle key={r.to_string()} cx="200" cy="200" r={r.to_string()} class="radar-ring" />
            }) }
            <line x1="200" y1="10" x2="200" y2="390" class="radar-ring" />
            <line x1="10" y1="200" x2="390" y2="200" class="radar-ring" />
            <g class="radar-sweep">
                <path d="M 200 200 L 200 40 A 160 160 0 0 1 360 200 Z" />
            </g>
            <circle cx="200" cy="200" r="8" class="radar-core" />
        </svg>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let phase = use_state_eq(SubmitPhase::default);
    let timer = use_mut_ref(|| None::<Timeout>);
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    let on_field = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                ContactField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let phase = phase.clone();
        let timer = timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = *phase;
            let delay = match next.begin(&draft) {
                Ok(delay) => delay,
                Err(err) => {
                    gloo::console::warn!("contact form", err.to_string());
                    return;
                }
            };
            phase.set(next);
            schedule_finish(&timer, delay, draft.setter(), phase.setter());
        })
    };

    let current = *phase;
    html! {
        <form class="glass contact-form" data-part="form" {onsubmit}>
            <input
                type="text"
                placeholder="Your Name"
                required=true
                value={draft.name.clone()}
                oninput={on_field(ContactField::Name)}
            />
            <input
                type="email"
                placeholder="Your Email"
                required=true
                value={draft.email.clone()}
                oninput={on_field(ContactField::Email)}
            />
            <textarea
                placeholder="Your Message"
                required=true
                rows="3"
                value={draft.message.clone()}
                oninput={on_field(ContactField::Message)}
            />
            <button
                type="submit"
                class={classes!("button", "contact-submit", (current == SubmitPhase::Sent).then_some("is-sent"))}
                disabled={current != SubmitPhase::Idle}
            >
                if current == SubmitPhase::Submitting {
                    <span class="spinner" aria-label={current.button_label()} />
                } else {
                    { current.button_label() }
                }
            </button>
        </form>
    }
}

/// Runs the stubbed submission: the sending state, then a short confirmation.
fn schedule_finish(
    timer: &Rc<RefCell<Option<Timeout>>>,
    delay_ms: u32,
    draft: UseStateSetter<ContactDraft>,
    phase: UseStateSetter<SubmitPhase>,
) {
    let slot = Rc::clone(timer);
    let handle = Timeout::new(delay_ms, move || {
        let mut next = SubmitPhase::Submitting;
        let mut cleared = ContactDraft::default();
        let Some(notice_ms) = next.finish(&mut cleared) else {
            return;
        };
        draft.set(cleared);
        phase.set(next);
        let dismiss = Timeout::new(notice_ms, move || {
            next.dismiss();
            phase.set(next);
        });
        *slot.borrow_mut() = Some(dismiss);
    });
    *timer.borrow_mut() = Some(handle);
}

#[function_component(Contact)]
pub(crate) fn contact() -> Html {
    html! {
        <PinnedSection id="contact" ratio={CONTACT_PIN_RATIO} tweens={CONTACT_TWEENS} class="contact">
            <div class="dot-pattern" />
            <div class="contact-radar-wrap" data-part="radar">
                { contact_radar() }
            </div>
            <div class="contact-content">
                <h2 class="section-title centered" data-part="headline">
                    { "Ready When " }<span class="text-gradient">{ "You Are" }</span>
                </h2>
                <p class="section-lede centered" data-part="subhead">
                    { "Open to SDV/ADAS roles, automation consulting, and collaborative builds. Let's build something extraordinary together." }
                </p>
                <div class="button-row centered" data-part="buttons">
                    <a class="button button-primary" href={CONTACT.mailto()}>{ "Email Me" }</a>
                    <a class="button button-ghost" href={CONTACT.linkedin} target="_blank" rel="noopener noreferrer">
                        { "LinkedIn" }
                    </a>
                    <a class="button button-ghost" href={CONTACT.github} target="_blank" rel="noopener noreferrer">
                        { "GitHub" }
                    </a>
                </div>
                <ContactForm />
                <p class="contact-location">{ CONTACT.location }</p>
            </div>
        </PinnedSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Timeline;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn contact_form_is_hidden_before_the_pin_and_shown_mid_pin() {
        let timeline = Timeline::new(CONTACT_TWEENS);
        let before = timeline.sample("form", 0.0).expect("form is animated");
        assert_eq!(before.opacity, 0.0);
        let held = timeline.sample("form", 0.55).expect("form is animated");
        assert_eq!(held, Pose::REST);
    }
}
