use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use folio_core::content::{
    radar_label_position, Experience, Project, SkillCategory, CAPABILITIES, EXPERIENCES, FEATURED,
    PROFILE, PROJECTS, SKILL_CATEGORIES,
};
use folio_core::typing::TYPE_DELAY_MS;
use folio_core::{Ease, Length, Pose, TriggerRange, Tween, TypingCycle};

use crate::dom;
use crate::pin_view::{PartTweens, PinnedSection};
use crate::reveal::{Reveal, RevealFrom};
use crate::scrub_loop::ScrubLoop;

pub(crate) const HERO_PIN_RATIO: f64 = 1.3;
pub(crate) const CAPABILITIES_PIN_RATIO: f64 = 1.3;
pub(crate) const FEATURED_PIN_RATIO: f64 = 1.4;

const RADAR_LABEL_RADIUS: f64 = 48.0;
const EXPERIENCE_LINE: TriggerRange = TriggerRange::new(0.7, 0.3);
const EXPERIENCE_LINE_LAG_SECS: f64 = 0.5;
const HEADING_REVEAL_FRACTION: f64 = 0.8;
const SKILL_STAGGER_MS: u32 = 70;
const PROJECT_STAGGER_MS: u32 = 80;

// The hero holds still through its first stretch of scroll, then exits.
const HERO_TWEENS: PartTweens = &[
    Tween::new(
        "portrait",
        0.7,
        Pose::REST,
        Pose::HIDDEN
            .with_x(Length::vw(-18.0))
            .with_y(Length::vh(10.0))
            .with_scale(0.96),
        Ease::Power2In,
    ),
    Tween::new(
        "text",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_x(Length::vw(12.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "cta",
        0.75,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(8.0)),
        Ease::Power2In,
    ),
];

const CAPABILITIES_TWEENS: PartTweens = &[
    Tween::new("radar", 0.0, Pose::HIDDEN.with_scale(0.72), Pose::REST, Ease::None),
    Tween::new("labels", 0.0, Pose::HIDDEN, Pose::REST, Ease::None),
    Tween::new(
        "headline",
        0.05,
        Pose::HIDDEN.with_x(Length::vw(-40.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "body",
        0.1,
        Pose::HIDDEN.with_y(Length::vh(10.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new("cta", 0.15, Pose::HIDDEN.with_scale(0.9), Pose::REST, Ease::None),
    Tween::new("radar", 0.7, Pose::REST, Pose::HIDDEN.with_scale(1.1), Ease::Power2In),
    Tween::new("labels", 0.7, Pose::REST, Pose::HIDDEN, Ease::Power2In),
    Tween::new(
        "headline",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_x(Length::vw(-18.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "body",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(8.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "cta",
        0.75,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(6.0)),
        Ease::Power2In,
    ),
];

const FEATURED_TWEENS: PartTweens = &[
    Tween::new(
        "outline",
        0.0,
        Pose::HIDDEN.with_x(Length::vw(-50.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "image",
        0.0,
        Pose::HIDDEN.with_y(Length::vh(80.0)).with_scale(0.92),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "title",
        0.08,
        Pose::HIDDEN.with_x(Length::vw(-40.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "desc",
        0.12,
        Pose::HIDDEN.with_x(Length::vw(20.0)),
        Pose::REST,
        Ease::None,
    ),
    Tween::new(
        "outline",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_x(Length::vw(20.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "image",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_y(Length::vh(-30.0)).with_scale(1.04),
        Ease::Power2In,
    ),
    Tween::new(
        "title",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_x(Length::vw(-18.0)),
        Ease::Power2In,
    ),
    Tween::new(
        "desc",
        0.7,
        Pose::REST,
        Pose::HIDDEN.with_x(Length::vw(12.0)),
        Ease::Power2In,
    ),
];

fn scroll_button(label: &'static str, target: &'static str, class: &'static str) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| dom::scroll_to_section(target));
    html! {
        <button class={class} {onclick}>{ label }</button>
    }
}

fn resume_link(class: &'static str) -> Html {
    html! {
        <a class={class} href={format!("./{}", PROFILE.resume)} download="">{ "Resume" }</a>
    }
}

fn tag_list(tags: &'static [&'static str]) -> Html {
    html! {
        <div class="tag-list">
            { for tags.iter().map(|tag| html! { <span key={*tag} class="tag">{ *tag }</span> }) }
        </div>
    }
}

/// Typewriter cycling through the profile roles.
#[function_component(TypingText)]
fn typing_text() -> Html {
    let text = use_state(String::new);
    {
        let text = text.setter();
        use_effect_with((), move |_| {
            let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            if let Some(cycle) = TypingCycle::new(PROFILE.roles) {
                schedule_typing(Rc::new(RefCell::new(cycle)), text, Rc::clone(&timer), TYPE_DELAY_MS);
            }
            move || {
                timer.borrow_mut().take();
            }
        });
    }
    html! {
        <span class="typing-cursor">{ (*text).clone() }</span>
    }
}

fn schedule_typing(
    cycle: Rc<RefCell<TypingCycle>>,
    text: UseStateSetter<String>,
    timer: Rc<RefCell<Option<Timeout>>>,
    delay_ms: u32,
) {
    let slot = Rc::clone(&timer);
    let handle = Timeout::new(delay_ms, move || {
        let next_delay = cycle.borrow_mut().tick();
        text.set(cycle.borrow().text().to_string());
        schedule_typing(cycle, text, timer, next_delay);
    });
    *slot.borrow_mut() = Some(handle);
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let portrait = PROFILE.portrait;
    html! {
        <PinnedSection id="hero" ratio={HERO_PIN_RATIO} tweens={HERO_TWEENS} class="hero">
            <div class="hero-grid-pattern" />
            <div class="hero-layout">
                <div class="hero-portrait" data-part="portrait">
                    <div class="intro intro-portrait">
                        <div class="hero-portrait-glow" />
                        <img
                            src={portrait.src}
                            alt={portrait.alt}
                            width={portrait.width.to_string()}
                            height={portrait.height.to_string()}
                        />
                        <span class="glass badge">{ PROFILE.badge }</span>
                    </div>
                </div>
                <div class="hero-copy">
                    <div class="eyebrow">
                        <span>{ PROFILE.eyebrow }</span>
                        <div class="eyebrow-rule" />
                    </div>
                    <div data-part="text">
                        <h1 class="intro intro-headline">
                            { "Hi, I'm" }
                            <br />
                            <span class="text-gradient">{ PROFILE.name }</span>
                        </h1>
                        <p class="hero-role intro intro-subhead"><TypingText /></p>
                        <p class="hero-tagline">{ PROFILE.tagline }</p>
                    </div>
                    <div class="hero-cta" data-part="cta">
                        <div class="intro intro-cta">
                            { scroll_button("View Projects", "projects", "button button-primary") }
                            { scroll_button("Contact Me", "contact", "button button-ghost") }
                            { resume_link("button button-outline") }
                        </div>
                    </div>
                </div>
            </div>
        </PinnedSection>
    }
}

fn radar(class: &'static str) -> Html {
    html! {
        <svg class={class} viewBox="0 0 400 400" aria-hidden="true">
            <circle cx="200" cy="200" r="180" class="radar-glow" />
            { for [150, 110, 70, 30].into_iter().map(|r| html! {
                <circle key={r.to_string()} cx="200" cy="200" r={r.to_string()} class="radar-ring" />
            }) }
            <line x1="200" y1="20" x2="200" y2="380" class="radar-ring" />
            <line x1="20" y1="200" x2="380" y2="200" class="radar-ring" />
            <g class="radar-sweep">
                <path d="M 200 200 L 200 50 A 150 150 0 0 1 350 200 Z" />
            </g>
            <circle cx="280" cy="120" r="4" class="radar-blip" />
            <circle cx="140" cy="260" r="4" class="radar-blip radar-blip-2" />
            <circle cx="320" cy="240" r="4" class="radar-blip radar-blip-3" />
            <circle cx="100" cy="140" r="4" class="radar-blip radar-blip-4" />
            <circle cx="200" cy="200" r="6" class="radar-core" />
        </svg>
    }
}

fn radar_labels() -> Html {
    let count = CAPABILITIES.labels.len();
    html! {
        <div class="radar-labels" data-part="labels">
            {
                for CAPABILITIES.labels.iter().enumerate().map(|(index, label)| {
                    let (x, y) = radar_label_position(index, count, RADAR_LABEL_RADIUS);
                    html! {
                        <span key={*label} class="radar-label" style={format!("left: {x:.2}%; top: {y:.2}%;")}>
                            { *label }
                        </span>
                    }
                })
            }
        </div>
    }
}

#[function_component(Capabilities)]
pub(crate) fn capabilities() -> Html {
    html! {
        <PinnedSection
            id="capabilities"
            ratio={CAPABILITIES_PIN_RATIO}
            tweens={CAPABILITIES_TWEENS}
            class="capabilities"
        >
            <div class="dot-pattern" />
            <div class="capabilities-copy">
                <h2 class="display-title" data-part="headline">
                    { "Capa" }<span class="text-gradient">{ "bilities" }</span>
                </h2>
                <p class="capabilities-body" data-part="body">{ CAPABILITIES.body }</p>
                <div data-part="cta">
                    { scroll_button("Explore the Radar", "skills", "button button-outline") }
                </div>
            </div>
            <div class="capabilities-radar" data-part="radar">
                { radar("radar") }
                { radar_labels() }
            </div>
        </PinnedSection>
    }
}

#[function_component(FeaturedWork)]
pub(crate) fn featured_work() -> Html {
    html! {
        <PinnedSection id="featured" ratio={FEATURED_PIN_RATIO} tweens={FEATURED_TWEENS} class="featured">
            <div class="featured-outline" data-part="outline" aria-hidden="true">
                <span>{ FEATURED.outline }</span>
            </div>
            <div class="featured-card" data-part="image">
                <pre class="glass-strong featured-code">
                    <span class="code-keyword">{ "class " }</span>
                    <span class="code-name">{ "ADASValidationFramework" }</span>{ ":\n" }
                    { "    " }<span class="code-keyword">{ "def " }</span>
                    <span class="code-name">{ "__init__" }</span>{ "(self):\n" }
                    { "        self.framework = \"pytest\"\n" }
                    { "        self.ci_cd = \"GitHub Actions\"\n" }
                    { "        self.standards = [\"OpenX\", \"ASAM\"]\n" }
                    { "        self.coverage = \"L2/L2+ Features\"" }
                </pre>
            </div>
            <h3 class="featured-title" data-part="title">
                { FEATURED.title }
                <br />
                <span class="text-gradient">{ FEATURED.accent }</span>
            </h3>
            <div class="featured-desc" data-part="desc">
                <p>{ FEATURED.body }</p>
                <div class="button-row">
                    <button class="button button-primary">{ "Read Case Study" }</button>
                    <button class="button button-ghost">{ "View Code" }</button>
                </div>
                { tag_list(FEATURED.tags) }
            </div>
        </PinnedSection>
    }
}

/// Keeps the experience progress line scaled to how far the timeline has
/// scrolled through the viewport.
struct ProgressLine {
    scrub: Rc<ScrubLoop>,
    _listener: EventListener,
}

impl ProgressLine {
    fn start(timeline_ref: &NodeRef, line_ref: &NodeRef) -> Option<Self> {
        let timeline = timeline_ref.cast::<Element>()?;
        let line = line_ref.cast::<Element>()?;
        let window = web_sys::window()?;
        let scrub = ScrubLoop::new(EXPERIENCE_LINE_LAG_SECS, move |progress| {
            dom::set_style(&line, &format!("transform: scaleY({progress:.4});"));
        });
        let progress = move || {
            let metrics = dom::page_metrics()?;
            let rect = timeline.get_bounding_client_rect();
            Some(EXPERIENCE_LINE.progress(
                metrics.scroll_y,
                rect.top() + metrics.scroll_y,
                rect.height(),
                metrics.viewport_height,
            ))
        };
        scrub.jump(progress().unwrap_or(0.0));
        let driven = Rc::clone(&scrub);
        let listener = EventListener::new(&window, "scroll", move |_| {
            if let Some(value) = progress() {
                driven.seek(value);
            }
        });
        Some(Self {
            scrub,
            _listener: listener,
        })
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        self.scrub.stop();
    }
}

fn experience_card(index: usize, entry: &'static Experience) -> Html {
    let from = if index % 2 == 0 {
        RevealFrom::Left
    } else {
        RevealFrom::Right
    };
    let side = if index % 2 == 0 { "timeline-item-left" } else { "timeline-item-right" };
    html! {
        <Reveal key={entry.company} class={classes!("timeline-item", side)} from={from} fraction={Some(HEADING_REVEAL_FRACTION)}>
            <div class="timeline-dot" />
            <div class="glass timeline-card">
                <div class="timeline-card-header">
                    <div>
                        <span class="timeline-company">{ entry.company }</span>
                        <h3 class="timeline-role">{ entry.role }</h3>
                    </div>
                    <span class="timeline-duration">{ entry.duration }</span>
                </div>
                <ul class="timeline-highlights">
                    { for entry.highlights.iter().map(|item| html! { <li key={*item}>{ *item }</li> }) }
                </ul>
                { tag_list(entry.technologies) }
            </div>
        </Reveal>
    }
}

#[function_component(ExperienceSection)]
pub(crate) fn experience_section() -> Html {
    let timeline_ref = use_node_ref();
    let line_ref = use_node_ref();
    {
        let timeline_ref = timeline_ref.clone();
        let line_ref = line_ref.clone();
        use_effect_with((), move |_| {
            let line = ProgressLine::start(&timeline_ref, &line_ref);
            move || drop(line)
        });
    }
    html! {
        <section id="experience" class="section experience">
            <div class="section-inner">
                <Reveal class="section-heading" fraction={Some(HEADING_REVEAL_FRACTION)}>
                    <span class="eyebrow-label">{ "Career Journey" }</span>
                    <h2 class="section-title">{ "Work " }<span class="text-gradient">{ "Experience" }</span></h2>
                    <p class="section-lede">
                        { "3+ years of experience in ADAS & SDV validation, building automation frameworks and driving CI/CD pipelines." }
                    </p>
                </Reveal>
                <div class="timeline" ref={timeline_ref}>
                    <div class="timeline-track">
                        <div class="timeline-progress" ref={line_ref} />
                    </div>
                    { for EXPERIENCES.iter().enumerate().map(|(index, entry)| experience_card(index, entry)) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    category: &'static SkillCategory,
    hovered: bool,
    on_hover: Callback<bool>,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let category = props.category;
    let enter = props.on_hover.reform(|_: MouseEvent| true);
    let leave = props.on_hover.reform(|_: MouseEvent| false);
    let touch_start = props.on_hover.reform(|_: TouchEvent| true);
    let touch_end = props.on_hover.reform(|_: TouchEvent| false);
    let touch_cancel = props.on_hover.reform(|_: TouchEvent| false);
    html! {
        <div
            class={classes!(
                "skill-card",
                format!("accent-{}", category.accent),
                props.hovered.then_some("is-hovered")
            )}
            onmouseenter={enter}
            onmouseleave={leave}
            ontouchstart={touch_start}
            ontouchend={touch_end}
            ontouchcancel={touch_cancel}
        >
            <h3 class="skill-card-title">{ category.name }</h3>
            <div class="skill-list">
                {
                    for category.skills.iter().map(|skill| {
                        let width = if props.hovered { skill.level } else { 0 };
                        html! {
                            <div key={skill.name} class="skill">
                                <div class="skill-label">
                                    <span>{ skill.name }</span>
                                    <span class="skill-level">{ format!("{}%", skill.level) }</span>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-bar-fill" style={format!("width: {width}%;")} />
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[function_component(Skills)]
pub(crate) fn skills() -> Html {
    let hovered = use_state_eq(|| None::<usize>);
    html! {
        <section id="skills" class="section skills">
            <div class="section-inner">
                <Reveal class="section-heading centered" fraction={Some(HEADING_REVEAL_FRACTION)}>
                    <span class="eyebrow-label">{ "Technical Expertise" }</span>
                    <h2 class="section-title">{ "Skills & " }<span class="text-gradient">{ "Technologies" }</span></h2>
                    <p class="section-lede">
                        { "A comprehensive toolkit for automotive software validation, automation, and CI/CD pipeline development." }
                    </p>
                </Reveal>
                <div class="skill-grid">
                    {
                        for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| {
                            let hovered_handle = hovered.clone();
                            let on_hover = Callback::from(move |active: bool| {
                                if active {
                                    hovered_handle.set(Some(index));
                                } else if *hovered_handle == Some(index) {
                                    hovered_handle.set(None);
                                }
                            });
                            html! {
                                <Reveal key={category.name} delay_ms={index as u32 * SKILL_STAGGER_MS}>
                                    <SkillCard
                                        category={category}
                                        hovered={*hovered == Some(index)}
                                        {on_hover}
                                    />
                                </Reveal>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}

fn project_card(index: usize, project: &'static Project) -> Html {
    html! {
        <Reveal key={project.title} delay_ms={index as u32 * PROJECT_STAGGER_MS}>
            <article class={classes!("project-card", format!("accent-{}", project.accent))}>
                <h3 class="project-title">{ project.title }</h3>
                <p class="project-description">{ project.description }</p>
                { tag_list(project.tags) }
            </article>
        </Reveal>
    }
}

#[function_component(Projects)]
pub(crate) fn projects() -> Html {
    html! {
        <section id="projects" class="section projects">
            <div class="section-inner">
                <Reveal class="section-heading" fraction={Some(HEADING_REVEAL_FRACTION)}>
                    <span class="eyebrow-label">{ "Selected Work" }</span>
                    <h2 class="section-title">{ "Key " }<span class="text-gradient">{ "Projects" }</span></h2>
                </Reveal>
                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| project_card(index, project)) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="footer">
            <div class="footer-rule" />
            <p class="footer-message">{ "Thanks for stopping by." }</p>
            <p class="footer-credit">
                { "Designed & built with care by " }
                <span class="footer-name">{ PROFILE.name }</span>
            </p>
            <div class="footer-links">
                { resume_link("footer-link") }
                <span class="footer-dot">{ "\u{2022}" }</span>
                <a class="footer-link" href="#hero">{ "Colophon" }</a>
            </div>
            <p class="footer-stack">{ "Rust \u{2022} Yew \u{2022} WebAssembly" }</p>
            <p class="footer-copyright">{ format!("\u{a9} {year} {}. All rights reserved.", PROFILE.name) }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Timeline;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn hero_rests_until_its_exit() {
        let timeline = Timeline::new(HERO_TWEENS);
        for progress in [0.0, 0.5] {
            for (part, pose) in timeline.sample_all(progress) {
                assert_eq!(pose, Pose::REST, "hero part {part} moved at {progress}");
            }
        }
    }

    #[wasm_bindgen_test]
    fn pinned_timelines_end_fully_exited() {
        for tweens in [HERO_TWEENS, CAPABILITIES_TWEENS, FEATURED_TWEENS] {
            let timeline = Timeline::new(tweens);
            for (part, pose) in timeline.sample_all(1.0) {
                assert_eq!(pose.opacity, 0.0, "part {part} still visible after the pin");
            }
        }
    }
}
