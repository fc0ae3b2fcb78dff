//! Scroll- and hover-driven animation orchestration.
//!
//! One controller owns the page's animation lifetime: a lazily-probed engine
//! handle, a typed registry of scroll-linked bindings, and a cleanup registry
//! capturing every timer, listener, and animation started here. Sections hand
//! the controller element handles directly; there is no class-name querying
//! across the document.

mod cleanup;
mod engine;
mod intent;
mod scroll;
mod split;
mod timeline;

pub use cleanup::CleanupRegistry;
pub use intent::{Easing, Intent, SlideFrom};
pub use scroll::ScrubKind;
pub use timeline::{Cue, Playback, Step, Timeline};

use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Animation, AnimationPlayState, Element, HtmlElement};

// `Animation.commitStyles()` has no web-sys binding, so it is declared here
// as an extension on the web-sys type.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Animation)]
    type AnimationWithCommitStyles;

    #[wasm_bindgen(method, catch, js_name = commitStyles)]
    fn commit_styles(this: &AnimationWithCommitStyles) -> Result<(), JsValue>;
}

/// Delay before the page-lifetime controller binds anything, letting the
/// section components render their DOM first.
const INIT_DELAY_MS: u64 = 50;

struct ScrubBinding {
    el: Element,
    kind: ScrubKind,
}

#[derive(Default)]
struct MotionCore {
    engine: engine::Engine,
    cleanups: CleanupRegistry,
    scrubs: Vec<ScrubBinding>,
    animations: Vec<Animation>,
    /// Elements carrying an open-ended transform animation. A running
    /// animation's effect value replaces inline style writes, so these and
    /// scrub targets must stay disjoint.
    held: Vec<Element>,
}

impl MotionCore {
    fn play(&mut self, el: &Element, intent: &Intent, extra_delay_ms: f64) {
        if intent.holds_transform_open_ended()
            && self.scrubs.iter().any(|binding| &binding.el == el)
        {
            log::warn!("refusing open-ended transform animation on a scrub-bound element");
            return;
        }
        if let Some(animation) = self.engine.play(el, intent, extra_delay_ms) {
            self.animations.push(animation);
            if intent.holds_transform_open_ended() {
                self.held.push(el.clone());
            }
        }
        self.prune_finished();
    }

    fn register_scrub(&mut self, el: Element, kind: ScrubKind) {
        if self.held.contains(&el) {
            log::warn!("refusing scrub binding on an element with an open-ended animation");
            return;
        }
        self.scrubs.push(ScrubBinding { el, kind });
    }

    /// Commits and cancels finished animations so the live animation list
    /// stays bounded over the page lifetime. Committing first keeps the
    /// final fill state as inline style.
    fn prune_finished(&mut self) {
        self.animations.retain(|animation| {
            if animation.play_state() == AnimationPlayState::Finished {
                let _ = animation
                    .unchecked_ref::<AnimationWithCommitStyles>()
                    .commit_styles();
                animation.cancel();
                false
            } else {
                true
            }
        });
    }

    fn fire(&mut self, step: Step<Element>) {
        match step.cue {
            Cue::Play(intent) => self.play(&step.target, &intent, 0.0),
            Cue::PlayChars { intent, stagger_ms } => {
                for (i, span) in split::split_element(&step.target).iter().enumerate() {
                    self.play(span, &intent, i as f64 * stagger_ms);
                }
            }
            Cue::PlayEach { intent, stagger_ms } => {
                for (i, child) in split::child_elements(&step.target).iter().enumerate() {
                    self.play(child, &intent, i as f64 * stagger_ms);
                }
            }
        }
    }

    fn apply_scrubs(&self) {
        let window = window();
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let root = document().document_element();
        let scroll_height = root.as_ref().map(|el| el.scroll_height() as f64).unwrap_or(0.0);
        let fraction = scroll::page_fraction(scroll_y, scroll_height, viewport_h);

        if let Some(html) = root.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            let _ = html
                .style()
                .set_property("--scroll-hue", &format!("{:.0}", scroll::hue(fraction)));
        }

        for binding in &self.scrubs {
            let progress = if binding.kind == ScrubKind::ProgressBar {
                fraction
            } else {
                let rect = binding.el.get_bounding_client_rect();
                scroll::span_progress(rect.top(), rect.height(), viewport_h)
            };
            if let Some(html) = binding.el.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("transform", &scroll::scrub_transform(&binding.kind, progress));
            }
        }
    }

    fn teardown(&mut self) {
        for animation in self.animations.drain(..) {
            animation.cancel();
        }
        self.scrubs.clear();
        self.held.clear();
        self.cleanups.run();
    }
}

/// Shared handle to the page's motion controller. `Copy`, context-provided;
/// the backing state lives in thread-local arena storage since it holds DOM
/// handles.
#[derive(Clone, Copy)]
pub struct MotionHandle {
    core: StoredValue<MotionCore, LocalStorage>,
}

impl MotionHandle {
    fn new() -> Self {
        Self {
            core: StoredValue::new_local(MotionCore::default()),
        }
    }

    pub fn engine_available(&self) -> bool {
        self.core.with_value(|core| core.engine.available())
    }

    /// Plays one intent on an element immediately.
    pub fn play(&self, el: &Element, intent: Intent) {
        self.core.update_value(|core| core.play(el, &intent, 0.0));
    }

    /// Runs a timeline: arms one timer per step and fires cues as their
    /// offsets elapse. All timers are captured for teardown.
    pub fn run(&self, timeline: Timeline<Element>) {
        for step in timeline.into_steps() {
            let at_ms = u64::from(step.at_ms);
            let handle = *self;
            self.defer(at_ms, move || {
                handle.core.update_value(|core| core.fire(step));
            });
        }
    }

    /// Schedules `action` after `at_ms`, registering the timer for teardown.
    pub fn defer(&self, at_ms: u64, action: impl FnOnce() + 'static) {
        if let Ok(timer) = set_timeout_with_handle(action, Duration::from_millis(at_ms)) {
            self.core
                .with_value(|core| core.cleanups.defer(move || timer.clear()));
        }
    }

    /// Registers a scroll-linked binding for an element handle.
    pub fn register_scrub(&self, el: &Element, kind: ScrubKind) {
        let el = el.clone();
        self.core
            .update_value(|core| core.register_scrub(el, kind));
    }

    /// Recomputes every scrub binding against the current scroll position.
    pub fn apply_scrubs(&self) {
        self.core.with_value(|core| core.apply_scrubs());
    }

    /// Cancels all animations, drops all scrub bindings, and drains the
    /// cleanup registry. Idempotent.
    pub fn teardown(&self) {
        self.core.update_value(|core| core.teardown());
    }
}

/// Creates the motion controller and provides it as context. Call once from
/// the page composer.
pub fn provide_motion() -> MotionHandle {
    let handle = MotionHandle::new();
    provide_context(handle);
    handle
}

pub fn use_motion() -> MotionHandle {
    expect_context::<MotionHandle>()
}

/// Typed element handle out of a mouse event's bound target, for hover
/// micro-interactions.
pub fn hover_target(ev: &leptos::ev::MouseEvent) -> Option<Element> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

/// Page-lifetime scroll-animation controller. Mounted once; after a short
/// delay (so sections have rendered) it applies all registered scroll-linked
/// bindings and keeps them scrubbed on every scroll. Unmounting cancels every
/// animation and timer started through the controller.
#[component]
pub fn ScrollEffects() -> impl IntoView {
    let motion = use_motion();

    Effect::new(move |_| {
        motion.defer(INIT_DELAY_MS, move || {
            // probe once up front so the fallback policy is decided before
            // any section plays its entrance
            let _ = motion.engine_available();
            motion.apply_scrubs();
        });
    });

    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        motion.apply_scrubs();
    });

    on_cleanup(move || motion.teardown());
}
