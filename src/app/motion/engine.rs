//! The animation engine handle.
//!
//! One process-wide, lazily-probed wrapper over the Web Animations API.
//! Every consumer shares the single capability probe and the single fallback
//! policy: if the API is missing or a play call fails, the target element is
//! forced visible and the failure is logged. Visibility never depends on the
//! engine being available: elements are only hidden by engine-owned
//! keyframes, so without an engine the page is simply static.

use std::cell::OnceCell;

use js_sys::{Array, Object, Reflect};
use leptos::prelude::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Animation, Element, FillMode, HtmlElement, KeyframeAnimationOptions,
    PlaybackDirection};

use super::intent::{Intent, MotionSpec, Repeat};

#[derive(Default)]
pub struct Engine {
    supported: OnceCell<bool>,
}

impl Engine {
    /// Whether the Web Animations API is present. Probed once per page.
    pub fn available(&self) -> bool {
        *self.supported.get_or_init(|| {
            let supported = document()
                .create_element("div")
                .map(|el| Reflect::has(el.as_ref(), &JsValue::from_str("animate")).unwrap_or(false))
                .unwrap_or(false);
            if !supported {
                log::warn!("web animations API unavailable; page renders static");
            }
            supported
        })
    }

    /// Plays `intent` on `el`, with `extra_delay_ms` added on top of the
    /// intent's own delay (used for stagger). Returns the animation handle
    /// so the caller can cancel it on teardown. On any failure the element
    /// is left fully visible.
    pub fn play(&self, el: &Element, intent: &Intent, extra_delay_ms: f64) -> Option<Animation> {
        if !self.available() {
            ensure_visible(el);
            return None;
        }
        let mut spec = intent.spec();
        spec.delay_ms += extra_delay_ms;
        match play_spec(el, &spec) {
            Ok(animation) => Some(animation),
            Err(err) => {
                log::warn!("animation on <{}> failed: {err:?}", el.tag_name());
                ensure_visible(el);
                None
            }
        }
    }
}

fn play_spec(el: &Element, spec: &MotionSpec) -> Result<Animation, JsValue> {
    let frames = Array::new();
    for keyframe in &spec.keyframes {
        let frame = Object::new();
        for (prop, value) in &keyframe.props {
            Reflect::set(&frame, &JsValue::from_str(prop), &JsValue::from_str(value))?;
        }
        frames.push(&frame);
    }

    if let Some(origin) = spec.transform_origin {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.style().set_property("transform-origin", origin)?;
        }
    }

    let options = KeyframeAnimationOptions::new();
    options.set_duration(&JsValue::from_f64(spec.duration_ms));
    options.set_delay(spec.delay_ms);
    options.set_easing(spec.easing.css());
    options.set_fill(FillMode::Both);
    if spec.repeat == Repeat::Mirror {
        options.set_iterations(f64::INFINITY);
        options.set_direction(PlaybackDirection::Alternate);
    }

    let frames: &Object = frames.as_ref();
    Ok(el.animate_with_keyframe_animation_options(Some(frames), &options))
}

fn ensure_visible(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("opacity", "1");
    }
}
