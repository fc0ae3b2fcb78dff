//! Hero banner: char-split headline, role tags, CTAs, and the floating
//! parallax orbs.

use leptos::{html, prelude::*};
use web_sys::Element;

use super::content::ROLE_TAGS;
use super::hooks::use_visible_once;
use super::motion::{hover_target, use_motion, Intent, ScrubKind, Timeline};
use super::nav::scroll_to_section;

/// Delay after which entrance writes to transforms have finished and hover
/// micro-interactions may take over the same elements.
const HOVER_READY_MS: u64 = 1800;

#[component]
pub fn Hero() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let greeting_ref = NodeRef::<html::Span>::new();
    let name_ref = NodeRef::<html::Span>::new();
    let subtitle_ref = NodeRef::<html::P>::new();
    let tags_ref = NodeRef::<html::Div>::new();
    let ctas_ref = NodeRef::<html::Div>::new();
    let indicator_ref = NodeRef::<html::Div>::new();
    // each orb is two layers: the outer wrapper carries the parallax scrub,
    // the inner element carries the float animation, so the two transform
    // writers never share a target
    let orb_a_wrap = NodeRef::<html::Div>::new();
    let orb_b_wrap = NodeRef::<html::Div>::new();
    let orb_c_wrap = NodeRef::<html::Div>::new();
    let orb_a_ref = NodeRef::<html::Div>::new();
    let orb_b_ref = NodeRef::<html::Div>::new();
    let orb_c_ref = NodeRef::<html::Div>::new();

    let visible = use_visible_once(section_ref);
    let (hover_ready, set_hover_ready) = signal(false);

    Effect::new(move |_| {
        if !visible.get() {
            return;
        }

        let mut timeline = Timeline::new();
        if let Some(el) = greeting_ref.get_untracked() {
            timeline = timeline.play_chars(
                0,
                Element::from(el),
                Intent::CharRise {
                    rise_pct: 110.0,
                    duration_ms: 700.0,
                    delay_ms: 0.0,
                },
                40.0,
            );
        }
        if let Some(el) = name_ref.get_untracked() {
            timeline = timeline.play_chars(
                300,
                Element::from(el),
                Intent::CharRise {
                    rise_pct: 110.0,
                    duration_ms: 700.0,
                    delay_ms: 0.0,
                },
                50.0,
            );
        }
        if let Some(el) = subtitle_ref.get_untracked() {
            timeline = timeline.play(
                600,
                Element::from(el),
                Intent::EntranceFade {
                    rise_px: 30.0,
                    duration_ms: 800.0,
                    delay_ms: 0.0,
                },
            );
        }
        if let Some(el) = tags_ref.get_untracked() {
            timeline = timeline.play_each(
                800,
                Element::from(el),
                Intent::EntrancePop {
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
                100.0,
            );
        }
        if let Some(el) = ctas_ref.get_untracked() {
            timeline = timeline.play_each(
                1100,
                Element::from(el),
                Intent::EntranceFade {
                    rise_px: 20.0,
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
                150.0,
            );
        }
        if let Some(el) = indicator_ref.get_untracked() {
            timeline = timeline.play(
                1400,
                Element::from(el),
                Intent::EntranceFade {
                    rise_px: 10.0,
                    duration_ms: 500.0,
                    delay_ms: 0.0,
                },
            );
        }
        motion.run(timeline);

        for (orb, amplitude, period) in [
            (orb_a_ref.get_untracked(), 18.0, 6000.0),
            (orb_b_ref.get_untracked(), 26.0, 8000.0),
            (orb_c_ref.get_untracked(), 12.0, 5000.0),
        ] {
            if let Some(el) = orb {
                motion.play(
                    &Element::from(el),
                    Intent::ContinuousFloat {
                        amplitude_px: amplitude,
                        period_ms: period,
                    },
                );
            }
        }

        motion.defer(HOVER_READY_MS, move || set_hover_ready.set(true));
    });

    // parallax depths are registered up front; the controller scrubs them
    Effect::new(move |_| {
        for (wrap, depth) in [
            (orb_a_wrap.get(), 0.4),
            (orb_b_wrap.get(), 0.7),
            (orb_c_wrap.get(), 0.25),
        ] {
            if let Some(el) = wrap {
                motion.register_scrub(&Element::from(el), ScrubKind::Parallax { depth });
            }
        }
    });

    let lift = move |ev: leptos::ev::MouseEvent| {
        if !hover_ready.get_untracked() {
            return;
        }
        if let Some(el) = hover_target(&ev) {
            motion.play(
                &el,
                Intent::HoverLift {
                    scale: 1.05,
                    lift_px: 4.0,
                    duration_ms: 300.0,
                },
            );
        }
    };
    let settle = move |ev: leptos::ev::MouseEvent| {
        if !hover_ready.get_untracked() {
            return;
        }
        if let Some(el) = hover_target(&ev) {
            motion.play(&el, Intent::HoverSettle { duration_ms: 300.0 });
        }
    };

    view! {
        <section
            id="home"
            node_ref=section_ref
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-b from-gray-950 via-gray-900 to-gray-950"
        >
            <div node_ref=orb_a_wrap class="absolute top-1/4 left-1/5 w-72 h-72">
                <div
                    node_ref=orb_a_ref
                    class="w-full h-full rounded-full bg-cyan-500/10 blur-3xl"
                ></div>
            </div>
            <div node_ref=orb_b_wrap class="absolute bottom-1/4 right-1/5 w-96 h-96">
                <div
                    node_ref=orb_b_ref
                    class="w-full h-full rounded-full bg-purple-500/10 blur-3xl"
                ></div>
            </div>
            <div node_ref=orb_c_wrap class="absolute top-1/2 right-1/3 w-48 h-48">
                <div
                    node_ref=orb_c_ref
                    class="w-full h-full rounded-full bg-pink-500/10 blur-3xl"
                ></div>
            </div>

            <div class="relative z-10 max-w-4xl mx-auto px-4 text-center">
                <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                    <span node_ref=greeting_ref class="block overflow-hidden">
                        "Hi, I'm"
                    </span>
                    <span
                        node_ref=name_ref
                        class="block overflow-hidden bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent"
                    >
                        "Nishal K"
                    </span>
                </h1>

                <p node_ref=subtitle_ref class="text-xl md:text-2xl text-gray-400 mb-8">
                    "17-year-old creative from Kerala blending code, music, and motion."
                </p>

                <div node_ref=tags_ref class="flex flex-wrap justify-center gap-3 mb-10">
                    {ROLE_TAGS
                        .iter()
                        .map(|&tag| {
                            view! {
                                <span
                                    class="px-4 py-2 rounded-full border border-gray-700 text-sm text-gray-300 bg-gray-900/60"
                                    on:mouseenter=lift
                                    on:mouseleave=settle
                                >
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=ctas_ref class="flex flex-wrap justify-center gap-4">
                    <button
                        class="px-8 py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-500 text-white font-semibold"
                        on:mouseenter=lift
                        on:mouseleave=settle
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-8 py-3 rounded-lg border border-gray-600 text-gray-200 font-semibold"
                        on:mouseenter=lift
                        on:mouseleave=settle
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>

            <div
                node_ref=indicator_ref
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-gray-500 text-sm flex flex-col items-center gap-2"
            >
                <span>"Scroll"</span>
                <span class="block w-px h-8 bg-gradient-to-b from-gray-500 to-transparent"></span>
            </div>
        </section>
    }
}
