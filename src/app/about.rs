//! About section: story, journey timeline, and quick stats.

use leptos::{html, prelude::*};
use web_sys::Element;

use super::content::{JOURNEY, STATS};
use super::hooks::use_visible_once;
use super::motion::{hover_target, use_motion, Intent, Timeline};

const HOVER_READY_MS: u64 = 1600;

#[component]
pub fn About() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let underline_ref = NodeRef::<html::Div>::new();
    let story_ref = NodeRef::<html::Div>::new();
    let badge_ref = NodeRef::<html::Div>::new();
    let journey_ref = NodeRef::<html::Div>::new();
    let stats_ref = NodeRef::<html::Div>::new();

    let visible = use_visible_once(section_ref);
    let (hover_ready, set_hover_ready) = signal(false);

    Effect::new(move |_| {
        if !visible.get() {
            return;
        }

        let mut timeline = Timeline::new();
        if let Some(el) = title_ref.get_untracked() {
            timeline = timeline.play_chars(
                0,
                Element::from(el),
                Intent::CharRise {
                    rise_pct: 110.0,
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
                30.0,
            );
        }
        if let Some(el) = underline_ref.get_untracked() {
            timeline = timeline.play(
                300,
                Element::from(el),
                Intent::GrowX {
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
            );
        }
        if let Some(el) = story_ref.get_untracked() {
            timeline = timeline.play_each(
                200,
                Element::from(el),
                Intent::EntranceFade {
                    rise_px: 50.0,
                    duration_ms: 1000.0,
                    delay_ms: 0.0,
                },
                200.0,
            );
        }
        if let Some(el) = badge_ref.get_untracked() {
            timeline = timeline.play(
                400,
                Element::from(el),
                Intent::EntrancePop {
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
            );
        }
        if let Some(el) = journey_ref.get_untracked() {
            timeline = timeline.play_each(
                500,
                Element::from(el),
                Intent::EntranceFade {
                    rise_px: 20.0,
                    duration_ms: 500.0,
                    delay_ms: 0.0,
                },
                100.0,
            );
        }
        if let Some(el) = stats_ref.get_untracked() {
            timeline = timeline.play_each(
                800,
                Element::from(el),
                Intent::EntrancePop {
                    duration_ms: 500.0,
                    delay_ms: 0.0,
                },
                100.0,
            );
        }
        motion.run(timeline);
        motion.defer(HOVER_READY_MS, move || set_hover_ready.set(true));
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
                    lift_px: 2.0,
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
            id="about"
            node_ref=section_ref
            class="py-20 bg-gradient-to-b from-gray-950 to-gray-900 relative overflow-hidden"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2
                        node_ref=title_ref
                        class="inline-block overflow-hidden text-4xl md:text-6xl font-bold text-white mb-6"
                    >
                        "About Me"
                    </h2>
                    <div
                        node_ref=underline_ref
                        class="w-24 h-1 bg-gradient-to-r from-green-400 to-yellow-400 mx-auto"
                    ></div>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div class="space-y-8">
                        <div node_ref=story_ref class="space-y-6">
                            <p class="text-lg text-white/80 leading-relaxed">
                                "At just "
                                <span class="text-green-400 font-semibold">"17 years old"</span>
                                " and born in the beautiful state of "
                                <span class="text-green-400 font-semibold">"Kerala"</span>
                                ", I'm a passionate AMV editor, music remix artist, and \
                                 full-stack developer who believes in creating digital \
                                 experiences that tell stories through both visual \
                                 storytelling and innovative code."
                            </p>
                            <p class="text-lg text-white/80 leading-relaxed">
                                "From the serene backwaters of Kerala to the digital worlds \
                                 of anime editing and web development, my work spans AMV \
                                 editing, music remixes, web development, 2D animations, \
                                 and 3D modeling."
                            </p>
                            <p class="text-lg text-white/80 leading-relaxed">
                                "When I'm not editing AMVs or coding, you'll find me \
                                 exploring new anime for inspiration, experimenting with \
                                 music production, or planning my next big adventure into "
                                <span class="text-orange-400">"game development"</span> "."
                            </p>
                        </div>

                        <div
                            node_ref=badge_ref
                            class="inline-flex items-center gap-3 bg-gradient-to-r from-green-500/20 to-yellow-500/20 border border-green-500/30 rounded-xl px-6 py-4"
                            on:mouseenter=lift
                            on:mouseleave=settle
                        >
                            <div class="text-2xl">"🌴"</div>
                            <div>
                                <p class="text-green-400 font-semibold">"Proudly from Kerala"</p>
                                <p class="text-white/60 text-sm">"God's Own Country"</p>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-12">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-8">"My Journey"</h3>
                            <div node_ref=journey_ref class="space-y-4">
                                {JOURNEY
                                    .iter()
                                    .map(|&(year, event)| {
                                        view! {
                                            <div class="flex items-center gap-4 group">
                                                <div class="w-16 h-16 shrink-0 bg-gradient-to-br from-green-400 to-yellow-400 rounded-full flex items-center justify-center text-black font-bold text-sm">
                                                    {year}
                                                </div>
                                                <p class="text-white group-hover:text-green-400 transition-colors">
                                                    {event}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div node_ref=stats_ref class="grid grid-cols-2 gap-6">
                            {STATS
                                .iter()
                                .map(|&(number, label)| {
                                    view! {
                                        <div
                                            class="text-center p-4 bg-white/5 rounded-xl border border-white/10"
                                            on:mouseenter=lift
                                            on:mouseleave=settle
                                        >
                                            <p class="text-2xl font-bold text-green-400">{number}</p>
                                            <p class="text-white/60 text-sm">{label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="mt-20 text-center">
                    <div class="text-6xl md:text-8xl font-bold bg-gradient-to-r from-green-400 via-yellow-400 to-green-400 bg-clip-text text-transparent opacity-20">
                        "നിശാൽ"
                    </div>
                    <p class="text-white/40 text-sm mt-2">"\"Nishal\" in Malayalam"</p>
                </div>
            </div>
        </section>
    }
}
