//! Skills section: six themed category cards with a staggered entrance.

use leptos::{html, prelude::*};
use web_sys::Element;

use super::content::SKILL_CATEGORIES;
use super::hooks::use_visible_once;
use super::motion::{hover_target, use_motion, Intent, Timeline};

const HOVER_READY_MS: u64 = 1400;

#[component]
pub fn Skills() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let underline_ref = NodeRef::<html::Div>::new();
    let grid_ref = NodeRef::<html::Div>::new();

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
        if let Some(el) = grid_ref.get_untracked() {
            timeline = timeline.play_each(
                400,
                Element::from(el),
                Intent::EntranceFade {
                    rise_px: 40.0,
                    duration_ms: 700.0,
                    delay_ms: 0.0,
                },
                120.0,
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
                    scale: 1.03,
                    lift_px: 6.0,
                    duration_ms: 350.0,
                },
            );
        }
    };
    let settle = move |ev: leptos::ev::MouseEvent| {
        if !hover_ready.get_untracked() {
            return;
        }
        if let Some(el) = hover_target(&ev) {
            motion.play(&el, Intent::HoverSettle { duration_ms: 350.0 });
        }
    };

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="py-20 bg-gray-900 relative overflow-hidden"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2
                        node_ref=title_ref
                        class="inline-block overflow-hidden text-4xl md:text-6xl font-bold text-white mb-6"
                    >
                        "My Skills"
                    </h2>
                    <div
                        node_ref=underline_ref
                        class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-purple-400 mx-auto"
                    ></div>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div
                                    class="p-6 rounded-2xl bg-gray-950/60 border border-gray-800"
                                    on:mouseenter=lift
                                    on:mouseleave=settle
                                >
                                    <div class="text-4xl mb-4">{category.icon}</div>
                                    <h3 class=format!(
                                        "text-xl font-bold mb-4 bg-gradient-to-r {} bg-clip-text text-transparent",
                                        category.color,
                                    )>{category.title}</h3>
                                    <ul class="space-y-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|&skill| {
                                                view! {
                                                    <li class="text-gray-400 text-sm flex items-center gap-2">
                                                        <span class="w-1.5 h-1.5 rounded-full bg-gray-600"></span>
                                                        {skill}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
