//! Projects section: card grid with entrance/hover motion and a detail modal
//! driven by an `Option<usize>` selection into the static project list.

use leptos::{either::Either, html, prelude::*};
use web_sys::Element;

use super::content::{project, Project, PROJECTS};
use super::hooks::use_visible_once;
use super::motion::{hover_target, use_motion, Intent, Timeline};

const HOVER_READY_MS: u64 = 1400;

#[component]
pub fn Projects() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let underline_ref = NodeRef::<html::Div>::new();
    let grid_ref = NodeRef::<html::Div>::new();

    let visible = use_visible_once(section_ref);
    let (hover_ready, set_hover_ready) = signal(false);
    let (selected, set_selected) = signal(None::<usize>);

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
                Intent::EntrancePop {
                    duration_ms: 700.0,
                    delay_ms: 0.0,
                },
                80.0,
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
                    lift_px: 8.0,
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
            id="projects"
            node_ref=section_ref
            class="py-20 bg-gradient-to-b from-gray-900 to-gray-950 relative"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2
                        node_ref=title_ref
                        class="inline-block overflow-hidden text-4xl md:text-6xl font-bold text-white mb-6"
                    >
                        "My Projects"
                    </h2>
                    <div
                        node_ref=underline_ref
                        class="w-24 h-1 bg-gradient-to-r from-purple-400 to-pink-400 mx-auto"
                    ></div>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <div
                                    class="rounded-2xl overflow-hidden bg-gray-900/80 border border-gray-800 cursor-pointer"
                                    on:mouseenter=lift
                                    on:mouseleave=settle
                                    on:click=move |_| set_selected.set(Some(index))
                                >
                                    <img
                                        src=project.mockup
                                        alt=project.title
                                        loading="lazy"
                                        class="w-full h-44 object-cover bg-gray-800"
                                    />
                                    <div class="p-6">
                                        <p class=format!(
                                            "text-xs uppercase tracking-wide mb-2 bg-gradient-to-r {} bg-clip-text text-transparent",
                                            project.color,
                                        )>{project.category}</p>
                                        <h3 class="text-lg font-bold text-white mb-2">
                                            {project.title}
                                        </h3>
                                        <p class="text-gray-400 text-sm mb-4">
                                            {project.description}
                                        </p>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tags
                                                .iter()
                                                .take(4)
                                                .map(|&tag| {
                                                    view! {
                                                        <span class="px-2 py-1 text-xs rounded bg-gray-800 text-gray-300">
                                                            {tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(project)
                    .map(|p| view! { <ProjectModal project=p on_close=move || set_selected.set(None) /> })
            }}
        </section>
    }
}

#[component]
fn ProjectModal(
    project: &'static Project,
    on_close: impl Fn() + Copy + 'static,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 bg-black/80 backdrop-blur-sm flex items-center justify-center p-4"
            on:click=move |_| on_close()
        >
            <div
                class="max-w-3xl w-full max-h-[85vh] overflow-y-auto rounded-2xl bg-gray-900 border border-gray-700 p-8"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-start justify-between mb-6">
                    <div>
                        <p class=format!(
                            "text-xs uppercase tracking-wide mb-1 bg-gradient-to-r {} bg-clip-text text-transparent",
                            project.color,
                        )>{project.category}</p>
                        <h3 class="text-2xl font-bold text-white">{project.title}</h3>
                    </div>
                    <button
                        class="text-gray-400 hover:text-white text-2xl leading-none p-1"
                        aria-label="Close"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>

                <img
                    src=project.mockup
                    alt=project.title
                    class="w-full h-56 object-cover rounded-xl bg-gray-800 mb-6"
                />

                <p class="text-gray-300 mb-6">{project.long_description}</p>

                <div class="grid md:grid-cols-2 gap-6 mb-6">
                    <ModalList title="Challenges" items=project.challenges />
                    <ModalList title="Solutions" items=project.solutions />
                </div>
                <ModalList title="Key Features" items=project.features />

                <div class="mt-6 mb-6">
                    <h4 class="text-white font-semibold mb-3">"Tech Stack"</h4>
                    <div class="space-y-2">
                        {project
                            .tech_stack
                            .iter()
                            .map(|&(group, tools)| {
                                view! {
                                    <div class="flex flex-wrap items-baseline gap-2">
                                        <span class="text-gray-500 text-xs uppercase w-24">
                                            {group}
                                        </span>
                                        {tools
                                            .iter()
                                            .map(|&tool| {
                                                view! {
                                                    <span class="px-2 py-1 text-xs rounded bg-gray-800 text-gray-300">
                                                        {tool}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex gap-4">
                    <ExternalAction label="Live Site" url=project.live_url />
                    <ExternalAction label="Source Code" url=project.github_url />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ModalList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-semibold mb-3">{title}</h4>
            <ul class="space-y-2">
                {items
                    .iter()
                    .map(|&item| {
                        view! {
                            <li class="text-gray-400 text-sm flex gap-2">
                                <span class="text-cyan-400">"▸"</span>
                                {item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Link-out button; a missing URL renders a disabled affordance, never a
/// broken link.
#[component]
fn ExternalAction(label: &'static str, url: Option<&'static str>) -> impl IntoView {
    match url {
        Some(url) => Either::Left(view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="px-6 py-2 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-500 text-white text-sm font-semibold"
            >
                {label}
            </a>
        }),
        None => Either::Right(view! {
            <span
                class="px-6 py-2 rounded-lg border border-gray-700 text-gray-600 text-sm font-semibold cursor-not-allowed select-none"
                aria-disabled="true"
            >
                {label} " (unavailable)"
            </span>
        }),
    }
}
