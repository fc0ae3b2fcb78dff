//! Video gallery: category filter bar, card grid, and a detail modal with a
//! YouTube link-out. Filtering preserves the master-list order and selection
//! always indexes the master list, so switching filters while a modal is open
//! cannot change which video it shows.

use leptos::{html, prelude::*};
use web_sys::Element;

use super::content::{filtered_videos, video, Video, VideoCategory, VideoFilter, VIDEOS};
use super::hooks::use_visible_once;
use super::motion::{hover_target, use_motion, Intent, ScrubKind, Timeline};

const HOVER_READY_MS: u64 = 1400;

#[component]
pub fn Videos() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let underline_ref = NodeRef::<html::Div>::new();
    let badge_ref = NodeRef::<html::Div>::new();
    let grid_ref = NodeRef::<html::Div>::new();

    let visible = use_visible_once(section_ref);
    let (hover_ready, set_hover_ready) = signal(false);
    let (filter, set_filter) = signal(VideoFilter::All);
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

    Effect::new(move |_| {
        if let Some(el) = badge_ref.get() {
            motion.register_scrub(
                &Element::from(el),
                ScrubKind::PulseScale { max_scale: 1.15 },
            );
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

    let filters: Vec<VideoFilter> = std::iter::once(VideoFilter::All)
        .chain(VideoCategory::ALL.into_iter().map(VideoFilter::Category))
        .collect();

    view! {
        <section
            id="videos"
            node_ref=section_ref
            class="py-20 bg-gray-950 relative"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-10">
                    <h2
                        node_ref=title_ref
                        class="inline-block overflow-hidden text-4xl md:text-6xl font-bold text-white mb-6"
                    >
                        "Video Gallery"
                    </h2>
                    <div
                        node_ref=underline_ref
                        class="w-24 h-1 bg-gradient-to-r from-red-400 to-orange-400 mx-auto mb-6"
                    ></div>
                    <div
                        node_ref=badge_ref
                        class="inline-block px-4 py-1 rounded-full bg-red-500/10 border border-red-500/30 text-red-400 text-sm"
                    >
                        {VIDEOS.len()} " videos and counting"
                    </div>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {filters
                        .into_iter()
                        .map(|this| {
                            let active = move || filter.get() == this;
                            view! {
                                <button
                                    class=move || {
                                        if active() {
                                            "px-4 py-2 rounded-full text-sm bg-gradient-to-r from-red-500 to-orange-500 text-white"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm bg-gray-900 border border-gray-800 text-gray-400 hover:text-white"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(this)
                                >
                                    {this.label()} " (" {this.count()} ")"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filtered_videos(filter.get())
                            .into_iter()
                            .map(|(index, video)| {
                                view! {
                                    <div
                                        class="rounded-2xl overflow-hidden bg-gray-900/80 border border-gray-800 cursor-pointer"
                                        on:mouseenter=lift
                                        on:mouseleave=settle
                                        on:click=move |_| set_selected.set(Some(index))
                                    >
                                        <div class="relative">
                                            <img
                                                src=video.thumbnail
                                                alt=video.title
                                                loading="lazy"
                                                class="w-full h-44 object-cover bg-gray-800"
                                            />
                                            <span class="absolute bottom-2 right-2 px-2 py-0.5 rounded bg-black/80 text-white text-xs">
                                                {video.duration}
                                            </span>
                                        </div>
                                        <div class="p-5">
                                            <p class="text-xs uppercase tracking-wide text-red-400 mb-2">
                                                {video.category.tag()}
                                            </p>
                                            <h3 class="text-white font-semibold mb-2 line-clamp-2">
                                                {video.title}
                                            </h3>
                                            <p class="text-gray-500 text-xs">
                                                {video.views} " views · " {video.date}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(video)
                    .map(|v| view! { <VideoModal video=v on_close=move || set_selected.set(None) /> })
            }}
        </section>
    }
}

#[component]
fn VideoModal(video: &'static Video, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 bg-black/80 backdrop-blur-sm flex items-center justify-center p-4"
            on:click=move |_| on_close()
        >
            <div
                class="max-w-2xl w-full max-h-[85vh] overflow-y-auto rounded-2xl bg-gray-900 border border-gray-700 p-8"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-start justify-between mb-6">
                    <div>
                        <p class="text-xs uppercase tracking-wide text-red-400 mb-1">
                            {video.category.label()}
                        </p>
                        <h3 class="text-xl font-bold text-white">{video.title}</h3>
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
                    src=video.thumbnail
                    alt=video.title
                    class="w-full h-56 object-cover rounded-xl bg-gray-800 mb-6"
                />

                <p class="text-gray-300 mb-6">{video.description}</p>

                <dl class="grid grid-cols-2 gap-4 text-sm mb-6">
                    <div>
                        <dt class="text-gray-500">"Client"</dt>
                        <dd class="text-gray-300">{video.client}</dd>
                    </div>
                    <div>
                        <dt class="text-gray-500">"Role"</dt>
                        <dd class="text-gray-300">{video.role}</dd>
                    </div>
                    <div>
                        <dt class="text-gray-500">"Published"</dt>
                        <dd class="text-gray-300">{video.date} " · " {video.views} " views"</dd>
                    </div>
                    <div>
                        <dt class="text-gray-500">"Made with"</dt>
                        <dd class="text-gray-300">{video.equipment.join(", ")}</dd>
                    </div>
                </dl>

                <div class="flex flex-wrap gap-2 mb-6">
                    {video
                        .tags
                        .iter()
                        .map(|&tag| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded bg-gray-800 text-gray-300">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <a
                    href=video.watch_url()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block px-6 py-2 rounded-lg bg-gradient-to-r from-red-500 to-orange-500 text-white text-sm font-semibold"
                >
                    "Watch on YouTube"
                </a>
            </div>
        </div>
    }
}
