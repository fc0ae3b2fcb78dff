//! Fixed top navigation: section anchors, scroll-aware styling, and the
//! mobile menu.

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Anchor id and label for every section, in page order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("videos", "Videos"),
    ("contact", "Contact"),
];

/// Vertical scroll offset past which the bar swaps to its condensed,
/// backdrop-blurred treatment.
const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Smooth-scrolls the section with `id` into view. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(section) = document().get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    let nav_class = move || {
        if scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-black/80 backdrop-blur-md shadow-lg py-3"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-5"
        }
    };

    let go_to = move |id: &'static str| {
        move |_| {
            set_menu_open.set(false);
            scroll_to_section(id);
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <button
                    class="text-2xl font-bold bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent"
                    on:click=go_to("home")
                >
                    "Nishal K"
                </button>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <button
                                    class="text-gray-300 hover:text-cyan-400 transition-colors duration-200"
                                    on:click=go_to(id)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden text-gray-300 hover:text-white p-2"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            {move || {
                menu_open.get().then(|| {
                    view! {
                        <div class="md:hidden bg-black/90 backdrop-blur-md mt-2 px-4 py-4 flex flex-col gap-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|&(id, label)| {
                                    view! {
                                        <button
                                            class="text-left text-gray-300 hover:text-cyan-400 transition-colors duration-200"
                                            on:click=go_to(id)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_condenses_only_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(2_000.0));
    }

    #[test]
    fn every_section_has_an_anchor() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            ["home", "about", "skills", "projects", "videos", "contact"]
        );
    }
}
