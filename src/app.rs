mod about;
mod contact;
mod content;
mod hero;
mod hooks;
mod motion;
mod nav;
mod projects;
mod skills;
mod videos;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use web_sys::Element;

use about::About;
use contact::Contact;
use hero::Hero;
use motion::{provide_motion, use_motion, ScrollEffects, ScrubKind};
use nav::Navigation;
use projects::Projects;
use skills::Skills;
use videos::Videos;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            // background color comes from the scroll-hue rule in input.css
            <body class="text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Nishal K - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Single page: every section in fixed order, plus the page-lifetime motion
/// controller and the scroll progress bar.
#[component]
fn HomePage() -> impl IntoView {
    provide_motion();

    view! {
        <Title text="AMV Editor & Developer" />
        <ScrollProgress />
        <Navigation />
        <main>
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Videos />
            <Contact />
        </main>
        <ScrollEffects />
    }
}

/// Thin bar whose horizontal scale tracks overall page scroll fraction.
#[component]
fn ScrollProgress() -> impl IntoView {
    let motion = use_motion();
    let bar_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if let Some(el) = bar_ref.get() {
            motion.register_scrub(&Element::from(el), ScrubKind::ProgressBar);
        }
    });

    view! {
        <div
            node_ref=bar_ref
            class="fixed top-0 left-0 right-0 h-1 z-[60] origin-left scale-x-0 bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400"
        ></div>
    }
}
