mod about;
mod animate;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

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
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Viewport state is derived once here; every section reads it from
    // context instead of re-deriving global browser state.
    viewport::provide_viewport();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ishan Pathak - {title}") />

        <Router>
            <div class="relative bg-black">
                <div class="noise-overlay"></div>
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The page sections in their fixed vertical order. The composition root owns
/// no state of its own.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full-Stack Developer" />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <ContactSection />
    }
}

/// Smooth-scrolls the viewport to the section with the given element id.
pub(crate) fn scroll_to_section(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
