use leptos::prelude::*;

use super::viewport::use_viewport;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#hero"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
];

#[component]
pub fn Header() -> impl IntoView {
    let viewport = use_viewport();
    // Past 50px of scroll the header picks up its glass chrome.
    let scrolled = Memo::new(move |_| viewport.scroll_y.get() > 50.0);
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header
            class=move || {
                if scrolled.get() {
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-300 header-enter glass-card border-b border-white/10"
                } else {
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-300 header-enter bg-transparent"
                }
            }
        >
            <div class="container">
                <div class="flex items-center justify-between h-20">
                    <a
                        href="/"
                        class="text-2xl font-display font-bold hover:scale-105 transition-transform"
                    >
                        <span class="text-white font-mono">"Ishan"</span>
                    </a>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, (name, href))| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-dark-200 hover:text-white font-medium transition-colors relative group nav-enter"
                                        style:animation-delay=format!("{}ms", i * 100)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*name}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-white transition-all group-hover:w-full"></span>
                                    </a>
                                }
                            })
                            .collect_view()}

                        <a href="#contact" class="btn btn-primary hover:scale-105 transition-transform">
                            "Let's Talk"
                        </a>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 text-dark-200 hover:text-white glass-card"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle navigation menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden glass-card border-t border-white/10">
                    <nav class="container py-6 flex flex-col gap-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-dark-200 hover:text-white font-medium py-2 transition-colors border-l-2 border-transparent hover:border-white pl-4"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="#contact"
                            class="btn btn-primary w-full justify-center"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Let's Talk"
                        </a>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
