use leptos::prelude::*;

use crate::content;

/// Stamped by the build script.
const BUILD_TIME: &str = env!("BUILD_TIME");

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &*content::PROFILE;
    let year = &BUILD_TIME[..4];
    let social_links = [
        ("GitHub", "devicon-github-plain", profile.github.clone()),
        ("LinkedIn", "devicon-linkedin-plain", profile.linkedin.clone()),
    ];

    view! {
        <footer class="relative bg-dark-950 border-t border-dark-800">
            <div
                class="absolute inset-0 opacity-[0.015]"
                style="background-image: linear-gradient(white 1px, transparent 1px), linear-gradient(90deg, white 1px, transparent 1px); background-size: 60px 60px"
            ></div>

            <div class="relative container mx-auto px-8 py-16">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 mb-12">
                    <div class="text-center md:text-left">
                        <h3 class="text-2xl font-display font-bold text-white mb-2">
                            {profile.name.clone()}
                        </h3>
                        <p class="text-dark-400 text-sm font-mono">{profile.title.clone()}</p>
                    </div>

                    <div class="flex gap-4">
                        {social_links
                            .into_iter()
                            .map(|(label, icon, url)| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="w-10 h-10 rounded-lg border border-dark-800 bg-dark-900 flex items-center justify-center text-dark-400 hover:text-white hover:border-dark-700 transition-all duration-300"
                                        aria-label=label
                                    >
                                        <i class=icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=format!("mailto:{}", profile.email)
                            class="w-10 h-10 rounded-lg border border-dark-800 bg-dark-900 flex items-center justify-center text-dark-400 hover:text-white hover:border-dark-700 transition-all duration-300"
                            aria-label="Email"
                        >
                            "✉"
                        </a>
                    </div>
                </div>

                <div class="w-full h-[1px] bg-dark-800 mb-8"></div>

                <div class="flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-dark-500">
                    <p>{format!("© {} {}. All rights reserved.", year, profile.name)}</p>
                    <p class="font-mono text-xs">"Built with Leptos + Tailwind"</p>
                </div>
            </div>

            <button
                class="absolute bottom-8 right-8 w-10 h-10 rounded-lg border border-dark-800 bg-dark-900 flex items-center justify-center text-white hover:border-dark-700 transition-all duration-300 group"
                on:click=move |_| scroll_to_top()
                aria-label="Back to top"
            >
                <span class="group-hover:-translate-y-0.5 transition-transform duration-300">
                    "↑"
                </span>
            </button>
        </footer>
    }
}
