use leptos::{html, prelude::*};

use super::animate::{use_magnetic, use_section_motion, ProgressSpan};
use super::viewport::use_viewport;
use crate::content;
use crate::motion::{Ease, Property, TransitionSpec, ViewportClass};

const INTERESTS: [(&str, &str); 4] = [
    ("Coding", "💻"),
    ("Soccer", "⚽"),
    ("Fitness", "🏋️"),
    ("Music", "🎵"),
];

fn about_transitions(class: ViewportClass) -> Vec<TransitionSpec> {
    use Property::*;
    let mut specs = vec![
        TransitionSpec::scroll_bound("grid", TranslateY, 0.0, 120.0, 0.0, 1.0),
        TransitionSpec::entrance("reveal", TranslateY, 80.0, 0.0)
            .duration(1000.0)
            .stagger(100.0),
        TransitionSpec::entrance("reveal", Opacity, 0.0, 1.0)
            .duration(1000.0)
            .stagger(100.0),
        TransitionSpec::entrance("interest", Scale, 0.0, 1.0)
            .duration(500.0)
            .delay(500.0)
            .stagger(50.0)
            .ease(Ease::BackOut(1.7)),
        TransitionSpec::entrance("interest", Opacity, 0.0, 1.0)
            .duration(500.0)
            .delay(500.0)
            .stagger(50.0)
            .ease(Ease::PowerOut(2)),
    ];
    if class == ViewportClass::Desktop {
        // Floating decorative icons only exist on wide layouts.
        specs.push(
            TransitionSpec::looping("float", TranslateY, 0.0, -15.0, 2000.0).stagger(250.0),
        );
    }
    specs
}

#[component]
pub fn About() -> impl IntoView {
    let profile = &*content::PROFILE;
    let section_ref = NodeRef::<html::Section>::new();
    let viewport = use_viewport();
    let motion = use_section_motion(
        section_ref,
        ProgressSpan::Through,
        about_transitions(viewport.class.get_untracked()),
        INTERESTS.len(),
    );
    let skills_cta = NodeRef::<html::Div>::new();
    let portfolio_cta = NodeRef::<html::Div>::new();
    let skills_pull = use_magnetic(skills_cta);
    let portfolio_pull = use_magnetic(portfolio_cta);

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="section relative overflow-hidden bg-[#030303] py-24 lg:py-32"
        >
            <div
                class="absolute inset-0 grid-pattern opacity-20 pointer-events-none"
                style="background-image: radial-gradient(circle, #333 1px, transparent 1px); background-size: 40px 40px"
                style:transform=move || motion.transform("grid", 0)
            ></div>

            <div class="container relative z-10">
                <div class="grid lg:grid-cols-12 gap-12 items-center">
                    // Left: portrait with floating interest icons
                    <div class="lg:col-span-5 relative group">
                        <div class="relative rounded-2xl overflow-hidden shadow-2xl border border-white/10">
                            <img
                                src=format!("/images/{}", content::PROFILE_PHOTO)
                                alt=profile.name.clone()
                                class="w-full h-auto object-cover aspect-[4/5] transition-transform duration-700 ease-out group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent opacity-60 group-hover:opacity-30 transition-opacity duration-500"></div>
                        </div>

                        {INTERESTS
                            .iter()
                            .enumerate()
                            .map(|(i, (label, glyph))| {
                                let side = if i % 2 == 0 {
                                    "left: -15%"
                                } else {
                                    "right: -15%"
                                };
                                view! {
                                    <div
                                        class="hidden lg:flex absolute glass-card rounded-full p-4 text-white border border-white/10 shadow-lg backdrop-blur-md text-xl"
                                        style=format!("top: {}%; {}", 10 + i * 25, side)
                                        style:transform=move || motion.transform("float", i)
                                        aria-label=*label
                                    >
                                        {*glyph}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Right: content
                    <div class="lg:col-span-6 lg:col-start-7 space-y-10">
                        <div class="space-y-6">
                            <span
                                class="inline-block text-emerald-500 font-mono text-sm tracking-[0.3em] uppercase"
                                style:transform=move || motion.transform("reveal", 0)
                                style:opacity=move || motion.opacity("reveal", 0)
                            >
                                "< About />"
                            </span>

                            <h2
                                class="text-5xl md:text-7xl font-display font-bold text-white leading-[0.9]"
                                style:transform=move || motion.transform("reveal", 1)
                                style:opacity=move || motion.opacity("reveal", 1)
                            >
                                "Building " <br />
                                <span class="text-dark-400 italic">"Digital"</span>
                                " Solutions"
                            </h2>

                            <p
                                class="text-xl text-dark-300 leading-relaxed font-light"
                                style:transform=move || motion.transform("reveal", 2)
                                style:opacity=move || motion.opacity("reveal", 2)
                            >
                                {profile.bio.clone()}
                            </p>

                            <p
                                class="text-lg text-dark-400 leading-relaxed border-l-2 border-white/10 pl-6 italic"
                                style:transform=move || motion.transform("reveal", 3)
                                style:opacity=move || motion.opacity("reveal", 3)
                            >
                                "When I'm not coding, you'll find me on the soccer field, at the gym, or playing guitar. I believe in "
                                <span class="text-white">"discipline, curiosity, and continuous growth"</span>
                                "."
                            </p>
                        </div>

                        <div class="flex flex-wrap gap-3">
                            {INTERESTS
                                .iter()
                                .enumerate()
                                .map(|(i, (label, glyph))| {
                                    view! {
                                        <div
                                            class="flex items-center gap-3 px-6 py-3 rounded-full bg-white/5 border border-white/10 text-white hover:bg-white/10 transition-colors cursor-default"
                                            style:transform=move || motion.transform("interest", i)
                                            style:opacity=move || motion.opacity("interest", i)
                                        >
                                            <span class="text-emerald-500">{*glyph}</span>
                                            <span class="text-sm font-semibold tracking-wide">
                                                {*label}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        // Magnetic CTAs
                        <div
                            class="flex flex-wrap gap-6 pt-4"
                            style:transform=move || motion.transform("reveal", 4)
                            style:opacity=move || motion.opacity("reveal", 4)
                        >
                            <div
                                node_ref=skills_cta
                                class="transition-transform duration-300 ease-out"
                                style:transform=move || skills_pull.get()
                            >
                                <a
                                    href="#skills"
                                    class="group relative px-8 py-4 bg-white text-black font-bold rounded-full flex items-center gap-2 uppercase text-xs tracking-widest"
                                >
                                    "View Skills ⚡"
                                </a>
                            </div>

                            <div
                                node_ref=portfolio_cta
                                class="transition-transform duration-300 ease-out"
                                style:transform=move || portfolio_pull.get()
                            >
                                <a
                                    href="#projects"
                                    class="px-8 py-4 border border-white/20 text-white font-bold rounded-full hover:bg-white hover:text-black transition-colors duration-300 uppercase text-xs tracking-widest"
                                >
                                    "My Portfolio"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
