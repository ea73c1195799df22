use leptos::{html, prelude::*};

use super::animate::{use_section_motion, ProgressSpan};
use super::scroll_to_section;
use super::viewport::use_viewport;
use crate::content;
use crate::motion::{Ease, Property, TransitionSpec, ViewportClass};

const HERO_TAGS: [&str; 5] = ["React", "Java", "Python", "Flutter", "PostgreSQL"];

/// The hero choreography: character-staggered name entrance, staggered reveal
/// rows, pill pop-in, floating headline and blob loops, pointer-followed
/// pills, and a scroll-bound exit fade of the whole text block. Touch
/// viewports get the reduced set: single-fade heading, slower loops, no
/// pointer-follow.
fn hero_transitions(class: ViewportClass) -> Vec<TransitionSpec> {
    use Property::*;
    match class {
        ViewportClass::Desktop => vec![
            TransitionSpec::entrance("char", TranslateY, 40.0, 0.0)
                .duration(1000.0)
                .stagger(50.0)
                .ease(Ease::PowerOut(4)),
            TransitionSpec::entrance("char", Opacity, 0.0, 1.0)
                .duration(1000.0)
                .stagger(50.0)
                .ease(Ease::PowerOut(4)),
            TransitionSpec::entrance("reveal", TranslateY, 30.0, 0.0)
                .duration(1000.0)
                .delay(500.0)
                .stagger(150.0)
                .ease(Ease::ExpoOut),
            TransitionSpec::entrance("reveal", Opacity, 0.0, 1.0)
                .duration(1000.0)
                .delay(500.0)
                .stagger(150.0)
                .ease(Ease::ExpoOut),
            TransitionSpec::entrance("pill", Scale, 0.0, 1.0)
                .duration(800.0)
                .delay(900.0)
                .stagger(100.0)
                .ease(Ease::BackOut(1.7)),
            TransitionSpec::entrance("pill", Opacity, 0.0, 1.0)
                .duration(800.0)
                .delay(900.0)
                .stagger(100.0)
                .ease(Ease::PowerOut(2)),
            TransitionSpec::entrance("indicator", Opacity, 0.0, 1.0)
                .duration(500.0)
                .delay(2500.0),
            TransitionSpec::looping("heading", Scale, 1.0, 1.03, 3000.0).delay(2500.0),
            TransitionSpec::looping("heading", TranslateY, 0.0, -15.0, 3000.0).delay(2500.0),
            TransitionSpec::looping("blob", Rotate, 0.0, 360.0, 8000.0),
            TransitionSpec::looping("blob", Scale, 1.0, 1.2, 8000.0),
            TransitionSpec::looping("indicator", TranslateY, 0.0, 8.0, 1000.0),
            TransitionSpec::scroll_bound("text", TranslateY, 0.0, -80.0, 0.0, 1.0),
            TransitionSpec::scroll_bound("text", Opacity, 1.0, 0.0, 0.0, 0.8),
            TransitionSpec::pointer_follow("pill", TranslateX, 1.0 / 80.0),
            TransitionSpec::pointer_follow("pill", TranslateY, 1.0 / 80.0),
        ],
        ViewportClass::Touch => vec![
            TransitionSpec::entrance("heading", TranslateY, 30.0, 0.0).duration(800.0),
            TransitionSpec::entrance("heading", Opacity, 0.0, 1.0).duration(800.0),
            TransitionSpec::entrance("reveal", TranslateY, 20.0, 0.0)
                .duration(600.0)
                .delay(400.0)
                .stagger(100.0)
                .ease(Ease::PowerOut(2)),
            TransitionSpec::entrance("reveal", Opacity, 0.0, 1.0)
                .duration(600.0)
                .delay(400.0)
                .stagger(100.0)
                .ease(Ease::PowerOut(2)),
            TransitionSpec::entrance("pill", Scale, 0.8, 1.0)
                .duration(500.0)
                .delay(700.0)
                .stagger(80.0)
                .ease(Ease::PowerOut(2)),
            TransitionSpec::entrance("pill", Opacity, 0.0, 1.0)
                .duration(500.0)
                .delay(700.0)
                .stagger(80.0)
                .ease(Ease::PowerOut(2)),
            TransitionSpec::entrance("indicator", Opacity, 0.0, 1.0)
                .duration(500.0)
                .delay(1500.0),
            TransitionSpec::looping("heading", TranslateY, 0.0, -10.0, 2500.0).delay(1500.0),
            TransitionSpec::looping("blob", Rotate, 0.0, 180.0, 10_000.0),
            TransitionSpec::looping("blob", Scale, 1.0, 1.1, 10_000.0),
            TransitionSpec::looping("indicator", TranslateY, 0.0, 8.0, 1000.0),
            TransitionSpec::scroll_bound("text", TranslateY, 0.0, -80.0, 0.0, 1.0),
            TransitionSpec::scroll_bound("text", Opacity, 1.0, 0.0, 0.0, 0.8),
        ],
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &*content::PROFILE;
    let section_ref = NodeRef::<html::Section>::new();
    let viewport = use_viewport();
    let class = viewport.class.get_untracked();
    let letters = profile.name.chars().collect::<Vec<_>>();
    let motion = use_section_motion(
        section_ref,
        ProgressSpan::Exit,
        hero_transitions(class),
        letters.len(),
    );

    view! {
        <section
            id="hero"
            node_ref=section_ref
            class="relative min-h-screen flex items-center justify-center bg-[#030303] overflow-hidden"
            style="perspective: 1000px"
        >
            // Blurred blob backdrop
            <div class="absolute inset-0 pointer-events-none flex items-center justify-center">
                <div class="w-full max-w-4xl aspect-square opacity-20 blur-[60px] md:blur-[120px]">
                    <svg viewBox="-100 -100 200 200" class="w-full h-full overflow-visible">
                        <path
                            fill="#10b981"
                            style="transform-origin: center"
                            style:transform=move || motion.transform("blob", 0)
                            d="M44.7,-62.4C57.3,-55.8,66.6,-42.1,72.4,-27.1C78.2,-12.1,80.5,4.2,76.1,19C71.7,33.7,60.6,46.9,47.1,56.6C33.6,66.3,17.7,72.5,1.1,70.9C-15.5,69.3,-31,59.9,-43.6,48.8C-56.2,37.7,-65.9,25,-71.1,10.2C-76.3,-4.6,-77,-21.5,-70,-35.3C-63,-49.1,-48.3,-59.8,-33.5,-65.4C-18.7,-71,1,-71.5,16.2,-68.8C31.4,-66.1,44.7,-62.4,44.7,-62.4Z"
                        ></path>
                    </svg>
                </div>
            </div>

            <div class="absolute inset-0 grid-pattern opacity-[0.05]"></div>

            <div
                class="container relative z-10 px-6"
                style:transform=move || motion.transform("text", 0)
                style:opacity=move || motion.opacity("text", 0)
            >
                <div class="max-w-5xl mx-auto">
                    <div
                        class="flex items-center gap-3 mb-8 justify-center lg:justify-start"
                        style:transform=move || motion.transform("reveal", 0)
                        style:opacity=move || motion.opacity("reveal", 0)
                    >
                        <span class="h-[1px] w-12 bg-emerald-500/50"></span>
                        <span class="text-emerald-500 font-mono text-xs uppercase tracking-[0.4em]">
                            "Available for projects"
                        </span>
                    </div>

                    <div class="text-center lg:text-left will-change-transform">
                        <h1
                            class="text-6xl md:text-[9rem] font-mono text-white leading-[0.9] tracking-tighter uppercase mb-6 whitespace-nowrap"
                            style:transform=move || motion.transform("heading", 0)
                            style:opacity=move || motion.opacity("heading", 0)
                        >
                            <span class="sr-only">
                                {format!("{} – {}", profile.name, profile.title)}
                            </span>
                            {letters
                                .iter()
                                .enumerate()
                                .map(|(i, ch)| {
                                    let ch = if *ch == ' ' { '\u{a0}' } else { *ch };
                                    view! {
                                        <span
                                            aria-hidden="true"
                                            class="inline-block transition-colors duration-300 hover:text-emerald-500 cursor-default"
                                            style:transform=move || motion.transform("char", i)
                                            style:opacity=move || motion.opacity("char", i)
                                        >
                                            {ch.to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </h1>

                        <div
                            class="flex flex-col lg:flex-row lg:items-end gap-6 lg:gap-12"
                            style:transform=move || motion.transform("reveal", 1)
                            style:opacity=move || motion.opacity("reveal", 1)
                        >
                            <h2 class="text-2xl md:text-4xl text-gray-400 font-light tracking-tight max-w-2xl">
                                "A " <span class="text-white font-medium italic">{profile.title.clone()}</span>
                                " crafting digital experiences with precision and purpose."
                            </h2>

                            <div class="flex items-center justify-center lg:justify-start gap-4 text-gray-500 font-mono text-sm border-l border-white/10 lg:pl-12">
                                <svg
                                    class="w-4 h-4 text-emerald-500"
                                    viewBox="0 0 24 24"
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                >
                                    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"></path>
                                    <circle cx="12" cy="10" r="3"></circle>
                                </svg>
                                <span class="uppercase tracking-widest">"United States"</span>
                            </div>
                        </div>
                    </div>

                    <div class="mt-16 flex flex-wrap justify-center lg:justify-start gap-4">
                        {HERO_TAGS
                            .iter()
                            .enumerate()
                            .map(|(i, tag)| {
                                view! {
                                    <div
                                        class="flex items-center gap-3 px-6 py-3 rounded-full bg-white/5 border border-white/10 backdrop-blur-sm hover:border-emerald-500/40 transition-colors group"
                                        style:transform=move || motion.transform("pill", i)
                                        style:opacity=move || motion.opacity("pill", i)
                                    >
                                        <span class="text-[10px] uppercase tracking-[0.2em] text-gray-400 font-bold group-hover:text-white">
                                            {*tag}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div
                class="absolute bottom-24 md:bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-3 z-30"
                style:opacity=move || motion.opacity("indicator", 0)
            >
                <div class="relative">
                    <button
                        class="cursor-pointer p-4 md:p-3 rounded-full border border-white/10 bg-black/40 backdrop-blur-md hover:bg-emerald-500/10 transition-colors group"
                        style:transform=move || motion.transform("indicator", 0)
                        on:click=move |_| scroll_to_section("about")
                    >
                        <svg
                            class="w-6 h-6 text-emerald-500 group-hover:scale-110 transition-transform"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="m6 9 6 6 6-6"></path>
                        </svg>
                    </button>
                    <span class="absolute top-full mt-4 left-1/2 -translate-x-1/2 whitespace-nowrap text-[10px] md:text-[9px] uppercase tracking-[0.4em] text-white/40 font-medium">
                        "About Me"
                    </span>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 w-full h-32 bg-gradient-to-t from-[#030303] to-transparent z-10"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Trigger;

    #[test]
    fn test_touch_hero_never_follows_the_pointer() {
        let specs = hero_transitions(ViewportClass::Touch);
        assert!(!specs
            .iter()
            .any(|s| matches!(s.trigger, Trigger::PointerFollow { .. })));
    }

    #[test]
    fn test_touch_hero_is_the_reduced_set() {
        assert!(
            hero_transitions(ViewportClass::Touch).len()
                < hero_transitions(ViewportClass::Desktop).len()
        );
    }
}
