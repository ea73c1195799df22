use leptos::{either::Either, html, prelude::*};

use super::animate::{use_section_motion, ProgressSpan, SectionMotion};
use super::viewport::use_viewport;
use crate::content::{self, Skill};
use crate::motion::{Property, TransitionSpec, ViewportClass};

/// Horizontal distance between cards on the pinned desktop rail.
const CARD_SPACING: f64 = 400.0;

fn skills_transitions(class: ViewportClass, count: usize) -> Vec<TransitionSpec> {
    use Property::*;
    let mut specs = vec![
        TransitionSpec::entrance("header", TranslateY, 40.0, 0.0).duration(600.0),
        TransitionSpec::entrance("header", Opacity, 0.0, 1.0).duration(600.0),
    ];
    match class {
        ViewportClass::Desktop => {
            // The rail scrubs with pin progress: one viewport-height of scroll
            // per card.
            specs.push(TransitionSpec::scroll_bound(
                "rail",
                TranslateX,
                0.0,
                -(CARD_SPACING * count.saturating_sub(1) as f64),
                0.0,
                1.0,
            ));
        }
        ViewportClass::Touch => {
            specs.push(
                TransitionSpec::entrance("card", TranslateY, 30.0, 0.0)
                    .duration(500.0)
                    .delay(200.0)
                    .stagger(60.0),
            );
            specs.push(
                TransitionSpec::entrance("card", Opacity, 0.0, 1.0)
                    .duration(500.0)
                    .delay(200.0)
                    .stagger(60.0),
            );
        }
    }
    specs
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let viewport = use_viewport();
    let class = viewport.class.get_untracked();
    let touch = class.is_touch();
    let count = content::SKILLS.len();
    let motion = use_section_motion(
        section_ref,
        if touch {
            ProgressSpan::Through
        } else {
            ProgressSpan::Pin
        },
        skills_transitions(class, count),
        count,
    );
    let section_height = if touch {
        "auto".to_string()
    } else {
        format!("{}vh", count * 100)
    };

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="relative bg-[#030303] overflow-hidden"
            style:height=section_height
        >
            <div class=move || {
                if touch { "relative" } else { "sticky top-0 h-screen overflow-hidden" }
            }>
                // Spotlight
                <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                    <div class="w-[600px] h-[600px] rounded-full bg-white opacity-[0.03] blur-[120px]"></div>
                </div>

                <div
                    class="relative md:absolute md:top-20 left-0 right-0 text-center z-10 pointer-events-none py-12 md:py-0"
                    style:transform=move || motion.transform("header", 0)
                    style:opacity=move || motion.opacity("header", 0)
                >
                    <span class="inline-block text-gray-400 font-semibold text-sm uppercase tracking-wider mb-3">
                        <span class="font-mono text-white">"<"</span> " Skills "
                        <span class="font-mono text-white">"/>"</span>
                    </span>
                    <h2 class="text-5xl md:text-7xl font-display font-bold text-white mt-4 tracking-tight">
                        "Tech Stack"
                    </h2>
                    <div class="mt-6 flex justify-center">
                        <div class="w-16 h-[2px] bg-gradient-to-r from-transparent via-white to-transparent opacity-20"></div>
                    </div>
                </div>

                {if touch {
                    Either::Left(
                        view! {
                            <div class="grid grid-cols-2 sm:grid-cols-3 gap-6 px-6 pb-16 max-w-3xl mx-auto">
                                {content::SKILLS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, skill)| {
                                        view! {
                                            <div
                                                style:transform=move || motion.transform("card", index)
                                                style:opacity=move || motion.opacity("card", index)
                                            >
                                                <SkillCard skill=skill.clone() />
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        },
                    )
                } else {
                    Either::Right(view! { <SkillRail motion /> })
                }}
            </div>
        </section>
    }
}

/// The pinned horizontal queue: cards start centered and slide left as pin
/// progress advances, one card per viewport-height of scroll.
#[component]
fn SkillRail(motion: SectionMotion) -> impl IntoView {
    view! {
        // Side labels
        <div class="absolute inset-0 flex items-center justify-center pointer-events-none z-20">
            <div class="absolute left-[10%] flex flex-col items-end gap-1 opacity-20">
                <div class="w-8 h-[1px] bg-gray-600"></div>
                <span class="text-gray-600 font-mono text-xs">"Previous"</span>
            </div>
            <div class="absolute right-[10%] flex flex-col items-start gap-1 opacity-20">
                <div class="w-8 h-[1px] bg-gray-600"></div>
                <span class="text-gray-600 font-mono text-xs">"Next"</span>
            </div>
        </div>

        <div class="h-screen flex items-center overflow-hidden">
            <div
                class="flex items-center"
                style="margin-left: 50%"
                style:transform=move || motion.transform("rail", 0)
            >
                {content::SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div
                                class="flex-shrink-0 flex justify-center items-center"
                                style=format!("width: {CARD_SPACING}px")
                            >
                                <SkillCard skill=skill.clone() />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        // Side fades
        <div class="absolute inset-y-0 left-0 w-1/4 bg-gradient-to-r from-[#030303] to-transparent pointer-events-none z-10"></div>
        <div class="absolute inset-y-0 right-0 w-1/4 bg-gradient-to-l from-[#030303] to-transparent pointer-events-none z-10"></div>

        // Progress bar
        <div class="absolute bottom-20 left-1/2 -translate-x-1/2 z-10 w-full max-w-md px-8">
            <div class="text-center mb-4">
                <p class="text-gray-500 text-xs font-mono tracking-wider">"SCROLL TO NAVIGATE"</p>
            </div>
            <div class="h-[2px] bg-gray-800 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-gray-600 via-white to-gray-600 rounded-full"
                    style:width=move || format!("{:.2}%", motion.progress() * 100.0)
                ></div>
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="group flex flex-col items-center gap-4 px-10 py-8 rounded-2xl bg-white/5 border border-white/10 backdrop-blur-sm hover:border-white/30 hover:scale-105 transition-all duration-300 cursor-default">
            <i
                class=format!("{} text-6xl", skill.icon)
                style:color=skill.color.clone()
                aria-hidden="true"
            ></i>
            <span class="text-sm font-semibold uppercase tracking-[0.2em] text-gray-300 group-hover:text-white transition-colors">
                {skill.name.clone()}
            </span>
        </div>
    }
}
