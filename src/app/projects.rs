use leptos::{html, prelude::*};

use super::animate::{use_card_tilt, use_section_motion, ProgressSpan, SectionMotion};
use super::viewport::use_viewport;
use crate::content::{self, Project, ProjectAction};
use crate::motion::{Property, TransitionSpec, ViewportClass};

fn project_transitions(class: ViewportClass) -> Vec<TransitionSpec> {
    use Property::*;
    let (rise, duration) = match class {
        ViewportClass::Desktop => (50.0, 800.0),
        ViewportClass::Touch => (30.0, 600.0),
    };
    vec![
        TransitionSpec::entrance("header", TranslateY, 40.0, 0.0).duration(600.0),
        TransitionSpec::entrance("header", Opacity, 0.0, 1.0).duration(600.0),
        TransitionSpec::entrance("card", TranslateY, rise, 0.0)
            .duration(duration)
            .delay(200.0)
            .stagger(100.0),
        TransitionSpec::entrance("card", Opacity, 0.0, 1.0)
            .duration(duration)
            .delay(200.0)
            .stagger(100.0),
    ]
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let viewport = use_viewport();
    let motion = use_section_motion(
        section_ref,
        ProgressSpan::Through,
        project_transitions(viewport.class.get_untracked()),
        content::PROJECTS.len(),
    );

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class="section relative overflow-hidden bg-[#030303] py-24 lg:py-32"
        >
            <div class="container relative z-10">
                <div
                    class="text-center mb-16"
                    style:transform=move || motion.transform("header", 0)
                    style:opacity=move || motion.opacity("header", 0)
                >
                    <span class="inline-block text-gray-400 font-semibold text-sm uppercase tracking-wider mb-3">
                        <span class="font-mono text-white">"<"</span> " Projects "
                        <span class="font-mono text-white">"/>"</span>
                    </span>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-display font-bold text-white">
                        "Featured Work"
                    </h2>
                    <div class="mt-6 flex justify-center">
                        <div class="w-16 h-[2px] bg-gradient-to-r from-transparent via-white to-transparent opacity-20"></div>
                    </div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {content::PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project=project.clone() index motion /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, motion: SectionMotion) -> impl IntoView {
    let card_ref = NodeRef::<html::Article>::new();
    let (tilt, hovered) = use_card_tilt(card_ref);
    let actions = project.actions();
    let live = project.live_url.is_some();
    let technologies = project.technologies.clone();

    view! {
        <div
            class="h-full"
            style:transform=move || motion.transform("card", index)
            style:opacity=move || motion.opacity("card", index)
        >
            <article
                node_ref=card_ref
                class="group relative h-full transition-transform duration-200 ease-out"
                style="transform-style: preserve-3d"
                style:transform=move || tilt.get()
            >
                // Border glow on hover
                <div
                    class="absolute -inset-1 bg-gradient-to-br from-white/20 to-white/5 rounded-2xl blur-lg transition-opacity duration-300"
                    style:opacity=move || if hovered.get() { "0.6" } else { "0" }
                ></div>

                <div class="relative glass-card border border-white/10 h-full flex flex-col overflow-hidden">
                    <div class="relative overflow-hidden aspect-video bg-gradient-to-br from-dark-800 to-dark-900">
                        <img
                            src=project.image_src()
                            alt=project.title.clone()
                            class="w-full h-full object-cover transform group-hover:scale-110 transition-transform duration-700 grayscale group-hover:grayscale-0"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent opacity-60"></div>

                        // Tech stack overlay on hover
                        <div
                            class="absolute inset-0 bg-black/95 backdrop-blur-sm flex items-center justify-center p-6 transition-opacity duration-300"
                            style:opacity=move || if hovered.get() { "1" } else { "0" }
                            style:pointer-events=move || {
                                if hovered.get() { "auto" } else { "none" }
                            }
                        >
                            <div class="flex flex-wrap gap-2 justify-center">
                                {technologies
                                    .iter()
                                    .enumerate()
                                    .map(|(i, tech)| {
                                        view! {
                                            <span
                                                class="px-3 py-1 glass-card text-white text-xs font-medium border border-white/20 transition-all duration-300"
                                                style:transition-delay=format!("{}ms", i * 50)
                                                style:transform=move || {
                                                    if hovered.get() {
                                                        "scale(1) rotate(0deg)".to_string()
                                                    } else {
                                                        "scale(0) rotate(-180deg)".to_string()
                                                    }
                                                }
                                            >
                                                {tech.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        // Project number badge
                        <div class="absolute top-4 right-4 w-12 h-12 glass-card flex items-center justify-center font-mono font-bold text-white text-lg border border-white/20">
                            {format!("{:02}", index + 1)}
                        </div>

                        {live
                            .then(|| {
                                view! {
                                    <div class="absolute top-4 left-4 flex items-center gap-2 px-3 py-1 glass-card text-xs font-medium text-white border border-white/20">
                                        <span class="relative flex h-2 w-2">
                                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-white opacity-75"></span>
                                            <span class="relative inline-flex rounded-full h-2 w-2 bg-white"></span>
                                        </span>
                                        "Live"
                                    </div>
                                }
                            })}
                    </div>

                    <div class="p-6 flex-1 flex flex-col">
                        <h3 class="text-2xl font-display font-bold text-white mb-3 group-hover:text-dark-100 transition-colors">
                            {project.title.clone()}
                        </h3>
                        <p class="text-dark-300 mb-6 leading-relaxed flex-1 text-sm">
                            {project.description.clone()}
                        </p>

                        <div class="flex items-center gap-3 pt-4 border-t border-white/5">
                            {actions
                                .into_iter()
                                .map(|action| match action {
                                    ProjectAction::Live(url) => {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 text-white font-medium hover:text-dark-200 transition-colors"
                                            >
                                                <span class="text-sm">"View Live"</span>
                                                <span aria-hidden="true">"↗"</span>
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    ProjectAction::Source(url) => {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-3 py-1.5 glass-card text-dark-300 hover:text-white transition-colors ml-auto text-sm border border-white/5 hover:border-white/20"
                                            >
                                                <i class="devicon-github-plain"></i>
                                                <span>"Code"</span>
                                            </a>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="absolute bottom-0 right-0 w-20 h-20 bg-gradient-to-tl from-white/5 to-transparent pointer-events-none"></div>
                </div>
            </article>
        </div>
    }
}
