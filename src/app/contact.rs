use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::task::spawn_local;
use leptos::{html, prelude::*};

use super::animate::{use_section_motion, ProgressSpan};
use crate::contact::{
    send_submission, FormSubmission, SubmitState, RELAY_ENDPOINT, SENT_RESET_SECS,
};
use crate::content;
use crate::motion::{Property, TransitionSpec};

fn contact_transitions() -> Vec<TransitionSpec> {
    use Property::*;
    vec![
        TransitionSpec::entrance("header", TranslateY, 40.0, 0.0).duration(600.0),
        TransitionSpec::entrance("header", Opacity, 0.0, 1.0).duration(600.0),
        TransitionSpec::entrance("element", TranslateY, 60.0, 0.0)
            .duration(800.0)
            .delay(200.0)
            .stagger(150.0),
        TransitionSpec::entrance("element", Opacity, 0.0, 1.0)
            .duration(800.0)
            .delay(200.0)
            .stagger(150.0),
    ]
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = &*content::PROFILE;
    let section_ref = NodeRef::<html::Section>::new();
    let motion = use_section_motion(
        section_ref,
        ProgressSpan::Through,
        contact_transitions(),
        4,
    );

    let (state, set_state) = signal(SubmitState::default());
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let reset_timer: StoredValue<Option<TimeoutHandle>, LocalStorage> = StoredValue::new_local(None);

    on_cleanup(move || {
        if let Some(handle) = reset_timer.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Refused unless idle, so a second submit while one is pending never
        // issues a request. The submit control is disabled too.
        let Some(next) = state.get_untracked().begin() else {
            return;
        };
        let (Some(name_el), Some(email_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let submission = FormSubmission {
            name: name_el.value(),
            email: email_el.value(),
            message: message_el.value(),
        };
        set_state.set(next);

        spawn_local(async move {
            match send_submission(RELAY_ENDPOINT, submission).await {
                Ok(()) => {
                    set_state.update(|s| *s = s.settle(true));
                    name_el.set_value("");
                    email_el.set_value("");
                    message_el.set_value("");
                    if let Ok(handle) = set_timeout_with_handle(
                        move || set_state.update(|s| *s = s.reset()),
                        Duration::from_secs(SENT_RESET_SECS),
                    ) {
                        reset_timer.set_value(Some(handle));
                    }
                }
                Err(err) => {
                    log::error!("contact form submission failed: {err}");
                    set_state.update(|s| *s = s.settle(false));
                    let _ = window()
                        .alert_with_message("Oops! There was a problem submitting your form");
                }
            }
        });
    };

    let social_links = [
        ("GitHub", Some("devicon-github-plain"), profile.github.clone()),
        ("LinkedIn", Some("devicon-linkedin-plain"), profile.linkedin.clone()),
        ("Email", None, format!("mailto:{}", profile.email)),
    ];

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="section relative overflow-hidden bg-[#030303] py-24 lg:py-32"
        >
            <div class="absolute inset-0 grid-pattern opacity-30"></div>

            <div class="container relative z-10">
                <div
                    class="text-center mb-16"
                    style:transform=move || motion.transform("header", 0)
                    style:opacity=move || motion.opacity("header", 0)
                >
                    <span class="inline-block text-dark-200 font-semibold text-sm uppercase tracking-wider mb-3">
                        <span class="font-mono text-white">"<"</span> " Contact "
                        <span class="font-mono text-white">"/>"</span>
                    </span>

                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-display font-bold mb-6">
                        <span class="text-white">"Let's Build Something"</span> " "
                        <span class="text-white italic">"Together"</span>
                    </h2>

                    <p class="text-lg text-dark-300 max-w-2xl mx-auto">
                        "Whether you have a project in mind or just want to chat about tech, soccer, or music — I'd love to hear from you!"
                    </p>

                    <div class="flex items-center justify-center gap-4 mt-6">
                        <div class="h-px w-20 bg-gradient-to-r from-transparent to-white/30"></div>
                        <div class="w-2 h-2 rounded-full bg-white"></div>
                        <div class="h-px w-20 bg-gradient-to-l from-transparent to-white/30"></div>
                    </div>
                </div>

                <div class="grid lg:grid-cols-5 gap-12 max-w-6xl mx-auto">
                    // Left: contact info
                    <div class="lg:col-span-2 space-y-8">
                        <div
                            style:transform=move || motion.transform("element", 0)
                            style:opacity=move || motion.opacity("element", 0)
                        >
                            <h3 class="text-2xl font-display font-bold text-white mb-6">
                                "Connect With Me"
                            </h3>
                            <p class="text-dark-300 mb-8">
                                "I'm always open to discussing new opportunities, collaborations, or just having a friendly conversation."
                            </p>
                        </div>

                        <div
                            class="space-y-4"
                            style:transform=move || motion.transform("element", 1)
                            style:opacity=move || motion.opacity("element", 1)
                        >
                            {social_links
                                .into_iter()
                                .map(|(label, icon, url)| {
                                    let external = label != "Email";
                                    let detail = if external {
                                        "@ishanpathak3".to_string()
                                    } else {
                                        profile.email.clone()
                                    };
                                    view! {
                                        <a
                                            href=url
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="flex items-center gap-4 p-4 glass-card border border-white/10 hover:bg-dark-800 hover:translate-x-2 transition-all duration-300 group"
                                        >
                                            <div class="w-12 h-12 rounded-lg glass-card flex items-center justify-center group-hover:scale-110 transition-transform border border-white/10 text-2xl text-white">
                                                {match icon {
                                                    Some(icon) => leptos::either::Either::Left(
                                                        view! { <i class=icon></i> },
                                                    ),
                                                    None => leptos::either::Either::Right("✉"),
                                                }}
                                            </div>
                                            <div class="flex-1">
                                                <div class="font-semibold text-white">{label}</div>
                                                <div class="text-sm text-dark-300">{detail}</div>
                                            </div>
                                            <div class="text-white">"→"</div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        // Quick stats
                        <div
                            class="grid grid-cols-2 gap-4"
                            style:transform=move || motion.transform("element", 2)
                            style:opacity=move || motion.opacity("element", 2)
                        >
                            <div class="glass-card border border-white/10 p-6 text-center hover:scale-105 transition-transform">
                                <div class="text-3xl font-bold text-white">"24h"</div>
                                <div class="text-sm text-dark-300 mt-1">"Response Time"</div>
                            </div>
                            <div class="glass-card border border-white/10 p-6 text-center hover:scale-105 transition-transform">
                                <div class="text-3xl font-bold text-white">"100%"</div>
                                <div class="text-sm text-dark-300 mt-1">"Commitment"</div>
                            </div>
                        </div>
                    </div>

                    // Right: form
                    <div
                        class="lg:col-span-3"
                        style:transform=move || motion.transform("element", 3)
                        style:opacity=move || motion.opacity("element", 3)
                    >
                        <form
                            on:submit=on_submit
                            class="space-y-6 glass-card border border-white/10 p-8"
                        >
                            <h3 class="text-xl font-display font-bold text-white mb-6">
                                "Send a Message"
                            </h3>

                            <div class="grid sm:grid-cols-2 gap-6">
                                <div>
                                    <label for="name" class="label">
                                        "Your Name"
                                    </label>
                                    <input
                                        node_ref=name_ref
                                        type="text"
                                        id="name"
                                        name="name"
                                        required
                                        placeholder="John Doe"
                                        class="input"
                                    />
                                </div>

                                <div>
                                    <label for="email" class="label">
                                        "Email Address"
                                    </label>
                                    <input
                                        node_ref=email_ref
                                        type="email"
                                        id="email"
                                        name="email"
                                        required
                                        placeholder="john@example.com"
                                        class="input"
                                    />
                                </div>
                            </div>

                            <div>
                                <label for="message" class="label">
                                    "Message"
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    id="message"
                                    name="message"
                                    rows="6"
                                    required
                                    placeholder="Tell me about your project or just say hi..."
                                    class="textarea"
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class=move || {
                                    if state.get() == SubmitState::Sent {
                                        "btn w-full justify-center bg-white text-black"
                                    } else {
                                        "btn btn-primary w-full justify-center"
                                    }
                                }
                                disabled=move || state.get() != SubmitState::Idle
                            >
                                {move || match state.get() {
                                    SubmitState::Sent => view! {
                                        <span>"✓ Message Sent!"</span>
                                    }
                                    .into_any(),
                                    SubmitState::Submitting => view! {
                                        <span class="inline-block w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                                        <span>"Sending..."</span>
                                    }
                                    .into_any(),
                                    SubmitState::Idle => view! {
                                        <span>"Send Message"</span>
                                    }
                                    .into_any(),
                                }}
                            </button>

                            <p class="text-center text-sm text-dark-300">
                                "I'll get back to you within 24 hours"
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
