use std::sync::Arc;

use leptos::{ev, html, prelude::*};
use leptos_use::utils::Pausable;
use leptos_use::{
    use_element_bounding, use_event_listener, use_raf_fn, use_window, UseElementBoundingReturn,
    UseRafFnCallbackArgs,
};

use super::viewport::use_viewport;
use crate::motion::pointer::PointerOffset;
use crate::motion::progress;
use crate::motion::{Choreographer, MotionInput, Sample, TransitionSpec};

/// Smoothing time constant for pointer followers.
const POINTER_TAU_MS: f64 = 150.0;

/// Pull factor for magnetic hover elements.
const MAGNETIC_PULL: f64 = 0.35;

/// How a section's scroll progress is measured against the viewport.
#[derive(Clone, Copy)]
pub enum ProgressSpan {
    /// 0 at entry (top reaches viewport bottom), 1 at exit (bottom reaches
    /// viewport top).
    Through,
    /// 0 with the section top at the viewport top, 1 once scrolled past.
    Exit,
    /// Progress through a section taller than the viewport (pinned content).
    Pin,
}

/// Copyable handle a section uses to style its animated elements each frame.
#[derive(Clone, Copy)]
pub struct SectionMotion {
    choreo: StoredValue<Choreographer>,
    input: Memo<MotionInput>,
    progress: Memo<f64>,
}

impl SectionMotion {
    pub fn sample(&self, target: &'static str, index: usize) -> Sample {
        let input = self.input.get();
        self.choreo.with_value(|c| c.sample(target, index, &input))
    }

    pub fn transform(&self, target: &'static str, index: usize) -> String {
        self.sample(target, index).transform()
    }

    pub fn opacity(&self, target: &'static str, index: usize) -> String {
        self.sample(target, index).opacity()
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }
}

/// Owns one section's animation bindings. Releasing it parks the frame loop
/// and clears every scheduled transition; `use_section_motion` registers the
/// release with the reactive owner so it runs on every exit path.
#[derive(Clone, Copy)]
pub struct MotionHandle {
    choreo: StoredValue<Choreographer>,
    pause: StoredValue<Option<Arc<dyn Fn()>>, LocalStorage>,
}

impl MotionHandle {
    pub fn release(self) {
        if let Some(pause) = self.pause.get_value() {
            pause();
        }
        let _ = self.choreo.try_update_value(|c| c.cancel_all());
    }
}

/// Binds a section's declared transitions to the browser: a rAF clock for
/// entrances and loops, the section's bounding box for scroll progress, and a
/// smoothed window pointer for pointer-follow. The pointer listener is only
/// attached when the schedule still contains a pointer-follow spec, which is
/// never the case on touch viewports.
pub fn use_section_motion(
    section: NodeRef<html::Section>,
    span: ProgressSpan,
    specs: Vec<TransitionSpec>,
    last_index: usize,
) -> SectionMotion {
    let viewport = use_viewport();

    let mut scheduled = Choreographer::new(viewport.class.get_untracked());
    scheduled.schedule_all(specs);
    let follows_pointer = scheduled.has_pointer_follow();
    let settles_after = scheduled.settles_after(last_index);
    let choreo = StoredValue::new(scheduled);

    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(section);
    let progress = Memo::new(move |_| match span {
        ProgressSpan::Through => {
            progress::view_progress(top.get(), height.get(), viewport.height.get())
        }
        ProgressSpan::Exit => progress::exit_progress(top.get(), height.get()),
        ProgressSpan::Pin => {
            progress::pin_progress(top.get(), height.get(), viewport.height.get())
        }
    });

    let (clock, set_clock) = signal(0.0f64);
    let (entered_at, set_entered_at) = signal(None::<f64>);
    let (pointer, set_pointer) = signal(None::<PointerOffset>);
    let (pointer_target, set_pointer_target) = signal(PointerOffset::default());

    if follows_pointer {
        let width = viewport.width;
        let view_height = viewport.height;
        let _ = use_event_listener(use_window(), ev::mousemove, move |evt| {
            set_pointer_target.set(PointerOffset::from_center(
                evt.client_x() as f64,
                evt.client_y() as f64,
                width.get_untracked(),
                view_height.get_untracked(),
            ));
        });
    }

    let raf_pause: StoredValue<Option<Arc<dyn Fn()>>, LocalStorage> = StoredValue::new_local(None);

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let now = clock.get_untracked() + args.delta;
        set_clock.set(now);

        // The entrance gate opens the first time the section is visible and
        // stays open; entrance timelines never re-trigger.
        if entered_at.get_untracked().is_none() {
            let t = top.get_untracked();
            let h = height.get_untracked();
            if h > 0.0 && t < viewport.height.get_untracked() && t + h > 0.0 {
                set_entered_at.set(Some(now));
            }
        }

        if follows_pointer {
            let current = pointer.get_untracked().unwrap_or_default();
            let next = current.approach(pointer_target.get_untracked(), args.delta, POINTER_TAU_MS);
            set_pointer.set(Some(next));
        }

        // Park the frame loop once every finite timeline has settled;
        // scroll-bound sampling stays live through the progress signal.
        if let Some(end) = settles_after {
            if let Some(started) = entered_at.get_untracked() {
                if now - started >= end {
                    if let Some(pause) = raf_pause.get_value() {
                        pause();
                    }
                }
            }
        }
    });
    raf_pause.set_value(Some(Arc::new(pause) as Arc<dyn Fn()>));

    let input = Memo::new(move |_| MotionInput {
        entrance_ms: entered_at.get().map(|started| clock.get() - started),
        clock_ms: clock.get(),
        progress: progress.get(),
        pointer: pointer.get(),
    });

    let handle = MotionHandle {
        choreo,
        pause: raf_pause,
    };
    on_cleanup(move || handle.release());

    SectionMotion {
        choreo,
        input,
        progress,
    }
}

/// Tilt that follows the pointer across a project card, eased by a CSS
/// transition on the element. Touch viewports get a static card: no listener
/// is attached. Returns the transform and whether the card is hovered.
pub fn use_card_tilt(card: NodeRef<html::Article>) -> (Signal<String>, Signal<bool>) {
    let viewport = use_viewport();
    let (hovered, set_hovered) = signal(false);
    let (tilt, set_tilt) = signal((0.0f64, 0.0f64));

    if !viewport.class.get_untracked().is_touch() {
        let UseElementBoundingReturn {
            width,
            height,
            left,
            top,
            ..
        } = use_element_bounding(card);
        let _ = use_event_listener(card, ev::mousemove, move |evt| {
            let w = width.get_untracked();
            let h = height.get_untracked();
            if w <= 0.0 || h <= 0.0 {
                return;
            }
            let x_pct = (evt.client_x() as f64 - left.get_untracked()) / w - 0.5;
            let y_pct = (evt.client_y() as f64 - top.get_untracked()) / h - 0.5;
            set_tilt.set((x_pct, y_pct));
        });
        let _ = use_event_listener(card, ev::mouseenter, move |_| set_hovered.set(true));
        let _ = use_event_listener(card, ev::mouseleave, move |_| {
            set_tilt.set((0.0, 0.0));
            set_hovered.set(false);
        });
    }

    let transform = Signal::derive(move || {
        let (x, y) = tilt.get();
        format!(
            "perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg)",
            y * -7.5,
            x * 7.5
        )
    });
    (transform, hovered.into())
}

/// Magnetic hover: the wrapper drifts toward the pointer while it is over the
/// element and springs back on leave (CSS transition supplies the easing).
/// Touch viewports never attach the listener.
pub fn use_magnetic(wrapper: NodeRef<html::Div>) -> Signal<String> {
    let viewport = use_viewport();
    let (offset, set_offset) = signal(PointerOffset::default());

    if !viewport.class.get_untracked().is_touch() {
        let UseElementBoundingReturn {
            width,
            height,
            left,
            top,
            ..
        } = use_element_bounding(wrapper);
        let _ = use_event_listener(wrapper, ev::mousemove, move |evt| {
            let center_x = left.get_untracked() + width.get_untracked() / 2.0;
            let center_y = top.get_untracked() + height.get_untracked() / 2.0;
            set_offset.set(PointerOffset {
                dx: (evt.client_x() as f64 - center_x) * MAGNETIC_PULL,
                dy: (evt.client_y() as f64 - center_y) * MAGNETIC_PULL,
            });
        });
        let _ = use_event_listener(wrapper, ev::mouseleave, move |_| {
            set_offset.set(PointerOffset::default());
        });
    }

    Signal::derive(move || {
        let o = offset.get();
        format!("translate3d({:.2}px, {:.2}px, 0)", o.dx, o.dy)
    })
}
