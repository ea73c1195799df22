use leptos::prelude::*;
use leptos_use::{use_media_query, use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::motion::viewport::{classify, ViewportClass};

/// Read-only viewport state shared through context: scroll position, window
/// dimensions, and the touch/desktop classification. Provided once at the
/// composition root.
#[derive(Clone, Copy)]
pub struct Viewport {
    pub width: Signal<f64>,
    pub height: Signal<f64>,
    pub scroll_y: Signal<f64>,
    pub class: Signal<ViewportClass>,
}

pub fn provide_viewport() {
    let UseWindowSizeReturn { width, height } = use_window_size();
    let (_scroll_x, scroll_y) = use_window_scroll();
    let coarse_pointer = use_media_query("(any-pointer: coarse)");
    let class = Signal::derive(move || classify(width.get(), coarse_pointer.get()));
    provide_context(Viewport {
        width,
        height,
        scroll_y,
        class,
    });
}

pub fn use_viewport() -> Viewport {
    expect_context::<Viewport>()
}
