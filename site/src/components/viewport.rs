//! Paging container shared by the slide deck and the feature cards.
//!
//! Renders one labelled slide per child and wires browser input (wheel,
//! scrollbar pointer events, prev/next buttons) into the [`Carousel`]
//! held in a signal. Styles are recomputed from carousel state, so the
//! server render shows the initial slide and the browser animates from there.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::{ICON_CARET_LEFT, ICON_CARET_RIGHT, Icon};
use crate::carousel::{Carousel, Direction, Pager, ParallaxOffset, Transition, WheelDelta};

/// Delay between a carousel settling and an auto-hiding scrollbar fading out.
pub const SCROLLBAR_HIDE_DELAY_MS: u64 = 1000;

/// Settle `transition` once its duration has elapsed, then let an
/// auto-hiding scrollbar fade out.
fn schedule_settle(state: RwSignal<Carousel>, transition: Transition) {
    set_timeout(
        move || {
            state.update(|c| {
                c.finish_transition();
            });
            schedule_hide(state);
        },
        Duration::from_millis(u64::from(transition.duration_ms)),
    );
}

fn schedule_hide(state: RwSignal<Carousel>) {
    if state.with_untracked(|c| c.config().scrollbar.hide) {
        set_timeout(
            move || state.update(Carousel::hide_scrollbar),
            Duration::from_millis(SCROLLBAR_HIDE_DELAY_MS),
        );
    }
}

/// Scrollbar track under the pointer (the element the handler is bound to).
fn track_element(ev: &ev::PointerEvent) -> Option<web_sys::Element> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

/// Pointer position along the scrollbar track, 0.0 to 1.0.
fn track_fraction(ev: &ev::PointerEvent, direction: Direction) -> f64 {
    let Some(track) = track_element(ev) else {
        return 0.0;
    };
    let rect = track.get_bounding_client_rect();
    match direction {
        Direction::Vertical => fraction_along(f64::from(ev.client_y()), rect.top(), rect.height()),
        Direction::Horizontal => fraction_along(f64::from(ev.client_x()), rect.left(), rect.width()),
    }
}

/// Position of `pointer` along a track starting at `start`. A captured
/// pointer can wander past either end; it pins to the nearest end.
fn fraction_along(pointer: f64, start: f64, length: f64) -> f64 {
    if length <= 0.0 || !pointer.is_finite() {
        return 0.0;
    }
    ((pointer - start) / length).clamp(0.0, 1.0)
}

/// Inline style of slide `idx`: effect transform plus optional parallax.
fn slide_style(carousel: &Carousel, idx: usize, parallax: Option<ParallaxOffset>) -> String {
    let effect = carousel.slide_style(idx);
    let parallax = parallax
        .map(|offset| carousel.parallax_style(idx, offset))
        .unwrap_or_default();
    match (effect.is_empty(), parallax.is_empty()) {
        (true, _) => parallax,
        (false, true) => effect,
        (false, false) => format!("{effect}; {parallax}"),
    }
}

/// Paging container: wrapper, slides, and the controls the config enables.
#[component]
pub fn CarouselViewport(
    /// Paging state
    state: RwSignal<Carousel>,
    /// Slide contents, in order
    slides: Vec<AnyView>,
    /// Extra class on every slide (`deck-slide`, `feature-card`)
    slide_class: &'static str,
    /// Accessible name of the whole carousel
    #[prop(into)]
    label: String,
    /// Parallax hint applied to each slide container
    #[prop(optional)]
    slide_parallax: Option<ParallaxOffset>,
) -> impl IntoView {
    let config = state.with_untracked(|c| c.config().clone());
    let total = slides.len();
    let root_class = format!(
        "carousel carousel-{} effect-{}",
        config.direction.as_label(),
        config.effect.as_label()
    );

    let on_wheel = move |ev: ev::WheelEvent| {
        let Some(outcome) =
            state.try_update(|c| c.on_wheel(WheelDelta::new(ev.delta_x(), ev.delta_y())))
        else {
            return;
        };
        if outcome.captures_event() {
            ev.prevent_default();
        }
        if let Some(transition) = outcome.transition() {
            schedule_settle(state, transition);
        }
    };

    view! {
        <div
            class=root_class
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            on:wheel=on_wheel
        >
            <div class="carousel-wrapper" style=move || state.with(|c| c.wrapper_style())>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slide)| {
                        view! {
                            <div
                                class=move || state.with(|c| c.slide_class(idx, slide_class))
                                style=move || state.with(|c| slide_style(c, idx, slide_parallax))
                                role="group"
                                aria-roledescription="slide"
                                aria-label=format!("{} / {}", idx + 1, total)
                                data-slide-index=idx.to_string()
                            >
                                {slide}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {config.navigation.then(|| view! { <CarouselNavigation state=state /> })}
            {config
                .scrollbar
                .enabled
                .then(|| view! { <CarouselScrollbar state=state direction=config.direction /> })}
        </div>
    }
}

/// Previous/next buttons. Disabled at clamped edges.
#[component]
fn CarouselNavigation(state: RwSignal<Carousel>) -> impl IntoView {
    let go = move |forward: bool| {
        let moved = state
            .try_update(|c| if forward { c.next() } else { c.previous() })
            .flatten();
        if let Some(transition) = moved {
            schedule_settle(state, transition);
        }
    };

    view! {
        <button
            type="button"
            class="carousel-button carousel-prev"
            aria-label="Previous slide"
            disabled=move || !state.with(|c| c.can_previous())
            on:click=move |_| go(false)
        >
            <Icon path=ICON_CARET_LEFT size="24" />
        </button>
        <button
            type="button"
            class="carousel-button carousel-next"
            aria-label="Next slide"
            disabled=move || !state.with(|c| c.can_next())
            on:click=move |_| go(true)
        >
            <Icon path=ICON_CARET_RIGHT size="24" />
        </button>
    }
}

/// Draggable scrollbar that snaps to the nearest slide on release.
#[component]
fn CarouselScrollbar(state: RwSignal<Carousel>, direction: Direction) -> impl IntoView {
    let on_down = move |ev: ev::PointerEvent| {
        if !state.try_update(|c| c.begin_drag()).unwrap_or(false) {
            return;
        }
        ev.prevent_default();
        // Keep receiving moves once the pointer drifts off the thin track
        if let Some(track) = track_element(&ev) {
            let _ = track.set_pointer_capture(ev.pointer_id());
        }
        let fraction = track_fraction(&ev, direction);
        state.update(|c| c.drag_to(fraction));
    };
    let on_move = move |ev: ev::PointerEvent| {
        if state.with_untracked(|c| c.is_dragging()) {
            let fraction = track_fraction(&ev, direction);
            state.update(|c| c.drag_to(fraction));
        }
    };
    let on_release = move |ev: ev::PointerEvent| {
        if !state.with_untracked(|c| c.is_dragging()) {
            return;
        }
        // Capture ends on its own after pointerup; lostpointercapture then
        // finds the drag already released
        let fraction = track_fraction(&ev, direction);
        match state.try_update(|c| c.release_drag(fraction)).flatten() {
            Some(transition) => schedule_settle(state, transition),
            None => schedule_hide(state),
        }
    };

    view! {
        <div
            class=move || state.with(|c| c.scrollbar_class())
            on:pointerdown=on_down
            on:pointermove=on_move
            on:pointerup=on_release
            on:pointercancel=on_release
            on:lostpointercapture=on_release
        >
            <div class="carousel-scrollbar-thumb" style=move || state.with(|c| c.scrollbar_thumb_style())></div>
        </div>
    }
}
