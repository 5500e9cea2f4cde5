//! Paging state machine: active index, in-flight transition, wheel and
//! scrollbar input.

use tracing::debug;

use super::config::{CarouselConfig, Direction, EdgeMode};

/// The minimal paging interface the page components rely on.
///
/// Anything that can hold an active index and move it can stand in for
/// [`Carousel`].
pub trait Pager {
    /// Number of slides.
    fn len(&self) -> usize;

    /// Whether there are no slides.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the active slide.
    fn current_index(&self) -> usize;

    /// Start a transition to `index` (clamped into range).
    ///
    /// Returns `None` when nothing moves: same index, empty pager, or a
    /// transition already in flight.
    fn go_to(&mut self, index: usize) -> Option<Transition>;

    /// Start a transition to the following slide.
    fn next(&mut self) -> Option<Transition>;

    /// Start a transition to the preceding slide.
    fn previous(&mut self) -> Option<Transition>;
}

/// A started transition between two slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Index active before the transition
    pub from: usize,
    /// Index active once it settles
    pub to: usize,
    /// Animation length
    pub duration_ms: u32,
}

/// Raw wheel deltas as reported by the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelDelta {
    /// Horizontal delta, positive to the right
    pub x: f64,
    /// Vertical delta, positive downwards
    pub y: f64,
}

impl WheelDelta {
    /// Delta on both axes.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vertical-only delta.
    pub fn vertical(y: f64) -> Self {
        Self { x: 0.0, y }
    }

    /// Horizontal-only delta.
    pub fn horizontal(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
}

/// What the carousel did with a wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// A transition started.
    Moved(Transition),
    /// The event belongs to the carousel but nothing moved (transition in
    /// flight, or a clamped edge without release).
    Captured,
    /// Paging past an edge; the outer page should scroll instead.
    Released,
    /// Wheel disabled, wrong axis, or below the threshold.
    Ignored,
}

impl WheelOutcome {
    /// Whether the browser's default scrolling should be suppressed.
    pub fn captures_event(&self) -> bool {
        matches!(self, WheelOutcome::Moved(_) | WheelOutcome::Captured)
    }

    /// Transition started by the event, if any.
    pub fn transition(&self) -> Option<Transition> {
        match self {
            WheelOutcome::Moved(t) => Some(*t),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScrollbarState {
    visible: bool,
    dragging: bool,
    drag_fraction: f64,
}

/// Carousel engine for one paging container.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    config: CarouselConfig,
    len: usize,
    index: usize,
    in_flight: Option<Transition>,
    scrollbar: ScrollbarState,
}

impl Carousel {
    /// Carousel over `len` slides, resting on the first one.
    pub fn new(config: CarouselConfig, len: usize) -> Self {
        Self {
            config,
            len,
            index: 0,
            in_flight: None,
            scrollbar: ScrollbarState::default(),
        }
    }

    /// Configuration the carousel was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Transition currently running, if any.
    pub fn in_flight(&self) -> Option<Transition> {
        self.in_flight
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Mark the running transition as complete. Called once its duration
    /// has elapsed; transitions are never cancelled half-way.
    pub fn finish_transition(&mut self) -> Option<Transition> {
        let done = self.in_flight.take();
        if let Some(t) = done {
            debug!(from = t.from, to = t.to, "carousel transition settled");
        }
        done
    }

    /// Whether [`Pager::next`] would move.
    pub fn can_next(&self) -> bool {
        match self.config.edge_mode {
            EdgeMode::Wrap => self.len > 1,
            EdgeMode::Clamp => self.index + 1 < self.len,
        }
    }

    /// Whether [`Pager::previous`] would move.
    pub fn can_previous(&self) -> bool {
        match self.config.edge_mode {
            EdgeMode::Wrap => self.len > 1,
            EdgeMode::Clamp => self.index > 0,
        }
    }

    /// Signed position of slide `i` relative to the active slide, clamped
    /// to `[-1, 1]`. Upcoming slides are positive.
    pub fn progress(&self, i: usize) -> f64 {
        (i as f64 - self.index as f64).clamp(-1.0, 1.0)
    }

    // ------------------------------------------------------------------
    // Wheel
    // ------------------------------------------------------------------

    /// Map one wheel event onto the carousel.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> WheelOutcome {
        let wheel = &self.config.mousewheel;
        if !wheel.enabled || self.len == 0 {
            return WheelOutcome::Ignored;
        }

        let raw = if wheel.force_to_axis {
            match self.config.direction {
                Direction::Vertical => delta.y,
                Direction::Horizontal => delta.x,
            }
        } else if delta.x.abs() > delta.y.abs() {
            delta.x
        } else {
            delta.y
        };
        let scaled = raw * wheel.sensitivity;
        if !scaled.is_finite() || scaled.abs() <= wheel.threshold_delta {
            return WheelOutcome::Ignored;
        }

        // Swallow input until the transition settles, edge slides included
        if self.is_animating() {
            return WheelOutcome::Captured;
        }

        let forward = scaled > 0.0;
        let at_edge = if forward {
            self.index + 1 >= self.len
        } else {
            self.index == 0
        };
        if at_edge && self.config.edge_mode == EdgeMode::Clamp {
            return if wheel.release_on_edges {
                WheelOutcome::Released
            } else {
                WheelOutcome::Captured
            };
        }

        let moved = if forward { self.next() } else { self.previous() };
        match moved {
            Some(t) => WheelOutcome::Moved(t),
            None => WheelOutcome::Captured,
        }
    }

    // ------------------------------------------------------------------
    // Scrollbar
    // ------------------------------------------------------------------

    /// Whether the scrollbar thumb is held.
    pub fn is_dragging(&self) -> bool {
        self.scrollbar.dragging
    }

    /// Pointer pressed on the scrollbar. Returns whether a drag started.
    pub fn begin_drag(&mut self) -> bool {
        let bar = &self.config.scrollbar;
        if !bar.enabled || !bar.draggable || self.len == 0 || self.is_animating() {
            return false;
        }
        self.scrollbar.dragging = true;
        self.scrollbar.visible = true;
        self.scrollbar.drag_fraction = self.index_fraction();
        debug!(index = self.index, "scrollbar drag started");
        true
    }

    /// Pointer moved while dragging; `fraction` is the pointer position
    /// along the track, 0.0 at the start and 1.0 at the end.
    pub fn drag_to(&mut self, fraction: f64) {
        if self.scrollbar.dragging && fraction.is_finite() {
            self.scrollbar.drag_fraction = fraction.clamp(0.0, 1.0);
        }
    }

    /// Pointer released. Snaps to the nearest slide when configured.
    pub fn release_drag(&mut self, fraction: f64) -> Option<Transition> {
        if !self.scrollbar.dragging {
            return None;
        }
        self.drag_to(fraction);
        self.scrollbar.dragging = false;
        if !self.config.scrollbar.snap_on_release {
            return None;
        }
        let target = self.nearest_slide(self.scrollbar.drag_fraction);
        debug!(target, "scrollbar released");
        self.go_to(target)
    }

    /// Slide closest to a position along the track.
    pub fn nearest_slide(&self, fraction: f64) -> usize {
        if self.len <= 1 {
            return 0;
        }
        let last = (self.len - 1) as f64;
        (fraction.clamp(0.0, 1.0) * last).round() as usize
    }

    /// Hide an auto-hiding scrollbar. Ignored while the user is still
    /// dragging or a transition is running.
    pub fn hide_scrollbar(&mut self) {
        if self.config.scrollbar.hide && !self.scrollbar.dragging && !self.is_animating() {
            self.scrollbar.visible = false;
        }
    }

    /// Whether the scrollbar is currently shown.
    pub fn scrollbar_visible(&self) -> bool {
        let bar = &self.config.scrollbar;
        bar.enabled && (!bar.hide || self.scrollbar.visible || self.scrollbar.dragging)
    }

    /// Thumb geometry as `(size, offset)`, both fractions of the track.
    pub fn scrollbar_thumb(&self) -> (f64, f64) {
        if self.len == 0 {
            return (1.0, 0.0);
        }
        let size = 1.0 / self.len as f64;
        let position = if self.scrollbar.dragging {
            self.scrollbar.drag_fraction
        } else {
            self.index_fraction()
        };
        (size, position * (1.0 - size))
    }

    fn index_fraction(&self) -> f64 {
        if self.len <= 1 {
            0.0
        } else {
            self.index as f64 / (self.len - 1) as f64
        }
    }

    fn start(&mut self, to: usize) -> Option<Transition> {
        if self.len == 0 || self.is_animating() || to == self.index {
            return None;
        }
        let transition = Transition {
            from: self.index,
            to,
            duration_ms: self.config.speed_ms,
        };
        self.index = to;
        self.in_flight = Some(transition);
        if self.config.scrollbar.enabled {
            self.scrollbar.visible = true;
        }
        debug!(
            from = transition.from,
            to = transition.to,
            duration_ms = transition.duration_ms,
            "carousel transition started"
        );
        Some(transition)
    }
}

impl Pager for Carousel {
    fn len(&self) -> usize {
        self.len
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn go_to(&mut self, index: usize) -> Option<Transition> {
        let target = index.min(self.len.saturating_sub(1));
        self.start(target)
    }

    fn next(&mut self) -> Option<Transition> {
        if self.index + 1 < self.len {
            self.start(self.index + 1)
        } else if self.config.edge_mode == EdgeMode::Wrap {
            self.start(0)
        } else {
            None
        }
    }

    fn previous(&mut self) -> Option<Transition> {
        if self.index > 0 {
            self.start(self.index - 1)
        } else if self.config.edge_mode == EdgeMode::Wrap {
            self.start(self.len.saturating_sub(1))
        } else {
            None
        }
    }
}
