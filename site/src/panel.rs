//! Open/closed state of a single collapsible panel.
//!
//! Each panel owns exactly one [`PanelState`]; nothing coordinates panels
//! with each other, so opening one never closes another.

use tracing::warn;

/// Local state of one collapsible panel. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    is_open: bool,
}

impl PanelState {
    /// Closed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the body is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Header click.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Class list of the body wrapper. The body only exists while open,
    /// but the class is still derived from state rather than assumed.
    pub fn body_class(&self) -> &'static str {
        if self.is_open {
            "panel-body show"
        } else {
            "panel-body"
        }
    }

    /// Class list of the disclosure indicator (rotated 180° while open).
    pub fn indicator_class(&self) -> &'static str {
        if self.is_open {
            "panel-indicator rotated"
        } else {
            "panel-indicator"
        }
    }

    /// Value for the header's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open { "true" } else { "false" }
    }
}

/// Warn about a panel declared without a title or body.
///
/// Rendering continues either way; this only surfaces authoring mistakes.
/// Returns `true` when the props are complete.
pub fn check_panel_props(title: &str, body: &str) -> bool {
    let mut ok = true;
    if title.trim().is_empty() {
        warn!(target: "hawkeye_site::panel", "CollapsiblePanel is missing required prop `title`");
        ok = false;
    }
    if body.trim().is_empty() {
        warn!(target: "hawkeye_site::panel", title, "CollapsiblePanel is missing required prop `body`");
        ok = false;
    }
    ok
}
