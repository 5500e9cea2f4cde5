//! Carousel configuration: direction, effect, speed and input mapping.

use serde::{Deserialize, Serialize};

/// Paging axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Direction {
    /// Name used in CSS classes and config files.
    pub fn as_label(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

/// Visual transition between slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Slides sit side by side and the wrapper translates.
    #[default]
    Slide,
    /// Slides are stacked; only the active one is opaque.
    Fade,
    /// Slides are stacked like a hand of cards; passed cards fly out.
    Cards,
}

impl Effect {
    /// Name used in CSS classes and config files.
    pub fn as_label(&self) -> &'static str {
        match self {
            Effect::Slide => "slide",
            Effect::Fade => "fade",
            Effect::Cards => "cards",
        }
    }
}

/// What happens when paging past the first or last slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Stay on the edge slide.
    #[default]
    Clamp,
    /// Continue from the opposite end.
    Wrap,
}

/// Scrollbar behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Render the scrollbar at all
    pub enabled: bool,
    /// Thumb can be dragged with the pointer
    pub draggable: bool,
    /// Hide again once the carousel settles
    pub hide: bool,
    /// Snap to the nearest slide when the drag is released
    pub snap_on_release: bool,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            draggable: true,
            hide: true,
            snap_on_release: true,
        }
    }
}

/// Mouse-wheel behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MousewheelConfig {
    /// Page with the mouse wheel
    pub enabled: bool,
    /// Only read the delta along the paging axis
    pub force_to_axis: bool,
    /// Let the outer page scroll when paging past the first or last slide
    pub release_on_edges: bool,
    /// Multiplier applied to the raw delta
    pub sensitivity: f64,
    /// Scaled deltas at or below this magnitude are ignored
    pub threshold_delta: f64,
}

impl Default for MousewheelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            force_to_axis: false,
            release_on_edges: false,
            sensitivity: 1.0,
            threshold_delta: 10.0,
        }
    }
}

/// Complete configuration of one carousel instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Paging axis
    pub direction: Direction,
    /// Slides visible at once; only 1 is supported
    pub slides_per_view: usize,
    /// Transition effect
    pub effect: Effect,
    /// Move `data-parallax` layers while paging
    pub parallax: bool,
    /// Transition duration in milliseconds
    pub speed_ms: u32,
    /// Show previous/next buttons
    pub navigation: bool,
    /// Behaviour past the first or last slide
    pub edge_mode: EdgeMode,
    /// Scrollbar input
    pub scrollbar: ScrollbarConfig,
    /// Mouse-wheel input
    pub mousewheel: MousewheelConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            slides_per_view: 1,
            effect: Effect::Slide,
            parallax: false,
            speed_ms: 300,
            navigation: false,
            edge_mode: EdgeMode::Clamp,
            scrollbar: ScrollbarConfig::default(),
            mousewheel: MousewheelConfig::default(),
        }
    }
}

impl CarouselConfig {
    /// The full-page vertical deck: parallax, 1s transitions, draggable
    /// auto-hiding scrollbar, vertical wheel that releases at the edges.
    pub fn slide_deck() -> Self {
        Self {
            direction: Direction::Vertical,
            slides_per_view: 1,
            effect: Effect::Slide,
            parallax: true,
            speed_ms: 1000,
            navigation: false,
            edge_mode: EdgeMode::Clamp,
            scrollbar: ScrollbarConfig {
                enabled: true,
                draggable: true,
                hide: true,
                snap_on_release: true,
            },
            mousewheel: MousewheelConfig {
                enabled: true,
                force_to_axis: true,
                release_on_edges: true,
                sensitivity: 1.0,
                threshold_delta: 30.0,
            },
        }
    }

    /// The horizontal feature cards: stacked cards effect, prev/next
    /// buttons, wheel locked to the horizontal axis.
    pub fn feature_cards() -> Self {
        Self {
            direction: Direction::Horizontal,
            slides_per_view: 1,
            effect: Effect::Cards,
            parallax: false,
            speed_ms: 300,
            navigation: true,
            edge_mode: EdgeMode::Clamp,
            scrollbar: ScrollbarConfig::default(),
            mousewheel: MousewheelConfig {
                enabled: true,
                force_to_axis: true,
                release_on_edges: false,
                sensitivity: 1.0,
                threshold_delta: 10.0,
            },
        }
    }

    /// Human-readable problems with this configuration, keyed by field.
    pub fn problems(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if self.slides_per_view != 1 {
            out.push((
                "slides_per_view",
                format!("only 1 slide per view is supported, got {}", self.slides_per_view),
            ));
        }
        if !self.mousewheel.sensitivity.is_finite() || self.mousewheel.sensitivity <= 0.0 {
            out.push((
                "mousewheel.sensitivity",
                format!("must be a positive number, got {}", self.mousewheel.sensitivity),
            ));
        }
        if !self.mousewheel.threshold_delta.is_finite() || self.mousewheel.threshold_delta < 0.0 {
            out.push((
                "mousewheel.threshold_delta",
                format!("must be zero or positive, got {}", self.mousewheel.threshold_delta),
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_preset_matches_page_behaviour() {
        let deck = CarouselConfig::slide_deck();
        assert_eq!(deck.direction, Direction::Vertical);
        assert_eq!(deck.speed_ms, 1000);
        assert!(deck.parallax);
        assert!(deck.scrollbar.enabled && deck.scrollbar.draggable);
        assert!(deck.scrollbar.hide && deck.scrollbar.snap_on_release);
        assert!(deck.mousewheel.force_to_axis && deck.mousewheel.release_on_edges);
        assert_eq!(deck.edge_mode, EdgeMode::Clamp);
    }

    #[test]
    fn cards_preset_uses_cards_effect() {
        let cards = CarouselConfig::feature_cards();
        assert_eq!(cards.direction, Direction::Horizontal);
        assert_eq!(cards.effect, Effect::Cards);
        assert!(cards.navigation);
        assert!(cards.mousewheel.force_to_axis);
        assert!(!cards.mousewheel.release_on_edges);
    }

    #[test]
    fn presets_have_no_problems() {
        assert!(CarouselConfig::slide_deck().problems().is_empty());
        assert!(CarouselConfig::feature_cards().problems().is_empty());
    }

    #[test]
    fn flags_bad_wheel_settings() {
        let mut config = CarouselConfig::default();
        config.mousewheel.sensitivity = 0.0;
        config.mousewheel.threshold_delta = -1.0;

        let fields: Vec<_> = config.problems().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec!["mousewheel.sensitivity", "mousewheel.threshold_delta"]
        );
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: CarouselConfig = toml::from_str(
            r#"
direction = "vertical"
edge_mode = "wrap"

[mousewheel]
enabled = true
"#,
        )
        .expect("parse");

        assert_eq!(config.direction, Direction::Vertical);
        assert_eq!(config.edge_mode, EdgeMode::Wrap);
        assert!(config.mousewheel.enabled);
        assert_eq!(config.mousewheel.sensitivity, 1.0);
        assert_eq!(config.speed_ms, 300);
    }
}
