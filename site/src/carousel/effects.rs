//! Inline styles derived from carousel state: wrapper translation, fade
//! and cards effects, parallax layers and the scrollbar thumb.

use super::config::{Direction, Effect};
use super::engine::{Carousel, Pager};

/// Pixel displacement hint for a parallax layer. The layer is translated by
/// `offset * progress` along the paging axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOffset(pub f64);

impl ParallaxOffset {
    /// Whole slide container.
    pub const SLIDE: ParallaxOffset = ParallaxOffset(-300.0);
    /// Slide headings drift slower than the container.
    pub const HEADING: ParallaxOffset = ParallaxOffset(-200.0);
    /// Hero product photo.
    pub const HERO_IMAGE: ParallaxOffset = ParallaxOffset(-100.0);

    /// Value for the `data-parallax` attribute.
    pub fn attr(&self) -> String {
        format!("{}", self.0)
    }
}

fn translate(direction: Direction, amount: &str) -> String {
    match direction {
        Direction::Horizontal => format!("translate3d({amount}, 0px, 0px)"),
        Direction::Vertical => format!("translate3d(0px, {amount}, 0px)"),
    }
}

/// Round a pixel value so the styles stay stable across platforms.
fn px(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0px".to_string()
    } else {
        format!("{}px", rounded as i64)
    }
}

impl Carousel {
    fn duration(&self) -> String {
        format!("transition-duration: {}ms", self.config().speed_ms)
    }

    /// Style of the element holding all slides.
    pub fn wrapper_style(&self) -> String {
        match self.config().effect {
            Effect::Slide => {
                let shift = format!("-{}%", self.current_index() * 100);
                let shift = if self.current_index() == 0 { "0%".to_string() } else { shift };
                format!(
                    "transform: {}; {}",
                    translate(self.config().direction, &shift),
                    self.duration()
                )
            }
            Effect::Fade | Effect::Cards => self.duration(),
        }
    }

    /// Class list of slide `i`; `extra` is the per-carousel slide class.
    pub fn slide_class(&self, i: usize, extra: &str) -> String {
        let mut class = format!("carousel-slide {extra}");
        let active = self.current_index();
        if i == active {
            class.push_str(" active");
        } else if i + 1 == active {
            class.push_str(" prev");
        } else if i == active + 1 {
            class.push_str(" next");
        }
        class
    }

    /// Style of slide `i` for the configured effect.
    pub fn slide_style(&self, i: usize) -> String {
        match self.config().effect {
            Effect::Slide => String::new(),
            Effect::Fade => {
                let opacity = if i == self.current_index() { 1 } else { 0 };
                format!("opacity: {opacity}; {}", self.duration())
            }
            Effect::Cards => self.cards_style(i),
        }
    }

    /// Stacked-cards transform: upcoming cards fan out behind the active
    /// one, passed cards fly off to the side.
    fn cards_style(&self, i: usize) -> String {
        let depth = i as i64 - self.current_index() as i64;
        if depth < 0 {
            return format!(
                "transform: translate3d(-150%, 0px, 0px) rotateZ(-12deg); opacity: 0; z-index: 0; {}",
                self.duration()
            );
        }
        let z_index = self.len() as i64 - depth;
        format!(
            "transform: translate3d({}px, {}px, {}px) rotateZ({}deg); opacity: 1; z-index: {z_index}; {}",
            depth * 12,
            depth * 6,
            -depth * 60,
            depth * 2,
            self.duration()
        )
    }

    /// Parallax translation of a layer inside slide `i`.
    ///
    /// Empty when parallax is disabled.
    pub fn parallax_style(&self, i: usize, offset: ParallaxOffset) -> String {
        if !self.config().parallax {
            return String::new();
        }
        let amount = px(offset.0 * self.progress(i));
        format!(
            "transform: {}; {}",
            translate(self.config().direction, &amount),
            self.duration()
        )
    }

    /// Style of the scrollbar thumb.
    pub fn scrollbar_thumb_style(&self) -> String {
        let (size, offset) = self.scrollbar_thumb();
        let (length, start) = match self.config().direction {
            Direction::Vertical => ("height", "top"),
            Direction::Horizontal => ("width", "left"),
        };
        format!(
            "{length}: {:.2}%; {start}: {:.2}%",
            size * 100.0,
            offset * 100.0
        )
    }

    /// Class list of the scrollbar track.
    pub fn scrollbar_class(&self) -> &'static str {
        match (self.scrollbar_visible(), self.is_dragging()) {
            (_, true) => "carousel-scrollbar visible dragging",
            (true, false) => "carousel-scrollbar visible",
            (false, false) => "carousel-scrollbar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn vertical_wrapper_follows_index() {
        let mut deck = Carousel::new(CarouselConfig::slide_deck(), 3);
        assert_eq!(
            deck.wrapper_style(),
            "transform: translate3d(0px, 0%, 0px); transition-duration: 1000ms"
        );
        deck.go_to(2);
        assert_eq!(
            deck.wrapper_style(),
            "transform: translate3d(0px, -200%, 0px); transition-duration: 1000ms"
        );
    }

    #[test]
    fn slide_classes_mark_neighbours() {
        let mut deck = Carousel::new(CarouselConfig::slide_deck(), 3);
        deck.go_to(1);
        assert_eq!(deck.slide_class(0, "deck-slide"), "carousel-slide deck-slide prev");
        assert_eq!(deck.slide_class(1, "deck-slide"), "carousel-slide deck-slide active");
        assert_eq!(deck.slide_class(2, "deck-slide"), "carousel-slide deck-slide next");
    }

    #[test]
    fn parallax_moves_upcoming_slides() {
        let deck = Carousel::new(CarouselConfig::slide_deck(), 3);
        assert_eq!(
            deck.parallax_style(0, ParallaxOffset::HEADING),
            "transform: translate3d(0px, 0px, 0px); transition-duration: 1000ms"
        );
        assert_eq!(
            deck.parallax_style(1, ParallaxOffset::HEADING),
            "transform: translate3d(0px, -200px, 0px); transition-duration: 1000ms"
        );
        // progress is clamped, so two slides away moves the same as one
        assert_eq!(
            deck.parallax_style(2, ParallaxOffset::SLIDE),
            "transform: translate3d(0px, -300px, 0px); transition-duration: 1000ms"
        );
    }

    #[test]
    fn parallax_disabled_renders_nothing() {
        let cards = Carousel::new(CarouselConfig::feature_cards(), 4);
        assert_eq!(cards.parallax_style(1, ParallaxOffset::HEADING), "");
    }

    #[test]
    fn cards_stack_behind_active() {
        let mut cards = Carousel::new(CarouselConfig::feature_cards(), 4);
        cards.go_to(1);
        assert!(cards.slide_style(0).contains("opacity: 0"));
        assert_eq!(
            cards.slide_style(1),
            "transform: translate3d(0px, 0px, 0px) rotateZ(0deg); opacity: 1; z-index: 4; transition-duration: 300ms"
        );
        assert!(cards.slide_style(2).contains("z-index: 3"));
        assert!(cards.slide_style(3).contains("rotateZ(4deg)"));
    }

    #[test]
    fn fade_shows_only_active() {
        let config = CarouselConfig {
            effect: Effect::Fade,
            ..CarouselConfig::default()
        };
        let fade = Carousel::new(config, 2);
        assert!(fade.slide_style(0).starts_with("opacity: 1"));
        assert!(fade.slide_style(1).starts_with("opacity: 0"));
        assert_eq!(fade.wrapper_style(), "transition-duration: 300ms");
    }

    #[test]
    fn thumb_style_uses_axis() {
        let deck = Carousel::new(CarouselConfig::slide_deck(), 4);
        assert_eq!(deck.scrollbar_thumb_style(), "height: 25.00%; top: 0.00%");
    }
}
