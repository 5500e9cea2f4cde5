//! Vertical slide deck - the page itself
//!
//! Three full-viewport slides paged vertically with parallax:
//!
//! ```text
//! SlideDeck
//! ├── 0: NavBar + HeroPanel
//! ├── 1: heading + FeatureCardCarousel
//! └── 2: heading + FaqList
//! ```

use leptos::prelude::*;

use super::{CarouselViewport, FaqList, FeatureCardCarousel, HeroPanel, NavBar};
use crate::carousel::{Carousel, ParallaxOffset};
use crate::config::SiteConfig;

/// Number of slides in the deck.
pub const DECK_SLIDES: usize = 3;

/// Heading of the feature card slide.
pub const FEATURES_HEADING: &str = "Why HawkEye?";
/// Heading of the FAQ slide.
pub const FAQ_HEADING: &str = "Frequently Asked Questions";

#[component]
fn SlideHeading(state: RwSignal<Carousel>, slide: usize, text: &'static str) -> impl IntoView {
    view! {
        <h2
            class="slide-heading"
            data-parallax=ParallaxOffset::HEADING.attr()
            style=move || state.with(|c| c.parallax_style(slide, ParallaxOffset::HEADING))
        >
            {text}
        </h2>
    }
}

/// Full-page vertical deck: hero, feature cards, FAQ.
#[component]
pub fn SlideDeck(
    /// Site configuration; defaults when omitted
    #[prop(optional)]
    config: SiteConfig,
    /// Deck state; created from `config.deck` when omitted
    #[prop(optional)]
    state: Option<RwSignal<Carousel>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(Carousel::new(config.deck.clone(), DECK_SLIDES)));
    let hero_image_style =
        Signal::derive(move || state.with(|c| c.parallax_style(0, ParallaxOffset::HERO_IMAGE)));

    let slides = vec![
        view! {
            <NavBar brand=config.brand.clone() links=config.links.clone() />
            <HeroPanel hero=config.hero.clone() image_style=hero_image_style />
        }
        .into_any(),
        view! {
            <SlideHeading state=state slide=1 text=FEATURES_HEADING />
            <FeatureCardCarousel config=config.cards.clone() />
        }
        .into_any(),
        view! {
            <SlideHeading state=state slide=2 text=FAQ_HEADING />
            <FaqList />
        }
        .into_any(),
    ];

    view! {
        <section class="slide-deck">
            <CarouselViewport
                state=state
                slides=slides
                slide_class="deck-slide"
                label=config.brand
                slide_parallax=ParallaxOffset::SLIDE
            />
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::carousel::{CarouselConfig, Pager, WheelDelta, WheelOutcome};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    /// Whole opening tag around `needle`; SSR writes attributes in its own order.
    fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html.find(needle).expect("needle present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    fn deck_state() -> RwSignal<Carousel> {
        RwSignal::new(Carousel::new(CarouselConfig::slide_deck(), DECK_SLIDES))
    }

    #[test]
    fn renders_three_slides_in_order() {
        let html = view! { <SlideDeck /> }.to_html();

        assert_eq!(html.matches("carousel-slide deck-slide").count(), 3);

        let hero = html.find("hero-title").expect("hero slide");
        let cards = html.find(FEATURES_HEADING).expect("cards slide");
        let faq = html.find(FAQ_HEADING).expect("faq slide");
        assert!(hero < cards && cards < faq);
        assert!(html.find("nav-brand").expect("nav") < hero);
        assert!(html.find("feature-cards").expect("carousel") > cards);
        assert!(html.find("faq-list").expect("faq list") > faq);
    }

    #[test]
    fn starts_on_first_slide() {
        let state = deck_state();
        let html = view! { <SlideDeck state=state /> }.to_html();

        assert_eq!(state.with_untracked(|c| c.current_index()), 0);
        assert!(html.contains(r#"class="carousel-slide deck-slide active""#));
        assert!(html.contains("translate3d(0px, 0%, 0px)"));
    }

    #[test]
    fn wheel_down_on_first_slide_moves_to_features() {
        let state = deck_state();
        let outcome = state
            .try_update(|c| c.on_wheel(WheelDelta::vertical(120.0)))
            .expect("signal alive");

        assert!(matches!(outcome, WheelOutcome::Moved(_)));
        assert_eq!(state.with_untracked(|c| c.current_index()), 1);

        let html = view! { <SlideDeck state=state /> }.to_html();
        assert!(html.contains("translate3d(0px, -100%, 0px)"));

        let tag = opening_tag(&html, r#"class="carousel-slide deck-slide active""#);
        assert!(tag.contains(r#"data-slide-index="1""#), "{tag}");
    }

    #[test]
    fn upcoming_slides_are_offset_by_parallax() {
        let html = view! { <SlideDeck /> }.to_html();

        assert!(html.contains("translate3d(0px, -300px, 0px)"), "slide container");
        assert!(html.contains("translate3d(0px, -200px, 0px)"), "heading");
        assert!(html.contains(r#"data-parallax="-200""#));
    }

    #[test]
    fn uses_configured_links() {
        let mut config = SiteConfig::default();
        config.links.login = "https://dashboard.example.com".into();
        let html = view! { <SlideDeck config=config /> }.to_html();

        assert!(html.contains(r#"href="https://dashboard.example.com""#));
    }
}
