use leptos::prelude::*;

use crate::carousel::ParallaxOffset;
use crate::config::HeroConfig;

/// Product photo and call to action.
///
/// `image_style` carries the parallax translation of the photo when the
/// hero sits inside the slide deck.
#[component]
pub fn HeroPanel(
    /// Photo, headline and call to action
    hero: HeroConfig,
    /// Inline style of the photo
    #[prop(optional, into)]
    image_style: Option<Signal<String>>,
) -> impl IntoView {
    let image_style = move || image_style.map(|s| s.get()).unwrap_or_default();

    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{hero.headline}</h1>
                <p class="hero-description">{hero.tagline}</p>
                <a href=hero.cta_href class="btn btn-primary" role="button">
                    {hero.cta_label}
                </a>
            </div>
            <div class="hero-media">
                <img
                    class="hero-image"
                    src=hero.image
                    alt=hero.image_alt
                    data-parallax=ParallaxOffset::HERO_IMAGE.attr()
                    style=image_style
                />
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_image_and_cta() {
        let html = view! { <HeroPanel hero=HeroConfig::default() /> }.to_html();

        assert!(html.contains(r#"src="assets/hawkeye.png""#));
        assert!(html.contains("Get Started"));
        assert!(html.contains(r#"data-parallax="-100""#));
    }

    #[test]
    fn applies_parallax_style() {
        let style = Signal::derive(|| "transform: translate3d(0px, -100px, 0px)".to_string());
        let html = view! { <HeroPanel hero=HeroConfig::default() image_style=style /> }.to_html();

        assert!(html.contains("translate3d(0px, -100px, 0px)"));
    }
}
