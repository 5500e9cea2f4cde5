//! Horizontal feature card carousel

use leptos::prelude::*;

use super::CarouselViewport;
use crate::carousel::{Carousel, CarouselConfig};
use crate::content::{FEATURE_CARDS, FeatureCard};

/// Four descriptive cards, one per page, stacked with the cards effect.
///
/// The viewport is half the container width and centered (see `.feature-cards`).
#[component]
pub fn FeatureCardCarousel(
    /// Paging behaviour
    #[prop(default = CarouselConfig::feature_cards())]
    config: CarouselConfig,
    /// Cards, one per page
    #[prop(default = &FEATURE_CARDS[..])]
    cards: &'static [FeatureCard],
    /// Carousel state; created from `config` when omitted
    #[prop(optional)]
    state: Option<RwSignal<Carousel>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(Carousel::new(config, cards.len())));

    let slides = cards
        .iter()
        .map(|card| {
            view! {
                <article class="card-body">
                    <h3 class="card-title">{card.title}</h3>
                    <p class="card-description">{card.description}</p>
                </article>
            }
            .into_any()
        })
        .collect::<Vec<_>>();

    view! {
        <div class="feature-cards">
            <CarouselViewport state=state slides=slides slide_class="feature-card" label="Features" />
        </div>
    }
}
