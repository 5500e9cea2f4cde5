//! Leptos UI components for the landing page.
//!
//! Every component renders both on the server (pre-rendered document) and
//! in the browser bundle, where the same signals drive interaction.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── RootView
//!     └── SlideDeck (CarouselViewport, vertical)
//!         ├── NavBar + HeroPanel
//!         ├── SlideHeading + FeatureCardCarousel (CarouselViewport, cards)
//!         └── SlideHeading + FaqList
//!             └── CollapsiblePanel (x5)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use hawkeye_site::components::{FaqList, FeatureCardCarousel};
//!
//! view! {
//!     <FeatureCardCarousel />
//!     <FaqList />
//! }
//! ```

mod document;
mod faq;
mod feature_cards;
mod hero;
mod icons;
mod nav;
mod panel;
mod root;
mod slide_deck;
mod viewport;

pub(crate) use document::escape_script;
pub use document::PageDocument;
pub use faq::{FaqList, panel_states};
pub use feature_cards::FeatureCardCarousel;
pub use hero::HeroPanel;
pub use icons::*;
pub use nav::NavBar;
pub use panel::CollapsiblePanel;
pub use root::RootView;
pub use slide_deck::{DECK_SLIDES, FAQ_HEADING, FEATURES_HEADING, SlideDeck};
pub use viewport::{CarouselViewport, SCROLLBAR_HIDE_DELAY_MS};
