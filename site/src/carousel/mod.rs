//! Carousel engine.
//!
//! A small paging state machine used by both the vertical slide deck and
//! the horizontal feature cards. Components only talk to it through
//! [`Pager`] plus the style helpers in [`effects`], so another paging
//! implementation can replace [`Carousel`] without touching the views.
//!
//! ```rust
//! use hawkeye_site::carousel::{Carousel, CarouselConfig, Pager, WheelDelta};
//!
//! let mut deck = Carousel::new(CarouselConfig::slide_deck(), 3);
//! let outcome = deck.on_wheel(WheelDelta::vertical(120.0));
//! assert!(outcome.captures_event());
//! assert_eq!(deck.current_index(), 1);
//! ```

mod config;
pub mod effects;
mod engine;

pub use config::{CarouselConfig, Direction, EdgeMode, Effect, MousewheelConfig, ScrollbarConfig};
pub use effects::ParallaxOffset;
pub use engine::{Carousel, Pager, Transition, WheelDelta, WheelOutcome};
