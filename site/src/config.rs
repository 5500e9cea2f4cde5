//! Configuration file support for the site.
//!
//! Loads optional `hawkeye.toml` from the project root. Every field has a
//! default, so an empty or missing file renders the stock landing page.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::carousel::CarouselConfig;
use crate::content::ContentIssue;
use crate::error::{Result, SiteError};

/// Default configuration file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "hawkeye.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document `<title>`
    pub title: String,
    /// Brand name in the navigation bar
    pub brand: String,
    /// Navigation targets
    pub links: LinkConfig,
    /// First slide content
    pub hero: HeroConfig,
    /// Vertical page deck
    pub deck: CarouselConfig,
    /// Horizontal feature cards
    pub cards: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "HawkEye - AI Vision Assistant".into(),
            brand: "HawkEye".into(),
            links: LinkConfig::default(),
            hero: HeroConfig::default(),
            deck: CarouselConfig::slide_deck(),
            cards: CarouselConfig::feature_cards(),
        }
    }
}

/// Outbound navigation targets. Both are opaque to this site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Brand and "Home" link target
    pub home: String,
    /// Dashboard sign-in, served elsewhere
    pub login: String,
    /// Text of the login link
    pub login_label: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            home: "/".into(),
            login: "/login".into(),
            login_label: "Login".into(),
        }
    }
}

/// Hero slide content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Product photo, resolved by the host
    pub image: String,
    /// Alternative text of the photo
    pub image_alt: String,
    /// Main heading
    pub headline: String,
    /// Sentence under the heading
    pub tagline: String,
    /// Call-to-action button text
    pub cta_label: String,
    /// Call-to-action target
    pub cta_href: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            image: "assets/hawkeye.png".into(),
            image_alt: "HawkEye smart glasses".into(),
            headline: "See the world, out loud.".into(),
            tagline: "AI-powered glasses that read, recognize and describe what you look at."
                .into(),
            cta_label: "Get Started".into(),
            cta_href: "/login".into(),
        }
    }
}

impl SiteConfig {
    /// Load config from `hawkeye.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or malformed files are errors.
    ///
    /// The file is layered over [`SiteConfig::default`], so a partial
    /// `[deck.mousewheel]` table keeps every other deck preset value.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config_err = |source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        };

        let overlay: toml::Table = toml::from_str(&content).map_err(config_err)?;
        let mut base = toml::Value::try_from(Self::default())?;
        if let toml::Value::Table(table) = &mut base {
            merge_tables(table, overlay);
        }
        base.try_into().map_err(config_err)
    }

    /// JSON form embedded in the page for the browser bundle.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON embedded by [`SiteConfig::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Problems that would make the rendered page misbehave.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("links.home", &self.links.home),
            ("links.login", &self.links.login),
            ("hero.image", &self.hero.image),
        ] {
            if value.trim().is_empty() {
                issues.push(ContentIssue::Config {
                    field,
                    reason: "must not be empty".into(),
                });
            }
        }
        for (field, reason) in self.deck.problems() {
            issues.push(ContentIssue::Config {
                field: deck_field(field),
                reason,
            });
        }
        for (field, reason) in self.cards.problems() {
            issues.push(ContentIssue::Config {
                field: cards_field(field),
                reason,
            });
        }
        issues
    }
}

/// Deep-merge `overlay` into `base`; nested tables merge, everything else replaces.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(patch)) => merge_tables(inner, patch),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn deck_field(field: &'static str) -> &'static str {
    match field {
        "slides_per_view" => "deck.slides_per_view",
        "mousewheel.sensitivity" => "deck.mousewheel.sensitivity",
        "mousewheel.threshold_delta" => "deck.mousewheel.threshold_delta",
        other => other,
    }
}

fn cards_field(field: &'static str) -> &'static str {
    match field {
        "slides_per_view" => "cards.slides_per_view",
        "mousewheel.sensitivity" => "cards.mousewheel.sensitivity",
        "mousewheel.threshold_delta" => "cards.mousewheel.threshold_delta",
        other => other,
    }
}
