//! # hawkeye-site
//!
//! Landing page for the HawkEye visual-assistance glasses, built with
//! [Leptos](https://leptos.dev/).
//!
//! The page is a vertical, parallax-driven deck of three slides (hero,
//! feature cards, FAQ). The same components render twice:
//!
//! - **Server side** (`ssr` feature, default): [`render_page`] produces a
//!   complete static HTML document, used by the `hawkeye-site` CLI.
//! - **Browser** (`csr` feature): the `landing` bundle mounts
//!   [`components::RootView`] over the pre-rendered markup so panels and
//!   carousels respond to clicks, wheel and drag.
//!
//! ## Quick Start
//!
//! ```rust
//! use hawkeye_site::{render_page, PageAssets, config::SiteConfig};
//!
//! let html = render_page(&SiteConfig::default(), &PageAssets::default()).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`carousel`] - paging state machine behind the [`carousel::Pager`] trait
//! - [`panel`] - open/closed state of collapsible panels
//! - [`content`] - static feature cards and FAQ entries
//! - [`components`] - Leptos UI components
//! - [`config`] - `hawkeye.toml` configuration
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod carousel;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod panel;
pub mod styles;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::{prelude::*, tachys::view::RenderHtml};
#[cfg(feature = "ssr")]
use tracing::{debug, warn};

use config::SiteConfig;
use content::ContentIssue;
pub use error::{Result, SiteError};

/// `id` of the element the page is mounted into.
pub const MOUNT_ID: &str = "app";

/// `id` of the `<script type="application/json">` holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "hawkeye-config";

/// Extra assets referenced by the rendered document.
#[derive(Clone, Debug, Default)]
pub struct PageAssets {
    /// JS glue of the browser bundle (e.g. `./pkg/hawkeye_landing.js`).
    /// Without it the page is static: every panel closed, first slide shown.
    pub bundle_js: Option<String>,
}

/// Every content and configuration issue that would show on the page.
pub fn validate_site(config: &SiteConfig) -> Vec<ContentIssue> {
    let mut issues = content::validate_builtin();
    issues.extend(config.validate());
    issues
}

/// Render the complete landing page document.
///
/// Content issues are logged and do not stop rendering.
///
/// # Example
///
/// ```rust
/// use hawkeye_site::{render_page, PageAssets, config::SiteConfig};
///
/// let assets = PageAssets { bundle_js: Some("./pkg/hawkeye_landing.js".into()) };
/// let html = render_page(&SiteConfig::default(), &assets).unwrap();
/// assert!(html.contains("hawkeye_landing.js"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig, assets: &PageAssets) -> Result<String> {
    for issue in validate_site(config) {
        warn!(%issue, "content issue");
    }

    let config_json = components::escape_script(&config.to_json()?);
    let doc = view! {
        <PageDocument
            config=config.clone()
            assets=assets.clone()
            config_json=config_json
        />
    };
    let html = doc.to_html();
    debug!(bytes = html.len(), "page rendered");

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", html))
}

/// Like [`render_page`], but refuses to render when any issue is found.
#[cfg(feature = "ssr")]
pub fn render_page_strict(config: &SiteConfig, assets: &PageAssets) -> Result<String> {
    let issues = validate_site(config);
    if !issues.is_empty() {
        return Err(SiteError::InvalidContent(issues));
    }
    render_page(config, assets)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use content::{FAQ_ENTRIES, FEATURE_CARDS};

    #[test]
    fn renders_complete_document() {
        let html = render_page(&SiteConfig::default(), &PageAssets::default()).expect("render");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>HawkEye - AI Vision Assistant</title>"));
        assert!(html.contains(r#"id="app""#));
        assert!(!html.contains(r#"type="module""#));
    }

    #[test]
    fn renders_every_card_and_question() {
        let html = render_page(&SiteConfig::default(), &PageAssets::default()).expect("render");

        for card in FEATURE_CARDS {
            assert!(html.contains(card.title));
        }
        for entry in FAQ_ENTRIES {
            assert!(html.contains(entry.title));
        }
        // panels start closed
        assert!(!html.contains("HawkEye is currently free to use!"));
    }

    #[test]
    fn embeds_config_for_browser_bundle() {
        let mut config = SiteConfig::default();
        config.brand = "Hawk</script>Eye".into();
        let html = render_page(&config, &PageAssets::default()).expect("render");

        let marker = format!(r#"id="{CONFIG_ELEMENT_ID}">"#);
        let start = html.find(&marker).expect("config script") + marker.len();
        let json = &html[start..start + html[start..].find("</script>").expect("script end")];

        let parsed = SiteConfig::from_json(&json.replace("<\\/", "</")).expect("valid json");
        assert_eq!(parsed, config);
    }

    #[test]
    fn loads_bundle_when_given() {
        let assets = PageAssets {
            bundle_js: Some("./pkg/hawkeye_landing.js".into()),
        };
        let html = render_page(&SiteConfig::default(), &assets).expect("render");

        assert!(html.contains(r#"<script type="module">"#));
        assert!(html.contains("./pkg/hawkeye_landing.js"));
    }

    #[test]
    fn strict_render_rejects_issues() {
        let mut config = SiteConfig::default();
        config.hero.image = String::new();

        let err = render_page_strict(&config, &PageAssets::default()).unwrap_err();
        match err {
            SiteError::InvalidContent(issues) => assert_eq!(issues.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
        assert!(render_page_strict(&SiteConfig::default(), &PageAssets::default()).is_ok());
    }
}
