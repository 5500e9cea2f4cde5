use leptos::prelude::*;

use super::{ICON_EYE, Icon};
use crate::config::LinkConfig;

/// Brand mark plus the home and login links.
#[component]
pub fn NavBar(
    /// Brand name next to the logo
    #[prop(into)]
    brand: String,
    /// Link targets
    links: LinkConfig,
) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href=links.home.clone() class="nav-brand">
                    <span class="nav-logo">
                        <Icon path=ICON_EYE size="28" label="HawkEye logo" />
                    </span>
                    <span class="nav-title">{brand}</span>
                </a>
                <div class="nav-links">
                    <a href=links.home class="nav-link">"Home"</a>
                    <a href=links.login class="nav-cta" rel="external">{links.login_label}</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_brand_and_both_links() {
        let html = view! { <NavBar brand="HawkEye" links=LinkConfig::default() /> }.to_html();

        assert!(html.contains("HawkEye"));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains("Login"));
    }
}
