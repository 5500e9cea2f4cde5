//! Root document component - the complete HTML page
//!
//! Wraps the pre-rendered [`RootView`] in a mount element, embeds the
//! configuration for the browser bundle, and optionally loads that bundle.

use leptos::prelude::*;

use super::RootView;
use crate::config::SiteConfig;
use crate::styles::SITE_CSS;
use crate::{CONFIG_ELEMENT_ID, MOUNT_ID, PageAssets};

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    /// Site configuration
    config: SiteConfig,
    /// Browser bundle to load, if any
    assets: PageAssets,
    /// `config` as JSON, already escaped for a `<script>` element
    config_json: String,
) -> impl IntoView {
    let title = config.title.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div id=MOUNT_ID>
                    <RootView config=config />
                </div>
                <script type="application/json" id=CONFIG_ELEMENT_ID>{config_json}</script>
                {assets.bundle_js.map(|src| view! { <script type="module">{bootstrap_script(&src)}</script> })}
            </body>
        </html>
    }
}

/// Module script initialising a wasm-bindgen bundle.
fn bootstrap_script(src: &str) -> String {
    // serde_json gives a correctly quoted JS string literal
    let quoted = serde_json::to_string(src).unwrap_or_else(|_| "\"\"".into());
    format!("import init from {};\ninit();", escape_script(&quoted))
}

/// Keep embedded text from closing the surrounding `<script>` element.
pub(crate) fn escape_script(text: &str) -> String {
    text.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_imports_bundle() {
        assert_eq!(
            bootstrap_script("./pkg/hawkeye_landing.js"),
            "import init from \"./pkg/hawkeye_landing.js\";\ninit();"
        );
    }

    #[test]
    fn escapes_closing_tags() {
        assert_eq!(escape_script(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }
}
