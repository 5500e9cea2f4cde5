use leptos::prelude::*;

use super::SlideDeck;
use crate::config::SiteConfig;

/// Page entry point, shared by the server render and the browser bundle.
#[component]
pub fn RootView(
    /// Site configuration; defaults when omitted
    #[prop(optional)]
    config: SiteConfig,
) -> impl IntoView {
    view! {
        <main class="root-view">
            <SlideDeck config=config />
        </main>
    }
}
