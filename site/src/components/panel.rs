//! Collapsible panel component

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, Icon};
use crate::panel::{PanelState, check_panel_props};

/// Header that toggles a body in and out of the DOM.
///
/// The body is unmounted while closed, not hidden. Pass `state` to own the
/// panel's [`PanelState`] from outside; otherwise the panel creates its own.
#[component]
pub fn CollapsiblePanel(
    /// Header text
    #[prop(into)]
    title: String,
    /// Body text, one paragraph per blank-line separated block
    #[prop(into)]
    body: String,
    /// Open/closed state; created closed when omitted
    #[prop(optional)]
    state: Option<RwSignal<PanelState>>,
) -> impl IntoView {
    check_panel_props(&title, &body);
    let state = state.unwrap_or_else(|| RwSignal::new(PanelState::new()));
    let paragraphs: Vec<String> = body
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    view! {
        <div class="panel">
            <button
                type="button"
                class="panel-header"
                aria-expanded=move || state.get().aria_expanded()
                on:click=move |_| state.update(PanelState::toggle)
            >
                <span class="panel-title">{title}</span>
                <span class=move || state.get().indicator_class()>
                    <Icon path=ICON_CARET_DOWN size="18" />
                </span>
            </button>
            <Show when=move || state.get().is_open()>
                <div class=move || state.get().body_class()>
                    {paragraphs.iter().map(|p| view! { <p>{p.clone()}</p> }).collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(state: RwSignal<PanelState>) -> String {
        view! {
            <CollapsiblePanel
                title="How much is it?"
                body="HawkEye is currently free to use!"
                state=state
            />
        }
        .to_html()
    }

    #[test]
    fn closed_panel_has_no_body() {
        let state = RwSignal::new(PanelState::new());
        let html = render(state);

        assert!(html.contains("How much is it?"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("panel-body"));
        assert!(!html.contains("HawkEye is currently free to use!"));
    }

    #[test]
    fn click_opens_then_unmounts_body() {
        let state = RwSignal::new(PanelState::new());

        state.update(PanelState::toggle);
        let open = render(state);
        assert!(open.contains(r#"class="panel-body show""#));
        assert!(open.contains("HawkEye is currently free to use!"));
        assert!(open.contains("panel-indicator rotated"));
        assert!(open.contains(r#"aria-expanded="true""#));

        state.update(PanelState::toggle);
        let closed = render(state);
        assert!(!closed.contains("HawkEye is currently free to use!"));
        assert!(!closed.contains("panel-body"));
    }

    #[test]
    fn splits_body_into_paragraphs() {
        let state = RwSignal::new(PanelState::new());
        state.update(PanelState::toggle);
        let html = view! {
            <CollapsiblePanel title="Q" body="First.\n\nSecond." state=state />
        }
        .to_html();

        assert!(html.contains("<p>First.</p>"));
        assert!(html.contains("<p>Second.</p>"));
    }

    #[test]
    fn missing_title_still_renders() {
        let html = view! { <CollapsiblePanel title="" body="Body" /> }.to_html();
        assert!(html.contains("panel-header"));
    }
}
