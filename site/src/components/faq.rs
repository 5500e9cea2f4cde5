//! FAQ list - one independent collapsible panel per entry

use leptos::prelude::*;

use super::CollapsiblePanel;
use crate::content::{FAQ_ENTRIES, FaqEntry};
use crate::panel::PanelState;

/// One fresh, closed panel state per entry.
pub fn panel_states(count: usize) -> Vec<RwSignal<PanelState>> {
    (0..count).map(|_| RwSignal::new(PanelState::new())).collect()
}

/// Static ordered list of question/answer panels.
#[component]
pub fn FaqList(
    /// Question/answer pairs, in order
    #[prop(default = &FAQ_ENTRIES[..])]
    entries: &'static [FaqEntry],
    /// Per-entry panel states; created here when omitted
    #[prop(optional)]
    states: Option<Vec<RwSignal<PanelState>>>,
) -> impl IntoView {
    let states = states.unwrap_or_else(|| panel_states(entries.len()));

    view! {
        <div class="faq-list">
            {entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    let state = states
                        .get(idx)
                        .copied()
                        .unwrap_or_else(|| RwSignal::new(PanelState::new()));
                    view! { <CollapsiblePanel title=entry.title body=entry.body state=state /> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn how_much_index() -> usize {
        FAQ_ENTRIES
            .iter()
            .position(|e| e.title == "How much is it?")
            .expect("pricing question present")
    }

    #[test]
    fn renders_all_five_entries_closed() {
        let html = view! { <FaqList /> }.to_html();

        assert_eq!(html.matches(r#"class="panel-header""#).count(), 5);
        for entry in FAQ_ENTRIES {
            assert!(html.contains(entry.title), "missing {}", entry.title);
            assert!(!html.contains(entry.body));
        }
    }

    #[test]
    fn clicking_pricing_question_shows_answer() {
        let states = panel_states(FAQ_ENTRIES.len());
        states[how_much_index()].update(PanelState::toggle);

        let html = view! { <FaqList states=states.clone() /> }.to_html();

        assert!(html.contains("HawkEye is currently free to use!"));
        assert_eq!(html.matches(r#"class="panel-body show""#).count(), 1);
    }

    #[test]
    fn opening_one_panel_leaves_siblings_closed() {
        let states = panel_states(FAQ_ENTRIES.len());
        let target = how_much_index();
        states[0].update(PanelState::toggle);
        states[target].update(PanelState::toggle);
        states[0].update(PanelState::toggle);

        for (idx, state) in states.iter().enumerate() {
            assert_eq!(state.get_untracked().is_open(), idx == target);
        }
    }
}
