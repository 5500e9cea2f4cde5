//! Inline SVG icons, Phosphor Regular weight (<https://phosphoricons.com/>).

use leptos::prelude::*;

/// Inline SVG icon. Decorative unless `label` is given, in which case it is
/// announced as an image.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CARET_DOWN size="18" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Width and height in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Accessible name; omit for decorative icons
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="icon"
            width=size
            height=size
            viewBox="0 0 256 256"
            fill="currentColor"
            role=label.map(|_| "img")
            aria-label=label
            aria-hidden=label.is_none().then_some("true")
            focusable="false"
        >
            <path d=path></path>
        </svg>
    }
}

/// Disclosure indicator of collapsible panels
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

/// Previous card
pub const ICON_CARET_LEFT: &str = "M165.66,202.34a8,8,0,0,1-11.32,11.32l-80-80a8,8,0,0,1,0-11.32l80-80a8,8,0,0,1,11.32,11.32L91.31,128Z";

/// Next card
pub const ICON_CARET_RIGHT: &str = "M181.66,133.66l-80,80a8,8,0,0,1-11.32-11.32L164.69,128,90.34,53.66a8,8,0,0,1,11.32-11.32l80,80A8,8,0,0,1,181.66,133.66Z";

/// Brand mark
pub const ICON_EYE: &str = "M247.31,124.76c-.35-.79-8.82-19.58-27.65-38.41C194.57,61.26,162.88,48,128,48S61.43,61.26,36.34,86.35C17.51,105.18,9,124,8.69,124.76a8,8,0,0,0,0,6.5c.35.79,8.82,19.57,27.65,38.4C61.43,194.74,93.12,208,128,208s66.57-13.26,91.66-38.34c18.83-18.83,27.3-37.61,27.65-38.4A8,8,0,0,0,247.31,124.76ZM128,192c-30.78,0-57.67-11.19-79.93-33.25A133.47,133.47,0,0,1,25,128,133.33,133.33,0,0,1,48.07,97.25C70.33,75.19,97.22,64,128,64s57.67,11.19,79.93,33.25A133.46,133.46,0,0,1,231.05,128C223.84,141.46,192.43,192,128,192Zm0-112a48,48,0,1,0,48,48A48.05,48.05,0,0,0,128,80Zm0,80a32,32,0,1,1,32-32A32,32,0,0,1,128,160Z";

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn decorative_icon_is_hidden_from_screen_readers() {
        let html = view! { <Icon path=ICON_CARET_DOWN /> }.to_html();

        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(!html.contains("aria-label"));
        assert!(html.contains(r#"width="20""#));
    }

    #[test]
    fn labelled_icon_is_an_image() {
        let html = view! { <Icon path=ICON_EYE size="28" label="HawkEye logo" /> }.to_html();

        assert!(html.contains(r#"role="img""#));
        assert!(html.contains(r#"aria-label="HawkEye logo""#));
        assert!(!html.contains("aria-hidden"));
    }
}
