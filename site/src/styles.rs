//! CSS for the landing page.
//!
//! Inlined into the document head so the page renders without extra
//! requests. Carousel transforms are set inline from carousel state; this
//! sheet only provides layout, theme, and transition hints.
//!
//! # Customization
//!
//! ```rust
//! use hawkeye_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --bg-deep: #050b14;
    --bg-panel: #0d1726;
    --bg-card: #13233a;
    --text-bright: #f2f5fa;
    --text-dim: #9aa7ba;
    --accent: #f5a524;
    --accent-soft: rgba(245, 165, 36, 0.15);
    --border-subtle: rgba(242, 245, 250, 0.08);
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --radius: 14px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    height: 100%;
    background: var(--bg-deep);
    color: var(--text-bright);
    font-family: var(--font-sans);
}

a {
    color: inherit;
    text-decoration: none;
}

/* ---------- Carousel engine ---------- */

.carousel {
    position: relative;
    overflow: hidden;
    width: 100%;
    height: 100%;
}

.carousel-wrapper {
    position: relative;
    display: flex;
    width: 100%;
    height: 100%;
    transition-property: transform;
    transition-timing-function: ease;
}

.carousel-vertical > .carousel-wrapper {
    flex-direction: column;
}

.carousel-slide {
    position: relative;
    flex-shrink: 0;
    width: 100%;
    height: 100%;
    transition-property: transform, opacity;
}

.effect-fade > .carousel-wrapper > .carousel-slide,
.effect-cards > .carousel-wrapper > .carousel-slide {
    position: absolute;
    inset: 0;
}

.carousel-button {
    position: absolute;
    top: 50%;
    z-index: 10;
    display: grid;
    place-items: center;
    width: 44px;
    height: 44px;
    margin-top: -22px;
    border: 1px solid var(--border-subtle);
    border-radius: 50%;
    background: var(--bg-panel);
    color: var(--accent);
    cursor: pointer;
}

.carousel-button:disabled {
    opacity: 0.35;
    cursor: default;
}

.carousel-prev { left: -64px; }
.carousel-next { right: -64px; }

.carousel-scrollbar {
    position: absolute;
    top: 2%;
    right: 6px;
    z-index: 20;
    width: 6px;
    height: 96%;
    border-radius: 3px;
    background: var(--border-subtle);
    opacity: 0;
    transition: opacity 400ms ease;
    touch-action: none;
}

.carousel-horizontal > .carousel-scrollbar {
    top: auto;
    bottom: 6px;
    left: 2%;
    width: 96%;
    height: 6px;
}

.carousel-scrollbar.visible,
.carousel-scrollbar:hover {
    opacity: 1;
}

.carousel-scrollbar-thumb {
    position: absolute;
    width: 100%;
    border-radius: 3px;
    background: var(--accent);
    cursor: grab;
}

.carousel-scrollbar.dragging .carousel-scrollbar-thumb {
    cursor: grabbing;
}

/* ---------- Slide deck ---------- */

.root-view,
.slide-deck {
    width: 100vw;
    height: 100vh;
}

.deck-slide {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0 6vw;
    background: radial-gradient(circle at 20% 10%, var(--bg-panel), var(--bg-deep) 70%);
}

.slide-heading {
    margin: 0 0 3rem;
    font-size: clamp(2rem, 4vw, 3.25rem);
    font-weight: 700;
    transition-property: transform;
}

/* ---------- Navigation ---------- */

.nav {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    padding: 1.25rem 6vw;
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    font-weight: 700;
    font-size: 1.25rem;
}

.nav-logo { color: var(--accent); display: flex; }

.nav-links {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link { color: var(--text-dim); }
.nav-link:hover { color: var(--text-bright); }

.nav-cta {
    padding: 0.5rem 1.1rem;
    border: 1px solid var(--accent);
    border-radius: 999px;
    color: var(--accent);
}

/* ---------- Hero ---------- */

.hero {
    display: grid;
    grid-template-columns: 1fr 1fr;
    align-items: center;
    gap: 4vw;
    width: 100%;
    max-width: 1200px;
}

.hero-title {
    margin: 0 0 1rem;
    font-size: clamp(2.5rem, 5vw, 4.5rem);
    line-height: 1.05;
}

.hero-description {
    margin: 0 0 2rem;
    color: var(--text-dim);
    font-size: 1.15rem;
    line-height: 1.6;
}

.hero-image {
    width: 100%;
    border-radius: var(--radius);
    transition-property: transform;
}

.btn {
    display: inline-block;
    padding: 0.85rem 1.75rem;
    border-radius: 999px;
    font-weight: 600;
}

.btn-primary {
    background: var(--accent);
    color: var(--bg-deep);
}

/* ---------- Feature cards ---------- */

.feature-cards {
    position: relative;
    width: 50%;
    height: 340px;
    margin: 0 auto;
}

.feature-card {
    border-radius: var(--radius);
    background: var(--bg-card);
    box-shadow: 0 18px 40px rgba(0, 0, 0, 0.45);
    transform-origin: center bottom;
}

.card-body {
    display: flex;
    flex-direction: column;
    justify-content: center;
    height: 100%;
    padding: 2.5rem;
}

.card-title {
    margin: 0 0 1rem;
    color: var(--accent);
    font-size: 1.6rem;
}

.card-description {
    margin: 0;
    color: var(--text-dim);
    line-height: 1.6;
}

/* ---------- FAQ ---------- */

.faq-list {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    width: 100%;
    max-width: 760px;
}

.panel {
    border: 1px solid var(--border-subtle);
    border-radius: var(--radius);
    background: var(--bg-panel);
}

.panel-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    width: 100%;
    padding: 1.1rem 1.4rem;
    border: 0;
    background: none;
    color: var(--text-bright);
    font: inherit;
    font-weight: 600;
    text-align: left;
    cursor: pointer;
}

.panel-indicator {
    display: flex;
    color: var(--accent);
    transition: transform 250ms ease;
}

.panel-indicator.rotated {
    transform: rotate(180deg);
}

.panel-body {
    display: none;
    padding: 0 1.4rem 1.1rem;
    color: var(--text-dim);
    line-height: 1.6;
}

.panel-body.show {
    display: block;
}

.panel-body p {
    margin: 0 0 0.75rem;
}

@media (max-width: 820px) {
    .hero { grid-template-columns: 1fr; }
    .feature-cards { width: 80%; }
    .carousel-prev { left: -12px; }
    .carousel-next { right: -12px; }
}
"#;
