//! CSS styles for the storefront page.
//!
//! To extend or override styles:
//!
//! ```rust
//! use storefront::styles::STOREFRONT_CSS;
//!
//! let my_css = ".product-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", STOREFRONT_CSS, my_css);
//! ```
//!
//! Light theme by default, dark theme through `prefers-color-scheme`.
//! Entrance animations (`fade-in`, `slide-up`) read their delay from the
//! element's inline `animation-delay`, see [`crate::motion`].

/// Complete CSS for the storefront.
pub const STOREFRONT_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-card: #ffffff;
    --bg-muted: #f3f4f6;
    --bg-muted-hover: #e5e7eb;
    --text: #111827;
    --text-muted: #4b5563;
    --text-dim: #6b7280;
    --accent: #2563eb;
    --border: #e5e7eb;
    --ink: #000000;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #111827;
        --bg-card: #1f2937;
        --bg-muted: #1f2937;
        --bg-muted-hover: #374151;
        --text: #ffffff;
        --text-muted: #9ca3af;
        --text-dim: #9ca3af;
        --accent: #60a5fa;
        --border: #374151;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
}

/* Hero */

.hero {
    position: relative;
    height: 80vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-image {
    position: absolute;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: #000000;
    opacity: 0.5;
}

.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
    padding: 0 16px;
}

.hero-content > * + * {
    margin-top: 24px;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    color: #ffffff;
    margin: 0;
}

.hero-subtitle {
    font-size: 1.125rem;
    color: #e5e7eb;
    max-width: 42rem;
    margin-left: auto;
    margin-right: auto;
}

.hero-cta {
    padding: 16px 32px;
    background: #ffffff;
    color: #000000;
    font-weight: 600;
    border: none;
    border-radius: 8px;
    cursor: pointer;
    transition: transform 0.3s, box-shadow 0.3s;
}

.hero-cta:hover {
    transform: scale(1.05);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}

.scroll-indicator {
    position: absolute;
    bottom: 32px;
    left: 50%;
    transform: translateX(-50%);
}

.scroll-mouse {
    width: 24px;
    height: 40px;
    border: 2px solid #ffffff;
    border-radius: 9999px;
    display: flex;
    justify-content: center;
}

.scroll-wheel {
    width: 4px;
    height: 12px;
    margin-top: 8px;
    background: #ffffff;
    border-radius: 9999px;
}

@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
    .hero-subtitle { font-size: 1.5rem; }
}

/* Category selector */

.category-selector {
    display: flex;
    justify-content: center;
    gap: 16px;
    margin: 32px 0;
    padding: 0 16px;
}

.category-btn {
    padding: 12px 24px;
    border: none;
    border-radius: 9999px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.3s;
}

.category-btn:hover {
    transform: scale(1.05);
}

.category-btn.selected {
    background: var(--ink);
    color: #ffffff;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
}

.category-btn.unselected {
    background: var(--bg-muted);
    color: var(--text-muted);
}

.category-btn.unselected:hover {
    background: var(--bg-muted-hover);
}

/* Grid */

.grid-panel {
    display: none;
}

.grid-panel.active {
    display: block;
}

.showcase {
    padding: 48px 16px;
    max-width: 80rem;
    margin: 0 auto;
}

.showcase-header {
    text-align: center;
    margin-bottom: 48px;
}

.showcase-title {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 16px;
}

.showcase-description {
    color: var(--text-muted);
    max-width: 42rem;
    margin: 0 auto;
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(1, minmax(0, 1fr));
    gap: 24px;
}

@media (min-width: 640px) {
    .product-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
    .product-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

@media (min-width: 1280px) {
    .product-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

.empty-state {
    text-align: center;
    padding: 48px 0;
}

.empty-message {
    font-size: 1.25rem;
    color: var(--text-dim);
}

/* Card */

.product-card {
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 16px;
    background: var(--bg-card);
    transition: transform 0.3s, box-shadow 0.3s;
}

.product-card:hover {
    transform: translateY(-4px);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.product-image {
    width: 100%;
    height: 12rem;
    margin-bottom: 16px;
    overflow: hidden;
    border-radius: 8px;
}

.product-photo {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s;
}

.product-photo:hover {
    transform: scale(1.05);
}

.product-name {
    font-size: 1.125rem;
    font-weight: 700;
    margin: 0 0 8px;
}

.product-price {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--accent);
    margin: 0 0 8px;
}

.product-category {
    font-size: 0.875rem;
    color: var(--text-muted);
    margin: 0 0 16px;
}

.add-to-cart {
    width: 100%;
    padding: 8px 16px;
    background: var(--ink);
    color: #ffffff;
    border: none;
    border-radius: 8px;
    cursor: pointer;
    transition: background 0.2s;
}

.add-to-cart:hover {
    background: #1f2937;
}

.hidden {
    display: none;
}

/* Animations */

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes slideUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); }
    50% { transform: translate(-50%, 0); }
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

.fade-in {
    animation: fadeIn 0.6s ease-out;
}

.slide-up {
    animation: slideUp 0.6s ease-out both;
}

.bounce {
    animation: bounce 1s infinite;
}

.pulse {
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}
"#;

/// Content Security Policy for the static page.
///
/// Product and banner images are remote; scripts and styles are inline.
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none';";
