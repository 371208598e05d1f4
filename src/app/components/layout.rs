//! Layout component wrapping all pages with Tailwind and the nav bar.

use dioxus::prelude::*;

use super::nav::Nav;

/// Tailwind Play CDN; the screens use utility classes only.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// CSS the utility classes don't cover.
const CUSTOM_STYLES: &str = r#"
html, body { background: #020617; }
.form-field { width: 100%; background: rgba(255,255,255,.05); border: 1px solid rgba(255,255,255,.1); border-radius: .5rem; padding: .5rem .75rem; }
.form-error { margin-top: .75rem; font-size: .875rem; color: #f87171; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
    /// Render children edge to edge instead of the padded page container
    #[props(default = false)]
    pub full_bleed: bool,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - HMS", props.title);
    let main_class = if props.full_bleed {
        "min-h-screen bg-slate-950 text-white"
    } else {
        "min-h-screen bg-slate-950 text-white pt-20 px-6 pb-12"
    };

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Script { src: TAILWIND_CDN }
        document::Style { {CUSTOM_STYLES} }

        Nav { active: props.nav_active.clone() }
        main { class: "{main_class}",
            {props.children}
        }
    }
}
