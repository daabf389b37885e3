//! Inline SVG icons (24px stroke set).
//!
//! Icons are decorative; every icon-only control carries its own
//! `aria-label`.

use leptos::prelude::*;

/// Every icon referenced by the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Zap,
    Shield,
    Smartphone,
    BarChart,
    Palette,
    Code,
    Star,
    Quote,
    ArrowRight,
    ArrowUp,
    Play,
    ChevronRight,
    Menu,
    Close,
    CheckCircle,
    Mail,
    Phone,
    MapPin,
    Github,
    Twitter,
    Linkedin,
}

impl IconKind {
    /// SVG path data for a 24x24 viewBox.
    pub fn path(self) -> &'static str {
        match self {
            IconKind::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
            IconKind::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            IconKind::Smartphone => {
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM12 18h.01"
            }
            IconKind::BarChart => "M3 3v18h18M18 17V9M13 17V5M8 17v-3",
            IconKind::Palette => {
                "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 \
                 0-1.1.9-2 2-2h2.3A4.7 4.7 0 0 0 22 10.7C22 5.9 17.5 2 12 2zM7.5 10.5h.01M10.5 \
                 6.5h.01M15.5 7.5h.01"
            }
            IconKind::Code => "m16 18 6-6-6-6M8 6l-6 6 6 6",
            IconKind::Star => {
                "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"
            }
            IconKind::Quote => {
                "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 \
                 1-1 2-2 2s-1 0-1 1v3c0 1 0 1 1 1zM15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 \
                 2v6c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"
            }
            IconKind::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            IconKind::ArrowUp => "m5 12 7-7 7 7M12 19V5",
            IconKind::Play => "m6 3 14 9-14 9V3z",
            IconKind::ChevronRight => "m9 18 6-6-6-6",
            IconKind::Menu => "M4 6h16M4 12h16M4 18h16",
            IconKind::Close => "M18 6 6 18M6 6l12 12",
            IconKind::CheckCircle => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3",
            IconKind::Mail => {
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zM22 6l-10 7L2 6"
            }
            IconKind::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 \
                 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 \
                 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.9.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"
            }
            IconKind::MapPin => {
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            }
            IconKind::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 \
                 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4M9 18c-4.51 2-5-2-7-2"
            }
            IconKind::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 \
                 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            }
            IconKind::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 \
                 0 0 4 2 2 0 0 0 0-4z"
            }
        }
    }

    /// Filled instead of stroked (rating stars).
    fn filled(self) -> bool {
        matches!(self, IconKind::Star)
    }
}

/// Renders an inline, decorative SVG icon.
#[component]
pub fn Icon(
    kind: IconKind,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let fill = if kind.filled() { "currentColor" } else { "none" };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            class=class
        >
            <path d=kind.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn paths_are_absolute_move_commands() {
        for kind in [IconKind::Zap, IconKind::Github, IconKind::Palette, IconKind::Phone] {
            let path = kind.path();
            assert!(path.starts_with('M') || path.starts_with('m'), "{kind:?}");
            assert!(!path.contains("  "), "{kind:?} has doubled whitespace");
        }
    }

    #[test]
    fn icon_is_hidden_from_assistive_tech() {
        let html = view! { <Icon kind=IconKind::Menu class="icon-lg" /> }.to_html();
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("class=\"icon-lg\""));
        assert!(html.contains("fill=\"none\""));
    }

    #[test]
    fn stars_are_filled() {
        let html = view! { <Icon kind=IconKind::Star /> }.to_html();
        assert!(html.contains("fill=\"currentColor\""));
    }
}
