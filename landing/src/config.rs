//! Site-wide configuration (single source of truth for brand and URLs).
//!
//! Defaults are compiled in. `SITE_URL` and `GOOGLE_SITE_VERIFICATION`
//! may be set at build time (`SITE_URL=https://example.com trunk build`).

/// Static site settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub locale: &'static str,
    pub author: &'static str,
    pub publisher: &'static str,
    pub twitter_creator: &'static str,
    pub google_verification: &'static str,
    pub theme_color: &'static str,
    pub background_color: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    brand: "OptimizedLanding",
    title: "OptimizedLanding - Modern Landing Page",
    description: "A high-performance, accessible landing page built with Rust, Leptos and WebAssembly",
    base_url: match option_env!("SITE_URL") {
        Some(url) => url,
        None => "https://your-domain.com",
    },
    locale: "en_US",
    author: "Your Name",
    publisher: "Your Company",
    twitter_creator: "@yourusername",
    google_verification: match option_env!("GOOGLE_SITE_VERIFICATION") {
        Some(code) => code,
        None => "your-google-verification-code",
    },
    theme_color: "#2563eb",
    background_color: "#ffffff",
};

/// Copyright year used when the browser clock is unavailable.
pub const FALLBACK_YEAR: u32 = 2025;

impl SiteConfig {
    /// Join a site-relative path onto the base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() || path == "/" {
            return format!("{base}/");
        }
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_joins_without_double_slashes() {
        let site = SiteConfig {
            base_url: "https://example.com/",
            ..SITE
        };
        assert_eq!(site.absolute_url("/og-image.jpg"), "https://example.com/og-image.jpg");
        assert_eq!(site.absolute_url("og-image.jpg"), "https://example.com/og-image.jpg");
        assert_eq!(site.absolute_url("/"), "https://example.com/");
        assert_eq!(site.absolute_url(""), "https://example.com/");
    }

    #[test]
    fn title_mentions_brand() {
        assert!(SITE.title.starts_with(SITE.brand));
    }
}
