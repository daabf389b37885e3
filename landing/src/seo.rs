//! Search and social preview metadata, plus the PWA web manifest.
//!
//! `index.html` only carries the bare minimum; everything else is written
//! into `<head>` at startup from [`SiteMetadata`] so the copy lives in one
//! place.

use crate::config::{SITE, SiteConfig};
use crate::error::{LandingError, Result};
use serde::{Deserialize, Serialize};

pub const OG_IMAGE: &str = "/og-image.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const KEYWORDS: &[&str] = &[
    "landing page",
    "Rust",
    "Leptos",
    "WebAssembly",
    "performance",
    "accessibility",
];

/// Everything the page tells crawlers and link unfurlers.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    pub site: SiteConfig,
    pub keywords: &'static [&'static str],
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            site: SITE,
            keywords: KEYWORDS,
        }
    }
}

/// `name=` for standard meta tags, `property=` for Open Graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

/// One `<meta>` or `<link>` element in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Meta { key: MetaKey, content: String },
    Link {
        rel: &'static str,
        href: String,
        extra: Option<(&'static str, &'static str)>,
    },
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Name(name),
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Property(property),
            content: content.into(),
        }
    }

    fn link(rel: &'static str, href: impl Into<String>) -> Self {
        HeadTag::Link {
            rel,
            href: href.into(),
            extra: None,
        }
    }

    fn link_with(
        rel: &'static str,
        href: impl Into<String>,
        attr: &'static str,
        value: &'static str,
    ) -> Self {
        HeadTag::Link {
            rel,
            href: href.into(),
            extra: Some((attr, value)),
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            HeadTag::Meta { .. } => "meta",
            HeadTag::Link { .. } => "link",
        }
    }

    /// CSS selector matching an existing copy of this tag.
    pub fn selector(&self) -> String {
        match self {
            HeadTag::Meta {
                key: MetaKey::Name(name),
                ..
            } => format!("meta[name=\"{name}\"]"),
            HeadTag::Meta {
                key: MetaKey::Property(property),
                ..
            } => format!("meta[property=\"{property}\"]"),
            HeadTag::Link { rel, href, .. } => format!("link[rel=\"{rel}\"][href=\"{href}\"]"),
        }
    }

    /// Attribute pairs in the order they are written.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            HeadTag::Meta { key, content } => {
                let key = match key {
                    MetaKey::Name(name) => ("name", name.to_string()),
                    MetaKey::Property(property) => ("property", property.to_string()),
                };
                vec![key, ("content", content.clone())]
            }
            HeadTag::Link { rel, href, extra } => {
                let mut attrs = vec![("rel", rel.to_string()), ("href", href.clone())];
                if let Some((attr, value)) = extra {
                    attrs.push((*attr, value.to_string()));
                }
                attrs
            }
        }
    }
}

impl SiteMetadata {
    /// Head tags in document order.
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let site = &self.site;
        let canonical = site.absolute_url("/");
        let image = site.absolute_url(OG_IMAGE);

        vec![
            HeadTag::name("description", site.description),
            HeadTag::name("keywords", self.keywords.join(", ")),
            HeadTag::name("author", site.author),
            HeadTag::name("creator", site.author),
            HeadTag::name("publisher", site.publisher),
            HeadTag::name("theme-color", site.theme_color),
            HeadTag::name("robots", "index, follow"),
            HeadTag::name(
                "googlebot",
                "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
            ),
            HeadTag::name("google-site-verification", site.google_verification),
            HeadTag::link("canonical", canonical.clone()),
            HeadTag::link("manifest", "/manifest.json"),
            HeadTag::link_with("icon", "/favicon.ico", "sizes", "any"),
            HeadTag::link_with("icon", "/icon.svg", "type", "image/svg+xml"),
            HeadTag::link("apple-touch-icon", "/apple-touch-icon.png"),
            HeadTag::property("og:type", "website"),
            HeadTag::property("og:locale", site.locale),
            HeadTag::property("og:url", canonical),
            HeadTag::property("og:title", site.title),
            HeadTag::property("og:description", site.description),
            HeadTag::property("og:site_name", site.brand),
            HeadTag::property("og:image", image.clone()),
            HeadTag::property("og:image:width", OG_IMAGE_WIDTH.to_string()),
            HeadTag::property("og:image:height", OG_IMAGE_HEIGHT.to_string()),
            HeadTag::property("og:image:alt", site.title),
            HeadTag::name("twitter:card", "summary_large_image"),
            HeadTag::name("twitter:title", site.title),
            HeadTag::name("twitter:description", site.description),
            HeadTag::name("twitter:image", image),
            HeadTag::name("twitter:creator", site.twitter_creator),
        ]
    }
}

/// Write title and head tags into the live document.
///
/// Tags already present (matched by [`HeadTag::selector`]) are updated in
/// place, so calling this twice leaves a single copy of each.
pub fn apply_to_document(meta: &SiteMetadata) -> Result<()> {
    let document = crate::dom::document()?;
    document.set_title(meta.site.title);
    let head = document.head().ok_or(LandingError::NoHead)?;

    for tag in meta.head_tags() {
        let element = match head.query_selector(&tag.selector())? {
            Some(existing) => existing,
            None => {
                let created = document.create_element(tag.element_name())?;
                head.append_child(&created)?;
                created
            }
        };
        for (attr, value) in tag.attributes() {
            element.set_attribute(attr, &value)?;
        }
    }
    Ok(())
}

/// One icon entry of the web manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
}

/// `manifest.json` as served next to `index.html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl WebManifest {
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            name: site.title.to_string(),
            short_name: site.brand.to_string(),
            description: site.description.to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: site.background_color.to_string(),
            theme_color: site.theme_color.to_string(),
            icons: vec![
                ManifestIcon {
                    src: "/icon.svg".to_string(),
                    sizes: "any".to_string(),
                    mime: "image/svg+xml".to_string(),
                },
                ManifestIcon {
                    src: "/apple-touch-icon.png".to_string(),
                    sizes: "180x180".to_string(),
                    mime: "image/png".to_string(),
                },
            ],
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
