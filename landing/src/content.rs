//! Page copy as compile-time constant records.
//!
//! Names double as keys within each list, so they must stay unique.

use crate::icons::IconKind;

/// Highest rating a testimonial can show.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Accent palette for a feature's icon tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Indigo,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Yellow => "tone-yellow",
            Tone::Green => "tone-green",
            Tone::Blue => "tone-blue",
            Tone::Purple => "tone-purple",
            Tone::Pink => "tone-pink",
            Tone::Indigo => "tone-indigo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Number of stars to draw, never above [`MAX_RATING`].
    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(MAX_RATING))
    }

    /// "Role at Company".
    pub fn byline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCategory {
    Product,
    Company,
    Support,
    Legal,
}

impl LinkCategory {
    pub fn title(self) -> &'static str {
        match self {
            LinkCategory::Product => "Product",
            LinkCategory::Company => "Company",
            LinkCategory::Support => "Support",
            LinkCategory::Legal => "Legal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLinkGroup {
    pub category: LinkCategory,
    pub links: &'static [NavItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub icon: IconKind,
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: IconKind,
    pub href: &'static str,
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "Features", href: "#features" },
    NavItem { name: "Testimonials", href: "#testimonials" },
    NavItem { name: "Contact", href: "#contact" },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { label: "Happy Customers", value: "10,000+" },
    Stat { label: "Performance Score", value: "98%" },
    Stat { label: "Load Time", value: "<1s" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Zap,
        title: "Lightning Fast",
        description: "Optimized for speed with 90+ Lighthouse performance scores and sub-second load times.",
        tone: Tone::Yellow,
    },
    Feature {
        icon: IconKind::Shield,
        title: "Secure & Reliable",
        description: "Built with security best practices and enterprise-grade reliability standards.",
        tone: Tone::Green,
    },
    Feature {
        icon: IconKind::Smartphone,
        title: "Mobile First",
        description: "Responsive design that looks perfect on every device, from mobile to desktop.",
        tone: Tone::Blue,
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Analytics Ready",
        description: "Track performance metrics and user behavior with built-in analytics integration.",
        tone: Tone::Purple,
    },
    Feature {
        icon: IconKind::Palette,
        title: "Customizable",
        description: "Easy to customize with your brand colors, fonts, and styling preferences.",
        tone: Tone::Pink,
    },
    Feature {
        icon: IconKind::Code,
        title: "Developer Friendly",
        description: "Clean, maintainable code with strong types, a strict linter, and modern best practices.",
        tone: Tone::Indigo,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechCorp",
        content: "This landing page solution exceeded our expectations. Our conversion rate increased by 40% within the first month!",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Founder",
        company: "StartupXYZ",
        content: "The performance optimization is incredible. Our page loads in under a second, and the Lighthouse scores are consistently 95+.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "UX Designer",
        company: "Design Studio",
        content: "Beautiful, accessible, and responsive. The animations are smooth and the user experience is top-notch.",
        rating: 5,
    },
    Testimonial {
        name: "David Kim",
        role: "Developer",
        company: "WebAgency",
        content: "Clean code, excellent documentation, and easy to customize. This has become our go-to solution for client projects.",
        rating: 5,
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "Product Manager",
        company: "InnovateCo",
        content: "The accessibility features are outstanding. We can confidently serve all our users with this inclusive design.",
        rating: 5,
    },
    Testimonial {
        name: "James Wilson",
        role: "CEO",
        company: "GrowthLabs",
        content: "ROI was immediate. The professional design and fast loading times significantly improved our lead generation.",
        rating: 5,
    },
];

pub const TRUSTED_BY: &[&str] = &["TechCorp", "StartupXYZ", "Design Studio", "WebAgency"];

pub const BENEFITS: &[&str] = &[
    "Setup in under 5 minutes",
    "30-day money-back guarantee",
    "Free updates and support",
    "No coding required",
];

pub const FOOTER_LINKS: &[FooterLinkGroup] = &[
    FooterLinkGroup {
        category: LinkCategory::Product,
        links: &[
            NavItem { name: "Features", href: "#features" },
            NavItem { name: "Pricing", href: "#pricing" },
            NavItem { name: "Templates", href: "#templates" },
            NavItem { name: "Integration", href: "#integration" },
        ],
    },
    FooterLinkGroup {
        category: LinkCategory::Company,
        links: &[
            NavItem { name: "About Us", href: "#about" },
            NavItem { name: "Blog", href: "#blog" },
            NavItem { name: "Careers", href: "#careers" },
            NavItem { name: "Contact", href: "#contact" },
        ],
    },
    FooterLinkGroup {
        category: LinkCategory::Support,
        links: &[
            NavItem { name: "Help Center", href: "#help" },
            NavItem { name: "Documentation", href: "#docs" },
            NavItem { name: "API Reference", href: "#api" },
            NavItem { name: "Status", href: "#status" },
        ],
    },
    FooterLinkGroup {
        category: LinkCategory::Legal,
        links: &[
            NavItem { name: "Privacy Policy", href: "#privacy" },
            NavItem { name: "Terms of Service", href: "#terms" },
            NavItem { name: "Cookie Policy", href: "#cookies" },
            NavItem { name: "GDPR", href: "#gdpr" },
        ],
    },
];

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        icon: IconKind::Mail,
        text: "hello@optimizedlanding.com",
        href: "mailto:hello@optimizedlanding.com",
    },
    ContactEntry {
        icon: IconKind::Phone,
        text: "+1 (555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactEntry {
        icon: IconKind::MapPin,
        text: "San Francisco, CA",
        href: "#location",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", icon: IconKind::Github, href: "#github" },
    SocialLink { name: "Twitter", icon: IconKind::Twitter, href: "#twitter" },
    SocialLink { name: "LinkedIn", icon: IconKind::Linkedin, href: "#linkedin" },
];

/// Ids of the sections rendered on the page, in stacking order.
pub const SECTION_IDS: &[&str] = &["home", "features", "testimonials", "contact"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(what: &str, keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate {what} key: {key}");
        }
    }

    #[test]
    fn list_keys_are_unique() {
        assert_unique("nav", NAVIGATION.iter().map(|n| n.name));
        assert_unique("stat", HERO_STATS.iter().map(|s| s.label));
        assert_unique("feature", FEATURES.iter().map(|f| f.title));
        assert_unique("testimonial", TESTIMONIALS.iter().map(|t| t.name));
        assert_unique("benefit", BENEFITS.iter().copied());
        assert_unique("company", TRUSTED_BY.iter().copied());
        assert_unique("contact", CONTACTS.iter().map(|c| c.text));
        assert_unique("social", SOCIAL_LINKS.iter().map(|s| s.name));
        for group in FOOTER_LINKS {
            assert_unique(group.category.title(), group.links.iter().map(|l| l.name));
        }
    }

    #[test]
    fn navigation_targets_sections_on_the_page() {
        for item in NAVIGATION {
            let id = item.href.strip_prefix('#').expect("in-page anchor");
            assert!(SECTION_IDS.contains(&id), "{} points nowhere", item.href);
        }
    }

    #[test]
    fn every_href_is_usable() {
        let hrefs = FOOTER_LINKS
            .iter()
            .flat_map(|g| g.links.iter().map(|l| l.href))
            .chain(CONTACTS.iter().map(|c| c.href))
            .chain(SOCIAL_LINKS.iter().map(|s| s.href));
        for href in hrefs {
            assert!(
                href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("tel:"),
                "unexpected href {href}"
            );
            assert!(href.len() > 1);
        }
    }

    #[test]
    fn ratings_are_in_range() {
        for t in TESTIMONIALS {
            assert!((1..=MAX_RATING).contains(&t.rating), "{}", t.name);
            assert_eq!(t.stars(), usize::from(t.rating));
        }
    }

    #[test]
    fn stars_are_clamped() {
        let loud = Testimonial { rating: 9, ..TESTIMONIALS[0] };
        assert_eq!(loud.stars(), usize::from(MAX_RATING));
    }

    #[test]
    fn testimonial_helpers() {
        let sarah = &TESTIMONIALS[0];
        assert_eq!(sarah.initial(), 'S');
        assert_eq!(sarah.byline(), "Marketing Director at TechCorp");
    }

    #[test]
    fn footer_has_four_full_columns() {
        assert_eq!(FOOTER_LINKS.len(), 4);
        assert!(FOOTER_LINKS.iter().all(|g| g.links.len() == 4));
    }
}
