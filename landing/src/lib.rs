//! # optimized-landing
//!
//! The OptimizedLanding marketing page as a Leptos 0.8 client-side app.
//!
//! The page is a straight stack of sections rendered from constant
//! content:
//!
//! ```text
//! SkipLink
//! Header (fixed, owns the mobile menu state)
//! main#main-content
//! ├── Hero          #home
//! ├── Features      #features
//! ├── Testimonials  #testimonials
//! └── Cta
//! Footer            #contact
//! ```
//!
//! Motion is declarative: each element gets an inline style computed from
//! a [`motion::Motion`], either a keyframe entrance on mount or a
//! transition gated by [`reveal::use_reveal`]. The only runtime state is
//! the [`menu::MenuState`] of the mobile navigation.
//!
//! Build and serve with Trunk from the `landing/` directory:
//!
//! ```text
//! trunk serve
//! ```

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod icons;
pub mod log;
pub mod menu;
pub mod motion;
pub mod reveal;
pub mod sections;
pub mod seo;

use leptos::prelude::*;
use sections::*;

/// The whole page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <SkipLink />
        <Header />
        <main id="main-content">
            <Hero />
            <Features />
            <Testimonials />
            <Cta />
        </main>
        <Footer />
    }
}

/// Browser entry point: head metadata, environment, then mount.
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = seo::apply_to_document(&seo::SiteMetadata::default()) {
        log::warn(&format!("head metadata not applied: {err}"));
    }

    let env = dom::PageEnv::detect();
    log::info(&format!(
        "mounting {} (reduced motion: {})",
        config::SITE.brand,
        env.reduced_motion
    ));

    leptos::mount::mount_to_body(move || {
        provide_context(env);
        view! { <App /> }
    });
}
