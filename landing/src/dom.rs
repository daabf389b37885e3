//! Thin wrappers over `web_sys` that return [`LandingError`] instead of
//! `Option`/`JsValue`, plus the per-page environment shared via context.

use crate::config::FALLBACK_YEAR;
use crate::error::{LandingError, Result};
use leptos::prelude::*;
use web_sys::{Document, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}

/// `true` when the user asked the OS for reduced motion.
pub fn prefers_reduced_motion() -> Result<bool> {
    let query = window()?.match_media(REDUCED_MOTION_QUERY)?;
    Ok(query.is_some_and(|list| list.matches()))
}

/// Smooth-scroll the page back to the top.
pub fn scroll_to_top() -> Result<()> {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Facts about the visitor's browser, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEnv {
    pub reduced_motion: bool,
    pub year: u32,
}

impl Default for PageEnv {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            year: FALLBACK_YEAR,
        }
    }
}

impl PageEnv {
    /// Read the environment from the running browser.
    pub fn detect() -> Self {
        let reduced_motion = prefers_reduced_motion().unwrap_or_else(|err| {
            crate::log::warn(&format!("reduced-motion query failed: {err}"));
            false
        });
        Self {
            reduced_motion,
            year: current_year(),
        }
    }
}

/// Environment provided by the app root, or the defaults when rendered
/// outside of it.
pub fn use_page_env() -> PageEnv {
    use_context::<PageEnv>().unwrap_or_default()
}
