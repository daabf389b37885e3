//! One-shot "section entered the viewport" tracking.
//!
//! Once a section has been seen it stays revealed; scrolling it back out
//! never replays the entrance.

use crate::error::Result;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Negative margin: a section counts as visible 100px after its edge
/// crosses into the viewport.
pub const ROOT_MARGIN: &str = "-100px";

/// Latch that flips to revealed on the first intersecting observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Record an observation; returns `true` only on the flip.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

/// Signal that turns `true` once the referenced section scrolls into view.
///
/// If the observer cannot be created the section is revealed right away.
pub fn use_reveal(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    Effect::new(move || {
        if revealed.get_untracked() {
            return;
        }
        let Some(element) = target.get() else {
            return;
        };
        if let Err(err) = observe_once(&element, set_revealed) {
            crate::log::warn(&format!(
                "viewport observer unavailable, revealing immediately: {err}"
            ));
            set_revealed.set(true);
        }
    });

    revealed
}

fn observe_once(element: &web_sys::Element, on_reveal: WriteSignal<bool>) -> Result<()> {
    let mut latch = RevealLatch::default();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if latch.observe(intersecting) {
                on_reveal.set(true);
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    // The observer holds the only JS reference; it disconnects itself.
    callback.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        assert!(!RevealLatch::default().is_revealed());
    }

    #[test]
    fn non_intersecting_observations_do_nothing() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn flips_once_and_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }
}
