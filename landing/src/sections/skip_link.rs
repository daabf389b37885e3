use leptos::prelude::*;

/// First focusable element on the page; jumps past the navigation.
#[component]
pub fn SkipLink() -> impl IntoView {
    view! {
        <div id="skip-nav" class="skip-nav">
            <a href="#main-content">"Skip to main content"</a>
        </div>
    }
}
