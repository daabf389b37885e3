//! Fixed header: brand, desktop navigation and the mobile menu.

use crate::config::SITE;
use crate::content::{NAVIGATION, NavItem};
use crate::dom::use_page_env;
use crate::icons::{Icon, IconKind};
use crate::menu::{MOBILE_MENU_ID, MenuState};
use crate::motion::{Ease, Motion, Pose, SLIDE_RIGHT, Transition};
use leptos::prelude::*;

const BRAND_ENTER: Motion = Motion::new(Pose::HIDDEN.shift_x(-20.0), Transition::new(0.6));
const DESKTOP_NAV_ENTER: Motion =
    Motion::new(Pose::HIDDEN.shift_y(-20.0), Transition::new(0.6).delay(0.2));
const DESKTOP_LINK_ENTER: Motion = Motion::new(Pose::HIDDEN.shift_y(-10.0), Transition::new(0.4));
const DESKTOP_CTA_ENTER: Motion =
    Motion::new(Pose::HIDDEN.scaled(0.9), Transition::new(0.4).delay(0.6));
const TOGGLE_ENTER: Motion = Motion::new(Pose::HIDDEN, Transition::new(0.4));
const PANEL_ENTER: Motion = Motion::new(
    Pose::HIDDEN,
    Transition::new(0.3).ease(Ease::EaseInOut),
);
const MOBILE_CTA_ENTER: Motion =
    Motion::new(Pose::HIDDEN.shift_y(20.0), Transition::new(0.3).delay(0.4));

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        let key = ev.key();
        if menu.get_untracked().is_open() {
            menu.update(|state| {
                state.on_key(&key);
            });
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <header class="site-header">
            <nav class="container section-padding header-nav" aria-label="Main navigation">
                <div class="header-bar">
                    <Brand />
                    <DesktopNav />
                    <MenuToggle menu=menu />
                </div>
                <Show when=move || menu.get().is_open()>
                    <MobileNav menu=menu />
                </Show>
            </nav>
        </header>
    }
}

#[component]
pub(crate) fn Brand() -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    view! {
        <div class="header-brand" style=BRAND_ENTER.entrance_style(reduced)>
            <a href="#home" class="brand-link text-gradient" aria-label=format!("{} homepage", SITE.brand)>
                {SITE.brand}
            </a>
        </div>
    }
}

#[component]
pub(crate) fn DesktopNav() -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    view! {
        <div class="desktop-nav" style=DESKTOP_NAV_ENTER.entrance_style(reduced)>
            {NAVIGATION
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let style = DESKTOP_LINK_ENTER.staggered(0.1, index).entrance_style(reduced);
                    view! {
                        <a href=item.href class="nav-link lift" style=style>
                            {item.name}
                            <span class="nav-underline"></span>
                        </a>
                    }
                })
                .collect_view()}
            <button class="btn-primary grow" style=DESKTOP_CTA_ENTER.entrance_style(reduced)>
                "Get Started"
                <Icon kind=IconKind::ChevronRight class="icon icon-trailing" />
            </button>
        </div>
    }
}

/// Hamburger button; its accessible name and `aria-expanded` follow the
/// menu state.
#[component]
pub(crate) fn MenuToggle(menu: RwSignal<MenuState>) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    view! {
        <button
            class="menu-toggle"
            aria-controls=move || menu.get().controls()
            aria-expanded=move || menu.get().aria_expanded()
            aria-label=move || menu.get().toggle_label()
            style=TOGGLE_ENTER.entrance_style(reduced)
            on:click=move |_| menu.update(MenuState::toggle)
        >
            {move || {
                let kind = if menu.get().is_open() { IconKind::Close } else { IconKind::Menu };
                view! { <Icon kind=kind class="icon icon-lg" /> }
            }}
        </button>
    }
}

/// Collapsible panel shown below the bar on small screens.
#[component]
pub(crate) fn MobileNav(menu: RwSignal<MenuState>) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    view! {
        <div id=MOBILE_MENU_ID class="mobile-nav" style=PANEL_ENTER.entrance_style(reduced)>
            <div class="mobile-nav-items">
                {NAVIGATION
                    .iter()
                    .enumerate()
                    .map(|(index, &item)| view! { <MobileNavLink item=item index=index menu=menu /> })
                    .collect_view()}
                <button
                    class="btn-primary btn-block"
                    style=MOBILE_CTA_ENTER.entrance_style(reduced)
                    on:click=move |_| menu.update(MenuState::close)
                >
                    "Get Started"
                    <Icon kind=IconKind::ChevronRight class="icon icon-trailing" />
                </button>
            </div>
        </div>
    }
}

#[component]
fn MobileNavLink(item: NavItem, index: usize, menu: RwSignal<MenuState>) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let style = SLIDE_RIGHT
        .staggered(0.1, index)
        .entrance_style(reduced);
    view! {
        <a
            href=item.href
            class="mobile-nav-link"
            style=style
            on:click=move |_| menu.update(MenuState::close)
        >
            {item.name}
        </a>
    }
}
