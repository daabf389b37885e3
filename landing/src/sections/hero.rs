use crate::content::HERO_STATS;
use crate::dom::use_page_env;
use crate::icons::{Icon, IconKind};
use crate::motion::{FADE_UP, Motion, Pose, Transition};
use leptos::prelude::*;

// Children enter one after another: 0.3s initial delay, 0.2s apart.
const CONTENT_DELAY: f32 = 0.3;
const CONTENT_STAGGER: f32 = 0.2;

const STAT_ENTER: Motion = Motion::new(Pose::HIDDEN.scaled(0.8), Transition::new(0.5).delay(2.0));
const UNDERLINE_ENTER: Motion = Motion::new(Pose::REST.scaled(0.0), Transition::new(1.0).delay(1.5));
const SCROLL_HINT_ENTER: Motion = Motion::new(Pose::HIDDEN, Transition::new(0.6).delay(3.0));

#[component]
pub fn Hero() -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let item = move |index: usize| {
        FADE_UP
            .after(CONTENT_DELAY)
            .staggered(CONTENT_STAGGER, index)
            .entrance_style(reduced)
    };

    view! {
        <section id="home" class="hero">
            <div class="hero-pattern" aria-hidden="true"></div>
            <div class="hero-blob hero-blob-left float-slow" aria-hidden="true"></div>
            <div class="hero-blob hero-blob-right float-slower" aria-hidden="true"></div>

            <div class="container section-padding hero-inner">
                <div class="hero-content">
                    <div class="hero-badge" style=item(0)>
                        <Icon kind=IconKind::Star class="icon icon-sm icon-leading" />
                        "Trusted by 10,000+ developers"
                    </div>

                    <h1 class="hero-title" style=item(1)>
                        "Build "
                        <span class="text-gradient hero-highlight">
                            "Lightning-Fast"
                            <span
                                class="hero-underline"
                                aria-hidden="true"
                                style=UNDERLINE_ENTER.entrance_style(reduced)
                            ></span>
                        </span>
                        " Landing Pages"
                    </h1>

                    <p class="hero-subtitle" style=item(2)>
                        "Create stunning, high-performance landing pages with optimal user "
                        "experience, accessibility, and Lighthouse scores that convert "
                        "visitors into customers."
                    </p>

                    <div class="hero-actions" style=item(3)>
                        <button class="btn-primary btn-lg grow glow">
                            "Get Started Free"
                            <Icon kind=IconKind::ArrowRight class="icon icon-trailing" />
                        </button>
                        <button class="btn-secondary btn-lg grow">
                            <Icon kind=IconKind::Play class="icon icon-leading" />
                            "Watch Demo"
                        </button>
                    </div>

                    <div class="hero-stats" style=item(4)>
                        {HERO_STATS
                            .iter()
                            .enumerate()
                            .map(|(index, stat)| {
                                let style = STAT_ENTER.staggered(0.1, index).entrance_style(reduced);
                                view! {
                                    <div class="hero-stat" style=style>
                                        <div class="hero-stat-value">{stat.value}</div>
                                        <div class="hero-stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="scroll-hint" aria-hidden="true" style=SCROLL_HINT_ENTER.entrance_style(reduced)>
                <div class="scroll-hint-frame bounce">
                    <div class="scroll-hint-dot bounce"></div>
                </div>
            </div>
        </section>
    }
}
