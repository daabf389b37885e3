use crate::content::BENEFITS;
use crate::dom::use_page_env;
use crate::icons::{Icon, IconKind};
use crate::motion::{FADE_UP, Motion, Pose, SLIDE_RIGHT, Transition};
use crate::reveal::use_reveal;
use leptos::html;
use leptos::prelude::*;

const PANEL_ENTER: Motion = Motion::new(Pose::HIDDEN.shift_y(50.0), Transition::new(0.8));
const TRUST_ENTER: Motion = Motion::new(Pose::HIDDEN, Transition::new(0.6).delay(1.6));
const BENEFITS_DELAY: f32 = 0.8;

/// Closing call-to-action band.
#[component]
pub fn Cta() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);
    let reduced = use_page_env().reduced_motion;
    let step = move |delay: f32| move || FADE_UP.after(delay).reveal_style(revealed.get(), reduced);

    view! {
        <section id="get-started" class="cta" node_ref=section>
            <div class="cta-pattern" aria-hidden="true"></div>
            <div class="cta-blob cta-blob-left float-slow" aria-hidden="true"></div>
            <div class="cta-blob cta-blob-right float-slower" aria-hidden="true"></div>

            <div class="container section-padding cta-inner">
                <div class="cta-panel" style=move || PANEL_ENTER.reveal_style(revealed.get(), reduced)>
                    <h2 class="cta-title" style=step(0.2)>
                        "Ready to Build Your"
                        <br />
                        <span class="cta-title-accent">"Perfect Landing Page?"</span>
                    </h2>

                    <p class="cta-subtitle" style=step(0.4)>
                        "Join thousands of businesses that have already transformed their "
                        "online presence with our high-converting, lightning-fast landing "
                        "page solution."
                    </p>

                    <ul class="cta-benefits" style=step(0.6)>
                        {BENEFITS
                            .iter()
                            .enumerate()
                            .map(|(index, &benefit)| {
                                view! { <BenefitItem text=benefit index=index revealed=revealed /> }
                            })
                            .collect_view()}
                    </ul>

                    <div class="cta-actions" style=step(1.2)>
                        <button class="btn-light btn-lg grow glow-light">
                            "Start Free Trial"
                            <Icon kind=IconKind::ArrowRight class="icon icon-trailing" />
                        </button>
                        <button class="btn-outline-light btn-lg grow">"View Live Demo"</button>
                    </div>

                    <p class="cta-trust" style=move || TRUST_ENTER.reveal_style(revealed.get(), reduced)>
                        "\u{2728} No credit card required \u{2022} Cancel anytime \u{2022} 30-day guarantee"
                    </p>
                </div>

                <div class="cta-float cta-float-left sway" aria-hidden="true">
                    <Icon kind=IconKind::ArrowRight class="icon icon-xl" />
                </div>
                <div class="cta-float cta-float-right sway-reverse" aria-hidden="true"></div>
            </div>
        </section>
    }
}

#[component]
pub(crate) fn BenefitItem(
    text: &'static str,
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let motion = SLIDE_RIGHT.after(BENEFITS_DELAY).staggered(0.1, index);
    view! {
        <li class="cta-benefit" style=move || motion.reveal_style(revealed.get(), reduced)>
            <Icon kind=IconKind::CheckCircle class="icon icon-lg icon-check" />
            <span>{text}</span>
        </li>
    }
}
