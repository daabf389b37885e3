use crate::content::{FEATURES, Feature};
use crate::dom::use_page_env;
use crate::icons::Icon;
use crate::motion::{FADE_UP, Motion, Pose, Transition};
use crate::reveal::use_reveal;
use leptos::html;
use leptos::prelude::*;

const CARD_ENTER: Motion = Motion::new(Pose::HIDDEN.shift_y(50.0), Transition::new(0.6));
const CARD_STAGGER: f32 = 0.1;
const CLOSING_DELAY: f32 = 0.8;

#[component]
pub fn Features() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);
    let reduced = use_page_env().reduced_motion;

    view! {
        <section id="features" class="features" node_ref=section>
            <div class="container section-padding">
                <div
                    class="section-header"
                    style=move || FADE_UP.reveal_style(revealed.get(), reduced)
                >
                    <h2 class="section-title">
                        "Everything You Need to "
                        <span class="text-gradient">"Succeed"</span>
                    </h2>
                    <p class="section-description">
                        "Our landing page solution comes packed with all the features you "
                        "need to create high-converting, professional websites that your "
                        "users will love."
                    </p>
                </div>

                <div class="grid card-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, &feature)| {
                            view! { <FeatureCard feature=feature index=index revealed=revealed /> }
                        })
                        .collect_view()}
                </div>

                <div
                    class="section-closing"
                    style=move || FADE_UP.after(CLOSING_DELAY).reveal_style(revealed.get(), reduced)
                >
                    <p class="section-closing-text">"Ready to experience the difference?"</p>
                    <button class="btn-primary btn-lg grow glow">"Start Building Today"</button>
                </div>
            </div>
        </section>
    }
}

/// One tile of the feature grid; hover lift and icon tilt are CSS.
#[component]
pub(crate) fn FeatureCard(
    feature: Feature,
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let motion = CARD_ENTER.staggered(CARD_STAGGER, index);

    view! {
        <div class="group card-slot" style=move || motion.reveal_style(revealed.get(), reduced)>
            <article class="card feature-card lift">
                <div class=format!("feature-icon tilt {}", feature.tone.class())>
                    <Icon kind=feature.icon class="icon icon-xl" />
                </div>
                <h3 class="card-title">{feature.title}</h3>
                <p class="card-text">{feature.description}</p>
                <div class="card-sheen" aria-hidden="true"></div>
            </article>
        </div>
    }
}
