use crate::content::{MAX_RATING, TESTIMONIALS, TRUSTED_BY, Testimonial};
use crate::dom::use_page_env;
use crate::icons::{Icon, IconKind};
use crate::motion::{FADE_UP, Motion, POP, Pose, Transition};
use crate::reveal::use_reveal;
use leptos::html;
use leptos::prelude::*;

const CARD_ENTER: Motion = Motion::new(
    Pose::HIDDEN.shift_y(50.0).tilted_x(-15.0),
    Transition::new(0.6),
);
const CARD_STAGGER: f32 = 0.1;
const STAR_STAGGER: f32 = 0.1;
const LOGOS_DELAY: f32 = 1.0;
const LOGO_STAGGER: f32 = 0.2;

#[component]
pub fn Testimonials() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);
    let reduced = use_page_env().reduced_motion;

    view! {
        <section id="testimonials" class="testimonials" node_ref=section>
            <div class="container section-padding">
                <div
                    class="section-header"
                    style=move || FADE_UP.reveal_style(revealed.get(), reduced)
                >
                    <h2 class="section-title">
                        "What Our "
                        <span class="text-gradient">"Customers"</span>
                        " Say"
                    </h2>
                    <p class="section-description">
                        "Join thousands of satisfied customers who have transformed their "
                        "online presence with our high-performance landing page solution."
                    </p>
                </div>

                <div class="grid card-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, &testimonial)| {
                            view! {
                                <TestimonialCard
                                    testimonial=testimonial
                                    index=index
                                    revealed=revealed
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class="trusted-by"
                    style=move || FADE_UP.after(LOGOS_DELAY).reveal_style(revealed.get(), reduced)
                >
                    <p class="trusted-by-label">"Trusted by industry leaders"</p>
                    <div class="trusted-by-logos">
                        {TRUSTED_BY
                            .iter()
                            .enumerate()
                            .map(|(index, &company)| {
                                let style = Motion::new(Pose::HIDDEN, Transition::new(0.6))
                                    .staggered(LOGO_STAGGER, index)
                                    .entrance_style(reduced);
                                view! { <div class="trusted-logo grow" style=style>{company}</div> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub(crate) fn TestimonialCard(
    testimonial: Testimonial,
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let motion = CARD_ENTER.staggered(CARD_STAGGER, index);

    view! {
        <div class="group card-slot perspective" style=move || motion.reveal_style(revealed.get(), reduced)>
            <figure class="card testimonial-card lift">
                <div class="quote-badge spin-on-hover" aria-hidden="true">
                    <Icon kind=IconKind::Quote class="icon icon-sm" />
                </div>
                <div class="testimonial-rating">
                    <StarRating rating=testimonial.stars() />
                </div>
                <blockquote class="testimonial-quote">
                    "\u{201C}"{testimonial.content}"\u{201D}"
                </blockquote>
                <figcaption class="testimonial-author">
                    <div class="avatar grow" aria-hidden="true">
                        {testimonial.initial().to_string()}
                    </div>
                    <div>
                        <div class="author-name">{testimonial.name}</div>
                        <div class="author-role">{testimonial.byline()}</div>
                    </div>
                </figcaption>
                <div class="card-sheen" aria-hidden="true"></div>
            </figure>
        </div>
    }
}

/// Row of filled stars; each pops in 0.1s after the previous one.
#[component]
pub(crate) fn StarRating(rating: usize) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    view! {
        <div class="star-rating" role="img" aria-label=format!("Rated {rating} out of {MAX_RATING}")>
            {(0..rating)
                .map(|index| {
                    let style = POP.staggered(STAR_STAGGER, index).entrance_style(reduced);
                    view! {
                        <span class="star" style=style>
                            <Icon kind=IconKind::Star class="icon icon-star" />
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn star_rating_draws_one_icon_per_point() {
        let html = Owner::new().with(|| view! { <StarRating rating=3 /> }.to_html());
        assert_eq!(html.matches("class=\"star\"").count(), 3);
        assert!(html.contains("aria-label=\"Rated 3 out of 5\""));
    }

    #[test]
    fn card_shows_author_and_byline() {
        let html = Owner::new().with(|| {
            let (revealed, _) = signal(true);
            view! { <TestimonialCard testimonial=TESTIMONIALS[1] index=1 revealed=revealed /> }
                .to_html()
        });
        assert!(html.contains("Michael Chen"));
        assert!(html.contains("Founder at StartupXYZ"));
        assert!(html.contains(">M</div>"));
        assert_eq!(html.matches("class=\"star\"").count(), 5);
    }

    #[test]
    fn hidden_card_is_tilted_back() {
        let html = Owner::new().with(|| {
            let (revealed, _) = signal(false);
            view! { <TestimonialCard testimonial=TESTIMONIALS[0] index=0 revealed=revealed /> }
                .to_html()
        });
        assert!(html.contains("rotateX(-15deg)"));
    }
}
