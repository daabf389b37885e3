use crate::config::SITE;
use crate::content::{CONTACTS, ContactEntry, FOOTER_LINKS, FooterLinkGroup, SOCIAL_LINKS, SocialLink};
use crate::dom::{scroll_to_top, use_page_env};
use crate::icons::{Icon, IconKind};
use crate::motion::{FADE_UP, Motion, POP, Pose, SLIDE_RIGHT, Transition};
use crate::reveal::use_reveal;
use leptos::html;
use leptos::prelude::*;

const BOTTOM_ENTER: Motion = Motion::new(Pose::HIDDEN.shift_y(20.0), Transition::new(0.6));
const FLOATING_ENTER: Motion = Motion::new(Pose::HIDDEN.scaled(0.0), Transition::new(0.4));

fn back_to_top() {
    if let Err(err) = scroll_to_top() {
        crate::log::warn(&format!("back to top failed: {err}"));
    }
}

/// Site footer; doubles as the `#contact` target.
#[component]
pub fn Footer() -> impl IntoView {
    let env = use_page_env();
    let reduced = env.reduced_motion;
    let inner = NodeRef::<html::Section>::new();
    let revealed = use_reveal(inner);

    view! {
        <footer id="contact" class="site-footer">
            <div class="footer-pattern" aria-hidden="true"></div>
            <section class="container section-padding footer-inner" node_ref=inner aria-label="Site footer">
                <div class="footer-main">
                    <div class="footer-brand" style=move || FADE_UP.reveal_style(revealed.get(), reduced)>
                        <h3 class="footer-title text-gradient">{SITE.brand}</h3>
                        <p class="footer-description">
                            "Create lightning-fast, accessible, and high-converting landing "
                            "pages that deliver exceptional user experiences and outstanding "
                            "performance scores."
                        </p>
                        <address class="footer-contacts">
                            {CONTACTS
                                .iter()
                                .enumerate()
                                .map(|(index, &entry)| {
                                    view! { <ContactLink entry=entry index=index revealed=revealed /> }
                                })
                                .collect_view()}
                        </address>
                    </div>

                    <div class="footer-columns">
                        {FOOTER_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, &group)| {
                                view! { <FooterColumn group=group index=index revealed=revealed /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-bottom" style=move || BOTTOM_ENTER.reveal_style(revealed.get(), reduced)>
                    <p class="footer-copyright">
                        {format!("\u{00A9} {} {}. All rights reserved.", env.year, SITE.brand)}
                    </p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, &link)| view! { <SocialIcon link=link index=index /> })
                            .collect_view()}
                    </div>
                    <button class="back-to-top" on:click=move |_| back_to_top()>
                        <span>"Back to top"</span>
                        <Icon kind=IconKind::ArrowUp class="icon icon-sm" />
                    </button>
                </div>
            </section>

            <button
                class="back-to-top-floating grow"
                aria-label="Back to top"
                style=FLOATING_ENTER.entrance_style(reduced)
                on:click=move |_| back_to_top()
            >
                <Icon kind=IconKind::ArrowUp class="icon icon-lg" />
            </button>
        </footer>
    }
}

#[component]
fn ContactLink(entry: ContactEntry, index: usize, #[prop(into)] revealed: Signal<bool>) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let motion = SLIDE_RIGHT.staggered(0.1, index);
    // The hover nudge moves the link itself, so the reveal goes on a wrapper.
    view! {
        <div class="footer-contact-slot" style=move || motion.reveal_style(revealed.get(), reduced)>
            <a href=entry.href class="footer-contact nudge">
                <Icon kind=entry.icon class="icon icon-md" />
                <span>{entry.text}</span>
            </a>
        </div>
    }
}

/// One titled list of footer links; links slide in 50ms apart.
#[component]
pub(crate) fn FooterColumn(
    group: FooterLinkGroup,
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let column = FADE_UP.staggered(0.1, index);

    view! {
        <div class="footer-column" style=move || column.reveal_style(revealed.get(), reduced)>
            <h4 class="footer-column-title">{group.category.title()}</h4>
            <ul class="footer-links">
                {group
                    .links
                    .iter()
                    .enumerate()
                    .map(|(link_index, link)| {
                        let motion = SLIDE_RIGHT.staggered(0.05, link_index);
                        view! {
                            <li style=move || motion.reveal_style(revealed.get(), reduced)>
                                <a href=link.href class="footer-link">{link.name}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub(crate) fn SocialIcon(link: SocialLink, index: usize) -> impl IntoView {
    let reduced = use_page_env().reduced_motion;
    let style = POP.staggered(0.1, index).entrance_style(reduced);
    view! {
        <a href=link.href class="social-link grow" aria-label=link.name style=style>
            <Icon kind=link.icon class="icon icon-md" />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn column_lists_its_links_under_an_h4() {
        let html = Owner::new().with(|| {
            let (revealed, _) = signal(true);
            view! { <FooterColumn group=FOOTER_LINKS[3] index=3 revealed=revealed /> }.to_html()
        });
        assert!(html.contains("<h4 class=\"footer-column-title\">Legal</h4>"));
        assert_eq!(html.matches("class=\"footer-link\"").count(), 4);
        assert!(html.contains("href=\"#gdpr\""));
    }

    #[test]
    fn contact_link_keeps_inline_styles_off_the_hover_target() {
        let entry = CONTACTS[0];
        let html = Owner::new().with(|| {
            let (revealed, _) = signal(true);
            view! { <ContactLink entry=entry index=0 revealed=revealed /> }.to_html()
        });
        let link_at = html.find("<a ").unwrap();
        let link_open = &html[link_at..link_at + html[link_at..].find('>').unwrap()];
        assert!(link_open.contains("class=\"footer-contact nudge\""));
        assert!(!link_open.contains("style="), "{link_open}");

        let slot_open = &html[..link_at];
        assert!(slot_open.contains("class=\"footer-contact-slot\""));
        assert!(slot_open.contains("transform:none"));
    }

    #[test]
    fn social_icons_have_accessible_names() {
        for (index, &link) in SOCIAL_LINKS.iter().enumerate() {
            let html = Owner::new().with(|| view! { <SocialIcon link=link index=index /> }.to_html());
            assert!(html.contains(&format!("aria-label=\"{}\"", link.name)));
        }
    }
}
