//! Site footer: brand blurb, link columns, contact info, legal links.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{
    self, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONES, OFFICE_HOURS, SITE_LEGAL_NAME,
    SITE_NAME, SITE_SUBTITLE, SITE_TAGLINE, SOCIAL_LINKS,
};

stylance::import_crate_style!(css, "src/components/footer.module.css");

fn social_icon(label: &str) -> icondata::Icon {
    match label {
        "Facebook" => ic::FACEBOOK,
        "Instagram" => ic::INSTAGRAM,
        "YouTube" => ic::YOUTUBE,
        _ => ic::GLOBE,
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::grid>
                    // Brand and social
                    <div class=css::column>
                        <div class=css::brand>
                            <span class=css::brandBadge>
                                <Icon icon=ic::GLOBE />
                            </span>
                            <span class=css::brandText>
                                <span class=css::brandName>{SITE_NAME}</span>
                                <span class=css::brandSub>{SITE_SUBTITLE}</span>
                            </span>
                        </div>
                        <p class=css::tagline>{SITE_TAGLINE}</p>
                        <div class=css::social>
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, url)| {
                                    view! {
                                        <a
                                            class=css::socialLink
                                            href=*url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=format!("Visit our {}", label)
                                        >
                                            <Icon icon=social_icon(label) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Quick links
                    <div class=css::column>
                        <h3 class=css::columnTitle>"Quick Links"</h3>
                        <ul class=css::linkList>
                            {config::quick_links()
                                .into_iter()
                                .map(|(label, route)| {
                                    view! {
                                        <li>
                                            <a class=css::link href=route.to_hash()>{label}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Study destinations
                    <div class=css::column>
                        <h3 class=css::columnTitle>"Study Destinations"</h3>
                        <ul class=css::linkList>
                            {config::destinations()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a class=css::link href=item.route.to_hash()>
                                                {item.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Contact info
                    <div class=css::column>
                        <h3 class=css::columnTitle>"Contact Us"</h3>
                        <ul class=css::contactList>
                            <li class=css::contactItem>
                                <span class=css::contactIcon>
                                    <Icon icon=ic::MAP_PIN />
                                </span>
                                <span>{CONTACT_ADDRESS}</span>
                            </li>
                            <li class=css::contactItem>
                                <span class=css::contactIcon>
                                    <Icon icon=ic::PHONE />
                                </span>
                                <a class=css::link href=format!("tel:{}", CONTACT_PHONES[0])>
                                    {CONTACT_PHONES.join(" | ")}
                                </a>
                            </li>
                            <li class=css::contactItem>
                                <span class=css::contactIcon>
                                    <Icon icon=ic::MAIL />
                                </span>
                                <a class=css::link href=format!("mailto:{}", CONTACT_EMAIL)>
                                    {CONTACT_EMAIL}
                                </a>
                            </li>
                            {OFFICE_HOURS
                                .iter()
                                .map(|hours| {
                                    view! {
                                        <li class=css::contactItem>
                                            <span class=css::contactIcon>
                                                <Icon icon=ic::CLOCK />
                                            </span>
                                            <span>{*hours}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class=css::divider></div>

                <div class=css::bottom>
                    <div class=css::copyright>
                        {format!("\u{A9} {} {} All rights reserved.", year, SITE_LEGAL_NAME)}
                    </div>
                    <div class=css::legalLinks>
                        {config::legal_links()
                            .into_iter()
                            .map(|(label, route)| {
                                view! {
                                    <a class=css::legalLink href=route.to_hash()>{label}</a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
