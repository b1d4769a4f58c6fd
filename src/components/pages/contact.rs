//! Contact page: office details and counseling call-to-action.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONES, OFFICE_HOURS};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/page.module.css");

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::container>
                <header class=css::header>
                    <h1 class=css::headerTitle>"Contact Us"</h1>
                    <p class=css::headerLead>
                        "Visit our office in Lalitpur or reach out by phone or email. \
                         Counseling sessions are free, walk-ins welcome."
                    </p>
                </header>

                <div class=css::contactGrid>
                    <div class=css::contactCard>
                        <span class=css::contactIcon>
                            <Icon icon=ic::MAP_PIN />
                        </span>
                        <h3 class=css::contactLabel>"Office"</h3>
                        <p class=css::contactValue>{CONTACT_ADDRESS}</p>
                    </div>
                    <div class=css::contactCard>
                        <span class=css::contactIcon>
                            <Icon icon=ic::PHONE />
                        </span>
                        <h3 class=css::contactLabel>"Phone"</h3>
                        {CONTACT_PHONES
                            .iter()
                            .map(|phone| {
                                view! {
                                    <a
                                        class=css::contactValueLink
                                        href=format!("tel:{}", phone)
                                    >
                                        {*phone}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class=css::contactCard>
                        <span class=css::contactIcon>
                            <Icon icon=ic::MAIL />
                        </span>
                        <h3 class=css::contactLabel>"Email"</h3>
                        <a class=css::contactValueLink href=format!("mailto:{}", CONTACT_EMAIL)>
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                    <div class=css::contactCard>
                        <span class=css::contactIcon>
                            <Icon icon=ic::CLOCK />
                        </span>
                        <h3 class=css::contactLabel>"Office Hours"</h3>
                        {OFFICE_HOURS
                            .iter()
                            .map(|hours| view! { <p class=css::contactValue>{*hours}</p> })
                            .collect_view()}
                    </div>
                </div>

                <div class=css::actions>
                    <a class=css::primary href=Route::ApplyOnline.to_hash()>
                        "Apply Online"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                </div>
            </div>
        </div>
    }
}
