//! Home page: hero banner, destination highlights, and the about section.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::pages::about::AboutSection;
use crate::config::{self, SITE_NAME, SITE_SUBTITLE};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=css::page>
            <section class=css::hero>
                <div class=css::heroInner>
                    <h1 class=css::heroTitle>
                        "Your Gateway to "
                        <span class=css::heroAccent>"Global Education"</span>
                    </h1>
                    <p class=css::heroLead>
                        {format!(
                            "{} {} helps Nepali students study in the UK, Australia, Canada, \
                             the USA, and New Zealand with expert counseling, test preparation, \
                             and visa guidance.",
                            SITE_NAME, SITE_SUBTITLE,
                        )}
                    </p>
                    <div class=css::heroActions>
                        <a class=css::heroPrimary href=Route::ApplyOnline.to_hash()>
                            "Apply Online"
                            <Icon icon=ic::ARROW_RIGHT />
                        </a>
                        <a class=css::heroSecondary href=Route::Contact.to_hash()>
                            "Free Counseling"
                        </a>
                    </div>
                </div>
            </section>

            <section class=css::destinations>
                <div class=css::destinationsInner>
                    <h2 class=css::destinationsTitle>"Where Do You Want to Study?"</h2>
                    <div class=css::destinationGrid>
                        {config::destinations()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a class=css::destinationCard href=item.route.to_hash()>
                                        <span class=css::destinationFlag>{item.symbol}</span>
                                        <span class=css::destinationName>{item.label}</span>
                                        <span class=css::destinationArrow>
                                            <Icon icon=ic::ARROW_RIGHT />
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <AboutSection />
        </div>
    }
}
