//! About page and the reusable about section embedded on the home page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/about.module.css");

struct Stat {
    value: &'static str,
    label: &'static str,
    icon: icondata::Icon,
}

struct Value {
    title: &'static str,
    text: &'static str,
    icon: icondata::Icon,
}

fn stats() -> [Stat; 4] {
    [
        Stat { value: "5000+", label: "Students Counseled", icon: ic::USERS },
        Stat { value: "5+", label: "Years of Experience", icon: ic::AWARD },
        Stat { value: "100+", label: "Partner Institutions", icon: ic::GLOBE },
        Stat { value: "98%", label: "Visa Success Rate", icon: ic::TARGET },
    ]
}

fn values() -> [Value; 3] {
    [
        Value {
            title: "Excellence",
            text: "We maintain the highest standards in counseling, documentation, and \
                   application support for every student we work with.",
            icon: ic::AWARD,
        },
        Value {
            title: "Care",
            text: "Every student's journey is personal. We listen first, then build a plan \
                   around individual goals, budgets, and circumstances.",
            icon: ic::HEART,
        },
        Value {
            title: "Global Vision",
            text: "With partners across the UK, Australia, Canada, the USA, and New Zealand, \
                   we open doors to education worldwide.",
            icon: ic::GLOBE,
        },
    ]
}

/// Standalone about page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <AboutSection />
        </div>
    }
}

/// About content block: intro, stats, and core values. Also rendered on the
/// home page below the hero.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class=css::section>
            <div class=css::container>
                <header class=css::header>
                    <h2 class=css::title>"Who Are We?"</h2>
                    <p class=css::lead>
                        "Nextgen Advisors is a trusted educational consultancy based in \
                         Lalitpur, Nepal, dedicated to helping students achieve their dreams \
                         of studying abroad. Our experienced counselors provide end-to-end \
                         guidance, from choosing the right course and university to visa \
                         processing and pre-departure preparation."
                    </p>
                </header>

                <div class=css::statGrid>
                    {stats()
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class=css::statCard>
                                    <span class=css::statIcon>
                                        <Icon icon=stat.icon />
                                    </span>
                                    <span class=css::statValue>{stat.value}</span>
                                    <span class=css::statLabel>{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=css::valueGrid>
                    {values()
                        .into_iter()
                        .map(|value| {
                            view! {
                                <div class=css::valueCard>
                                    <span class=css::valueIcon>
                                        <Icon icon=value.icon />
                                    </span>
                                    <h3 class=css::valueTitle>{value.title}</h3>
                                    <p class=css::valueText>{value.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=css::ctaRow>
                    <a class=css::cta href=Route::ApplyOnline.to_hash()>
                        "Start Your Journey"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                </div>
            </div>
        </section>
    }
}
