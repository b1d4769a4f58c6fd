//! Informational pages that share a single layout: destination and service
//! indexes, test preparation, events, blogs, gallery, legal pages, sitemap,
//! and the not-found page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config;
use crate::models::{DropdownItem, Route};

stylance::import_crate_style!(css, "src/components/pages/page.module.css");

struct PageContent {
    title: String,
    lead: String,
    /// Cards linking onwards (dropdown-style items).
    cards: Vec<DropdownItem>,
    /// Plain link rows (sitemap-style).
    links: Vec<(&'static str, Route)>,
}

impl PageContent {
    fn new(title: impl Into<String>, lead: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lead: lead.into(),
            cards: Vec::new(),
            links: Vec::new(),
        }
    }

    fn with_cards(mut self, cards: Vec<DropdownItem>) -> Self {
        self.cards = cards;
        self
    }

    fn with_links(mut self, links: Vec<(&'static str, Route)>) -> Self {
        self.links = links;
        self
    }
}

fn test_prep_title(slug: &str) -> String {
    config::test_preparations()
        .into_iter()
        .find(|item| matches!(&item.route, Route::TestPreparations { slug: Some(s) } if s == slug))
        .map(|item| format!("{} Preparation", item.label))
        .unwrap_or_else(|| "Test Preparation".to_string())
}

fn content_for(route: &Route) -> PageContent {
    match route {
        Route::Countries => PageContent::new(
            "Study Destinations",
            "Explore the countries we place students in. Each destination page covers \
             intakes, work rights, and why students choose it.",
        )
        .with_cards(config::destinations()),
        Route::TestPreparations { slug: None } => PageContent::new(
            "Test Preparation",
            "We run preparation classes for all the major English proficiency and \
             admission tests. Pick a test to learn more.",
        )
        .with_cards(config::test_preparations()),
        Route::TestPreparations { slug: Some(slug) } => PageContent::new(
            test_prep_title(slug),
            "Our instructors combine structured classes with regular mock tests and \
             one-on-one feedback. Contact us for the current batch schedule.",
        )
        .with_cards(config::test_preparations()),
        Route::Services => PageContent::new(
            "Our Services",
            "End-to-end support for your study abroad journey, from the first \
             counseling session to post-arrival assistance.",
        )
        .with_cards(config::services()),
        Route::EventsNews => PageContent::new(
            "Events & News",
            "Education fairs, university delegate visits, and scholarship announcements \
             are posted here. Check back soon or follow us on social media.",
        ),
        Route::Blogs => PageContent::new(
            "Blogs",
            "Guides and stories from our counselors and students. New articles are \
             on the way.",
        ),
        Route::Gallery => PageContent::new(
            "Gallery",
            "Moments from our seminars, pre-departure briefings, and student \
             send-offs.",
        ),
        Route::PrivacyPolicy => PageContent::new(
            "Privacy Policy",
            "We collect only the information you submit through our application and \
             contact forms, and use it solely to provide counseling services. We never \
             sell or share your personal data with third parties.",
        ),
        Route::Terms => PageContent::new(
            "Terms of Service",
            "Counseling services are provided free of charge. Admission and visa \
             outcomes depend on the decisions of institutions and immigration \
             authorities, which we cannot guarantee.",
        ),
        Route::Sitemap => PageContent::new("Sitemap", "All pages on this site.")
            .with_links(sitemap_links()),
        Route::NotFound { path } => PageContent::new(
            "Page Not Found",
            format!("Nothing lives at \"{path}\". The link may be outdated."),
        ),
        // Routes with dedicated pages never reach here; render a minimal
        // fallback rather than panicking.
        other => PageContent::new(other.title(), ""),
    }
}

fn sitemap_links() -> Vec<(&'static str, Route)> {
    let mut links = config::quick_links();
    links.push(("Apply Online", Route::ApplyOnline));
    links.push(("Resources", Route::Resources));
    links.push(("Gallery", Route::Gallery));
    links.extend(config::legal_links());
    links
}

#[component]
pub fn InfoPage(route: Route) -> impl IntoView {
    let PageContent { title, lead, cards, links } = content_for(&route);
    let has_cards = !cards.is_empty();
    let has_links = !links.is_empty();

    view! {
        <div class=css::page>
            <div class=css::container>
                <header class=css::header>
                    <h1 class=css::headerTitle>{title}</h1>
                    <p class=css::headerLead>{lead}</p>
                </header>

                <Show when=move || has_cards>
                    <div class=css::linkGrid>
                        {cards
                            .clone()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a class=css::linkCard href=item.route.to_hash()>
                                        <span class=css::linkCardSymbol>{item.symbol}</span>
                                        <span class=css::linkCardLabel>{item.label}</span>
                                        <span class=css::linkCardArrow>
                                            <Icon icon=ic::ARROW_RIGHT />
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <Show when=move || has_links>
                    <div class=css::card>
                        <ul class=css::list>
                            {links
                                .clone()
                                .into_iter()
                                .map(|(label, route)| {
                                    view! {
                                        <li class=css::listItem>
                                            <span class=css::listIcon>
                                                <Icon icon=ic::ARROW_RIGHT />
                                            </span>
                                            <a class=css::plainLink href=route.to_hash()>
                                                {label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>

                <div class=css::actions>
                    <a class=css::primary href=Route::Home.to_hash()>"Back to Home"</a>
                    <a class=css::secondary href=Route::Contact.to_hash()>"Contact Us"</a>
                </div>
            </div>
        </div>
    }
}
