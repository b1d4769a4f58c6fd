//! Study destination pages, one per supported country.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{Route, StudyDestination};

stylance::import_crate_style!(css, "src/components/pages/page.module.css");

fn blurb(destination: StudyDestination) -> &'static str {
    match destination {
        StudyDestination::Uk => {
            "World-renowned universities, one-year master's programs, and a two-year \
             post-study work visa make the UK a top choice for Nepali students."
        }
        StudyDestination::Australia => {
            "High-quality education, generous work rights during study, and clear \
             pathways to post-study employment across a wide range of fields."
        }
        StudyDestination::Canada => {
            "Affordable tuition, welcoming immigration policies, and post-graduation \
             work permits of up to three years."
        }
        StudyDestination::Usa => {
            "The widest choice of institutions and programs in the world, with strong \
             scholarship opportunities and optional practical training after graduation."
        }
        StudyDestination::NewZealand => {
            "Safe, friendly campuses with globally recognized qualifications and \
             post-study work visas for graduates."
        }
    }
}

fn highlights(destination: StudyDestination) -> [&'static str; 4] {
    match destination {
        StudyDestination::Uk => [
            "1-year master's degrees at most universities",
            "2-year Graduate Route post-study work visa",
            "No IELTS waiver issues with our partner institutions",
            "January and September intakes",
        ],
        StudyDestination::Australia => [
            "Up to 48 hours of work per fortnight during study",
            "2-4 year post-study work visas depending on qualification",
            "Strong demand in nursing, IT, and engineering",
            "February, July, and November intakes",
        ],
        StudyDestination::Canada => [
            "Post-graduation work permit of up to 3 years",
            "Pathways to permanent residency",
            "Co-op programs combining study and paid work",
            "January, May, and September intakes",
        ],
        StudyDestination::Usa => [
            "Thousands of institutions at every budget level",
            "Merit scholarships for strong academic profiles",
            "Optional Practical Training (OPT) after graduation",
            "Fall and Spring intakes",
        ],
        StudyDestination::NewZealand => [
            "Post-study work visas of up to 3 years",
            "All eight universities ranked in the top 3%",
            "Part-time work rights during study",
            "February and July intakes",
        ],
    }
}

#[component]
pub fn DestinationPage(destination: StudyDestination) -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::container>
                <header class=css::header>
                    <span class=css::flag>{destination.flag()}</span>
                    <h1 class=css::headerTitle>
                        {format!("Study in {}", destination.name())}
                    </h1>
                    <p class=css::headerLead>{blurb(destination)}</p>
                </header>

                <div class=css::card>
                    <h2 class=css::sectionTitle>"Why Choose This Destination"</h2>
                    <ul class=css::list>
                        {highlights(destination)
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class=css::listItem>
                                        <span class=css::listIcon>
                                            <Icon icon=ic::CHECK_CIRCLE />
                                        </span>
                                        {item}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class=css::actions>
                    <a class=css::primary href=Route::ApplyOnline.to_hash()>
                        "Apply Online"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                    <a class=css::secondary href=Route::Contact.to_hash()>
                        "Talk to a Counselor"
                    </a>
                </div>
            </div>
        </div>
    }
}
