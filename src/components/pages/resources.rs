//! Resources page: searchable, filterable listing of the static catalog.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::components::icons as ic;
use crate::config::{CONTACT_EMAIL, RESOURCE_CATEGORIES};
use crate::core::{catalog, filter_resources};
use crate::models::{Resource, ResourceKind, Route};

stylance::import_crate_style!(css, "src/components/pages/resources.module.css");

fn kind_icon(kind: ResourceKind) -> icondata::Icon {
    match kind {
        ResourceKind::Document | ResourceKind::Checklist => ic::FILE_TEXT,
        ResourceKind::Video => ic::VIDEO,
        ResourceKind::Guide => ic::BOOK_OPEN,
    }
}

fn kind_class(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Document => css::kindDocument,
        ResourceKind::Video => css::kindVideo,
        ResourceKind::Guide => css::kindGuide,
        ResourceKind::Checklist => css::kindChecklist,
    }
}

/// Study-abroad resources listing with live search and category filter.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let (search_term, set_search_term) = signal(String::new());
    let (category, set_category) = signal("all".to_string());

    // The catalog is immutable, so the shown subset is a pure function of
    // the two filter inputs.
    let filtered = Memo::new(move |_| {
        filter_resources(catalog::resources(), &search_term.get(), &category.get())
    });

    let on_search = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_search_term.set(input.value());
    };

    let on_category = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let select = target.unchecked_into::<web_sys::HtmlSelectElement>();
        set_category.set(select.value());
    };

    view! {
        <div class=css::page>
            <div class=css::container>
                <header class=css::header>
                    <h1 class=css::headerTitle>"Study Abroad Resources"</h1>
                    <p class=css::headerLead>
                        "Access our comprehensive collection of guides, checklists, and tools \
                         to help you navigate your international education journey."
                    </p>
                </header>

                <div class=css::filterBar>
                    <div class=css::searchBox>
                        <span class=css::searchIcon>
                            <Icon icon=ic::SEARCH />
                        </span>
                        <input
                            class=css::searchInput
                            type="text"
                            placeholder="Search resources..."
                            prop:value=search_term
                            on:input=on_search
                        />
                    </div>
                    <select class=css::categorySelect prop:value=category on:change=on_category>
                        {RESOURCE_CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=c.value>{c.label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! { <EmptyState /> }
                >
                    <div class=css::grid>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|resource| view! { <ResourceCard resource=resource /> })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <section class=css::contactBand>
                    <h3 class=css::contactTitle>"Need Additional Resources?"</h3>
                    <p class=css::contactLead>
                        "Can't find what you're looking for? Our counselors can provide \
                         personalized resources and guidance for your specific needs."
                    </p>
                    <div class=css::contactActions>
                        <a class=css::contactPrimary href=Route::Contact.to_hash()>
                            "Contact Our Counselors"
                        </a>
                        <a class=css::contactSecondary href=format!("mailto:{}", CONTACT_EMAIL)>
                            "Email Your Request"
                        </a>
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Single resource card with type badge and download/view actions.
#[component]
fn ResourceCard(resource: &'static Resource) -> impl IntoView {
    view! {
        <article class=css::card>
            <div class=css::cardTop>
                <span class=format!("{} {}", css::cardIcon, kind_class(resource.kind))>
                    <Icon icon=kind_icon(resource.kind) />
                </span>
                <span class=css::cardBadge>{resource.kind.label()}</span>
            </div>

            <h3 class=css::cardTitle>{resource.title.as_str()}</h3>
            <p class=css::cardDescription>{resource.description.as_str()}</p>

            {resource.size.as_deref().map(|size| {
                view! { <p class=css::cardSize>"File size: " {size}</p> }
            })}

            <div class=css::cardActions>
                {resource.download_url.as_deref().map(|url| {
                    view! {
                        <a class=css::downloadButton href=url>
                            <Icon icon=ic::DOWNLOAD />
                            "Download"
                        </a>
                    }
                })}
                {resource.external_url.as_deref().map(|url| {
                    view! {
                        <a class=css::viewButton href=url>
                            <Icon icon=ic::EXTERNAL_LINK />
                            "View"
                        </a>
                    }
                })}
            </div>
        </article>
    }
}

/// Shown when the filter matches nothing; not an error state.
#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class=css::empty>
            <span class=css::emptyIcon>
                <Icon icon=ic::SEARCH />
            </span>
            <h3 class=css::emptyTitle>"No resources found"</h3>
            <p class=css::emptyText>"Try adjusting your search terms or filter criteria."</p>
        </div>
    }
}
