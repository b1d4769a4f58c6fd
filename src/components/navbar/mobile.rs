//! Mobile drawer menu with accordion submenus.
//!
//! The drawer closes on backdrop click, on link selection, or when the
//! viewport grows to desktop size (handled in the parent Navbar).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{DropdownId, DropdownItem, MenuEvent, Route};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Slide-in drawer menu for small screens.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <Show when=move || ctx.nav.menu_open.get()>
            // Backdrop catches outside clicks
            <div
                class=css::backdrop
                on:click=move |_| ctx.nav.apply_menu_event(MenuEvent::ClickOutside)
            ></div>

            <div class=css::drawer>
                <button
                    class=css::drawerClose
                    on:click=move |_| ctx.nav.apply_menu_event(MenuEvent::Toggle)
                    aria-label="Close menu"
                >
                    <Icon icon=ic::CLOSE />
                </button>

                <div class=css::drawerNav>
                    <DrawerLink label="ABOUT US" route=Route::About />
                    <DrawerSection
                        id=DropdownId::Destinations
                        items=crate::config::destinations()
                    />
                    <DrawerSection
                        id=DropdownId::TestPrep
                        items=crate::config::test_preparations()
                    />
                    <DrawerSection id=DropdownId::Services items=crate::config::services() />
                    <DrawerLink label="EVENTS/NEWS" route=Route::EventsNews />
                    <DrawerLink label="BLOGS" route=Route::Blogs />

                    <a
                        class=css::drawerCta
                        href=Route::Contact.to_hash()
                        on:click=move |_| ctx.nav.apply_menu_event(MenuEvent::LinkSelected)
                    >
                        "CONTACT US"
                    </a>
                </div>
            </div>
        </Show>
    }
}

/// Plain navigation link inside the drawer.
#[component]
fn DrawerLink(label: &'static str, route: Route) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <a
            class=css::drawerLink
            href=route.to_hash()
            on:click=move |_| ctx.nav.apply_menu_event(MenuEvent::LinkSelected)
        >
            {label}
        </a>
    }
}

/// Collapsible submenu section inside the drawer.
#[component]
fn DrawerSection(id: DropdownId, items: Vec<DropdownItem>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_open = Memo::new(move |_| ctx.nav.mobile_dropdown.get() == Some(id));

    view! {
        <div class=css::drawerSection>
            <button
                class=css::drawerSectionButton
                on:click=move |_| ctx.nav.toggle_mobile_dropdown(id)
            >
                <span>{id.label()}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>

            <Show when=move || is_open.get()>
                <div class=css::drawerSectionItems>
                    {items
                        .clone()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    class=css::drawerItem
                                    href=item.route.to_hash()
                                    on:click=move |_| {
                                        ctx.nav.apply_menu_event(MenuEvent::LinkSelected)
                                    }
                                >
                                    <span>{item.symbol}</span>
                                    <span>{item.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
