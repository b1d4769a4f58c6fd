//! Navigation shell: top info bar, main navbar, dropdowns, mobile drawer.
//!
//! Visibility of the whole shell is scroll-driven (hide on scroll down,
//! show on scroll up or near the top); the rule itself lives in
//! [`crate::models::navigation`].

mod dropdown;
mod mobile;

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONES, DESKTOP_MEDIA_QUERY, SITE_NAME, SITE_SUBTITLE};
use crate::models::{DropdownId, MenuEvent, Route};
use crate::utils::dom;
use dropdown::Dropdown;
use mobile::MobileMenu;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Attach the window scroll listener driving navbar visibility.
fn setup_scroll_listener(ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let nav = ctx.nav;
        let closure = Closure::wrap(Box::new(move || {
            nav.on_scroll(dom::scroll_y());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;
}

/// Full navigation shell: info bar, navbar, and mobile drawer.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    setup_scroll_listener(ctx);

    // The drawer is a mobile-only surface; close it if the viewport grows
    // past the desktop breakpoint while it is open.
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move || {
        if is_desktop.get() {
            ctx.nav.menu_open.set(false);
            ctx.nav.mobile_dropdown.set(None);
        }
    });

    let shell_class = move |base: &str, hidden: &str| {
        if ctx.nav.visible.get() {
            base.to_string()
        } else {
            format!("{} {}", base, hidden)
        }
    };

    view! {
        <TopBar class=Signal::derive(move || shell_class(css::topBar, css::shellHidden)) />

        <nav class=move || shell_class(css::nav, css::shellHidden)>
            <div class=css::navInner>
                <a class=css::logo href=Route::Home.to_hash() aria-label="Home">
                    <span class=css::logoBadge>
                        <Icon icon=ic::GLOBE />
                    </span>
                    <span class=css::logoText>
                        <span class=css::logoName>{SITE_NAME}</span>
                        <span class=css::logoSub>{SITE_SUBTITLE}</span>
                    </span>
                </a>

                <DesktopNav />

                <button
                    class=css::hamburger
                    on:click=move |_| ctx.nav.apply_menu_event(MenuEvent::Toggle)
                    aria-label=move || {
                        if ctx.nav.menu_open.get() { "Close menu" } else { "Open menu" }
                    }
                >
                    {move || if ctx.nav.menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>

            <MobileMenu />
        </nav>
    }
}

/// Desktop-only info bar with contact details and shortcut links.
#[component]
fn TopBar(#[prop(into)] class: Signal<String>) -> impl IntoView {
    view! {
        <div class=move || class.get()>
            <div class=css::topBarInner>
                <div class=css::topBarContact>
                    <span>"\u{1F4E7} " {CONTACT_EMAIL}</span>
                    <span>"\u{1F4DE} " {CONTACT_PHONES[0]} " | " {CONTACT_PHONES[1]}</span>
                </div>
                <div class=css::topBarLinks>
                    <a class=css::topBarLink href=Route::Gallery.to_hash() aria-label="Gallery">
                        "GALLERY"
                    </a>
                    <a class=css::topBarLink href=Route::Resources.to_hash() aria-label="Resources">
                        "RESOURCES"
                    </a>
                    <a
                        class=css::topBarCta
                        href=Route::ApplyOnline.to_hash()
                        aria-label="Apply Online"
                    >
                        "APPLY ONLINE"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Desktop navigation links and dropdown menus.
#[component]
fn DesktopNav() -> impl IntoView {
    view! {
        <div class=css::desktopNav>
            <a class=css::navLink href=Route::About.to_hash() aria-label="About us">
                "ABOUT US"
            </a>
            <Dropdown id=DropdownId::Destinations items=crate::config::destinations() />
            <Dropdown id=DropdownId::TestPrep items=crate::config::test_preparations() />
            <Dropdown id=DropdownId::Services items=crate::config::services() />
            <a class=css::navLink href=Route::EventsNews.to_hash() aria-label="Events and News">
                "EVENTS/NEWS"
            </a>
            <a class=css::navLink href=Route::Blogs.to_hash() aria-label="Blogs">
                "BLOGS"
            </a>
            <a class=css::navCta href=Route::Contact.to_hash() aria-label="Contact us">
                "CONTACT US"
            </a>
        </div>
    }
}
