//! Application router component.
//!
//! Handles URL-based routing with hash history so the site can be served
//! from any static host. Uses native hashchange events instead of
//! leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current page is derived
//!   from `#/path`
//! - **Navbar and Footer never re-render on navigation**: only the page
//!   slot in between swaps
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::pages::{
    AboutPage, ApplyPage, ContactPage, DestinationPage, HomePage, InfoPage, ResourcesPage,
};
use crate::config::{SITE_NAME, SITE_SUBTITLE};
use crate::models::Route;
use crate::utils::dom;

/// Main application router.
///
/// Renders the stable shell (navbar, footer) around the page selected by
/// the current URL hash, and resets transient navigation state (mobile
/// drawer, dropdowns, scroll position) whenever the route changes.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // On navigation: close the drawer/dropdowns, jump back to the top,
    // and keep the document title in sync.
    Effect::new(move |prev: Option<Route>| {
        let current = route.get();
        if prev.is_some() && prev.as_ref() != Some(&current) {
            ctx.nav.link_selected();
            dom::scroll_to_top();
        }
        dom::set_document_title(&format!(
            "{} {} | {}",
            SITE_NAME,
            SITE_SUBTITLE,
            current.title()
        ));
        current
    });

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <Navbar />
        <main>
            {move || page_view(route_memo.get())}
        </main>
        <Footer />
    }
}

/// Select the page component for a route.
fn page_view(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Resources => view! { <ResourcesPage /> }.into_any(),
        Route::ApplyOnline => view! { <ApplyPage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::Destination(dest) => view! { <DestinationPage destination=dest /> }.into_any(),
        other => view! { <InfoPage route=other /> }.into_any(),
    }
}
