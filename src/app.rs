//! Root application module.
//!
//! Contains the main App component, AppContext definition, NavState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::NAVBAR_SCROLL_THRESHOLD;
use crate::models::{DropdownId, MenuEvent, menu_transition, navbar_visible, toggle_dropdown};

// ============================================================================
// NavState
// ============================================================================

/// Navigation shell state managed with Leptos signals.
///
/// Holds the mobile drawer flag, the active dropdowns (desktop hover and
/// mobile accordion are independent), and the scroll-driven visibility of
/// the navbar. The transition rules themselves are the pure functions in
/// [`crate::models::navigation`]; this struct only wires them to signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct NavState {
    /// Whether the mobile drawer menu is open.
    pub menu_open: RwSignal<bool>,
    /// Desktop dropdown currently expanded by hover (at most one).
    pub active_dropdown: RwSignal<Option<DropdownId>>,
    /// Mobile accordion section currently expanded (at most one).
    pub mobile_dropdown: RwSignal<Option<DropdownId>>,
    /// Whether the navbar (and top info bar) is shown.
    pub visible: RwSignal<bool>,
    /// Last observed scroll-Y, for scroll direction detection.
    pub last_scroll_y: RwSignal<f64>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            active_dropdown: RwSignal::new(None),
            mobile_dropdown: RwSignal::new(None),
            visible: RwSignal::new(true),
            last_scroll_y: RwSignal::new(0.0),
        }
    }

    /// Apply a mobile menu event (hamburger, backdrop click, link follow).
    pub fn apply_menu_event(&self, event: MenuEvent) {
        let open = menu_transition(self.menu_open.get_untracked(), event);
        self.menu_open.set(open);
        if !open {
            self.mobile_dropdown.set(None);
        }
    }

    /// Expand or collapse a desktop dropdown on hover.
    pub fn hover_dropdown(&self, dropdown: Option<DropdownId>) {
        self.active_dropdown.set(dropdown);
    }

    /// Toggle a mobile accordion section.
    pub fn toggle_mobile_dropdown(&self, dropdown: DropdownId) {
        self.mobile_dropdown
            .update(|current| *current = toggle_dropdown(*current, dropdown));
    }

    /// Feed a new scroll position into the visibility rule.
    pub fn on_scroll(&self, current_y: f64) {
        let visible = navbar_visible(
            self.visible.get_untracked(),
            self.last_scroll_y.get_untracked(),
            current_y,
            NAVBAR_SCROLL_THRESHOLD,
        );
        self.visible.set(visible);
        self.last_scroll_y.set(current_y);
    }

    /// Close everything that should not survive a navigation.
    pub fn link_selected(&self) {
        self.apply_menu_event(MenuEvent::LinkSelected);
        self.active_dropdown.set(None);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// The site has exactly one cross-page state domain, the navigation shell;
/// page-local state (filter text, form fields) stays inside the pages.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation shell state (drawer, dropdowns, scroll visibility).
    pub nav: NavState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            nav: NavState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router (navbar, current page, footer)
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f8fafc;
                    color: #1e293b;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #f1f5f9;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
