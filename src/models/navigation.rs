//! Navigation menu state transitions.
//!
//! The navbar has three pieces of UI state: which desktop dropdown is
//! expanded (at most one), whether the mobile drawer is open, and whether
//! the bar itself is visible (scroll-driven). The transitions are kept as
//! pure functions here so they can be unit tested without a browser; the
//! signal wiring lives in [`crate::app::NavState`].

use crate::models::Route;

/// Identifies a navigation submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownId {
    Destinations,
    TestPrep,
    Services,
}

impl DropdownId {
    /// Menu heading as shown in the navbar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Destinations => "STUDY DESTINATIONS",
            Self::TestPrep => "TEST PREPARATION",
            Self::Services => "OUR SERVICES",
        }
    }
}

/// One entry of a dropdown menu.
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownItem {
    /// Small decoration in front of the label (flag or pictogram).
    pub symbol: &'static str,
    pub label: &'static str,
    pub route: Route,
}

/// Events that can change the mobile menu's visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger or close button pressed.
    Toggle,
    /// Click landed outside the drawer (on the backdrop).
    ClickOutside,
    /// A navigation link inside the drawer was followed.
    LinkSelected,
}

/// Next open/closed state of the mobile menu after `event`.
pub fn menu_transition(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::ClickOutside | MenuEvent::LinkSelected => false,
    }
}

/// Next active dropdown after clicking/tapping `clicked`.
///
/// Clicking the already-active dropdown collapses it; anything else
/// switches to the clicked one, so at most one is ever expanded.
pub fn toggle_dropdown(current: Option<DropdownId>, clicked: DropdownId) -> Option<DropdownId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Whether the navbar should be visible after a scroll event.
///
/// Near the top of the page the bar is always shown. Past the threshold,
/// scrolling down hides it and scrolling up brings it back. An unchanged
/// position keeps the previous state.
pub fn navbar_visible(visible: bool, last_y: f64, current_y: f64, threshold: f64) -> bool {
    if current_y < threshold {
        true
    } else if current_y > last_y {
        false
    } else if current_y < last_y {
        true
    } else {
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_opens_and_closes() {
        assert!(menu_transition(false, MenuEvent::Toggle));
        assert!(!menu_transition(true, MenuEvent::Toggle));
    }

    #[test]
    fn test_menu_closes_on_outside_click_and_link() {
        assert!(!menu_transition(true, MenuEvent::ClickOutside));
        assert!(!menu_transition(true, MenuEvent::LinkSelected));
        // Already-closed menu stays closed
        assert!(!menu_transition(false, MenuEvent::ClickOutside));
    }

    #[test]
    fn test_at_most_one_dropdown_active() {
        let active = toggle_dropdown(None, DropdownId::Destinations);
        assert_eq!(active, Some(DropdownId::Destinations));

        // Switching replaces rather than stacks
        let active = toggle_dropdown(active, DropdownId::Services);
        assert_eq!(active, Some(DropdownId::Services));

        // Clicking the active one collapses it
        assert_eq!(toggle_dropdown(active, DropdownId::Services), None);
    }

    #[test]
    fn test_navbar_always_visible_near_top() {
        assert!(navbar_visible(false, 120.0, 10.0, 50.0));
        assert!(navbar_visible(true, 0.0, 0.0, 50.0));
    }

    #[test]
    fn test_navbar_hides_scrolling_down_shows_scrolling_up() {
        assert!(!navbar_visible(true, 100.0, 200.0, 50.0));
        assert!(navbar_visible(false, 200.0, 100.0, 50.0));
        // Unchanged position keeps previous state
        assert!(!navbar_visible(false, 200.0, 200.0, 50.0));
        assert!(navbar_visible(true, 200.0, 200.0, 50.0));
    }
}
