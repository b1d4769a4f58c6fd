//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! site metadata, contact details, navigation menu tables, the resource
//! category set, and form option lists. Static data is loaded at compile
//! time using `include_str!`.

use crate::models::{DropdownItem, Route, StudyDestination};

// =============================================================================
// Site Metadata
// =============================================================================

/// Consultancy name (first word of the logo lockup).
pub const SITE_NAME: &str = "Nextgen";

/// Second line of the logo lockup.
pub const SITE_SUBTITLE: &str = "Advisors";

/// Legal entity name used in the footer copyright.
pub const SITE_LEGAL_NAME: &str = "Nextgen Advisors Pvt. Ltd.";

/// One-line mission statement shown in the footer and hero.
pub const SITE_TAGLINE: &str =
    "Empowering the next generation through quality education and global opportunities.";

// =============================================================================
// Contact Details
// =============================================================================

pub const CONTACT_EMAIL: &str = "nextgenadvisors7@gmail.com";

/// Office phone lines, primary first.
pub const CONTACT_PHONES: &[&str] = &["015413555", "9709195734", "9709195735"];

pub const CONTACT_ADDRESS: &str = "Nextgen Advisors Pvt. Ltd., Manbhawan, Lalitpur, Nepal";

/// Opening hours, one entry per line.
pub const OFFICE_HOURS: &[&str] = &[
    "Mon-Fri: 9:00 AM - 6:00 PM",
    "Sat: 10:00 AM - 4:00 PM",
    "Sun: Closed",
];

/// Social media profiles: (label, url).
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "#"),
    ("Instagram", "#"),
    ("YouTube", "#"),
];

// =============================================================================
// Static Data (loaded at compile time)
// =============================================================================

/// Bundled resource catalog JSON.
pub const RESOURCE_DATA: &str = include_str!("../assets/data/resources.json");

// =============================================================================
// Resource Categories
// =============================================================================

/// A fixed classification tag used for filtering resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceCategory {
    /// Value matched against `Resource::category` ("all" matches everything).
    pub value: &'static str,
    /// Human-readable label for the filter select.
    pub label: &'static str,
}

/// The closed category set, including the "all" pseudo-category.
///
/// Catalog validation rejects any resource whose category is not listed
/// here (excluding "all", which is a filter value, not a record tag).
pub const RESOURCE_CATEGORIES: &[ResourceCategory] = &[
    ResourceCategory { value: "all", label: "All Resources" },
    ResourceCategory { value: "visa", label: "Visa Guidance" },
    ResourceCategory { value: "test-prep", label: "Test Preparation" },
    ResourceCategory { value: "application", label: "Applications" },
    ResourceCategory { value: "scholarship", label: "Scholarships" },
    ResourceCategory { value: "pre-departure", label: "Pre-Departure" },
    ResourceCategory { value: "destinations", label: "Destinations" },
];

// =============================================================================
// Application Form Options
// =============================================================================

/// Destination checkbox values (short names, matching the backend payload).
pub const STUDY_DESTINATION_OPTIONS: &[&str] = &["UK", "Australia", "Canada", "USA", "New Zealand"];

pub const STUDY_LEVELS: &[&str] = &["Diploma", "Bachelor's", "Master's", "PhD"];

pub const ENGLISH_TEST_OPTIONS: &[&str] = &["IELTS", "PTE", "TOEFL", "Others", "Not yet"];

pub const PASSPORT_OPTIONS: &[&str] = &["Yes", "No", "Applied"];

// =============================================================================
// Timing & Scroll Configuration
// =============================================================================

/// Simulated submission delay in milliseconds (stands in for the network
/// round-trip until a real backend exists).
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// Scroll-Y below which the navbar is always visible.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Media query marking the desktop layout breakpoint.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Navigation Menus
// =============================================================================

/// Study destination dropdown entries.
pub fn destinations() -> Vec<DropdownItem> {
    StudyDestination::ALL
        .into_iter()
        .map(|dest| DropdownItem {
            symbol: dest.flag(),
            label: dest.name(),
            route: Route::Destination(dest),
        })
        .collect()
}

/// Test preparation dropdown entries.
pub fn test_preparations() -> Vec<DropdownItem> {
    [
        ("\u{1F4DD}", "IELTS", "ielts"),
        ("\u{1F4BB}", "PTE", "pte"),
        ("\u{1F4DA}", "TOEFL", "toefl"),
        ("\u{1F393}", "SAT", "sat"),
        ("\u{1F4CA}", "GRE/GMAT", "gre-gmat"),
    ]
    .into_iter()
    .map(|(symbol, label, slug)| DropdownItem {
        symbol,
        label,
        route: Route::TestPreparations {
            slug: Some(slug.to_string()),
        },
    })
    .collect()
}

/// Services dropdown entries. All services live on the single services
/// page; the dropdown is a table of contents for it.
pub fn services() -> Vec<DropdownItem> {
    [
        ("\u{1F3AF}", "Career Counseling"),
        ("\u{1F3DB}", "University & Course Selection"),
        ("\u{1F4CB}", "Application Assistance"),
        ("\u{1F4C4}", "Visa Guidance"),
        ("\u{1F4B0}", "Scholarship Support"),
        ("\u{2708}", "Pre-Departure Briefing"),
        ("\u{1F91D}", "Post-Arrival Support"),
    ]
    .into_iter()
    .map(|(symbol, label)| DropdownItem {
        symbol,
        label,
        route: Route::Services,
    })
    .collect()
}

/// Footer quick links.
pub fn quick_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Home", Route::Home),
        ("About Us", Route::About),
        ("Study Destinations", Route::Countries),
        ("Test Preparation", Route::TestPreparations { slug: None }),
        ("Our Services", Route::Services),
        ("Events/News", Route::EventsNews),
        ("Blogs", Route::Blogs),
        ("Contact", Route::Contact),
    ]
}

/// Footer legal links.
pub fn legal_links() -> Vec<(&'static str, Route)> {
    vec![
        ("Privacy Policy", Route::PrivacyPolicy),
        ("Terms of Service", Route::Terms),
        ("Sitemap", Route::Sitemap),
    ]
}
