//! Hash-based routing for static-host-friendly navigation

/// Study destinations with dedicated country pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyDestination {
    Uk,
    Australia,
    Canada,
    Usa,
    NewZealand,
}

impl StudyDestination {
    pub const ALL: [StudyDestination; 5] = [
        Self::Uk,
        Self::Australia,
        Self::Canada,
        Self::Usa,
        Self::NewZealand,
    ];

    /// URL path segment for this destination.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Uk => "uk",
            Self::Australia => "australia",
            Self::Canada => "canada",
            Self::Usa => "usa",
            Self::NewZealand => "new-zealand",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.slug() == slug)
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uk => "United Kingdom",
            Self::Australia => "Australia",
            Self::Canada => "Canada",
            Self::Usa => "United States",
            Self::NewZealand => "New Zealand",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::Uk => "\u{1F1EC}\u{1F1E7}",
            Self::Australia => "\u{1F1E6}\u{1F1FA}",
            Self::Canada => "\u{1F1E8}\u{1F1E6}",
            Self::Usa => "\u{1F1FA}\u{1F1F8}",
            Self::NewZealand => "\u{1F1F3}\u{1F1FF}",
        }
    }
}

/// Application routes for hash-based navigation.
/// URL format: #/path (e.g., #/about, #/test-preparations/ielts)
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Landing page: #/ or empty hash
    Home,
    About,
    Countries,
    /// Test preparation overview (#/test-preparations) or a single
    /// test page (#/test-preparations/ielts).
    TestPreparations { slug: Option<String> },
    Services,
    EventsNews,
    Blogs,
    Contact,
    ApplyOnline,
    Resources,
    Gallery,
    Destination(StudyDestination),
    PrivacyPolicy,
    Terms,
    Sitemap,
    /// Unknown path; renders the not-found page.
    NotFound { path: String },
}

impl Route {
    /// Parse URL hash into Route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        if let Some(dest) = StudyDestination::from_slug(path) {
            return Self::Destination(dest);
        }

        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        match (head, rest) {
            ("about", None) => Self::About,
            ("countries", None) => Self::Countries,
            ("test-preparations", slug) => Self::TestPreparations {
                slug: slug.map(str::to_string),
            },
            ("services", None) => Self::Services,
            ("events-news", None) => Self::EventsNews,
            ("blogs", None) => Self::Blogs,
            ("contact", None) => Self::Contact,
            ("apply-online", None) => Self::ApplyOnline,
            ("resources", None) => Self::Resources,
            ("gallery", None) => Self::Gallery,
            ("privacy-policy", None) => Self::PrivacyPolicy,
            ("terms", None) => Self::Terms,
            ("sitemap", None) => Self::Sitemap,
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::About => "#/about".to_string(),
            Self::Countries => "#/countries".to_string(),
            Self::TestPreparations { slug: None } => "#/test-preparations".to_string(),
            Self::TestPreparations { slug: Some(slug) } => {
                format!("#/test-preparations/{}", slug)
            }
            Self::Services => "#/services".to_string(),
            Self::EventsNews => "#/events-news".to_string(),
            Self::Blogs => "#/blogs".to_string(),
            Self::Contact => "#/contact".to_string(),
            Self::ApplyOnline => "#/apply-online".to_string(),
            Self::Resources => "#/resources".to_string(),
            Self::Gallery => "#/gallery".to_string(),
            Self::Destination(dest) => format!("#/{}", dest.slug()),
            Self::PrivacyPolicy => "#/privacy-policy".to_string(),
            Self::Terms => "#/terms".to_string(),
            Self::Sitemap => "#/sitemap".to_string(),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Page title used for the document title.
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Study Abroad Consultancy".to_string(),
            Self::About => "About Us".to_string(),
            Self::Countries => "Study Destinations".to_string(),
            Self::TestPreparations { slug: None } => "Test Preparation".to_string(),
            Self::TestPreparations { slug: Some(slug) } => {
                format!("{} Preparation", slug.to_uppercase())
            }
            Self::Services => "Our Services".to_string(),
            Self::EventsNews => "Events & News".to_string(),
            Self::Blogs => "Blogs".to_string(),
            Self::Contact => "Contact Us".to_string(),
            Self::ApplyOnline => "Apply Online".to_string(),
            Self::Resources => "Study Abroad Resources".to_string(),
            Self::Gallery => "Gallery".to_string(),
            Self::Destination(dest) => format!("Study in {}", dest.name()),
            Self::PrivacyPolicy => "Privacy Policy".to_string(),
            Self::Terms => "Terms of Service".to_string(),
            Self::Sitemap => "Sitemap".to_string(),
            Self::NotFound { .. } => "Page Not Found".to_string(),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/about"), Route::About);
        assert_eq!(Route::from_hash("#/apply-online"), Route::ApplyOnline);
        assert_eq!(Route::from_hash("#/resources"), Route::Resources);
        assert_eq!(
            Route::from_hash("#/test-preparations"),
            Route::TestPreparations { slug: None }
        );
        assert_eq!(
            Route::from_hash("#/test-preparations/ielts"),
            Route::TestPreparations {
                slug: Some("ielts".to_string()),
            }
        );
        assert_eq!(
            Route::from_hash("#/uk"),
            Route::Destination(StudyDestination::Uk)
        );
        assert_eq!(
            Route::from_hash("#/new-zealand"),
            Route::Destination(StudyDestination::NewZealand)
        );
        // Trailing slash is tolerated
        assert_eq!(Route::from_hash("#/about/"), Route::About);
        assert_eq!(
            Route::from_hash("#/no-such-page"),
            Route::NotFound {
                path: "no-such-page".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Home.to_hash(), "#/");
        assert_eq!(Route::About.to_hash(), "#/about");
        assert_eq!(
            Route::TestPreparations {
                slug: Some("pte".to_string()),
            }
            .to_hash(),
            "#/test-preparations/pte"
        );
        assert_eq!(
            Route::Destination(StudyDestination::NewZealand).to_hash(),
            "#/new-zealand"
        );
    }

    #[test]
    fn test_route_round_trip() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Countries,
            Route::TestPreparations { slug: None },
            Route::Services,
            Route::EventsNews,
            Route::Blogs,
            Route::Contact,
            Route::ApplyOnline,
            Route::Resources,
            Route::Gallery,
            Route::Destination(StudyDestination::Canada),
            Route::PrivacyPolicy,
            Route::Terms,
            Route::Sitemap,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_destination_slugs() {
        for dest in StudyDestination::ALL {
            assert_eq!(StudyDestination::from_slug(dest.slug()), Some(dest));
        }
        assert_eq!(StudyDestination::from_slug("germany"), None);
    }
}
