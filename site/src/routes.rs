// Site routes
// Roche Pharmaceutical web team (c)2025

/// Every page reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Products,
    Services,
    WhyUs,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Products,
        Page::Services,
        Page::WhyUs,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Products => "/products",
            Page::Services => "/services",
            Page::WhyUs => "/why-us",
            Page::Contact => "/contact",
        }
    }

    /// Label used in the nav bar and footer.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Products => "Products",
            Page::Services => "Services",
            Page::WhyUs => "Why Choose Us",
            Page::Contact => "Contact",
        }
    }

    /// Page for a location pathname. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Page::from_path("/why-us/"), Some(Page::WhyUs));
        assert_eq!(Page::from_path(""), Some(Page::Home));
    }

    #[test]
    fn unknown_paths() {
        assert_eq!(Page::from_path("/about-us"), None);
        assert_eq!(Page::from_path("/home"), None);
        assert_eq!(Page::from_path("/products/x-ray"), None);
    }

    #[test]
    fn nav_order_and_labels() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            ["Home", "About Us", "Products", "Services", "Why Choose Us", "Contact"]
        );
    }
}
