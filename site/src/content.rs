// Page copy and section data
// Roche Pharmaceutical web team (c)2025
//
// Sections render these tables as-is; nothing here is computed.

use crate::components::icons::*;
use crate::routes::Page;

pub const COMPANY: &str = "Roche Pharmaceutical";

pub const COMPANY_BLURB: &str = "Delivering reliable, high-quality medical equipment and healthcare \
     solutions to hospitals, clinics, and laboratories across Sri Lanka.";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1581594693702-fbdc51b2763b?auto=format&fit=crop&q=80&w=800";

/// One animated figure in the stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: i64,
    pub suffix: &'static str,
    pub icon: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Years Experience", value: 15, suffix: "+", icon: ICON_ACTIVITY },
    Stat { label: "Products Supplied", value: 5000, suffix: "+", icon: ICON_SHIELD },
    Stat { label: "Happy Clients", value: 250, suffix: "+", icon: ICON_USERS },
    Stat { label: "Global Partners", value: 30, suffix: "+", icon: ICON_GLOBE },
];

/// Featured product category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub title: &'static str,
    pub image: &'static str,
    pub count: &'static str,
}

pub const CATEGORIES: [Category; 3] = [
    Category {
        title: "Diagnostic Systems",
        image: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?auto=format&fit=crop&q=80&w=600",
        count: "120+ Products",
    },
    Category {
        title: "Surgical Instruments",
        image: "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?auto=format&fit=crop&q=80&w=600",
        count: "500+ Tools",
    },
    Category {
        title: "Laboratory Devices",
        image: "https://images.unsplash.com/photo-1582719508461-905c673771fd?auto=format&fit=crop&q=80&w=600",
        count: "80+ Devices",
    },
];

pub const TRUST_POINTS: [&str; 4] = [
    "Global Standards Certified",
    "24/7 Technical Support",
    "Nationwide Distribution",
    "Ethical Sourcing",
];

/// Color treatment of a why-us tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Light,
    Primary,
    Secondary,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Light => "tile tile--light",
            Tone::Primary => "tile tile--primary",
            Tone::Secondary => "tile tile--secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    /// Tall tiles alternate with short ones to stagger the grid
    pub tall: bool,
}

/// Two columns of two, rendered top to bottom.
pub const TILE_COLUMNS: [[Tile; 2]; 2] = [
    [
        Tile { title: "Premium Quality", icon: ICON_AWARD, tone: Tone::Light, tall: false },
        Tile { title: "Warranty Assured", icon: ICON_SHIELD, tone: Tone::Primary, tall: true },
    ],
    [
        Tile { title: "Expert Team", icon: ICON_USERS, tone: Tone::Secondary, tall: true },
        Tile { title: "Fast Service", icon: ICON_ACTIVITY, tone: Tone::Light, tall: false },
    ],
];

pub const PRODUCT_LINES: [&str; 5] = [
    "Diagnostic Equipment",
    "Laboratory Equipment",
    "Surgical Instruments",
    "Patient Monitoring",
    "Medical Consumables",
];

pub const QUICK_LINKS: [Page; 5] = [
    Page::Home,
    Page::About,
    Page::Products,
    Page::Services,
    Page::Contact,
];

/// (label, icon) for the footer social row.
pub const SOCIALS: [(&str, &str); 4] = [
    ("Facebook", ICON_FACEBOOK),
    ("Twitter", ICON_TWITTER),
    ("LinkedIn", ICON_LINKEDIN),
    ("Instagram", ICON_INSTAGRAM),
];

pub const ADDRESS_LINES: [&str; 2] = ["Bambalapitiya, Colombo 04,", "Sri Lanka"];
pub const PHONE: &str = "+94 11 234 5678";
pub const EMAIL: &str = "info@rochepharma.lk";

/// Header copy for the pages that are still placeholders. The home page has its own sections.
pub fn placeholder_intro(page: Page) -> Option<(&'static str, &'static str)> {
    let intro = match page {
        Page::Home => return None,
        Page::About => (
            "About Us",
            "Over fifteen years of supplying certified medical equipment to Sri Lankan healthcare.",
        ),
        Page::Products => (
            "Our Products",
            "Diagnostic, surgical, laboratory and patient monitoring equipment from world-class manufacturers.",
        ),
        Page::Services => (
            "Our Services",
            "Installation, calibration, training and round-the-clock technical support.",
        ),
        Page::WhyUs => (
            "Why Choose Us",
            "Ethical sourcing, strict quality assurance and nationwide distribution.",
        ),
        Page::Contact => (
            "Contact Us",
            "Talk to our team about a consultation or a customised quote.",
        ),
    };
    Some(intro)
}
