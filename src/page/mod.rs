//! Landing Page Model
//!
//! The fixed content of the PawsAdopt landing page as typed constants:
//! brand mark, navigation actions, hero block and feature grid.
//!
//! Nothing here is computed. The renderer maps [`LANDING_PAGE`] to markup
//! through an injected widget set (see `crate::widgets`).

use serde::{Serialize, Serializer};

// ============================================================================
// Navigation Targets
// ============================================================================

/// Destination pages elsewhere in the application.
///
/// These are opaque to this crate: only the path is ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Browse,
    Dashboard,
    Admin,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Browse, Route::Dashboard, Route::Admin];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Browse => "/browse",
            Route::Dashboard => "/dashboard",
            Route::Admin => "/admin",
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

// ============================================================================
// Widget Vocabulary
// ============================================================================

/// Glyphs used on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Heart,
    Search,
    Users,
}

/// Colour role of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Primary,
    Accent,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

// ============================================================================
// Page Sections
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    pub name: &'static str,
    pub mark: Icon,
}

/// One button in the top navigation bar
#[derive(Debug, Clone, Serialize)]
pub struct NavAction {
    pub label: &'static str,
    pub target: Route,
    pub variant: ButtonVariant,
}

/// Primary action of the hero block
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Route,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub description: &'static str,
    pub cta: CallToAction,
}

/// Icon + title + one sentence of copy
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCard {
    pub icon: Icon,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub brand: Brand,
    pub nav: [NavAction; 3],
    pub hero: Hero,
    pub features: [FeatureCard; 3],
}

impl LandingPage {
    /// Target reached by activating the hero call to action.
    pub fn activate_cta(&self) -> Route {
        self.hero.cta.target
    }

    pub fn nav_target(&self, label: &str) -> Option<Route> {
        self.nav.iter().find(|a| a.label == label).map(|a| a.target)
    }
}

// ============================================================================
// Content
// ============================================================================

pub const LANDING_PAGE: LandingPage = LandingPage {
    brand: Brand {
        name: "PawsAdopt",
        mark: Icon::Heart,
    },
    nav: [
        NavAction {
            label: "Browse Pets",
            target: Route::Browse,
            variant: ButtonVariant::Ghost,
        },
        NavAction {
            label: "My Dashboard",
            target: Route::Dashboard,
            variant: ButtonVariant::Ghost,
        },
        NavAction {
            label: "Admin",
            target: Route::Admin,
            variant: ButtonVariant::Outline,
        },
    ],
    hero: Hero {
        title: "Find Your Perfect Pet Companion",
        description: "Discover loving pets waiting for their forever homes. Browse, connect, and start your adoption journey today.",
        cta: CallToAction {
            label: "Start Browsing",
            target: Route::Browse,
            icon: Icon::Search,
        },
    },
    features: [
        FeatureCard {
            icon: Icon::Search,
            tone: Tone::Primary,
            title: "Easy Search",
            description: "Filter by breed, age, size, and more to find your ideal match.",
        },
        FeatureCard {
            icon: Icon::Heart,
            tone: Tone::Accent,
            title: "Save Favorites",
            description: "Keep track of pets you love and revisit them anytime.",
        },
        FeatureCard {
            icon: Icon::Users,
            tone: Tone::Secondary,
            title: "Simple Process",
            description: "Apply for adoption with just a few clicks and get matched.",
        },
    ],
};
