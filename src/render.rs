//! Landing Page Renderer
//!
//! Turns a [`LandingPage`] into a complete HTML document. Widgets come from
//! the injected [`Widgets`] set; layout comes from `templates/pages/home.html`.

use askama::Template;

use crate::error::RenderError;
use crate::page::{ButtonSize, ButtonVariant, LandingPage, Tone, LANDING_PAGE};
use crate::widgets::{IconSize, IconSpec, Widgets};

// ============================================================================
// Page Template
// ============================================================================

struct FeatureCardView<'a> {
    icon: String,
    title: &'a str,
    description: &'a str,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate<'a> {
    title: String,
    brand_mark: String,
    brand_name: &'a str,
    nav_links: Vec<String>,
    hero_title: &'a str,
    hero_description: &'a str,
    hero_cta: String,
    features: Vec<FeatureCardView<'a>>,
}

// ============================================================================
// Renderer
// ============================================================================

pub struct PageRenderer<W: Widgets> {
    widgets: W,
}

impl<W: Widgets> PageRenderer<W> {
    pub fn new(widgets: W) -> Self {
        Self { widgets }
    }

    #[cfg(test)]
    pub(crate) fn widgets(&self) -> &W {
        &self.widgets
    }

    /// Render the built-in PawsAdopt landing page
    pub fn render_landing(&self) -> Result<String, RenderError> {
        self.render(&LANDING_PAGE)
    }

    pub fn render(&self, page: &LandingPage) -> Result<String, RenderError> {
        let w = &self.widgets;

        let brand_mark = w.icon(IconSpec::new(page.brand.mark, IconSize::Medium, Tone::Primary).filled())?;

        let nav_links = page
            .nav
            .iter()
            .map(|action| -> askama::Result<String> {
                let button = w.button(action.label, action.variant, ButtonSize::Default, None)?;
                w.link(action.target, &button)
            })
            .collect::<askama::Result<Vec<_>>>()?;

        let cta = &page.hero.cta;
        let cta_icon = w.icon(IconSpec::new(cta.icon, IconSize::Small, Tone::Primary))?;
        let cta_button = w.button(cta.label, ButtonVariant::Default, ButtonSize::Large, Some(&cta_icon))?;
        let hero_cta = w.link(cta.target, &cta_button)?;

        let mut features = Vec::with_capacity(page.features.len());
        for card in &page.features {
            features.push(FeatureCardView {
                icon: w.icon(IconSpec::new(card.icon, IconSize::Large, card.tone))?,
                title: card.title,
                description: card.description,
            });
        }

        let template = HomeTemplate {
            title: format!("{} - {}", page.brand.name, page.hero.title),
            brand_mark,
            brand_name: page.brand.name,
            nav_links,
            hero_title: page.hero.title,
            hero_description: page.hero.description,
            hero_cta,
            features,
        };

        Ok(template.render()?)
    }
}

impl<W: Widgets + Default> Default for PageRenderer<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}
