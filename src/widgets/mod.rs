//! UI Widget Capability
//!
//! Buttons, icons and links are supplied by a [`Widgets`] implementation
//! handed to the renderer, so the page itself stays plain data.
//! [`HtmlWidgets`] is the stock set: small Askama templates under
//! `templates/widgets/`, styled by `static/app.css`.

use askama::Template;

use crate::page::{ButtonSize, ButtonVariant, Icon, Route, Tone};

// ============================================================================
// Icon Geometry
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    /// 20px, inline with button text
    Small,
    /// 32px, brand mark
    #[default]
    Medium,
    /// 48px, feature cards
    Large,
}

impl IconSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            IconSize::Small => "icon-sm",
            IconSize::Medium => "icon-md",
            IconSize::Large => "icon-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub icon: Icon,
    pub size: IconSize,
    pub tone: Tone,
    pub filled: bool,
}

impl IconSpec {
    pub fn new(icon: Icon, size: IconSize, tone: Tone) -> Self {
        Self { icon, size, tone, filled: false }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

impl Icon {
    /// Inner SVG elements on a 24x24 stroke grid
    pub fn svg_body(&self) -> &'static str {
        match self {
            Icon::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Icon::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Icon::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Heart => "heart",
            Icon::Search => "search",
            Icon::Users => "users",
        }
    }
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Accent => "tone-accent",
            Tone::Secondary => "tone-secondary",
        }
    }
}

impl ButtonVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

// ============================================================================
// Capability
// ============================================================================

/// Widget library the renderer draws with.
///
/// Every method returns finished markup. Text arguments are escaped by the
/// implementation; `content` and `leading` are already markup and are
/// inserted as-is.
pub trait Widgets: Send + Sync {
    fn icon(&self, spec: IconSpec) -> askama::Result<String>;

    fn button(
        &self,
        label: &str,
        variant: ButtonVariant,
        size: ButtonSize,
        leading: Option<&str>,
    ) -> askama::Result<String>;

    fn link(&self, target: Route, content: &str) -> askama::Result<String>;
}

// ============================================================================
// HTML Widget Set
// ============================================================================

#[derive(Template)]
#[template(path = "widgets/icon.html")]
struct IconTemplate<'a> {
    name: &'a str,
    size_class: &'a str,
    tone_class: &'a str,
    filled: bool,
    body: &'a str,
}

#[derive(Template)]
#[template(path = "widgets/button.html")]
struct ButtonTemplate<'a> {
    label: &'a str,
    variant_class: &'a str,
    size_class: &'a str,
    leading: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "widgets/link.html")]
struct LinkTemplate<'a> {
    href: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlWidgets;

impl Widgets for HtmlWidgets {
    fn icon(&self, spec: IconSpec) -> askama::Result<String> {
        IconTemplate {
            name: spec.icon.name(),
            size_class: spec.size.css_class(),
            tone_class: spec.tone.css_class(),
            filled: spec.filled,
            body: spec.icon.svg_body(),
        }
        .render()
    }

    fn button(
        &self,
        label: &str,
        variant: ButtonVariant,
        size: ButtonSize,
        leading: Option<&str>,
    ) -> askama::Result<String> {
        ButtonTemplate {
            label,
            variant_class: variant.css_class(),
            size_class: size.css_class(),
            leading,
        }
        .render()
    }

    fn link(&self, target: Route, content: &str) -> askama::Result<String> {
        LinkTemplate {
            href: target.path(),
            content,
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_escapes_label() {
        let html = HtmlWidgets
            .button("Cats & <Dogs>", ButtonVariant::Ghost, ButtonSize::Default, None)
            .unwrap();
        assert!(html.contains("Cats &amp; &lt;Dogs&gt;"));
        assert!(!html.contains("<Dogs>"));
    }

    #[test]
    fn test_button_classes() {
        let html = HtmlWidgets
            .button("Admin", ButtonVariant::Outline, ButtonSize::Large, None)
            .unwrap();
        assert!(html.contains("btn-outline"));
        assert!(html.contains("btn-lg"));
    }

    #[test]
    fn test_button_leading_markup_is_verbatim() {
        let icon = HtmlWidgets
            .icon(IconSpec::new(Icon::Search, IconSize::Small, Tone::Primary))
            .unwrap();
        let html = HtmlWidgets
            .button("Go", ButtonVariant::Default, ButtonSize::Large, Some(&icon))
            .unwrap();
        assert!(html.contains("<svg"));
        assert!(html.find("<svg").unwrap() < html.find("Go").unwrap());
    }

    #[test]
    fn test_icon_markup() {
        let html = HtmlWidgets
            .icon(IconSpec::new(Icon::Heart, IconSize::Medium, Tone::Primary).filled())
            .unwrap();
        assert!(html.starts_with("<svg"));
        assert!(html.contains("icon-heart"));
        assert!(html.contains("icon-md"));
        assert!(html.contains("is-filled"));
        assert!(html.contains(Icon::Heart.svg_body()));
    }

    #[test]
    fn test_unfilled_icon() {
        let html = HtmlWidgets
            .icon(IconSpec::new(Icon::Users, IconSize::Large, Tone::Secondary))
            .unwrap();
        assert!(!html.contains("is-filled"));
        assert!(html.contains("tone-secondary"));
    }

    #[test]
    fn test_link_wraps_content() {
        let html = HtmlWidgets.link(Route::Dashboard, "<span>x</span>").unwrap();
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains("<span>x</span>"));
    }

    #[test]
    fn test_link_hrefs_for_every_route() {
        for route in Route::ALL {
            let html = HtmlWidgets.link(route, "go").unwrap();
            assert_eq!(html.trim_end(), format!(r#"<a href="{}">go</a>"#, route.path()));
        }
    }
}
