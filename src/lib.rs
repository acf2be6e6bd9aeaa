//! PawsAdopt Landing Page
//!
//! Renders the static PawsAdopt landing page and serves it over HTTP.
//!
//! - `page/`: the fixed page content as typed constants
//! - `widgets/`: the injected UI widget set (buttons, icons, links)
//! - `render`: page model + widgets -> HTML document
//! - `api_server`, `web/`: Axum router and handlers (feature `api`)

pub mod page;
pub mod widgets;
pub mod render;
pub mod error;

#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use page::{LandingPage, Route, LANDING_PAGE};
pub use widgets::{HtmlWidgets, Widgets};
pub use render::PageRenderer;
pub use error::RenderError;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router, shutdown_signal};
#[cfg(feature = "api")]
pub use config::ServerConfig;
