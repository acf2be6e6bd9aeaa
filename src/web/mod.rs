//! HTML-facing web layer

pub mod handlers;
