//! View renderer adapters.

mod html;

pub use html::HtmlRenderer;
