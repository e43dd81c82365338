//! Session domain module.
//!
//! Handles the browser session lifecycle: creation on first request,
//! activity tracking, idle expiry, and the one-shot flash message shown
//! on the next rendered page.

mod aggregate;
mod flash;

pub use aggregate::Session;
pub use flash::{Flash, FlashKind};
