//! Session-level query handlers.

mod take_flash;

pub use take_flash::{TakeFlashHandler, TakeFlashQuery};
