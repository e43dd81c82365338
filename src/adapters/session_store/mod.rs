//! Session store adapters.

mod in_memory;
mod sweeper;

pub use in_memory::InMemorySessionStore;
pub use sweeper::SessionSweeper;
