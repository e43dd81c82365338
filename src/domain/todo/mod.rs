//! Todo domain module.
//!
//! Named lists of todo items and the rules that govern them: name length,
//! list name uniqueness, positional addressing with bounds checks, and the
//! derived queries the views use for completion state and ordering.

mod errors;
mod list;
mod lists;
pub mod queries;
#[allow(clippy::module_inception)]
mod todo;

pub use errors::TodoError;
pub use list::TodoList;
pub use lists::TodoLists;
pub use todo::Todo;
