//! List command and query handlers.

mod create_list;
mod delete_list;
mod get_list;
mod list_lists;
mod rename_list;

pub use create_list::{CreateListCommand, CreateListHandler, CreateListResult, LIST_CREATED};
pub use delete_list::{DeleteListCommand, DeleteListHandler, DeleteListResult, LIST_DELETED};
pub use get_list::{GetListHandler, GetListQuery, GetListResult};
pub use list_lists::{ListListsHandler, ListListsQuery, ListListsResult};
pub use rename_list::{RenameListCommand, RenameListHandler, RenameListResult, LIST_UPDATED};
