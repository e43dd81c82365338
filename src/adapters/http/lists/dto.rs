//! HTTP form DTOs for list and todo endpoints.
//!
//! Every field defaults when absent, so a form that omits a field is treated
//! like one that submitted it empty and validation reports it. Guard ids are
//! read as text so a mangled value fails the guard instead of the extractor.

use serde::Deserialize;

use crate::domain::foundation::{ListId, TodoId};

/// Form posted by the new-list page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewListForm {
    pub list_name: String,
}

/// Form posted by the edit-list page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenameListForm {
    pub new_list_name: String,
    pub list_id: Option<String>,
}

impl RenameListForm {
    pub fn expected_list(&self) -> Option<ListId> {
        guard_id(&self.list_id).map(ListId::from_raw)
    }
}

/// Form posted to add a todo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddTodoForm {
    pub todo: String,
    pub list_id: Option<String>,
}

impl AddTodoForm {
    pub fn expected_list(&self) -> Option<ListId> {
        guard_id(&self.list_id).map(ListId::from_raw)
    }
}

/// Form posted to check or uncheck a todo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TodoStatusForm {
    pub completed: String,
    pub list_id: Option<String>,
    pub todo_id: Option<String>,
}

impl TodoStatusForm {
    /// Only the literal `"true"` marks the todo completed.
    pub fn is_completed(&self) -> bool {
        self.completed == "true"
    }

    pub fn guard(&self) -> RecordGuard {
        RecordGuard {
            list_id: self.list_id.clone(),
            todo_id: self.todo_id.clone(),
        }
    }
}

/// Stale-link guard carried by forms that only act on a record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordGuard {
    pub list_id: Option<String>,
    pub todo_id: Option<String>,
}

impl RecordGuard {
    pub fn expected_list(&self) -> Option<ListId> {
        guard_id(&self.list_id).map(ListId::from_raw)
    }

    pub fn expected_todo(&self) -> Option<TodoId> {
        guard_id(&self.todo_id).map(TodoId::from_raw)
    }
}

/// Raw id carried by a guard field.
///
/// A blank field means no guard. Ids start at 1, so a value that does not
/// parse becomes 0 and matches no record.
fn guard_id(raw: &Option<String>) -> Option<u64> {
    let raw = raw.as_deref().map(str::trim).filter(|raw| !raw.is_empty())?;
    Some(raw.parse().unwrap_or(0))
}
