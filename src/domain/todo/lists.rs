//! TodoLists aggregate - every list owned by one session.
//!
//! Lists are addressed by position, matching the URLs the views emit.
//! Each list and todo also carries a stable id so callers can detect a
//! link that went stale after an earlier item was deleted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IdSequence, ItemName, ListId, TodoId};

use super::queries;
use super::{Todo, TodoError, TodoList};

const LIST_NAME_FIELD: &str = "list name";
const TODO_NAME_FIELD: &str = "todo name";

/// Ordered collection of lists for one session.
///
/// # Invariants
///
/// - list names are unique (exact, case-sensitive match)
/// - ids are never reused within the aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoLists {
    lists: Vec<TodoList>,
    ids: IdSequence,
}

impl TodoLists {
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the list at `position`.
    ///
    /// # Errors
    ///
    /// - `ListNotFound` if `position` is out of bounds
    pub fn list(&self, position: usize) -> Result<&TodoList, TodoError> {
        self.lists
            .get(position)
            .ok_or_else(|| TodoError::list_not_found(position))
    }

    /// Returns the todo at `todo_position` in the list at `list_position`.
    pub fn todo(&self, list_position: usize, todo_position: usize) -> Result<&Todo, TodoError> {
        self.list(list_position)?
            .todo(todo_position)
            .ok_or_else(|| TodoError::todo_not_found(list_position, todo_position))
    }

    /// Lists with their positions, incomplete lists first.
    pub fn sorted(&self) -> Vec<(usize, &TodoList)> {
        queries::sorted_lists(&self.lists)
    }

    /// Checks that the list at `position` is still the one the caller saw.
    ///
    /// `None` skips the check.
    pub fn ensure_list(&self, position: usize, expected: Option<ListId>) -> Result<(), TodoError> {
        let list = self.list(position)?;
        match expected {
            Some(id) if id != list.id() => Err(TodoError::list_not_found(position)),
            _ => Ok(()),
        }
    }

    /// Checks that the todo at the given positions is still the one the caller saw.
    pub fn ensure_todo(
        &self,
        list_position: usize,
        todo_position: usize,
        expected: Option<TodoId>,
    ) -> Result<(), TodoError> {
        let todo = self.todo(list_position, todo_position)?;
        match expected {
            Some(id) if id != todo.id() => {
                Err(TodoError::todo_not_found(list_position, todo_position))
            }
            _ => Ok(()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new, empty list. Returns its position.
    ///
    /// # Errors
    ///
    /// - `Validation` if the trimmed name is not 1-100 characters
    /// - `DuplicateListName` if another list already has the name
    pub fn create_list(&mut self, raw_name: &str) -> Result<usize, TodoError> {
        let name = ItemName::parse(LIST_NAME_FIELD, raw_name)?;
        self.ensure_unique(&name, None)?;

        let id = self.ids.next_list_id();
        self.lists.push(TodoList::new(id, name));
        Ok(self.lists.len() - 1)
    }

    /// Rename the list at `position`. Returns the old name.
    ///
    /// The list itself is excluded from the uniqueness check, so renaming
    /// a list to its current name succeeds.
    pub fn rename_list(&mut self, position: usize, raw_name: &str) -> Result<String, TodoError> {
        self.list(position)?;
        let name = ItemName::parse(LIST_NAME_FIELD, raw_name)?;
        self.ensure_unique(&name, Some(position))?;

        let old = self.lists[position].rename(name);
        Ok(old.into_inner())
    }

    /// Remove the list at `position`, shifting later lists down by one.
    pub fn delete_list(&mut self, position: usize) -> Result<TodoList, TodoError> {
        self.list(position)?;
        Ok(self.lists.remove(position))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Todo mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an incomplete todo to the list. Returns the todo's position.
    pub fn add_todo(&mut self, list_position: usize, raw_name: &str) -> Result<usize, TodoError> {
        self.list(list_position)?;
        let name = ItemName::parse(TODO_NAME_FIELD, raw_name)?;

        let id = self.ids.next_todo_id();
        Ok(self.lists[list_position].push_todo(id, name))
    }

    /// Remove a todo, shifting later todos down by one.
    pub fn delete_todo(
        &mut self,
        list_position: usize,
        todo_position: usize,
    ) -> Result<Todo, TodoError> {
        self.list_mut(list_position)?
            .remove_todo(list_position, todo_position)
    }

    /// Set a todo's completion flag.
    pub fn set_todo_status(
        &mut self,
        list_position: usize,
        todo_position: usize,
        completed: bool,
    ) -> Result<(), TodoError> {
        self.list_mut(list_position)?
            .todo_mut(list_position, todo_position)?
            .set_completed(completed);
        Ok(())
    }

    /// Mark every todo in the list completed. Returns how many changed.
    pub fn complete_all(&mut self, list_position: usize) -> Result<usize, TodoError> {
        Ok(self.list_mut(list_position)?.complete_all())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn list_mut(&mut self, position: usize) -> Result<&mut TodoList, TodoError> {
        self.lists
            .get_mut(position)
            .ok_or_else(|| TodoError::list_not_found(position))
    }

    fn ensure_unique(&self, name: &ItemName, skip: Option<usize>) -> Result<(), TodoError> {
        let taken = self
            .lists
            .iter()
            .enumerate()
            .any(|(i, list)| Some(i) != skip && list.name() == name.as_str());
        if taken {
            return Err(TodoError::DuplicateListName(name.to_string()));
        }
        Ok(())
    }
}
