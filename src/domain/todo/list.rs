//! TodoList entity.
//!
//! A list owns its todos outright. Todos are addressed by position; every
//! positional access is bounds checked and reports `TodoNotFound` instead
//! of panicking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemName, ListId, TodoId};

use super::queries;
use super::{Todo, TodoError};

/// A named, ordered collection of todos.
///
/// # Invariants
///
/// - `name` is 1-100 characters, trimmed
/// - `todos` keeps insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    name: ItemName,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list.
    pub fn new(id: ListId, name: ItemName) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns the todo at `position`, if any.
    pub fn todo(&self, position: usize) -> Option<&Todo> {
        self.todos.get(position)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived queries
    // ─────────────────────────────────────────────────────────────────────────

    /// True iff the list has at least one todo and all of them are completed.
    pub fn is_complete(&self) -> bool {
        queries::is_list_complete(self)
    }

    /// Number of todos not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.is_completed()).count()
    }

    /// Number of completed todos.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed()).count()
    }

    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    /// Todos with their positions, incomplete ones first.
    pub fn sorted_todos(&self) -> Vec<(usize, &Todo)> {
        queries::sorted_todos(&self.todos)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn rename(&mut self, name: ItemName) -> ItemName {
        std::mem::replace(&mut self.name, name)
    }

    /// Append a new incomplete todo. Returns its position.
    pub(crate) fn push_todo(&mut self, id: TodoId, name: ItemName) -> usize {
        self.todos.push(Todo::new(id, name));
        self.todos.len() - 1
    }

    /// Remove the todo at `position`, shifting later todos down by one.
    pub(crate) fn remove_todo(
        &mut self,
        list_position: usize,
        position: usize,
    ) -> Result<Todo, TodoError> {
        if position >= self.todos.len() {
            return Err(TodoError::todo_not_found(list_position, position));
        }
        Ok(self.todos.remove(position))
    }

    pub(crate) fn todo_mut(
        &mut self,
        list_position: usize,
        position: usize,
    ) -> Result<&mut Todo, TodoError> {
        self.todos
            .get_mut(position)
            .ok_or_else(|| TodoError::todo_not_found(list_position, position))
    }

    /// Mark every todo completed. Returns how many actually changed.
    pub(crate) fn complete_all(&mut self) -> usize {
        let mut changed = 0;
        for todo in self.todos.iter_mut().filter(|t| !t.is_completed()) {
            todo.set_completed(true);
            changed += 1;
        }
        changed
    }
}
