//! Todo entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemName, TodoId};

/// A named item with a two-state completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    name: ItemName,
    completed: bool,
}

impl Todo {
    /// New todos always start incomplete.
    pub fn new(id: TodoId, name: ItemName) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
