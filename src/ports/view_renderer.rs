//! View renderer port.
//!
//! Defines the contract for turning read models into HTML pages, plus the
//! read models themselves. Read models are plain data: positions for
//! building URLs, ids for stale-link guards, and precomputed counts.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ListId, TodoId};
use crate::domain::session::Flash;
use crate::domain::todo::{Todo, TodoList};

/// Renderer port for full HTML pages.
///
/// Rendering is pure CPU work, so the port is synchronous.
pub trait ViewRenderer: Send + Sync {
    /// Render a complete page, layout included.
    fn render(&self, view: &PageView) -> Result<String, DomainError>;
}

/// A page plus the flash message to show above it.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub flash: Option<Flash>,
    pub page: Page,
}

impl PageView {
    pub fn new(page: Page) -> Self {
        Self { flash: None, page }
    }

    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }
}

/// Every page the application can render.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    /// All lists, incomplete first.
    Lists { lists: Vec<ListSummaryView> },

    /// Form for a new list, optionally re-shown after a validation error.
    NewList {
        list_name: String,
        error: Option<String>,
    },

    /// One list with its todos, incomplete first.
    ShowList {
        list: ListDetailView,
        todo_input: String,
        error: Option<String>,
    },

    /// Rename form for one list.
    EditList {
        list: ListSummaryView,
        new_list_name: String,
        error: Option<String>,
    },

    /// Generic failure page.
    Error { message: String },
}

/// Summary of one list for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummaryView {
    pub position: usize,
    pub id: ListId,
    pub name: String,
    pub is_complete: bool,
    pub remaining: usize,
    pub completed: usize,
    pub total: usize,
}

impl ListSummaryView {
    pub fn from_list(position: usize, list: &TodoList) -> Self {
        Self {
            position,
            id: list.id(),
            name: list.name().to_string(),
            is_complete: list.is_complete(),
            remaining: list.remaining_count(),
            completed: list.completed_count(),
            total: list.total_count(),
        }
    }
}

/// One list with every todo, ready for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListDetailView {
    pub summary: ListSummaryView,
    pub todos: Vec<TodoView>,
}

impl ListDetailView {
    /// Builds the view with todos in display order (incomplete first).
    pub fn from_list(position: usize, list: &TodoList) -> Self {
        Self {
            summary: ListSummaryView::from_list(position, list),
            todos: list
                .sorted_todos()
                .into_iter()
                .map(|(pos, todo)| TodoView::from_todo(pos, todo))
                .collect(),
        }
    }
}

/// One todo as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoView {
    pub position: usize,
    pub id: TodoId,
    pub name: String,
    pub completed: bool,
}

impl TodoView {
    pub fn from_todo(position: usize, todo: &Todo) -> Self {
        Self {
            position,
            id: todo.id(),
            name: todo.name().to_string(),
            completed: todo.is_completed(),
        }
    }
}
