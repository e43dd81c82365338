//! HTTP handlers for list and todo endpoints.
//!
//! Reads render a page; writes answer with a 302 redirect to the canonical
//! view, except validation failures, which re-render the submitted form
//! with status 422.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::adapters::http::middleware::CurrentSession;
use crate::application::handlers::{
    AddTodoCommand, AddTodoHandler, CompleteAllCommand, CompleteAllHandler, CreateListCommand,
    CreateListHandler, DeleteListCommand, DeleteListHandler, DeleteTodoCommand,
    DeleteTodoHandler, GetListHandler, GetListQuery, GetListResult, ListListsHandler,
    ListListsQuery, RenameListCommand, RenameListHandler, SetTodoStatusCommand,
    SetTodoStatusHandler, TakeFlashHandler, TakeFlashQuery,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::Flash;
use crate::domain::todo::TodoError;
use crate::ports::{Page, PageView, SessionStore, ViewRenderer};

use super::dto::{AddTodoForm, NewListForm, RecordGuard, RenameListForm, TodoStatusForm};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the list endpoints.
///
/// Cloned per request; the dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct TodoAppState {
    pub session_store: Arc<dyn SessionStore>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl TodoAppState {
    pub fn new(session_store: Arc<dyn SessionStore>, renderer: Arc<dyn ViewRenderer>) -> Self {
        Self {
            session_store,
            renderer,
        }
    }

    pub fn list_lists_handler(&self) -> ListListsHandler {
        ListListsHandler::new(self.session_store.clone())
    }

    pub fn get_list_handler(&self) -> GetListHandler {
        GetListHandler::new(self.session_store.clone())
    }

    pub fn take_flash_handler(&self) -> TakeFlashHandler {
        TakeFlashHandler::new(self.session_store.clone())
    }

    pub fn create_list_handler(&self) -> CreateListHandler {
        CreateListHandler::new(self.session_store.clone())
    }

    pub fn rename_list_handler(&self) -> RenameListHandler {
        RenameListHandler::new(self.session_store.clone())
    }

    pub fn delete_list_handler(&self) -> DeleteListHandler {
        DeleteListHandler::new(self.session_store.clone())
    }

    pub fn add_todo_handler(&self) -> AddTodoHandler {
        AddTodoHandler::new(self.session_store.clone())
    }

    pub fn delete_todo_handler(&self) -> DeleteTodoHandler {
        DeleteTodoHandler::new(self.session_store.clone())
    }

    pub fn set_todo_status_handler(&self) -> SetTodoStatusHandler {
        SetTodoStatusHandler::new(self.session_store.clone())
    }

    pub fn complete_all_handler(&self) -> CompleteAllHandler {
        CompleteAllHandler::new(self.session_store.clone())
    }

    /// Render a page with the given status.
    fn page(&self, status: StatusCode, view: PageView) -> Response {
        match self.renderer.render(&view) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }

    /// Map a handler failure to its response.
    ///
    /// Not-found failures have already left an error flash in the session,
    /// so they redirect to the page that will show it.
    fn error_response(&self, err: TodoError) -> Response {
        match err {
            TodoError::ListNotFound { .. } | TodoError::SessionNotFound => redirect("/lists"),
            TodoError::TodoNotFound { list_position, .. } => {
                redirect(&format!("/lists/{}", list_position))
            }
            TodoError::Validation(_) | TodoError::DuplicateListName(_) => self.page(
                StatusCode::UNPROCESSABLE_ENTITY,
                PageView::new(Page::Error {
                    message: err.to_string(),
                }),
            ),
            TodoError::Infrastructure(ref message) => {
                tracing::error!(error = %message, "Request failed");
                self.page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PageView::new(Page::Error {
                        message: "Something went wrong. Please try again.".to_string(),
                    }),
                )
            }
        }
    }

    /// Flash for a re-rendered form; a vanished session simply has none.
    async fn pending_flash(&self, session_id: SessionId) -> Option<Flash> {
        self.take_flash_handler()
            .handle(TakeFlashQuery { session_id })
            .await
            .ok()
            .flatten()
    }

    async fn load_list(
        &self,
        session_id: SessionId,
        list_position: usize,
    ) -> Result<GetListResult, TodoError> {
        self.get_list_handler()
            .handle(GetListQuery {
                session_id,
                list_position,
            })
            .await
    }
}

/// 302 Found to `location`.
///
/// `axum::response::Redirect::to` answers 303, so the response is built by hand.
fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Positions that do not parse address no record.
fn position(raw: &str) -> usize {
    raw.parse().unwrap_or(usize::MAX)
}

/// A missing or unreadable body counts as an empty form.
fn form_or_default<T: Default>(form: Option<Form<T>>) -> T {
    form.map(|Form(form)| form).unwrap_or_default()
}

// ════════════════════════════════════════════════════════════════════════════
// Page handlers (GET)
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Redirect to the overview
pub async fn home() -> Response {
    redirect("/lists")
}

/// GET /lists - All lists, incomplete first
pub async fn list_lists(
    State(state): State<TodoAppState>,
    session: CurrentSession,
) -> Response {
    let query = ListListsQuery {
        session_id: session.id,
    };

    match state.list_lists_handler().handle(query).await {
        Ok(result) => state.page(
            StatusCode::OK,
            PageView::new(Page::Lists {
                lists: result.lists,
            })
            .with_flash(result.flash),
        ),
        Err(e) => state.error_response(e),
    }
}

/// GET /lists/new - New list form
pub async fn new_list(State(state): State<TodoAppState>, session: CurrentSession) -> Response {
    let flash = state.pending_flash(session.id).await;
    state.page(
        StatusCode::OK,
        PageView::new(Page::NewList {
            list_name: String::new(),
            error: None,
        })
        .with_flash(flash),
    )
}

/// GET /lists/:n - One list with its todos
pub async fn show_list(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path(n): Path<String>,
) -> Response {
    match state.load_list(session.id, position(&n)).await {
        Ok(result) => state.page(
            StatusCode::OK,
            PageView::new(Page::ShowList {
                list: result.list,
                todo_input: String::new(),
                error: None,
            })
            .with_flash(result.flash),
        ),
        Err(e) => state.error_response(e),
    }
}

/// GET /lists/:n/edit - Rename form, prefilled with the current name
pub async fn edit_list(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path(n): Path<String>,
) -> Response {
    match state.load_list(session.id, position(&n)).await {
        Ok(result) => {
            let summary = result.list.summary;
            state.page(
                StatusCode::OK,
                PageView::new(Page::EditList {
                    new_list_name: summary.name.clone(),
                    list: summary,
                    error: None,
                })
                .with_flash(result.flash),
            )
        }
        Err(e) => state.error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// List commands (POST)
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists - Create a list
pub async fn create_list(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    form: Option<Form<NewListForm>>,
) -> Response {
    let form = form_or_default(form);
    let cmd = CreateListCommand {
        session_id: session.id,
        list_name: form.list_name.clone(),
    };

    match state.create_list_handler().handle(cmd).await {
        Ok(_) => redirect("/lists"),
        Err(e) if e.is_validation() => {
            let flash = state.pending_flash(session.id).await;
            state.page(
                StatusCode::UNPROCESSABLE_ENTITY,
                PageView::new(Page::NewList {
                    list_name: form.list_name,
                    error: Some(e.to_string()),
                })
                .with_flash(flash),
            )
        }
        Err(e) => state.error_response(e),
    }
}

/// POST /lists/:n - Rename a list
pub async fn rename_list(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path(n): Path<String>,
    form: Option<Form<RenameListForm>>,
) -> Response {
    let form = form_or_default(form);
    let list_position = position(&n);
    let cmd = RenameListCommand {
        session_id: session.id,
        list_position,
        expected_list: form.expected_list(),
        new_name: form.new_list_name.clone(),
    };

    match state.rename_list_handler().handle(cmd).await {
        Ok(_) => redirect(&format!("/lists/{}", list_position)),
        Err(e) if e.is_validation() => match state.load_list(session.id, list_position).await {
            Ok(result) => state.page(
                StatusCode::UNPROCESSABLE_ENTITY,
                PageView::new(Page::EditList {
                    list: result.list.summary,
                    new_list_name: form.new_list_name,
                    error: Some(e.to_string()),
                })
                .with_flash(result.flash),
            ),
            Err(e) => state.error_response(e),
        },
        Err(e) => state.error_response(e),
    }
}

/// POST /lists/:n/delete - Delete a list
pub async fn delete_list(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path(n): Path<String>,
    guard: Option<Form<RecordGuard>>,
) -> Response {
    let guard = form_or_default(guard);
    let cmd = DeleteListCommand {
        session_id: session.id,
        list_position: position(&n),
        expected_list: guard.expected_list(),
    };

    match state.delete_list_handler().handle(cmd).await {
        Ok(_) => redirect("/lists"),
        Err(e) => state.error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Todo commands (POST)
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists/:n/todos - Add a todo
pub async fn add_todo(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path(n): Path<String>,
    form: Option<Form<AddTodoForm>>,
) -> Response {
    let form = form_or_default(form);
    let list_position = position(&n);
    let cmd = AddTodoCommand {
        session_id: session.id,
        list_position,
        expected_list: form.expected_list(),
        todo_name: form.todo.clone(),
    };

    match state.add_todo_handler().handle(cmd).await {
        Ok(_) => redirect(&format!("/lists/{}", list_position)),
        Err(e) if e.is_validation() => match state.load_list(session.id, list_position).await {
            Ok(result) => state.page(
                StatusCode::UNPROCESSABLE_ENTITY,
                PageView::new(Page::ShowList {
                    list: result.list,
                    todo_input: form.todo,
                    error: Some(e.to_string()),
                })
                .with_flash(result.flash),
            ),
            Err(e) => state.error_response(e),
        },
        Err(e) => state.error_response(e),
    }
}

/// POST /lists/:n/delete/:i - Delete a todo
pub async fn delete_todo(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path((n, i)): Path<(String, String)>,
    guard: Option<Form<RecordGuard>>,
) -> Response {
    let guard = form_or_default(guard);
    let list_position = position(&n);
    let cmd = DeleteTodoCommand {
        session_id: session.id,
        list_position,
        todo_position: position(&i),
        expected_list: guard.expected_list(),
        expected_todo: guard.expected_todo(),
    };

    match state.delete_todo_handler().handle(cmd).await {
        Ok(_) => redirect(&format!("/lists/{}", list_position)),
        Err(e) => state.error_response(e),
    }
}

/// POST /lists/:n/todo/:i - Check or uncheck a todo
pub async fn set_todo_status(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path((n, i)): Path<(String, String)>,
    form: Option<Form<TodoStatusForm>>,
) -> Response {
    let form = form_or_default(form);
    let list_position = position(&n);
    let guard = form.guard();
    let cmd = SetTodoStatusCommand {
        session_id: session.id,
        list_position,
        todo_position: position(&i),
        expected_list: guard.expected_list(),
        expected_todo: guard.expected_todo(),
        completed: form.is_completed(),
    };

    match state.set_todo_status_handler().handle(cmd).await {
        Ok(()) => redirect(&format!("/lists/{}", list_position)),
        Err(e) => state.error_response(e),
    }
}

/// POST /lists/:n/complete_all - Complete every todo in a list
pub async fn complete_all(
    State(state): State<TodoAppState>,
    session: CurrentSession,
    Path(n): Path<String>,
    guard: Option<Form<RecordGuard>>,
) -> Response {
    let guard = form_or_default(guard);
    let list_position = position(&n);
    let cmd = CompleteAllCommand {
        session_id: session.id,
        list_position,
        expected_list: guard.expected_list(),
    };

    match state.complete_all_handler().handle(cmd).await {
        Ok(_) => redirect(&format!("/lists/{}", list_position)),
        Err(e) => state.error_response(e),
    }
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<TodoAppState>) -> Response {
    state.page(
        StatusCode::NOT_FOUND,
        PageView::new(Page::Error {
            message: "The page you requested does not exist.".to_string(),
        }),
    )
}
