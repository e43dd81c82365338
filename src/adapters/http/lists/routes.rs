//! Axum router configuration for list and todo endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_todo, complete_all, create_list, delete_list, delete_todo, edit_list, home, list_lists,
    new_list, rename_list, set_todo_status, show_list, TodoAppState,
};

/// Create the list router.
///
/// # Routes
///
/// ## Pages
/// - `GET /` - Redirect to `/lists`
/// - `GET /lists` - All lists
/// - `GET /lists/new` - New list form
/// - `GET /lists/:n` - One list
/// - `GET /lists/:n/edit` - Rename form
///
/// ## Lists
/// - `POST /lists` - Create a list
/// - `POST /lists/:n` - Rename a list
/// - `POST /lists/:n/delete` - Delete a list
///
/// ## Todos
/// - `POST /lists/:n/todos` - Add a todo
/// - `POST /lists/:n/delete/:i` - Delete a todo
/// - `POST /lists/:n/todo/:i` - Check or uncheck a todo
/// - `POST /lists/:n/complete_all` - Complete every todo
pub fn list_routes() -> Router<TodoAppState> {
    Router::new()
        // Pages
        .route("/", get(home))
        .route("/lists", get(list_lists).post(create_list))
        .route("/lists/new", get(new_list))
        .route("/lists/:n", get(show_list).post(rename_list))
        .route("/lists/:n/edit", get(edit_list))
        // List commands
        .route("/lists/:n/delete", post(delete_list))
        // Todo commands
        .route("/lists/:n/todos", post(add_todo))
        .route("/lists/:n/delete/:i", post(delete_todo))
        .route("/lists/:n/todo/:i", post(set_todo_status))
        .route("/lists/:n/complete_all", post(complete_all))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::HtmlRenderer;
    use crate::adapters::session_store::InMemorySessionStore;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        list_routes().with_state(TodoAppState::new(
            Arc::new(InMemorySessionStore::new(60)),
            Arc::new(HtmlRenderer::new()),
        ))
    }

    #[tokio::test]
    async fn root_redirects_to_lists() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/lists");
    }

    #[tokio::test]
    async fn commands_reject_get() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/lists/0/delete")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
