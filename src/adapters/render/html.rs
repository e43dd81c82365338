//! Plain HTML renderer.
//!
//! Builds pages by string assembly. Every user-supplied value goes through
//! `html_escape` before it reaches the output.

use crate::domain::foundation::DomainError;
use crate::domain::session::Flash;
use crate::ports::{
    ListDetailView, ListSummaryView, Page, PageView, TodoView, ViewRenderer,
};

/// Renders pages as self-contained HTML documents with inline CSS.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Todo Lists".to_string(),
        }
    }

    fn wrap_html(&self, flash: Option<&Flash>, body: String) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", html_escape(&self.title)));
        html.push_str(&format!("<style>{}</style>\n", DEFAULT_CSS));
        html.push_str("</head>\n<body>\n<header>\n");
        html.push_str(&format!(
            "<h1><a href=\"/lists\">{}</a></h1>\n",
            html_escape(&self.title)
        ));
        html.push_str("<a class=\"add\" href=\"/lists/new\">New List</a>\n</header>\n");

        if let Some(flash) = flash {
            html.push_str(&format!(
                "<div class=\"flash {}\"><p>{}</p></div>\n",
                flash.kind.as_str(),
                html_escape(&flash.message)
            ));
        }

        html.push_str("<main>\n");
        html.push_str(&body);
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &PageView) -> Result<String, DomainError> {
        let body = match &view.page {
            Page::Lists { lists } => render_lists(lists),
            Page::NewList { list_name, error } => render_new_list(list_name, error.as_deref()),
            Page::ShowList {
                list,
                todo_input,
                error,
            } => render_show_list(list, todo_input, error.as_deref()),
            Page::EditList {
                list,
                new_list_name,
                error,
            } => render_edit_list(list, new_list_name, error.as_deref()),
            Page::Error { message } => {
                format!("<section class=\"failure\"><p>{}</p></section>\n", html_escape(message))
            }
        };

        Ok(self.wrap_html(view.flash.as_ref(), body))
    }
}

fn render_lists(lists: &[ListSummaryView]) -> String {
    if lists.is_empty() {
        return "<p class=\"empty\">You don't have any lists yet. \
                <a href=\"/lists/new\">Create one</a>.</p>\n"
            .to_string();
    }

    let mut html = String::from("<ul id=\"lists\">\n");
    for list in lists {
        html.push_str(&format!(
            "<li{}><a href=\"/lists/{}\"><h2>{}</h2><p>{} / {}</p></a></li>\n",
            complete_class(list.is_complete),
            list.position,
            html_escape(&list.name),
            list.remaining,
            list.total
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn render_new_list(list_name: &str, error: Option<&str>) -> String {
    let mut html = String::from("<form action=\"/lists\" method=\"post\">\n");
    html.push_str(&render_error(error));
    html.push_str("<dl>\n<dt><label for=\"list_name\">Enter the name for your new list:</label></dt>\n");
    html.push_str(&format!(
        "<dd><input id=\"list_name\" name=\"list_name\" placeholder=\"List Name\" type=\"text\" value=\"{}\"></dd>\n</dl>\n",
        html_escape(list_name)
    ));
    html.push_str("<fieldset class=\"actions\">\n<input type=\"submit\" value=\"Save\">\n");
    html.push_str("<a href=\"/lists\">Cancel</a>\n</fieldset>\n</form>\n");
    html
}

fn render_show_list(list: &ListDetailView, todo_input: &str, error: Option<&str>) -> String {
    let summary = &list.summary;
    let base = format!("/lists/{}", summary.position);
    let list_guard = hidden("list_id", &summary.id.to_string());

    let mut html = format!("<section id=\"todos\"{}>\n<header>\n", complete_class(summary.is_complete));
    html.push_str(&format!(
        "<h2>{}</h2>\n<p class=\"progress\">{} / {}</p>\n",
        html_escape(&summary.name),
        summary.remaining,
        summary.total
    ));
    html.push_str(&format!("<a class=\"edit\" href=\"{}/edit\">Edit List</a>\n", base));
    html.push_str(&format!(
        "<form action=\"{}/complete_all\" method=\"post\">{}<button class=\"check\" type=\"submit\">Complete All</button></form>\n",
        base, list_guard
    ));
    html.push_str("</header>\n<ul>\n");
    for todo in &list.todos {
        html.push_str(&render_todo(&base, &list_guard, todo));
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str(&format!("<form action=\"{}/todos\" method=\"post\">\n", base));
    html.push_str(&render_error(error));
    html.push_str(&list_guard);
    html.push_str("<dl>\n<dt><label for=\"todo\">Enter a new todo item:</label></dt>\n");
    html.push_str(&format!(
        "<dd><input id=\"todo\" name=\"todo\" placeholder=\"Something to do\" type=\"text\" value=\"{}\"></dd>\n</dl>\n",
        html_escape(todo_input)
    ));
    html.push_str("<fieldset class=\"actions\">\n<input type=\"submit\" value=\"Add\">\n</fieldset>\n</form>\n");
    html
}

fn render_todo(base: &str, list_guard: &str, todo: &TodoView) -> String {
    let todo_guard = hidden("todo_id", &todo.id.to_string());
    let mut html = format!("<li{}>\n", complete_class(todo.completed));
    html.push_str(&format!(
        "<form action=\"{}/todo/{}\" method=\"post\" class=\"check\">{}{}{}<button type=\"submit\">{}</button></form>\n",
        base,
        todo.position,
        list_guard,
        todo_guard,
        hidden("completed", if todo.completed { "false" } else { "true" }),
        if todo.completed { "Undo" } else { "Done" }
    ));
    html.push_str(&format!("<h3>{}</h3>\n", html_escape(&todo.name)));
    html.push_str(&format!(
        "<form action=\"{}/delete/{}\" method=\"post\" class=\"delete\">{}{}<button type=\"submit\">Delete</button></form>\n",
        base, todo.position, list_guard, todo_guard
    ));
    html.push_str("</li>\n");
    html
}

fn render_edit_list(list: &ListSummaryView, new_list_name: &str, error: Option<&str>) -> String {
    let base = format!("/lists/{}", list.position);
    let list_guard = hidden("list_id", &list.id.to_string());

    let mut html = format!("<h2>Editing '{}'</h2>\n", html_escape(&list.name));
    html.push_str(&format!("<form action=\"{}\" method=\"post\">\n", base));
    html.push_str(&render_error(error));
    html.push_str(&list_guard);
    html.push_str("<dl>\n<dt><label for=\"new_list_name\">Enter the new name for the list:</label></dt>\n");
    html.push_str(&format!(
        "<dd><input id=\"new_list_name\" name=\"new_list_name\" type=\"text\" value=\"{}\"></dd>\n</dl>\n",
        html_escape(new_list_name)
    ));
    html.push_str("<fieldset class=\"actions\">\n<input type=\"submit\" value=\"Save\">\n");
    html.push_str(&format!("<a href=\"{}\">Cancel</a>\n</fieldset>\n</form>\n", base));
    html.push_str(&format!(
        "<form action=\"{}/delete\" method=\"post\" class=\"delete\">{}<button type=\"submit\">Delete List</button></form>\n",
        base, list_guard
    ));
    html
}

fn render_error(error: Option<&str>) -> String {
    error
        .map(|message| format!("<div class=\"flash error\"><p>{}</p></div>\n", html_escape(message)))
        .unwrap_or_default()
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
        name,
        html_escape(value)
    )
}

fn complete_class(complete: bool) -> &'static str {
    if complete {
        " class=\"complete\""
    } else {
        ""
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Default CSS for every page.
const DEFAULT_CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif; margin: 0 auto; max-width: 42rem; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between; }
a { color: #2563eb; }
ul { list-style: none; padding: 0; }
li { display: flex; align-items: center; gap: 0.75rem; border-bottom: 1px solid #e5e7eb; }
li.complete h2, li.complete h3 { color: #6b7280; text-decoration: line-through; }
.flash { padding: 0.5rem 1rem; border-radius: 4px; }
.flash.success { background: #dcfce7; }
.flash.error { background: #fee2e2; }
form.delete button { color: #b91c1c; }
"#;
