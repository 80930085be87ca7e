//! UI Components
//!
//! Leptos components for the todo page.

mod error_banner;
mod new_todo_form;
mod todo_list;
mod todo_row;
mod visually_hidden;

pub use error_banner::ErrorBanner;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use visually_hidden::VisuallyHidden;
