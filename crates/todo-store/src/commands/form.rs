//! Form Submissions
//!
//! Ordered name/value pairs as posted by an HTML form.

use super::Intent;

/// Field carrying the intent tag (the name of every submit button)
pub const INTENT_FIELD: &str = "intent";
/// Text of a new todo
pub const TODO_FIELD: &str = "todo";
/// Id of the todo to toggle or delete
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `append`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Raw intent tag, whether or not it is a known intent
    pub fn intent(&self) -> Option<&str> {
        self.get(INTENT_FIELD)
    }

    pub fn add_todo(text: impl Into<String>) -> Self {
        Self::new()
            .with(INTENT_FIELD, Intent::AddTodo.as_str())
            .with(TODO_FIELD, text)
    }

    pub fn toggle_todo(id: impl Into<String>) -> Self {
        Self::new()
            .with(ID_FIELD, id)
            .with(INTENT_FIELD, Intent::ToggleTodo.as_str())
    }

    pub fn delete_todo(id: impl Into<String>) -> Self {
        Self::new()
            .with(ID_FIELD, id)
            .with(INTENT_FIELD, Intent::DeleteTodo.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (name, value) in iter {
            form.append(name, value);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_value() {
        let form: FormSubmission = [("id", "1"), ("id", "2")].into_iter().collect();
        assert_eq!(form.get("id"), Some("1"));
        assert_eq!(form.get("todo"), None);
    }

    #[test]
    fn test_helpers_tag_intent() {
        assert_eq!(FormSubmission::add_todo("x").intent(), Some("addTodo"));
        assert_eq!(FormSubmission::toggle_todo("1").intent(), Some("toggleTodo"));
        assert_eq!(FormSubmission::delete_todo("1").get(ID_FIELD), Some("1"));
    }
}
