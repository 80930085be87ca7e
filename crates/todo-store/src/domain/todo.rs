//! Todo Entity
//!
//! A single list entry plus the pure list transforms applied by intents.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A todo record as stored under the `todos` key
///
/// `isCompleted` stays absent until the record is toggled for the first time.
/// Records are not schema-checked on load: a null or missing `value`/`id`
/// reads as an empty string, and a non-boolean flag follows JS truthiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// User-entered text
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    /// Unique identifier, generated at creation
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Completion flag (absent = not completed)
    #[serde(
        default,
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_completed: Option<bool>,
    /// Fields this crate does not know about, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Todo {
    /// Create a fresh, never-toggled todo
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            id: id.into(),
            is_completed: None,
            extra: Map::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed.unwrap_or(false)
    }

    /// Flip completion; an absent flag counts as `false`
    pub fn toggle(&mut self) {
        self.is_completed = Some(!self.is_completed());
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    })
}

/// Append a new record, keeping insertion order
pub fn push_todo(todos: &mut Vec<Todo>, todo: Todo) {
    todos.push(todo);
}

/// Toggle every record whose id matches. Returns how many were flipped.
///
/// `None` matches nothing, so a submission without an id is a no-op.
pub fn toggle_todo(todos: &mut [Todo], id: Option<&str>) -> usize {
    let Some(id) = id else { return 0 };
    let mut flipped = 0;
    for todo in todos.iter_mut().filter(|todo| todo.id == id) {
        todo.toggle();
        flipped += 1;
    }
    flipped
}

/// Remove every record whose id matches. Returns how many were removed.
pub fn remove_todo(todos: &mut Vec<Todo>, id: Option<&str>) -> usize {
    let Some(id) = id else { return 0 };
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    before - todos.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![Todo::new("a", "first"), Todo::new("b", "second"), Todo::new("c", "third")]
    }

    #[test]
    fn test_new_todo_is_not_completed() {
        let todo = Todo::new("1", "Buy milk");
        assert_eq!(todo.is_completed, None);
        assert!(!todo.is_completed());
    }

    #[test]
    fn test_toggle_from_absent_sets_true() {
        let mut todo = Todo::new("1", "Buy milk");
        todo.toggle();
        assert_eq!(todo.is_completed, Some(true));
        todo.toggle();
        assert_eq!(todo.is_completed, Some(false));
    }

    #[test]
    fn test_toggle_only_touches_matching_record() {
        let mut todos = sample();
        assert_eq!(toggle_todo(&mut todos, Some("b")), 1);
        assert!(!todos[0].is_completed());
        assert!(todos[1].is_completed());
        assert_eq!(todos[2].is_completed, None);
    }

    #[test]
    fn test_toggle_without_id_is_noop() {
        let mut todos = sample();
        assert_eq!(toggle_todo(&mut todos, None), 0);
        assert_eq!(todos, sample());
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut todos = sample();
        assert_eq!(remove_todo(&mut todos, Some("b")), 1);
        let ids: Vec<_> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut todos = sample();
        assert_eq!(remove_todo(&mut todos, Some("zzz")), 0);
        assert_eq!(todos, sample());
    }

    #[test]
    fn test_serialization_omits_absent_flag() {
        let json = serde_json::to_string(&Todo::new("1", "Buy milk")).unwrap();
        assert_eq!(json, r#"{"value":"Buy milk","id":"1"}"#);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = r#"{"value":"x","id":"1","isCompleted":true,"color":"red"}"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert!(todo.is_completed());
        assert_eq!(todo.extra.get("color"), Some(&Value::from("red")));

        let back: Value = serde_json::to_value(&todo).unwrap();
        assert_eq!(back["color"], "red");
        assert_eq!(back["isCompleted"], true);
    }

    #[test]
    fn test_null_or_missing_fields_read_as_empty() {
        let todo: Todo = serde_json::from_str(r#"{"value":null,"id":"a"}"#).unwrap();
        assert_eq!(todo.value, "");
        assert_eq!(todo.id, "a");

        let todo: Todo = serde_json::from_str(r#"{"value":"x"}"#).unwrap();
        assert_eq!(todo.value, "x");
        assert_eq!(todo.id, "");
        assert!(todo.extra.is_empty());
    }

    #[test]
    fn test_non_boolean_flag_uses_truthiness() {
        let todo: Todo = serde_json::from_str(r#"{"value":"x","id":"1","isCompleted":null}"#).unwrap();
        assert_eq!(todo.is_completed, None);

        let todo: Todo = serde_json::from_str(r#"{"value":"x","id":"1","isCompleted":1}"#).unwrap();
        assert!(todo.is_completed());

        let todo: Todo = serde_json::from_str(r#"{"value":"x","id":"1","isCompleted":""}"#).unwrap();
        assert!(!todo.is_completed());
    }
}
