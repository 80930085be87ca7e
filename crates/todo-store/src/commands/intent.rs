//! Intents
//!
//! The mutation a submitted form asks for.

use std::fmt;
use std::str::FromStr;

use super::ActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    AddTodo,
    ToggleTodo,
    DeleteTodo,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::AddTodo => "addTodo",
            Intent::ToggleTodo => "toggleTodo",
            Intent::DeleteTodo => "deleteTodo",
        }
    }
}

impl FromStr for Intent {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addTodo" => Ok(Intent::AddTodo),
            "toggleTodo" => Ok(Intent::ToggleTodo),
            "deleteTodo" => Ok(Intent::DeleteTodo),
            _ => Err(ActionError::InvalidIntent),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
