//! Submission state of the page, used to clear the add form.

use crate::commands::{ActionError, ActionResponse, FormSubmission, Intent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Idle,
    /// A form is being handled; carries the raw intent tag it was submitted with
    Submitting { intent: Option<String> },
}

impl NavigationState {
    pub fn submitting(form: &FormSubmission) -> Self {
        NavigationState::Submitting {
            intent: form.intent().map(str::to_string),
        }
    }

    pub fn is_submitting_intent(&self, intent: Intent) -> bool {
        matches!(self, NavigationState::Submitting { intent: Some(tag) } if tag == intent.as_str())
    }
}

/// The add form is cleared once an `addTodo` submission settles back to idle
pub fn should_reset_add_form(prev: &NavigationState, next: &NavigationState) -> bool {
    prev.is_submitting_intent(Intent::AddTodo) && *next == NavigationState::Idle
}

/// Whether handling `form` with `outcome` should clear the add form
///
/// A failed add keeps the typed text.
pub fn should_clear_add_form(
    form: &FormSubmission,
    outcome: &Result<ActionResponse, ActionError>,
) -> bool {
    outcome.is_ok()
        && should_reset_add_form(&NavigationState::submitting(form), &NavigationState::Idle)
}
