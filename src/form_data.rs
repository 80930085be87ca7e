//! DOM Form Reading
//!
//! Turns a submit event into a `FormSubmission`.

use todo_store::{FormSubmission, ID_FIELD, TODO_FIELD};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement, SubmitEvent};

/// Read the submitted form plus the name/value of the button that submitted it
pub fn read_submission(ev: &SubmitEvent) -> Option<(HtmlFormElement, FormSubmission)> {
    let form = ev.target()?.dyn_into::<HtmlFormElement>().ok()?;
    let data = FormData::new_with_form(&form).ok()?;

    let mut submission = FormSubmission::new();
    for name in [ID_FIELD, TODO_FIELD] {
        if let Some(value) = data.get(name).as_string() {
            submission.append(name, value);
        }
    }

    // FormData built from the form alone leaves out the submitter
    if let Some(button) = ev
        .submitter()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        if !button.name().is_empty() {
            submission.append(button.name(), button.value());
        }
    }

    log::debug!("[FORM] {:?}", submission);
    Some((form, submission))
}
