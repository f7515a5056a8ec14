use crate::ui::Route;
use dioxus::prelude::*;

use super::session_form::SessionForm;
use super::shell::use_shell;

#[component]
pub fn Signup() -> Element {
    let shell = use_shell();

    rsx! {
        SessionForm {
            heading: "Sign up".to_string(),
            submit_label: "Create account".to_string(),
            actions: shell.actions,
            alternate_prompt: "Already have an account?".to_string(),
            alternate_label: "Login".to_string(),
            alternate: Route::Login {},
        }
    }
}
