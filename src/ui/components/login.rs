use crate::ui::Route;
use dioxus::prelude::*;

use super::session_form::SessionForm;
use super::shell::use_shell;

#[component]
pub fn Login() -> Element {
    let shell = use_shell();

    rsx! {
        SessionForm {
            heading: "Login".to_string(),
            submit_label: "Login".to_string(),
            actions: shell.actions,
            alternate_prompt: "Do not have an account?".to_string(),
            alternate_label: "Sign up".to_string(),
            alternate: Route::Signup {},
        }
    }
}
