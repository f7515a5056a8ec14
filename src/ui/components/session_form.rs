use crate::session::SessionState;
use crate::ui::Route;
use dioxus::prelude::*;

use super::shell::SessionActions;

/// User-name form shared by the login and signup views
#[component]
pub fn SessionForm(
    heading: String,
    submit_label: String,
    actions: SessionActions,
    alternate_prompt: String,
    alternate_label: String,
    alternate: Route,
) -> Element {
    let mut user_name = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let navigator = use_navigator();

    let mut submit = move || match SessionState::signed_in(&user_name()) {
        Ok(session) => {
            actions.log_in(session);
            navigator.push(Route::Catalog {});
        }
        Err(e) => form_error.set(Some(e.to_string())),
    };

    rsx! {
        div { class: "max-w-md mx-auto mt-12 p-6 bg-gray-900 rounded-lg shadow",
            h1 { class: "text-2xl font-bold mb-6 text-center", "{heading}" }
            label { class: "block text-sm font-medium text-gray-300 mb-2", "User name" }
            input {
                class: "w-full p-3 rounded bg-gray-800 text-white mb-4",
                placeholder: "Your name",
                value: "{user_name}",
                oninput: move |event| {
                    user_name.set(event.value());
                    form_error.set(None);
                },
            }
            button {
                class: "w-full bg-green-600 hover:bg-green-700 text-white py-2 rounded",
                onclick: move |_| submit(),
                "{submit_label}"
            }
            if let Some(message) = form_error() {
                p { class: "mt-4 text-red-400", "{message}" }
            }
            p { class: "mt-6 text-center text-gray-400",
                "{alternate_prompt} "
                Link { to: alternate.clone(), class: "text-blue-400 hover:text-blue-300", "{alternate_label}" }
            }
        }
    }
}
