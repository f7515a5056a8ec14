use crate::session::SessionState;
use crate::ui::Route;
use dioxus::prelude::*;

use super::shell::SessionActions;

/// Top bar with the search box and session links
#[component]
pub fn Header(
    session: SessionState,
    actions: SessionActions,
    on_search: EventHandler<String>,
) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        header { class: "sticky top-0 z-10 bg-black flex justify-between items-center gap-4 p-3 border-b-2 border-gray-500",
            Link {
                to: Route::Catalog {},
                class: "text-3xl font-bold text-red-500",
                "mar"
                span { class: "text-white", "quee" }
            }
            input {
                r#type: "search",
                class: "flex-1 max-w-md px-3 py-2 rounded bg-gray-800 text-white placeholder-gray-400",
                placeholder: "Search movies...",
                value: "{query}",
                oninput: move |event| {
                    let value = event.value();
                    query.set(value.clone());
                    on_search.call(value);
                },
            }
            div { class: "flex items-center gap-3 text-lg",
                if let Some(name) = session.display_name() {
                    Link {
                        to: Route::AddMovie {},
                        class: "bg-green-600 hover:bg-green-700 text-white px-3 py-1 rounded",
                        "+ Add New"
                    }
                    span { class: "text-gray-300", "{name}" }
                    button {
                        class: "text-gray-400 hover:text-white",
                        onclick: move |_| actions.log_out(),
                        "Log out"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "bg-green-600 hover:bg-green-700 text-white px-3 py-1 rounded",
                        "Login"
                    }
                }
            }
        }
    }
}
