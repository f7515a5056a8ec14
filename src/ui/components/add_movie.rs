use crate::session::SessionState;
use crate::store::NewMovie;
use crate::ui::{use_movie_store, Route};
use dioxus::prelude::*;
use tracing::{error, info};

use super::shell::use_shell;

/// Add-movie route
#[component]
pub fn AddMovie() -> Element {
    let shell = use_shell();
    let session = shell.session;

    rsx! {
        AddMovieForm { session: session() }
    }
}

#[component]
fn AddMovieForm(session: SessionState) -> Element {
    let store = use_movie_store();
    let navigator = use_navigator();
    let mut title = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut is_saving = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);

    if !session.logged_in {
        return rsx! {
            div { class: "max-w-md mx-auto mt-12 p-6 text-center",
                p { class: "text-gray-300 mb-4", "Log in to add movies to the catalog." }
                Link {
                    to: Route::Login {},
                    class: "bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded",
                    "Login"
                }
            }
        };
    }

    let submit = move |_| {
        let movie = match NewMovie::from_form(&title(), &year(), &image(), &description()) {
            Ok(movie) => movie,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };

        let store = store.clone();
        spawn(async move {
            is_saving.set(true);
            form_error.set(None);

            match store.get().add_movie(&movie).await {
                Ok(id) => {
                    info!("Added movie {} ({})", movie.title, id);
                    navigator.push(Route::MovieDetail { id });
                }
                Err(e) => {
                    error!("Failed to add movie {}: {}", movie.title, e);
                    form_error.set(Some(format!("Could not add movie: {}", e)));
                    is_saving.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "max-w-2xl mx-auto mt-8 p-6 bg-gray-900 rounded-lg shadow",
            h1 { class: "text-2xl font-bold mb-6", "Add New Movie" }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                FormField { label: "Title".to_string(), value: title }
                FormField { label: "Year".to_string(), value: year }
            }
            FormField { label: "Image link".to_string(), value: image }
            label { class: "block text-sm font-medium text-gray-300 mb-2 mt-4", "Description" }
            textarea {
                class: "w-full h-32 p-3 rounded bg-gray-800 text-white",
                value: "{description}",
                oninput: move |event| description.set(event.value()),
            }
            button {
                class: "mt-6 bg-green-600 hover:bg-green-700 text-white px-6 py-2 rounded disabled:bg-gray-600",
                disabled: is_saving(),
                onclick: submit,
                if is_saving() {
                    "Saving..."
                } else {
                    "Submit"
                }
            }
            if let Some(message) = form_error() {
                p { class: "mt-4 text-red-400", "{message}" }
            }
        }
    }
}

#[component]
fn FormField(label: String, value: Signal<String>) -> Element {
    let mut value = value;

    rsx! {
        div { class: "mt-4",
            label { class: "block text-sm font-medium text-gray-300 mb-2", "{label}" }
            input {
                class: "w-full p-3 rounded bg-gray-800 text-white",
                value: "{value}",
                oninput: move |event| value.set(event.value()),
            }
        }
    }
}
