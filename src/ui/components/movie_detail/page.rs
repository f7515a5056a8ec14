use crate::catalog::load_movie;
use crate::ui::use_movie_store;
use dioxus::prelude::*;

use super::back_button::BackButton;
use super::error::MovieDetailError;
use super::loading::MovieDetailLoading;
use super::view::MovieDetailView;

/// Movie detail page, keyed by store id
#[component]
pub fn MovieDetail(id: ReadSignal<String>) -> Element {
    let store = use_movie_store();
    let movie_resource = use_resource(move || {
        let id = id();
        let store = store.clone();
        async move { load_movie(&store, &id).await }
    });

    rsx! {
        div { class: "container mx-auto p-6",
            BackButton {}
            match movie_resource.value().read().as_ref() {
                None => rsx! {
                    MovieDetailLoading {}
                },
                Some(Err(e)) => rsx! {
                    MovieDetailError { message: format!("Failed to load movie: {e}") }
                },
                Some(Ok(None)) => rsx! {
                    MovieDetailError { message: format!("No movie with id {}", id()) }
                },
                Some(Ok(Some(movie))) => rsx! {
                    MovieDetailView { movie: movie.clone() }
                },
            }
        }
    }
}
