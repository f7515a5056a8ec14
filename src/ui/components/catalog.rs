use crate::catalog::{Activation, CatalogPage, CatalogState, MovieRecord};
use crate::ui::{use_movie_store, use_page_policy};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use super::movie_card::MovieCard;
use super::pager::Pager;
use super::shell::use_shell;

/// Catalog route: hands the header's search query to the view
#[component]
pub fn Catalog() -> Element {
    let shell = use_shell();
    rsx! {
        CatalogView { search_query: shell.search_query }
    }
}

/// Movie grid with search filtering and paging
///
/// Fetches the collection once on mount. Query and page changes only
/// re-derive from what was fetched.
#[component]
pub fn CatalogView(search_query: ReadSignal<String>) -> Element {
    let store = use_movie_store();
    let policy = use_page_policy();
    let mut state = use_signal(CatalogState::loading);
    let activation = use_hook(|| Rc::new(RefCell::new(None::<Activation>)));

    use_effect({
        let activation = activation.clone();
        move || {
            debug!("Activating catalog view");
            let (started, task) =
                Activation::start(store.clone(), move |event| state.write().apply(event));
            spawn(task);
            if let Some(previous) = activation.borrow_mut().replace(started) {
                previous.cancel();
            }
        }
    });

    use_drop(move || {
        if let Some(activation) = activation.borrow_mut().take() {
            debug!("Catalog view dropped, cancelling fetch");
            activation.cancel();
        }
    });

    use_effect(move || {
        let query = search_query();
        state.write().on_query_changed(&query, policy);
    });

    let query = search_query();
    let (is_loading, page) = {
        let state = state.read();
        (state.is_loading(), state.view(&query, policy.page_size))
    };
    let CatalogPage {
        records,
        filtered_count,
        page_count,
        controls,
    } = page;

    rsx! {
        div { class: "flex flex-col px-3 mt-2",
            if is_loading {
                CatalogLoading {}
            } else if filtered_count == 0 {
                CatalogEmpty { searching: !query.is_empty() }
            } else {
                MovieGrid { movies: records }
            }

            Pager {
                controls,
                on_previous: move |_| state.write().go_to_previous_page(),
                on_select: move |number: usize| state.write().go_to_page(number),
                on_next: move |_| state.write().go_to_next_page(page_count),
            }
        }
    }
}

#[component]
fn CatalogLoading() -> Element {
    rsx! {
        div { class: "w-full flex justify-center items-center h-96",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-white" }
        }
    }
}

#[component]
fn CatalogEmpty(searching: bool) -> Element {
    rsx! {
        div { class: "w-full text-center py-12 text-gray-400",
            if searching {
                "No movies match your search."
            } else {
                "The catalog is empty."
            }
        }
    }
}

/// Grid component to display movies
#[component]
fn MovieGrid(movies: Vec<MovieRecord>) -> Element {
    rsx! {
        div { class: "flex flex-wrap justify-between",
            for movie in movies {
                MovieCard { key: "{movie.id}", movie: movie.clone() }
            }
        }
    }
}
