use dioxus::prelude::*;

/// Loading spinner for movie detail page
#[component]
pub fn MovieDetailLoading() -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-white" }
            p { class: "ml-4 text-gray-300", "Loading movie..." }
        }
    }
}
