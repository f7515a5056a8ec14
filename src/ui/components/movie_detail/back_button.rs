use crate::ui::Route;
use dioxus::prelude::*;

/// Back to catalog navigation button
#[component]
pub fn BackButton() -> Element {
    rsx! {
        div { class: "mb-6",
            Link {
                to: Route::Catalog {},
                class: "inline-flex items-center text-blue-400 hover:text-blue-300 transition-colors",
                "← Back to Catalog"
            }
        }
    }
}
