use crate::catalog::PageControls;
use dioxus::prelude::*;

fn page_item_class(active: bool, disabled: bool) -> &'static str {
    if disabled {
        "px-3 py-1 rounded bg-gray-800 text-gray-500 cursor-not-allowed"
    } else if active {
        "px-3 py-1 rounded bg-red-600 text-white"
    } else {
        "px-3 py-1 rounded bg-gray-700 text-white hover:bg-gray-600"
    }
}

/// Prev / page numbers / Next
#[component]
pub fn Pager(
    controls: PageControls,
    on_previous: EventHandler,
    on_select: EventHandler<usize>,
    on_next: EventHandler,
) -> Element {
    rsx! {
        nav { class: "w-full flex justify-center my-6",
            ul { class: "pagination flex gap-1",
                li {
                    button {
                        class: page_item_class(false, controls.prev_disabled),
                        disabled: controls.prev_disabled,
                        onclick: move |_| on_previous.call(()),
                        "Prev"
                    }
                }
                for page in controls.pages.iter().copied() {
                    li { key: "{page.number}",
                        button {
                            class: page_item_class(page.active, false),
                            onclick: move |_| on_select.call(page.number),
                            "{page.number}"
                        }
                    }
                }
                li {
                    button {
                        class: page_item_class(false, controls.next_disabled),
                        disabled: controls.next_disabled,
                        onclick: move |_| on_next.call(()),
                        "Next"
                    }
                }
            }
        }
    }
}
