use crate::catalog::{MovieRecord, StarFill};
use crate::ui::Route;
use dioxus::prelude::*;

/// Individual movie card, links to the detail view
#[component]
pub fn MovieCard(movie: MovieRecord) -> Element {
    let card_class = "card font-medium shadow-lg p-2 mt-6 cursor-pointer hover:-translate-y-3 transition-all duration-500";

    rsx! {
        Link { to: Route::MovieDetail { id: movie.id.clone() },
            div { class: "{card_class}",
                if let Some(image) = &movie.image {
                    img {
                        class: "h-72 w-[150px] object-cover rounded-[10px] m-[5px]",
                        src: "{image}",
                        alt: "{movie.title}",
                    }
                } else {
                    div { class: "h-72 w-[150px] m-[5px] rounded-[10px] bg-gray-800 flex items-center justify-center text-4xl",
                        "🎬"
                    }
                }
                h1 { class: "w-[150px] truncate", title: "{movie.title}", "{movie.title}" }
                h1 { class: "flex items-center",
                    span { class: "text-gray-500 mr-1", "Rating:" }
                    StarRating { value: movie.stars() }
                }
                h1 {
                    span { class: "text-gray-500", "Year: " }
                    if let Some(year) = &movie.year {
                        "{year}"
                    }
                }
            }
        }
    }
}

/// Read-only star display at half-star resolution
#[component]
pub fn StarRating(value: Option<f64>) -> Element {
    let Some(value) = value else {
        return rsx! {
            span { class: "text-gray-500 text-sm italic", "Not rated yet" }
        };
    };
    let fill = StarFill::from_value(value);
    let label = format!("{:.1} / 5", value);

    rsx! {
        span { class: "inline-flex text-xl leading-none", title: "{label}",
            for _ in 0..fill.full {
                span { class: "text-yellow-400", "★" }
            }
            if fill.half {
                span { class: "relative text-gray-600",
                    "★"
                    span { class: "absolute inset-0 w-1/2 overflow-hidden text-yellow-400", "★" }
                }
            }
            for _ in 0..fill.empty {
                span { class: "text-gray-600", "★" }
            }
        }
    }
}
