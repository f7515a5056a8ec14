use crate::catalog::MovieRecord;
use crate::ui::components::movie_card::StarRating;
use dioxus::prelude::*;

#[component]
pub fn MovieDetailView(movie: MovieRecord) -> Element {
    let rated = movie.rated as u64;

    rsx! {
        div { class: "flex flex-col md:flex-row gap-8",
            if let Some(image) = &movie.image {
                img {
                    class: "h-96 w-64 object-cover rounded-lg shadow-lg",
                    src: "{image}",
                    alt: "{movie.title}",
                }
            } else {
                div { class: "h-96 w-64 rounded-lg bg-gray-800 flex items-center justify-center text-6xl",
                    "🎬"
                }
            }
            div { class: "flex-1",
                h1 { class: "text-3xl font-bold mb-2",
                    "{movie.title}"
                    if let Some(year) = &movie.year {
                        span { class: "text-xl text-gray-400 ml-2", "({year})" }
                    }
                }
                div { class: "flex items-center gap-2 mb-4",
                    StarRating { value: movie.stars() }
                    if rated > 0 {
                        span { class: "text-sm text-gray-500", "{rated} ratings" }
                    }
                }
                if let Some(description) = &movie.description {
                    p { class: "text-gray-300 leading-relaxed whitespace-pre-line", "{description}" }
                }
            }
        }
    }
}
