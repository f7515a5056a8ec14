use crate::catalog::PagePolicy;
use crate::config;
use crate::store::SharedMovieStore;
use dioxus::prelude::*;

/// Root context handed to the launcher
#[derive(Clone)]
pub struct AppContext {
    pub store: SharedMovieStore,
    pub config: config::Config,
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to access the movie store from components
pub fn use_movie_store() -> SharedMovieStore {
    use_app_context().store
}

pub fn use_page_policy() -> PagePolicy {
    use_app_context().config.page_policy
}
