//! Movie catalog: fetch once, then filter and page in memory.

pub mod activation;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod rating;
pub mod state;

pub use activation::{load_catalog, Activation};
pub use filter::{filter_records, title_matches};
pub use models::{records_from_documents, MovieRecord, RecordError};
pub use pagination::{
    page_count, page_slice, PageButton, PageControls, PagePolicy, DEFAULT_PAGE_SIZE,
};
pub use rating::StarFill;
pub use state::{CatalogEvent, CatalogPage, CatalogState, Settlement};

use crate::store::{SharedMovieStore, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Load a single movie for the detail view
pub async fn load_movie(
    store: &SharedMovieStore,
    id: &str,
) -> Result<Option<MovieRecord>, CatalogError> {
    match store.get().fetch_movie(id).await? {
        Some(doc) => Ok(Some(MovieRecord::from_document(doc)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie_document, InMemoryMovieStore};
    use serde_json::Map;

    #[tokio::test]
    async fn test_load_movie_found_and_missing() {
        let store = SharedMovieStore::new(InMemoryMovieStore::new(vec![movie_document(
            "m1",
            "Heat",
        )]));

        let movie = load_movie(&store, "m1").await.unwrap().unwrap();
        assert_eq!(movie.title, "Heat");
        assert!(load_movie(&store, "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_movie_rejects_untitled_document() {
        let store = SharedMovieStore::new(InMemoryMovieStore::new(vec![
            crate::store::StoreDocument::new("bad", Map::new()),
        ]));

        let err = load_movie(&store, "bad").await.unwrap_err();
        assert!(matches!(err, CatalogError::Record(RecordError::MissingTitle { .. })));
    }
}
