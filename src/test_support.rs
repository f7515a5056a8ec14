//! Test helpers: an in-memory movie store with failure injection.

use crate::store::{MovieStore, NewMovie, StoreDocument, StoreError};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Movie store backed by a vector
///
/// A gated store holds every `fetch_movies` call until the returned
/// `Notify` is signalled.
pub struct InMemoryMovieStore {
    documents: Mutex<Vec<StoreDocument>>,
    failure: Option<String>,
    gate: Option<Arc<Notify>>,
    fetch_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl InMemoryMovieStore {
    pub fn new(documents: Vec<StoreDocument>) -> Self {
        InMemoryMovieStore {
            documents: Mutex::new(documents),
            failure: None,
            gate: None,
            fetch_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Every call fails with an HTTP 503 carrying `message`
    pub fn failing(message: &str) -> Self {
        InMemoryMovieStore {
            failure: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    pub fn gated(documents: Vec<StoreDocument>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let store = InMemoryMovieStore {
            gate: Some(gate.clone()),
            ..Self::new(documents)
        };
        (store, gate)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::Status {
                status: 503,
                body: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn snapshot(&self) -> Vec<StoreDocument> {
        self.documents
            .lock()
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn fetch_movies(&self) -> Result<Vec<StoreDocument>, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.check_failure()?;
        Ok(self.snapshot())
    }

    async fn fetch_movie(&self, id: &str) -> Result<Option<StoreDocument>, StoreError> {
        self.check_failure()?;
        Ok(self.snapshot().into_iter().find(|doc| doc.id == id))
    }

    async fn add_movie(&self, movie: &NewMovie) -> Result<String, StoreError> {
        self.check_failure()?;
        let id = format!("mem-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let doc = StoreDocument::new(id.clone(), movie.to_fields());
        self.documents
            .lock()
            .map_err(|_| StoreError::InvalidResponse("store poisoned".to_string()))?
            .push(doc);
        Ok(id)
    }
}

/// A well-formed movie document rated 4 stars
pub fn movie_document(id: &str, title: &str) -> StoreDocument {
    let fields = json!({
        "title": title,
        "image": format!("https://images.example/{}.jpg", id),
        "rating": 8,
        "rated": 2,
        "year": 1999,
    });
    StoreDocument::new(id, fields.as_object().cloned().unwrap_or_else(Map::new))
}

/// `count` documents titled "Movie 0", "Movie 1", ...
pub fn numbered_documents(count: usize) -> Vec<StoreDocument> {
    (0..count)
        .map(|i| movie_document(&format!("m{}", i), &format!("Movie {}", i)))
        .collect()
}

/// Documents with the given titles and generated ids
pub fn titled_documents(titles: &[&str]) -> Vec<StoreDocument> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| movie_document(&format!("t{}", i), title))
        .collect()
}

/// Field set without a title, rejected by the catalog
pub fn untitled_document(id: &str) -> StoreDocument {
    let mut fields = Map::new();
    fields.insert("year".to_string(), Value::from(2001));
    StoreDocument::new(id, fields)
}
