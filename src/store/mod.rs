mod client;
mod value;

pub use client::{FirestoreClient, FirestoreConfig};
pub use value::{decode_fields, decode_value, encode_fields, encode_value};

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Store rejected credentials")]
    Unauthorized,
    #[error("Store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One schema-flexible document as handed out by the store.
///
/// The id is assigned by the store and lives outside the field set.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl StoreDocument {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        StoreDocument {
            id: id.into(),
            fields,
        }
    }
}

/// Payload written by the add-movie form
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl NewMovie {
    /// Build a payload from raw form input. Blank optional fields become `None`.
    pub fn from_form(
        title: &str,
        year: &str,
        image: &str,
        description: &str,
    ) -> Result<Self, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("title is required".to_string()));
        }

        let year = non_blank(year);
        if let Some(y) = &year {
            if y.parse::<u16>().is_err() {
                return Err(StoreError::InvalidInput(format!("year {:?} is not a number", y)));
            }
        }

        Ok(NewMovie {
            title: title.to_string(),
            year,
            image: non_blank(image),
            description: non_blank(description),
        })
    }

    /// Field set stored for a new movie. Ratings start empty.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::from(self.title.clone()));
        if let Some(year) = &self.year {
            let value = year
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(year.clone()));
            fields.insert("year".to_string(), value);
        }
        if let Some(image) = &self.image {
            fields.insert("image".to_string(), Value::from(image.clone()));
        }
        if let Some(description) = &self.description {
            fields.insert("description".to_string(), Value::from(description.clone()));
        }
        fields.insert("rating".to_string(), Value::from(0));
        fields.insert("rated".to_string(), Value::from(0));
        fields
    }
}

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Data-access interface for the movie collection
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Fetch the entire collection, in store order
    async fn fetch_movies(&self) -> Result<Vec<StoreDocument>, StoreError>;

    /// Fetch a single document, `None` when it does not exist
    async fn fetch_movie(&self, id: &str) -> Result<Option<StoreDocument>, StoreError>;

    /// Create a document and return its store-assigned id
    async fn add_movie(&self, movie: &NewMovie) -> Result<String, StoreError>;
}

/// Cloneable handle to the configured store, shared by every view
#[derive(Clone)]
pub struct SharedMovieStore {
    inner: Arc<dyn MovieStore>,
}

impl SharedMovieStore {
    pub fn new(store: impl MovieStore + 'static) -> Self {
        SharedMovieStore {
            inner: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn MovieStore>) -> Self {
        SharedMovieStore { inner: store }
    }

    pub fn get(&self) -> &dyn MovieStore {
        self.inner.as_ref()
    }
}

impl PartialEq for SharedMovieStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for SharedMovieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedMovieStore").finish_non_exhaustive()
    }
}
