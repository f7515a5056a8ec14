use crate::store::StoreDocument;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Document {id} has no title")]
    MissingTitle { id: String },
}

/// One catalog entry
///
/// Built from a store document at the mapping boundary; the store-assigned id
/// always wins over any `id` field inside the document.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    /// Sum of all star ratings given
    pub rating: f64,
    /// Number of ratings given
    pub rated: f64,
    pub year: Option<String>,
    pub description: Option<String>,
}

impl MovieRecord {
    pub fn from_document(doc: StoreDocument) -> Result<Self, RecordError> {
        let StoreDocument { id, fields } = doc;

        let title = match fields.get("title") {
            Some(Value::String(title)) => title.clone(),
            _ => return Err(RecordError::MissingTitle { id }),
        };

        Ok(MovieRecord {
            title,
            image: text_field(&fields, "image"),
            rating: number_field(&fields, "rating"),
            rated: number_field(&fields, "rated"),
            year: year_field(&fields),
            description: text_field(&fields, "description"),
            id,
        })
    }

    /// Average star value, `None` while nobody has rated the movie
    pub fn stars(&self) -> Option<f64> {
        if self.rated > 0.0 && self.rating.is_finite() {
            Some(self.rating / self.rated)
        } else {
            None
        }
    }
}

fn text_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number_field(fields: &Map<String, Value>, name: &str) -> f64 {
    match fields.get(name) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

// Stored either as a number or as text
fn year_field(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("year") {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Map a fetched collection, dropping documents that fail validation.
/// Store order is preserved.
pub fn records_from_documents(documents: Vec<StoreDocument>) -> Vec<MovieRecord> {
    documents
        .into_iter()
        .filter_map(|doc| match MovieRecord::from_document(doc) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping movie document: {}", e);
                None
            }
        })
        .collect()
}
