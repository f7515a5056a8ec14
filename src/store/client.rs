use super::value::{decode_fields, encode_fields};
use super::{MovieStore, NewMovie, StoreDocument, StoreError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Documents requested per list call; the client keeps paging until the
/// collection is exhausted.
const LIST_PAGE_SIZE: u32 = 300;

/// Connection settings for a Firestore collection
#[derive(Debug, Clone, PartialEq)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub project_id: String,
    pub collection: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<WireDocument>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireDocument {
    name: String,
    #[serde(default)]
    fields: Option<Value>,
}

impl WireDocument {
    fn into_document(self) -> Result<StoreDocument, StoreError> {
        let id = document_id(&self.name).ok_or_else(|| {
            StoreError::InvalidResponse(format!("document name {:?} has no id", self.name))
        })?;
        Ok(StoreDocument::new(id, decode_fields(self.fields.as_ref())))
    }
}

/// Last path segment of a fully-qualified document name
fn document_id(name: &str) -> Option<&str> {
    name.rsplit('/').next().filter(|id| !id.is_empty())
}

/// Firestore REST v1 client for one collection
pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(FirestoreClient { client, config })
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.project_id,
            self.config.collection
        )
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    async fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("Firestore rejected credentials ({})", status);
            return Err(StoreError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl MovieStore for FirestoreClient {
    async fn fetch_movies(&self) -> Result<Vec<StoreDocument>, StoreError> {
        let url = self.collection_url();
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = Self::check_status(self.with_key(request).send().await?).await?;
            let page: ListDocumentsResponse = response.json().await?;
            debug!(
                "Fetched {} documents from {}",
                page.documents.len(),
                self.config.collection
            );

            for doc in page.documents {
                documents.push(doc.into_document()?);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    async fn fetch_movie(&self, id: &str) -> Result<Option<StoreDocument>, StoreError> {
        let request = self.client.get(self.document_url(id));
        let response = self.with_key(request).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check_status(response).await?;
        let doc: WireDocument = response.json().await?;
        doc.into_document().map(Some)
    }

    async fn add_movie(&self, movie: &NewMovie) -> Result<String, StoreError> {
        let body = json!({ "fields": encode_fields(&movie.to_fields()) });
        let request = self.client.post(self.collection_url()).json(&body);

        let response = Self::check_status(self.with_key(request).send().await?).await?;
        let doc: WireDocument = response.json().await?;
        let created = doc.into_document()?;
        debug!("Created movie document {}", created.id);
        Ok(created.id)
    }
}
