//! Typed HTTP client for the StovaSpot API

use std::path::Path;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;
use crate::config::BulkMode;
use crate::ingest::drafts_from_csv;
use crate::models::{
    BulkReviewOutcome, Contact, ContactDraft, CreateEventRequest, Event, EventSummary, ImportResult,
};
use crate::utils::errors::{StovaSpotError, Result};
use crate::utils::helpers::is_csv_upload;
use crate::view::ReviewBackend;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("StovaSpot-Client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Decode a success body, or turn the `{error}` body into `Api`
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if !body.is_empty() => body,
            Err(_) => status.canonical_reason().unwrap_or("Request failed").to_string(),
        };

        warn!(status = status.as_u16(), message = %message, "API request failed");
        Err(StovaSpotError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn health(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("health")?).send().await?;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }

    pub async fn list_events(&self) -> Result<Vec<EventSummary>> {
        let response = self.client.get(self.endpoint("events")?).send().await?;
        Self::parse(response).await
    }

    pub async fn create_event(&self, name: &str, description: Option<&str>) -> Result<Event> {
        let response = self
            .client
            .post(self.endpoint("events")?)
            .json(&CreateEventRequest::new(name, description))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn list_contacts(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>> {
        let mut request = self
            .client
            .get(self.endpoint("contacts")?)
            .query(&[("eventId", event_id.to_string())]);
        if let Some(flag) = is_reviewed {
            request = request.query(&[("isReviewed", flag.to_string())]);
        }

        Self::parse(request.send().await?).await
    }

    pub async fn import_contacts(&self, event_id: Uuid, contacts: Vec<ContactDraft>) -> Result<ImportResult> {
        debug!(event_id = %event_id, count = contacts.len(), "Uploading contacts");
        let response = self
            .client
            .post(self.endpoint("contacts")?)
            .json(&json!({ "eventId": event_id, "contacts": contacts }))
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Send raw CSV text for the server to normalize
    pub async fn upload_csv(&self, event_id: Uuid, text: String) -> Result<ImportResult> {
        let response = self
            .client
            .post(self.endpoint("contacts/import")?)
            .query(&[("eventId", event_id.to_string())])
            .header(reqwest::header::CONTENT_TYPE, "text/csv")
            .body(text)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Read a local CSV export, normalize it and import the rows.
    ///
    /// Files that do not look like CSV are refused before anything is read.
    pub async fn import_csv_file(&self, path: impl AsRef<Path>, event_id: Uuid) -> Result<ImportResult> {
        let path = path.as_ref();
        let file_name = path.file_name().and_then(|n| n.to_str());
        if !is_csv_upload(file_name, None) {
            return Err(StovaSpotError::UnsupportedMediaType(
                "Please upload a valid CSV file".to_string(),
            ));
        }

        let text = tokio::fs::read_to_string(path).await?;
        let drafts = drafts_from_csv(&text)?;
        self.import_contacts(event_id, drafts).await
    }

    pub async fn set_reviewed(&self, contact_id: Uuid, is_reviewed: bool) -> Result<Contact> {
        let response = self
            .client
            .patch(self.endpoint(&format!("contacts/{}", contact_id))?)
            .json(&json!({ "isReviewed": is_reviewed }))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn bulk_set_reviewed(
        &self,
        contact_ids: &[Uuid],
        is_reviewed: bool,
        mode: Option<BulkMode>,
    ) -> Result<BulkReviewOutcome> {
        let mut body = json!({ "ids": contact_ids, "isReviewed": is_reviewed });
        if let Some(mode) = mode {
            body["mode"] = serde_json::to_value(mode)?;
        }

        let response = self
            .client
            .patch(self.endpoint("contacts")?)
            .json(&body)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_contact(&self, contact_id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.endpoint(&format!("contacts/{}", contact_id))?)
            .send()
            .await?;
        Self::parse::<serde_json::Value>(response).await.map(|_| ())
    }
}

#[async_trait]
impl ReviewBackend for ApiClient {
    async fn list_contacts(&self, event_id: Uuid, is_reviewed: Option<bool>) -> Result<Vec<Contact>> {
        ApiClient::list_contacts(self, event_id, is_reviewed).await
    }

    async fn set_reviewed(&self, contact_id: Uuid, is_reviewed: bool) -> Result<Contact> {
        ApiClient::set_reviewed(self, contact_id, is_reviewed).await
    }

    async fn set_reviewed_all(&self, contact_ids: &[Uuid], is_reviewed: bool) -> Result<BulkReviewOutcome> {
        self.bulk_set_reviewed(contact_ids, is_reviewed, Some(BulkMode::Transactional))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let client = ApiClient::new("http://localhost:3001/api").unwrap();
        assert_eq!(
            client.endpoint("contacts").unwrap().as_str(),
            "http://localhost:3001/api/contacts"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(StovaSpotError::UrlParse(_))));
    }

    #[tokio::test]
    async fn test_non_csv_file_is_refused() {
        let client = ApiClient::new("http://localhost:3001").unwrap();
        let result = client.import_csv_file("attendees.xlsx", Uuid::new_v4()).await;
        assert!(matches!(result, Err(StovaSpotError::UnsupportedMediaType(_))));
    }
}
