//! The remote member collection: duplicate check and create.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_BASE_URL;

/// Errors from the remote member API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or decode failure from the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response with a non-success status.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),
}

/// One record of the remote collection. Only the identifying tax id is
/// read; anything else the server returns is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub inn: String,
}

/// Wire form of a registration, as the collection expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub inn: String,
    pub newsletter: bool,
}

/// The remote collection the form writes to.
#[async_trait]
pub trait MemberApi: Send + Sync {
    /// Fetches the member list. An empty list is a valid "no records"
    /// response.
    async fn list(&self) -> Result<Vec<MemberRecord>, ApiError>;

    /// Creates a member record.
    async fn create(&self, payload: &SignupPayload) -> Result<(), ApiError>;
}

/// [`MemberApi`] over HTTP, JSON in both directions.
#[derive(Debug, Clone)]
pub struct HttpMemberApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMemberApi {
    /// Creates a client for the given collection endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpMemberApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl MemberApi for HttpMemberApi {
    async fn list(&self) -> Result<Vec<MemberRecord>, ApiError> {
        let response = self.client.get(&self.base_url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn create(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        let response = self.client.post(&self.base_url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape() {
        let payload = SignupPayload {
            name: "Ada".to_string(),
            second_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
            phone: "+375(29)123-45-67".to_string(),
            inn: "123456789".to_string(),
            newsletter: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["secondName"], "Lovelace");
        assert_eq!(json["inn"], "123456789");
        assert_eq!(json["newsletter"], true);
    }

    #[test]
    fn test_record_tolerates_unknown_fields() {
        let records: Vec<MemberRecord> = serde_json::from_str(
            r#"[{ "id": "1", "inn": "123456789", "name": "Existing" }]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].inn, "123456789");
    }

    #[test]
    fn test_empty_list_is_valid() {
        let records: Vec<MemberRecord> = serde_json::from_str("[]").unwrap();
        assert!(records.is_empty());
    }
}
