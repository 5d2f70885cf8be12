//! Shared data-loading plumbing: one tri-state for every fetch site.
//!
//! The original UI duplicated its fetch logic per view and one of the two
//! sites had no error path at all, leaving a failed dashboard load spinning
//! forever. Both views now go through [`Loadable`] and [`ApiClient`], so a
//! failure always lands in an error state the renderer can show.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::PortalRecord;

/// Loading/error/loaded tri-state held by a view between mount and render.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),
}

/// Thin wrapper over the data endpoint. One instance per client run.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetches the full portal record. Non-success statuses are errors, not
    /// bodies to parse.
    pub async fn fetch_record(&self) -> Result<PortalRecord, FetchError> {
        let url = format!("{}/api/data", self.base_url.trim_end_matches('/'));
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
