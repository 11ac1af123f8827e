use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::notice::{GENERIC_ERROR, SIGNUP_FAILED, UNREGISTER_FAILED};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url {0}")]
    InvalidBase(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Participant-changing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn method(self) -> Method {
        match self {
            Action::Signup => Method::POST,
            Action::Unregister => Method::DELETE,
        }
    }

    fn segment(self) -> &'static str {
        match self {
            Action::Signup => "signup",
            Action::Unregister => "unregister",
        }
    }

    /// Notice text when the request never produced a usable response.
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Signup => SIGNUP_FAILED,
            Action::Unregister => UNREGISTER_FAILED,
        }
    }
}

/// A response the server did produce, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 2xx with the server's `message`.
    Accepted(String),
    /// Non-2xx with the server's `detail`, or the generic fallback.
    Rejected(String),
}

#[derive(Deserialize)]
struct ActionBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Thin client over the activities endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBase(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL plus `segments`, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /activities`.
    pub async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        let url = self.endpoint(&["activities"])?;
        tracing::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(Catalog::from_json(&body)?)
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<ActionOutcome, ApiError> {
        self.perform(Action::Signup, activity, email).await
    }

    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<ActionOutcome, ApiError> {
        self.perform(Action::Unregister, activity, email).await
    }

    /// `POST .../signup` or `DELETE .../unregister` with `?email=`.
    pub async fn perform(
        &self,
        action: Action,
        activity: &str,
        email: &str,
    ) -> Result<ActionOutcome, ApiError> {
        let mut url = self.endpoint(&["activities", activity, action.segment()])?;
        url.query_pairs_mut().append_pair("email", email);
        tracing::debug!("{} {url}", action.method());

        let response = self.http.request(action.method(), url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let parsed: ActionBody = serde_json::from_slice(&body)?;

        if status.is_success() {
            Ok(ActionOutcome::Accepted(parsed.message.unwrap_or_default()))
        } else {
            let detail = parsed
                .detail
                .as_ref()
                .and_then(|d| d.as_str())
                .filter(|d| !d.is_empty())
                .unwrap_or(GENERIC_ERROR);
            Ok(ActionOutcome::Rejected(detail.to_string()))
        }
    }
}
