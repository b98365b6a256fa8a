//! Backend transport: the trait the loaders fetch through, and the reqwest
//! implementation of it.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::error::FetchError;

use super::request::ApiRequest;

/// Transport to the transactions backend.
///
/// One method, one request shape: the loaders only need request identity (for
/// cache keys) and the raw parsed response. Tests substitute a fake; the
/// production implementation is [`HttpBackend`].
#[async_trait]
pub trait Backend: Send + Sync {
  async fn request(&self, request: &ApiRequest) -> Result<Value, FetchError>;
}

/// HTTP implementation of [`Backend`].
#[derive(Clone)]
pub struct HttpBackend {
  http: reqwest::Client,
  base_url: Url,
}

impl HttpBackend {
  pub fn new(config: &Config) -> Result<Self, FetchError> {
    // Url::join treats a base without a trailing slash as a file, dropping
    // its last path segment.
    let mut base = config.api.base_url.clone();
    if !base.ends_with('/') {
      base.push('/');
    }
    let base_url = Url::parse(&base).map_err(|e| FetchError::Config {
      message: format!("invalid base URL {}: {}", config.api.base_url, e),
    })?;

    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.api.timeout_secs))
      .build()
      .map_err(|e| FetchError::Config {
        message: format!("failed to build HTTP client: {}", e),
      })?;

    Ok(Self { http, base_url })
  }

  fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
    self.base_url.join(path).map_err(|e| FetchError::Config {
      message: format!("invalid endpoint path {}: {}", path, e),
    })
  }

  async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, FetchError> {
    let response = request.send().await.map_err(|e| FetchError::Network {
      message: e.to_string(),
    })?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
      let resource = response.url().path().to_string();
      return Err(FetchError::NotFound { resource });
    }
    if !status.is_success() {
      return Err(FetchError::Http {
        status: status.as_u16(),
      });
    }

    response.json().await.map_err(|e| FetchError::Network {
      message: format!("failed to read response body: {}", e),
    })
  }
}

#[async_trait]
impl Backend for HttpBackend {
  async fn request(&self, request: &ApiRequest) -> Result<Value, FetchError> {
    match request {
      ApiRequest::Employees => {
        let url = self.endpoint("employees")?;
        self.execute(self.http.get(url)).await
      }
      ApiRequest::TransactionsPage { page, limit } => {
        let mut url = self.endpoint("transactions")?;
        url
          .query_pairs_mut()
          .append_pair("page", &page.to_string())
          .append_pair("limit", &limit.to_string());
        self.execute(self.http.get(url)).await
      }
      ApiRequest::TransactionsByEmployee { employee_id } => {
        let url = self.endpoint(&format!("employees/{}/transactions", employee_id))?;
        self.execute(self.http.get(url)).await
      }
      ApiRequest::SetTransactionApproval {
        transaction_id,
        approved,
      } => {
        let url = self.endpoint(&format!("transactions/{}/approval", transaction_id))?;
        let body = serde_json::json!({ "value": approved });
        self.execute(self.http.post(url).json(&body)).await
      }
    }
  }
}
