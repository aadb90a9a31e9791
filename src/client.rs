use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{LinearError, Result};

/// GraphQL client bound to one access token.
///
/// Build one per invocation; it owns its HTTP session and nothing is shared
/// across clients.
pub struct LinearClient {
    http: Client,
    endpoint: Url,
    access_token: String,
    timeout_secs: u64,
    page_size: u32,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize, Debug)]
struct GraphQLError {
    message: String,
}

impl LinearClient {
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(access_token, &Config::default())
    }

    pub fn with_config(access_token: impl Into<String>, config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint_url()?,
            access_token: access_token.into(),
            timeout_secs: config.timeout_secs,
            page_size: config.page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T> {
        let request = GraphQLRequest { query, variables };

        debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "GraphQL request rejected");
            return Err(LinearError::ApiError {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let gql_response: GraphQLResponse<serde_json::Value> =
            serde_json::from_str(&body).map_err(LinearError::Decode)?;

        if let Some(errors) = gql_response.errors {
            if !errors.is_empty() {
                return Err(LinearError::GraphQL {
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }

        match gql_response.data {
            Some(serde_json::Value::Null) | None => Err(LinearError::EmptyResponse),
            Some(data) => serde_json::from_value(data).map_err(LinearError::Decode),
        }
    }

    fn transport_error(&self, error: reqwest::Error) -> LinearError {
        if error.is_timeout() {
            LinearError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            LinearError::Http(error)
        }
    }
}
