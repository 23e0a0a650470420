//! Reqwest-based API client.

use std::collections::HashMap;
use std::sync::Arc;

use flowboard_catalog::OperationDescriptor;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::TRACING_TARGET;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{PipelineDraft, PipelineId, PipelineRecord, RunReceipt, RunRequest};

/// Inner client that holds the HTTP client and configuration.
struct FlowboardClientInner {
    http: Client,
    config: ClientConfig,
}

/// HTTP client for the flowboard catalog, persistence, and run APIs.
///
/// Cheap to clone; all clones share one connection pool. Requests are
/// fire-and-forget from the editor's perspective: the caller applies results
/// on its own event loop and drops stale responses by checking the session
/// generation it captured before sending.
#[derive(Clone)]
pub struct FlowboardClient {
    inner: Arc<FlowboardClientInner>,
}

impl std::fmt::Debug for FlowboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowboardClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl FlowboardClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.effective_timeout())
            .user_agent(config.effective_user_agent())
            .build()
            .expect("failed to create HTTP client");

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %config.base_url,
            "flowboard client created"
        );

        Self {
            inner: Arc::new(FlowboardClientInner { http, config }),
        }
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Fetches the operation catalog.
    ///
    /// Consumed once at editor load; on failure the caller surfaces a
    /// non-fatal notification and leaves the palette empty.
    pub async fn fetch_operations(&self) -> Result<Vec<OperationDescriptor>> {
        let url = self.config().endpoint("operations")?;
        tracing::debug!(target: TRACING_TARGET, %url, "fetching operation catalog");

        let response = self.http().get(url).send().await?;
        Self::decode(response).await
    }

    /// Creates a new pipeline. The returned record carries the assigned id.
    pub async fn create_pipeline(&self, draft: &PipelineDraft) -> Result<PipelineRecord> {
        let url = self.config().endpoint("pipelines")?;
        tracing::debug!(target: TRACING_TARGET, %url, name = %draft.name, "creating pipeline");

        let response = self.http().post(url).json(draft).send().await?;
        Self::decode(response).await
    }

    /// Updates a stored pipeline.
    pub async fn update_pipeline(
        &self,
        id: PipelineId,
        draft: &PipelineDraft,
    ) -> Result<PipelineRecord> {
        let url = self.config().endpoint(&format!("pipelines/{id}"))?;
        tracing::debug!(target: TRACING_TARGET, %url, "updating pipeline");

        let response = self.http().put(url).json(draft).send().await?;
        Self::decode(response).await
    }

    /// Fetches a stored pipeline for the editor to decompile.
    pub async fn get_pipeline(&self, id: PipelineId) -> Result<PipelineRecord> {
        let url = self.config().endpoint(&format!("pipelines/{id}"))?;
        tracing::debug!(target: TRACING_TARGET, %url, "fetching pipeline");

        let response = self.http().get(url).send().await?;
        Self::decode(response).await
    }

    /// Starts a run of a saved pipeline and returns the engine's job id.
    ///
    /// A pipeline that was never saved has no id yet; that case is rejected
    /// here, before any request is built, rather than by the server.
    pub async fn run_pipeline(
        &self,
        id: Option<PipelineId>,
        variables: HashMap<String, String>,
    ) -> Result<RunReceipt> {
        let id = id.ok_or(Error::UnsavedPipeline)?;
        let url = self.config().endpoint(&format!("pipelines/{id}/run"))?;
        tracing::debug!(target: TRACING_TARGET, %url, "starting pipeline run");

        let body = RunRequest { variables };
        let response = self.http().post(url).json(&body).send().await?;
        Self::decode(response).await
    }

    /// Checks the response status and decodes the JSON body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: TRACING_TARGET,
                status = status.as_u16(),
                "request failed"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn client() -> FlowboardClient {
        let base = Url::parse("http://localhost:9/api/").unwrap();
        FlowboardClient::new(ClientConfig::new(base))
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.config().http_timeout, 30);
    }

    #[tokio::test]
    async fn test_run_without_saved_id_rejected_client_side() {
        // Port 9 (discard) would hang or refuse; the guard must trip before
        // any request is attempted.
        let result = client().run_pipeline(None, HashMap::new()).await;
        assert!(matches!(result, Err(Error::UnsavedPipeline)));
    }
}
