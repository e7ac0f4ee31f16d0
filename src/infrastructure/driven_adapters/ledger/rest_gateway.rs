//! REST Ledger Gateway
//!
//! Reaches the ledger through a REST gateway. Every call is signed with the
//! connected identity and carries the session's discovery settings, which the
//! gateway applies when it resolves endorsing peers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::domain::gateways::{LedgerConnection, LedgerContract, LedgerNetwork};
use crate::domain::models::identity::Identity;
use crate::domain::models::ledger::{ContractBinding, DiscoveryPolicy};
use crate::infrastructure::driven_adapters::signing::IdentitySigner;
use crate::shared::errors::LedgerError;

const MSP_ID_HEADER: &str = "x-msp-id";
const DISCOVERY_PARAM: &str = "discovery";
const AS_LOCALHOST_PARAM: &str = "asLocalhost";

#[derive(Debug, Serialize)]
struct TransactionRequest<'a> {
    function: &'a str,
    args: &'a [String],
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    message: String,
}

#[derive(Debug, Clone, Copy)]
enum CallKind {
    Evaluate,
    Submit,
}

impl CallKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Evaluate => "evaluate",
            Self::Submit => "submit",
        }
    }
}

/// Parse the configured gateway base URL
fn gateway_endpoint(url: &str) -> Result<Url, LedgerError> {
    let parsed = Url::parse(url).map_err(|e| LedgerError::InvalidEndpoint(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(LedgerError::InvalidEndpoint(format!(
            "{url}: gateway must be reached over http(s), not {other}"
        ))),
    }
}

async fn error_from_response(response: reqwest::Response) -> LedgerError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GatewayErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    match status {
        StatusCode::GATEWAY_TIMEOUT => LedgerError::Timeout,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
            LedgerError::Unavailable(format!("HTTP {status}: {message}"))
        }
        s if s.is_client_error() => LedgerError::TransactionRejected(message),
        _ => LedgerError::Transport(format!("HTTP {status}: {message}")),
    }
}

/// Ledger network reached over REST
#[derive(Debug, Clone)]
pub struct RestLedgerNetwork {
    client: Client,
    endpoint: Url,
}

impl RestLedgerNetwork {
    /// Network client for the REST gateway at `endpoint`
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, LedgerError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(|e| LedgerError::Transport(e.to_string()))?,
            endpoint: gateway_endpoint(endpoint)?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LedgerNetwork for RestLedgerNetwork {
    async fn connect(
        &self,
        label: &str,
        identity: &Identity,
        discovery: DiscoveryPolicy,
    ) -> Result<Arc<dyn LedgerConnection>, LedgerError> {
        let signer = IdentitySigner::from_credentials(identity.credentials())
            .map_err(|e| LedgerError::Signing(e.to_string()))?;

        tracing::info!(
            label = %label,
            endpoint = %self.endpoint,
            discovery = discovery.enabled,
            as_localhost = discovery.as_localhost,
            "Gateway connection opened"
        );

        Ok(Arc::new(RestLedgerConnection {
            inner: Arc::new(ConnectionInner {
                client: self.client.clone(),
                endpoint: self.endpoint.as_str().trim_end_matches('/').to_string(),
                msp_id: identity.msp_id().to_string(),
                discovery,
                signer,
            }),
        }))
    }
}

#[derive(Debug)]
struct ConnectionInner {
    client: Client,
    endpoint: String,
    msp_id: String,
    discovery: DiscoveryPolicy,
    signer: IdentitySigner,
}

impl ConnectionInner {
    /// Peer discovery settings the gateway applies on this session's behalf
    fn discovery_query(&self) -> [(&'static str, &'static str); 2] {
        let flag = |on: bool| if on { "true" } else { "false" };
        [
            (DISCOVERY_PARAM, flag(self.discovery.enabled)),
            (AS_LOCALHOST_PARAM, flag(self.discovery.as_localhost)),
        ]
    }

    async fn send(&self, method: reqwest::Method, path: &str, body: Vec<u8>) -> Result<reqwest::Response, LedgerError> {
        let token = self
            .signer
            .auth_token(method.as_str(), path, &body)
            .map_err(|e| LedgerError::Signing(e.to_string()))?;

        let mut request = self
            .client
            .request(method, format!("{}{path}", self.endpoint))
            .header(reqwest::header::AUTHORIZATION, token)
            .query(&self.discovery_query())
            .header(MSP_ID_HEADER, &self.msp_id);
        if !body.is_empty() {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        Ok(request.send().await?)
    }
}

/// Live session with the REST gateway
#[derive(Debug)]
struct RestLedgerConnection {
    inner: Arc<ConnectionInner>,
}

#[async_trait]
impl LedgerConnection for RestLedgerConnection {
    async fn contract(&self, binding: &ContractBinding) -> Result<Arc<dyn LedgerContract>, LedgerError> {
        let path = format!(
            "/api/v1/channels/{}/contracts/{}",
            binding.channel(),
            binding.contract()
        );

        let response = self.inner.send(reqwest::Method::GET, &path, Vec::new()).await?;
        match response.status() {
            s if s.is_success() => Ok(Arc::new(RestContract {
                connection: self.inner.clone(),
                path,
            })),
            StatusCode::NOT_FOUND => Err(LedgerError::ContractNotFound {
                channel: binding.channel().to_string(),
                contract: binding.contract().to_string(),
            }),
            _ => Err(error_from_response(response).await),
        }
    }
}

/// Contract handle; cheap to share between request handlers
#[derive(Debug)]
struct RestContract {
    connection: Arc<ConnectionInner>,
    path: String,
}

impl RestContract {
    async fn call(&self, kind: CallKind, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        let path = format!("{}/{}", self.path, kind.as_str());
        let body = serde_json::to_vec(&TransactionRequest { function, args })
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        let response = self.connection.send(reqwest::Method::POST, &path, body).await?;
        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(function = %function, kind = kind.as_str(), error = %err, "Ledger call failed");
            return Err(err);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl LedgerContract for RestContract {
    async fn evaluate(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        self.call(CallKind::Evaluate, function, args).await
    }

    async fn submit(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        self.call(CallKind::Submit, function, args).await
    }
}
