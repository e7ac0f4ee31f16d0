//! Certificate Authority Client
//!
//! REST client for the organization's certificate authority. Enrollment
//! generates a fresh P-256 key and CSR locally; registration is authorized
//! with a token signed by the registrar identity.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::{Certificate, Client};
use serde::{Deserialize, Serialize};

use super::connection_profile::CertificateAuthorityEntry;
use super::signing::IdentitySigner;
use crate::domain::gateways::CertificateAuthority;
use crate::domain::models::identity::{Credentials, Identity, RegistrationRequest};
use crate::shared::errors::CertificateAuthorityError;

const ENROLL_PATH: &str = "/api/v1/enroll";
const REGISTER_PATH: &str = "/api/v1/register";

#[derive(Debug, Serialize)]
struct EnrollRequestBody<'a> {
    certificate_request: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    caname: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RegisterRequestBody<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    role: &'a str,
    affiliation: &'a str,
    max_enrollments: i32,
    attrs: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caname: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CaMessage {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Envelope every CA response is wrapped in
#[derive(Debug, Deserialize)]
struct CaResponse<T> {
    #[serde(default)]
    success: bool,
    result: Option<T>,
    #[serde(default)]
    errors: Vec<CaMessage>,
}

#[derive(Debug, Deserialize)]
struct EnrollResult {
    #[serde(rename = "Cert")]
    cert: String,
}

#[derive(Debug, Deserialize)]
struct RegisterResult {
    secret: String,
}

/// HTTP client for the certificate authority REST API
#[derive(Debug, Clone)]
pub struct FabricCaClient {
    client: Client,
    base_url: String,
    ca_name: Option<String>,
}

impl FabricCaClient {
    /// Client for `base_url`, using the default HTTP settings
    #[must_use]
    pub fn new(base_url: impl Into<String>, ca_name: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ca_name,
        }
    }

    /// Client for a connection profile entry, honoring its TLS settings
    pub fn from_profile(
        entry: &CertificateAuthorityEntry,
        timeout: Option<Duration>,
    ) -> Result<Self, CertificateAuthorityError> {
        let mut builder = Client::builder();

        if let Some(tls) = &entry.tls_ca_certs {
            for pem in tls.pem.iter() {
                builder = builder.add_root_certificate(Certificate::from_pem(pem.as_bytes())?);
            }
        }
        if !entry.verify_tls() {
            tracing::warn!(url = %entry.url, "TLS verification disabled for certificate authority");
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: entry.url.trim_end_matches('/').to_string(),
            ca_name: entry.ca_name.clone(),
        })
    }

    async fn read_envelope<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, CertificateAuthorityError> {
        let status = response.status();
        let text = response.text().await?;

        let envelope: CaResponse<T> = serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                CertificateAuthorityError::InvalidResponse(e.to_string())
            } else {
                CertificateAuthorityError::Rejected(vec![format!("HTTP {status}: {text}")])
            }
        })?;

        if !status.is_success() || !envelope.success {
            let mut messages: Vec<String> = envelope
                .errors
                .iter()
                .map(|e| format!("[{}] {}", e.code, e.message))
                .collect();
            if messages.is_empty() {
                messages.push(format!("HTTP {status}"));
            }
            return Err(CertificateAuthorityError::Rejected(messages));
        }

        envelope
            .result
            .ok_or_else(|| CertificateAuthorityError::InvalidResponse("missing result".to_string()))
    }
}

/// Fresh P-256 key and a CSR for `common_name`, both PEM-encoded
fn generate_csr(common_name: &str) -> Result<(String, String), CertificateAuthorityError> {
    let crypto = |e: rcgen::Error| CertificateAuthorityError::Crypto(e.to_string());

    let key_pair = rcgen::KeyPair::generate().map_err(crypto)?;
    let mut params = rcgen::CertificateParams::new(Vec::<String>::new()).map_err(crypto)?;
    params
        .distinguished_name
        .push(rcgen::DnType::CommonName, common_name);
    let csr = params.serialize_request(&key_pair).map_err(crypto)?;

    Ok((csr.pem().map_err(crypto)?, key_pair.serialize_pem()))
}

#[async_trait]
impl CertificateAuthority for FabricCaClient {
    async fn enroll(
        &self,
        enrollment_id: &str,
        secret: &str,
    ) -> Result<Credentials, CertificateAuthorityError> {
        tracing::debug!(enrollment_id = %enrollment_id, "Sending enrollment request");

        let (csr, private_key) = generate_csr(enrollment_id)?;
        let body = EnrollRequestBody {
            certificate_request: &csr,
            caname: self.ca_name.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}{ENROLL_PATH}", self.base_url))
            .basic_auth(enrollment_id, Some(secret))
            .json(&body)
            .send()
            .await?;
        let result: EnrollResult = Self::read_envelope(response).await?;

        let certificate = STANDARD
            .decode(result.cert.as_bytes())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| {
                CertificateAuthorityError::InvalidResponse("certificate is not base64 PEM".to_string())
            })?;

        Ok(Credentials::new(certificate, private_key))
    }

    async fn register(
        &self,
        request: &RegistrationRequest,
        registrar: &Identity,
    ) -> Result<String, CertificateAuthorityError> {
        tracing::debug!(enrollment_id = %request.enrollment_id, "Sending registration request");

        let body = serde_json::to_vec(&RegisterRequestBody {
            id: &request.enrollment_id,
            role: &request.role,
            affiliation: &request.affiliation,
            max_enrollments: -1,
            attrs: Vec::new(),
            caname: self.ca_name.as_deref(),
        })
        .map_err(|e| CertificateAuthorityError::InvalidResponse(e.to_string()))?;

        let signer = IdentitySigner::from_credentials(registrar.credentials())
            .map_err(|e| CertificateAuthorityError::Crypto(e.to_string()))?;
        let token = signer
            .auth_token("POST", REGISTER_PATH, &body)
            .map_err(|e| CertificateAuthorityError::Crypto(e.to_string()))?;

        let response = self
            .client
            .post(format!("{}{REGISTER_PATH}", self.base_url))
            .header(reqwest::header::AUTHORIZATION, token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let result: RegisterResult = Self::read_envelope(response).await?;

        Ok(result.secret)
    }
}
