//! Identity Signing
//!
//! ECDSA P-256 request signing with an enrolled identity's private key, and
//! the `<cert>.<signature>` authorization token accepted by the certificate
//! authority and the ledger gateway.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use p256::pkcs8::DecodePrivateKey;
use p256::SecretKey;
use thiserror::Error;

use crate::domain::models::identity::Credentials;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct SigningError(String);

/// Signs payloads on behalf of one identity
pub struct IdentitySigner {
    key: SigningKey,
    certificate: String,
}

impl std::fmt::Debug for IdentitySigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySigner")
            .field("certificate", &self.certificate)
            .finish_non_exhaustive()
    }
}

impl IdentitySigner {
    /// Build a signer from PEM credentials.
    ///
    /// Accepts PKCS#8 (`PRIVATE KEY`) and SEC1 (`EC PRIVATE KEY`) keys.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self, SigningError> {
        let pem = credentials.private_key();
        let key = SigningKey::from_pkcs8_pem(pem)
            .or_else(|_| SecretKey::from_sec1_pem(pem).map(SigningKey::from))
            .map_err(|e| SigningError(format!("unreadable P-256 private key: {e}")))?;

        Ok(Self {
            key,
            certificate: credentials.certificate().to_string(),
        })
    }

    /// DER-encoded, low-S ECDSA-SHA256 signature over `message`
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SigningError> {
        let signature: Signature = self
            .key
            .try_sign(message)
            .map_err(|e| SigningError(format!("signing failed: {e}")))?;
        let signature = signature.normalize_s().unwrap_or(signature);

        Ok(signature.to_der().as_bytes().to_vec())
    }

    /// Authorization token for an HTTP request:
    /// `b64(cert).b64(sign(METHOD.b64(path).b64(body).b64(cert)))`
    pub fn auth_token(&self, method: &str, path: &str, body: &[u8]) -> Result<String, SigningError> {
        let certificate = STANDARD.encode(self.certificate.as_bytes());
        let payload = format!(
            "{method}.{}.{}.{certificate}",
            STANDARD.encode(path.as_bytes()),
            STANDARD.encode(body)
        );
        let signature = self.sign(payload.as_bytes())?;
        Ok(format!("{certificate}.{}", STANDARD.encode(signature)))
    }
}
