//! Identity Domain Model
//!
//! Enrolled X.509 identities as kept in the credential store.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Identity type tag for X.509 enrollment material
pub const X509_IDENTITY_TYPE: &str = "X.509";

/// Current on-disk identity format version
pub const IDENTITY_FORMAT_VERSION: u32 = 1;

/// Enrollment key/certificate pair issued by the certificate authority
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// PEM-encoded enrollment certificate
    #[zeroize(skip)]
    certificate: String,
    /// PEM-encoded PKCS#8 private key
    private_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(certificate: String, private_key: String) -> Self {
        Self {
            certificate,
            private_key,
        }
    }

    #[must_use]
    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("certificate", &self.certificate)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// An enrolled identity bound to an organization's membership service provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    credentials: Credentials,
    msp_id: String,
    #[serde(rename = "type")]
    kind: String,
    version: u32,
}

impl Identity {
    /// Create an X.509 identity for the given organization
    #[must_use]
    pub fn x509(msp_id: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            credentials,
            msp_id: msp_id.into(),
            kind: X509_IDENTITY_TYPE.to_string(),
            version: IDENTITY_FORMAT_VERSION,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }
}

/// Registration of a new identity with the certificate authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub enrollment_id: String,
    pub affiliation: String,
    pub role: String,
}

impl RegistrationRequest {
    /// Registration for an application (client role) identity
    #[must_use]
    pub fn client(enrollment_id: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self {
            enrollment_id: enrollment_id.into(),
            affiliation: affiliation.into(),
            role: "client".to_string(),
        }
    }
}
