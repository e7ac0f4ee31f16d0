//! Connection Profile
//!
//! The JSON network description for one organization. Only the client
//! organization and its certificate authorities are read; peers are reached
//! through the REST gateway.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Connection profile loading failures
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Cannot read connection profile {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed connection profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Connection profile has no {kind} named '{name}'")]
    Missing { kind: &'static str, name: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
    pub organization: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationEntry {
    pub mspid: String,
    #[serde(default)]
    pub peers: Vec<String>,
    #[serde(default)]
    pub certificate_authorities: Vec<String>,
}

/// PEM material, given either as one string or a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PemList {
    One(String),
    Many(Vec<String>),
}

impl PemList {
    #[must_use]
    pub fn iter(&self) -> Vec<&str> {
        match self {
            Self::One(pem) => vec![pem.as_str()],
            Self::Many(pems) => pems.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsCaCerts {
    pub pem: PemList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpOptions {
    #[serde(default = "default_verify")]
    pub verify: bool,
}

fn default_verify() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthorityEntry {
    pub url: String,
    pub ca_name: Option<String>,
    #[serde(rename = "tlsCACerts")]
    pub tls_ca_certs: Option<TlsCaCerts>,
    pub http_options: Option<HttpOptions>,
}

impl CertificateAuthorityEntry {
    /// Whether server certificates must be verified
    #[must_use]
    pub fn verify_tls(&self) -> bool {
        self.http_options.as_ref().map_or(true, |o| o.verify)
    }
}

/// Parsed connection profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    #[serde(default)]
    pub name: String,
    pub client: ClientSection,
    #[serde(default)]
    pub organizations: HashMap<String, OrganizationEntry>,
    #[serde(default)]
    pub certificate_authorities: HashMap<String, CertificateAuthorityEntry>,
}

impl ConnectionProfile {
    /// Load and parse a profile from disk
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a profile from its JSON text
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The organization this client acts for
    pub fn client_organization(&self) -> Result<&OrganizationEntry, ProfileError> {
        self.organizations
            .get(&self.client.organization)
            .ok_or_else(|| ProfileError::Missing {
                kind: "organization",
                name: self.client.organization.clone(),
            })
    }

    /// Look up a certificate authority by its profile key
    pub fn certificate_authority(&self, name: &str) -> Result<&CertificateAuthorityEntry, ProfileError> {
        self.certificate_authorities
            .get(name)
            .ok_or_else(|| ProfileError::Missing {
                kind: "certificate authority",
                name: name.to_string(),
            })
    }
}
