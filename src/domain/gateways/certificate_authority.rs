//! Certificate Authority Gateway
//!
//! Enrollment and registration against the organization's certificate authority.

use async_trait::async_trait;

use crate::domain::models::identity::{Credentials, Identity, RegistrationRequest};
use crate::shared::errors::CertificateAuthorityError;

/// Certificate authority operations used by the identity bootstrapper
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificateAuthority: Send + Sync {
    /// Enroll `enrollment_id` with its secret, returning fresh credentials
    async fn enroll(
        &self,
        enrollment_id: &str,
        secret: &str,
    ) -> Result<Credentials, CertificateAuthorityError>;

    /// Register a new identity using `registrar`'s signing authority.
    ///
    /// Returns the enrollment secret for the new identity.
    async fn register(
        &self,
        request: &RegistrationRequest,
        registrar: &Identity,
    ) -> Result<String, CertificateAuthorityError>;
}
