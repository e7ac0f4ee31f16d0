//! Ensure Identity Use Case
//!
//! Makes sure the admin identity and the application identity exist in the
//! credential store, enrolling and registering them with the certificate
//! authority when they are missing.

use std::sync::Arc;

use crate::domain::gateways::{CertificateAuthority, CredentialStore};
use crate::domain::models::identity::{Identity, RegistrationRequest};
use crate::shared::errors::UseCaseError;

/// Who to enroll, and under which organization
#[derive(Debug, Clone)]
pub struct IdentitySettings {
    pub msp_id: String,
    pub admin_label: String,
    pub admin_enrollment_id: String,
    pub admin_secret: String,
    pub user_id: String,
    pub affiliation: String,
}

/// Use case bootstrapping the identities the gateway runs under
pub struct EnsureIdentityUseCase {
    credential_store: Arc<dyn CredentialStore>,
    certificate_authority: Arc<dyn CertificateAuthority>,
    settings: IdentitySettings,
}

impl EnsureIdentityUseCase {
    /// Create a new EnsureIdentityUseCase
    #[must_use]
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        certificate_authority: Arc<dyn CertificateAuthority>,
        settings: IdentitySettings,
    ) -> Self {
        Self {
            credential_store,
            certificate_authority,
            settings,
        }
    }

    /// Execute the use case
    ///
    /// Safe to run repeatedly: identities already in the store are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::CertificateAuthority` if the CA is unreachable or
    /// rejects enrollment/registration.
    /// Returns `UseCaseError::CredentialStore` if the wallet cannot be read or written.
    pub async fn execute(&self) -> Result<(), UseCaseError> {
        self.enroll_admin().await?;
        self.register_and_enroll_user().await
    }

    async fn enroll_admin(&self) -> Result<(), UseCaseError> {
        let label = &self.settings.admin_label;

        if self.credential_store.get(label).await?.is_some() {
            tracing::debug!(label = %label, "Admin identity already present in wallet");
            return Ok(());
        }

        tracing::info!(label = %label, msp_id = %self.settings.msp_id, "Enrolling admin identity");

        let credentials = self
            .certificate_authority
            .enroll(&self.settings.admin_enrollment_id, &self.settings.admin_secret)
            .await?;
        let identity = Identity::x509(self.settings.msp_id.clone(), credentials);
        self.credential_store.put(label, &identity).await?;

        tracing::info!(label = %label, "Admin identity enrolled and stored");
        Ok(())
    }

    async fn register_and_enroll_user(&self) -> Result<(), UseCaseError> {
        let user_id = &self.settings.user_id;

        if self.credential_store.get(user_id).await?.is_some() {
            tracing::debug!(label = %user_id, "Application identity already present in wallet");
            return Ok(());
        }

        let admin = self
            .credential_store
            .get(&self.settings.admin_label)
            .await?
            .ok_or_else(|| UseCaseError::IdentityNotFound(self.settings.admin_label.clone()))?;

        tracing::info!(
            label = %user_id,
            affiliation = %self.settings.affiliation,
            "Registering application identity"
        );

        let request = RegistrationRequest::client(user_id.clone(), self.settings.affiliation.clone());
        let secret = self.certificate_authority.register(&request, &admin).await?;
        let credentials = self.certificate_authority.enroll(user_id, &secret).await?;
        let identity = Identity::x509(self.settings.msp_id.clone(), credentials);
        self.credential_store.put(user_id, &identity).await?;

        tracing::info!(label = %user_id, "Application identity enrolled and stored");
        Ok(())
    }
}
