//! Identity bootstrap tests
//!
//! Run the bootstrapper against real wallet adapters and a counting
//! certificate authority.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use ledger_asset_gateway::application::use_cases::{EnsureIdentityUseCase, IdentitySettings};
use ledger_asset_gateway::domain::gateways::{CertificateAuthority, CredentialStore};
use ledger_asset_gateway::domain::models::identity::{Credentials, Identity, RegistrationRequest};
use ledger_asset_gateway::infrastructure::driven_adapters::{FileSystemWallet, InMemoryWallet};
use ledger_asset_gateway::shared::errors::{CertificateAuthorityError, UseCaseError};

/// CA double issuing a distinct certificate per enrollment
#[derive(Default)]
struct CountingCertificateAuthority {
    enrollments: AtomicUsize,
    registrations: AtomicUsize,
    unreachable: bool,
}

impl CountingCertificateAuthority {
    fn calls(&self) -> usize {
        self.enrollments.load(Ordering::SeqCst) + self.registrations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CertificateAuthority for CountingCertificateAuthority {
    async fn enroll(
        &self,
        enrollment_id: &str,
        _secret: &str,
    ) -> Result<Credentials, CertificateAuthorityError> {
        if self.unreachable {
            return Err(CertificateAuthorityError::InvalidResponse("connection refused".into()));
        }
        let n = self.enrollments.fetch_add(1, Ordering::SeqCst);
        Ok(Credentials::new(
            format!("CERT-{enrollment_id}-{n}"),
            format!("KEY-{enrollment_id}-{n}"),
        ))
    }

    async fn register(
        &self,
        request: &RegistrationRequest,
        _registrar: &Identity,
    ) -> Result<String, CertificateAuthorityError> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(format!("secret-{}", request.enrollment_id))
    }
}

fn settings() -> IdentitySettings {
    IdentitySettings {
        msp_id: "Org1MSP".to_string(),
        admin_label: "admin".to_string(),
        admin_enrollment_id: "admin".to_string(),
        admin_secret: "adminpw".to_string(),
        user_id: "appUser".to_string(),
        affiliation: "org1.department1".to_string(),
    }
}

#[tokio::test]
async fn test_second_run_is_idempotent_with_in_memory_wallet() {
    let wallet = Arc::new(InMemoryWallet::new());
    let ca = Arc::new(CountingCertificateAuthority::default());
    let use_case = EnsureIdentityUseCase::new(wallet.clone(), ca.clone(), settings());

    use_case.execute().await.unwrap();
    let calls_after_first = ca.calls();
    let user_after_first = wallet.get("appUser").await.unwrap().unwrap();

    use_case.execute().await.unwrap();

    assert_eq!(calls_after_first, 3);
    assert_eq!(ca.calls(), calls_after_first);
    assert_eq!(wallet.get("appUser").await.unwrap().unwrap(), user_after_first);
}

#[tokio::test]
async fn test_identities_survive_restart_with_filesystem_wallet() {
    let dir = tempfile::tempdir().unwrap();

    let first_ca = Arc::new(CountingCertificateAuthority::default());
    let wallet = Arc::new(FileSystemWallet::open(dir.path()).await.unwrap());
    EnsureIdentityUseCase::new(wallet, first_ca.clone(), settings())
        .execute()
        .await
        .unwrap();
    assert_eq!(first_ca.calls(), 3);

    let second_ca = Arc::new(CountingCertificateAuthority::default());
    let reopened = Arc::new(FileSystemWallet::open(dir.path()).await.unwrap());
    EnsureIdentityUseCase::new(reopened.clone(), second_ca.clone(), settings())
        .execute()
        .await
        .unwrap();

    assert_eq!(second_ca.calls(), 0);
    let user = reopened.get("appUser").await.unwrap().unwrap();
    assert_eq!(user.credentials().certificate(), "CERT-appUser-1");
    assert_eq!(user.msp_id(), "Org1MSP");
    assert!(dir.path().join("admin.id").is_file());
}

#[tokio::test]
async fn test_unreachable_ca_is_fatal() {
    let wallet = Arc::new(InMemoryWallet::new());
    let ca = Arc::new(CountingCertificateAuthority {
        unreachable: true,
        ..CountingCertificateAuthority::default()
    });

    let result = EnsureIdentityUseCase::new(wallet.clone(), ca, settings())
        .execute()
        .await;

    assert!(matches!(result, Err(UseCaseError::CertificateAuthority(_))));
    assert!(wallet.get("admin").await.unwrap().is_none());
}
