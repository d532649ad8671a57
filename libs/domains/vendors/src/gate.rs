//! The two-stage request gate: authenticate, then authorize.
//!
//! Handlers compose the stages explicitly instead of relying on router
//! middleware, so the approval precondition is visible at every call
//! site that needs it.

use axum_helpers::{JwtAuth, TokenKind};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{VendorError, VendorResult};
use crate::models::{Vendor, VendorStatus};
use crate::repository::VendorRepository;

pub struct VendorGate<R: VendorRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: VendorRepository> VendorGate<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Resolve a bearer token to a vendor record.
    ///
    /// Verifies the signature and expiry, requires the `access` kind, and
    /// loads the subject. Carries no status precondition: a vendor in any
    /// lifecycle state can authenticate (e.g., to read its own profile).
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> VendorResult<Vendor> {
        let claims = self
            .jwt
            .verify(token)
            .map_err(|_| VendorError::TokenInvalid)?;

        if claims.kind != TokenKind::Access {
            return Err(VendorError::TokenKindMismatch);
        }

        let vendor_id = claims.vendor_id().map_err(|_| VendorError::TokenInvalid)?;

        self.repository
            .get_by_id(vendor_id)
            .await?
            .ok_or(VendorError::UnknownVendor)
    }

    /// Enforce the approval precondition.
    ///
    /// Only `approved` passes; every other status fails with a
    /// status-specific localized reason. Must run before each
    /// vendor-scoped business operation (products, orders, dashboard).
    pub fn authorize<'a>(&self, vendor: &'a Vendor) -> VendorResult<&'a Vendor> {
        match vendor.status {
            VendorStatus::Approved => Ok(vendor),
            status => Err(VendorError::NotApproved {
                status,
                reason: vendor.rejection_reason.clone(),
            }),
        }
    }

    /// Both stages composed, for handlers gated on approval.
    pub async fn require_approved(&self, token: &str) -> VendorResult<Vendor> {
        let vendor = self.authenticate(token).await?;
        self.authorize(&vendor)?;
        Ok(vendor)
    }
}

impl<R: VendorRepository> Clone for VendorGate<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            jwt: self.jwt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryVendorRepository;
    use crate::models::{Address, Documents, Vendor};
    use axum_helpers::JwtConfig;
    use chrono::Utc;
    use uuid::Uuid;

    fn jwt() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("gate-test-secret-key-32-characters!!"))
    }

    fn vendor_with_status(status: VendorStatus, reason: Option<&str>) -> Vendor {
        let now = Utc::now();
        Vendor {
            id: Uuid::new_v4(),
            email: "gate@example.com".to_string(),
            password_hash: "hash".to_string(),
            owner_name: "Gate Test".to_string(),
            phone: "+900000000000".to_string(),
            store_name: "Test Store".to_string(),
            store_type: None,
            tax_number: None,
            address: Address {
                province: "Ankara".to_string(),
                district: "Çankaya".to_string(),
                full_address: "Test Sok. 1".to_string(),
                postal_code: None,
            },
            status,
            rejection_reason: reason.map(|r| r.to_string()),
            documents: Documents {
                tax_sheet_url: "/uploads/tax.pdf".to_string(),
                trade_registry_url: None,
                signature_circular_url: None,
            },
            created_at: now,
            updated_at: now,
        }
    }

    fn gate_with(vendor: &Vendor) -> VendorGate<InMemoryVendorRepository> {
        let repo = InMemoryVendorRepository::new();
        repo.insert(vendor.clone());
        VendorGate::new(repo, jwt())
    }

    #[tokio::test]
    async fn test_authenticate_with_access_token() {
        let vendor = vendor_with_status(VendorStatus::PendingReview, None);
        let gate = gate_with(&vendor);

        let token = jwt().issue(vendor.id, TokenKind::Access).unwrap();
        let authenticated = gate.authenticate(&token).await.unwrap();
        assert_eq!(authenticated.id, vendor.id);
    }

    #[tokio::test]
    async fn test_refresh_token_is_rejected_for_authentication() {
        let vendor = vendor_with_status(VendorStatus::Approved, None);
        let gate = gate_with(&vendor);

        let token = jwt().issue(vendor.id, TokenKind::Refresh).unwrap();
        let err = gate.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, VendorError::TokenKindMismatch));
    }

    #[tokio::test]
    async fn test_unknown_subject_is_rejected() {
        let vendor = vendor_with_status(VendorStatus::Approved, None);
        let gate = gate_with(&vendor);

        let token = jwt().issue(Uuid::new_v4(), TokenKind::Access).unwrap();
        let err = gate.authenticate(&token).await.unwrap_err();
        assert!(matches!(err, VendorError::UnknownVendor));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let vendor = vendor_with_status(VendorStatus::Approved, None);
        let gate = gate_with(&vendor);

        let err = gate.authenticate("not-a-token").await.unwrap_err();
        assert!(matches!(err, VendorError::TokenInvalid));
    }

    #[tokio::test]
    async fn test_authorize_passes_only_approved() {
        let approved = vendor_with_status(VendorStatus::Approved, None);
        let gate = gate_with(&approved);
        assert!(gate.authorize(&approved).is_ok());

        for status in [
            VendorStatus::PendingReview,
            VendorStatus::Rejected,
            VendorStatus::Suspended,
        ] {
            let vendor = vendor_with_status(status, Some("Eksik belge"));
            let err = gate.authorize(&vendor).unwrap_err();
            match err {
                VendorError::NotApproved {
                    status: err_status, ..
                } => assert_eq!(err_status, status),
                other => panic!("expected NotApproved, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_require_approved_blocks_pending_vendor() {
        let vendor = vendor_with_status(VendorStatus::PendingReview, None);
        let gate = gate_with(&vendor);

        let token = jwt().issue(vendor.id, TokenKind::Access).unwrap();
        // Authentication alone succeeds for a pending vendor
        assert!(gate.authenticate(&token).await.is_ok());
        // The composed gate does not
        assert!(gate.require_approved(&token).await.is_err());
    }
}
