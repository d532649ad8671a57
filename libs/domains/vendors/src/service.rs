//! Vendor service - registration, login, and profile business logic

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum_helpers::{messages, JwtAuth, TokenKind};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{VendorError, VendorResult};
use crate::models::{
    AccessTokenData, LoginData, RegisterVendor, UpdateVendorProfile, Vendor, VendorLogin,
    VendorProfile, VendorSummary,
};
use crate::repository::VendorRepository;

const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_MAX_LEN: usize = 100;

/// Service layer for vendor accounts.
///
/// Owns credential handling (argon2) and token issuance; the lifecycle
/// gate lives in [`crate::gate::VendorGate`].
pub struct VendorService<R: VendorRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: VendorRepository> VendorService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Register a new vendor account.
    ///
    /// Rejects duplicate emails (case-insensitive), out-of-bounds
    /// passwords, and a missing tax sheet reference. The account starts
    /// as `pending_review` and no token is issued; the vendor must log
    /// in separately.
    #[instrument(skip(self, input), fields(store_name = %input.store_name))]
    pub async fn register(&self, input: RegisterVendor) -> VendorResult<VendorSummary> {
        validate_password(&input.password)?;

        if input.tax_sheet_url.trim().is_empty() {
            return Err(VendorError::Validation(
                messages::TAX_SHEET_REQUIRED.to_string(),
            ));
        }

        let email = input.email.trim().to_lowercase();
        if self.repository.email_exists(&email).await? {
            return Err(VendorError::EmailTaken);
        }

        let password_hash = hash_password(&input.password)?;
        let vendor = Vendor::new(input, password_hash);

        let created = self.repository.create(vendor).await?;
        tracing::info!(vendor_id = %created.id, "Vendor registered, pending review");
        Ok(VendorSummary::from(&created))
    }

    /// Verify credentials and issue one access and one refresh token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. The status gate is NOT applied here: non-approved vendors
    /// can log in and read their own profile; only business operations
    /// are blocked.
    #[instrument(skip(self, input))]
    pub async fn login(&self, input: VendorLogin) -> VendorResult<LoginData> {
        let email = input.email.trim().to_lowercase();

        let vendor = self
            .repository
            .get_by_email(&email)
            .await?
            .ok_or(VendorError::InvalidCredentials)?;

        if !verify_password(&input.password, &vendor.password_hash)? {
            return Err(VendorError::InvalidCredentials);
        }

        let access_token = self
            .jwt
            .issue(vendor.id, TokenKind::Access)
            .map_err(|e| VendorError::Internal(e.to_string()))?;
        let refresh_token = self
            .jwt
            .issue(vendor.id, TokenKind::Refresh)
            .map_err(|e| VendorError::Internal(e.to_string()))?;

        tracing::info!(vendor_id = %vendor.id, "Vendor logged in");
        Ok(LoginData {
            access_token,
            refresh_token,
            vendor: VendorSummary::from(&vendor),
        })
    }

    /// Mint a new access token from a refresh token.
    ///
    /// The kind discriminator is checked strictly; an access token
    /// presented here fails the same way a refresh token fails at the
    /// authentication gate.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> VendorResult<AccessTokenData> {
        let claims = self
            .jwt
            .verify(refresh_token)
            .map_err(|_| VendorError::TokenInvalid)?;

        if claims.kind != TokenKind::Refresh {
            return Err(VendorError::TokenKindMismatch);
        }

        let vendor_id = claims.vendor_id().map_err(|_| VendorError::TokenInvalid)?;
        let vendor = self
            .repository
            .get_by_id(vendor_id)
            .await?
            .ok_or(VendorError::UnknownVendor)?;

        let access_token = self
            .jwt
            .issue(vendor.id, TokenKind::Access)
            .map_err(|e| VendorError::Internal(e.to_string()))?;

        Ok(AccessTokenData { access_token })
    }

    /// Apply an allow-listed profile update to an authenticated vendor.
    #[instrument(skip(self, vendor, update), fields(vendor_id = %vendor.id))]
    pub async fn update_profile(
        &self,
        mut vendor: Vendor,
        update: UpdateVendorProfile,
    ) -> VendorResult<VendorProfile> {
        vendor.apply_update(update);
        let updated = self.repository.update(vendor).await?;
        Ok(updated.into())
    }

    /// Change the password of an authenticated vendor.
    #[instrument(skip_all, fields(vendor_id = %vendor.id))]
    pub async fn change_password(
        &self,
        mut vendor: Vendor,
        current_password: &str,
        new_password: &str,
    ) -> VendorResult<()> {
        if !verify_password(current_password, &vendor.password_hash)? {
            return Err(VendorError::WrongCurrentPassword);
        }

        validate_password(new_password)?;

        vendor.password_hash = hash_password(new_password)?;
        vendor.updated_at = chrono::Utc::now();
        self.repository.update(vendor).await?;
        Ok(())
    }
}

impl<R: VendorRepository> Clone for VendorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            jwt: self.jwt.clone(),
        }
    }
}

// Password helpers

fn hash_password(password: &str) -> VendorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VendorError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> VendorResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| VendorError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn validate_password(password: &str) -> VendorResult<()> {
    if password.len() < PASSWORD_MIN_LEN {
        return Err(VendorError::Validation(
            messages::PASSWORD_TOO_SHORT.to_string(),
        ));
    }

    if password.len() > PASSWORD_MAX_LEN {
        return Err(VendorError::Validation(
            messages::PASSWORD_TOO_LONG.to_string(),
        ));
    }

    Ok(())
}
