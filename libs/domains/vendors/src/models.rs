use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Vendor lifecycle status.
///
/// Accounts are created as `pending_review`; the other states are set by
/// an external administrative process directly on storage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VendorStatus {
    /// Awaiting review by the marketplace team
    #[default]
    PendingReview,
    /// May use every vendor-scoped operation
    Approved,
    /// Application rejected; `rejection_reason` may explain why
    Rejected,
    /// Account disabled after approval
    Suspended,
}

/// Store address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub province: String,
    pub district: String,
    pub full_address: String,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// References to uploaded legal documents.
///
/// The upload mechanism itself is outside this service; only the
/// reference strings are stored. The tax sheet is mandatory at
/// registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Documents {
    pub tax_sheet_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_registry_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_circular_url: Option<String>,
}

/// Vendor entity - stored in MongoDB.
///
/// Serde here is the storage codec (the id is stored as `_id`). API
/// responses go through [`VendorProfile`] and [`VendorSummary`] so that
/// `password_hash` and the raw storage id never reach clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Login key; always stored lowercase
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub owner_name: String,
    pub phone: String,
    pub store_name: String,
    #[serde(default)]
    pub store_type: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    pub address: Address,
    pub status: VendorStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub documents: Documents,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for vendor registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterVendor {
    #[validate(length(min = 1, max = 100))]
    pub owner_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 30))]
    pub phone: String,
    /// Length limits are checked in the service so the localized
    /// messages match the rest of the catalog
    pub password: String,
    #[validate(length(min = 1, max = 200))]
    pub store_name: String,
    pub store_type: Option<String>,
    pub tax_number: Option<String>,
    pub address: Address,
    pub tax_sheet_url: String,
}

/// DTO for vendor login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VendorLogin {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// DTO for minting a new access token
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// DTO for changing the password of the authenticated vendor
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// DTO for profile updates; only this allow-listed subset is mutable
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateVendorProfile {
    #[validate(length(min = 1, max = 100))]
    pub owner_name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub store_name: Option<String>,
    pub store_type: Option<String>,
    pub address: Option<Address>,
}

/// Minimal vendor view returned by register and login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorSummary {
    pub id: Uuid,
    pub email: String,
    pub store_name: String,
    pub status: VendorStatus,
}

impl From<&Vendor> for VendorSummary {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            email: vendor.email.clone(),
            store_name: vendor.store_name.clone(),
            status: vendor.status,
        }
    }
}

/// Full vendor view for the profile endpoint.
///
/// This mapping is the serialization boundary: `password_hash` and the
/// storage `_id` representation are structurally absent, so they cannot
/// leak regardless of future entity fields.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorProfile {
    pub id: Uuid,
    pub email: String,
    pub owner_name: String,
    pub phone: String,
    pub store_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    pub address: Address,
    pub status: VendorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub documents: Documents,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vendor> for VendorProfile {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            email: vendor.email,
            owner_name: vendor.owner_name,
            phone: vendor.phone,
            store_name: vendor.store_name,
            store_type: vendor.store_type,
            tax_number: vendor.tax_number,
            address: vendor.address,
            status: vendor.status,
            rejection_reason: vendor.rejection_reason,
            documents: vendor.documents,
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}

/// Login response payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginData {
    pub access_token: String,
    pub refresh_token: String,
    pub vendor: VendorSummary,
}

/// Refresh response payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccessTokenData {
    pub access_token: String,
}

impl Vendor {
    /// Build a new vendor from the registration payload.
    ///
    /// The email is normalized to lowercase and the status starts as
    /// `pending_review`.
    pub fn new(input: RegisterVendor, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: input.email.trim().to_lowercase(),
            password_hash,
            owner_name: input.owner_name,
            phone: input.phone,
            store_name: input.store_name,
            store_type: input.store_type,
            tax_number: input.tax_number,
            address: input.address,
            status: VendorStatus::PendingReview,
            rejection_reason: None,
            documents: Documents {
                tax_sheet_url: input.tax_sheet_url,
                trade_registry_url: None,
                signature_circular_url: None,
            },
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial profile update
    pub fn apply_update(&mut self, update: UpdateVendorProfile) {
        if let Some(owner_name) = update.owner_name {
            self.owner_name = owner_name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(store_name) = update.store_name {
            self.store_name = store_name;
        }
        if let Some(store_type) = update.store_type {
            self.store_type = Some(store_type);
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_input() -> RegisterVendor {
        RegisterVendor {
            owner_name: "Ayşe Yılmaz".to_string(),
            email: "Ayse@Example.COM".to_string(),
            phone: "+905551112233".to_string(),
            password: "s3cret!".to_string(),
            store_name: "Yılmaz Manav".to_string(),
            store_type: Some("market".to_string()),
            tax_number: None,
            address: Address {
                province: "İstanbul".to_string(),
                district: "Kadıköy".to_string(),
                full_address: "Moda Cad. 1".to_string(),
                postal_code: None,
            },
            tax_sheet_url: "/uploads/tax-sheet.pdf".to_string(),
        }
    }

    #[test]
    fn test_new_vendor_normalizes_email_and_starts_pending() {
        let vendor = Vendor::new(register_input(), "hash".to_string());
        assert_eq!(vendor.email, "ayse@example.com");
        assert_eq!(vendor.status, VendorStatus::PendingReview);
        assert!(vendor.rejection_reason.is_none());
        assert_eq!(vendor.documents.tax_sheet_url, "/uploads/tax-sheet.pdf");
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(VendorStatus::PendingReview.to_string(), "pending_review");
        assert_eq!(
            "on_the_way".parse::<VendorStatus>().ok(),
            None::<VendorStatus>
        );
        assert_eq!(
            "suspended".parse::<VendorStatus>().unwrap(),
            VendorStatus::Suspended
        );
        let json = serde_json::to_value(VendorStatus::PendingReview).unwrap();
        assert_eq!(json, serde_json::json!("pending_review"));
    }

    #[test]
    fn test_profile_never_contains_password_hash() {
        let vendor = Vendor::new(register_input(), "super-secret-hash".to_string());
        let profile = VendorProfile::from(vendor);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("_id"));
    }

    #[test]
    fn test_entity_stores_id_as_underscore_id() {
        let vendor = Vendor::new(register_input(), "hash".to_string());
        let json = serde_json::to_value(&vendor).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_apply_update_touches_only_allowed_fields() {
        let mut vendor = Vendor::new(register_input(), "hash".to_string());
        let created_email = vendor.email.clone();

        vendor.apply_update(UpdateVendorProfile {
            store_name: Some("Yeni Mağaza".to_string()),
            ..Default::default()
        });

        assert_eq!(vendor.store_name, "Yeni Mağaza");
        assert_eq!(vendor.email, created_email);
        assert_eq!(vendor.owner_name, "Ayşe Yılmaz");
    }
}
