//! In-memory implementation of VendorRepository.
//!
//! Substitutable storage for tests and local experiments; mirrors the
//! MongoDB implementation's semantics, including the unique-email
//! invariant.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::{VendorError, VendorResult};
use crate::models::Vendor;
use crate::repository::VendorRepository;

#[derive(Clone, Default)]
pub struct InMemoryVendorRepository {
    vendors: Arc<RwLock<HashMap<Uuid, Vendor>>>,
}

impl InMemoryVendorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a vendor directly, bypassing registration. Intended for tests
    /// that need a vendor in a specific lifecycle state.
    pub fn insert(&self, vendor: Vendor) {
        self.vendors
            .write()
            .expect("vendor store poisoned")
            .insert(vendor.id, vendor);
    }
}

#[async_trait]
impl VendorRepository for InMemoryVendorRepository {
    async fn create(&self, vendor: Vendor) -> VendorResult<Vendor> {
        let mut vendors = self.vendors.write().expect("vendor store poisoned");
        if vendors.values().any(|v| v.email == vendor.email) {
            return Err(VendorError::EmailTaken);
        }
        vendors.insert(vendor.id, vendor.clone());
        Ok(vendor)
    }

    async fn get_by_id(&self, id: Uuid) -> VendorResult<Option<Vendor>> {
        let vendors = self.vendors.read().expect("vendor store poisoned");
        Ok(vendors.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> VendorResult<Option<Vendor>> {
        let vendors = self.vendors.read().expect("vendor store poisoned");
        Ok(vendors.values().find(|v| v.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> VendorResult<bool> {
        let vendors = self.vendors.read().expect("vendor store poisoned");
        Ok(vendors.values().any(|v| v.email == email))
    }

    async fn update(&self, vendor: Vendor) -> VendorResult<Vendor> {
        let mut vendors = self.vendors.write().expect("vendor store poisoned");
        if !vendors.contains_key(&vendor.id) {
            return Err(VendorError::UnknownVendor);
        }
        vendors.insert(vendor.id, vendor.clone());
        Ok(vendor)
    }
}
