use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub use axum_helpers::Pagination;

/// Product visibility status
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
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

/// Product entity - stored in MongoDB and returned to clients as-is.
///
/// The application `id` is a plain field; MongoDB's own `_id` is never
/// part of this type, so it cannot appear in a response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Application-level identifier, generated at creation
    pub id: Uuid,
    /// Owning vendor; every query is scoped by this
    pub vendor_id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Sales unit, e.g. "kg" or "adet"
    pub unit: String,
    pub stock: i32,
    /// Stock level at or below which the product counts as low-stock
    pub min_stock_threshold: i32,
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1, max = 30))]
    pub unit: String,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[serde(default = "default_min_stock_threshold")]
    #[validate(range(min = 0))]
    pub min_stock_threshold: i32,
    #[serde(default)]
    pub status: ProductStatus,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

fn default_min_stock_threshold() -> i32 {
    10
}

/// DTO for partially updating a product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(min = 1, max = 30))]
    pub unit: Option<String>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[validate(range(min = 0))]
    pub min_stock_threshold: Option<i32>,
    pub status: Option<ProductStatus>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Filter by category
    pub category: Option<String>,
    /// Filter by status
    pub status: Option<ProductStatus>,
    /// Only products at or below their minimum stock threshold
    #[serde(default)]
    pub low_stock_only: bool,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size (bounded)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    50
}

const MAX_LIMIT: i64 = 100;

impl ProductFilter {
    /// Clamp pagination into sane bounds.
    pub fn page_bounds(&self) -> (i64, i64) {
        let limit = self.limit.clamp(1, MAX_LIMIT);
        let page = self.page.max(1);
        (page, limit)
    }

    /// Documents to skip for the current page.
    pub fn offset(&self) -> u64 {
        let (page, limit) = self.page_bounds();
        ((page - 1) * limit) as u64
    }
}

impl Product {
    /// Create a new product owned by the given vendor
    pub fn new(vendor_id: Uuid, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            vendor_id,
            name: input.name,
            category: input.category,
            price: input.price,
            unit: input.unit,
            stock: input.stock,
            min_stock_threshold: input.min_stock_threshold,
            status: input.status,
            description: input.description,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(min_stock_threshold) = update.min_stock_threshold {
            self.min_stock_threshold = min_stock_threshold;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }

    /// Whether the product is at or below its minimum stock threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock_threshold
    }

    /// Toggle between active and inactive
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            ProductStatus::Active => ProductStatus::Inactive,
            ProductStatus::Inactive => ProductStatus::Active,
        };
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Domates".to_string(),
            category: "Sebze".to_string(),
            price: 24.5,
            unit: "kg".to_string(),
            stock: 40,
            min_stock_threshold: 10,
            status: ProductStatus::Active,
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn test_new_product_stamps_owner_and_id() {
        let vendor_id = Uuid::new_v4();
        let product = Product::new(vendor_id, create_input());
        assert_eq!(product.vendor_id, vendor_id);
        assert_eq!(product.status, ProductStatus::Active);
    }

    #[test]
    fn test_default_min_stock_threshold_is_ten() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "Salatalık",
            "category": "Sebze",
            "price": 12.0,
            "unit": "kg",
            "stock": 5
        }))
        .unwrap();
        assert_eq!(input.min_stock_threshold, 10);
        assert_eq!(input.status, ProductStatus::Active);
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        let mut product = Product::new(Uuid::new_v4(), create_input());
        product.stock = 10;
        product.min_stock_threshold = 10;
        assert!(product.is_low_stock());
        product.stock = 11;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_toggle_status_flips_both_ways() {
        let mut product = Product::new(Uuid::new_v4(), create_input());
        product.toggle_status();
        assert_eq!(product.status, ProductStatus::Inactive);
        product.toggle_status();
        assert_eq!(product.status, ProductStatus::Active);
    }

    #[test]
    fn test_filter_page_bounds_are_clamped() {
        let filter = ProductFilter {
            page: 0,
            limit: 1000,
            ..Default::default()
        };
        assert_eq!(filter.page_bounds(), (1, 100));
        assert_eq!(filter.offset(), 0);

        let filter = ProductFilter {
            page: 3,
            limit: 20,
            ..Default::default()
        };
        assert_eq!(filter.offset(), 40);
    }

}
