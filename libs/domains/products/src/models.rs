use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - an inventory record stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Nominal/expected stock level
    pub total_quantity: i32,
    /// Currently sellable stock
    pub available_quantity: i32,
    /// Whether the product is flagged for restocking. Derived from the
    /// quantities on every normal save; the override endpoint writes it
    /// directly.
    #[serde(default)]
    pub need_restock: bool,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub total_quantity: i32,
    #[validate(range(min = 0))]
    pub available_quantity: i32,
}

/// DTO for partially updating an existing product
///
/// Unknown JSON keys are dropped during deserialization rather than
/// rejected; a payload that is empty after that filtering is invalid.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub total_quantity: Option<i32>,
    #[validate(range(min = 0))]
    pub available_quantity: Option<i32>,
}

/// Payload for the restock-flag override endpoint
///
/// The value is deliberately loose: booleans, numbers, and a fixed set
/// of string tokens are accepted (see [`crate::restock::parse_restock_flag`]).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RestockOverride {
    #[schema(value_type = Object)]
    pub need_restock: serde_json::Value,
}

/// Read-only restock view of a product
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestockStatus {
    pub id: Uuid,
    pub need_restock: bool,
    pub available_quantity: i32,
    pub total_quantity: i32,
}

/// Confirmation body for operations that only return a message
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl Product {
    /// Create a new product from a CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            total_quantity: input.total_quantity,
            available_quantity: input.available_quantity,
            need_restock: false,
        }
    }

    /// Apply the supplied fields from an UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(total_quantity) = update.total_quantity {
            self.total_quantity = total_quantity;
        }
        if let Some(available_quantity) = update.available_quantity {
            self.available_quantity = available_quantity;
        }
    }
}

impl UpdateProduct {
    /// True when no updatable field survived deserialization
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.total_quantity.is_none()
            && self.available_quantity.is_none()
    }
}

impl From<&Product> for RestockStatus {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            need_restock: product.need_restock,
            available_quantity: product.available_quantity,
            total_quantity: product.total_quantity,
        }
    }
}
