//! Cart line items and the product info they are built from

use crate::error::{CartError, CartResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product as presented to the cart, before it has a quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Opaque product identifier, stable across sessions
    pub id: String,

    /// Display name
    pub title: String,

    /// Display image reference
    pub image_url: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ProductInfo {
    /// Create product info
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Reject products the cart cannot key
    pub fn validate(&self) -> CartResult<()> {
        if self.id.trim().is_empty() {
            return Err(CartError::InvalidProduct(
                "product id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One distinct product in the cart together with its quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Always at least 1 while the item is in a cart
    pub quantity: u32,
}

impl LineItem {
    /// Build a fresh line item with quantity 1
    pub fn from_product(product: ProductInfo) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }

    /// Unit price times quantity, `None` if it does not fit in a `Decimal`
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}
