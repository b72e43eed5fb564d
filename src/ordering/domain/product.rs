use crate::shared::error::OrderError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum length for product names and categories
const MAX_PRODUCT_TEXT_LENGTH: usize = 100;

/// NewType wrapper for the catalog product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ProductId {
    type Err = OrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| OrderError::validation(format!("Invalid product id '{}': {}", s, e)))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog product as seen by the ordering context (read-only here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    product_id: ProductId,
    name: String,
    category: String,
    /// Unit price in minor currency units
    price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        name: String,
        category: String,
        price: u64,
        description: Option<String>,
    ) -> Result<Self> {
        validate_text("Product name", &name)?;
        validate_text("Product category", &category)?;

        Ok(Self {
            product_id,
            name,
            category,
            price,
            description,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::validation(format!("{} cannot be empty", field)).into());
    }
    if value.len() > MAX_PRODUCT_TEXT_LENGTH {
        return Err(OrderError::validation(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            MAX_PRODUCT_TEXT_LENGTH
        ))
        .into());
    }
    Ok(())
}
