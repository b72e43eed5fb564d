use crate::ordering::domain::{Email, Order, ProductId};
use crate::shared::error::OrderError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// One requested line: which product and how many
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CreateOrderItemRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// CreateOrderRequest - request DTO for the order creation use case
///
/// Construct through [`CreateOrderRequest::builder`], which performs the
/// request-level validation (email shape, non-empty delivery fields, at
/// least one line, positive quantities).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    pub email: Email,
    pub address: String,
    pub postcode: String,
    pub items: Vec<CreateOrderItemRequest>,
}

impl CreateOrderRequest {
    pub fn builder() -> CreateOrderRequestBuilder {
        CreateOrderRequestBuilder::default()
    }

    /// Builds the order header this request describes.
    pub fn to_order(&self, placed_at: DateTime<Utc>) -> Order {
        Order::place(
            self.email.clone(),
            self.address.clone(),
            self.postcode.clone(),
            placed_at,
        )
    }
}

/// Builder for [`CreateOrderRequest`]
#[derive(Debug, Default)]
pub struct CreateOrderRequestBuilder {
    email: Option<String>,
    address: Option<String>,
    postcode: Option<String>,
    items: Vec<CreateOrderItemRequest>,
}

impl CreateOrderRequestBuilder {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    pub fn item(mut self, product_id: ProductId, quantity: u32) -> Self {
        self.items.push(CreateOrderItemRequest::new(product_id, quantity));
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = CreateOrderItemRequest>) -> Self {
        self.items.extend(items);
        self
    }

    /// # Errors
    /// Returns `OrderError::Validation` for any missing or malformed field.
    pub fn build(self) -> Result<CreateOrderRequest> {
        let email = Email::new(required("email", self.email)?)?;
        let address = required("address", self.address)?;
        let postcode = required("postcode", self.postcode)?;

        if self.items.is_empty() {
            return Err(OrderError::validation("An order needs at least one item").into());
        }

        if let Some(line) = self.items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::validation(format!(
                "Quantity for product {} must be greater than zero",
                line.product_id
            ))
            .into());
        }

        Ok(CreateOrderRequest {
            email,
            address,
            postcode,
            items: self.items,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(OrderError::validation(format!("{} is required", field)).into()),
    }
}
