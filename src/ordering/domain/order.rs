use crate::shared::error::OrderError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum length for an email address (RFC 5321 path limit)
const MAX_EMAIL_LENGTH: usize = 254;

/// NewType wrapper for the order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generates a fresh random identifier for a new order
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for OrderId {
    type Err = OrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| OrderError::validation(format!("Invalid order id '{}': {}", s, e)))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an order.
///
/// `Placed` is the initial state; the nightly shipping batch moves orders to
/// `Shipped`. No other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Shipped,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "PLACED"),
            OrderStatus::Shipped => write!(f, "SHIPPED"),
        }
    }
}

/// NewType wrapper for a customer email address with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: String) -> Result<Self> {
        let email = email.trim().to_string();

        if email.is_empty() {
            return Err(OrderError::validation("Email cannot be empty").into());
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(OrderError::validation(format!(
                "Email is too long ({} bytes). Maximum allowed: {} bytes",
                email.len(),
                MAX_EMAIL_LENGTH
            ))
            .into());
        }

        if email.chars().any(char::is_whitespace) {
            return Err(OrderError::validation("Email must not contain whitespace").into());
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(OrderError::validation(format!("Invalid email: {}", email)).into());
        };

        if local.is_empty() || domain.contains('@') || !is_valid_domain(domain) {
            return Err(OrderError::validation(format!("Invalid email: {}", email)).into());
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_domain(domain: &str) -> bool {
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

impl TryFrom<String> for Email {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order header aggregate.
///
/// Line items live in their own table and reference the order by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    email: Email,
    address: String,
    postcode: String,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a freshly placed order with a generated identifier.
    pub fn place(
        email: Email,
        address: String,
        postcode: String,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id: OrderId::generate(),
            email,
            address,
            postcode,
            status: OrderStatus::Placed,
            created_at: placed_at,
            updated_at: placed_at,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the order to `status`.
    ///
    /// Returns `Ok(true)` when the status changed and `Ok(false)` when the
    /// order already had it (in which case `updated_at` is left alone).
    ///
    /// # Errors
    /// Returns a validation error for `Shipped -> Placed`.
    pub fn transition_to(&mut self, status: OrderStatus, at: DateTime<Utc>) -> Result<bool> {
        match (self.status, status) {
            (current, target) if current == target => Ok(false),
            (OrderStatus::Placed, OrderStatus::Shipped) => {
                self.status = OrderStatus::Shipped;
                self.updated_at = at;
                Ok(true)
            }
            (current, target) => Err(OrderError::validation(format!(
                "Order {} cannot move from {} to {}",
                self.order_id, current, target
            ))
            .into()),
        }
    }
}
