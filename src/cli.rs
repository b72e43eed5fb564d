use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use gc_coffee_orders::ordering::domain::{OrderId, ProductId};
use std::path::PathBuf;
use std::str::FromStr;

/// One `--item` argument: `<PRODUCT_ID>:<QTY>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArg {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product_id, quantity) = s.rsplit_once(':').ok_or_else(|| {
            format!(
                "Invalid item: {}. Expected <PRODUCT_ID>:<QTY> (e.g. 0f8b6c0e-...:2)",
                s
            )
        })?;

        let product_id = product_id
            .parse::<ProductId>()
            .map_err(|e| e.to_string())?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid quantity '{}': {}", quantity, e))?;

        if quantity == 0 {
            return Err("Quantity must be greater than zero".to_string());
        }

        Ok(Self {
            product_id,
            quantity,
        })
    }
}

/// Manage coffee bean orders for Grids & Circles
#[derive(Parser, Debug)]
#[command(name = "gc-orders")]
#[command(version)]
#[command(about = "Manage coffee bean orders: place, look up, delete and ship", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./gc-orders.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the JSON data file (overrides the config file)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Place a new order
    Create {
        /// Customer email address
        #[arg(long)]
        email: String,

        /// Delivery address
        #[arg(long)]
        address: String,

        /// Delivery postcode
        #[arg(long)]
        postcode: String,

        /// Order line as <PRODUCT_ID>:<QTY>; repeat for several lines
        #[arg(long = "item", value_name = "PRODUCT_ID:QTY", required = true)]
        items: Vec<ItemArg>,
    },

    /// Show an order with its items
    Get {
        order_id: OrderId,
    },

    /// Delete an order and its items
    Delete {
        order_id: OrderId,
    },

    /// Mark orders placed in a shipping window as shipped
    ///
    /// Without --from/--to the daily window ending at the most recent
    /// shipping cutoff is used.
    Ship {
        /// Window start (inclusive, RFC 3339)
        #[arg(long, requires = "to")]
        from: Option<DateTime<Utc>>,

        /// Window end (exclusive, RFC 3339)
        #[arg(long, requires = "from")]
        to: Option<DateTime<Utc>>,
    },

    /// List the product catalog
    Products,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
