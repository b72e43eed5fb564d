mod cli;

use chrono::Utc;
use cli::{Args, Command, ItemArg};
use gc_coffee_orders::adapters::outbound::console::{render_json, StdoutPresenter};
use gc_coffee_orders::adapters::outbound::persistence::Database;
use gc_coffee_orders::application::dto::{CreateOrderItemRequest, CreateOrderRequest};
use gc_coffee_orders::application::use_cases::OrderOrchestrator;
use gc_coffee_orders::config::{self, ConfigFile, CONFIG_FILENAME, DEFAULT_DATA_FILE};
use gc_coffee_orders::logging;
use gc_coffee_orders::ordering::domain::ShippingWindow;
use gc_coffee_orders::ports::inbound::OrderManagementPort;
use gc_coffee_orders::ports::outbound::OutputPresenter;
use gc_coffee_orders::shared::error::ExitCode;
use gc_coffee_orders::shared::Result;
use serde_json::json;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let (config, config_path) = load_config(&args)?;
    logging::init_logging(config.log_level.as_deref(), args.verbose)?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded config file");
    }
    config::warn_unknown_fields(&config);

    // Create adapters (Dependency Injection)
    let data_file = resolve_data_file(&args, &config);
    let database = Database::open(&data_file)?;

    let catalog = config.catalog()?;
    if !catalog.is_empty() {
        database.upsert_products(catalog).await?;
    }

    let orchestrator = OrderOrchestrator::new(
        database.clone(),
        database.clone(),
        database.clone(),
        database.clone(),
    );
    let presenter = StdoutPresenter::new();

    let output = match args.command {
        Command::Create {
            email,
            address,
            postcode,
            items,
        } => {
            let request = build_create_request(email, address, postcode, &items)?;
            let response = orchestrator.create_order(request).await?;
            render_json(&response)?
        }
        Command::Get { order_id } => render_json(&orchestrator.get_order(order_id).await?)?,
        Command::Delete { order_id } => {
            orchestrator.delete_order(order_id).await?;
            render_json(&json!({ "order_id": order_id, "deleted": true }))?
        }
        Command::Ship { from, to } => {
            let window = match (from, to) {
                (Some(start), Some(end)) => ShippingWindow::new(start, end)?,
                _ => ShippingWindow::daily(Utc::now(), config.shipping_cutoff()?),
            };
            orchestrator.update_order_status(window).await?;
            render_json(&json!({
                "status": "SHIPPED",
                "window": { "start": window.start(), "end": window.end() },
            }))?
        }
        Command::Products => render_json(&database.products().await)?,
    };

    presenter.present(&output)
}

/// Explicit `--config` must exist; otherwise look for one in the working directory.
///
/// Returns the config together with the file it came from, if any.
fn load_config(args: &Args) -> Result<(ConfigFile, Option<PathBuf>)> {
    if let Some(path) = &args.config {
        return Ok((config::load_config_from_path(path)?, Some(path.clone())));
    }

    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some(config) => Ok((config, Some(cwd.join(CONFIG_FILENAME)))),
        None => Ok((ConfigFile::default(), None)),
    }
}

/// `--data` wins over the config file, which wins over the default name.
fn resolve_data_file(args: &Args, config: &ConfigFile) -> PathBuf {
    args.data
        .clone()
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

fn build_create_request(
    email: String,
    address: String,
    postcode: String,
    items: &[ItemArg],
) -> Result<CreateOrderRequest> {
    CreateOrderRequest::builder()
        .email(email)
        .address(address)
        .postcode(postcode)
        .items(
            items
                .iter()
                .map(|item| CreateOrderItemRequest::new(item.product_id, item.quantity)),
        )
        .build()
}
