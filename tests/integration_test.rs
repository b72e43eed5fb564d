/// Integration tests for the application layer over the real database adapter
mod test_utilities;

use chrono::{Duration, Utc};
use gc_coffee_orders::prelude::*;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn product(name: &str, price: u64) -> Product {
    Product::new(
        ProductId::generate(),
        name.to_string(),
        "COFFEE_BEAN_PACKAGE".to_string(),
        price,
        None,
    )
    .unwrap()
}

async fn seeded_database(products: &[Product]) -> Database {
    let database = Database::in_memory();
    database.upsert_products(products.to_vec()).await.unwrap();
    database
}

fn orchestrator(
    database: &Database,
) -> OrderOrchestrator<Database, Database, Database, Database> {
    OrderOrchestrator::new(
        database.clone(),
        database.clone(),
        database.clone(),
        database.clone(),
    )
}

fn request(lines: &[(ProductId, u32)]) -> CreateOrderRequest {
    CreateOrderRequest::builder()
        .email("alice@example.com")
        .address("1 Bean Street")
        .postcode("04524")
        .items(
            lines
                .iter()
                .map(|(product_id, quantity)| CreateOrderItemRequest::new(*product_id, *quantity)),
        )
        .build()
        .unwrap()
}

fn assert_not_found(error: &anyhow::Error) {
    let order_error = error.downcast_ref::<OrderError>().expect("OrderError");
    assert!(order_error.is_not_found(), "unexpected error: {}", error);
    assert_eq!(ExitCode::for_error(error), ExitCode::NotFound);
}

#[tokio::test]
async fn test_create_order_happy_path() {
    let narino = product("Columbia Narino", 5000);
    let serra = product("Brazil Serra Do Caparao", 6000);
    let database = seeded_database(&[narino.clone(), serra.clone()]).await;
    let use_case = orchestrator(&database);

    let response = use_case
        .create_order(request(&[(narino.product_id(), 2), (serra.product_id(), 1)]))
        .await
        .unwrap();

    assert_eq!(response.status, OrderStatus::Placed);
    assert_eq!(response.email, "alice@example.com");
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].product_id, narino.product_id());
    assert_eq!(response.items[0].product_name, "Columbia Narino");
    assert_eq!(response.items[0].quantity, 2);
    assert_eq!(response.items[1].product_id, serra.product_id());
    assert_eq!(response.items[1].quantity, 1);
    assert_eq!(response.total_price, 2 * 5000 + 6000);

    let tables = database.snapshot().await;
    assert_eq!(tables.orders.len(), 1);
    assert_eq!(tables.order_items.len(), 2);
}

#[tokio::test]
async fn test_create_order_single_batch_lookup() {
    let narino = product("Columbia Narino", 5000);
    let serra = product("Brazil Serra Do Caparao", 6000);
    let database = seeded_database(&[narino.clone(), serra.clone()]).await;
    let products = RecordingProductRepository::new(database.clone());
    let use_case = OrderOrchestrator::new(
        database.clone(),
        database.clone(),
        products.clone(),
        database.clone(),
    );

    let response = use_case
        .create_order(request(&[
            (serra.product_id(), 1),
            (narino.product_id(), 3),
            (serra.product_id(), 2),
        ]))
        .await
        .unwrap();

    assert_eq!(response.items.len(), 3);
    assert_eq!(products.lookup_count(), 1);
    assert_eq!(
        products.get_lookups()[0],
        vec![serra.product_id(), narino.product_id()]
    );
}

#[tokio::test]
async fn test_create_order_unknown_product_persists_nothing() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);
    let unknown = ProductId::generate();

    let error = use_case
        .create_order(request(&[(narino.product_id(), 1), (unknown, 1)]))
        .await
        .unwrap_err();

    assert_not_found(&error);
    assert!(error.to_string().contains(&unknown.to_string()));
    let tables = database.snapshot().await;
    assert!(tables.orders.is_empty());
    assert!(tables.order_items.is_empty());
}

#[tokio::test]
async fn test_create_order_item_failure_rolls_back_header() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = OrderOrchestrator::new(
        database.clone(),
        database.clone(),
        database.clone(),
        FailingOrderItemRepository::new(database.clone()),
    );

    let error = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("Mock order item repository failure"));
    assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
    assert!(database.snapshot().await.orders.is_empty());
}

#[tokio::test]
async fn test_get_order_matches_created_order() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);

    let created = use_case
        .create_order(request(&[(narino.product_id(), 4)]))
        .await
        .unwrap();
    let fetched = use_case.get_order(created.order_id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_find_order_by_id_returns_header() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);

    let created = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap();
    let order = use_case.find_order_by_id(created.order_id).await.unwrap();

    assert_eq!(order.order_id(), created.order_id);
    assert_eq!(order.email().as_str(), "alice@example.com");
    assert_eq!(order.status(), OrderStatus::Placed);
}

#[tokio::test]
async fn test_get_unknown_order_not_found() {
    let database = Database::in_memory();
    let use_case = orchestrator(&database);

    let error = use_case.get_order(OrderId::generate()).await.unwrap_err();
    assert_not_found(&error);

    let error = use_case
        .find_order_by_id(OrderId::generate())
        .await
        .unwrap_err();
    assert_not_found(&error);
}

#[tokio::test]
async fn test_delete_order_then_get_not_found() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);

    let created = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap();
    use_case.delete_order(created.order_id).await.unwrap();

    assert_not_found(&use_case.get_order(created.order_id).await.unwrap_err());
    let tables = database.snapshot().await;
    assert!(tables.orders.is_empty());
    assert!(tables.order_items.is_empty());
    assert_eq!(tables.products.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_order_not_found() {
    let database = Database::in_memory();
    let use_case = orchestrator(&database);

    let error = use_case.delete_order(OrderId::generate()).await.unwrap_err();
    assert_not_found(&error);
}

#[tokio::test]
async fn test_update_order_status_ships_orders_in_window() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);

    let created = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap();
    let window = ShippingWindow::new(
        created.created_at - Duration::hours(1),
        created.created_at + Duration::hours(1),
    )
    .unwrap();

    use_case.update_order_status(window).await.unwrap();
    let shipped = use_case.get_order(created.order_id).await.unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert!(shipped.updated_at >= created.updated_at);

    use_case.update_order_status(window).await.unwrap();
    let again = use_case.get_order(created.order_id).await.unwrap();
    assert_eq!(again, shipped);
}

#[tokio::test]
async fn test_update_order_status_window_end_is_exclusive() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);

    let created = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap();
    let window =
        ShippingWindow::new(created.created_at - Duration::days(1), created.created_at).unwrap();

    use_case.update_order_status(window).await.unwrap();

    let order = use_case.find_order_by_id(created.order_id).await.unwrap();
    assert_eq!(order.status(), OrderStatus::Placed);
}

#[tokio::test]
async fn test_update_order_status_leaves_other_orders_placed() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let use_case = orchestrator(&database);

    let created = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap();
    let past = Utc::now() - Duration::days(30);
    let window = ShippingWindow::new(past - Duration::days(1), past).unwrap();

    use_case.update_order_status(window).await.unwrap();

    let order = use_case.find_order_by_id(created.order_id).await.unwrap();
    assert_eq!(order.status(), OrderStatus::Placed);
}

#[tokio::test]
async fn test_snapshot_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.json");
    let narino = product("Columbia Narino", 5000);

    let created = {
        let database = Database::open(&path).unwrap();
        database.upsert_products(vec![narino.clone()]).await.unwrap();
        orchestrator(&database)
            .create_order(request(&[(narino.product_id(), 2)]))
            .await
            .unwrap()
    };

    let reopened = Database::open(&path).unwrap();
    let fetched = orchestrator(&reopened)
        .get_order(created.order_id)
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_failed_create_never_reaches_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.json");
    let narino = product("Columbia Narino", 5000);

    let database = Database::open(&path).unwrap();
    database.upsert_products(vec![narino.clone()]).await.unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    orchestrator(&database)
        .create_order(request(&[(ProductId::generate(), 1)]))
        .await
        .unwrap_err();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(Database::open(&path).unwrap().snapshot().await.orders.is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_reads_leave_snapshot_file_in_place() {
    use std::os::unix::fs::MetadataExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.json");
    let narino = product("Columbia Narino", 5000);

    let database = Database::open(&path).unwrap();
    database.upsert_products(vec![narino.clone()]).await.unwrap();
    let use_case = orchestrator(&database);
    let created = use_case
        .create_order(request(&[(narino.product_id(), 1)]))
        .await
        .unwrap();
    let inode = std::fs::metadata(&path).unwrap().ino();
    let contents = std::fs::read_to_string(&path).unwrap();

    use_case.get_order(created.order_id).await.unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().ino(), inode);
    use_case.find_order_by_id(created.order_id).await.unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().ino(), inode);
    database.upsert_products(vec![narino]).await.unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().ino(), inode);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
}

#[tokio::test]
async fn test_response_presented_as_json() {
    let narino = product("Columbia Narino", 5000);
    let database = seeded_database(&[narino.clone()]).await;
    let presenter = MockOutputPresenter::new();

    let response = orchestrator(&database)
        .create_order(request(&[(narino.product_id(), 2)]))
        .await
        .unwrap();
    presenter.present(&render_json(&response).unwrap()).unwrap();

    let outputs = presenter.get_outputs();
    assert_eq!(outputs.len(), 1);
    let json: serde_json::Value = serde_json::from_str(&outputs[0]).unwrap();
    assert_eq!(json["status"], "PLACED");
    assert_eq!(json["items"][0]["quantity"], 2);
    assert_eq!(json["total_price"], 10000);
}
