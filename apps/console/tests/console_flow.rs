//! Client/view integration tests against the real server running in-process.
//!
//! Exercises the full stack the console user sees: InventoryView →
//! InventoryClient → HTTP → router → repository → SQLite.

use stockroom_console::{InventoryClient, InventoryView};
use stockroom_core::{ProductPatchRequest, ProductRequest};
use stockroom_db::{Database, DbConfig};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("failed to open in-memory database");
        let app = stockroom_api::build_app(db);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mouse_request() -> ProductRequest {
    ProductRequest {
        name: Some("Wireless Mouse".to_string()),
        sku: Some("WM-001".to_string()),
        price: Some("29.99".to_string()),
        stock: Some(150),
    }
}

#[tokio::test]
async fn client_round_trip() {
    let srv = TestServer::spawn().await;
    let client = InventoryClient::new(&srv.base_url);

    // Create
    let created = client.add_item(&mouse_request()).await.unwrap();
    assert_eq!(created.name, "Wireless Mouse");
    assert_eq!(created.price.to_string(), "29.99");

    // Fetch by id
    let fetched = client.fetch_item(&created.id).await.unwrap();
    assert_eq!(fetched.sku, "WM-001");

    // Patch stock
    let patched = client
        .patch_item(
            &created.id,
            &ProductPatchRequest {
                stock: Some(175),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.stock, 175);
    assert_eq!(patched.name, "Wireless Mouse");

    // Delete, then gone
    client.delete_item(&created.id).await.unwrap();
    let err = client.fetch_item(&created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Not found.");
}

#[tokio::test]
async fn client_decodes_field_errors() {
    let srv = TestServer::spawn().await;
    let client = InventoryClient::new(&srv.base_url);

    client.add_item(&mouse_request()).await.unwrap();

    let err = client.add_item(&mouse_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "sku: product with this sku already exists.");
}

#[tokio::test]
async fn view_mutations_keep_table_in_sync() {
    let srv = TestServer::spawn().await;
    let mut view = InventoryView::new(InventoryClient::new(&srv.base_url));

    view.refresh().await;
    assert!(view.items.is_empty());
    assert!(view.error.is_none());

    view.add_item(&mouse_request()).await;
    assert!(view.error.is_none());
    assert_eq!(view.items.len(), 1);
    let id = view.items[0].id.clone();

    view.set_stock(&id, 175).await;
    assert!(view.error.is_none());
    assert_eq!(view.items[0].stock, 175);

    view.delete_item(&id).await;
    assert!(view.error.is_none());
    assert!(view.items.is_empty());
}

#[tokio::test]
async fn view_failed_mutation_sets_banner_but_still_refetches() {
    let srv = TestServer::spawn().await;
    let mut view = InventoryView::new(InventoryClient::new(&srv.base_url));

    view.add_item(&mouse_request()).await;
    assert_eq!(view.items.len(), 1);

    // Duplicate sku: the add fails, but the table must be re-fetched and
    // still show the original item with the banner above it.
    view.add_item(&mouse_request()).await;
    assert_eq!(
        view.error.as_deref(),
        Some("sku: product with this sku already exists.")
    );
    assert_eq!(view.items.len(), 1);

    let rendered = view.render();
    assert!(rendered.starts_with("!! sku:"));
    assert!(rendered.contains("Wireless Mouse"));
}

#[tokio::test]
async fn view_list_is_ordered_by_name() {
    let srv = TestServer::spawn().await;
    let client = InventoryClient::new(&srv.base_url);

    for (name, sku) in [("Zip Ties", "ZT-001"), ("Anvil", "AV-001")] {
        client
            .add_item(&ProductRequest {
                name: Some(name.to_string()),
                sku: Some(sku.to_string()),
                price: Some("5.00".to_string()),
                stock: None,
            })
            .await
            .unwrap();
    }

    let mut view = InventoryView::new(client);
    view.refresh().await;

    let names: Vec<&str> = view.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Anvil", "Zip Ties"]);
}
