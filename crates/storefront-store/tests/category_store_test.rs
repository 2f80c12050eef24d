use resource_store::{Backend, MockBackend, RequestError, TypedStoreClient};
use serde_json::json;
use std::sync::Arc;
use storefront_store::clients::CategoryStore;
use storefront_store::model::{CategoryCreate, CategoryUpdate};
use storefront_store::stores::categories;

/// Spawns a category container against a scripted backend.
fn spawn(backend: Arc<MockBackend>) -> CategoryStore {
    let (store, client) = categories::new();
    tokio::spawn(store.run(backend as Arc<dyn Backend>));
    client
}

#[tokio::test]
async fn fetch_replaces_items_preserving_server_order() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/categories").return_json(json!([
        {"id": "2", "name": "Decks"},
        {"id": "1", "name": "Wheels", "description": "All sizes"},
    ]));

    let client = spawn(backend.clone());
    client.refresh().await.expect("Failed to fetch categories");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "2");
    assert_eq!(state.items[1].name, "Wheels");
    assert_eq!(state.items[1].description.as_deref(), Some("All sizes"));
    assert!(!state.is_loading);
    assert!(state.error.is_none());

    backend.verify();
}

#[tokio::test]
async fn empty_list_resolves_to_empty_state() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/categories").return_json(json!([]));

    let client = spawn(backend.clone());
    client.refresh().await.expect("Failed to fetch categories");

    let state = client.snapshot().await.expect("Failed to read state");
    assert!(state.items.is_empty());
    assert!(!state.is_loading);
    assert!(state.error.is_none());

    backend.verify();
}

#[tokio::test]
async fn repeated_fetch_is_idempotent() {
    let backend = Arc::new(MockBackend::new());
    let list = json!([{"id": "1", "name": "Decks"}]);
    backend.expect_get("/categories").return_json(list.clone());
    backend.expect_get("/categories").return_json(list);

    let client = spawn(backend.clone());
    client.refresh().await.expect("First fetch failed");
    client.refresh().await.expect("Second fetch failed");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Decks");

    backend.verify();
}

#[tokio::test]
async fn create_with_name_only_appends_category() {
    let backend = Arc::new(MockBackend::new());
    backend
        .expect_get("/categories")
        .return_json(json!([{"id": "1", "name": "Decks"}]));
    backend
        .expect_post("/categories")
        .return_json(json!({"id": "2", "name": "Trucks"}));

    let client = spawn(backend.clone());
    client.refresh().await.expect("Failed to fetch categories");
    client
        .create_category(CategoryCreate {
            name: "Trucks".to_string(),
            description: None,
            image: None,
        })
        .await
        .expect("Failed to create category");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 2);
    let created = &state.items[1];
    assert_eq!(created.name, "Trucks");
    assert!(created.description.is_none());
    assert!(created.image.is_none());

    backend.verify();
}

#[tokio::test]
async fn update_replaces_matching_item_in_place() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/categories").return_json(json!([
        {"id": "1", "name": "Decks"},
        {"id": "2", "name": "Trucks"},
    ]));
    backend
        .expect_put("/categories/1")
        .return_json(json!({"id": "1", "name": "Longboard Decks"}));

    let client = spawn(backend.clone());
    client.refresh().await.expect("Failed to fetch categories");
    client
        .update_category(
            "1".to_string(),
            CategoryUpdate {
                name: Some("Longboard Decks".to_string()),
                description: None,
                image: None,
            },
        )
        .await
        .expect("Failed to update category");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].name, "Longboard Decks");
    assert_eq!(state.items[1].name, "Trucks");

    backend.verify();
}

#[tokio::test]
async fn update_of_unknown_id_leaves_list_untouched() {
    let backend = Arc::new(MockBackend::new());
    backend
        .expect_get("/categories")
        .return_json(json!([{"id": "1", "name": "Decks"}]));
    backend
        .expect_put("/categories/404")
        .return_json(json!({"id": "404", "name": "Ghost"}));

    let client = spawn(backend.clone());
    client.refresh().await.expect("Failed to fetch categories");
    client
        .update_category(
            "404".to_string(),
            CategoryUpdate {
                name: Some("Ghost".to_string()),
                description: None,
                image: None,
            },
        )
        .await
        .expect("Update should still settle");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Decks");

    backend.verify();
}

#[tokio::test]
async fn delete_removes_item_and_tolerates_unknown_id() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/categories").return_json(json!([
        {"id": "1", "name": "Decks"},
        {"id": "2", "name": "Trucks"},
    ]));
    backend.expect_delete("/categories/1").return_json(json!({}));
    backend.expect_delete("/categories/404").return_json(json!({}));

    let client = spawn(backend.clone());
    client.refresh().await.expect("Failed to fetch categories");

    client.remove("1".to_string()).await.expect("Failed to delete");
    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "2");

    client
        .remove("404".to_string())
        .await
        .expect("Unknown delete should still settle");
    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1);

    backend.verify();
}

#[tokio::test]
async fn rejected_fetch_keeps_items_and_records_error() {
    let backend = Arc::new(MockBackend::new());
    backend
        .expect_get("/categories")
        .return_json(json!([{"id": "1", "name": "Decks"}]));
    backend
        .expect_get("/categories")
        .return_err(RequestError::Api("service unavailable".to_string()));

    let client = spawn(backend.clone());
    client.refresh().await.expect("First fetch failed");

    let err = client.refresh().await.expect_err("Second fetch should fail");
    assert_eq!(err, RequestError::Api("service unavailable".to_string()));

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1, "stale items survive a failed refresh");
    assert_eq!(state.error.as_deref(), Some("service unavailable"));
    assert!(!state.is_loading);

    client.dismiss_error().await.expect("Failed to clear error");
    let state = client.snapshot().await.expect("Failed to read state");
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);

    backend.verify();
}

#[tokio::test]
async fn product_page_lands_in_metadata() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/categories/1/products").return_json(json!({
        "products": [
            {"id": "p1", "name": "Cruiser", "price": 89.5},
            {"id": "p2", "name": "Street Deck", "price": 59.0, "rating": 4.5},
        ],
        "totalPages": 3,
        "currentPage": 1,
        "totalProducts": 30,
    }));

    let client = spawn(backend.clone());
    client
        .fetch_products("1".to_string(), 1, 12)
        .await
        .expect("Failed to fetch product page");

    let state = client.snapshot().await.expect("Failed to read state");
    let page = state.meta.expect("Expected a cached product page");
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.products[1].rating, Some(4.5));
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_products, 30);
    assert!(state.items.is_empty(), "page fetch never touches the list");

    backend.verify();
}
