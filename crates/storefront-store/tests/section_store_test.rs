use resource_store::{Backend, MockBackend, TypedStoreClient};
use serde_json::json;
use std::sync::Arc;
use storefront_store::clients::{ComingSoonStore, HomeSectionStore};
use storefront_store::model::{ComingSoonSectionCreate, HomeSectionCreate, HomeSectionUpdate};
use storefront_store::stores::{coming_soon, home_sections};

fn spawn_home(backend: Arc<MockBackend>) -> HomeSectionStore {
    let (store, client) = home_sections::new();
    tokio::spawn(store.run(backend as Arc<dyn Backend>));
    client
}

fn spawn_coming_soon(backend: Arc<MockBackend>) -> ComingSoonStore {
    let (store, client) = coming_soon::new();
    tokio::spawn(store.run(backend as Arc<dyn Backend>));
    client
}

#[tokio::test]
async fn admin_list_and_active_list_are_cached_separately() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/home-sections/admin/all").return_json(json!([
        {"id": "1", "title": "Summer Sale", "isActive": true, "position": 0},
        {"id": "2", "title": "Draft Banner", "isActive": false, "position": 1},
    ]));
    backend.expect_get("/home-sections/active").return_json(json!([
        {"id": "1", "title": "Summer Sale", "isActive": true, "position": 0},
    ]));

    let client = spawn_home(backend.clone());
    client.refresh().await.expect("Failed to fetch admin list");
    client.fetch_active().await.expect("Failed to fetch active list");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 2, "admin list holds drafts too");
    assert_eq!(state.meta.len(), 1, "active list holds only visible sections");
    assert_eq!(state.meta[0].title, "Summer Sale");

    backend.verify();
}

#[tokio::test]
async fn section_crud_merges_into_admin_list() {
    let backend = Arc::new(MockBackend::new());
    backend
        .expect_get("/home-sections/admin/all")
        .return_json(json!([]));
    backend.expect_post("/home-sections/admin").return_json(json!(
        {"id": "1", "title": "New Arrivals", "subtitle": "Fresh decks", "isActive": true, "position": 0}
    ));
    backend.expect_put("/home-sections/admin/1").return_json(json!(
        {"id": "1", "title": "New Arrivals", "isActive": false, "position": 0}
    ));
    backend
        .expect_delete("/home-sections/admin/1")
        .return_json(json!({}));

    let client = spawn_home(backend.clone());
    client.refresh().await.expect("Failed to fetch sections");

    client
        .create_section(HomeSectionCreate {
            title: "New Arrivals".to_string(),
            subtitle: Some("Fresh decks".to_string()),
            image: None,
            link: None,
            is_active: true,
            position: 0,
        })
        .await
        .expect("Failed to create section");
    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].subtitle.as_deref(), Some("Fresh decks"));

    client
        .update_section(
            "1".to_string(),
            HomeSectionUpdate {
                title: None,
                subtitle: None,
                image: None,
                link: None,
                is_active: Some(false),
                position: None,
            },
        )
        .await
        .expect("Failed to update section");
    let state = client.snapshot().await.expect("Failed to read state");
    assert!(!state.items[0].is_active);

    client.remove("1".to_string()).await.expect("Failed to delete");
    let state = client.snapshot().await.expect("Failed to read state");
    assert!(state.items.is_empty());

    backend.verify();
}

#[tokio::test]
async fn coming_soon_active_list_lands_in_metadata() {
    let backend = Arc::new(MockBackend::new());
    backend.expect_get("/coming-soon-sections/active").return_json(json!([
        {"id": "1", "title": "Next Drop", "releaseDate": "2026-09-15", "isActive": true, "position": 0},
    ]));

    let client = spawn_coming_soon(backend.clone());
    client.fetch_active().await.expect("Failed to fetch active list");

    let state = client.snapshot().await.expect("Failed to read state");
    assert!(state.items.is_empty());
    assert_eq!(state.meta.len(), 1);
    assert_eq!(state.meta[0].release_date.as_deref(), Some("2026-09-15"));

    backend.verify();
}

#[tokio::test]
async fn coming_soon_create_appends_to_admin_list() {
    let backend = Arc::new(MockBackend::new());
    backend
        .expect_get("/coming-soon-sections/admin/all")
        .return_json(json!([]));
    backend
        .expect_post("/coming-soon-sections/admin")
        .return_json(json!(
            {"id": "1", "title": "Next Drop", "isActive": false, "position": 0}
        ));

    let client = spawn_coming_soon(backend.clone());
    client.refresh().await.expect("Failed to fetch sections");
    client
        .create_section(ComingSoonSectionCreate {
            title: "Next Drop".to_string(),
            subtitle: None,
            image: None,
            release_date: None,
            is_active: false,
            position: 0,
        })
        .await
        .expect("Failed to create section");

    let state = client.snapshot().await.expect("Failed to read state");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Next Drop");

    backend.verify();
}
