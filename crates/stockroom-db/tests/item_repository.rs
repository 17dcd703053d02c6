//! Contract tests for `ItemRepository`.
//!
//! Every scenario runs against both store variants: they test the trait,
//! not an implementation, so a new variant only needs a line in `stores()`.

use stockroom_core::{Item, ItemId, ItemSearchCondition, ItemUpdate};
use stockroom_db::{DbConfig, DbError, ItemRepository, ItemStore, MemoryItemRepository, StoreConfig};

async fn stores() -> Vec<ItemStore> {
    vec![
        ItemStore::from_config(&StoreConfig::memory()).await.unwrap(),
        ItemStore::from_config(&StoreConfig::sqlite(DbConfig::in_memory()))
            .await
            .unwrap(),
    ]
}

async fn save_sample(repo: &impl ItemRepository) -> (Item, Item, Item) {
    let item1 = repo.save(Item::new("itemA-1", 10000, 10)).await.unwrap();
    let item2 = repo.save(Item::new("itemA-2", 20000, 20)).await.unwrap();
    let item3 = repo.save(Item::new("itemB-1", 30000, 30)).await.unwrap();
    (item1, item2, item3)
}

async fn find(
    repo: &impl ItemRepository,
    name: Option<&str>,
    max_price: Option<i64>,
) -> Vec<Item> {
    let condition = ItemSearchCondition {
        name_pattern: name.map(str::to_string),
        max_price,
    };
    repo.find_all(&condition).await.unwrap()
}

#[tokio::test]
async fn save_then_find_by_id_returns_saved_record() {
    for store in stores().await {
        let saved = store.save(Item::new("itemA", 10000, 10)).await.unwrap();
        let id = saved.id.expect("saved item has an id");

        let found = store.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(saved), "store: {}", store.kind());
    }
}

#[tokio::test]
async fn find_by_id_missing_is_none() {
    for store in stores().await {
        let found = store.find_by_id(ItemId::new(999)).await.unwrap();
        assert_eq!(found, None, "store: {}", store.kind());
    }
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    for store in stores().await {
        let saved = store.save(Item::new("item1", 10000, 10)).await.unwrap();
        let id = saved.id.unwrap();

        let update = ItemUpdate::new("item2", 20000, 30);
        store.update(id, &update).await.unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, update.name);
        assert_eq!(found.price, update.price);
        assert_eq!(found.quantity, update.quantity);
    }
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_changes_nothing() {
    for store in stores().await {
        let (item1, item2, item3) = save_sample(&store).await;

        let err = store
            .update(ItemId::new(999), &ItemUpdate::new("ghost", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }), "store: {}", store.kind());
        assert!(err.is_not_found());

        assert_eq!(find(&store, None, None).await, vec![item1, item2, item3]);
    }
}

#[tokio::test]
async fn find_all_filters_in_save_order() {
    for store in stores().await {
        let (item1, item2, item3) = save_sample(&store).await;
        let kind = store.kind();

        // no filter
        assert_eq!(
            find(&store, None, None).await,
            vec![item1.clone(), item2.clone(), item3.clone()],
            "store: {kind}"
        );
        assert_eq!(
            find(&store, Some(""), None).await,
            vec![item1.clone(), item2.clone(), item3.clone()],
            "store: {kind}"
        );

        // name
        assert_eq!(
            find(&store, Some("itemA"), None).await,
            vec![item1.clone(), item2.clone()],
            "store: {kind}"
        );
        assert_eq!(
            find(&store, Some("temA"), None).await,
            vec![item1.clone(), item2.clone()],
            "store: {kind}"
        );
        assert_eq!(
            find(&store, Some("itemB"), None).await,
            vec![item3.clone()],
            "store: {kind}"
        );

        // max price
        assert_eq!(
            find(&store, None, Some(10000)).await,
            vec![item1.clone()],
            "store: {kind}"
        );

        // both
        assert_eq!(
            find(&store, Some("itemA"), Some(10000)).await,
            vec![item1.clone()],
            "store: {kind}"
        );
        assert!(find(&store, Some("itemB"), Some(10000)).await.is_empty());
    }
}

#[tokio::test]
async fn find_all_is_repeatable() {
    for store in stores().await {
        save_sample(&store).await;

        let condition = ItemSearchCondition::new().name("item").max_price(20000);
        let first = store.find_all(&condition).await.unwrap();
        let second = store.find_all(&condition).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second, "store: {}", store.kind());
    }
}

#[tokio::test]
async fn find_all_sees_updates() {
    for store in stores().await {
        let (item1, _, _) = save_sample(&store).await;
        let id = item1.id.unwrap();

        store
            .update(id, &ItemUpdate::new("itemB-9", 5000, 1))
            .await
            .unwrap();

        let names: Vec<String> = find(&store, Some("itemB"), None)
            .await
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["itemB-9", "itemB-1"], "store: {}", store.kind());
    }
}

#[tokio::test]
async fn save_with_existing_id_overwrites_in_place() {
    for store in stores().await {
        let (item1, item2, item3) = save_sample(&store).await;

        let mut changed = item2.clone();
        changed.price = 15000;
        let saved = store.save(changed.clone()).await.unwrap();

        assert_eq!(saved, changed);
        assert_eq!(
            find(&store, None, None).await,
            vec![item1, changed, item3],
            "store: {}",
            store.kind()
        );
    }
}

#[tokio::test]
async fn save_with_unknown_id_gets_fresh_id() {
    for store in stores().await {
        let (_, _, item3) = save_sample(&store).await;

        let stray = Item::new("itemC-1", 40000, 40).with_id(ItemId::new(999));
        let saved = store.save(stray).await.unwrap();

        let id = saved.id.unwrap();
        assert_ne!(id, ItemId::new(999), "store: {}", store.kind());
        assert!(id > item3.id.unwrap());
        assert!(store.find_by_id(ItemId::new(999)).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn memory_clear_store_isolates_tests() {
    let repo = MemoryItemRepository::new();
    save_sample(&repo).await;

    repo.clear_store().await;

    assert!(find(&repo, None, None).await.is_empty());
}
