//! Integration tests for SeaOrmTagRepository
//!
//! Each test runs against its own in-memory SQLite database with the
//! migrations applied, so no external services are needed.
//!
//! ```bash
//! cargo test -p infrastructure --test tag_repository_tests
//! ```

use domain::{
    DomainError, ItemId, ListParams, Tag, TagId, TagQuery, TagRepository, TagType, TagUid,
};
use infrastructure::database::entities::items;
use infrastructure::{DatabaseConfig, SeaOrmTagRepository, connect};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Helper to create a migrated, single-connection in-memory database
async fn create_test_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connect_timeout_secs: 5,
    };
    let db = connect(&config)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Setup an item (required for the tag -> item foreign key)
async fn setup_item(db: &DatabaseConnection, id: &str, name: &str) {
    items::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        description: Set(None),
    }
    .insert(db)
    .await
    .expect("Failed to insert item");
}

fn uid(raw: &str) -> TagUid {
    TagUid::new(raw).unwrap()
}

fn query(skip: &str, limit: &str, sort: Option<&str>) -> TagQuery {
    ListParams {
        skip: Some(skip.to_string()),
        limit: Some(limit.to_string()),
        sort: sort.map(String::from),
        tag_type: None,
    }
    .translate()
    .unwrap()
}

#[tokio::test]
async fn test_create_and_find_tag() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    let tag = Tag::provision(uid("TEST_CREATE_1"));
    let created = repo.create(&tag).await.expect("Failed to create tag");
    assert_eq!(created.id(), tag.id());

    let by_id = repo
        .find_by_id(tag.id())
        .await
        .expect("Failed to find tag")
        .expect("Tag not found");
    let by_uid = repo
        .find_by_uid(&uid("TEST_CREATE_1"))
        .await
        .expect("Failed to find tag")
        .expect("Tag not found");

    assert_eq!(by_id, by_uid);
    assert_eq!(by_id.tag_type(), TagType::Unknown);
    assert!(by_id.item().is_none());
}

#[tokio::test]
async fn test_find_nonexistent_tag() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    assert!(repo.find_by_id(&TagId::generate()).await.unwrap().is_none());
    assert!(repo.find_by_uid(&uid("NOPE")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_uid_is_conflict() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    repo.create(&Tag::provision(uid("DUP"))).await.unwrap();
    let result = repo.create(&Tag::provision(uid("DUP"))).await;

    assert_eq!(result, Err(DomainError::UidConflict("DUP".to_string())));
}

#[tokio::test]
async fn test_save_and_populate_item() {
    let db = create_test_db().await;
    setup_item(&db, "ITEM1", "Cordless drill").await;
    let repo = SeaOrmTagRepository::new(db);

    let mut tag = repo.create(&Tag::provision(uid("TEST_SAVE"))).await.unwrap();
    tag.set_type(TagType::Item);
    tag.assign_item(Some(ItemId::new("ITEM1").unwrap()));

    let saved = repo.save(&tag).await.expect("Failed to save tag");
    assert_eq!(saved.tag_type(), TagType::Item);
    assert_eq!(saved.uid().map(TagUid::as_str), Some("TEST_SAVE"));

    let populated = repo.populate_item(saved).await.unwrap();
    let item = populated.item().expect("item should be populated");
    assert_eq!(item.id.as_str(), "ITEM1");
    assert_eq!(item.name, "Cordless drill");
}

#[tokio::test]
async fn test_save_with_unknown_item_is_store_error() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    let mut tag = repo.create(&Tag::provision(uid("TEST_FK"))).await.unwrap();
    tag.assign_item(Some(ItemId::new("MISSING").unwrap()));

    let result = repo.save(&tag).await;
    assert!(matches!(result, Err(DomainError::Store(_))));
}

#[tokio::test]
async fn test_populate_without_item() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    let tag = repo.create(&Tag::provision(uid("PLAIN"))).await.unwrap();
    let populated = repo.populate_item(tag).await.unwrap();

    assert!(populated.item().is_none());
}

#[tokio::test]
async fn test_remove_tag() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    let tag = repo.create(&Tag::provision(uid("TEST_DELETE"))).await.unwrap();
    let removed = repo.remove(&tag).await.expect("Failed to remove tag");
    assert_eq!(removed.id(), tag.id());

    assert!(repo.find_by_id(tag.id()).await.unwrap().is_none());

    // A second removal finds nothing to delete
    assert!(matches!(
        repo.remove(&tag).await,
        Err(DomainError::TagNotFound(_))
    ));
}

#[tokio::test]
async fn test_find_many_sort_skip_limit() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    for raw in ["C", "A", "E", "B", "D"] {
        repo.create(&Tag::provision(uid(raw))).await.unwrap();
    }

    let uids = |tags: Vec<Tag>| -> Vec<String> {
        tags.iter()
            .filter_map(|t| t.uid().map(|u| u.as_str().to_string()))
            .collect()
    };

    let page = repo.find_many(&query("1", "2", Some("uid"))).await.unwrap();
    assert_eq!(uids(page), vec!["B", "C"]);

    let page = repo.find_many(&query("0", "3", Some("-uid"))).await.unwrap();
    assert_eq!(uids(page), vec!["E", "D", "C"]);

    let page = repo.find_many(&query("10", "5", None)).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_find_many_type_filter() {
    let db = create_test_db().await;
    let repo = SeaOrmTagRepository::new(db);

    let mut mode = repo.create(&Tag::provision(uid("MODE"))).await.unwrap();
    repo.create(&Tag::provision(uid("OTHER"))).await.unwrap();
    mode.set_type(TagType::Mode);
    repo.save(&mode).await.unwrap();

    let query = ListParams {
        tag_type: Some("mode".to_string()),
        ..Default::default()
    }
    .translate()
    .unwrap();
    let found = repo.find_many(&query).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), mode.id());
}
