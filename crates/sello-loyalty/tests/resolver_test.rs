//! Integration tests for tenant configuration resolution using
//! in-memory SurrealDB.

use sello_core::error::SelloError;
use sello_core::models::shop::{CreateShop, UpdateShop};
use sello_core::repository::ShopRepository;
use sello_db::repository::SurrealShopRepository;
use sello_loyalty::resolver::ConfigResolver;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB, run migrations, return a shop repo.
async fn setup() -> SurrealShopRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    sello_db::run_migrations(&db).await.unwrap();
    SurrealShopRepository::new(db)
}

#[tokio::test]
async fn resolves_partial_blob_over_defaults() {
    let shops = setup().await;
    shops
        .create(CreateShop {
            code: "perezoso_cafe".into(),
            name: "Perezoso".into(),
            config: Some(serde_json::json!({
                "theme": { "primaryColor": "#F5A623" }
            })),
        })
        .await
        .unwrap();

    let resolver = ConfigResolver::new(shops);
    let config = resolver.resolve("perezoso_cafe").await.unwrap();

    // Authoritative fields come from the row columns.
    assert_eq!(config.code, "perezoso_cafe");
    assert_eq!(config.name, "Perezoso");

    // Patched field wins, the rest of the section keeps defaults.
    assert_eq!(config.theme.primary_color, "#F5A623");
    assert_eq!(config.theme.secondary_color, "#ffffff");
    assert_eq!(config.theme.font_family, "sans-serif");

    // Untouched sections are fully populated from defaults.
    assert_eq!(config.rules.stamps_per_reward, 10);
    assert!(!config.texts.welcome.is_empty());
    assert!(!config.assets.logo_url.is_empty());
}

#[tokio::test]
async fn name_column_wins_over_blob() {
    let shops = setup().await;
    shops
        .create(CreateShop {
            code: "aurora".into(),
            name: "Cafe Aurora".into(),
            // A stale `name` inside the blob must not shadow the column.
            config: Some(serde_json::json!({ "name": "Old Name" })),
        })
        .await
        .unwrap();

    let resolver = ConfigResolver::new(shops);
    let config = resolver.resolve("aurora").await.unwrap();

    assert_eq!(config.name, "Cafe Aurora");
}

#[tokio::test]
async fn absent_code_is_not_found() {
    let shops = setup().await;
    let resolver = ConfigResolver::new(shops);

    let result = resolver.resolve("no_such_cafe").await;
    assert!(matches!(result, Err(SelloError::NotFound { .. })));
}

#[tokio::test]
async fn empty_code_is_rejected() {
    let shops = setup().await;
    let resolver = ConfigResolver::new(shops);

    let result = resolver.resolve("").await;
    assert!(matches!(result, Err(SelloError::Validation { .. })));
}

#[tokio::test]
async fn type_malformed_blob_is_rejected() {
    let shops = setup().await;
    shops
        .create(CreateShop {
            code: "broken".into(),
            name: "Broken".into(),
            config: Some(serde_json::json!({
                "rules": { "stampsPerReward": "ten" }
            })),
        })
        .await
        .unwrap();

    let resolver = ConfigResolver::new(shops);
    let result = resolver.resolve("broken").await;
    assert!(matches!(result, Err(SelloError::Validation { .. })));
}

#[tokio::test]
async fn zero_threshold_is_rejected_at_load_time() {
    let shops = setup().await;
    shops
        .create(CreateShop {
            code: "zero".into(),
            name: "Zero".into(),
            config: Some(serde_json::json!({
                "rules": { "stampsPerReward": 0 }
            })),
        })
        .await
        .unwrap();

    let resolver = ConfigResolver::new(shops);
    let result = resolver.resolve("zero").await;
    assert!(matches!(result, Err(SelloError::Validation { .. })));
}

#[tokio::test]
async fn resolution_sees_config_updates_immediately() {
    let shops = setup().await;
    shops
        .create(CreateShop {
            code: "fresh".into(),
            name: "Fresh".into(),
            config: None,
        })
        .await
        .unwrap();

    let resolver = ConfigResolver::new(shops.clone());
    assert_eq!(
        resolver.resolve("fresh").await.unwrap().rules.stamps_per_reward,
        10
    );

    shops
        .update(
            "fresh",
            UpdateShop {
                name: None,
                config: Some(serde_json::json!({
                    "rules": { "stampsPerReward": 6 }
                })),
            },
        )
        .await
        .unwrap();

    // No caching: the next resolution reflects the stored update.
    assert_eq!(
        resolver.resolve("fresh").await.unwrap().rules.stamps_per_reward,
        6
    );
}
