//! Integration tests for the Profile repository implementation using
//! in-memory SurrealDB.

use sello_core::error::SelloError;
use sello_core::models::profile::{CreateProfile, ProfileRole, UpdateProfile};
use sello_core::repository::{Pagination, ProfileRepository};
use sello_db::repository::SurrealProfileRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> SurrealProfileRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    sello_db::run_migrations(&db).await.unwrap();
    SurrealProfileRepository::new(db)
}

#[tokio::test]
async fn create_and_get_profile() {
    let repo = setup().await;

    let profile = repo
        .create(CreateProfile {
            email: "ana@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();

    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(profile.role, ProfileRole::Customer);
    assert_eq!(profile.client_code, "perezoso_cafe");
    assert_eq!(profile.stamps, 0);
    assert!(profile.email_opt_in);

    let by_id = repo.get_by_id(profile.id).await.unwrap();
    assert_eq!(by_id.email, profile.email);

    let by_email = repo.get_by_email("ana@example.com").await.unwrap();
    assert_eq!(by_email.id, profile.id);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let repo = setup().await;

    repo.create(CreateProfile {
        email: "dup@example.com".into(),
        role: ProfileRole::Customer,
        client_code: "perezoso_cafe".into(),
    })
    .await
    .unwrap();

    let result = repo
        .create(CreateProfile {
            email: "dup@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "cafe_aurora".into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(sello_core::error::SelloError::AlreadyExists { .. })
    ));
}

#[tokio::test]
async fn update_role_and_opt_in() {
    let repo = setup().await;

    let profile = repo
        .create(CreateProfile {
            email: "bruno@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            profile.id,
            UpdateProfile {
                role: Some(ProfileRole::Staff),
                email_opt_in: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.role, ProfileRole::Staff);
    assert!(!updated.email_opt_in);
    assert_eq!(updated.email, "bruno@example.com"); // unchanged
}

#[tokio::test]
async fn credit_and_debit_stamps() {
    let repo = setup().await;

    let profile = repo
        .create(CreateProfile {
            email: "carla@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();

    let after_credit = repo.credit_stamps(profile.id, 4).await.unwrap();
    assert_eq!(after_credit.stamps, 4);

    let after_more = repo.credit_stamps(profile.id, 7).await.unwrap();
    assert_eq!(after_more.stamps, 11);

    let after_debit = repo.debit_stamps(profile.id, 10).await.unwrap();
    assert_eq!(after_debit.stamps, 1);
}

#[tokio::test]
async fn overdraw_is_rejected_by_schema() {
    let repo = setup().await;

    let profile = repo
        .create(CreateProfile {
            email: "dario@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();

    repo.credit_stamps(profile.id, 2).await.unwrap();

    // Balance is 2; a 5-stamp debit would go negative.
    let result = repo.debit_stamps(profile.id, 5).await;
    assert!(result.is_err(), "negative balance must be rejected");
}

#[tokio::test]
async fn set_email_opt_in_by_email() {
    let repo = setup().await;

    let profile = repo
        .create(CreateProfile {
            email: "elena@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();
    assert!(profile.email_opt_in);

    let updated = repo
        .set_email_opt_in("elena@example.com", false)
        .await
        .unwrap();
    assert_eq!(updated.id, profile.id);
    assert!(!updated.email_opt_in);
}

#[tokio::test]
async fn set_email_opt_in_unknown_email_is_not_found() {
    let repo = setup().await;

    let result = repo.set_email_opt_in("ghost@example.com", false).await;
    assert!(matches!(result, Err(SelloError::NotFound { .. })));
}

#[tokio::test]
async fn list_profiles_by_client() {
    let repo = setup().await;

    for i in 0..4 {
        repo.create(CreateProfile {
            email: format!("p{i}@perezoso.example"),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();
    }
    repo.create(CreateProfile {
        email: "other@aurora.example".into(),
        role: ProfileRole::Customer,
        client_code: "cafe_aurora".into(),
    })
    .await
    .unwrap();

    let page = repo
        .list_by_client("perezoso_cafe", Pagination::default())
        .await
        .unwrap();

    assert_eq!(page.total, 4);
    assert!(
        page.items
            .iter()
            .all(|p| p.client_code == "perezoso_cafe")
    );
}

#[tokio::test]
async fn delete_profile() {
    let repo = setup().await;

    let profile = repo
        .create(CreateProfile {
            email: "felix@example.com".into(),
            role: ProfileRole::Customer,
            client_code: "perezoso_cafe".into(),
        })
        .await
        .unwrap();

    repo.delete(profile.id).await.unwrap();

    let result = repo.get_by_id(profile.id).await;
    assert!(result.is_err(), "should not find deleted profile");
}
