use swapi::db::Store;
use swapi::domain::CatalogError;

async fn store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to open in-memory store")
}

#[tokio::test]
async fn test_create_and_verify_user() {
    let store = store().await;
    let users = store.users();

    let user = users
        .create("leia@alderaan.gov", "help-me-obi-wan", true)
        .await
        .unwrap();
    assert_eq!(user.email, "leia@alderaan.gov");
    assert!(user.is_active);

    assert!(
        users
            .verify_password("leia@alderaan.gov", "help-me-obi-wan")
            .await
            .unwrap()
    );
    assert!(
        !users
            .verify_password("leia@alderaan.gov", "wrong")
            .await
            .unwrap()
    );
    assert!(!users.verify_password("nobody@hoth", "x").await.unwrap());

    assert_eq!(users.get_by_id(user.id).await.unwrap(), Some(user.clone()));
    assert_eq!(
        users.get_by_email("leia@alderaan.gov").await.unwrap(),
        Some(user)
    );
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let store = store().await;
    let users = store.users();

    users.create("han@falcon.io", "kessel", true).await.unwrap();
    let err = users
        .create("han@falcon.io", "parsecs", true)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Conflict(ref msg) if msg.contains("han@falcon.io")));
    assert_eq!(users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_inactive_user_never_verifies() {
    let store = store().await;
    let users = store.users();

    users.create("vader@empire.gov", "padme", false).await.unwrap();
    assert!(
        !users
            .verify_password("vader@empire.gov", "padme")
            .await
            .unwrap()
    );
}
