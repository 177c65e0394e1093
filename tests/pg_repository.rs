//! Postgres repository tests. Each test gets a fresh database with the
//! embedded migrations applied; run with `DATABASE_URL` set and
//! `cargo test -- --ignored`.

use std::time::Duration;

use product_service::models::Product;
use product_service::repository::{PgProductRepository, ProductRepository};
use sqlx::PgPool;
use uuid::Uuid;

fn product(name: &str, price: f64) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at Postgres"]
async fn find_all_lists_in_creation_order(pool: PgPool) {
    let repo = PgProductRepository::new(pool);

    let mut inserted = Vec::new();
    for (name, price) in [("keyboard", 49.9), ("mouse", 19.5), ("monitor", 199.0)] {
        inserted.push(repo.insert(product(name, price)).await.unwrap());
        // keep created_at distinct so ordering never falls back to the random id
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(repo.find_all().await.unwrap(), inserted);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at Postgres"]
async fn find_by_id_returns_stored_row_or_none(pool: PgPool) {
    let repo = PgProductRepository::new(pool);
    let stored = repo.insert(product("lamp", 24.99)).await.unwrap();

    assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored));
    assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at Postgres"]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let repo = PgProductRepository::new(pool);
    let stored = repo.insert(product("cable", 5.0)).await.unwrap();

    assert!(repo.delete(stored.id).await.unwrap());
    assert!(!repo.delete(stored.id).await.unwrap());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at Postgres"]
async fn price_survives_storage_exactly(pool: PgPool) {
    let repo = PgProductRepository::new(pool);
    let stored = repo
        .insert(product("precise", 1.0715660391465826e-75))
        .await
        .unwrap();

    let found = repo.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(found.price, 1.0715660391465826e-75);
}
