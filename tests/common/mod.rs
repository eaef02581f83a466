use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

// one connection only: every checkout of a fresh connection would otherwise
// see its own empty :memory: database
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    pool
}

pub async fn seed_profile(pool: &SqlitePool, user_id: &str, name: &str) {
    sqlx::query("INSERT INTO profiles (user_id,name) VALUES (?,?)")
        .bind(user_id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn likes_of(pool: &SqlitePool, user_id: &str) -> Vec<String> {
    ids(pool, "SELECT liked_id FROM likes WHERE user_id=?", user_id).await
}

pub async fn matches_of(pool: &SqlitePool, user_id: &str) -> Vec<String> {
    ids(
        pool,
        "SELECT matched_id FROM matches WHERE user_id=? ORDER BY id",
        user_id,
    )
    .await
}

pub async fn reveals_of(pool: &SqlitePool, user_id: &str) -> Vec<String> {
    ids(pool, "SELECT match_id FROM reveals WHERE user_id=?", user_id).await
}

pub async fn payments_of(pool: &SqlitePool, user_id: &str) -> Vec<String> {
    ids(
        pool,
        "SELECT payment_ref FROM payments WHERE user_id=? ORDER BY id",
        user_id,
    )
    .await
}

async fn ids(pool: &SqlitePool, sql: &str, user_id: &str) -> Vec<String> {
    sqlx::query_as::<_, (String,)>(sql)
        .bind(user_id)
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|(id,)| id)
        .collect()
}
