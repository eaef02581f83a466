use seeyou::{AppState, payments::Gateways};
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,seeyou=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(dotenv::var("DATABASE_URL").unwrap().as_str())
        .await.unwrap();

    sqlx::migrate!().run(&db_pool).await.unwrap();

    let app_state = AppState {
        db_pool,
        gateways: Gateways::from_env(),
    };

    let app = seeyou::app(app_state);

    let addr = format!(
        "0.0.0.0:{}",
        dotenv::var("PORT").unwrap_or_else(|_| "8080".to_owned())
    );
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
