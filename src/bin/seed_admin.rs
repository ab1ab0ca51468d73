use anyhow::Context;
use solomon::{
    app::init_tracing,
    auth::repo::PgCredentialStore,
    seed::{ensure_admin_exists, SeedOutcome},
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("solomon=info,seed_admin=info");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let db = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("connect to database")?;

    let store = PgCredentialStore::new(db.clone());
    match ensure_admin_exists(&store).await? {
        SeedOutcome::Created => tracing::info!("admin user created"),
        SeedOutcome::AlreadyExists => tracing::info!("admin user already present"),
    }

    db.close().await;
    Ok(())
}
