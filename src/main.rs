use solomon::{
    app::{build_app, init_tracing, serve},
    config::AppConfig,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("solomon=debug,axum=info,tower_http=info");

    let config = AppConfig::from_env()?;
    let (host, port) = (config.host.clone(), config.port);
    if config.distinct_auth_errors {
        tracing::warn!("AUTH_DISTINCT_ERRORS enabled; login errors reveal whether an email exists");
    }

    let app_state = AppState::init(config).await?;
    tracing::info!(pipeline = %app_state.config.pipeline.url, "gateway ready");

    serve(build_app(app_state), &host, port).await
}
