use solomon::{
    app::{build_transactions_app, init_tracing, serve},
    config::TransactionsConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("solomon=debug,transactions_server=info,tower_http=info");

    let cfg = TransactionsConfig::from_env();
    tracing::info!(
        csv = %cfg.csv_path,
        normalize_values = cfg.normalize_values,
        "transaction reader ready"
    );
    let (host, port) = (cfg.host.clone(), cfg.port);

    serve(build_transactions_app(cfg), &host, port).await
}
