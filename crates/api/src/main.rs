#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let app = storefront_api::app::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:7000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
