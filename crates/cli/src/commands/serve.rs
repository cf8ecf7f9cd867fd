use anyhow::Result;
use analytics_log_http::{create_router, AppState};
use analytics_log_service::CollectionService;
use analytics_log_storage::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) async fn run(port: u16, host: String, data_dir: PathBuf) -> Result<()> {
    let store = JsonFileStore::new(data_dir);
    let db_path = store.path().to_path_buf();
    let collections = CollectionService::new(Arc::new(store));
    collections.ensure_storage()?;
    tracing::info!(path = %db_path.display(), "storage ready");

    let router = create_router(Arc::new(AppState::new(collections)));
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Analytics server listening on http://localhost:{port}");
    axum::serve(listener, router).await?;

    Ok(())
}
