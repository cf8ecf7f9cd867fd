use anyhow::Result;
use analytics_log_service::CollectionService;
use analytics_log_storage::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) fn run(collection: &str, data_dir: PathBuf) -> Result<()> {
    let service = CollectionService::new(Arc::new(JsonFileStore::new(data_dir)));
    let records = service.list_records(collection)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
