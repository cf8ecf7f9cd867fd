use anyhow::Result;
use analytics_log_storage::{DocumentStore, JsonFileStore};
use std::path::PathBuf;

pub(crate) fn run(data_dir: PathBuf) -> Result<()> {
    let store = JsonFileStore::new(data_dir);
    store.ensure_storage()?;
    println!("{}", store.path().display());
    Ok(())
}
