use ppe_api::{EntryApi, EntryRepository};
use ppe_store::EntryStore;

pub async fn run(id: &str, store: &EntryStore<EntryApi>) -> anyhow::Result<()> {
    // The in-memory list is empty in a fresh process; go straight to the
    // repository for a guaranteed fetch.
    let entry = store.repo().get(id).await?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}
