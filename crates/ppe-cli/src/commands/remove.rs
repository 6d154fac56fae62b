use ppe_api::EntryApi;
use ppe_store::EntryStore;

pub async fn run(id: &str, store: &mut EntryStore<EntryApi>) -> anyhow::Result<()> {
    store.remove(id).await?;
    println!("deleted {id}");
    Ok(())
}
