use chrono::NaiveDate;

use ppe_api::EntryApi;
use ppe_core::ProcessType;
use ppe_store::{EntryFilter, EntryStore};

pub async fn run(
    search: Option<String>,
    date: Option<NaiveDate>,
    process: Option<ProcessType>,
    store: &mut EntryStore<EntryApi>,
) -> anyhow::Result<()> {
    store.load().await?;

    let filter = EntryFilter {
        search,
        date,
        process_type: process,
    };
    let entries = store.filtered(&filter);

    for entry in &entries {
        println!(
            "{}  {}  {:<10} {:<24} {:<24} qty {}",
            entry.id, entry.date, entry.process_type, entry.party_name, entry.product_name, entry.quantity
        );
    }
    println!(
        "{} {}",
        entries.len(),
        if entries.len() == 1 { "entry" } else { "entries" }
    );
    Ok(())
}
