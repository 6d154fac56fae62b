use ppe_api::{EntryApi, EntryUpdateBuilder};
use ppe_store::{capture_signature, EntryStore};

use crate::cli::UpdateArgs;
use crate::commands::images::{image_data_url, upload_optional};

pub async fn run(
    args: UpdateArgs,
    api: &EntryApi,
    store: &mut EntryStore<EntryApi>,
) -> anyhow::Result<()> {
    let mut builder = scalar_update(&args);

    if let Some(url) = upload_optional(api, args.width_image_file.as_deref()).await? {
        builder = builder.width_image(Some(url));
    }
    if let Some(url) = upload_optional(api, args.length_image_file.as_deref()).await? {
        builder = builder.length_image(Some(url));
    }
    if let Some(url) = upload_optional(api, args.height_image_file.as_deref()).await? {
        builder = builder.height_image(Some(url));
    }
    if let Some(path) = &args.signature_file {
        let data_url = image_data_url(path)?;
        builder = builder.signature(Some(capture_signature(api, &data_url).await));
    }

    let entry = store.modify(&args.id, &builder.build()).await?;
    println!("updated {}", entry.id);
    Ok(())
}

/// Everything expressible without touching the media host: set flags map to
/// set fields, clear flags map to explicit nulls.
fn scalar_update(args: &UpdateArgs) -> EntryUpdateBuilder {
    let mut builder = EntryUpdateBuilder::new();
    if let Some(date) = args.date {
        builder = builder.date(date);
    }
    if let Some(challan_number) = &args.challan_number {
        builder = builder.challan_number(challan_number.clone());
    }
    if let Some(unit) = &args.unit {
        builder = builder.unit(unit.clone());
    }
    if let Some(party_name) = &args.party_name {
        builder = builder.party_name(party_name.clone());
    }
    if let Some(product_name) = &args.product_name {
        builder = builder.product_name(product_name.clone());
    }
    if let Some(process_type) = args.process_type {
        builder = builder.process_type(process_type);
    }
    if let Some(quantity) = args.quantity {
        builder = builder.quantity(quantity);
    }
    if let Some(balance_qty) = args.balance_qty {
        builder = builder.balance_qty(Some(balance_qty));
    }
    if let Some(return_quantity) = args.return_quantity {
        builder = builder.return_quantity(Some(return_quantity));
    }
    if let Some(packing_details) = &args.packing_details {
        builder = builder.packing_details(Some(packing_details.clone()));
    }
    if let Some(remarks) = &args.remarks {
        builder = builder.remarks(Some(remarks.clone()));
    }
    if let Some(authorized_by) = &args.authorized_by {
        builder = builder.authorized_by(authorized_by.clone());
    }

    if args.clear_remarks {
        builder = builder.remarks(None);
    }
    if args.clear_packing_details {
        builder = builder.packing_details(None);
    }
    if args.clear_balance_qty {
        builder = builder.balance_qty(None);
    }
    if args.clear_return_quantity {
        builder = builder.return_quantity(None);
    }
    if args.clear_signature {
        builder = builder.signature(None);
    }
    if args.clear_width_image {
        builder = builder.width_image(None);
    }
    if args.clear_length_image {
        builder = builder.length_image(None);
    }
    if args.clear_height_image {
        builder = builder.height_image(None);
    }
    builder
}
