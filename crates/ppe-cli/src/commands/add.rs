use ppe_api::EntryApi;
use ppe_core::EntryDraft;
use ppe_store::{capture_signature, EntryStore};

use crate::cli::AddArgs;
use crate::commands::images::{image_data_url, upload_optional};

pub async fn run(
    args: AddArgs,
    api: &EntryApi,
    store: &mut EntryStore<EntryApi>,
) -> anyhow::Result<()> {
    // Measurement photos must land on the media host; a failed upload fails
    // the command. Only the signature falls back to an inline image.
    let width_image = upload_optional(api, args.width_image_file.as_deref()).await?;
    let length_image = upload_optional(api, args.length_image_file.as_deref()).await?;
    let height_image = upload_optional(api, args.height_image_file.as_deref()).await?;

    let signature = match &args.signature_file {
        Some(path) => {
            let data_url = image_data_url(path)?;
            Some(capture_signature(api, &data_url).await)
        }
        None => None,
    };

    let draft = EntryDraft {
        date: args.date,
        challan_number: args.challan_number,
        unit: args.unit,
        party_name: args.party_name,
        product_name: args.product_name,
        width_value: args.width_value,
        width_image,
        length_value: args.length_value,
        length_image,
        height_value: args.height_value,
        height_image,
        process_type: args.process_type,
        quantity: args.quantity,
        balance_qty: args.balance_qty,
        return_quantity: args.return_quantity,
        packing_details: args.packing_details,
        remarks: args.remarks,
        signature,
        authorized_by: args.authorized_by,
    };

    let new_entry = draft.into_new_entry()?;
    let entry = store.add(&new_entry).await?;
    println!("created {}", entry.id);
    Ok(())
}
