//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use ppe_core::ProcessType;

#[derive(Debug, Parser)]
#[command(name = "ppe", about = "Challan entry management for PPE Manager", version)]
pub struct Cli {
    /// Suppress log output below errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List entries, newest first.
    List {
        /// Case-insensitive match against party and product name.
        #[arg(long)]
        search: Option<String>,
        /// Exact challan date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Filter by process type.
        #[arg(long)]
        process: Option<ProcessType>,
    },

    /// Fetch a single entry by identifier.
    Get { id: String },

    /// Record a new entry.
    Add(Box<AddArgs>),

    /// Update fields of an existing entry.
    Update(Box<UpdateArgs>),

    /// Delete an entry permanently.
    Delete { id: String },

    /// Show or change the remote display configuration.
    Setup {
        /// Replace the stored project name.
        #[arg(long)]
        project_name: Option<String>,
    },

    /// Check credentials against the login gate.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

/// Raw entry fields as typed; validated before submission.
#[derive(Debug, clap::Args)]
pub struct AddArgs {
    /// Challan date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    #[arg(long, default_value = "")]
    pub challan_number: String,
    /// Company unit name.
    #[arg(long, default_value = "")]
    pub unit: String,
    #[arg(long)]
    pub party_name: String,
    #[arg(long)]
    pub product_name: String,
    #[arg(long, default_value = "")]
    pub width_value: String,
    /// Path to a width measurement photo, uploaded to the media host on submit.
    #[arg(long)]
    pub width_image_file: Option<std::path::PathBuf>,
    #[arg(long, default_value = "")]
    pub length_value: String,
    #[arg(long)]
    pub length_image_file: Option<std::path::PathBuf>,
    #[arg(long, default_value = "")]
    pub height_value: String,
    #[arg(long)]
    pub height_image_file: Option<std::path::PathBuf>,
    /// One of Gold, RoseGold, Black, Gun.
    #[arg(long)]
    pub process_type: String,
    #[arg(long)]
    pub quantity: String,
    #[arg(long, default_value = "")]
    pub balance_qty: String,
    #[arg(long, default_value = "")]
    pub return_quantity: String,
    #[arg(long, default_value = "")]
    pub packing_details: String,
    #[arg(long, default_value = "")]
    pub remarks: String,
    /// Path to a signature image, uploaded to the media host on submit.
    #[arg(long)]
    pub signature_file: Option<std::path::PathBuf>,
    #[arg(long)]
    pub authorized_by: String,
}

#[derive(Debug, clap::Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub challan_number: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub party_name: Option<String>,
    #[arg(long)]
    pub product_name: Option<String>,
    #[arg(long)]
    pub process_type: Option<ProcessType>,
    #[arg(long)]
    pub quantity: Option<u32>,
    #[arg(long)]
    pub balance_qty: Option<u32>,
    #[arg(long)]
    pub return_quantity: Option<u32>,
    #[arg(long)]
    pub packing_details: Option<String>,
    #[arg(long)]
    pub remarks: Option<String>,
    #[arg(long)]
    pub authorized_by: Option<String>,

    /// Path to a replacement width measurement photo.
    #[arg(long)]
    pub width_image_file: Option<std::path::PathBuf>,
    #[arg(long)]
    pub length_image_file: Option<std::path::PathBuf>,
    #[arg(long)]
    pub height_image_file: Option<std::path::PathBuf>,
    /// Path to a replacement signature image.
    #[arg(long)]
    pub signature_file: Option<std::path::PathBuf>,

    /// Remove the stored remarks.
    #[arg(long, conflicts_with = "remarks")]
    pub clear_remarks: bool,
    #[arg(long, conflicts_with = "packing_details")]
    pub clear_packing_details: bool,
    #[arg(long, conflicts_with = "balance_qty")]
    pub clear_balance_qty: bool,
    #[arg(long, conflicts_with = "return_quantity")]
    pub clear_return_quantity: bool,
    #[arg(long, conflicts_with = "signature_file")]
    pub clear_signature: bool,
    #[arg(long, conflicts_with = "width_image_file")]
    pub clear_width_image: bool,
    #[arg(long, conflicts_with = "length_image_file")]
    pub clear_length_image: bool,
    #[arg(long, conflicts_with = "height_image_file")]
    pub clear_height_image: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_command() {
        let cli = Cli::parse_from([
            "ppe",
            "add",
            "--date",
            "2024-06-01",
            "--party-name",
            "Acme",
            "--product-name",
            "Widget",
            "--process-type",
            "Gold",
            "--quantity",
            "10",
            "--authorized-by",
            "J. Doe",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.party_name, "Acme");
        assert_eq!(args.quantity, "10");
    }

    #[test]
    fn parses_measurement_image_flags() {
        let cli = Cli::parse_from([
            "ppe",
            "add",
            "--date",
            "2024-06-01",
            "--party-name",
            "Acme",
            "--product-name",
            "Widget",
            "--process-type",
            "Gold",
            "--quantity",
            "10",
            "--authorized-by",
            "J. Doe",
            "--width-image-file",
            "w.png",
            "--height-image-file",
            "h.png",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.width_image_file.as_deref(), Some(std::path::Path::new("w.png")));
        assert_eq!(args.height_image_file.as_deref(), Some(std::path::Path::new("h.png")));
        assert!(args.length_image_file.is_none());
    }

    #[test]
    fn parses_update_clear_flags() {
        let cli = Cli::parse_from(["ppe", "update", "abc", "--clear-remarks", "--clear-width-image"]);
        let Commands::Update(args) = cli.command else {
            panic!("expected update command");
        };
        assert!(args.clear_remarks);
        assert!(args.clear_width_image);
        assert!(!args.clear_signature);
    }

    #[test]
    fn clear_flag_conflicts_with_set_flag() {
        let result = Cli::try_parse_from(["ppe", "update", "abc", "--remarks", "x", "--clear-remarks"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_list_filters() {
        let cli = Cli::parse_from(["ppe", "list", "--process", "RoseGold", "--date", "2024-06-01"]);
        let Commands::List { process, date, .. } = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(process, Some(ProcessType::RoseGold));
        assert!(date.is_some());
    }
}
