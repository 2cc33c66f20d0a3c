use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lostfound")]
#[command(version, about = "A local-first lost & found bulletin")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// File a new lost or found report
    Report(ReportCommand),

    /// Search reports by type, category, and free text
    Search {
        /// Query text; `type:` and `category:` prefix tokens are recognized
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,

        /// Report type to match (lost, found, all)
        #[arg(long = "type", value_name = "TYPE", default_value = "all")]
        kind: String,

        /// Category to match exactly, case-insensitive ("all" disables)
        #[arg(long, default_value = "all")]
        category: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most recently filed reports
    Recent {
        /// How many reports to show (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the stored collection in storage order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clear the store and restore the demo data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub action: ReportAction,
}

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// File a lost-item report
    Lost {
        /// Name of the lost item
        item_name: String,

        /// Category label (e.g. "Electronics")
        #[arg(long, default_value = "")]
        category: String,

        /// Where the item was last seen
        #[arg(long, default_value = "")]
        location: String,

        /// Date of the loss (e.g. 2026-01-12)
        #[arg(long, default_value = "")]
        date: String,

        /// Description of the item
        #[arg(long, default_value = "")]
        details: String,

        /// Contact person for the report
        #[arg(long, default_value = "")]
        contact_name: String,

        /// Contact email for the report
        #[arg(long, default_value = "")]
        contact_email: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// File a found-item report
    Found {
        /// Name of the found item
        item_name: String,

        /// Category label (e.g. "Electronics")
        #[arg(long, default_value = "")]
        category: String,

        /// Where the item was found
        #[arg(long, default_value = "")]
        location: String,

        /// Date of the finding (e.g. 2026-01-14)
        #[arg(long, default_value = "")]
        date: String,

        /// Description of the item
        #[arg(long, default_value = "")]
        details: String,

        /// Contact person holding the item
        #[arg(long, default_value = "")]
        contact_name: String,

        /// Contact email for the report
        #[arg(long, default_value = "")]
        contact_email: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
