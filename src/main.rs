use clap::Parser;
use lostfound::cli::{
    handle_list, handle_recent, handle_report, handle_reset, handle_search, Cli, Commands,
    ReportAction,
};
use lostfound::report::ReportKind;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report(report) => match report.action {
            ReportAction::Lost {
                item_name,
                category,
                location,
                date,
                details,
                contact_name,
                contact_email,
                json,
            } => handle_report(
                ReportKind::Lost,
                item_name,
                category,
                location,
                date,
                details,
                contact_name,
                contact_email,
                json,
            ),
            ReportAction::Found {
                item_name,
                category,
                location,
                date,
                details,
                contact_name,
                contact_email,
                json,
            } => handle_report(
                ReportKind::Found,
                item_name,
                category,
                location,
                date,
                details,
                contact_name,
                contact_email,
                json,
            ),
        },
        Commands::Search {
            query,
            kind,
            category,
            json,
        } => handle_search(query, kind, category, json),
        Commands::Recent { limit, json } => handle_recent(limit, json),
        Commands::List { json } => handle_list(json),
        Commands::Reset { force } => handle_reset(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
