use std::env;
use std::io;
use std::path::PathBuf;

use crate::config::BulletinConfig;
use crate::error::{LostFoundError, Result};
use crate::query;
use crate::report::{Report, ReportDraft, ReportKind};
use crate::repository::Repository;
use crate::view::ReportView;
use crate::warnings;

/// Find the bulletin root by looking for .lostfound/ or .git/
fn find_store_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".lostfound").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn print_card(view: &ReportView) {
    println!(
        "  ({}) [{}|{}] {} - {} @ {}",
        view.short_id, view.kind, view.status, view.item_name, view.category, view.location
    );
    if !view.details.is_empty() {
        println!("      {}", view.details);
    }
    println!(
        "      filed {} | event {} | contact {}",
        view.filed_at, view.date, view.contact
    );
}

#[allow(clippy::too_many_arguments)]
pub fn handle_report(
    kind: ReportKind,
    item_name: String,
    category: String,
    location: String,
    date: String,
    details: String,
    contact_name: String,
    contact_email: String,
    json: bool,
) -> Result<()> {
    let root = find_store_root();
    let repo = Repository::open(&root)?;
    repo.seed_if_empty()?;

    let draft = ReportDraft {
        item_name,
        category,
        location,
        date,
        details,
        contact_name,
        contact_email,
    };

    // Invalid drafts stop here; nothing is persisted
    let report = Report::new(kind, draft)?;
    repo.append(report.clone())?;

    let count = repo.list_all()?.len();
    for warning in warnings::check_thresholds(count, repo.store().size_on_disk()?) {
        eprintln!("{}", warnings::format_warning(&warning));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let view = ReportView::from(&report);
        println!(
            "Filed {} report ({}) - {} @ {}",
            view.kind, view.short_id, view.item_name, view.location
        );
    }

    Ok(())
}

pub fn handle_search(query: String, kind: String, category: String, json: bool) -> Result<()> {
    let root = find_store_root();
    let repo = Repository::open(&root)?;
    repo.seed_if_empty()?;
    let config = BulletinConfig::load(&root);

    let mut filter = query::parse_query(&query);
    filter.match_category = config.search_category_text;

    // Explicit flags win over prefixes mixed into the query text
    if kind != "all" {
        let parsed = kind
            .parse::<ReportKind>()
            .map_err(|_| LostFoundError::InvalidKind(kind.clone()))?;
        filter.kind = Some(parsed);
    }
    if category != "all" {
        filter.category = Some(category);
    }

    let all = repo.list_all()?;
    let results = query::search(&all, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No matching reports. Try a different keyword or category.");
    } else {
        println!("Reports:\n");
        for report in &results {
            print_card(&ReportView::from(report));
        }
    }

    Ok(())
}

pub fn handle_recent(limit: Option<usize>, json: bool) -> Result<()> {
    let root = find_store_root();
    let repo = Repository::open(&root)?;
    repo.seed_if_empty()?;
    let config = BulletinConfig::load(&root);

    let all = repo.list_all()?;
    let results = query::recent(&all, limit.unwrap_or(config.recent_limit));

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No reports yet. Submit a report to see it here.");
    } else {
        println!("Recently filed:\n");
        for report in &results {
            print_card(&ReportView::from(report));
        }
    }

    Ok(())
}

pub fn handle_list(json: bool) -> Result<()> {
    let root = find_store_root();
    let repo = Repository::open(&root)?;

    // Raw inspection view: no seeding, no sort, exactly what is stored
    let all = repo.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else if all.is_empty() {
        println!("No reports stored.");
    } else {
        println!("Stored reports:\n");
        for report in &all {
            let view = ReportView::from(report);
            println!(
                "  ({}) [{}|{}] {} (filed {})",
                view.short_id, view.kind, view.status, view.item_name, view.filed_at
            );
        }
    }

    Ok(())
}

pub fn handle_reset(force: bool) -> Result<()> {
    let root = find_store_root();
    let repo = Repository::open(&root)?;

    if !force {
        eprintln!("Clear all reports and restore the demo data? [y/N] ");

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(LostFoundError::Storage(
                "Use --force to reset in non-interactive mode".to_string(),
            ));
        }
    }

    repo.reset_all()?;
    println!("Store reset. Demo data restored.");

    Ok(())
}
