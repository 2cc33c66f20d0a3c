//! Demonstration reports inserted when the store is empty, so first-time
//! users get non-empty search results. Content mirrors a small campus
//! lost & found desk.

use chrono::Utc;
use uuid::Uuid;

use crate::report::{Report, ReportKind, ReportStatus};

fn demo(
    kind: ReportKind,
    item_name: &str,
    category: &str,
    location: &str,
    date: &str,
    details: &str,
    contact_name: &str,
    contact_email: &str,
) -> Report {
    Report {
        id: Uuid::new_v4(),
        kind,
        item_name: item_name.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        details: details.to_string(),
        contact_name: contact_name.to_string(),
        contact_email: contact_email.to_string(),
        status: ReportStatus::for_kind(kind),
        created_at: Utc::now(),
    }
}

/// The fixed demo set: two lost reports and one found report.
pub fn demo_reports() -> Vec<Report> {
    vec![
        demo(
            ReportKind::Lost,
            "Purse",
            "Accessories",
            "Library",
            "2026-01-12",
            "Black purse with small gold chain.",
            "Student",
            "student@campus.edu",
        ),
        demo(
            ReportKind::Lost,
            "Black AirPods Case",
            "Electronics",
            "Cafeteria",
            "2026-01-13",
            "Small case, no AirPods inside.",
            "Student",
            "student@campus.edu",
        ),
        demo(
            ReportKind::Found,
            "Blue Water Bottle",
            "Accessories",
            "Campus Walkway",
            "2026-01-14",
            "Blue bottle, slight scratches.",
            "Reception",
            "reception@campus.edu",
        ),
    ]
}
