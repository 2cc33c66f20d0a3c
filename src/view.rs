//! View-models handed to the presentation side: plain display strings, no
//! behavior. Rendering decides layout; nothing here reaches back into the
//! store.

use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub short_id: String,
    pub kind: String,
    pub status: String,
    pub item_name: String,
    pub category: String,
    pub location: String,
    /// User-supplied date of the loss/finding event.
    pub date: String,
    pub details: String,
    pub contact: String,
    /// When the report was filed, formatted for display.
    pub filed_at: String,
}

impl From<&Report> for ReportView {
    fn from(report: &Report) -> Self {
        Self {
            short_id: report.id.to_string()[..7].to_string(),
            kind: report.kind.to_string(),
            status: report.status.to_string(),
            item_name: report.item_name.clone(),
            category: report.category.clone(),
            location: report.location.clone(),
            date: report.date.clone(),
            details: report.details.clone(),
            contact: format!("{} <{}>", report.contact_name, report.contact_email),
            filed_at: report.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}
